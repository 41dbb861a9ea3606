use anyhow::Context;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub table_name: String,
    /// Secondary index name. Read for deployment parity, lookups go by primary key.
    pub table_index_name: Option<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            table_name: lookup("TABLE_NAME")
                .filter(|v| !v.is_empty())
                .context("TABLE_NAME must be set")?,
            table_index_name: lookup("TABLE_INDEX_NAME").filter(|v| !v.is_empty()),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_name_is_required() {
        let err = Config::from_lookup(|_| None).unwrap_err();
        assert!(err.to_string().contains("TABLE_NAME"));
    }

    #[test]
    fn empty_table_name_is_treated_as_missing() {
        let result = Config::from_lookup(|k| (k == "TABLE_NAME").then(String::new));
        assert!(result.is_err());
    }

    #[test]
    fn index_name_is_optional() {
        let config =
            Config::from_lookup(|k| (k == "TABLE_NAME").then(|| "products".to_string())).unwrap();
        assert_eq!(config.table_name, "products");
        assert_eq!(config.table_index_name, None);
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn port_override() {
        let config = Config::from_lookup(|k| match k {
            "TABLE_NAME" => Some("products".into()),
            "TABLE_INDEX_NAME" => Some("name-index".into()),
            "PORT" => Some("9000".into()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.table_index_name.as_deref(), Some("name-index"));
    }
}
