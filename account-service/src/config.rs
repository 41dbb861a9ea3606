use std::fmt;

use anyhow::Context;
use sqlx::mysql::MySqlConnectOptions;

#[derive(Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub mysql_host: String,
    pub mysql_port: u16,
    pub mysql_user: String,
    pub mysql_password: String,
    pub mysql_dbname: String,
    /// Apply the bundled `migrations/` before serving.
    pub run_migrations: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup, so tests don't touch the process env.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .with_context(|| format!("{key} must be set"))
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            mysql_host: required("MYSQL_HOST")?,
            mysql_port: required("MYSQL_PORT")?
                .parse()
                .context("MYSQL_PORT must be a valid number")?,
            mysql_user: required("MYSQL_USER")?,
            mysql_password: required("MYSQL_PASSWORD")?,
            mysql_dbname: required("MYSQL_DBNAME")?,
            run_migrations: lookup("MYSQL_RUN_MIGRATIONS")
                .map(|v| v.parse())
                .transpose()
                .context("MYSQL_RUN_MIGRATIONS must be true or false")?
                .unwrap_or(false),
        })
    }

    pub fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.mysql_host)
            .port(self.mysql_port)
            .username(&self.mysql_user)
            .password(&self.mysql_password)
            .database(&self.mysql_dbname)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("mysql_host", &self.mysql_host)
            .field("mysql_port", &self.mysql_port)
            .field("mysql_user", &self.mysql_user)
            .field("mysql_password", &"***")
            .field("mysql_dbname", &self.mysql_dbname)
            .field("run_migrations", &self.run_migrations)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn full() -> HashMap<String, String> {
        env(&[
            ("MYSQL_HOST", "db.internal"),
            ("MYSQL_PORT", "3306"),
            ("MYSQL_USER", "app"),
            ("MYSQL_PASSWORD", "secret"),
            ("MYSQL_DBNAME", "accounts"),
        ])
    }

    #[test]
    fn defaults_bind_to_8080() {
        let vars = full();
        let config = Config::from_lookup(|k| vars.get(k).cloned()).unwrap();
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
        assert_eq!(config.mysql_port, 3306);
        assert!(!config.run_migrations);
    }

    #[test]
    fn missing_database_name_is_fatal() {
        let mut vars = full();
        vars.remove("MYSQL_DBNAME");
        let err = Config::from_lookup(|k| vars.get(k).cloned()).unwrap_err();
        assert!(err.to_string().contains("MYSQL_DBNAME"));
    }

    #[test]
    fn non_numeric_port_is_rejected() {
        let mut vars = full();
        vars.insert("MYSQL_PORT".into(), "mysql".into());
        assert!(Config::from_lookup(|k| vars.get(k).cloned()).is_err());
    }

    #[test]
    fn migrations_flag_parses() {
        let mut vars = full();
        vars.insert("MYSQL_RUN_MIGRATIONS".into(), "true".into());
        let config = Config::from_lookup(|k| vars.get(k).cloned()).unwrap();
        assert!(config.run_migrations);
    }

    #[test]
    fn debug_hides_password() {
        let vars = full();
        let config = Config::from_lookup(|k| vars.get(k).cloned()).unwrap();
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("secret"));
    }
}
