use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// A catalog entry, keyed by the caller-supplied `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: i64,
}

// ── Request payloads ─────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateProduct {
    pub requestid: String,
    pub uuid: String,
    pub id: String,
    pub name: String,
    /// Absent or null price is stored as 0.
    pub price: Option<i64>,
}

impl CreateProduct {
    pub fn check(&self) -> AppResult<()> {
        if self.requestid.is_empty()
            || self.uuid.is_empty()
            || self.id.is_empty()
            || self.name.is_empty()
        {
            return Err(AppError::Validation(
                "all fields (requestid, uuid, id, name, price) are required".to_string(),
            ));
        }
        Ok(())
    }

    pub fn into_product(self) -> Product {
        Product {
            id: self.id,
            name: self.name,
            price: self.price.unwrap_or_default(),
        }
    }
}

// ── Query parameters ──────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ProductLookup {
    pub id: String,
    pub requestid: String,
    pub uuid: String,
}

impl ProductLookup {
    pub fn check(&self) -> AppResult<()> {
        if self.id.is_empty() || self.requestid.is_empty() || self.uuid.is_empty() {
            return Err(AppError::Validation(
                "query parameters (id, requestid, uuid) are required".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_price_defaults_to_zero() {
        let payload: CreateProduct =
            serde_json::from_str(r#"{"requestid":"r1","uuid":"u1","id":"p1","name":"Widget"}"#)
                .unwrap();
        assert!(payload.check().is_ok());
        assert_eq!(payload.into_product().price, 0);
    }

    #[test]
    fn null_price_is_stored_as_zero() {
        let payload: CreateProduct = serde_json::from_str(
            r#"{"requestid":"r1","uuid":"u1","id":"p1","name":"Widget","price":null}"#,
        )
        .unwrap();
        assert!(payload.check().is_ok());
        assert_eq!(payload.into_product().price, 0);
    }

    #[test]
    fn empty_name_fails() {
        let payload = CreateProduct {
            requestid: "r1".into(),
            uuid: "u1".into(),
            id: "p1".into(),
            name: String::new(),
            price: Some(10),
        };
        assert!(matches!(payload.check(), Err(AppError::Validation(_))));
    }

    #[test]
    fn lookup_needs_id() {
        let lookup = ProductLookup {
            id: String::new(),
            requestid: "r1".into(),
            uuid: "u1".into(),
        };
        assert!(lookup.check().is_err());
    }
}
