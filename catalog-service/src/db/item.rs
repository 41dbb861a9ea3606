//! Product <-> DynamoDB item mapping: `{ id: S, name: S, price: N }`.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use thiserror::Error;

use crate::models::Product;

pub type Item = HashMap<String, AttributeValue>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("attribute `{0}` has the wrong type")]
    WrongType(&'static str),

    #[error("attribute `{0}` is not an integer: {1:?}")]
    InvalidNumber(&'static str, String),
}

pub fn to_item(product: &Product) -> Item {
    HashMap::from([
        ("id".to_string(), AttributeValue::S(product.id.clone())),
        ("name".to_string(), AttributeValue::S(product.name.clone())),
        ("price".to_string(), AttributeValue::N(product.price.to_string())),
    ])
}

/// Absent attributes decode to their zero value; present ones must have the right type.
pub fn from_item(item: &Item) -> Result<Product, DecodeError> {
    Ok(Product {
        id: string_attr(item, "id")?,
        name: string_attr(item, "name")?,
        price: int_attr(item, "price")?,
    })
}

fn string_attr(item: &Item, key: &'static str) -> Result<String, DecodeError> {
    match item.get(key) {
        None | Some(AttributeValue::Null(_)) => Ok(String::new()),
        Some(AttributeValue::S(s)) => Ok(s.clone()),
        Some(_) => Err(DecodeError::WrongType(key)),
    }
}

fn int_attr(item: &Item, key: &'static str) -> Result<i64, DecodeError> {
    match item.get(key) {
        None | Some(AttributeValue::Null(_)) => Ok(0),
        Some(AttributeValue::N(n)) => n
            .parse()
            .map_err(|_| DecodeError::InvalidNumber(key, n.clone())),
        Some(_) => Err(DecodeError::WrongType(key)),
    }
}
