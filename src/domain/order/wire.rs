//! Wire types for the `/order` endpoints.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

/// An order as returned by `GET /order` and `POST /order`.
///
/// The backend names the id `_id`; `id` is accepted too. Numbers may arrive
/// as JSON strings (`"7.5"`). Fields beyond these four are ignored.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct OrderResponse {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(rename = "type")]
    pub order_type: String,
    #[serde(deserialize_with = "lenient_number")]
    pub price: f64,
    #[serde(deserialize_with = "lenient_number")]
    pub quantity: f64,
}

impl OrderResponse {
    /// Decode a `GET /order` body row by row.
    ///
    /// A row that does not decode is skipped with a warning; the rest of the
    /// list survives.
    pub fn from_rows(rows: Vec<serde_json::Value>) -> Vec<OrderResponse> {
        rows.into_iter()
            .enumerate()
            .filter_map(|(index, row)| match serde_json::from_value(row) {
                Ok(order) => Some(order),
                Err(e) => {
                    tracing::warn!(index, error = %e, "Skipping undecodable order row");
                    None
                }
            })
            .collect()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

fn lenient_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(n) => Ok(n),
        NumberOrText::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| de::Error::custom(format!("not a number: {text:?}"))),
    }
}

/// Body of `POST /order`. Quantity and price go out as JSON numbers.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NewOrderRequest {
    #[serde(rename = "type")]
    pub order_type: String,
    #[serde(serialize_with = "plain_number")]
    pub quantity: f64,
    #[serde(serialize_with = "plain_number")]
    pub price: f64,
}

/// Whole values are written as integers (`10`, not `10.0`).
fn plain_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_order_response_underscore_id() {
        let json = r#"{"_id":"abc","type":"BUY","price":5,"quantity":10,"__v":0}"#;
        let order: OrderResponse = serde_json::from_str(json).unwrap();
        assert_eq!(order.id, "abc");
        assert_eq!(order.order_type, "BUY");
        assert_eq!(order.price, 5.0);
        assert_eq!(order.quantity, 10.0);
    }

    #[test]
    fn test_order_response_plain_id() {
        let json = r#"{"id":"x1","type":"SELL","price":1.25,"quantity":3}"#;
        let order: OrderResponse = serde_json::from_str(json).unwrap();
        assert_eq!(order.id, "x1");
    }

    #[test]
    fn test_numeric_strings_accepted() {
        let json = r#"{"_id":"s1","type":"BUY","price":"7.5","quantity":" 2 "}"#;
        let order: OrderResponse = serde_json::from_str(json).unwrap();
        assert_eq!(order.price, 7.5);
        assert_eq!(order.quantity, 2.0);
    }

    #[test]
    fn test_from_rows_skips_bad_rows() {
        let rows = vec![
            json!({"_id": "ok", "type": "BUY", "price": 5, "quantity": 10}),
            json!({"_id": "text", "type": "SELL", "price": "seven", "quantity": 1}),
            json!({"_id": "null", "type": "SELL", "price": 1, "quantity": null}),
            json!({"_id": "missing", "type": "BUY", "price": 1}),
            json!("not an object"),
            json!({"_id": "str", "type": "SELL", "price": "7", "quantity": 1}),
        ];
        let ids: Vec<String> = OrderResponse::from_rows(rows)
            .into_iter()
            .map(|o| o.id)
            .collect();
        assert_eq!(ids, ["ok", "str"]);
    }

    #[test]
    fn test_new_order_request_numbers() {
        let body = serde_json::to_value(NewOrderRequest {
            order_type: "BUY".into(),
            quantity: 10.0,
            price: 5.0,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"type": "BUY", "quantity": 10, "price": 5}));
    }

    #[test]
    fn test_new_order_request_keeps_fractions() {
        let json = serde_json::to_string(&NewOrderRequest {
            order_type: "SELL".into(),
            quantity: 0.5,
            price: 12.75,
        })
        .unwrap();
        assert_eq!(json, r#"{"type":"SELL","quantity":0.5,"price":12.75}"#);
    }
}
