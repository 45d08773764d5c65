//! API Response types
//!
//! Success bodies for the drinks routes. The list routes keep the legacy
//! `"success": "True"` string; the write routes use a JSON boolean.

use serde::{Deserialize, Serialize};

use crate::models::{DrinkLong, DrinkShort};

/// Value of `success` on the list routes
pub const LEGACY_SUCCESS: &str = "True";

/// `GET /drinks` and `GET /drinks-detail`
///
/// ```json
/// { "success": "True", "drinks": [ ... ] }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrinkListResponse<T> {
    pub success: String,
    pub drinks: Vec<T>,
}

impl<T> DrinkListResponse<T> {
    pub fn new(drinks: Vec<T>) -> Self {
        Self {
            success: LEGACY_SUCCESS.to_string(),
            drinks,
        }
    }
}

pub type ShortListResponse = DrinkListResponse<DrinkShort>;
pub type LongListResponse = DrinkListResponse<DrinkLong>;

/// `POST /drinks`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrinkCreatedResponse {
    pub success: bool,
    pub drink: DrinkLong,
}

impl DrinkCreatedResponse {
    pub fn new(drink: DrinkLong) -> Self {
        Self {
            success: true,
            drink,
        }
    }
}

/// `PATCH /drinks/{id}`: the updated drink wrapped in a one-element array
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrinkUpdatedResponse {
    pub success: bool,
    pub drinks: Vec<DrinkLong>,
}

impl DrinkUpdatedResponse {
    pub fn new(drink: DrinkLong) -> Self {
        Self {
            success: true,
            drinks: vec![drink],
        }
    }
}

/// `DELETE /drinks/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrinkDeletedResponse {
    pub success: bool,
    pub delete: i64,
}

impl DrinkDeletedResponse {
    pub fn new(id: i64) -> Self {
        Self {
            success: true,
            delete: id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_response_uses_legacy_success_string() {
        let body = serde_json::to_value(ShortListResponse::new(vec![])).unwrap();
        assert_eq!(body, json!({"success": "True", "drinks": []}));
    }

    #[test]
    fn test_deleted_response_shape() {
        let body = serde_json::to_value(DrinkDeletedResponse::new(7)).unwrap();
        assert_eq!(body, json!({"success": true, "delete": 7}));
    }
}
