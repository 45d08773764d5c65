//! Permission gate
//!
//! Route permissions are opaque strings granted by the issuer in the
//! token's `permissions` array.

use serde_json::Value;
use shared::AuthError;

use super::claims::Claims;

pub const GET_DRINKS_DETAIL: &str = "get:drinks-detail";
pub const POST_DRINKS: &str = "post:drinks";
pub const PATCH_DRINKS: &str = "patch:drinks";
pub const DELETE_DRINKS: &str = "delete:drinks";

/// Check that `claims` grant `required`
///
/// | Claims | Result |
/// |--------|--------|
/// | no `permissions` array | 400 `invalid_claims` |
/// | array without `required` | 403 `unauthorized` |
/// | array with `required` | Ok |
pub fn authorize(claims: &Claims, required: &str) -> Result<(), AuthError> {
    let permissions = claims
        .get("permissions")
        .and_then(Value::as_array)
        .ok_or_else(AuthError::permissions_missing)?;

    if permissions.iter().any(|p| p.as_str() == Some(required)) {
        Ok(())
    } else {
        Err(AuthError::unauthorized())
    }
}
