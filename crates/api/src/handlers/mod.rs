//! HTTP handlers, one module per resource.
//!
//! Request-shape invariants (id absent on create, present and matching on
//! update) are checked here, before any store access.

pub mod attributes;
pub mod character;
pub mod game;

use realmbuilder_core::error::CoreError;
use realmbuilder_core::types::DbId;

/// Reject create payloads that pre-set an id; the store assigns ids.
pub(crate) fn validate_create_id(
    body_id: Option<DbId>,
    entity: &'static str,
) -> Result<(), CoreError> {
    if body_id.is_some() {
        return Err(CoreError::Validation(format!(
            "a new {entity} cannot already have an id"
        )));
    }
    Ok(())
}

/// Require the payload id on update/patch requests and require it to equal
/// the path id.
pub(crate) fn validate_update_id(path_id: DbId, body_id: Option<DbId>) -> Result<(), CoreError> {
    match body_id {
        None => Err(CoreError::Validation("payload id is missing".to_string())),
        Some(id) if id != path_id => Err(CoreError::Validation(format!(
            "payload id {id} does not match path id {path_id}"
        ))),
        Some(_) => Ok(()),
    }
}
