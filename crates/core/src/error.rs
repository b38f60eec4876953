use crate::store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    /// The requested operation would break a slot invariant.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

impl CoreError {
    /// Shorthand for a missing slot.
    pub fn slot_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: crate::types::SLOT_ENTITY,
            id: id.into(),
        }
    }
}
