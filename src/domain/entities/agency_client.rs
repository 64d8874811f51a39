//! Agency client entity - a managed account in agency mode

use crate::domain::value_objects::{ClientId, UserId};

/// A client managed by an agency user.
///
/// Clients link to the voice packs the agency writes with on their behalf;
/// the links live in the repository, not on the entity.
#[derive(Debug, Clone)]
pub struct AgencyClient {
    pub id: ClientId,
    pub user_id: UserId,
    pub name: String,
    pub notes: Option<String>,
}

impl AgencyClient {
    pub fn new(user_id: UserId, name: impl Into<String>) -> Self {
        Self {
            id: ClientId::new(),
            user_id,
            name: name.into(),
            notes: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}
