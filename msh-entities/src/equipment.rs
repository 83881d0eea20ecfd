use crate::{id::*, time::*};

/// An entry of the equipment catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equipment {
    pub id: Id,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
