use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

pub type PaymentTypeId = u32;

/// A selectable kind of payment, as published by the catalog.
///
/// Values are immutable once created. Two payment types are the same payment type when
/// their ids match, regardless of the display name carried by a given snapshot.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub struct PaymentType {
    /// The unique identifier for the payment type.
    pub id: PaymentTypeId,
    /// Display name, also the target of search queries.
    pub name: String,
}

impl PaymentType {
    pub fn new(id: PaymentTypeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Case-sensitive substring match of `query` against the name.
    /// An empty query matches everything.
    pub fn matches(&self, query: &str) -> bool {
        self.name.contains(query)
    }
}

impl PartialEq for PaymentType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Hash for PaymentType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
