//! Record traits shared by every resource collection

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// The kind of resource a record, a failure or a route belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Dish,
    Order,
}

impl ResourceKind {
    /// Capitalised name used in user-facing messages ("Dish", "Order")
    pub fn label(&self) -> &'static str {
        match self {
            ResourceKind::Dish => "Dish",
            ResourceKind::Order => "Order",
        }
    }

    /// The plural resource name used in URLs
    pub fn plural(&self) -> &'static str {
        match self {
            ResourceKind::Dish => "dishes",
            ResourceKind::Order => "orders",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Base trait for every record kept in a store.
///
/// A record is identified by an opaque string id which is assigned once at
/// creation and never reassigned.
pub trait Record: Clone + Serialize + Send + Sync + 'static {
    /// The resource kind of this record type
    const KIND: ResourceKind;

    /// Get the unique identifier of this record
    fn id(&self) -> &str;
}

/// Generate a fresh record identifier (32 lowercase hex characters).
pub fn next_id() -> String {
    Uuid::new_v4().simple().to_string()
}
