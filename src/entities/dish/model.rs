//! Dish record

use crate::core::{Payload, PipelineError, Record, ResourceKind};
use serde::{Deserialize, Serialize};
use serde_json::Number;

/// A dish on the menu
///
/// Dishes are created and updated but never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Kept in the JSON representation it was submitted with
    pub price: Number,
    pub image_url: String,
}

impl Record for Dish {
    const KIND: ResourceKind = ResourceKind::Dish;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Dish {
    /// Build a dish from a payload that passed the create pipeline
    pub fn from_payload(id: String, payload: &Payload) -> Result<Self, PipelineError> {
        Ok(Self {
            id,
            name: text(payload, "name")?,
            description: text(payload, "description")?,
            price: price(payload)?,
            image_url: text(payload, "image_url")?,
        })
    }

    /// Overwrite every mutable field from a payload that passed the update
    /// pipeline. The id never changes.
    pub fn apply(&mut self, payload: &Payload) -> Result<(), PipelineError> {
        self.name = text(payload, "name")?;
        self.description = text(payload, "description")?;
        self.price = price(payload)?;
        self.image_url = text(payload, "image_url")?;
        Ok(())
    }
}

fn text(payload: &Payload, field: &str) -> Result<String, PipelineError> {
    payload
        .text(field)
        .ok_or_else(|| PipelineError::missing_field(ResourceKind::Dish, field))
}

fn price(payload: &Payload) -> Result<Number, PipelineError> {
    payload
        .number("price")
        .ok_or_else(|| PipelineError::invalid_field(ResourceKind::Dish, "price"))
}
