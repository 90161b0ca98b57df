//! Order record

use crate::core::{Payload, PipelineError, Record, ResourceKind};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::fmt;

/// Lifecycle of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    Pending,
    Preparing,
    OutForDelivery,
    Delivered,
}

impl OrderStatus {
    /// Every status, in lifecycle order
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::OutForDelivery => "out-for-delivery",
            OrderStatus::Delivered => "delivered",
        }
    }

    /// Parse one of the canonical status strings (exact match)
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == s)
    }

    /// Delivered orders can no longer be changed or removed
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of an order
///
/// Keys other than `dishId` and `quantity` (a copy of the dish, for
/// instance) are kept as submitted. The quantity keeps the JSON number it
/// was submitted with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    #[serde(rename = "dishId", default, skip_serializing_if = "Option::is_none")]
    pub dish_id: Option<String>,
    pub quantity: Number,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl OrderLine {
    /// Build a line from a validated JSON element
    pub fn from_value(value: &Value) -> Option<Self> {
        let mut extra = value.as_object()?.clone();
        let quantity = match extra.remove("quantity")? {
            Value::Number(n) => n,
            _ => return None,
        };
        let dish_id = match extra.remove("dishId") {
            Some(Value::String(id)) => Some(id),
            Some(other) => {
                extra.insert("dishId".to_string(), other);
                None
            }
            None => None,
        };

        Some(Self {
            dish_id,
            quantity,
            extra,
        })
    }
}

/// A customer order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub deliver_to: String,
    pub mobile_number: String,
    /// Unset until the first update
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    pub dishes: Vec<OrderLine>,
}

impl Record for Order {
    const KIND: ResourceKind = ResourceKind::Order;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Order {
    /// Build an order from a payload that passed the create pipeline
    ///
    /// New orders carry no status.
    pub fn from_payload(id: String, payload: &Payload) -> Result<Self, PipelineError> {
        Ok(Self {
            id,
            deliver_to: text(payload, "deliverTo")?,
            mobile_number: text(payload, "mobileNumber")?,
            status: None,
            dishes: lines(payload)?,
        })
    }

    /// Overwrite every mutable field from a payload that passed the update
    /// pipeline. The id never changes.
    pub fn apply(&mut self, payload: &Payload) -> Result<(), PipelineError> {
        let status = payload
            .get("status")
            .and_then(Value::as_str)
            .and_then(OrderStatus::parse)
            .ok_or(PipelineError::InvalidStatus)?;

        self.deliver_to = text(payload, "deliverTo")?;
        self.mobile_number = text(payload, "mobileNumber")?;
        self.status = Some(status);
        self.dishes = lines(payload)?;
        Ok(())
    }

    /// Whether the order may still be removed (pending or never set)
    pub fn is_deletable(&self) -> bool {
        matches!(self.status, None | Some(OrderStatus::Pending))
    }
}

fn text(payload: &Payload, field: &str) -> Result<String, PipelineError> {
    payload
        .text(field)
        .ok_or_else(|| PipelineError::missing_field(ResourceKind::Order, field))
}

fn lines(payload: &Payload) -> Result<Vec<OrderLine>, PipelineError> {
    let values = payload
        .array("dishes")
        .filter(|values| !values.is_empty())
        .ok_or_else(|| PipelineError::invalid_field(ResourceKind::Order, "dishes"))?;

    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            OrderLine::from_value(value).ok_or(PipelineError::InvalidDishQuantity { index })
        })
        .collect()
}
