//! Reusable field validators
//!
//! Each factory returns a pipeline stage for any record type. The resource
//! kind reported in failures comes from the record type.

use crate::core::entity::Record;
use crate::core::error::PipelineError;
use crate::core::payload::{display_value, is_truthy};
use crate::core::pipeline::{StageContext, StageResult};
use serde_json::Value;

/// Validator: field is present and truthy
///
/// Falsy-but-meaningful values (`0`, `""`, `false`) count as missing.
pub fn present<T: Record>(
    field: &'static str,
) -> impl Fn(&StageContext<T>) -> StageResult + Send + Sync + Clone {
    move |ctx: &StageContext<T>| {
        if ctx.payload().is_truthy(field) {
            Ok(())
        } else {
            Err(PipelineError::missing_field(T::KIND, field))
        }
    }
}

/// Validator: field is not exactly the empty string
///
/// Any other value, including non-strings, passes.
pub fn non_empty<T: Record>(
    field: &'static str,
) -> impl Fn(&StageContext<T>) -> StageResult + Send + Sync + Clone {
    move |ctx: &StageContext<T>| match ctx.payload().get(field) {
        Some(Value::String(s)) if s.is_empty() => {
            Err(PipelineError::invalid_field(T::KIND, field))
        }
        _ => Ok(()),
    }
}

/// Validator: field is a JSON number greater than or equal to zero
pub fn price<T: Record>(
    field: &'static str,
) -> impl Fn(&StageContext<T>) -> StageResult + Send + Sync + Clone {
    move |ctx: &StageContext<T>| {
        if ctx.payload().get(field).is_some_and(is_valid_price) {
            Ok(())
        } else {
            Err(PipelineError::invalid_field(T::KIND, field))
        }
    }
}

/// Validator: field is a non-empty array of lines with positive integer quantities
pub fn order_lines<T: Record>(
    field: &'static str,
) -> impl Fn(&StageContext<T>) -> StageResult + Send + Sync + Clone {
    move |ctx: &StageContext<T>| {
        let lines = match ctx.payload().array(field) {
            Some(lines) if !lines.is_empty() => lines,
            _ => return Err(PipelineError::invalid_field(T::KIND, field)),
        };

        match first_invalid_quantity(lines) {
            Some(index) => Err(PipelineError::InvalidDishQuantity { index }),
            None => Ok(()),
        }
    }
}

/// Validator: a truthy payload id must equal the route id
///
/// An absent or falsy payload id is accepted.
pub fn matches_route_id<T: Record>() -> impl Fn(&StageContext<T>) -> StageResult + Send + Sync + Clone
{
    |ctx: &StageContext<T>| {
        let Some(payload_id) = ctx.payload().get("id").filter(|v| is_truthy(v)) else {
            return Ok(());
        };
        let route_id = ctx.route_id().unwrap_or_default();

        if payload_id.as_str() == Some(route_id) {
            Ok(())
        } else {
            Err(PipelineError::IdMismatch {
                kind: T::KIND,
                payload_id: display_value(payload_id),
                route_id: route_id.to_string(),
            })
        }
    }
}

/// A price is a JSON number that is not negative
pub fn is_valid_price(value: &Value) -> bool {
    value.as_f64().is_some_and(|n| n >= 0.0)
}

/// A quantity is an integral JSON number strictly greater than zero
///
/// Integers are checked exactly; floats count when they have no fractional
/// part, so `2.0` and `1e20` are integers.
pub fn is_valid_quantity(value: &Value) -> bool {
    let Value::Number(n) = value else {
        return false;
    };
    if let Some(n) = n.as_u64() {
        return n > 0;
    }
    if n.is_i64() {
        return false;
    }
    n.as_f64().is_some_and(|n| n > 0.0 && n.fract() == 0.0)
}

/// Index of the first line without a valid `quantity`
pub fn first_invalid_quantity(lines: &[Value]) -> Option<usize> {
    lines.iter().position(|line| {
        !line
            .as_object()
            .and_then(|obj| obj.get("quantity"))
            .is_some_and(is_valid_quantity)
    })
}
