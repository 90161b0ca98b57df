//! Entities module - contains the dish and order resources

pub mod dish;
pub mod order;

// Re-export models for convenience
pub use dish::Dish;
pub use order::{Order, OrderLine, OrderStatus};
