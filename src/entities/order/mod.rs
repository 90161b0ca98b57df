//! Order entity module

pub mod descriptor;
pub mod handlers;
pub mod model;
pub mod pipeline;
pub mod service;

pub use descriptor::OrderDescriptor;
pub use handlers::*;
pub use model::{Order, OrderLine, OrderStatus};
pub use service::OrderService;
