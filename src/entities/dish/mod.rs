//! Dish entity module

pub mod descriptor;
pub mod handlers;
pub mod model;
pub mod pipeline;
pub mod service;

pub use descriptor::DishDescriptor;
pub use handlers::*;
pub use model::Dish;
pub use service::DishService;
