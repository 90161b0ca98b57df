//! Shared helpers for the HTTP-level tests
//!
//! Every helper builds a fresh application, so tests never share records.

#![allow(dead_code)]

use axum_test::TestServer;
use grubdash::prelude::*;
use serde_json::{Value, json};

/// Seed data used by the order tests: one order per status, plus one
/// order that never had a status set.
pub const SEED: &str = r#"
seed:
  dishes:
    - id: d1
      name: Dolcelatte and chickpea spaghetti
      description: Spaghetti topped with a blend of dolcelatte and fresh chickpeas
      price: 19
      image_url: https://images.example.com/spaghetti.jpg
  orders:
    - id: "5"
      deliverTo: 308 Negra Arroyo Lane, Albuquerque, NM
      mobileNumber: (505) 143-3369
      status: pending
      dishes:
        - { dishId: d1, quantity: 2 }
    - id: preparing-1
      deliverTo: 1600 Pennsylvania Avenue NW
      mobileNumber: (202) 456-1111
      status: preparing
      dishes:
        - { dishId: d1, quantity: 1 }
    - id: delivered-1
      deliverTo: Rick Sanchez (C-137)
      mobileNumber: (202) 456-1111
      status: delivered
      dishes:
        - { dishId: d1, quantity: 1 }
    - id: unset-1
      deliverTo: Somewhere
      mobileNumber: "555"
      dishes:
        - { dishId: d1, quantity: 3 }
"#;

/// Server over empty collections
pub fn server() -> TestServer {
    TestServer::new(GrubDash::new().router())
}

/// Server over the collections in [`SEED`]
pub fn seeded_server() -> TestServer {
    let config = AppConfig::from_yaml_str(SEED).unwrap();
    let app = GrubDash::from_config(&config).unwrap();
    TestServer::new(app.router())
}

/// Wrap a payload in the request envelope
pub fn data(payload: Value) -> Value {
    json!({ "data": payload })
}

pub fn valid_dish() -> Value {
    json!({
        "name": "Taco",
        "description": "Spicy",
        "price": 8,
        "image_url": "http://x"
    })
}

pub fn valid_order() -> Value {
    json!({
        "deliverTo": "A",
        "mobileNumber": "1",
        "dishes": [{ "dishId": "d1", "quantity": 1 }]
    })
}

/// Copy of `base` with `field` replaced
pub fn with(mut base: Value, field: &str, value: Value) -> Value {
    base[field] = value;
    base
}

/// Copy of `base` with `field` removed
pub fn without(mut base: Value, field: &str) -> Value {
    if let Some(obj) = base.as_object_mut() {
        obj.remove(field);
    }
    base
}
