//! Configuration loading and management

use crate::core::{Payload, Pipeline, Record, StageContext};
use crate::entities::{Dish, Order, dish, order};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("duplicate {kind} id in seed data: {id}")]
    DuplicateSeedId { kind: String, id: String },

    #[error("invalid {kind} '{id}' in seed data: {message}")]
    InvalidSeed {
        kind: String,
        id: String,
        message: String,
    },
}

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Answer cross-origin requests from any origin
    pub cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            cors: true,
        }
    }
}

impl ServerConfig {
    /// Address to bind, as `host:port`
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Records loaded into the stores at startup
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedData {
    pub dishes: Vec<Dish>,
    pub orders: Vec<Order>,
}

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub seed: SeedData,
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that seed ids are unique within each collection and that every
    /// seed record passes the same field rules as a created one
    pub fn validate(&self) -> Result<(), ConfigError> {
        unique_ids(&self.seed.dishes)?;
        unique_ids(&self.seed.orders)?;
        valid_fields(&self.seed.dishes, &dish::pipeline::create_pipeline())?;
        valid_fields(&self.seed.orders, &order::pipeline::create_pipeline())
    }
}

fn unique_ids<T: Record>(records: &[T]) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for record in records {
        if !seen.insert(record.id()) {
            return Err(ConfigError::DuplicateSeedId {
                kind: T::KIND.to_string(),
                id: record.id().to_string(),
            });
        }
    }
    Ok(())
}

fn valid_fields<T: Record>(records: &[T], pipeline: &Pipeline<T>) -> Result<(), ConfigError> {
    for record in records {
        let invalid = |message: String| ConfigError::InvalidSeed {
            kind: T::KIND.to_string(),
            id: record.id().to_string(),
            message,
        };
        let data = serde_json::to_value(record).map_err(|e| invalid(e.to_string()))?;
        let ctx = StageContext::new(Payload::from_data(data));
        pipeline.run(&ctx).map_err(|e| invalid(e.to_string()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::OrderStatus;

    const SAMPLE: &str = r#"
server:
  host: 0.0.0.0
  port: 8080
seed:
  dishes:
    - id: 3c637d011d844ebab1205fef8a7e36ea
      name: Century Eggs
      description: Whole eggs preserved in clay and ash for a few months
      price: 17
      image_url: https://images.example.com/eggs.jpg
  orders:
    - id: f6069a542257054114138301947672ba
      deliverTo: 1600 Pennsylvania Avenue NW, Washington, DC 20500
      mobileNumber: (202) 456-1111
      status: out-for-delivery
      dishes:
        - id: 90c3d873684bf381dfab29034b5bba73
          name: Falafel and tahini bagel
          price: 6
          quantity: 1
"#;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.addr(), "127.0.0.1:5000");
        assert!(config.server.cors);
        assert!(config.seed.dishes.is_empty());
    }

    #[test]
    fn test_from_yaml_str() {
        let config = AppConfig::from_yaml_str(SAMPLE).unwrap();

        assert_eq!(config.server.addr(), "0.0.0.0:8080");
        assert!(config.server.cors);
        assert_eq!(config.seed.dishes.len(), 1);
        assert_eq!(config.seed.dishes[0].name, "Century Eggs");
        assert_eq!(
            config.seed.orders[0].status,
            Some(OrderStatus::OutForDelivery)
        );
        assert_eq!(config.seed.orders[0].dishes[0].quantity.as_u64(), Some(1));
    }

    #[test]
    fn test_empty_yaml_is_default() {
        let config = AppConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_duplicate_seed_ids_rejected() {
        let yaml = r#"
seed:
  dishes:
    - { id: a, name: x, description: y, price: 1, image_url: z }
    - { id: a, name: x, description: y, price: 2, image_url: z }
"#;
        let err = AppConfig::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateSeedId { .. }));
        assert_eq!(err.to_string(), "duplicate Dish id in seed data: a");
    }

    #[test]
    fn test_seed_records_follow_field_rules() {
        let cases = [
            (
                "dishes:\n    - { id: a, name: x, description: y, price: -1, image_url: z }",
                "invalid Dish 'a' in seed data: Dish must have a price that is an integer greater than 0",
            ),
            (
                "orders:\n    - { id: o1, deliverTo: a, mobileNumber: b, dishes: [] }",
                "invalid Order 'o1' in seed data: Order must include at least one dish",
            ),
            (
                "orders:\n    - { id: o1, deliverTo: a, mobileNumber: b, dishes: [{ quantity: 0 }] }",
                "invalid Order 'o1' in seed data: dish 0 must have a quantity that is an integer greater than 0",
            ),
        ];

        for (seed, message) in cases {
            let err = AppConfig::from_yaml_str(&format!("seed:\n  {seed}\n")).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidSeed { .. }));
            assert_eq!(err.to_string(), message);
        }
    }

    #[test]
    fn test_yaml_serialization() {
        let config = AppConfig::from_yaml_str(SAMPLE).unwrap();
        let yaml = serde_yaml::to_string(&config).unwrap();

        let parsed = AppConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_missing_file() {
        let err = AppConfig::from_yaml_file("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
