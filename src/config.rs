//! Settings for the demo binaries.
//!
//! The defaults ship inside the crate (`patterns.toml`, pulled in with
//! `include_str!`), so the demos never touch the filesystem.

use serde::Deserialize;

use crate::abstract_factory::FurnitureFamily;
use crate::error::{PatternError, Result};
use crate::factory::CarModel;
use crate::strategy::RouterKind;

const EMBEDDED: &str = include_str!("../patterns.toml");

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub furniture_store: FurnitureStoreConfig,
    pub car_store: CarStoreConfig,
    pub singleton: SingletonConfig,
    pub navigator: NavigatorConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FurnitureStoreConfig {
    pub families: Vec<FurnitureFamily>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CarStoreConfig {
    pub models: Vec<CarModel>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SingletonConfig {
    /// Threads racing for the instance in the demo.
    pub callers: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NavigatorConfig {
    pub trips: Vec<Trip>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Trip {
    pub router: RouterKind,
    pub origin: String,
    pub destination: String,
}

impl Trip {
    fn new(router: RouterKind, origin: &str, destination: &str) -> Self {
        Self {
            router,
            origin: origin.to_string(),
            destination: destination.to_string(),
        }
    }
}

impl Default for FurnitureStoreConfig {
    fn default() -> Self {
        Self {
            families: vec![FurnitureFamily::Modern, FurnitureFamily::Victorian],
        }
    }
}

impl Default for CarStoreConfig {
    fn default() -> Self {
        Self {
            models: vec![CarModel::Sedan, CarModel::Hatchback],
        }
    }
}

impl Default for SingletonConfig {
    fn default() -> Self {
        Self { callers: 30 }
    }
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            trips: vec![
                Trip::new(RouterKind::Bicycle, "PointA", "PointB"),
                Trip::new(RouterKind::Bus, "PointA", "PointC"),
                Trip::new(RouterKind::Car, "PointD", "PointA"),
            ],
        }
    }
}

impl DemoConfig {
    /// The settings compiled into the crate.
    pub fn embedded() -> Result<Self> {
        Self::from_toml_str(EMBEDDED)
    }

    /// Parse and validate. Missing sections keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: DemoConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.furniture_store.families.is_empty() {
            return Err(PatternError::invalid_config(
                "furniture_store.families",
                "at least one family is required",
            ));
        }
        if self.car_store.models.is_empty() {
            return Err(PatternError::invalid_config(
                "car_store.models",
                "at least one model is required",
            ));
        }
        if self.singleton.callers == 0 {
            return Err(PatternError::invalid_config(
                "singleton.callers",
                "must be at least 1",
            ));
        }
        if self.navigator.trips.is_empty() {
            return Err(PatternError::invalid_config(
                "navigator.trips",
                "at least one trip is required",
            ));
        }
        Ok(())
    }
}
