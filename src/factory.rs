// Factory: one shared `Car` interface, concrete types chosen by a model key.

use std::fmt;
use std::str::FromStr;

use log::{debug, warn};
use serde::Deserialize;

use crate::error::{PatternError, SelectorKind};

/// Name and plate, shared by every car variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarBody {
    name: String,
    plate: String,
}

impl CarBody {
    pub fn new(name: impl Into<String>, plate: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            plate: plate.into(),
        }
    }
}

pub trait Car: fmt::Debug {
    fn body(&self) -> &CarBody;
    fn body_mut(&mut self) -> &mut CarBody;
    fn model(&self) -> CarModel;

    fn name(&self) -> &str {
        &self.body().name
    }

    fn set_name(&mut self, name: &str) {
        self.body_mut().name = name.to_string();
    }

    fn plate(&self) -> &str {
        &self.body().plate
    }

    fn set_plate(&mut self, plate: &str) {
        self.body_mut().plate = plate.to_string();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SedanCar(CarBody);

impl Car for SedanCar {
    fn body(&self) -> &CarBody {
        &self.0
    }

    fn body_mut(&mut self) -> &mut CarBody {
        &mut self.0
    }

    fn model(&self) -> CarModel {
        CarModel::Sedan
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HatchbackCar(CarBody);

impl Car for HatchbackCar {
    fn body(&self) -> &CarBody {
        &self.0
    }

    fn body_mut(&mut self) -> &mut CarBody {
        &mut self.0
    }

    fn model(&self) -> CarModel {
        CarModel::Hatchback
    }
}

fn new_kia_k5() -> Box<dyn Car> {
    Box::new(SedanCar(CarBody::new("Kia K5", "ABCD")))
}

fn new_hyundai_i30() -> Box<dyn Car> {
    Box::new(HatchbackCar(CarBody::new("Hyundai i30", "EFGH")))
}

/// The factory method. Unknown model keys yield `None`.
pub fn get_car(model: &str) -> Option<Box<dyn Car>> {
    match CarModel::lookup(model) {
        Some(kind) => {
            let car = kind.build();
            debug!("[CarStore] built {} for model '{}'", car.name(), model);
            Some(car)
        }
        None => {
            warn!("[CarStore] unknown model '{}'", model);
            None
        }
    }
}

/// Same as [`get_car`], but an unknown key becomes a typed error.
pub fn try_get_car(model: &str) -> Result<Box<dyn Car>, PatternError> {
    get_car(model).ok_or_else(|| PatternError::unknown_key(SelectorKind::CarModel, model))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum CarModel {
    Sedan,
    Hatchback,
}

impl CarModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            CarModel::Sedan => "sedan",
            CarModel::Hatchback => "hatchback",
        }
    }

    fn lookup(key: &str) -> Option<CarModel> {
        CAR_MODELS
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, model)| *model)
    }

    pub fn build(&self) -> Box<dyn Car> {
        match self {
            CarModel::Sedan => new_kia_k5(),
            CarModel::Hatchback => new_hyundai_i30(),
        }
    }
}

static CAR_MODELS: &[(&str, CarModel)] = &[
    ("sedan", CarModel::Sedan),
    ("hatchback", CarModel::Hatchback),
];

impl fmt::Display for CarModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CarModel {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CarModel::lookup(s).ok_or_else(|| PatternError::unknown_key(SelectorKind::CarModel, s))
    }
}

impl TryFrom<String> for CarModel {
    type Error = PatternError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_sedan() {
        let car = get_car("sedan").expect("sedan is a known model");
        assert_eq!(car.name(), "Kia K5");
        assert_eq!(car.plate(), "ABCD");
        assert_eq!(car.model(), CarModel::Sedan);
    }

    #[test]
    fn test_hatchback() {
        let car = get_car("hatchback").expect("hatchback is a known model");
        assert_eq!(car.name(), "Hyundai i30");
        assert_eq!(car.plate(), "EFGH");
        assert_eq!(car.model(), CarModel::Hatchback);
    }

    #[test]
    fn test_unknown_model_is_absent() {
        assert!(get_car("suv").is_none());

        let err = try_get_car("suv").unwrap_err();
        assert!(err.is_unknown_key());
        assert_eq!(err.to_string(), "unrecognized car model key: 'suv'");
    }

    #[test]
    fn test_setters_only_touch_one_car() {
        let mut mine = get_car("sedan").unwrap();
        mine.set_name("Kia K5 GT");
        mine.set_plate("ZZ-9000");

        assert_eq!(mine.name(), "Kia K5 GT");
        assert_eq!(mine.plate(), "ZZ-9000");

        let fresh = get_car("sedan").unwrap();
        assert_eq!(fresh.name(), "Kia K5");
        assert_eq!(fresh.plate(), "ABCD");
    }

    #[test]
    fn test_model_selector() {
        assert_eq!("sedan".parse::<CarModel>().unwrap(), CarModel::Sedan);
        assert_eq!("hatchback".parse::<CarModel>().unwrap(), CarModel::Hatchback);
        assert!("pickup".parse::<CarModel>().is_err());

        for model in [CarModel::Sedan, CarModel::Hatchback] {
            let from_table = get_car(model.as_str()).unwrap();
            assert_eq!(from_table.body(), model.build().body());
        }
    }

    #[test]
    fn test_table_keys_match_selector_names() {
        for (key, model) in CAR_MODELS {
            assert_eq!(model.as_str(), *key);
            assert_eq!(key.parse::<CarModel>().unwrap(), *model);
            assert_eq!(get_car(key).unwrap().model(), *model);
        }
        assert_eq!(CAR_MODELS.len(), 2);
    }

    proptest! {
        #[test]
        fn test_only_table_keys_build(key in "[a-z]{0,12}") {
            let known = key == "sedan" || key == "hatchback";
            prop_assert_eq!(get_car(&key).is_some(), known);
        }

        #[test]
        fn test_repeated_calls_are_value_equal(pick in 0usize..2) {
            let key = ["sedan", "hatchback"][pick];
            let first = get_car(key).unwrap();
            let second = get_car(key).unwrap();
            prop_assert_eq!(first.body(), second.body());
        }
    }
}
