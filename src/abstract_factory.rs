// Abstract Factory: families of related furniture without naming concrete types.
// Client code picks a family once and then only talks to `Chair` / `Sofa`.

use std::fmt;
use std::str::FromStr;

use log::{debug, warn};
use serde::Deserialize;

use crate::error::{PatternError, SelectorKind};

// ============================================================================
// Shared product data
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FurnitureKind {
    Chair,
    Sofa,
}

impl fmt::Display for FurnitureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FurnitureKind::Chair => f.write_str("chair"),
            FurnitureKind::Sofa => f.write_str("sofa"),
        }
    }
}

/// The attributes every piece carries. Variants embed one of these by value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Furniture {
    kind: FurnitureKind,
    name: String,
    launch_year: u16,
    number_of_legs: u16,
}

impl Furniture {
    pub fn new(
        kind: FurnitureKind,
        name: impl Into<String>,
        launch_year: u16,
        number_of_legs: u16,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            launch_year,
            number_of_legs,
        }
    }
}

/// Common capability of every product in every family.
///
/// All methods delegate to the embedded [`Furniture`]; variants only supply
/// [`Piece::furniture`].
pub trait Piece: fmt::Debug {
    fn furniture(&self) -> &Furniture;

    fn kind(&self) -> FurnitureKind {
        self.furniture().kind
    }

    fn name(&self) -> &str {
        &self.furniture().name
    }

    fn launch_year(&self) -> u16 {
        self.furniture().launch_year
    }

    fn number_of_legs(&self) -> u16 {
        self.furniture().number_of_legs
    }

    fn has_legs(&self) -> bool {
        self.number_of_legs() > 0
    }

    fn sit_down(&self) -> String {
        format!("{}: sitting...", self.kind())
    }
}

pub trait Chair: Piece {}

pub trait Sofa: Piece {}

macro_rules! furniture_variant {
    ($name:ident, $role:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name(Furniture);

        impl Piece for $name {
            fn furniture(&self) -> &Furniture {
                &self.0
            }
        }

        impl $role for $name {}
    };
}

furniture_variant!(ModernChair, Chair);
furniture_variant!(ModernSofa, Sofa);
furniture_variant!(VictorianChair, Chair);
furniture_variant!(VictorianSofa, Sofa);

// ============================================================================
// Factories
// ============================================================================

pub trait FurnitureFactory: Sync {
    fn family(&self) -> FurnitureFamily;
    fn make_chair(&self) -> Box<dyn Chair>;
    fn make_sofa(&self) -> Box<dyn Sofa>;
}

pub struct ModernFurnitureFactory;

impl FurnitureFactory for ModernFurnitureFactory {
    fn family(&self) -> FurnitureFamily {
        FurnitureFamily::Modern
    }

    fn make_chair(&self) -> Box<dyn Chair> {
        Box::new(ModernChair(Furniture::new(
            FurnitureKind::Chair,
            "Modern Chair",
            2020,
            3,
        )))
    }

    fn make_sofa(&self) -> Box<dyn Sofa> {
        Box::new(ModernSofa(Furniture::new(
            FurnitureKind::Sofa,
            "Modern Sofa",
            2024,
            3,
        )))
    }
}

pub struct VictorianFurnitureFactory;

impl FurnitureFactory for VictorianFurnitureFactory {
    fn family(&self) -> FurnitureFamily {
        FurnitureFamily::Victorian
    }

    fn make_chair(&self) -> Box<dyn Chair> {
        Box::new(VictorianChair(Furniture::new(
            FurnitureKind::Chair,
            "Victorian Chair",
            1998,
            4,
        )))
    }

    fn make_sofa(&self) -> Box<dyn Sofa> {
        Box::new(VictorianSofa(Furniture::new(
            FurnitureKind::Sofa,
            "Victorian Sofa",
            1996,
            4,
        )))
    }
}

/// Look up the factory for a family key. Unknown keys yield `None`.
pub fn furniture_factory(key: &str) -> Option<&'static dyn FurnitureFactory> {
    match FurnitureFamily::lookup(key) {
        Some(family) => {
            debug!("[FurnitureStore] using the '{}' factory", key);
            Some(family.factory())
        }
        None => {
            warn!("[FurnitureStore] no factory for family '{}'", key);
            None
        }
    }
}

// ============================================================================
// Typed selector
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum FurnitureFamily {
    Modern,
    Victorian,
}

impl FurnitureFamily {
    pub const ALL: [FurnitureFamily; 2] = [FurnitureFamily::Modern, FurnitureFamily::Victorian];

    pub fn as_str(&self) -> &'static str {
        match self {
            FurnitureFamily::Modern => "modern",
            FurnitureFamily::Victorian => "victorian",
        }
    }

    fn lookup(key: &str) -> Option<FurnitureFamily> {
        FURNITURE_FAMILIES
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, family)| *family)
    }

    pub fn factory(&self) -> &'static dyn FurnitureFactory {
        match self {
            FurnitureFamily::Modern => &ModernFurnitureFactory,
            FurnitureFamily::Victorian => &VictorianFurnitureFactory,
        }
    }
}

static FURNITURE_FAMILIES: &[(&str, FurnitureFamily)] = &[
    ("modern", FurnitureFamily::Modern),
    ("victorian", FurnitureFamily::Victorian),
];

impl fmt::Display for FurnitureFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FurnitureFamily {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FurnitureFamily::lookup(s)
            .ok_or_else(|| PatternError::unknown_key(SelectorKind::FurnitureFamily, s))
    }
}

impl TryFrom<String> for FurnitureFamily {
    type Error = PatternError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// ============================================================================
// Tests
// ============================================================================
