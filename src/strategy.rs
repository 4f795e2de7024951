// Strategy: a Navigator builds routes with whichever Router it currently holds.
// Routers are interchangeable at runtime; the Navigator only knows the trait.

use std::fmt;
use std::str::FromStr;

use itertools::Itertools;
use log::{debug, info};
use serde::Deserialize;

use crate::error::{PatternError, SelectorKind};

/// An ordered list of waypoints, origin first and destination last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    milestones: Vec<String>,
}

impl Route {
    /// `origin`, then `milestone1..=milestoneN`, then `destination`.
    fn through(origin: &str, intermediates: usize, destination: &str) -> Self {
        let mut milestones = Vec::with_capacity(intermediates + 2);
        milestones.push(origin.to_string());
        milestones.extend((1..=intermediates).map(|n| format!("milestone{}", n)));
        milestones.push(destination.to_string());
        Self { milestones }
    }

    pub fn milestones(&self) -> &[String] {
        &self.milestones
    }

    pub fn len(&self) -> usize {
        self.milestones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.milestones.is_empty()
    }

    pub fn origin(&self) -> Option<&str> {
        self.milestones.first().map(String::as_str)
    }

    pub fn destination(&self) -> Option<&str> {
        self.milestones.last().map(String::as_str)
    }

    pub fn intermediates(&self) -> &[String] {
        let end = self.milestones.len().saturating_sub(1);
        self.milestones.get(1..end).unwrap_or(&[])
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.milestones.iter().join(" -> "))
    }
}

pub trait Router {
    fn name(&self) -> &'static str;
    fn build_route(&self, origin: &str, destination: &str) -> Route;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BicycleRouter;

impl Router for BicycleRouter {
    fn name(&self) -> &'static str {
        "BicycleRouter"
    }

    fn build_route(&self, origin: &str, destination: &str) -> Route {
        debug!("[BicycleRouter] building route from {} to {}...", origin, destination);
        Route::through(origin, 5, destination)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BusRouter;

impl Router for BusRouter {
    fn name(&self) -> &'static str {
        "BusRouter"
    }

    fn build_route(&self, origin: &str, destination: &str) -> Route {
        debug!("[BusRouter] building route from {} to {}...", origin, destination);
        Route::through(origin, 3, destination)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CarRouter;

impl Router for CarRouter {
    fn name(&self) -> &'static str {
        "CarRouter"
    }

    fn build_route(&self, origin: &str, destination: &str) -> Route {
        debug!("[CarRouter] building route from {} to {}...", origin, destination);
        Route::through(origin, 2, destination)
    }
}

// ============================================================================
// Context
// ============================================================================

/// Holds the current routing strategy.
///
/// `set_router` takes `&mut self`, so swapping and building can never overlap.
pub struct Navigator {
    router: Box<dyn Router>,
}

impl Navigator {
    pub fn new(router: Box<dyn Router>) -> Self {
        Self { router }
    }

    pub fn set_router(&mut self, router: Box<dyn Router>) {
        info!("[Navigator] switching from {} to {}", self.router.name(), router.name());
        self.router = router;
    }

    pub fn router_name(&self) -> &'static str {
        self.router.name()
    }

    pub fn build_route(&self, origin: &str, destination: &str) -> Route {
        info!("[Navigator] starting route building process...");
        self.router.build_route(origin, destination)
    }
}

impl fmt::Debug for Navigator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Navigator")
            .field("router", &self.router.name())
            .finish()
    }
}

// ============================================================================
// Selector
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum RouterKind {
    Bicycle,
    Bus,
    Car,
}

impl RouterKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RouterKind::Bicycle => "bicycle",
            RouterKind::Bus => "bus",
            RouterKind::Car => "car",
        }
    }

    pub fn into_router(self) -> Box<dyn Router> {
        match self {
            RouterKind::Bicycle => Box::new(BicycleRouter),
            RouterKind::Bus => Box::new(BusRouter),
            RouterKind::Car => Box::new(CarRouter),
        }
    }
}

static ROUTER_KINDS: &[(&str, RouterKind)] = &[
    ("bicycle", RouterKind::Bicycle),
    ("bus", RouterKind::Bus),
    ("car", RouterKind::Car),
];

impl fmt::Display for RouterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RouterKind {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ROUTER_KINDS
            .iter()
            .find(|(key, _)| *key == s)
            .map(|(_, kind)| *kind)
            .ok_or_else(|| PatternError::unknown_key(SelectorKind::Router, s))
    }
}

impl TryFrom<String> for RouterKind {
    type Error = PatternError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// ============================================================================
// Tests
// ============================================================================
