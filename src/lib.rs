//! # Design Patterns
//!
//! Runnable demonstrations of classic object-oriented design patterns,
//! expressed with traits, enums and lookup tables.
//!
//! ## Patterns Covered
//!
//! 1. **Abstract Factory** - families of related furniture behind `Chair` / `Sofa`
//! 2. **Factory** - a car store that builds a `Car` from a model key
//! 3. **Singleton** - a double-checked-lock guard around a database handler
//! 4. **Strategy** - a navigator that swaps routing algorithms at runtime
//!
//! ## Running Examples
//!
//! ```bash
//! cargo run --bin abstract_factory
//! cargo run --bin factory
//! cargo run --bin singleton
//! cargo run --bin strategy
//!
//! # more detail from the library traces
//! RUST_LOG=debug cargo run --bin singleton
//! ```
//!
//! ## Key Dependencies
//!
//! - `thiserror` - Derive macro for the selector / config error type
//! - `serde` + `toml` - Demo settings compiled in from `patterns.toml`
//! - `log` + `env_logger` - Trace lines for every interesting code path
//! - `colored` - Console output in the demo binaries
//! - `crossbeam` - Channels between the concurrent singleton callers

pub mod abstract_factory;
pub mod config;
pub mod error;
pub mod factory;
pub mod logging;
pub mod singleton;
pub mod strategy;

pub use error::{PatternError, Result};
