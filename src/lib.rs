//! # Design Patterns
//!
//! Runnable examples of classic object-oriented patterns expressed with
//! traits instead of inheritance.
//!
//! ## Patterns Covered
//!
//! 1. **Strategy** - Drive and display behaviors injected into a vehicle
//! 2. **Observer** - Stock subject notifying email and mobile subscribers
//! 3. **Decorator** - Pizza toppings wrapping a base pizza
//! 4. **Factory / Abstract Factory** - Shapes by key, cars by segment and price
//!
//! ## Running Examples
//!
//! ```bash
//! cargo run --bin p1_strategy
//! cargo run --bin p2_observer
//! cargo run --bin p2_observer -- demos/restock.toml
//! cargo run --bin p3_decorator
//! cargo run --bin p4_factory
//! ```
//!
//! Set `RUST_LOG=debug` to see subject transitions and fan-out reports.
//!
//! ## Key Dependencies
//!
//! - `thiserror` - Error enums for lookups, delivery and configuration
//! - `anyhow` - Error context in the binaries
//! - `serde` / `toml` - Restock scenario configuration
//! - `tracing` / `tracing-subscriber` - Diagnostics
//! - `colored` - Section headers in the demo output

pub mod config;
pub mod decorator;
pub mod delivery;
pub mod error;
pub mod factory;
pub mod logging;
pub mod observer;
pub mod strategy;

pub use error::{ConfigError, DeliveryError, FactoryError};
