//! # Huesetr Library
//!
//! Internal library for the huesetr binary application.
//!
//! This library exists to enable testing of the internals and provide clean
//! separation between CLI dispatch (main.rs) and application logic.
//!
//! ## Architecture
//!
//! - **Entry Point**: `Huesetr` struct provides the application API with
//!   resource management
//! - **Core Logic**: `core` module contains the polling loop
//! - **Transition Model**: `transition` module with the pure solar-elevation
//!   to lighting-state math
//! - **Bridge**: `bridge` module speaking the Hue REST API behind the
//!   `LightingController` seam
//! - **Solar**: `solar` module wrapping the SPA solar position algorithm
//! - **Configuration**: `config` module for TOML-based settings
//! - **Infrastructure**: signal handling, time source abstraction, logging

// Import macros from logger module for use in all submodules
#[macro_use]
pub mod logger;

// Public API modules
pub mod args;
pub mod bridge;
pub mod config;
pub mod constants;
pub mod core;
pub mod signals;
pub mod solar;
pub mod time_source;
pub mod transition;

// Internal modules
mod huesetr;

// Re-export for binary
pub use huesetr::Huesetr;
pub use transition::Period;
