//! Application constants and default values for huesetr.
//!
//! This module contains the configuration defaults, validation limits,
//! and operational constants used throughout the application.

// ═══ Solar Transition Thresholds ═══
// Solar elevation angles (degrees) bounding the day/night crossfade.
// Below TRANSITION_LOW the night profile applies in full; above
// TRANSITION_HIGH the day profile applies in full. These mirror the
// civil-twilight band and are deliberately not user-configurable:
// TRANSITION_LOW must stay strictly below TRANSITION_HIGH or the blend
// factor would divide by zero.

pub const TRANSITION_LOW: f64 = -6.0; // degrees - night boundary
pub const TRANSITION_HIGH: f64 = 3.0; // degrees - day boundary

// ═══ Application Configuration Defaults ═══
// These values are used when config options are not specified by the user

pub const DEFAULT_DAY_TEMP: u32 = 5500; // Kelvin - close to natural sunlight
pub const DEFAULT_NIGHT_TEMP: u32 = 3500; // Kelvin - warm, comfortable for night viewing
pub const DEFAULT_BRIGHTNESS: f64 = 1.0; // Full brightness (normalized 0.0-1.0)
pub const DEFAULT_LIGHT_ID: u32 = 1; // First light on a freshly paired bridge

// ═══ Validation Limits ═══
// These limits ensure user inputs are within reasonable and safe ranges

// Temperature limits (Kelvin scale)
pub const MINIMUM_TEMP: u32 = 1000; // Very warm candlelight-like
pub const MAXIMUM_TEMP: u32 = 20000; // Very cool blue light

// Brightness limits (normalized)
pub const MINIMUM_BRIGHTNESS: f64 = 0.0;
pub const MAXIMUM_BRIGHTNESS: f64 = 1.0;

// ═══ Operational Timing Constants ═══

pub const UPDATE_INTERVAL_SECS: u64 = 5; // seconds between solar polls
pub const BRIDGE_TIMEOUT_SECS: u64 = 10; // HTTP timeout for bridge requests

// ═══ Solar Position Parameters ═══
// Standard atmosphere and delta-T inputs for the SPA algorithm. Fixed
// values are accurate to well under a tenth of a degree of elevation,
// far below what a 9-degree transition band can resolve.

pub const SPA_DELTA_T: f64 = 69.0; // seconds (TT - UT1)
pub const SPA_PRESSURE: f64 = 1013.25; // millibars
pub const SPA_TEMPERATURE: f64 = 15.0; // degrees Celsius

// ═══ Process Exit Codes ═══

pub const EXIT_FAILURE: i32 = 1;
