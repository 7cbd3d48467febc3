//! Configuration system for huesetr with validation.
//!
//! Handles the TOML configuration file, default values, range validation,
//! and the startup configuration echo. The file is read once at startup and
//! resolved into an immutable [`Config`] that is passed into the control
//! loop; there are no ambient configuration globals and no hot reload.
//!
//! ## Configuration Structure
//!
//! The configuration is searched for at `$XDG_CONFIG_HOME/huesetr/huesetr.toml`
//! (or the directory given with `--config`):
//!
//! ```toml
//! latitude = 52.52          # Geographic latitude (required)
//! longitude = 13.405        # Geographic longitude (required)
//!
//! day_temp = 5500           # Color temperature during day (1000-20000) Kelvin
//! night_temp = 3500         # Color temperature during night (1000-20000) Kelvin
//! brightness = 1.0          # Brightness fallback for both profiles (0.0-1.0)
//! brightness_day = 1.0      # Day brightness, overrides the fallback (0.0-1.0)
//! brightness_night = 0.8    # Night brightness, overrides the fallback (0.0-1.0)
//!
//! bridge_address = "192.168.1.2"  # Hue bridge host or host:port (required)
//! api_key = "..."                 # Hue application key (required)
//! color_lights = [1, 2]           # Light ids receiving temperature updates
//! dimmable_lights = [1, 2]        # Light ids receiving brightness updates
//! ```
//!
//! ## Validation and Error Handling
//!
//! Missing latitude/longitude, a missing bridge address or key, and any
//! out-of-range numeric field are fatal at startup; the daemon cannot
//! operate without a location or a reachable bridge. Invalid configurations
//! produce error messages naming the offending field and its valid range.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::constants::*;
use crate::transition::LightingProfile;

/// Custom configuration directory, set once at startup from `--config`.
static CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Set the configuration directory for the current process.
/// This can only be called once, typically at startup.
pub fn set_config_dir(dir: Option<String>) -> Result<()> {
    CONFIG_DIR
        .set(dir.map(PathBuf::from))
        .map_err(|_| anyhow::anyhow!("Configuration directory already set"))
}

/// Get the custom configuration directory if one was set.
pub fn get_custom_config_dir() -> Option<PathBuf> {
    CONFIG_DIR.get().and_then(|d| d.clone())
}

/// Raw on-disk configuration shape. Every field is optional at parse time;
/// required fields are enforced during resolution so missing-field errors
/// come out as readable messages instead of serde's.
#[derive(Debug, Deserialize)]
struct ConfigFile {
    latitude: Option<f64>,
    longitude: Option<f64>,
    day_temp: Option<u32>,
    night_temp: Option<u32>,
    brightness: Option<f64>,
    brightness_day: Option<f64>,
    brightness_night: Option<f64>,
    bridge_address: Option<String>,
    api_key: Option<String>,
    color_lights: Option<Vec<u32>>,
    dimmable_lights: Option<Vec<u32>>,
}

/// Resolved, validated application configuration.
///
/// Constructed once at startup and immutable thereafter. Required fields are
/// plain values here; everything optional has had its default applied.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Geographic latitude in degrees (-90 to +90)
    pub latitude: f64,
    /// Geographic longitude in degrees (-180 to +180)
    pub longitude: f64,
    /// Color temperature during full day (Kelvin)
    pub day_temp: u32,
    /// Color temperature during full night (Kelvin)
    pub night_temp: u32,
    /// Brightness during full day (normalized 0.0-1.0)
    pub brightness_day: f64,
    /// Brightness during full night (normalized 0.0-1.0)
    pub brightness_night: f64,
    /// Hue bridge host or host:port
    pub bridge_address: String,
    /// Hue application key
    pub api_key: String,
    /// Light ids receiving color temperature updates
    pub color_lights: Vec<u32>,
    /// Light ids receiving brightness updates
    pub dimmable_lights: Vec<u32>,
}

impl Config {
    /// Load configuration using automatic path detection.
    pub fn load() -> Result<Self> {
        let config_path = get_config_path()?;
        if !config_path.exists() {
            anyhow::bail!(
                "No configuration file found at {}\n\
                 Create one with your location and Hue bridge credentials \
                 (see the repository README for the full format)",
                config_path.display()
            );
        }
        Self::load_from_path(&config_path)
            .with_context(|| format!("Failed to load configuration from {}", config_path.display()))
    }

    /// Load and validate configuration from a specific file path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let file: ConfigFile =
            toml::from_str(&content).context("Failed to parse configuration TOML")?;
        Self::resolve(file)
    }

    /// Apply defaults and validate ranges, turning the raw file shape into a
    /// resolved configuration.
    fn resolve(file: ConfigFile) -> Result<Self> {
        let latitude = file
            .latitude
            .ok_or_else(|| anyhow::anyhow!("latitude must be set"))?;
        let longitude = file
            .longitude
            .ok_or_else(|| anyhow::anyhow!("longitude must be set"))?;

        if !(-90.0..=90.0).contains(&latitude) {
            anyhow::bail!(
                "latitude must be between -90 and 90 degrees (got {})",
                latitude
            );
        }
        if !(-180.0..=180.0).contains(&longitude) {
            anyhow::bail!(
                "longitude must be between -180 and 180 degrees (got {})",
                longitude
            );
        }

        let day_temp = file.day_temp.unwrap_or(DEFAULT_DAY_TEMP);
        let night_temp = file.night_temp.unwrap_or(DEFAULT_NIGHT_TEMP);
        for (name, temp) in [("day_temp", day_temp), ("night_temp", night_temp)] {
            if !(MINIMUM_TEMP..=MAXIMUM_TEMP).contains(&temp) {
                anyhow::bail!(
                    "{} ({}) must be between {} and {} Kelvin",
                    name,
                    temp,
                    MINIMUM_TEMP,
                    MAXIMUM_TEMP
                );
            }
        }

        // A bare `brightness` is the fallback for whichever per-period value
        // is absent.
        let fallback = file.brightness.unwrap_or(DEFAULT_BRIGHTNESS);
        let brightness_day = file.brightness_day.unwrap_or(fallback);
        let brightness_night = file.brightness_night.unwrap_or(fallback);
        for (name, value) in [
            ("brightness", fallback),
            ("brightness_day", brightness_day),
            ("brightness_night", brightness_night),
        ] {
            if !(MINIMUM_BRIGHTNESS..=MAXIMUM_BRIGHTNESS).contains(&value) {
                anyhow::bail!(
                    "{} ({}) must be between {} and {}",
                    name,
                    value,
                    MINIMUM_BRIGHTNESS,
                    MAXIMUM_BRIGHTNESS
                );
            }
        }

        let bridge_address = file
            .bridge_address
            .filter(|a| !a.is_empty())
            .ok_or_else(|| anyhow::anyhow!("bridge_address must be set"))?;
        let api_key = file
            .api_key
            .filter(|k| !k.is_empty())
            .ok_or_else(|| anyhow::anyhow!("api_key must be set"))?;

        let color_lights = file.color_lights.unwrap_or_else(|| vec![DEFAULT_LIGHT_ID]);
        let dimmable_lights = file
            .dimmable_lights
            .unwrap_or_else(|| vec![DEFAULT_LIGHT_ID]);

        Ok(Config {
            latitude,
            longitude,
            day_temp,
            night_temp,
            brightness_day,
            brightness_night,
            bridge_address,
            api_key,
            color_lights,
            dimmable_lights,
        })
    }

    /// The day/night targets as a transition-model profile.
    pub fn profile(&self) -> LightingProfile {
        LightingProfile {
            day_temp: self.day_temp,
            night_temp: self.night_temp,
            day_brightness: self.brightness_day,
            night_brightness: self.brightness_night,
        }
    }

    /// Echo the loaded configuration in the structured log format.
    pub fn log_config(&self) {
        let lat_dir = if self.latitude >= 0.0 { "N" } else { "S" };
        let lon_dir = if self.longitude >= 0.0 { "E" } else { "W" };

        log_block_start!("Loaded configuration");
        log_indented!(
            "Location: {:.2}°{}, {:.2}°{}",
            self.latitude.abs(),
            lat_dir,
            self.longitude.abs(),
            lon_dir
        );
        log_indented!(
            "Temperatures: {}K at day, {}K at night",
            self.day_temp,
            self.night_temp
        );
        log_indented!(
            "Brightness: {:.2} at day, {:.2} at night",
            self.brightness_day,
            self.brightness_night
        );
        log_indented!(
            "Solar elevations: day above {:.1}°, night below {:.1}°",
            TRANSITION_HIGH,
            TRANSITION_LOW
        );
        log_indented!("Bridge address: {}", self.bridge_address);
        log_indented!("Color lights: {:?}", self.color_lights);
        log_indented!("Dimmable lights: {:?}", self.dimmable_lights);
    }
}

/// Get the path to the configuration file.
///
/// Uses the custom directory from `--config` when present, otherwise
/// `$XDG_CONFIG_HOME/huesetr/huesetr.toml`.
pub fn get_config_path() -> Result<PathBuf> {
    if let Some(custom_dir) = get_custom_config_dir() {
        return Ok(custom_dir.join("huesetr.toml"));
    }
    let config_dir = dirs::config_dir().context("Could not determine config directory")?;
    Ok(config_dir.join("huesetr").join("huesetr.toml"))
}
