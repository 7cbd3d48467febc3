//! Solar position provider.
//!
//! Thin seam over the SPA (Solar Position Algorithm) implementation in the
//! `solar-positioning` crate. The trait exists so the control loop can be
//! driven with a fixed elevation in tests; the production implementation is a
//! pure function call with no state.

use anyhow::Result;
use chrono::{DateTime, Utc};
use solar_positioning::{RefractionCorrection, spa};

use crate::constants::{SPA_DELTA_T, SPA_PRESSURE, SPA_TEMPERATURE};

/// Source of solar elevation angles for a location and instant.
pub trait SolarPositionProvider: Send {
    /// Solar elevation in degrees above the horizon (negative below) at the
    /// given coordinates and UTC instant.
    fn elevation(&self, latitude: f64, longitude: f64, at: DateTime<Utc>) -> Result<f64>;
}

/// NREL SPA-backed provider with standard atmospheric refraction.
pub struct SpaSolarProvider;

impl SolarPositionProvider for SpaSolarProvider {
    fn elevation(&self, latitude: f64, longitude: f64, at: DateTime<Utc>) -> Result<f64> {
        let position = spa::solar_position(
            at,
            latitude,
            longitude,
            0.0, // observer elevation (meters); sea level is close enough for lighting
            SPA_DELTA_T,
            Some(
                RefractionCorrection::new(SPA_PRESSURE, SPA_TEMPERATURE)
                    .map_err(|e| anyhow::anyhow!("invalid refraction parameters: {e}"))?,
            ),
        )
        .map_err(|e| anyhow::anyhow!("solar position calculation failed: {e}"))?;
        Ok(position.elevation_angle())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn equatorial_noon_is_high_in_the_sky() {
        // Equinox, local solar noon on the prime meridian: the sun stands
        // near the zenith at (0, 0).
        let at = Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap();
        let elevation = SpaSolarProvider.elevation(0.0, 0.0, at).unwrap();
        assert!(elevation > 80.0, "got {elevation}");
    }

    #[test]
    fn equatorial_midnight_is_deep_below_horizon() {
        let at = Utc.with_ymd_and_hms(2024, 3, 20, 0, 0, 0).unwrap();
        let elevation = SpaSolarProvider.elevation(0.0, 0.0, at).unwrap();
        assert!(elevation < -60.0, "got {elevation}");
    }

    #[test]
    fn out_of_range_latitude_is_rejected() {
        let at = Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap();
        assert!(SpaSolarProvider.elevation(95.0, 0.0, at).is_err());
    }
}
