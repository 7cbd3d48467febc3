//! Property tests for the solar transition model.

use huesetr::constants::{MAXIMUM_TEMP, MINIMUM_TEMP, TRANSITION_HIGH, TRANSITION_LOW};
use huesetr::transition::{
    LightingProfile, Period, compute_alpha, interpolate, kelvin_to_mired,
};
use proptest::prelude::*;

/// Generate any plausible solar elevation
fn elevation_strategy() -> impl Strategy<Value = f64> {
    -90.0..=90.0
}

/// Generate elevations strictly inside the transition band
fn band_elevation_strategy() -> impl Strategy<Value = f64> {
    (TRANSITION_LOW + 1e-6)..TRANSITION_HIGH
}

/// Generate arbitrary valid lighting profiles
fn profile_strategy() -> impl Strategy<Value = LightingProfile> {
    (
        MINIMUM_TEMP..=MAXIMUM_TEMP,
        MINIMUM_TEMP..=MAXIMUM_TEMP,
        0.0f64..=1.0,
        0.0f64..=1.0,
    )
        .prop_map(
            |(day_temp, night_temp, day_brightness, night_brightness)| LightingProfile {
                day_temp,
                night_temp,
                day_brightness,
                night_brightness,
            },
        )
}

proptest! {
    /// Alpha never escapes [0, 1] for any elevation
    #[test]
    fn alpha_always_clamped(elevation in elevation_strategy()) {
        let alpha = compute_alpha(elevation, TRANSITION_LOW, TRANSITION_HIGH);
        prop_assert!((0.0..=1.0).contains(&alpha));
    }

    /// Below the night boundary the night profile applies in full
    #[test]
    fn below_band_is_fully_night(elevation in -90.0..TRANSITION_LOW) {
        let alpha = compute_alpha(elevation, TRANSITION_LOW, TRANSITION_HIGH);
        prop_assert_eq!(alpha, 0.0);
        prop_assert_eq!(
            Period::from_elevation(elevation, TRANSITION_LOW, TRANSITION_HIGH),
            Period::Night
        );
    }

    /// At or above the day boundary the day profile applies in full
    #[test]
    fn above_band_is_fully_day(elevation in TRANSITION_HIGH..=90.0) {
        let alpha = compute_alpha(elevation, TRANSITION_LOW, TRANSITION_HIGH);
        prop_assert_eq!(alpha, 1.0);
        prop_assert_eq!(
            Period::from_elevation(elevation, TRANSITION_LOW, TRANSITION_HIGH),
            Period::Daytime
        );
    }

    /// Inside the band alpha is strictly between the endpoints and grows
    /// strictly with elevation: the higher the sun, the more day in the blend
    #[test]
    fn alpha_strictly_monotonic_inside_band(
        a in band_elevation_strategy(),
        b in band_elevation_strategy()
    ) {
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        prop_assume!(hi - lo > 1e-9);

        let alpha_lo = compute_alpha(lo, TRANSITION_LOW, TRANSITION_HIGH);
        let alpha_hi = compute_alpha(hi, TRANSITION_LOW, TRANSITION_HIGH);
        prop_assert!(alpha_lo < alpha_hi);
        prop_assert!(alpha_lo > 0.0 && alpha_hi < 1.0);
    }

    /// The band endpoints reproduce the profile values exactly
    #[test]
    fn interpolate_hits_profile_at_endpoints(profile in profile_strategy()) {
        let night = interpolate(TRANSITION_LOW, &profile);
        prop_assert_eq!(night.temperature, f64::from(profile.night_temp));
        prop_assert_eq!(night.brightness, profile.night_brightness);
        prop_assert_eq!(night.period.progress(), 0.0);

        let day = interpolate(TRANSITION_HIGH, &profile);
        prop_assert_eq!(day.temperature, f64::from(profile.day_temp));
        prop_assert_eq!(day.brightness, profile.day_brightness);
        prop_assert_eq!(day.period.progress(), 1.0);
    }

    /// No discontinuity as the elevation sweeps across either boundary
    #[test]
    fn interpolate_is_continuous_at_boundaries(profile in profile_strategy()) {
        const EPS: f64 = 1e-6;
        for boundary in [TRANSITION_LOW, TRANSITION_HIGH] {
            let before = interpolate(boundary - EPS, &profile);
            let after = interpolate(boundary + EPS, &profile);
            // Steepest possible ramp is the full temperature range over the
            // 9-degree band, so a 2e-6 degree step moves well under 0.05 K
            prop_assert!((before.temperature - after.temperature).abs() < 0.05);
            prop_assert!((before.brightness - after.brightness).abs() < 1e-5);
        }
    }

    /// Mired stays a positive integer across any blended temperature
    #[test]
    fn mired_is_positive_across_profile_range(
        profile in profile_strategy(),
        elevation in elevation_strategy()
    ) {
        let state = interpolate(elevation, &profile);
        let lo = profile.day_temp.min(profile.night_temp);
        let hi = profile.day_temp.max(profile.night_temp);
        // The blend is a convex combination up to rounding, so allow an ulp
        // of slack at the endpoints
        prop_assert!(state.temperature >= f64::from(lo) - 1e-6);
        prop_assert!(state.temperature <= f64::from(hi) + 1e-6);
        prop_assert!(kelvin_to_mired(state.temperature) > 0);
    }
}
