//! Core control loop.
//!
//! This module drives the continuous adjustment cycle: poll the solar
//! position, run the transition model, push the resulting values to the
//! lights, sleep, repeat. The loop holds no mutable state between iterations
//! beyond the wall clock; every tick derives the full lighting state from
//! scratch and discards it after applying it.
//!
//! A failed iteration (bridge unreachable, pathological solar math) is
//! logged and abandoned; the next poll retries five seconds later, so a
//! brief network outage costs at most one update cycle.

use anyhow::Result;
use std::sync::atomic::Ordering;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

use crate::{
    bridge::LightingController,
    config::Config,
    constants::UPDATE_INTERVAL_SECS,
    signals::{SignalMessage, SignalState},
    solar::SolarPositionProvider,
    time_source,
    transition::{self, LightingState, Period},
};

/// Parameters for creating a [`Core`] instance.
///
/// Bundles the collaborators the loop needs, keeping the constructor
/// signature flat.
pub struct CoreParams {
    pub controller: Box<dyn LightingController>,
    pub solar: Box<dyn SolarPositionProvider>,
    pub config: Config,
    pub signal_state: SignalState,
    pub debug_enabled: bool,
}

/// The running control loop and its collaborators.
pub struct Core {
    controller: Box<dyn LightingController>,
    solar: Box<dyn SolarPositionProvider>,
    config: Config,
    signal_state: SignalState,
    debug_enabled: bool,
}

impl Core {
    pub fn new(params: CoreParams) -> Self {
        Self {
            controller: params.controller,
            solar: params.solar,
            config: params.config,
            signal_state: params.signal_state,
            debug_enabled: params.debug_enabled,
        }
    }

    /// Run the adjustment loop until a shutdown signal arrives.
    ///
    /// The inter-poll sleep is a `recv_timeout` on the signal channel, so
    /// shutdown interrupts it immediately rather than waiting out the
    /// interval.
    pub fn execute(mut self) -> Result<()> {
        log_block_start!(
            "Adjusting {} color light(s) and {} dimmable light(s) via {}",
            self.config.color_lights.len(),
            self.config.dimmable_lights.len(),
            self.controller.name()
        );

        while self.signal_state.running.load(Ordering::SeqCst) {
            if let Err(e) = self.run_iteration() {
                log_pipe!();
                log_warning!("Update failed: {:#}", e);
                log_indented!("Retrying on next update cycle");
            }

            match self
                .signal_state
                .signal_receiver
                .recv_timeout(Duration::from_secs(UPDATE_INTERVAL_SECS))
            {
                Ok(SignalMessage::Shutdown) => break,
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }

        log_block_start!("Shutting down huesetr...");
        log_end!();
        Ok(())
    }

    /// One pass of the per-iteration protocol: sample the sun, interpolate,
    /// log, and push both device commands (color before brightness).
    pub fn run_iteration(&mut self) -> Result<()> {
        let now = time_source::now_utc();
        let elevation = self
            .solar
            .elevation(self.config.latitude, self.config.longitude, now)?;
        if self.debug_enabled {
            log_pipe!();
            log_debug!("Solar elevation: {:.4}°", elevation);
        }

        let state = transition::interpolate(elevation, &self.config.profile());
        self.log_state(&state);

        let mired = transition::kelvin_to_mired(state.temperature);
        self.controller
            .set_color_temperature(mired, &self.config.color_lights)?;

        let bri = transition::brightness_to_bri(state.brightness);
        self.controller
            .set_brightness(bri, &self.config.dimmable_lights)?;

        Ok(())
    }

    fn log_state(&self, state: &LightingState) {
        match state.period {
            Period::Transition { progress } => {
                log_block_start!("Period: Transition ({:.2}% day)", progress * 100.0);
            }
            period => {
                log_block_start!("Period: {}", period);
            }
        }
        log_indented!("Color temperature: {}K", state.temperature as u32);
        log_indented!("Brightness: {:.2}", state.brightness);
    }
}
