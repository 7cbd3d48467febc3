//! Application coordinator that manages the complete lifecycle of huesetr.
//!
//! This module handles resource acquisition, initialization, and
//! orchestration of the core loop:
//! - Configuration loading and the startup config echo
//! - Bridge connection (acquired once, reused for all iterations)
//! - Signal handler setup
//! - Handing everything to [`Core`](crate::core::Core)
//!
//! The `Huesetr` struct uses a builder pattern so embedders and tests can
//! start it without the log headers:
//! - Normal startup: `Huesetr::new(debug_enabled).run()`
//! - Quiet startup: `Huesetr::new(debug_enabled).without_headers().run()`

use anyhow::{Context, Result};

use crate::{
    bridge::HueBridge,
    config::{self, Config},
    core::{Core, CoreParams},
    signals::setup_signal_handler,
    solar::SpaSolarProvider,
};

/// Builder for configuring and running the huesetr application.
pub struct Huesetr {
    debug_enabled: bool,
    show_headers: bool,
}

impl Huesetr {
    /// Create a new runner with defaults matching a normal run.
    pub fn new(debug_enabled: bool) -> Self {
        Self {
            debug_enabled,
            show_headers: true,
        }
    }

    /// Skip the version header (for embedding and tests).
    pub fn without_headers(mut self) -> Self {
        self.show_headers = false;
        self
    }

    /// Execute the application with the configured settings.
    ///
    /// Configuration errors are fatal here; once the loop is running, I/O
    /// errors are retried on the next cycle instead.
    pub fn run(self) -> Result<()> {
        if self.show_headers {
            log_version!();
        }

        let config = match Config::load() {
            Ok(config) => config,
            Err(e) => {
                log_error_exit!("Configuration failed");
                eprintln!("{:?}", e);
                std::process::exit(crate::constants::EXIT_FAILURE);
            }
        };

        if let Some(custom_dir) = config::get_custom_config_dir() {
            log_block_start!("Base directory: {}", custom_dir.display());
        }
        config.log_config();

        let bridge = HueBridge::connect(&config.bridge_address, &config.api_key)
            .context("Failed to connect to the Hue bridge")?;
        log_block_start!("Connected to Hue bridge at {}", config.bridge_address);

        let signal_state = setup_signal_handler(self.debug_enabled)?;

        let core = Core::new(CoreParams {
            controller: Box::new(bridge),
            solar: Box::new(SpaSolarProvider),
            config,
            signal_state,
            debug_enabled: self.debug_enabled,
        });

        core.execute()
    }
}
