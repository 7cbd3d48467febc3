//! Signal handling for huesetr.
//!
//! Installs a dedicated signal-listener thread that translates SIGTERM,
//! SIGINT, and SIGHUP into a cleared running flag plus a message on the
//! shutdown channel. The control loop checks the flag each iteration and
//! blocks on the channel during its inter-poll sleep, so a signal interrupts
//! the sleep immediately instead of waiting out the full interval.

use anyhow::{Context, Result};
use signal_hook::{
    consts::signal::{SIGHUP, SIGINT, SIGTERM},
    iterator::Signals,
};
use std::{
    sync::atomic::{AtomicBool, Ordering},
    sync::{Arc, mpsc},
    thread,
};

/// Messages delivered to the control loop from the signal thread.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SignalMessage {
    /// Terminate the main loop and exit
    Shutdown,
}

/// Signal handling state shared between threads.
pub struct SignalState {
    /// Atomic flag indicating if the application should keep running
    pub running: Arc<AtomicBool>,
    /// Channel receiver for signal messages
    pub signal_receiver: mpsc::Receiver<SignalMessage>,
    /// Channel sender for signal messages
    pub signal_sender: mpsc::Sender<SignalMessage>,
}

impl SignalState {
    /// Build a state with no installed handlers.
    ///
    /// Used by tests and embedders that drive shutdown themselves by
    /// clearing `running` or sending on `signal_sender`.
    pub fn unmanaged() -> Self {
        let (signal_sender, signal_receiver) = mpsc::channel();
        Self {
            running: Arc::new(AtomicBool::new(true)),
            signal_receiver,
            signal_sender,
        }
    }
}

/// Install the signal-listener thread and return the shared state.
pub fn setup_signal_handler(debug_enabled: bool) -> Result<SignalState> {
    let state = SignalState::unmanaged();

    let mut signals =
        Signals::new([SIGTERM, SIGINT, SIGHUP]).context("Failed to register signal handlers")?;
    let running = Arc::clone(&state.running);
    let sender = state.signal_sender.clone();

    thread::spawn(move || {
        for signal in signals.forever() {
            if debug_enabled {
                log_pipe!();
                log_debug!("Received signal {}", signal);
            }
            running.store(false, Ordering::SeqCst);
            // The receiver disappearing just means the main loop already
            // exited; nothing left to interrupt.
            if sender.send(SignalMessage::Shutdown).is_err() {
                break;
            }
        }
    });

    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmanaged_state_starts_running() {
        let state = SignalState::unmanaged();
        assert!(state.running.load(Ordering::SeqCst));
    }

    #[test]
    fn shutdown_message_round_trips_through_channel() {
        let state = SignalState::unmanaged();
        state.signal_sender.send(SignalMessage::Shutdown).unwrap();
        assert_eq!(
            state.signal_receiver.try_recv().unwrap(),
            SignalMessage::Shutdown
        );
    }
}
