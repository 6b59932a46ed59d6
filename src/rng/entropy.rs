//! Heuristic entropy collection
//!
//! When no cryptographic source is available the Alea engine still needs a
//! seed that differs between runs. The collector gathers whatever the host
//! can cheaply tell us: the current time, the display geometry, a client
//! identifier and one draw from a weak generator.
//!
//! The result is **not** reproducible and **not** secure. It only exists so
//! that the fallback path never produces the same sequence twice.

use chrono::Utc;

use crate::os;
use crate::rng::seed::Seed;

/// Gathers seed material for the insecure fallback generator.
#[derive(Clone, Debug, Default)]
pub struct EntropyCollector {
    display: Option<(u32, u32)>,
    client_id: Option<String>,
}

impl EntropyCollector {
    /// Uses a fixed `(height, width)` instead of probing the terminal.
    pub fn with_display(mut self, height: u32, width: u32) -> Self {
        self.display = Some((height, width));
        self
    }

    /// Uses a fixed client identifier instead of the default one.
    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    /// Returns `[timestamp, height, width, client id, weak draw]`.
    ///
    /// Height and width default to `1` when the host has no display.
    pub fn collect(&self) -> Vec<Seed> {
        let (height, width) = self.display.or_else(os::display_size).unwrap_or((1, 1));

        let client_id = self.client_id.clone().unwrap_or_else(default_client_id);

        vec![
            Seed::from(Utc::now()),
            Seed::from(height),
            Seed::from(width),
            Seed::from(client_id),
            Seed::from(rand::random::<f64>()),
        ]
    }
}

fn default_client_id() -> String {
    format!(
        "{}/{} ({}; {}; pid {})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        std::env::consts::ARCH,
        std::process::id(),
    )
}
