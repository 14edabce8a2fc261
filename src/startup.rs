//! Startup readiness gate.
//!
//! Display assets (fonts, splash imagery) load before the first screen
//! renders. The presentation layer keeps the splash up until this gate
//! reports ready; a failed load also counts as resolved so the app never
//! wedges behind a missing asset. Process-wide startup state, deliberately
//! separate from the screen controllers.

/// Outcome of the startup asset load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum AssetLoad {
    #[default]
    Pending,
    Loaded,
    Failed,
}

/// Poll target for the splash screen.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadinessGate {
    assets: AssetLoad,
}

impl ReadinessGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that startup assets finished loading.
    pub fn assets_loaded(&mut self) {
        self.assets = AssetLoad::Loaded;
    }

    /// Record that startup assets failed to load.
    pub fn assets_failed(&mut self) {
        self.assets = AssetLoad::Failed;
    }

    /// Ready once the load resolved, successfully or not.
    pub fn is_ready(self) -> bool {
        self.assets != AssetLoad::Pending
    }

    pub fn splash_visible(self) -> bool {
        !self.is_ready()
    }
}
