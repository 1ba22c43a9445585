//! Session-wide settings supplied on the command line.

/// Settings for one protocol session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionConfig {
    /// Master seed for every game created in the session. `None` draws from
    /// OS entropy.
    pub seed: Option<u64>,

    /// Pretty-print JSON response bodies.
    pub pretty: bool,
}

impl SessionConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}
