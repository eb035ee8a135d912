//! Engine configuration.

/// Tunables shared by the repair and advice layers.
///
/// Resolution itself always terminates and needs no budget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// Maximum single-concept edits a greedy repair may make (kill switch).
    pub max_repair_steps: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_repair_steps: 10_000,
        }
    }
}

impl EngineConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the repair step budget.
    #[must_use]
    pub fn with_max_repair_steps(mut self, max: usize) -> Self {
        self.max_repair_steps = max;
        self
    }
}
