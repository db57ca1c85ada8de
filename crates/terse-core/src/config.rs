//! Configuration for savings accounting

/// Simulated cost of one token, in dollars
pub const DEFAULT_COST_PER_TOKEN: f64 = 0.00002;

/// Optimizer configuration
///
/// The cost constant is deployment-tunable; transformation code never
/// hardwires it.
#[derive(Debug, Clone)]
pub struct Config {
    pub cost_per_token: f64,
}

impl Config {
    pub fn new() -> Self {
        Self {
            cost_per_token: DEFAULT_COST_PER_TOKEN,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
