//! Prompt shortening pipeline and token accounting

mod config;
mod latency;
mod optimizer;
mod rules;
mod tokens;
mod types;

pub use config::{Config, DEFAULT_COST_PER_TOKEN};
pub use latency::{Delay, NoDelay, SimulatedDelay};
pub use optimizer::{optimize, process};
pub use tokens::count_tokens;
pub use types::{Aggressiveness, Optimization, Options, ParseAggressivenessError};
