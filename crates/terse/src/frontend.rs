//! Front-end adapter selection
//!
//! With no subcommand given, the composition root picks a front end from
//! the environment: the interactive loop on a terminal, batch stdin
//! otherwise. Both drive the same core and ledger contracts; neither is
//! visible below this layer.

use std::io::IsTerminal;

use terse_core::{Aggressiveness, Config};

use crate::commands;

pub trait Frontend {
    fn run(&self, config: &Config) -> anyhow::Result<()>;
}

/// Line-based interactive prompt loop
pub struct Interactive;

impl Frontend for Interactive {
    fn run(&self, config: &Config) -> anyhow::Result<()> {
        commands::session::run(config)
    }
}

/// Optimizes the whole of stdin once, with default options
pub struct Batch;

impl Frontend for Batch {
    fn run(&self, config: &Config) -> anyhow::Result<()> {
        commands::optimize::run(None, false, Aggressiveness::default(), config)
    }
}

pub fn select() -> Box<dyn Frontend> {
    if std::io::stdin().is_terminal() {
        Box::new(Interactive)
    } else {
        Box::new(Batch)
    }
}
