mod cli;
mod commands;
mod frontend;

use clap::Parser;
use cli::{Cli, Commands};
use terse_core::Config;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    let config = Config {
        cost_per_token: cli.cost_per_token,
    };

    match cli.command {
        Some(Commands::Optimize {
            text,
            preserve_politeness,
            aggressiveness,
        }) => commands::optimize::run(text.as_deref(), preserve_politeness, aggressiveness, &config),
        Some(Commands::Session) => commands::session::run(&config),
        Some(Commands::Summary { days }) => commands::summary::run(days),
        Some(Commands::Version) => commands::version::run(),
        None => frontend::select().run(&config),
    }
}
