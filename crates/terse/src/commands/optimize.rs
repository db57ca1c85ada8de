use std::io::Read;

use terse_core::{process, Aggressiveness, Config, Delay, Options, SimulatedDelay};
use terse_ledger::SavingsStore;

pub fn run(
    text: Option<&str>,
    preserve_politeness: bool,
    aggressiveness: Aggressiveness,
    config: &Config,
) -> anyhow::Result<()> {
    let text = match text {
        Some(t) => t.to_string(),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    if text.trim().is_empty() {
        anyhow::bail!("nothing to optimize: prompt text is empty");
    }

    let store = SavingsStore::open_default()?;
    let opts = Options {
        preserve_politeness,
        aggressiveness,
    };
    run_with_store(&text, &opts, config, &store, &SimulatedDelay::new())
}

pub(crate) fn run_with_store(
    text: &str,
    opts: &Options,
    config: &Config,
    store: &SavingsStore,
    delay: &dyn Delay,
) -> anyhow::Result<()> {
    let result = process(text, opts, config, delay);
    let totals = store.commit(&super::run_record(&result, opts))?;

    println!("Optimized prompt: {}", result.optimized_text);
    println!(
        "Tokens: {} -> {} (saved {})",
        result.original_tokens, result.optimized_tokens, result.tokens_saved
    );
    println!("Cost saved: ${:.5}", result.cost_saved);
    println!("Simulated latency: {:.2}s", result.latency_seconds);
    println!(
        "Total tokens saved: {} | Total cost saved: ${:.2}",
        totals.total_tokens_saved, totals.total_cost_saved
    );
    Ok(())
}
