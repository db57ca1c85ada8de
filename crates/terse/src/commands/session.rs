use std::io::{BufRead, Write};

use terse_core::{process, Aggressiveness, Config, Delay, Options, SimulatedDelay};
use terse_ledger::SavingsStore;

pub fn run(config: &Config) -> anyhow::Result<()> {
    let store = SavingsStore::open_default()?;
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_loop(
        stdin.lock(),
        stdout.lock(),
        config,
        &store,
        &SimulatedDelay::new(),
    )
}

/// The interactive loop, generic over its streams so tests can drive it
pub(crate) fn run_loop(
    mut input: impl BufRead,
    mut out: impl Write,
    config: &Config,
    store: &SavingsStore,
    delay: &dyn Delay,
) -> anyhow::Result<()> {
    let totals = store.load();
    writeln!(out, "terse interactive session")?;
    writeln!(
        out,
        "Savings so far: {} tokens, ${:.2}",
        totals.total_tokens_saved, totals.total_cost_saved
    )?;
    writeln!(out)?;

    loop {
        let Some(text) = prompt(
            &mut input,
            &mut out,
            "Enter verbose prompt (or 'exit' to quit): ",
        )?
        else {
            break;
        };
        let trimmed = text.trim();
        if trimmed.eq_ignore_ascii_case("exit") || trimmed.eq_ignore_ascii_case("quit") {
            break;
        }
        if trimmed.is_empty() {
            writeln!(out, "Enter a prompt to optimize.")?;
            continue;
        }

        let Some(politeness) = prompt(&mut input, &mut out, "Preserve politeness? (y/N): ")? else {
            break;
        };
        let Some(aggr_raw) = prompt(
            &mut input,
            &mut out,
            "Aggressiveness (gentle/medium/aggressive): ",
        )?
        else {
            break;
        };
        let aggressiveness = match aggr_raw.parse::<Aggressiveness>() {
            Ok(tier) => tier,
            Err(err) => {
                writeln!(out, "{err}; using medium")?;
                Aggressiveness::Medium
            }
        };

        let opts = Options {
            preserve_politeness: politeness.trim().eq_ignore_ascii_case("y"),
            aggressiveness,
        };
        let result = process(&text, &opts, config, delay);
        let totals = store.commit(&super::run_record(&result, &opts))?;

        writeln!(out)?;
        writeln!(out, "Optimized prompt: {}", result.optimized_text)?;
        writeln!(
            out,
            "Tokens saved: {}, Cost saved: ${:.5}",
            result.tokens_saved, result.cost_saved
        )?;
        writeln!(out, "Simulated latency: {:.2}s", result.latency_seconds)?;
        writeln!(
            out,
            "Total tokens saved: {}, Total cost saved: ${:.5}",
            totals.total_tokens_saved, totals.total_cost_saved
        )?;
        writeln!(out)?;
    }

    writeln!(out, "Goodbye!")?;
    Ok(())
}

/// Print a prompt, read one line; `None` at end of input
fn prompt(
    input: &mut impl BufRead,
    out: &mut impl Write,
    label: &str,
) -> anyhow::Result<Option<String>> {
    write!(out, "{label}")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(|c: char| c == '\r' || c == '\n').to_string()))
}
