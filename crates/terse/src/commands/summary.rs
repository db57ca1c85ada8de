use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use terse_ledger::{RunRecord, SavingsRecord, SavingsStore};

pub fn run(days: i64) -> anyhow::Result<()> {
    let store = SavingsStore::open_default()?;
    let totals = store.load();
    let runs = store.runs();
    println!("{}", build_summary(&totals, &runs, days, Utc::now()));
    Ok(())
}

fn build_summary(
    totals: &SavingsRecord,
    runs: &[RunRecord],
    days: i64,
    now: DateTime<Utc>,
) -> String {
    let mut sections = Vec::new();

    sections.push(format!(
        "Savings Summary\n===============\n\
         Total tokens saved: {}\n\
         Total cost saved: ${:.2}",
        totals.total_tokens_saved, totals.total_cost_saved
    ));

    let cutoff = now - Duration::days(days);
    let mut by_day: BTreeMap<String, (i64, f64)> = BTreeMap::new();
    for run in runs.iter().filter(|r| r.timestamp >= cutoff) {
        let entry = by_day
            .entry(run.timestamp.format("%Y-%m-%d").to_string())
            .or_default();
        entry.0 += run.tokens_saved;
        entry.1 += run.cost_saved;
    }
    if !by_day.is_empty() {
        let rows: Vec<String> = by_day
            .iter()
            .map(|(day, (tokens, cost))| format!("  {day} | tokens:{tokens} cost:${cost:.5}"))
            .collect();
        sections.push(format!(
            "\nLast {} Days\n------------\n{}",
            days,
            rows.join("\n")
        ));
    }

    if runs.is_empty() {
        sections.push("\nNo runs recorded yet.".to_string());
    } else {
        let recent: Vec<&RunRecord> = runs.iter().rev().take(10).collect();
        let rows: Vec<String> = recent
            .iter()
            .map(|r| {
                format!(
                    "  {} | {} -> {} tokens (saved {}) ${:.5} [{}]",
                    r.timestamp.format("%Y-%m-%d %H:%M"),
                    r.original_tokens,
                    r.optimized_tokens,
                    r.tokens_saved,
                    r.cost_saved,
                    r.aggressiveness
                )
            })
            .collect();
        sections.push(format!(
            "\nRecent Runs (last {})\n---------------------\n{}",
            recent.len(),
            rows.join("\n")
        ));
    }

    sections.join("\n")
}
