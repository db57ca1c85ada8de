pub fn run() -> anyhow::Result<()> {
    println!("terse {}", env!("CARGO_PKG_VERSION"));
    println!("Rule-based prompt shortener with a persistent savings ledger");
    Ok(())
}
