use anyhow::{Context, Result};
use clap::Parser;

use seqbench::{run_comparison, run_row_comparison, SysinfoProbe, DEFAULT_ELEMENT_COUNT};

#[derive(Parser, Debug)]
#[command(
    name = "seqbench",
    about = "Measures the time and memory cost of eager versus lazy sequence production",
    version = env!("CARGO_PKG_VERSION")
)]
struct Cli {
    /// Number of derived values for the numeric scenario.
    #[arg(long, default_value_t = DEFAULT_ELEMENT_COUNT)]
    elements: u64,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut probe = SysinfoProbe::new();
    let report = run_comparison(cli.elements, &mut probe)
        .context("failed to measure the numeric scenario")?;
    println!("\n{report}");

    let rows = run_row_comparison();
    println!("\n{rows}");

    Ok(())
}

/// Initialize tracing with an env-driven filter (default INFO).
fn init_tracing() {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = fmt::layer().with_target(false).with_level(true).compact();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
