//! BK-tree benchmark harness entrypoint.
//!
//! Configure with `BKTREE_*` environment variables, filter logs with `RUST_LOG`.
//! The JSON report goes to stdout, logs go to stderr.

use mimalloc::MiMalloc;

use bktree::config::HarnessConfig;
use bktree::harness;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut config = HarnessConfig::from_env()?;
    if std::env::args().any(|arg| arg == "--verify") {
        config.verify = true;
    }
    config.validate()?;

    tracing::info!(
        tree_size = config.tree_size,
        queries = config.queries,
        tolerances = ?config.tolerances,
        verify = config.verify,
        "bktree harness starting"
    );

    let report = harness::run(&config)?;

    println!("{}", serde_json::to_string_pretty(&report)?);

    tracing::info!("bktree harness complete");
    Ok(())
}
