//! poolstat CLI: a shell over an in-process pool store.
//!
//! Two modes:
//! - **REPL mode**: `poolstat [flags]` with a terminal on stdin
//! - **Pipe mode**: `printf 'update 1 1 2\nquery 1 50\n' | poolstat`, one command per line
//!
//! The store lives only as long as the process.

mod commands;
mod format;
mod parse;
mod repl;

use std::io::IsTerminal;
use std::process;
use std::sync::Arc;

use anyhow::Context;
use poolstat_engine::StoreConfig;
use poolstat_executor::{Executor, PoolStore};
use tracing_subscriber::EnvFilter;

use commands::build_cli;
use format::OutputMode;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so piped output stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = build_cli().get_matches();

    let output_mode = if matches.get_flag("json") {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let mut config = match matches.get_one::<String>("config") {
        Some(path) => StoreConfig::load(path).context("loading store config")?,
        None => StoreConfig::default(),
    };
    if let Some(limit) = matches.get_one::<usize>("max-pool-size") {
        config.max_pool_size = Some(*limit);
    }

    let executor = Executor::new(Arc::new(PoolStore::with_config(config)));

    if std::io::stdin().is_terminal() {
        repl::run_repl(&executor, output_mode).context("line editor failed")?;
    } else {
        let exit_code = repl::run_pipe(&executor, output_mode);
        process::exit(exit_code);
    }
    Ok(())
}
