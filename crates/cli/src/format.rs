//! Output formatting for the shell.
//!
//! Human mode prints short redis-cli style lines. JSON mode prints exactly
//! the bodies the HTTP server would send.

use poolstat_executor::{Error, Output};
use poolstat_wire::{encode_error, encode_response, Response};

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

/// Format a successful command result.
pub fn format_output(output: &Output, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => encode_response(&Response::from(output.clone())),
        OutputMode::Human => format_human(output),
    }
}

/// Format a failed command.
pub fn format_error(error: &Error, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => encode_error(error),
        OutputMode::Human => format!("(error) {}: {}", error.code(), error),
    }
}

fn format_human(output: &Output) -> String {
    match output {
        Output::Pong { version } => format!("PONG (poolstat {})", version),
        Output::Info(info) => {
            let limit = info
                .max_pool_size
                .map(|n| n.to_string())
                .unwrap_or_else(|| "unbounded".to_string());
            format!(
                "pools: {}\nsamples: {}\nmax_pool_size: {}",
                info.pool_count, info.total_samples, limit
            )
        }
        Output::Upserted(outcome) => outcome.to_string(),
        Output::Quantile(result) => format!("{} (n={})", result.value, result.total_count),
        Output::Count(Some(n)) => format!("(integer) {}", n),
        Output::Count(None) => "(nil)".to_string(),
    }
}
