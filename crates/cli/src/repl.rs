//! REPL and pipe loops.

use std::io::{self, BufRead};
use std::path::PathBuf;

use poolstat_executor::Executor;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::format::{format_error, format_output, OutputMode};
use crate::parse::{parse_line, CliAction, MetaCommand};

/// What the loop should do after a line.
#[derive(Debug, PartialEq, Eq)]
pub enum LineOutcome {
    /// Line ran (or was blank).
    Ok,
    /// Line failed to parse or the command returned an error.
    Failed,
    /// User asked to leave.
    Quit,
}

/// Run one line of input, printing its result.
pub fn run_line(executor: &Executor, line: &str, mode: OutputMode) -> LineOutcome {
    match parse_line(line) {
        Ok(None) => LineOutcome::Ok,
        Ok(Some(CliAction::Meta(MetaCommand::Quit))) => LineOutcome::Quit,
        Ok(Some(CliAction::Meta(MetaCommand::Help { command }))) => {
            println!("{}", help_text(command.as_deref()));
            LineOutcome::Ok
        }
        Ok(Some(CliAction::Execute(cmd))) => match executor.execute(cmd) {
            Ok(output) => {
                println!("{}", format_output(&output, mode));
                LineOutcome::Ok
            }
            Err(e) => {
                eprintln!("{}", format_error(&e, mode));
                LineOutcome::Failed
            }
        },
        Err(e) => {
            eprintln!("(error) {}", e);
            LineOutcome::Failed
        }
    }
}

/// Interactive loop with line editing and history.
pub fn run_repl(executor: &Executor, mode: OutputMode) -> rustyline::Result<()> {
    let mut editor = DefaultEditor::new()?;
    let history = history_path();
    if let Some(path) = &history {
        // Missing history on first run is normal.
        let _ = editor.load_history(path);
    }

    loop {
        match editor.readline("poolstat> ") {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = editor.add_history_entry(line.as_str());
                }
                if run_line(executor, &line, mode) == LineOutcome::Quit {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e),
        }
    }

    if let Some(path) = &history {
        if let Err(e) = editor.save_history(path) {
            tracing::debug!(error = %e, "could not save history");
        }
    }
    Ok(())
}

/// Read commands from stdin, one per line.
///
/// Returns the process exit code: 1 if any line failed, 0 otherwise.
pub fn run_pipe(executor: &Executor, mode: OutputMode) -> i32 {
    run_lines(executor, io::stdin().lock(), mode)
}

fn run_lines(executor: &Executor, input: impl BufRead, mode: OutputMode) -> i32 {
    let mut exit_code = 0;
    for line in input.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("(error) {}", e);
                return 1;
            }
        };
        match run_line(executor, &line, mode) {
            LineOutcome::Ok => {}
            LineOutcome::Failed => exit_code = 1,
            LineOutcome::Quit => break,
        }
    }
    exit_code
}

fn history_path() -> Option<PathBuf> {
    std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".poolstat_history"))
}

fn help_text(command: Option<&str>) -> &'static str {
    match command {
        Some("update") => "update <pool_id> [value]...\n  Insert a pool or append samples to it",
        Some("query") => {
            "query <pool_id> <percentile>\n  Percentile of a pool, 0 < percentile < 100"
        }
        Some("len") => "len <pool_id>\n  Number of samples in a pool",
        Some("info") => "info\n  Pool count, total samples and the configured pool limit",
        Some("ping") => "ping\n  Check the store is alive",
        _ => {
            "Commands:\n  \
             update <pool_id> [value]...\n  \
             query <pool_id> <percentile>\n  \
             len <pool_id>\n  \
             info\n  \
             ping\n  \
             help [command]\n  \
             quit | exit"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use poolstat_executor::{PoolId, PoolStore};
    use std::sync::Arc;

    fn executor() -> Executor {
        Executor::new(Arc::new(PoolStore::new()))
    }

    #[test]
    fn test_run_line_outcomes() {
        let ex = executor();
        assert_eq!(run_line(&ex, "update 1 1 2 3", OutputMode::Human), LineOutcome::Ok);
        assert_eq!(run_line(&ex, "query 1 50", OutputMode::Human), LineOutcome::Ok);
        assert_eq!(run_line(&ex, "query 2 50", OutputMode::Human), LineOutcome::Failed);
        assert_eq!(run_line(&ex, "bogus", OutputMode::Human), LineOutcome::Failed);
        assert_eq!(run_line(&ex, "", OutputMode::Human), LineOutcome::Ok);
        assert_eq!(run_line(&ex, "help", OutputMode::Human), LineOutcome::Ok);
        assert_eq!(run_line(&ex, "exit", OutputMode::Human), LineOutcome::Quit);
    }

    #[test]
    fn test_pipe_accumulates_across_lines() {
        let ex = executor();
        let input = "update 3 1 2\nupdate 3 3 4\nquery 3 25\n";
        assert_eq!(run_lines(&ex, input.as_bytes(), OutputMode::Json), 0);
        assert_eq!(ex.store().len(PoolId::new(3)), Some(4));
    }

    #[test]
    fn test_pipe_failure_sets_exit_code_but_continues() {
        let ex = executor();
        let input = "query 5 50\nupdate 5 10\n";
        assert_eq!(run_lines(&ex, input.as_bytes(), OutputMode::Human), 1);
        assert_eq!(ex.store().len(PoolId::new(5)), Some(1));
    }

    #[test]
    fn test_pipe_stops_at_quit() {
        let ex = executor();
        let input = "update 1 1\nquit\nupdate 2 2\n";
        assert_eq!(run_lines(&ex, input.as_bytes(), OutputMode::Human), 0);
        assert!(!ex.store().contains(PoolId::new(2)));
    }
}
