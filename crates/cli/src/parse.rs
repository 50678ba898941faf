//! Input line → Command/MetaCommand conversion.
//!
//! Translates one line of user input into the appropriate action:
//! - Pool and store commands → `CliAction::Execute(Command)`
//! - REPL meta-commands → `CliAction::Meta`

use clap::ArgMatches;
use poolstat_executor::{Command, PoolId};

use crate::commands::build_repl_cmd;

/// The result of parsing user input.
#[derive(Debug, PartialEq)]
pub enum CliAction {
    /// A command to run on the executor.
    Execute(Command),
    /// A shell-only meta-command.
    Meta(MetaCommand),
}

/// REPL meta-commands.
#[derive(Debug, PartialEq)]
pub enum MetaCommand {
    Help { command: Option<String> },
    Quit,
}

/// Check for meta-commands before delegating to clap.
pub fn check_meta_command(line: &str) -> Option<MetaCommand> {
    let mut parts = line.split_whitespace();
    let cmd = parts.next()?;

    match cmd {
        "quit" | "exit" => Some(MetaCommand::Quit),
        "help" => {
            let command = parts.next().map(|s| s.to_string());
            Some(MetaCommand::Help { command })
        }
        _ => None,
    }
}

/// Parse one line of input.
///
/// Returns `Ok(None)` for blank lines and `#` comments.
pub fn parse_line(line: &str) -> Result<Option<CliAction>, String> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    if let Some(meta) = check_meta_command(trimmed) {
        return Ok(Some(CliAction::Meta(meta)));
    }

    let args = shlex::split(trimmed).ok_or_else(|| "Unbalanced quotes".to_string())?;
    let matches = build_repl_cmd()
        .try_get_matches_from(args)
        .map_err(|e| e.render().to_string().trim_end().to_string())?;

    matches_to_action(&matches).map(Some)
}

/// Convert clap ArgMatches into a CliAction.
pub fn matches_to_action(matches: &ArgMatches) -> Result<CliAction, String> {
    let (sub_name, m) = matches
        .subcommand()
        .ok_or_else(|| "No command provided".to_string())?;

    let cmd = match sub_name {
        "update" => Command::PoolUpdate {
            pool_id: pool_id(m)?,
            values: m
                .get_many::<f64>("values")
                .map(|vals| vals.copied().collect())
                .unwrap_or_default(),
        },
        "query" => Command::PoolQuery {
            pool_id: pool_id(m)?,
            percentile: m
                .get_one::<f64>("percentile")
                .copied()
                .ok_or("Missing percentile")?,
        },
        "len" => Command::PoolLen {
            pool_id: pool_id(m)?,
        },
        "info" => Command::Info,
        "ping" => Command::Ping,
        other => return Err(format!("Unknown command: {}", other)),
    };
    Ok(CliAction::Execute(cmd))
}

fn pool_id(m: &ArgMatches) -> Result<PoolId, String> {
    m.get_one::<i64>("pool_id")
        .copied()
        .map(PoolId::new)
        .ok_or_else(|| "Missing pool id".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn execute(line: &str) -> Command {
        match parse_line(line).unwrap() {
            Some(CliAction::Execute(cmd)) => cmd,
            other => panic!("expected command, got {:?}", other),
        }
    }

    #[test]
    fn test_update() {
        assert_eq!(
            execute("update 1 1 2.5 -3"),
            Command::PoolUpdate {
                pool_id: PoolId::new(1),
                values: vec![1.0, 2.5, -3.0],
            }
        );
    }

    #[test]
    fn test_update_without_values() {
        assert_eq!(
            execute("update -4"),
            Command::PoolUpdate {
                pool_id: PoolId::new(-4),
                values: vec![],
            }
        );
    }

    #[test]
    fn test_query_and_len() {
        assert_eq!(
            execute("query 7 99.5"),
            Command::PoolQuery {
                pool_id: PoolId::new(7),
                percentile: 99.5,
            }
        );
        assert_eq!(
            execute("  len 7  "),
            Command::PoolLen {
                pool_id: PoolId::new(7)
            }
        );
    }

    #[test]
    fn test_out_of_range_percentile_reaches_executor() {
        // Range checks belong to the executor, so the parser lets 0 through.
        assert_eq!(
            execute("query 1 0"),
            Command::PoolQuery {
                pool_id: PoolId::new(1),
                percentile: 0.0,
            }
        );
    }

    #[test]
    fn test_store_commands() {
        assert_eq!(execute("info"), Command::Info);
        assert_eq!(execute("ping"), Command::Ping);
    }

    #[test]
    fn test_meta_commands() {
        assert_eq!(
            parse_line("quit").unwrap(),
            Some(CliAction::Meta(MetaCommand::Quit))
        );
        assert_eq!(
            parse_line("exit").unwrap(),
            Some(CliAction::Meta(MetaCommand::Quit))
        );
        assert_eq!(
            parse_line("help query").unwrap(),
            Some(CliAction::Meta(MetaCommand::Help {
                command: Some("query".to_string())
            }))
        );
    }

    #[test]
    fn test_blank_and_comment_lines() {
        assert_eq!(parse_line("").unwrap(), None);
        assert_eq!(parse_line("   ").unwrap(), None);
        assert_eq!(parse_line("# warm up pool 1").unwrap(), None);
    }

    #[test]
    fn test_errors() {
        assert!(parse_line("frobnicate").is_err());
        assert!(parse_line("update abc 1").is_err());
        assert!(parse_line("update 1 x").is_err());
        assert!(parse_line("query 1").is_err());
        assert!(parse_line("len").is_err());
        assert!(parse_line("update 1 \"2").is_err());
    }
}
