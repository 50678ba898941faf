//! clap command trees.
//!
//! `build_cli` parses the process arguments. `build_repl_cmd` parses one
//! line of REPL or piped input after it has been split with shlex.

use clap::{value_parser, Arg, ArgAction, Command};

/// Top-level process arguments.
pub fn build_cli() -> Command {
    Command::new("poolstat")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Interactive shell over an in-memory poolstat store")
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print results in the JSON wire format"),
        )
        .arg(
            Arg::new("max-pool-size")
                .long("max-pool-size")
                .value_name("N")
                .value_parser(value_parser!(usize))
                .help("Maximum number of samples a pool may hold"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("PATH")
                .help("Store configuration file (TOML)"),
        )
}

/// Command tree for a single line of input.
pub fn build_repl_cmd() -> Command {
    Command::new("poolstat")
        .no_binary_name(true)
        .disable_help_subcommand(true)
        .disable_version_flag(true)
        .subcommand_required(true)
        .subcommand(
            Command::new("update")
                .about("Insert a pool or append samples to it")
                .arg(pool_id_arg())
                .arg(
                    Arg::new("values")
                        .value_name("VALUE")
                        .num_args(0..)
                        .allow_negative_numbers(true)
                        .value_parser(value_parser!(f64))
                        .help("Samples to add"),
                ),
        )
        .subcommand(
            Command::new("query")
                .about("Compute a percentile of a pool")
                .arg(pool_id_arg())
                .arg(
                    Arg::new("percentile")
                        .required(true)
                        .allow_negative_numbers(true)
                        .value_parser(value_parser!(f64))
                        .help("Percentile strictly between 0 and 100"),
                ),
        )
        .subcommand(
            Command::new("len")
                .about("Number of samples in a pool")
                .arg(pool_id_arg()),
        )
        .subcommand(Command::new("info").about("Store summary"))
        .subcommand(Command::new("ping").about("Check the store is alive"))
}

fn pool_id_arg() -> Arg {
    Arg::new("pool_id")
        .value_name("POOL_ID")
        .required(true)
        .allow_negative_numbers(true)
        .value_parser(value_parser!(i64))
        .help("Integer pool identifier")
}
