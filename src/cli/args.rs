//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

/// Value helpers over JSON: falsy checks, key omission, equality, tree display
#[derive(Parser, Debug)]
#[command(name = "valkit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Directory holding a local .valkit.toml (default: cwd)
    #[arg(short = 'C', long, global = true, value_hint = ValueHint::DirPath)]
    pub config_dir: Option<PathBuf>,

    /// Emit compact JSON regardless of config
    #[arg(long, global = true)]
    pub compact: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check if a value is falsy or only spaces (0 is not)
    Falsy {
        /// JSON literal; raw text when not valid JSON, undefined when omitted
        value: Option<String>,
    },

    /// Print a JSON object without the given keys
    Omit {
        /// Input file (default: stdin)
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
        /// Keys to remove
        #[arg(required = true)]
        keys: Vec<String>,
    },

    /// Compare two JSON values
    Equals {
        /// First JSON value
        a: String,
        /// Second JSON value
        b: String,
    },

    /// Show a JSON tree (nested `children` arrays)
    Tree {
        /// Input file (default: stdin)
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
        /// Record field used as node label (overrides config)
        #[arg(short, long)]
        label: Option<String>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective settings
    Show,
    /// Show config file locations
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    // https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#testing
    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn given_omit_with_keys_when_parsing_then_collects_keys() {
        let cli = Cli::try_parse_from(["valkit", "omit", "-f", "doc.json", "a", "b"]).unwrap();
        match cli.command {
            Some(Commands::Omit { file, keys }) => {
                assert_eq!(file, Some(PathBuf::from("doc.json")));
                assert_eq!(keys, vec!["a", "b"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn given_repeated_debug_flag_when_parsing_then_counts() {
        let cli = Cli::try_parse_from(["valkit", "-ddd", "falsy", "0"]).unwrap();
        assert_eq!(cli.debug, 3);
    }
}
