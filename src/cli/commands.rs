//! Command dispatch and handlers

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::generate;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::application::{
    equals, is_falsy_or_spaces, without_props, ApplicationError, IoResultExt,
};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, local_config_path, Settings};
use crate::domain::{Document, DomainError, FalsyOrLiteral, TreeItem};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let Some(command) = &cli.command else {
        return Err(CliError::Usage("no command given, see --help".into()));
    };

    let config_dir = cli
        .config_dir
        .clone()
        .or_else(|| std::env::current_dir().ok());
    let mut settings = Settings::load(config_dir.as_deref())?;
    if cli.compact {
        settings.pretty = false;
    }
    debug!(?settings, "effective settings");

    match command {
        Commands::Falsy { value } => cmd_falsy(&settings, value.as_deref()),
        Commands::Omit { file, keys } => cmd_omit(&settings, file.as_deref(), keys),
        Commands::Equals { a, b } => cmd_equals(a, b),
        Commands::Tree { file, label } => {
            let label_key = label.as_deref().unwrap_or(&settings.label_key);
            cmd_tree(file.as_deref(), label_key)
        }
        Commands::Config { command } => match command {
            ConfigCommands::Show => cmd_config_show(&settings),
            ConfigCommands::Path => cmd_config_path(config_dir.as_deref()),
        },
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
    }
}

/// Interpret CLI text as a literal: JSON when it parses, raw string otherwise.
fn parse_literal(settings: &Settings, text: &str) -> CliResult<FalsyOrLiteral> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Null) if settings.null_as_undefined => Ok(FalsyOrLiteral::Undefined),
        Ok(value) => Ok(FalsyOrLiteral::try_from(value)?),
        Err(_) => Ok(FalsyOrLiteral::String(text.to_string())),
    }
}

/// Any JSON value, including nulls nested in arrays; raw string otherwise.
fn parse_json_or_string(text: &str) -> Value {
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

fn read_input(file: Option<&Path>) -> CliResult<String> {
    match file {
        Some(path) => Ok(fs::read_to_string(path).with_path_context("read input", path)?),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| ApplicationError::OperationFailed {
                    context: "read stdin".into(),
                    source: Box::new(e),
                })?;
            Ok(buffer)
        }
    }
}

fn to_json<T: Serialize + ?Sized>(settings: &Settings, value: &T) -> CliResult<String> {
    let text = if settings.pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .map_err(DomainError::from)?;
    Ok(text)
}

fn document_label(doc: &Document, key: &str) -> String {
    doc.get(key)
        .map(|value| value.to_string())
        .unwrap_or_else(|| "<unnamed>".to_string())
}

fn render_falsy(settings: &Settings, value: Option<&str>) -> CliResult<bool> {
    let literal = match value {
        Some(text) => parse_literal(settings, text)?,
        None => FalsyOrLiteral::Undefined,
    };
    debug!(kind = literal.kind(), %literal, "parsed literal");
    Ok(is_falsy_or_spaces(literal))
}

/// Omission works on arbitrary JSON members, nulls included.
fn render_omit(settings: &Settings, text: &str, keys: &[String]) -> CliResult<String> {
    let doc: Document<Value> = serde_json::from_str(text).map_err(DomainError::from)?;
    let rest = without_props(&doc, keys);
    to_json(settings, &rest)
}

fn render_equals(a: &str, b: &str) -> bool {
    equals(&parse_json_or_string(a), &parse_json_or_string(b))
}

fn render_tree(text: &str, label_key: &str) -> CliResult<String> {
    let tree: TreeItem<Document> = serde_json::from_str(text).map_err(DomainError::from)?;
    debug!(nodes = tree.len(), depth = tree.depth(), "parsed tree");
    Ok(tree
        .to_termtree(&|doc: &Document| document_label(doc, label_key))
        .to_string())
}

/// Known config file locations, global first.
fn config_paths(config_dir: Option<&Path>) -> Vec<(&'static str, PathBuf)> {
    let global = global_config_path().map(|path| ("global", path));
    let local = config_dir.map(|dir| ("local", local_config_path(dir)));
    global.into_iter().chain(local).collect()
}

#[instrument(skip(settings))]
fn cmd_falsy(settings: &Settings, value: Option<&str>) -> CliResult<()> {
    output::info(&render_falsy(settings, value)?);
    Ok(())
}

#[instrument(skip(settings))]
fn cmd_omit(settings: &Settings, file: Option<&Path>, keys: &[String]) -> CliResult<()> {
    let text = read_input(file)?;
    output::info(&render_omit(settings, &text, keys)?);
    Ok(())
}

#[instrument]
fn cmd_equals(a: &str, b: &str) -> CliResult<()> {
    output::info(&render_equals(a, b));
    Ok(())
}

#[instrument]
fn cmd_tree(file: Option<&Path>, label_key: &str) -> CliResult<()> {
    let text = read_input(file)?;
    output::info(&render_tree(&text, label_key)?);
    Ok(())
}

fn cmd_config_show(settings: &Settings) -> CliResult<()> {
    output::header("Effective settings");
    output::info(&settings.to_toml()?);
    Ok(())
}

fn cmd_config_path(config_dir: Option<&Path>) -> CliResult<()> {
    output::header("Config files");
    let paths = config_paths(config_dir);
    if global_config_path().is_none() {
        output::warning("no global config directory on this platform");
    }
    for (label, path) in &paths {
        output::path_status(label, path, path.exists());
    }
    Ok(())
}
