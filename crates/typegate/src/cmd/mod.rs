use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use typegate_spec::{TypeDefinition, TypeSpec};

use crate::exit::{io_error, spec_error, CliError, CliResult, USAGE};
use crate::output::OutputFormat;

pub mod check;
pub mod explain;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate JSON values against a type spec.
    Check(CheckArgs),
    /// Normalize a type spec and print the resolved definition.
    Explain(ExplainArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Check(args) => check::run(args, format),
        Command::Explain(args) => explain::run(args, format),
    }
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Input file with the value(s) to check, or '-' for stdin.
    pub input: PathBuf,
    /// Inline spec JSON (e.g. '["string","number"]').
    #[arg(long, conflicts_with = "spec_file")]
    pub spec: Option<String>,
    /// Read the spec from a JSON file.
    #[arg(long, value_name = "FILE", conflicts_with = "spec")]
    pub spec_file: Option<PathBuf>,
    /// Treat input as newline-delimited JSON, one value per line.
    #[arg(long)]
    pub ndjson: bool,
    /// Name attached to checked values in error messages.
    #[arg(long, default_value = "input")]
    pub name: String,
}

#[derive(Args, Debug)]
pub struct ExplainArgs {
    /// Inline spec JSON.
    #[arg(long, conflicts_with = "spec_file")]
    pub spec: Option<String>,
    /// Read the spec from a JSON file.
    #[arg(long, value_name = "FILE", conflicts_with = "spec")]
    pub spec_file: Option<PathBuf>,
}

/// Resolve `--spec`/`--spec-file` into a normalized definition.
pub(crate) fn resolve_definition(
    spec: Option<&str>,
    spec_file: Option<&Path>,
) -> CliResult<TypeDefinition> {
    let raw = match (spec, spec_file) {
        (Some(inline), None) => inline.to_string(),
        (None, Some(path)) => std::fs::read_to_string(path)
            .map_err(|err| io_error(&format!("failed reading {}", path.display()), err))?,
        (None, None) => {
            return Err(CliError::new(USAGE, "either --spec or --spec-file is required"));
        }
        // clap's conflicts_with already rejects this; keep the parse total
        (Some(_), Some(_)) => {
            return Err(CliError::new(USAGE, "--spec conflicts with --spec-file"));
        }
    };

    let spec: TypeSpec = serde_json::from_str(&raw)
        .map_err(|err| CliError::new(USAGE, format!("spec is not valid JSON: {err}")))?;
    TypeDefinition::new(spec).map_err(|err| spec_error("invalid spec", err))
}
