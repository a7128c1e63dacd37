use std::io::IsTerminal;

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;
use typegate_spec::TypeDefinition;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

/// Outcome of checking one input value.
#[derive(Serialize)]
pub struct CheckOutcome {
    pub index: usize,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub fn print_outcomes(outcomes: &[CheckOutcome], format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            for outcome in outcomes {
                println!(
                    "{}",
                    serde_json::to_string(outcome).unwrap_or_else(|_| "{}".to_string())
                );
            }
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["INDEX", "VALID", "ERROR"]);
            for outcome in outcomes {
                table.add_row(vec![
                    outcome.index.to_string(),
                    outcome.valid.to_string(),
                    outcome.error.clone().unwrap_or_default(),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            for outcome in outcomes {
                match &outcome.error {
                    None => println!("value {}: ok", outcome.index),
                    Some(error) => println!("value {}: invalid ({error})", outcome.index),
                }
            }
        }
    }
}

pub fn print_definition(definition: &TypeDefinition, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let out = serde_json::json!({
                "name": definition.name(),
                "allowUndefined": definition.allow_undefined(),
                "allowNull": definition.allow_null(),
                "allowEmpty": definition.allow_empty(),
                "expected": definition.expected(),
            });
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["PROPERTY", "VALUE"])
                .add_row(vec!["name".to_string(), definition.name().to_string()])
                .add_row(vec![
                    "allowUndefined".to_string(),
                    definition.allow_undefined().to_string(),
                ])
                .add_row(vec![
                    "allowNull".to_string(),
                    definition.allow_null().to_string(),
                ])
                .add_row(vec![
                    "allowEmpty".to_string(),
                    definition.allow_empty().to_string(),
                ])
                .add_row(vec!["expected".to_string(), definition.expected()]);
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!(
                "name={} allowUndefined={} allowNull={} allowEmpty={} expected={}",
                if definition.name().is_empty() {
                    "<unnamed>"
                } else {
                    definition.name()
                },
                definition.allow_undefined(),
                definition.allow_null(),
                definition.allow_empty(),
                definition.expected()
            );
        }
    }
}
