use std::io::Read;
use std::path::Path;

use serde_json::Value;

use crate::cmd::{resolve_definition, CheckArgs};
use crate::exit::{io_error, CliError, CliResult, DATA_INVALID, SUCCESS};
use crate::output::{print_outcomes, CheckOutcome, OutputFormat};

pub fn run(args: CheckArgs, format: OutputFormat) -> CliResult<i32> {
    let definition =
        resolve_definition(args.spec.as_deref(), args.spec_file.as_deref())?.named(args.name);

    let raw = read_input(&args.input)?;
    let values = parse_values(&raw, args.ndjson)?;

    let outcomes: Vec<CheckOutcome> = values
        .iter()
        .enumerate()
        .map(|(index, value)| match definition.validate(Some(value)) {
            Ok(()) => CheckOutcome {
                index,
                valid: true,
                error: None,
            },
            Err(err) => CheckOutcome {
                index,
                valid: false,
                error: Some(err.to_string()),
            },
        })
        .collect();

    print_outcomes(&outcomes, format);

    if outcomes.iter().all(|outcome| outcome.valid) {
        Ok(SUCCESS)
    } else {
        Ok(DATA_INVALID)
    }
}

fn read_input(path: &Path) -> CliResult<String> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|err| io_error("failed reading stdin", err))?;
        return Ok(buffer);
    }
    std::fs::read_to_string(path)
        .map_err(|err| io_error(&format!("failed reading {}", path.display()), err))
}

fn parse_values(raw: &str, ndjson: bool) -> CliResult<Vec<Value>> {
    if ndjson {
        raw.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                serde_json::from_str(line).map_err(|err| {
                    CliError::new(DATA_INVALID, format!("input line is not valid JSON: {err}"))
                })
            })
            .collect()
    } else {
        let value = serde_json::from_str(raw).map_err(|err| {
            CliError::new(DATA_INVALID, format!("input is not valid JSON: {err}"))
        })?;
        Ok(vec![value])
    }
}
