use crate::cmd::{resolve_definition, ExplainArgs};
use crate::exit::{CliResult, SUCCESS};
use crate::output::{print_definition, OutputFormat};

pub fn run(args: ExplainArgs, format: OutputFormat) -> CliResult<i32> {
    let definition = resolve_definition(args.spec.as_deref(), args.spec_file.as_deref())?;
    print_definition(&definition, format);
    Ok(SUCCESS)
}
