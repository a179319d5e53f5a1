use schemars::schema_for;
use vera_core::VerdictResult;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::output;

/// Handle `vera schema`. Always JSON; table output makes no sense for a schema.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = schema_for!(VerdictResult);
    let format = if flags.format == OutputFormat::Raw {
        OutputFormat::Raw
    } else {
        OutputFormat::Json
    };
    output::output(&schema, format)
}
