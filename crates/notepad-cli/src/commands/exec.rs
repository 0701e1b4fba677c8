//! `exec`: drive the host bridge from the command line.

use std::io::Read;
use std::path::Path;

use notepad_core::NotepadUtils;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::app::AppContext;
use crate::cli::ExecArgs;
use crate::errors::CliError;
use crate::helpers::parse_json_args;
use crate::ui::print_json;

/// One entry of a `--batch` file.
#[derive(Debug, Deserialize)]
struct BatchCall {
    action: String,
    #[serde(default)]
    args: Vec<Value>,
}

pub fn handle_exec(ctx: &AppContext, args: &ExecArgs) -> anyhow::Result<()> {
    let max_history = ctx.config()?.history.max_entries;
    let mut utils = NotepadUtils::new().with_max_history(max_history);

    if let Some(source) = args.batch.as_deref() {
        let calls = read_batch(source)?;
        let results = run_batch(&mut utils, &calls)?;
        return print_json(&results);
    }

    // clap guarantees ACTION when --batch is absent
    let action = args.action.as_deref().unwrap_or_default();
    let call_args = parse_json_args(args.args.as_deref())?;
    let result = utils.execute(action, &call_args).map_err(CliError::from)?;
    print_json(&result)
}

/// Run calls in order against one session, stopping at the first bad call.
fn run_batch(utils: &mut NotepadUtils, calls: &[BatchCall]) -> anyhow::Result<Vec<Value>> {
    let mut results = Vec::with_capacity(calls.len());
    for (index, call) in calls.iter().enumerate() {
        debug!(index, action = %call.action, "batch call");
        let result = utils.execute(&call.action, &call.args).map_err(|e| {
            CliError::invalid_input(format!("Call {} ({}): {}", index + 1, call.action, e))
        })?;
        results.push(result);
    }
    Ok(results)
}

fn read_batch(source: &str) -> anyhow::Result<Vec<BatchCall>> {
    let contents = if source == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| anyhow::anyhow!("Failed to read stdin: {}", e))?;
        buffer
    } else {
        let path = Path::new(source);
        if !path.exists() {
            return Err(CliError::not_found(
                format!("Batch file not found: {}", path.display()),
                "Hint: Pass a JSON file path, or '-' to read from stdin.",
            )
            .into());
        }
        std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?
    };
    serde_json::from_str(&contents).map_err(|e| {
        anyhow::Error::from(CliError::invalid_input(format!("Invalid batch JSON: {}", e)))
    })
}
