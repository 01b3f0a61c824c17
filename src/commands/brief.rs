use crate::*;
use serde_json::Value;
use std::path::Path;
use tracing::{debug, info};

pub fn handle_brief(cli: &Cli) -> anyhow::Result<()> {
    let Some(input) = cli.input.as_deref() else {
        return Err(BriefError::Usage.into());
    };
    let options = cli.options();

    let payload = load_request(input)?;

    let errors = validate_request(&payload);
    if !errors.is_empty() {
        debug!(count = errors.len(), "request rejected");
        return Err(BriefError::Validation(errors).into());
    }

    let report = assemble_report(&payload);
    let rendered = render(&report, options.format)?;
    info!(
        format = ?options.format,
        direction = %report.summary.direction,
        "rendered brief"
    );

    emit(&rendered, options.out.as_deref())
}

fn load_request(path: &Path) -> Result<Value, BriefError> {
    let raw = std::fs::read_to_string(path).map_err(|source| BriefError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&raw)?)
}
