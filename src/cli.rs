use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::domain::models::BriefOptions;

pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Parser, Debug)]
#[command(
    name = "decision-brief",
    version,
    about = "Turn a decision-framing request into a deterministic advisory brief"
)]
pub struct Cli {
    /// Path to the request document (JSON)
    #[arg(long)]
    pub input: Option<PathBuf>,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
    /// Also write the rendered brief to this file (overwritten)
    #[arg(long)]
    pub out: Option<PathBuf>,
    /// Log filter (trace, debug, info, warn, error)
    #[arg(long, env = "DECISION_BRIEF_LOG", default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,
}

impl Cli {
    pub fn options(&self) -> BriefOptions {
        BriefOptions {
            format: self.format,
            out: self.out.clone(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Md,
    Both,
}
