use crate::cli::OutputFormat;
use crate::domain::constants::{ACTION_WINDOWS, MISSING_QUESTION};
use crate::domain::models::Report;
use serde::Serialize;

/// The `both` form: the report with its Markdown under a `markdown` key.
#[derive(Serialize)]
struct ReportWithMarkdown<'a> {
    #[serde(flatten)]
    report: &'a Report,
    markdown: String,
}

pub fn render(report: &Report, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => render_json(report),
        OutputFormat::Md => Ok(render_markdown(report)),
        OutputFormat::Both => Ok(serde_json::to_string_pretty(&ReportWithMarkdown {
            report,
            markdown: render_markdown(report),
        })?),
    }
}

/// Two-space indented JSON, no trailing newline.
pub fn render_json(report: &Report) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Fixed document skeleton consumed by downstream tooling: headings, order
/// and bullet punctuation must not drift.
pub fn render_markdown(report: &Report) -> String {
    let s = &report.summary;
    let question = if report.question.is_empty() {
        MISSING_QUESTION
    } else {
        report.question.as_str()
    };

    let mut lines: Vec<String> = vec![
        "# Decision Brief".to_string(),
        String::new(),
        "## Question".to_string(),
        question.to_string(),
        String::new(),
        "## Direction".to_string(),
        format!("- **Mode:** {}", s.direction),
        format!("- **Confidence:** {}", s.confidence),
        format!("- **Risk tolerance:** {}", report.risk_tolerance),
        format!("- **Time horizon:** {}", report.time_horizon),
        format!("- **Urgency score:** {}", s.urgency_score),
        format!("- **Action bias:** {}", s.action_bias),
        String::new(),
        "## Constraints".to_string(),
    ];

    if s.constraints.is_empty() {
        lines.push("- none".to_string());
    } else {
        lines.extend(
            s.constraints
                .iter()
                .map(|c| format!("- {} [severity: {}]", c.text, c.severity)),
        );
    }

    lines.extend([
        String::new(),
        "## Recommendation".to_string(),
        s.recommendation.to_string(),
        String::new(),
        "## Risk matrix".to_string(),
    ]);

    if report.risk_matrix.is_empty() {
        lines.push("- none".to_string());
    } else {
        lines.extend(report.risk_matrix.iter().map(|e| {
            format!("- {}: {} (mitigation: {})", e.vector, e.level, e.mitigation)
        }));
    }

    lines.extend([
        String::new(),
        "## Dissent map".to_string(),
        format!("- advisor count: {}", report.dissent_metrics.advisor_count),
        format!("- variance score: {}", report.dissent_metrics.variance_score),
    ]);

    if report.dissent_map.is_empty() {
        lines.push("- none".to_string());
    } else {
        lines.extend(report.dissent_map.iter().map(|e| {
            format!("- {}: {} (confidence: {})", e.advisor, e.stance, e.confidence)
        }));
    }

    lines.push(String::new());
    lines.push("## Action windows".to_string());
    lines.extend(ACTION_WINDOWS.iter().map(|l| l.to_string()));
    lines.push(String::new());

    lines.join("\n")
}
