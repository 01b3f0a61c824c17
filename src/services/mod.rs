//! Service layer containing the brief pipeline and its single side effect.
//!
//! ## Service map
//! - `validation.rs` — strict shape/enum checks on the raw request.
//! - `normalize.rs` — permissive constraint canonicalization.
//! - `scoring.rs` — risk/horizon/penalty scalars, confidence, urgency, labels.
//! - `risk_matrix.rs` — fixed three-vector matrix and its aggregate.
//! - `dissent.rs` — canned advisor stances and their spread.
//! - `report.rs` — assembles the flat report.
//! - `render.rs` — JSON / Markdown / both.
//! - `output.rs` — file + stdout sink.
//!
//! ## Conventions
//! - Everything except `output.rs` is pure.
//! - Validation and normalization stay separate layers: the downstream
//!   services tolerate input the validator would reject.
//! - Keep command handlers thin; delegate to services.

pub mod dissent;
pub mod normalize;
pub mod output;
pub mod render;
pub mod report;
pub mod risk_matrix;
pub mod scoring;
pub mod validation;
