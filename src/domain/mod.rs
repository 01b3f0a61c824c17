//! Shared data model layer (structs/constants only).
//!
//! ## Purpose
//! - Keep request/report structs in one place.
//! - Avoid cyclic imports and duplicated type definitions.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — categorical levels, normalized constraints, report structs.
//! - `constants.rs` — literal sentences, mitigations, defaults and usage text.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem side effects.
//!
//! ## Compatibility note
//! Field names and order of `Report` are the `--format json` contract.
//! Keep schema-impacting changes synchronized with `docs/contracts/brief.schema.json`.

pub mod constants;
pub mod models;
