//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `brief.rs` — read, validate, assemble, render and emit one brief.
//!
//! ## Principles
//! - Resolve CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod brief;

pub use brief::handle_brief;
