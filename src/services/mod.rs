//! Service layer containing the tool logic and side-effect helpers.
//!
//! ## Service map
//! - `copyright.rs` — notice loading, compliance check, in-place rewrite.
//! - `packaging.rs` — filtered zip of a staged build directory.
//! - `scaffold.rs` — module scaffolding + `.uproject` registration.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Command handlers stay thin; services return report structs and
//!   never print.

pub mod copyright;
pub mod output;
pub mod packaging;
pub mod scaffold;
