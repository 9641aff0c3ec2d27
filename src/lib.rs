//! # Fault Demo
//!
//! Provokes and catches one runtime fault per category, reporting each one
//! through a diagnostic side channel.
//!
//! ## Fault Kinds
//!
//! 1. **Arithmetic** - division by a zero denominator
//! 2. **Resource absent** - opening a file that does not exist
//! 3. **Null reference** - calling a method through an absent object
//! 4. **Parse** - converting non-numeric text to an integer
//! 5. **Bounds** - reading index 5 of a three-element sequence
//! 6. **Lookup** - reading a key missing from a two-key mapping
//! 7. **Type mismatch** - concatenating text with an integer
//!
//! ## Running
//!
//! ```bash
//! cargo run --bin fault_demo
//! ```
//!
//! ## Key Dependencies
//!
//! - `thiserror` - Derive macro for the fault taxonomy
//! - `log` + `fern` + `colored` + `chrono` - Diagnostic output
//! - `serde` + `toml` - Configuration documents
//! - `rand` - Random division operands

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod faults;
pub mod logger;
pub mod prompt;
pub mod value;

pub use config::{FaultConfig, LogConfig};
pub use diagnostics::{Diagnostic, Diagnostics, LogDiagnostics, Operation};
pub use error::{DemoError, Fault, FaultKind};
pub use faults::run_all;
pub use value::Value;
