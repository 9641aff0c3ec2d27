//! The side channel every operation reports through.
//!
//! Each operation emits exactly one [`Diagnostic`] per call: either
//! [`Diagnostic::Succeeded`] or [`Diagnostic::Faulted`]. The orchestration
//! adds a single [`Diagnostic::Starting`] in front.

use log::{info, warn};

use crate::error::Fault;

/// The seven demo operations, in the order `run_all` invokes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Divide,
    ReadMissingFile,
    InvokeOnAbsentObject,
    ParseNonNumericText,
    IndexPastBounds,
    LookupMissingKey,
    CombineIncompatibleTypes,
}

impl Operation {
    pub const ORDER: [Operation; 7] = [
        Operation::Divide,
        Operation::ReadMissingFile,
        Operation::InvokeOnAbsentObject,
        Operation::ParseNonNumericText,
        Operation::IndexPastBounds,
        Operation::LookupMissingKey,
        Operation::CombineIncompatibleTypes,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Operation::Divide => "divide",
            Operation::ReadMissingFile => "read_missing_file",
            Operation::InvokeOnAbsentObject => "invoke_on_absent_object",
            Operation::ParseNonNumericText => "parse_non_numeric_text",
            Operation::IndexPastBounds => "index_past_bounds",
            Operation::LookupMissingKey => "lookup_missing_key",
            Operation::CombineIncompatibleTypes => "combine_incompatible_types",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    Starting,
    Succeeded { operation: Operation, detail: String },
    Faulted { operation: Operation, fault: Fault },
}

impl Diagnostic {
    pub fn operation(&self) -> Option<Operation> {
        match self {
            Diagnostic::Starting => None,
            Diagnostic::Succeeded { operation, .. } | Diagnostic::Faulted { operation, .. } => {
                Some(*operation)
            }
        }
    }

    pub fn fault(&self) -> Option<&Fault> {
        match self {
            Diagnostic::Faulted { fault, .. } => Some(fault),
            _ => None,
        }
    }

    /// Human-readable line, as printed by [`LogDiagnostics`].
    pub fn line(&self) -> String {
        match self {
            Diagnostic::Starting => "Simulating errors...".to_string(),
            Diagnostic::Succeeded { detail, .. } => format!("ok: {detail}"),
            Diagnostic::Faulted { fault, .. } => format!("{fault} (caught)"),
        }
    }
}

pub trait Diagnostics {
    fn emit(&mut self, diagnostic: Diagnostic);
}

/// Records diagnostics in emission order.
impl Diagnostics for Vec<Diagnostic> {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Forwards diagnostics to the `log` facade.
///
/// Faults are logged at `WARN`, everything else at `INFO`. The record target
/// is `fault_demo::<operation>` so each line names the operation it came from.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn emit(&mut self, diagnostic: Diagnostic) {
        let line = diagnostic.line();
        match diagnostic.operation() {
            None => info!(target: "fault_demo", "{line}"),
            Some(op) => {
                let target = format!("fault_demo::{}", op.name());
                if diagnostic.fault().is_some() {
                    warn!(target: target.as_str(), "{line}");
                } else {
                    info!(target: target.as_str(), "{line}");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_has_seven_distinct_operations() {
        let mut names: Vec<_> = Operation::ORDER.iter().map(|op| op.name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 7);
        assert_eq!(Operation::ORDER[0], Operation::Divide);
        assert_eq!(Operation::ORDER[6], Operation::CombineIncompatibleTypes);
    }

    #[test]
    fn test_fault_line_is_distinguishable_from_success() {
        let fault = Diagnostic::Faulted {
            operation: Operation::Divide,
            fault: Fault::DivisionByZero { numerator: 4 },
        };
        let success = Diagnostic::Succeeded {
            operation: Operation::Divide,
            detail: "4 / 2 = 2".to_string(),
        };

        assert!(fault.line().starts_with("division by zero"));
        assert!(success.line().starts_with("ok:"));
        assert_ne!(fault.line(), success.line());
    }

    #[test]
    fn test_starting_has_no_operation() {
        assert_eq!(Diagnostic::Starting.operation(), None);
        assert!(Diagnostic::Starting.fault().is_none());
    }

    #[test]
    fn test_vec_records_in_order() {
        let mut sink: Vec<Diagnostic> = Vec::new();
        sink.emit(Diagnostic::Starting);
        sink.emit(Diagnostic::Faulted {
            operation: Operation::LookupMissingKey,
            fault: Fault::MissingKey {
                key: "address".to_string(),
            },
        });
        assert_eq!(sink.len(), 2);
        assert_eq!(sink[1].operation(), Some(Operation::LookupMissingKey));
    }

    #[test]
    fn test_log_diagnostics_does_not_panic() {
        let mut sink = LogDiagnostics;
        sink.emit(Diagnostic::Starting);
        sink.emit(Diagnostic::Faulted {
            operation: Operation::IndexPastBounds,
            fault: Fault::IndexOutOfRange { index: 5, len: 3 },
        });
    }
}
