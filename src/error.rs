use std::path::PathBuf;

use thiserror::Error;

/// The seven fault categories the demonstrator knows how to provoke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaultKind {
    Arithmetic,
    ResourceAbsent,
    NullReference,
    Parse,
    Bounds,
    Lookup,
    TypeMismatch,
}

impl FaultKind {
    pub const ALL: [FaultKind; 7] = [
        FaultKind::Arithmetic,
        FaultKind::ResourceAbsent,
        FaultKind::NullReference,
        FaultKind::Parse,
        FaultKind::Bounds,
        FaultKind::Lookup,
        FaultKind::TypeMismatch,
    ];

    /// Short label used at the start of every fault diagnostic.
    pub fn label(self) -> &'static str {
        match self {
            FaultKind::Arithmetic => "division by zero",
            FaultKind::ResourceAbsent => "file not found",
            FaultKind::NullReference => "attribute error",
            FaultKind::Parse => "value error",
            FaultKind::Bounds => "index error",
            FaultKind::Lookup => "key error",
            FaultKind::TypeMismatch => "type error",
        }
    }
}

/// A caught fault together with the context that produced it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Fault {
    #[error("division by zero: cannot divide {numerator} by 0")]
    DivisionByZero { numerator: i64 },

    #[error("file not found: '{}'", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("file not found: '{}' exists but cannot be read ({reason})", .path.display())]
    FileUnreadable { path: PathBuf, reason: String },

    #[error("attribute error: absent object has no method '{method}'")]
    AbsentObject { method: &'static str },

    #[error("value error: cannot parse '{input}' as an integer ({reason})")]
    NotANumber { input: String, reason: String },

    #[error("index error: index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("key error: '{key}' is not present")]
    MissingKey { key: String },

    #[error("type error: cannot combine {left} with {right}")]
    TypeMismatch {
        left: &'static str,
        right: &'static str,
    },
}

impl Fault {
    pub fn kind(&self) -> FaultKind {
        match self {
            Fault::DivisionByZero { .. } => FaultKind::Arithmetic,
            Fault::FileNotFound { .. } | Fault::FileUnreadable { .. } => FaultKind::ResourceAbsent,
            Fault::AbsentObject { .. } => FaultKind::NullReference,
            Fault::NotANumber { .. } => FaultKind::Parse,
            Fault::IndexOutOfRange { .. } => FaultKind::Bounds,
            Fault::MissingKey { .. } => FaultKind::Lookup,
            Fault::TypeMismatch { .. } => FaultKind::TypeMismatch,
        }
    }
}

/// Errors that can stop the binary before the demonstration starts.
#[derive(Error, Debug)]
pub enum DemoError {
    #[error("failed to install logger: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("failed to talk to the terminal: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_fault_message_starts_with_its_kind_label() {
        let faults = vec![
            Fault::DivisionByZero { numerator: 7 },
            Fault::FileNotFound {
                path: PathBuf::from("missing.txt"),
            },
            Fault::FileUnreadable {
                path: PathBuf::from("locked.txt"),
                reason: "permission denied".to_string(),
            },
            Fault::AbsentObject {
                method: "some_method",
            },
            Fault::NotANumber {
                input: "abc".to_string(),
                reason: "invalid digit found in string".to_string(),
            },
            Fault::IndexOutOfRange { index: 5, len: 3 },
            Fault::MissingKey {
                key: "address".to_string(),
            },
            Fault::TypeMismatch {
                left: "text",
                right: "integer",
            },
        ];

        for fault in faults {
            let display = fault.to_string();
            assert!(
                display.starts_with(fault.kind().label()),
                "'{}' should start with '{}'",
                display,
                fault.kind().label()
            );
        }
    }

    #[test]
    fn test_kind_labels_are_distinct() {
        let mut labels: Vec<_> = FaultKind::ALL.iter().map(|k| k.label()).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), 7);
    }

    #[test]
    fn test_unreadable_file_is_still_a_resource_fault() {
        let fault = Fault::FileUnreadable {
            path: PathBuf::from("dir"),
            reason: "is a directory".to_string(),
        };
        assert_eq!(fault.kind(), FaultKind::ResourceAbsent);
        assert!(fault.to_string().contains("'dir'"));
    }

    #[test]
    fn test_fault_is_send_and_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}
        assert_send::<Fault>();
        assert_sync::<Fault>();
    }
}
