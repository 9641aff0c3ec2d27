//! One operation per fault kind.
//!
//! Every operation builds its own inputs, provokes its fault, catches it,
//! emits exactly one diagnostic and returns an `Option`. `None` is the
//! absent-result marker on every fault path; nothing here panics or returns
//! an error to the caller.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use rand::Rng;

use crate::config::FaultConfig;
use crate::diagnostics::{Diagnostic, Diagnostics, Operation};
use crate::error::Fault;
use crate::value::Value;

/// Turn an operation's result into one diagnostic plus an optional value.
fn settle<T, D>(
    diagnostics: &mut D,
    operation: Operation,
    result: Result<T, Fault>,
    describe: impl FnOnce(&T) -> String,
) -> Option<T>
where
    D: Diagnostics + ?Sized,
{
    match result {
        Ok(value) => {
            diagnostics.emit(Diagnostic::Succeeded {
                operation,
                detail: describe(&value),
            });
            Some(value)
        }
        Err(fault) => {
            diagnostics.emit(Diagnostic::Faulted { operation, fault });
            None
        }
    }
}

// =============================================================================
// Arithmetic
// =============================================================================

/// Draw `(numerator, denominator)`: numerator in `1..=10`, denominator either
/// `0` or another value in `1..=10`, each with equal probability.
pub fn random_operands<R: Rng + ?Sized>(rng: &mut R) -> (i64, i64) {
    let numerator = rng.gen_range(1..=10);
    let denominator = if rng.gen_bool(0.5) {
        0
    } else {
        rng.gen_range(1..=10)
    };
    (numerator, denominator)
}

fn checked_quotient(numerator: i64, denominator: i64) -> Result<f64, Fault> {
    if denominator == 0 {
        return Err(Fault::DivisionByZero { numerator });
    }
    Ok(numerator as f64 / denominator as f64)
}

/// `None` when `denominator` is zero.
pub fn divide<D>(numerator: i64, denominator: i64, diagnostics: &mut D) -> Option<f64>
where
    D: Diagnostics + ?Sized,
{
    settle(
        diagnostics,
        Operation::Divide,
        checked_quotient(numerator, denominator),
        |q| format!("{numerator} / {denominator} = {q}"),
    )
}

// =============================================================================
// Filesystem
// =============================================================================

fn io_fault(path: &Path, err: io::Error) -> Fault {
    match err.kind() {
        io::ErrorKind::NotFound => Fault::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => Fault::FileUnreadable {
            path: path.to_path_buf(),
            reason: err.to_string(),
        },
    }
}

fn read_contents(path: &Path) -> Result<String, Fault> {
    let mut file = File::open(path).map_err(|e| io_fault(path, e))?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| io_fault(path, e))?;
    Ok(contents)
}

/// Read `path`, which is expected not to exist.
///
/// The handle lives only inside `read_contents`, so it is closed on both the
/// success and the failure path.
pub fn read_missing_file<D>(path: &Path, diagnostics: &mut D) -> Option<String>
where
    D: Diagnostics + ?Sized,
{
    settle(
        diagnostics,
        Operation::ReadMissingFile,
        read_contents(path),
        |contents| format!("read {} bytes from '{}'", contents.len(), path.display()),
    )
}

// =============================================================================
// Absent object
// =============================================================================

#[derive(Debug, Default, Clone, Copy)]
pub struct Widget;

impl Widget {
    pub fn some_method(&self) -> &'static str {
        "some_method called"
    }
}

pub fn call_some_method<D>(widget: Option<&Widget>, diagnostics: &mut D) -> Option<&'static str>
where
    D: Diagnostics + ?Sized,
{
    let result = widget.map(Widget::some_method).ok_or(Fault::AbsentObject {
        method: "some_method",
    });
    settle(
        diagnostics,
        Operation::InvokeOnAbsentObject,
        result,
        |s| s.to_string(),
    )
}

pub fn invoke_on_absent_object<D>(diagnostics: &mut D) -> Option<&'static str>
where
    D: Diagnostics + ?Sized,
{
    let widget: Option<Widget> = None;
    call_some_method(widget.as_ref(), diagnostics)
}

// =============================================================================
// Parsing
// =============================================================================

pub fn parse_integer<D>(text: &str, diagnostics: &mut D) -> Option<i64>
where
    D: Diagnostics + ?Sized,
{
    let result = text.parse::<i64>().map_err(|e| Fault::NotANumber {
        input: text.to_string(),
        reason: e.to_string(),
    });
    settle(
        diagnostics,
        Operation::ParseNonNumericText,
        result,
        |n| format!("parsed '{text}' as {n}"),
    )
}

pub fn parse_non_numeric_text<D>(config: &FaultConfig, diagnostics: &mut D) -> Option<i64>
where
    D: Diagnostics + ?Sized,
{
    parse_integer(&config.non_numeric_text, diagnostics)
}

// =============================================================================
// Indexing and lookup
// =============================================================================

/// `None` is the sentinel for an index past the end.
pub fn element_at<D>(sequence: &[i64], index: usize, diagnostics: &mut D) -> Option<i64>
where
    D: Diagnostics + ?Sized,
{
    let result = sequence
        .get(index)
        .copied()
        .ok_or(Fault::IndexOutOfRange {
            index,
            len: sequence.len(),
        });
    settle(
        diagnostics,
        Operation::IndexPastBounds,
        result,
        |n| format!("element {index} is {n}"),
    )
}

pub fn index_past_bounds<D>(config: &FaultConfig, diagnostics: &mut D) -> Option<i64>
where
    D: Diagnostics + ?Sized,
{
    element_at(&config.sequence, config.index, diagnostics)
}

/// The two-entry record the lookup demo reads from.
pub fn fixed_mapping() -> BTreeMap<&'static str, Value> {
    BTreeMap::from([("name", Value::from("John")), ("age", Value::from(30_i64))])
}

pub fn lookup<D>(mapping: &BTreeMap<&str, Value>, key: &str, diagnostics: &mut D) -> Option<Value>
where
    D: Diagnostics + ?Sized,
{
    let result = mapping.get(key).cloned().ok_or_else(|| Fault::MissingKey {
        key: key.to_string(),
    });
    settle(
        diagnostics,
        Operation::LookupMissingKey,
        result,
        |v| format!("{key} = {v}"),
    )
}

pub fn lookup_missing_key<D>(config: &FaultConfig, diagnostics: &mut D) -> Option<Value>
where
    D: Diagnostics + ?Sized,
{
    lookup(&fixed_mapping(), &config.missing_key, diagnostics)
}

// =============================================================================
// Type mismatch
// =============================================================================

pub fn combine<D>(left: &Value, right: &Value, diagnostics: &mut D) -> Option<Value>
where
    D: Diagnostics + ?Sized,
{
    settle(
        diagnostics,
        Operation::CombineIncompatibleTypes,
        left.concat(right),
        |v| format!("{left} + {right} = {v}"),
    )
}

pub fn combine_incompatible_types<D>(config: &FaultConfig, diagnostics: &mut D) -> Option<Value>
where
    D: Diagnostics + ?Sized,
{
    combine(&config.concat_left, &config.concat_right, diagnostics)
}

// =============================================================================
// Orchestration
// =============================================================================

/// Emit `Starting`, then run every operation once in [`Operation::ORDER`].
pub fn run_all<R, D>(config: &FaultConfig, rng: &mut R, diagnostics: &mut D)
where
    R: Rng + ?Sized,
    D: Diagnostics + ?Sized,
{
    diagnostics.emit(Diagnostic::Starting);

    let (numerator, denominator) = random_operands(rng);
    divide(numerator, denominator, diagnostics);
    read_missing_file(&config.missing_file, diagnostics);
    invoke_on_absent_object(diagnostics);
    parse_non_numeric_text(config, diagnostics);
    index_past_bounds(config, diagnostics);
    lookup_missing_key(config, diagnostics);
    combine_incompatible_types(config, diagnostics);
}
