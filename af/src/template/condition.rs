//! Conditional directive operators and their evaluation

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::{RenderError, TypeMismatchError};
use crate::params::{FieldKind, Record, Value};
use crate::path::FieldPath;

/// Test applied by a conditional directive
///
/// Operators are grouped by the field types they support:
/// - **Numeric**: `Gte`, `Lte`, `Gt`, `Lt`, `Eq` against an integer literal
/// - **Boolean**: `Truthy`, `Falsy`
/// - **Any type**: `Present`, `Absent` (zero value means absent)
///
/// Numeric boundaries are inclusive exactly when the name says so: `gte 500`
/// holds for 500, `gt 500` does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Gte(i64),
    Lte(i64),
    Gt(i64),
    Lt(i64),
    Eq(i64),
    Truthy,
    Falsy,
    Present,
    Absent,
}

impl Operator {
    /// Get the lexical name of this operator
    pub fn name(&self) -> &'static str {
        match self {
            Self::Gte(_) => "gte",
            Self::Lte(_) => "lte",
            Self::Gt(_) => "gt",
            Self::Lt(_) => "lt",
            Self::Eq(_) => "eq",
            Self::Truthy => "truthy",
            Self::Falsy => "falsy",
            Self::Present => "present",
            Self::Absent => "absent",
        }
    }

    /// The integer literal of a numeric operator
    pub fn operand(&self) -> Option<i64> {
        match self {
            Self::Gte(n) | Self::Lte(n) | Self::Gt(n) | Self::Lt(n) | Self::Eq(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns `true` if this operator compares integers
    pub fn is_numeric(&self) -> bool {
        self.operand().is_some()
    }

    /// Returns `true` if this operator can be applied to a field of `kind`
    pub fn accepts(&self, kind: &FieldKind) -> bool {
        if self.is_numeric() {
            return matches!(kind, FieldKind::Int);
        }
        match self {
            Self::Truthy | Self::Falsy => matches!(kind, FieldKind::Bool),
            _ => true,
        }
    }

    /// Apply this operator to a value; `None` when the types do not match
    pub fn test(&self, value: &Value) -> Option<bool> {
        match (self, value) {
            (Self::Present, v) => Some(v.is_present()),
            (Self::Absent, v) => Some(!v.is_present()),
            (Self::Truthy, Value::Bool(b)) => Some(*b),
            (Self::Falsy, Value::Bool(b)) => Some(!*b),
            (Self::Gte(n), Value::Int(v)) => Some(v >= n),
            (Self::Lte(n), Value::Int(v)) => Some(v <= n),
            (Self::Gt(n), Value::Int(v)) => Some(v > n),
            (Self::Lt(n), Value::Int(v)) => Some(v < n),
            (Self::Eq(n), Value::Int(v)) => Some(v == n),
            _ => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.operand() {
            Some(n) => write!(f, "{} {}", self.name(), n),
            None => write!(f, "{}", self.name()),
        }
    }
}

impl FromStr for Operator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let name = parts.next().ok_or_else(|| "Empty operator".to_string())?;
        let operand = parts.next();
        if parts.next().is_some() {
            return Err(format!("Unexpected trailing input in operator: {}", s));
        }

        let numeric = |ctor: fn(i64) -> Operator| -> Result<Operator, String> {
            let raw = operand.ok_or_else(|| format!("Operator '{}' needs an integer operand", name))?;
            raw.parse::<i64>()
                .map(ctor)
                .map_err(|_| format!("Invalid integer operand '{}' for '{}'", raw, name))
        };
        let bare = |op: Operator| -> Result<Operator, String> {
            match operand {
                Some(extra) => Err(format!("Operator '{}' takes no operand, got '{}'", name, extra)),
                None => Ok(op),
            }
        };

        match name.to_lowercase().as_str() {
            "gte" => numeric(Operator::Gte),
            "lte" => numeric(Operator::Lte),
            "gt" => numeric(Operator::Gt),
            "lt" => numeric(Operator::Lt),
            "eq" => numeric(Operator::Eq),
            "truthy" => bare(Operator::Truthy),
            "falsy" => bare(Operator::Falsy),
            "present" => bare(Operator::Present),
            "absent" => bare(Operator::Absent),
            _ => Err(format!("Unknown operator: {}", name)),
        }
    }
}

/// Resolve `path` in `record` and apply `operator` to the value found there
pub fn evaluate(record: &Record, path: &FieldPath, operator: Operator) -> Result<bool, RenderError> {
    let value = record.resolve(path)?;
    let outcome = operator.test(value).ok_or_else(|| TypeMismatchError {
        path: path.to_string(),
        usage: operator.to_string(),
        found: value.kind_name().to_string(),
    })?;
    debug!(%path, %operator, outcome, "evaluate: condition tested");
    Ok(outcome)
}
