//! Parameter Model
//!
//! Typed, possibly-nested values that fill a template instance, plus the
//! zero-value presence rule used for optional-field elision.
//!
//! A parameter type implements [`Params`] to expose its static [`Schema`]
//! (checked against templates at definition time) and to convert an instance
//! into a [`Record`] for rendering.

mod schema;

pub use schema::{FieldDef, FieldKind, Schema};

use crate::error::PathError;
use crate::path::FieldPath;

/// A typed parameter struct usable with a template
pub trait Params {
    /// The static shape of this type
    fn schema() -> Schema;

    /// Snapshot this value as a record
    fn to_record(&self) -> Record;
}

/// A single parameter value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    String(String),
    Int(i64),
    Bool(bool),
    Record(Record),
}

impl Value {
    /// Get the type name of this value, matching [`FieldKind::name`]
    pub fn kind_name(&self) -> &str {
        match self {
            Self::String(_) => "string",
            Self::Int(_) => "int",
            Self::Bool(_) => "bool",
            Self::Record(record) => record.name(),
        }
    }

    /// Whether this value counts as supplied
    ///
    /// Zero values are absent: the empty string, `0`, `false`, and a record
    /// whose required fields are all absent.
    pub fn is_present(&self) -> bool {
        match self {
            Self::String(s) => !s.is_empty(),
            Self::Int(n) => *n != 0,
            Self::Bool(b) => *b,
            Self::Record(record) => record.is_present(),
        }
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Self::String(s.clone())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Int(n.into())
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Self::Int(n.into())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Self::Record(record)
    }
}

/// An ordered set of named field values belonging to one parameter type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: String,
    fields: Vec<Entry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    name: String,
    value: Value,
    optional: bool,
}

impl Record {
    /// Create an empty record for the named type
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Add (or replace) a required field
    pub fn with(self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name.into(), value.into(), false)
    }

    /// Add (or replace) an optional field
    ///
    /// Optional fields do not make an enclosing record present on their own.
    pub fn with_optional(self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name.into(), value.into(), true)
    }

    fn insert(mut self, name: String, value: Value, optional: bool) -> Self {
        match self.fields.iter_mut().find(|e| e.name == name) {
            Some(entry) => {
                entry.value = value;
                entry.optional = optional;
            }
            None => self.fields.push(Entry { name, value, optional }),
        }
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up a direct field by name
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.iter().find(|e| e.name == name).map(|e| &e.value)
    }

    /// Whether the named field was added with [`Record::with_optional`]
    pub fn is_optional(&self, name: &str) -> bool {
        self.fields.iter().any(|e| e.name == name && e.optional)
    }

    /// Iterate over fields in insertion order
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|e| (e.name.as_str(), &e.value))
    }

    /// A record is present when any of its required fields is present
    ///
    /// A record made only of optional fields is present when any of them is.
    pub fn is_present(&self) -> bool {
        let mut required = self.fields.iter().filter(|e| !e.optional).peekable();
        if required.peek().is_some() {
            required.any(|e| e.value.is_present())
        } else {
            self.fields.iter().any(|e| e.value.is_present())
        }
    }

    /// Resolve a dotted path to the value it names
    pub fn resolve(&self, path: &FieldPath) -> Result<&Value, PathError> {
        let mut record = self;
        let mut found: Option<(&str, &Value)> = None;

        for segment in path.segments() {
            if let Some((prev_name, prev)) = found {
                match prev {
                    Value::Record(nested) => record = nested,
                    scalar => {
                        return Err(PathError {
                            path: path.to_string(),
                            segment: segment.clone(),
                            owner: format!("{} field '{}'", scalar.kind_name(), prev_name),
                        });
                    }
                }
            }

            let value = record.get(segment).ok_or_else(|| PathError {
                path: path.to_string(),
                segment: segment.clone(),
                owner: record.name.clone(),
            })?;
            found = Some((segment.as_str(), value));
        }

        found.map(|(_, v)| v).ok_or_else(|| PathError {
            path: path.to_string(),
            segment: String::new(),
            owner: self.name.clone(),
        })
    }
}

/// Resolve `path` against `record`
pub fn resolve<'a>(record: &'a Record, path: &FieldPath) -> Result<&'a Value, PathError> {
    record.resolve(path)
}

/// Whether a resolved value counts as supplied, see [`Value::is_present`]
pub fn is_present(value: &Value) -> bool {
    value.is_present()
}
