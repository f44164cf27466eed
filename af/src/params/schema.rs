//! Static shapes of parameter types

use std::fmt;

use crate::error::PathError;
use crate::path::FieldPath;

/// The type of a single parameter field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Int,
    Bool,
    /// A named nested aggregate with its own schema
    Record(Schema),
}

impl FieldKind {
    /// Get the display name for this kind
    pub fn name(&self) -> &str {
        match self {
            Self::String => "string",
            Self::Int => "int",
            Self::Bool => "bool",
            Self::Record(schema) => schema.name(),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One named field of a schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    pub name: String,
    pub kind: FieldKind,
    /// Optional fields use their zero value to mean "not supplied"
    pub optional: bool,
}

/// The ordered field list of a parameter type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    name: String,
    fields: Vec<FieldDef>,
}

impl Schema {
    /// Create an empty schema for the named type
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Add a required field
    pub fn required(self, name: impl Into<String>, kind: FieldKind) -> Self {
        self.field(name, kind, false)
    }

    /// Add an optional field
    pub fn optional(self, name: impl Into<String>, kind: FieldKind) -> Self {
        self.field(name, kind, true)
    }

    fn field(mut self, name: impl Into<String>, kind: FieldKind, optional: bool) -> Self {
        self.fields.push(FieldDef {
            name: name.into(),
            kind,
            optional,
        });
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    /// Look up a direct field by name
    pub fn get(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Resolve a dotted path to the field definition it names
    pub fn resolve(&self, path: &FieldPath) -> Result<&FieldDef, PathError> {
        let mut schema = self;
        let mut owner = self.name.clone();
        let mut found: Option<&FieldDef> = None;

        for segment in path.segments() {
            if let Some(prev) = found {
                match &prev.kind {
                    FieldKind::Record(nested) => {
                        schema = nested;
                        owner = nested.name.clone();
                    }
                    scalar => {
                        return Err(PathError {
                            path: path.to_string(),
                            segment: segment.clone(),
                            owner: format!("{} field '{}'", scalar, prev.name),
                        });
                    }
                }
            }

            found = Some(schema.get(segment).ok_or_else(|| PathError {
                path: path.to_string(),
                segment: segment.clone(),
                owner: owner.clone(),
            })?);
        }

        // FieldPath guarantees at least one segment
        found.ok_or_else(|| PathError {
            path: path.to_string(),
            segment: String::new(),
            owner,
        })
    }
}
