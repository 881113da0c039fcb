use crate::ast::BuildError;

/// Deepest dotted reference the builder produces: `db.table.column`.
pub const MAX_FIELD_DEPTH: usize = 3;

/// A (possibly dotted) column, table or database reference.
///
/// Names are not validated, so malformed or obfuscated identifiers can be
/// expressed on purpose.
///
/// # Examples
///
/// ```
/// use sqlcraft::{Field, ToSql};
///
/// let users = Field::new("users");
/// let id = users.column("id").unwrap();
/// assert_eq!(id.to_sql().unwrap(), "users.id");
///
/// let parsed = Field::parse("db.users.id");
/// assert_eq!(parsed.depth(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    name: String,
    parent: Option<Box<Field>>,
}

impl Field {
    pub fn new(name: impl ToString) -> Self {
        Field {
            name: name.to_string(),
            parent: None,
        }
    }

    /// Field nested under `parent`, with no depth check.
    pub fn with_parent(name: impl ToString, parent: Field) -> Self {
        Field {
            name: name.to_string(),
            parent: Some(Box::new(parent)),
        }
    }

    /// Splits on `.` into at most three segments and chains them left to
    /// right. Anything past the second dot stays in the last name.
    pub fn parse(dotted: &str) -> Self {
        let mut segments = dotted.splitn(MAX_FIELD_DEPTH, '.');
        // splitn always yields at least one segment
        let mut field = Field::new(segments.next().unwrap_or_default());
        for segment in segments {
            field = Field::with_parent(segment, field);
        }
        field
    }

    /// `table.name`, rejecting chains deeper than `db.table.column`.
    pub fn column_of(table: &Field, name: impl ToString) -> Result<Field, BuildError> {
        let name = name.to_string();
        let depth = table.depth() + 1;
        if depth > MAX_FIELD_DEPTH {
            return Err(BuildError::FieldDepth { name, depth });
        }
        Ok(Field::with_parent(name, table.clone()))
    }

    /// Method form of [`Field::column_of`].
    pub fn column(&self, name: impl ToString) -> Result<Field, BuildError> {
        Field::column_of(self, name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<&Field> {
        self.parent.as_deref()
    }

    /// Number of segments in the dotted reference.
    pub fn depth(&self) -> usize {
        1 + self.parent.as_ref().map_or(0, |p| p.depth())
    }
}

impl From<&str> for Field {
    fn from(name: &str) -> Self {
        Field::new(name)
    }
}

impl From<String> for Field {
    fn from(name: String) -> Self {
        Field::new(name)
    }
}
