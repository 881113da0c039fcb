use crate::ast::{BuildError, Expr, Keyword, Statement};

/// Ordered, append-only list of statements emitted as stacked queries.
///
/// # Examples
///
/// ```
/// use sqlcraft::{Statement, StatementList, ToSql};
///
/// let mut list = StatementList::new();
/// list.push(Statement::select(1));
/// list.push(Statement::drop_table("users"));
/// assert_eq!(list.to_sql().unwrap(), "SELECT 1; DROP TABLE users");
/// ```
#[derive(Debug, Clone, Default)]
pub struct StatementList {
    statements: Vec<Statement>,
}

impl StatementList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, statement: Statement) -> &mut Self {
        self.statements.push(statement);
        self
    }

    /// Builds a statement, appends it, and returns the appended statement.
    pub fn statement<F>(
        &mut self,
        keyword: impl Into<Keyword>,
        argument: Option<Expr>,
        build: F,
    ) -> Result<&mut Statement, BuildError>
    where
        F: FnOnce(&mut Statement) -> Result<(), BuildError>,
    {
        let stmt = Statement::build(keyword, argument, build)?;
        self.statements.push(stmt);
        let last = self.statements.len() - 1;
        Ok(&mut self.statements[last])
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl FromIterator<Statement> for StatementList {
    fn from_iter<I: IntoIterator<Item = Statement>>(iter: I) -> Self {
        StatementList {
            statements: iter.into_iter().collect(),
        }
    }
}

impl Extend<Statement> for StatementList {
    fn extend<I: IntoIterator<Item = Statement>>(&mut self, iter: I) {
        self.statements.extend(iter);
    }
}
