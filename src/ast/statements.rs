use tracing::warn;

use crate::ast::{BuildError, Clause, ClauseKind, Expr, Field, Keyword};

/// Statement kinds with a known set of legal clauses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementKind {
    Select,
    Insert,
    Update,
    Delete,
    DropTable,
    /// Any other keyword; accepts every clause.
    Custom,
}

impl StatementKind {
    pub fn from_keyword(keyword: &Keyword) -> StatementKind {
        match keyword.normalized().as_str() {
            "SELECT" => StatementKind::Select,
            "INSERT" => StatementKind::Insert,
            "UPDATE" => StatementKind::Update,
            "DELETE" => StatementKind::Delete,
            "DROP TABLE" => StatementKind::DropTable,
            _ => StatementKind::Custom,
        }
    }

    /// Clauses that may be attached, or `None` when anything goes.
    pub fn allowed_clauses(&self) -> Option<&'static [ClauseKind]> {
        use ClauseKind::*;

        match self {
            StatementKind::Select => Some(&[
                From, Join, Where, GroupBy, Having, OrderBy, Limit, Offset, Union, UnionAll,
                IndexedBy, NotIndexed,
            ]),
            StatementKind::Insert => Some(&[Into, Values, DefaultValues]),
            StatementKind::Update => Some(&[Set, Where]),
            StatementKind::Delete => Some(&[From, Where]),
            StatementKind::DropTable => Some(&[]),
            StatementKind::Custom => None,
        }
    }

    pub fn allows(&self, clause: &Clause) -> bool {
        match self.allowed_clauses() {
            None => true,
            Some(allowed) => clause.kind().is_some_and(|kind| allowed.contains(&kind)),
        }
    }
}

/// One SQL command: keyword, optional argument and an ordered clause list.
///
/// Clauses are emitted exactly in the order they were added. No canonical
/// SQL ordering is imposed, so out-of-order tails can be crafted on purpose.
///
/// # Examples
///
/// ```
/// use sqlcraft::{Field, Statement, SqlOps, ToSql};
///
/// let stmt = Statement::select(vec![1])
///     .where_(Field::new("id").eq(1))?
///     .limit(10)?;
/// assert_eq!(stmt.to_sql()?, "SELECT 1 WHERE id=1 LIMIT 10");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Statement {
    kind: StatementKind,
    keyword: Keyword,
    argument: Option<Expr>,
    clauses: Vec<Clause>,
}

impl Statement {
    /// Statement whose kind is inferred from `keyword`.
    pub fn new(keyword: impl Into<Keyword>, argument: impl Into<Expr>) -> Self {
        let mut stmt = Statement::bare(keyword);
        stmt.argument = Some(argument.into());
        stmt
    }

    pub fn bare(keyword: impl Into<Keyword>) -> Self {
        let keyword = keyword.into();
        Statement {
            kind: StatementKind::from_keyword(&keyword),
            keyword,
            argument: None,
            clauses: Vec::new(),
        }
    }

    /// Creates a statement and hands it to `build` for in-place setup.
    pub fn build<F>(
        keyword: impl Into<Keyword>,
        argument: Option<Expr>,
        build: F,
    ) -> Result<Self, BuildError>
    where
        F: FnOnce(&mut Statement) -> Result<(), BuildError>,
    {
        let mut stmt = Statement::bare(keyword);
        stmt.argument = argument;
        build(&mut stmt)?;
        Ok(stmt)
    }

    /// `SELECT columns`
    pub fn select(columns: impl Into<Expr>) -> Self {
        Statement::new("SELECT", columns)
    }

    /// `INSERT`; follow with [`into_table`](Self::into_table) and [`values`](Self::values).
    pub fn insert() -> Self {
        Statement::bare("INSERT")
    }

    /// `UPDATE table`
    pub fn update(table: impl Into<Field>) -> Self {
        Statement::new("UPDATE", Expr::Field(table.into()))
    }

    /// `DELETE`; follow with [`from`](Self::from).
    pub fn delete() -> Self {
        Statement::bare("DELETE")
    }

    /// `DROP TABLE table`
    pub fn drop_table(table: impl Into<Field>) -> Self {
        Statement::new("DROP TABLE", Expr::Field(table.into()))
    }

    pub fn kind(&self) -> StatementKind {
        self.kind
    }

    pub fn keyword(&self) -> &Keyword {
        &self.keyword
    }

    pub fn argument(&self) -> Option<&Expr> {
        self.argument.as_ref()
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Appends a clause after checking it is registered for this kind.
    pub fn add_clause(&mut self, clause: Clause) -> Result<&mut Self, BuildError> {
        if !self.kind.allows(&clause) {
            warn!(
                clause = %clause.keyword(),
                statement = %self.keyword,
                "rejecting clause not registered for statement"
            );
            return Err(BuildError::UnsupportedClause {
                clause: clause.keyword().to_string(),
                statement: self.keyword.to_string(),
            });
        }
        self.clauses.push(clause);
        Ok(self)
    }

    /// Builder form of [`add_clause`](Self::add_clause).
    pub fn clause(mut self, clause: Clause) -> Result<Self, BuildError> {
        self.add_clause(clause)?;
        Ok(self)
    }

    fn registered(self, kind: ClauseKind, argument: Option<Expr>) -> Result<Self, BuildError> {
        let clause = match argument {
            Some(argument) => Clause::new(kind.keyword(), argument),
            None => Clause::bare(kind.keyword()),
        };
        self.clause(clause)
    }

    /// Replaces the column list of a `SELECT`.
    pub fn fields(mut self, columns: impl Into<Expr>) -> Result<Self, BuildError> {
        if self.kind != StatementKind::Select {
            return Err(BuildError::UnsupportedClause {
                clause: "fields".to_string(),
                statement: self.keyword.to_string(),
            });
        }
        self.argument = Some(columns.into());
        Ok(self)
    }

    pub fn from(self, table: impl Into<Field>) -> Result<Self, BuildError> {
        self.registered(ClauseKind::From, Some(Expr::Field(table.into())))
    }

    pub fn into_table(self, table: impl Into<Field>) -> Result<Self, BuildError> {
        self.registered(ClauseKind::Into, Some(Expr::Field(table.into())))
    }

    pub fn where_(self, condition: impl Into<Expr>) -> Result<Self, BuildError> {
        self.registered(ClauseKind::Where, Some(condition.into()))
    }

    pub fn join(self, table: impl Into<Field>) -> Result<Self, BuildError> {
        self.registered(ClauseKind::Join, Some(Expr::Field(table.into())))
    }

    pub fn group_by<I, A>(self, columns: I) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = A>,
        A: Into<Expr>,
    {
        self.registered(ClauseKind::GroupBy, Some(Expr::list(columns)))
    }

    pub fn having(self, condition: impl Into<Expr>) -> Result<Self, BuildError> {
        self.registered(ClauseKind::Having, Some(condition.into()))
    }

    pub fn order_by<I, A>(self, columns: I) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = A>,
        A: Into<Expr>,
    {
        self.registered(ClauseKind::OrderBy, Some(Expr::list(columns)))
    }

    pub fn limit(self, count: impl Into<Expr>) -> Result<Self, BuildError> {
        self.registered(ClauseKind::Limit, Some(count.into()))
    }

    pub fn offset(self, count: impl Into<Expr>) -> Result<Self, BuildError> {
        self.registered(ClauseKind::Offset, Some(count.into()))
    }

    pub fn union(self, other: Statement) -> Result<Self, BuildError> {
        self.registered(ClauseKind::Union, Some(Expr::from(other)))
    }

    pub fn union_all(self, other: Statement) -> Result<Self, BuildError> {
        self.registered(ClauseKind::UnionAll, Some(Expr::from(other)))
    }

    /// `VALUES (a,b,c)`
    pub fn values<I, A>(self, values: I) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = A>,
        A: Into<Expr>,
    {
        self.registered(ClauseKind::Values, Some(Expr::group(Expr::list(values))))
    }

    pub fn default_values(self) -> Result<Self, BuildError> {
        self.registered(ClauseKind::DefaultValues, None)
    }

    /// `SET a=1,b=2`, in iteration order.
    pub fn set<I, K, V>(self, assignments: I) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Field>,
        V: Into<Expr>,
    {
        let pairs = assignments
            .into_iter()
            .map(|(k, v)| (Expr::Field(k.into()), v.into()))
            .collect();
        self.registered(ClauseKind::Set, Some(Expr::Map(pairs)))
    }

    pub fn indexed_by(self, index: impl Into<Field>) -> Result<Self, BuildError> {
        self.registered(ClauseKind::IndexedBy, Some(Expr::Field(index.into())))
    }

    pub fn not_indexed(self) -> Result<Self, BuildError> {
        self.registered(ClauseKind::NotIndexed, None)
    }
}
