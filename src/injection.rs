//! Injection payload assembly.
//!
//! An [`Injection`] stands in for one vulnerable parameter value. It starts
//! from a seed that matches the parameter's syntactic context (the
//! [`EscapeKind`]), grows a boolean expression through
//! [`and`](Injection::and) / [`or`](Injection::or), may carry clauses and
//! stacked statements, and is finally closed out so the text drops into the
//! surrounding query.
//!
//! # Termination
//!
//! For `String` and `List` payloads the emitted seed carries a synthetic
//! opening character (the quote or the parenthesis) that the victim query
//! already supplies. After emission:
//!
//! - if termination was requested, or the first and last characters of the
//!   text differ, the comment marker is appended;
//! - otherwise the last character is dropped, leaving the victim's own
//!   closing character to balance the text;
//! - in both cases the first character is dropped.
//!
//! Other kinds only get the comment marker when termination is requested.
//!
//! The first/last comparison is a coarse balance check: payloads whose ends
//! match or differ by coincidence are closed out the wrong way.
//!
//! # Examples
//!
//! ```
//! use sqlcraft::{EscapeKind, Expr, Injection, SqlOps, ToSql};
//!
//! let mut sqli = Injection::new(EscapeKind::String);
//! sqli.or(Expr::from("1").eq("1"));
//! assert_eq!(sqli.to_sql().unwrap(), "1' OR '1'='1");
//!
//! let mut sqli = Injection::new(EscapeKind::Integer);
//! sqli.or(true);
//! assert_eq!(sqli.to_sql_terminated().unwrap(), "1 OR 1=1;--");
//! ```

use std::{fmt, str::FromStr};

use rust_decimal::Decimal;
use tracing::debug;

use crate::{
    ast::{
        BinaryExpr, BuildError, Clause, ClauseKind, Expr, Field, Keyword, Statement, StatementList,
    },
    config::{ConfigError, EmitterConfig},
    emitter::{EmitError, Emitter, ToSql},
};

/// Comment marker appended when a payload is terminated.
pub const DEFAULT_COMMENT: &str = ";--";

/// Syntactic context the payload has to fit into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EscapeKind {
    /// `... WHERE id=<payload>`
    #[default]
    Integer,
    /// `... WHERE price=<payload>`
    Decimal,
    /// `... WHERE name='<payload>'`
    String,
    /// `... WHERE id IN (<payload>)`
    List,
    /// `... ORDER BY <payload>`
    Column,
}

impl EscapeKind {
    /// Placeholder seed for this context: `1`, `1.0`, `'1'`, `(NULL)`, `id`.
    pub fn default_seed(&self) -> Expr {
        match self {
            EscapeKind::Integer => Expr::from(1),
            EscapeKind::Decimal => Expr::from(Decimal::new(10, 1)),
            EscapeKind::String => Expr::from("1"),
            EscapeKind::List => Expr::group(Expr::List(vec![Expr::null()])),
            EscapeKind::Column => Expr::Field(Field::new("id")),
        }
    }

    /// Whether the payload opens inside a quote or list bracket.
    pub fn is_enclosed(&self) -> bool {
        matches!(self, EscapeKind::String | EscapeKind::List)
    }
}

impl fmt::Display for EscapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EscapeKind::Integer => "integer",
            EscapeKind::Decimal => "decimal",
            EscapeKind::String => "string",
            EscapeKind::List => "list",
            EscapeKind::Column => "column",
        };
        f.write_str(name)
    }
}

impl FromStr for EscapeKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "integer" | "int" => Ok(EscapeKind::Integer),
            "decimal" | "float" => Ok(EscapeKind::Decimal),
            "string" => Ok(EscapeKind::String),
            "list" => Ok(EscapeKind::List),
            "column" => Ok(EscapeKind::Column),
            _ => Err(ConfigError::InvalidEscapeKind(s.to_string())),
        }
    }
}

/// Boolean expression grown from a seed, one combinator at a time.
///
/// Each call re-roots the tree, so `seed.or(a).or(b)` is
/// `((seed OR a) OR b)`.
#[derive(Debug, Clone)]
pub struct InjectionExpr {
    expression: Expr,
}

impl InjectionExpr {
    pub fn new(seed: impl Into<Expr>) -> Self {
        InjectionExpr {
            expression: seed.into(),
        }
    }

    pub fn and(&mut self, other: impl Into<Expr>) -> &mut Self {
        self.combine("AND", other.into())
    }

    pub fn or(&mut self, other: impl Into<Expr>) -> &mut Self {
        self.combine("OR", other.into())
    }

    fn combine(&mut self, operator: &str, other: Expr) -> &mut Self {
        let current = std::mem::replace(&mut self.expression, Expr::null());
        self.expression = Expr::Binary(BinaryExpr::new(current, Keyword::from(operator), other));
        self
    }

    pub fn expression(&self) -> &Expr {
        &self.expression
    }
}

impl ToSql for InjectionExpr {
    fn emit_with(&self, emitter: &mut Emitter) -> Result<String, EmitError> {
        emitter.emit(&self.expression)
    }
}

/// A crafted payload replacing one vulnerable parameter.
#[derive(Debug, Clone)]
pub struct Injection {
    escape: EscapeKind,
    expression: InjectionExpr,
    clauses: Vec<Clause>,
    statements: StatementList,
}

impl Injection {
    /// Payload seeded with the escape kind's placeholder.
    pub fn new(escape: EscapeKind) -> Self {
        Injection::with_seed(escape, escape.default_seed())
    }

    /// Payload seeded with an explicit value.
    pub fn with_seed(escape: EscapeKind, seed: impl Into<Expr>) -> Self {
        Injection {
            escape,
            expression: InjectionExpr::new(seed),
            clauses: Vec::new(),
            statements: StatementList::new(),
        }
    }

    /// Creates a payload and hands it to `build` for in-place setup.
    pub fn build(escape: EscapeKind, build: impl FnOnce(&mut Injection)) -> Self {
        let mut injection = Injection::new(escape);
        build(&mut injection);
        injection
    }

    pub fn escape(&self) -> EscapeKind {
        self.escape
    }

    pub fn expression(&self) -> &InjectionExpr {
        &self.expression
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn statements(&self) -> &StatementList {
        &self.statements
    }

    /// `(current) AND other`
    pub fn and(&mut self, other: impl Into<Expr>) -> &mut Self {
        self.expression.and(other);
        self
    }

    /// `(current) OR other`
    pub fn or(&mut self, other: impl Into<Expr>) -> &mut Self {
        self.expression.or(other);
        self
    }

    /// Appends any clause; payload tails are not restricted by kind.
    pub fn clause(&mut self, clause: Clause) -> &mut Self {
        self.clauses.push(clause);
        self
    }

    fn registered(&mut self, kind: ClauseKind, argument: Expr) -> &mut Self {
        self.clause(Clause::new(kind.keyword(), argument))
    }

    pub fn from(&mut self, table: impl Into<Field>) -> &mut Self {
        self.registered(ClauseKind::From, Expr::Field(table.into()))
    }

    pub fn where_(&mut self, condition: impl Into<Expr>) -> &mut Self {
        self.registered(ClauseKind::Where, condition.into())
    }

    pub fn group_by<I, A>(&mut self, columns: I) -> &mut Self
    where
        I: IntoIterator<Item = A>,
        A: Into<Expr>,
    {
        self.registered(ClauseKind::GroupBy, Expr::list(columns))
    }

    pub fn having(&mut self, condition: impl Into<Expr>) -> &mut Self {
        self.registered(ClauseKind::Having, condition.into())
    }

    pub fn order_by<I, A>(&mut self, columns: I) -> &mut Self
    where
        I: IntoIterator<Item = A>,
        A: Into<Expr>,
    {
        self.registered(ClauseKind::OrderBy, Expr::list(columns))
    }

    pub fn limit(&mut self, count: impl Into<Expr>) -> &mut Self {
        self.registered(ClauseKind::Limit, count.into())
    }

    pub fn offset(&mut self, count: impl Into<Expr>) -> &mut Self {
        self.registered(ClauseKind::Offset, count.into())
    }

    /// `UNION <statement>`
    pub fn union(&mut self, statement: Statement) -> &mut Self {
        self.registered(ClauseKind::Union, Expr::from(statement))
    }

    /// `UNION ALL <statement>`
    pub fn union_all(&mut self, statement: Statement) -> &mut Self {
        self.registered(ClauseKind::UnionAll, Expr::from(statement))
    }

    /// Appends a finished stacked statement (`; DROP TABLE users`).
    pub fn push_statement(&mut self, statement: Statement) -> &mut Self {
        self.statements.push(statement);
        self
    }

    /// Builds a stacked statement, appends it, and returns it for further
    /// changes. Nothing is appended when `build` fails.
    pub fn statement<F>(
        &mut self,
        keyword: impl Into<Keyword>,
        argument: Option<Expr>,
        build: F,
    ) -> Result<&mut Statement, BuildError>
    where
        F: FnOnce(&mut Statement) -> Result<(), BuildError>,
    {
        self.statements.statement(keyword, argument, build)
    }

    /// Renders with the default configuration and a trailing comment.
    pub fn to_sql_terminated(&self) -> Result<String, EmitError> {
        self.render(true, &EmitterConfig::default())
    }

    /// Renders the payload and closes it out for its escape kind.
    pub fn render(&self, terminate: bool, config: &EmitterConfig) -> Result<String, EmitError> {
        let mut emitter = Emitter::new(config.clone());
        self.render_with(terminate, &mut emitter)
    }

    pub fn render_with(&self, terminate: bool, emitter: &mut Emitter) -> Result<String, EmitError> {
        let mut sql = emitter.emit(self.expression.expression())?;

        if !self.clauses.is_empty() {
            sql.push_str(emitter.space());
            sql.push_str(&emitter.emit_clauses(&self.clauses)?);
        }

        if !self.statements.is_empty() {
            sql.push(';');
            sql.push_str(emitter.space());
            sql.push_str(&emitter.emit_statement_list(&self.statements)?);
        }

        let comment = emitter
            .config()
            .comment
            .clone()
            .unwrap_or_else(|| DEFAULT_COMMENT.to_string());

        if self.escape.is_enclosed() {
            let unbalanced = sql.chars().next() != sql.chars().last();
            debug!(escape = %self.escape, terminate, unbalanced, "closing enclosed payload");

            if terminate || unbalanced {
                sql.push_str(&comment);
            } else {
                sql.pop();
            }
            if !sql.is_empty() {
                sql.remove(0);
            }
        } else if terminate {
            debug!(escape = %self.escape, "terminating payload");
            sql.push_str(&comment);
        }

        Ok(sql)
    }
}

impl ToSql for Injection {
    fn emit_with(&self, emitter: &mut Emitter) -> Result<String, EmitError> {
        self.render_with(false, emitter)
    }
}
