//! Free-function builders for terse payload construction.
//!
//! ```
//! use sqlcraft::dsl::*;
//! use sqlcraft::{SqlOps, ToSql};
//!
//! let stmt = select(star()).from("users")?.where_(field("id").eq(1))?;
//! assert_eq!(stmt.to_sql()?, "SELECT * FROM users WHERE id=1");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::{
    ast::{Expr, Field, Function, Keyword, Literal, Statement},
    injection::{EscapeKind, Injection},
};

pub use crate::ast::functions::{
    ascii, avg, char, concat, count, database, hex, length, load_file, lower, max, md5, min,
    random, sleep, substr, sum, upper, user, version,
};

/// `SELECT columns`
pub fn select(columns: impl Into<Expr>) -> Statement {
    Statement::select(columns)
}

/// `INSERT`
pub fn insert() -> Statement {
    Statement::insert()
}

/// `UPDATE table`
pub fn update(table: impl Into<Field>) -> Statement {
    Statement::update(table)
}

/// `DELETE`
pub fn delete() -> Statement {
    Statement::delete()
}

/// `DROP TABLE table`
pub fn drop_table(table: impl Into<Field>) -> Statement {
    Statement::drop_table(table)
}

/// Field parsed from dotted notation (`"users.id"`).
pub fn field(name: &str) -> Field {
    Field::parse(name)
}

/// Function call with arbitrary name and arguments.
pub fn function<I, A>(name: impl Into<Keyword>, arguments: I) -> Function
where
    I: IntoIterator<Item = A>,
    A: Into<Expr>,
{
    Function::new(name, arguments)
}

pub fn null() -> Expr {
    Expr::Literal(Literal::Null)
}

pub fn int(value: i64) -> Expr {
    Expr::Literal(Literal::Integer(value))
}

pub fn float(value: f64) -> Expr {
    Expr::Literal(Literal::Float(value))
}

pub fn string(value: impl Into<String>) -> Expr {
    Expr::Literal(Literal::String(value.into()))
}

/// `*`
pub fn star() -> Expr {
    Expr::keyword("*")
}

/// `(a,b,c)`
pub fn tuple<I, A>(items: I) -> Expr
where
    I: IntoIterator<Item = A>,
    A: Into<Expr>,
{
    Expr::group(Expr::list(items))
}

/// Injection seeded for `escape`.
pub fn injection(escape: EscapeKind) -> Injection {
    Injection::new(escape)
}
