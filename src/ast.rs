//! # SQL node model
//!
//! This module defines the tree that SQL text is rendered from. Trees are
//! built bottom-up and handed to the [`Emitter`](crate::Emitter); nodes carry
//! no formatting state, so one tree can be re-emitted under any
//! configuration.
//!
//! ## Layout
//!
//! - **[keywords]** - keyword and operator tokens (`SELECT`, `IS NOT`, `=`)
//! - **[literals]** - constants (`NULL`, integers, floats, decimals, strings)
//! - **[fields]** - dotted references (`db.users.id`)
//! - **[functions]** - function calls and the common helpers (`COUNT`, `SLEEP`)
//! - **[expressions]** - the [`Expr`] value node plus binary/unary nodes
//! - **[operators]** - the operator capability ([`SqlOps`] and `std::ops`)
//! - **[clauses]** - statement tail fragments (`WHERE`, `LIMIT`)
//! - **[statements]** - one SQL command with its clause list
//! - **[statement_list]** - stacked statements
//!
//! ## Quick Start
//!
//! ```
//! use sqlcraft::{Field, Statement, SqlOps, ToSql};
//!
//! let users = Field::new("users");
//! let stmt = Statement::select(Field::new("name"))
//!     .from(users.clone())?
//!     .where_(users.column("id")?.eq(1))?;
//!
//! assert_eq!(stmt.to_sql()?, "SELECT name FROM users WHERE users.id=1");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Ordering
//!
//! Clauses and statements are emitted in exactly the order they were added.
//! Nothing is reordered or deduplicated, which lets callers build
//! deliberately malformed SQL.
pub mod clauses;
pub mod expressions;
pub mod fields;
pub mod functions;
pub mod keywords;
pub mod literals;
pub mod operators;
pub mod statement_list;
pub mod statements;

pub use clauses::{Clause, ClauseKind};
pub use expressions::{BinaryExpr, CustomNode, Expr, UnaryExpr};
pub use fields::{Field, MAX_FIELD_DEPTH};
pub use functions::Function;
pub use keywords::Keyword;
pub use literals::Literal;
pub use operators::SqlOps;
pub use statement_list::StatementList;
pub use statements::{Statement, StatementKind};

/// Errors raised while building a tree.
///
/// Shape problems such as wrong function arity are never reported; only
/// structural rules the builder itself enforces are.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// Clause keyword not registered for the statement kind
    #[error("clause {clause} is not supported by {statement} statements")]
    UnsupportedClause { clause: String, statement: String },

    /// Dotted reference deeper than `db.table.column`
    #[error("field {name} would be nested {depth} levels deep (at most {max} allowed)", max = MAX_FIELD_DEPTH)]
    FieldDepth { name: String, depth: usize },
}
