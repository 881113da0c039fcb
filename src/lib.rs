pub mod ast;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod convert;
pub mod dialect;
pub mod dsl;
pub mod emitter;
pub mod injection;
pub mod signature;

pub use ast::{
    BinaryExpr, BuildError, Clause, ClauseKind, CustomNode, Expr, Field, Function, Keyword,
    Literal, SqlOps, Statement, StatementKind, StatementList, UnaryExpr,
};
pub use config::{Case, ConfigError, DialectHint, EmitterConfig, Quotes};
pub use emitter::{EmitError, Emitter, ToSql};
pub use injection::{EscapeKind, Injection, InjectionExpr};
