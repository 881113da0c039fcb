//! JSON -> node conversion.
//!
//! Lets values arrive as text (command-line flags, config files) without a
//! SQL parser: `1`, `1.5`, `"admin"`, `null`, `true` and arrays of those.

use rust_decimal::Decimal;

use crate::ast::{Expr, Field, Literal};

/// Converts a JSON value into a value node.
///
/// Objects become `SET`-style assignment maps keyed by field name.
///
/// ```
/// use sqlcraft::{convert::json_to_expr, ToSql};
///
/// let value: serde_json::Value = serde_json::from_str(r#"[1, "a", null]"#).unwrap();
/// assert_eq!(json_to_expr(value).to_sql().unwrap(), "1,'a',NULL");
/// ```
pub fn json_to_expr(v: serde_json::Value) -> Expr {
    match v {
        serde_json::Value::Null => Expr::Literal(Literal::Null),
        serde_json::Value::Bool(b) => Expr::Boolean(b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Expr::Literal(Literal::Integer(i))
            } else if let Some(u) = n.as_u64() {
                // Past i64::MAX; keep it exact instead of rounding through f64
                Expr::Literal(Literal::Decimal(Decimal::from(u)))
            } else {
                n.as_f64()
                    .map_or(Expr::Literal(Literal::Null), |f| Expr::Literal(Literal::Float(f)))
            }
        }
        serde_json::Value::String(s) => Expr::Literal(Literal::String(s)),
        serde_json::Value::Array(arr) => Expr::List(arr.into_iter().map(json_to_expr).collect()),
        serde_json::Value::Object(obj) => Expr::Map(
            obj.into_iter()
                .map(|(k, v)| (Expr::Field(Field::parse(&k)), json_to_expr(v)))
                .collect(),
        ),
    }
}

/// Parses JSON text into a value node.
pub fn parse_json_expr(text: &str) -> Result<Expr, serde_json::Error> {
    serde_json::from_str(text).map(json_to_expr)
}
