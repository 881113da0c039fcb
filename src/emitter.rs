//! SQL text emission.
//!
//! The [`Emitter`] walks a node tree and renders it under an
//! [`EmitterConfig`]. Emission either succeeds with the full text or fails;
//! there is no partial output.
//!
//! # Rules
//!
//! - Symbolic operators (`=`, `<>`, `-`) are written with no surrounding
//!   space: `id=1`, `-x`.
//! - Keyword operators are joined with the configured space: `id IS NULL`.
//! - A statement used as an operand or function argument is parenthesized.
//! - Lists are comma joined without parentheses; use [`Expr::Group`] to wrap.
//! - A single-element list as a statement argument collapses to the element.
//!
//! # Examples
//!
//! ```
//! use sqlcraft::{Case, EmitterConfig, Field, SqlOps, ToSql};
//!
//! let expr = Field::new("id").is(1);
//! let config = EmitterConfig::default().with_case(Case::Upper);
//! assert_eq!(expr.to_sql_with(&config).unwrap(), "ID IS 1");
//! ```

use std::sync::LazyLock;

use rand::{Rng, SeedableRng, rngs::StdRng};
use regex::Regex;
use rust_decimal::Decimal;
use tracing::trace;

use crate::{
    ast::{
        BinaryExpr, Clause, Expr, Field, Function, Keyword, Literal, Statement, StatementList,
        UnaryExpr,
    },
    config::{Case, EmitterConfig},
};

/// Operators made only of non-word characters are emitted bare.
static SYMBOLIC_OPERATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\W+$").expect("static regex is valid"));

/// Errors that can occur during emission.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmitError {
    /// No rendering rule and no self-render fallback for this node
    #[error("cannot emit unsupported node type: {node}")]
    UnsupportedNode { node: String },
}

/// Recursive SQL serializer.
pub struct Emitter {
    config: EmitterConfig,
    rng: StdRng,
}

impl Emitter {
    pub fn new(config: EmitterConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Emitter { config, rng }
    }

    pub fn config(&self) -> &EmitterConfig {
        &self.config
    }

    pub fn space(&self) -> &str {
        &self.config.space
    }

    /// Joins keyword parts with the space token and applies the case rule.
    pub fn emit_keyword(&mut self, keyword: &Keyword) -> String {
        let text = keyword.parts().join(&self.config.space);
        self.apply_case(text)
    }

    fn apply_case(&mut self, text: String) -> String {
        match self.config.case {
            Case::None => text,
            Case::Lower => text.to_lowercase(),
            Case::Upper => text.to_uppercase(),
            Case::Random => self.random_case(&text),
        }
    }

    /// Swaps the case of `len / 2` characters picked at random (an index may
    /// be picked twice).
    fn random_case(&mut self, text: &str) -> String {
        let mut chars: Vec<char> = text.chars().collect();
        if chars.is_empty() {
            return String::new();
        }
        for _ in 0..chars.len() / 2 {
            let index = self.rng.gen_range(0..chars.len());
            chars[index] = swap_case(chars[index]);
        }
        chars.into_iter().collect()
    }

    /// Symbolic operators are written as-is; word operators as keywords.
    pub fn emit_operator(&mut self, operator: &Keyword) -> String {
        if is_symbolic(operator) {
            operator.parts().concat()
        } else {
            self.emit_keyword(operator)
        }
    }

    pub fn emit_null(&mut self) -> String {
        self.apply_case("NULL".to_string())
    }

    /// Tautology / contradiction instead of `TRUE` / `FALSE`, which not every
    /// dialect has.
    pub fn emit_bool(&self, value: bool) -> &'static str {
        if value { "1=1" } else { "1=0" }
    }

    pub fn emit_integer(&self, value: i64) -> String {
        value.to_string()
    }

    /// Plain positional notation; whole floats keep their fractional part
    /// (`1.0`). SQL has no literal for NaN or infinity, so those emit `NULL`.
    pub fn emit_float(&mut self, value: f64) -> String {
        if !value.is_finite() {
            return self.emit_null();
        }
        let text = value.to_string();
        if text.contains('.') {
            text
        } else {
            format!("{}.0", text)
        }
    }

    pub fn emit_decimal(&self, value: &Decimal) -> String {
        value.to_string()
    }

    pub fn emit_string(&self, value: &str) -> String {
        self.config.quotes.quote(value)
    }

    pub fn emit_literal(&mut self, literal: &Literal) -> String {
        match literal {
            Literal::Null => self.emit_null(),
            Literal::Integer(n) => self.emit_integer(*n),
            Literal::Float(n) => self.emit_float(*n),
            Literal::Decimal(d) => self.emit_decimal(d),
            Literal::String(s) => self.emit_string(s),
        }
    }

    /// Parent first, joined with `.`.
    pub fn emit_field(&mut self, field: &Field) -> String {
        let name = self.apply_case(field.name().to_string());
        match field.parent() {
            Some(parent) => format!("{}.{}", self.emit_field(parent), name),
            None => name,
        }
    }

    pub fn emit_list(&mut self, items: &[Expr]) -> Result<String, EmitError> {
        let parts = items
            .iter()
            .map(|item| self.emit(item))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(parts.join(","))
    }

    /// `key=value` pairs, comma joined.
    pub fn emit_map(&mut self, pairs: &[(Expr, Expr)]) -> Result<String, EmitError> {
        let parts = pairs
            .iter()
            .map(|(key, value)| Ok(format!("{}={}", self.emit(key)?, self.emit(value)?)))
            .collect::<Result<Vec<_>, EmitError>>()?;
        Ok(parts.join(","))
    }

    /// Operand form: statements get wrapped in parentheses.
    pub fn emit_argument(&mut self, operand: &Expr) -> Result<String, EmitError> {
        match operand {
            Expr::Statement(stmt) => Ok(format!("({})", self.emit_statement(stmt)?)),
            other => self.emit(other),
        }
    }

    pub fn emit_binary(&mut self, expr: &BinaryExpr) -> Result<String, EmitError> {
        let left = self.emit_argument(expr.left())?;
        let right = self.emit_argument(expr.right())?;

        if is_symbolic(expr.operator()) {
            Ok(format!("{}{}{}", left, expr.operator().parts().concat(), right))
        } else {
            let op = self.emit_keyword(expr.operator());
            let space = &self.config.space;
            Ok(format!("{left}{space}{op}{space}{right}"))
        }
    }

    pub fn emit_unary(&mut self, expr: &UnaryExpr) -> Result<String, EmitError> {
        let operand = self.emit_argument(expr.operand())?;

        if is_symbolic(expr.operator()) {
            Ok(format!("{}{}", expr.operator().parts().concat(), operand))
        } else {
            let op = self.emit_keyword(expr.operator());
            Ok(format!("{}{}{}", op, self.config.space, operand))
        }
    }

    pub fn emit_function(&mut self, function: &Function) -> Result<String, EmitError> {
        let name = self.emit_keyword(function.name());
        let arguments = function
            .arguments()
            .iter()
            .map(|arg| self.emit_argument(arg))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(format!("{}({})", name, arguments.join(",")))
    }

    /// Emits any value node.
    pub fn emit(&mut self, expr: &Expr) -> Result<String, EmitError> {
        match expr {
            Expr::Literal(literal) => Ok(self.emit_literal(literal)),
            Expr::Boolean(b) => Ok(self.emit_bool(*b).to_string()),
            Expr::Keyword(kw) => Ok(self.emit_keyword(kw)),
            Expr::Field(field) => Ok(self.emit_field(field)),
            Expr::Function(function) => self.emit_function(function),
            Expr::Binary(binary) => self.emit_binary(binary),
            Expr::Unary(unary) => self.emit_unary(unary),
            Expr::List(items) => self.emit_list(items),
            Expr::Map(pairs) => self.emit_map(pairs),
            Expr::Group(inner) => Ok(format!("({})", self.emit(inner)?)),
            Expr::Statement(stmt) => self.emit_statement(stmt),
            Expr::Custom(node) => match node.render(self) {
                Some(rendered) => rendered,
                None => Err(EmitError::UnsupportedNode {
                    node: node.node_name().to_string(),
                }),
            },
        }
    }

    pub fn emit_clause(&mut self, clause: &Clause) -> Result<String, EmitError> {
        let mut sql = self.emit_keyword(clause.keyword());
        if let Some(argument) = clause.argument() {
            sql.push_str(&self.config.space);
            sql.push_str(&self.emit(argument)?);
        }
        Ok(sql)
    }

    /// Clauses in the given order, joined with the space token.
    pub fn emit_clauses(&mut self, clauses: &[Clause]) -> Result<String, EmitError> {
        let parts = clauses
            .iter()
            .map(|clause| self.emit_clause(clause))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(parts.join(&self.config.space))
    }

    pub fn emit_statement(&mut self, stmt: &Statement) -> Result<String, EmitError> {
        let mut sql = self.emit_keyword(stmt.keyword());

        match stmt.argument() {
            None => {}
            Some(Expr::List(items)) if items.is_empty() => {}
            Some(argument) => {
                let argument = match argument {
                    Expr::List(items) if items.len() == 1 => self.emit(&items[0])?,
                    other => self.emit(other)?,
                };
                sql.push_str(&self.config.space);
                sql.push_str(&argument);
            }
        }

        if !stmt.clauses().is_empty() {
            let clauses = self.emit_clauses(stmt.clauses())?;
            sql.push_str(&self.config.space);
            sql.push_str(&clauses);
        }

        trace!(kind = ?stmt.kind(), sql = %sql, "emitted statement");
        Ok(sql)
    }

    /// Statements joined with `;` and the space token.
    pub fn emit_statement_list(&mut self, list: &StatementList) -> Result<String, EmitError> {
        let parts = list
            .statements()
            .iter()
            .map(|stmt| self.emit_statement(stmt))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(parts.join(&format!(";{}", self.config.space)))
    }
}

fn is_symbolic(operator: &Keyword) -> bool {
    SYMBOLIC_OPERATOR.is_match(&operator.parts().concat())
}

/// Characters whose case mapping is not a single character (`ß` -> `SS`)
/// are left alone so the text keeps its length.
fn swap_case(c: char) -> char {
    let swapped = if c.is_lowercase() {
        single_char(c.to_uppercase())
    } else if c.is_uppercase() {
        single_char(c.to_lowercase())
    } else {
        None
    };
    swapped.unwrap_or(c)
}

fn single_char(mut mapping: impl Iterator<Item = char>) -> Option<char> {
    match (mapping.next(), mapping.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Rendering entry point for every root node type.
pub trait ToSql {
    fn emit_with(&self, emitter: &mut Emitter) -> Result<String, EmitError>;

    /// Renders with the default configuration.
    fn to_sql(&self) -> Result<String, EmitError> {
        self.to_sql_with(&EmitterConfig::default())
    }

    fn to_sql_with(&self, config: &EmitterConfig) -> Result<String, EmitError> {
        let mut emitter = Emitter::new(config.clone());
        self.emit_with(&mut emitter)
    }
}

impl ToSql for Expr {
    fn emit_with(&self, emitter: &mut Emitter) -> Result<String, EmitError> {
        emitter.emit(self)
    }
}

impl ToSql for Keyword {
    fn emit_with(&self, emitter: &mut Emitter) -> Result<String, EmitError> {
        Ok(emitter.emit_keyword(self))
    }
}

impl ToSql for Literal {
    fn emit_with(&self, emitter: &mut Emitter) -> Result<String, EmitError> {
        Ok(emitter.emit_literal(self))
    }
}

impl ToSql for Field {
    fn emit_with(&self, emitter: &mut Emitter) -> Result<String, EmitError> {
        Ok(emitter.emit_field(self))
    }
}

impl ToSql for Function {
    fn emit_with(&self, emitter: &mut Emitter) -> Result<String, EmitError> {
        emitter.emit_function(self)
    }
}

impl ToSql for BinaryExpr {
    fn emit_with(&self, emitter: &mut Emitter) -> Result<String, EmitError> {
        emitter.emit_binary(self)
    }
}

impl ToSql for UnaryExpr {
    fn emit_with(&self, emitter: &mut Emitter) -> Result<String, EmitError> {
        emitter.emit_unary(self)
    }
}

impl ToSql for Clause {
    fn emit_with(&self, emitter: &mut Emitter) -> Result<String, EmitError> {
        emitter.emit_clause(self)
    }
}

impl ToSql for Statement {
    fn emit_with(&self, emitter: &mut Emitter) -> Result<String, EmitError> {
        emitter.emit_statement(self)
    }
}

impl ToSql for StatementList {
    fn emit_with(&self, emitter: &mut Emitter) -> Result<String, EmitError> {
        emitter.emit_statement_list(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbolic_detection() {
        assert!(is_symbolic(&Keyword::from("=")));
        assert!(is_symbolic(&Keyword::from("<>")));
        assert!(is_symbolic(&Keyword::from("||")));
        assert!(!is_symbolic(&Keyword::from("IS NOT")));
        assert!(!is_symbolic(&Keyword::from("AND")));
    }

    #[test]
    fn random_case_is_reproducible_with_seed() {
        let config = EmitterConfig::default().with_case(Case::Random).with_seed(7);
        let kw = Keyword::from("SELECT");

        let a = Emitter::new(config.clone()).emit_keyword(&kw);
        let b = Emitter::new(config).emit_keyword(&kw);
        assert_eq!(a, b);
        assert_eq!(a.to_uppercase(), "SELECT");
    }

    #[test]
    fn random_case_changes_some_letters() {
        // Across many seeds at least one output differs from the input
        let kw = Keyword::from("UNIONSELECT");
        let changed = (0..32).any(|seed| {
            let config = EmitterConfig::default().with_case(Case::Random).with_seed(seed);
            Emitter::new(config).emit_keyword(&kw) != "UNIONSELECT"
        });
        assert!(changed);
    }

    #[test]
    fn swap_case_leaves_symbols() {
        assert_eq!(swap_case('a'), 'A');
        assert_eq!(swap_case('Z'), 'z');
        assert_eq!(swap_case('*'), '*');
    }

    #[test]
    fn swap_case_keeps_multi_char_mappings() {
        assert_eq!(swap_case('ß'), 'ß');
        assert_eq!(swap_case('İ'), 'İ');
        assert_eq!(swap_case('é'), 'É');
    }

    #[test]
    fn random_case_never_changes_length() {
        let kw = Keyword::from("straße");
        for seed in 0..16 {
            let config = EmitterConfig::default().with_case(Case::Random).with_seed(seed);
            let out = Emitter::new(config).emit_keyword(&kw);
            assert_eq!(out.chars().count(), 6);
            assert_eq!(out.chars().nth(4), Some('ß'));
            assert_eq!(out.to_lowercase(), "straße");
        }
    }

    #[test]
    fn floats_use_positional_notation() {
        let mut emitter = Emitter::new(EmitterConfig::default());
        assert_eq!(emitter.emit_float(1e20), "100000000000000000000.0");
        assert_eq!(emitter.emit_float(1e-7), "0.0000001");
        assert_eq!(emitter.emit_float(2.5), "2.5");
        assert_eq!(emitter.emit_float(f64::NAN), "NULL");
        assert_eq!(emitter.emit_float(f64::NEG_INFINITY), "NULL");
    }
}
