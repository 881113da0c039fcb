use std::{fmt, sync::Arc};

use rust_decimal::Decimal;

use crate::{
    ast::{Field, Function, Keyword, Literal, Statement},
    emitter::{EmitError, Emitter},
};

/// A value node in the expression tree.
///
/// Every node is immutable once built; trees are composed bottom-up with the
/// [`SqlOps`](crate::SqlOps) methods, the `std::ops` operators, and the
/// builders in [`dsl`](crate::dsl).
#[derive(Debug, Clone)]
pub enum Expr {
    /// Constant value (`NULL`, `42`, `1.5`, `'text'`)
    Literal(Literal),

    /// Emitted as the tautology `1=1` or the contradiction `1=0`
    Boolean(bool),

    /// Bare keyword (`*`, `DEFAULT`, `CURRENT_USER`)
    Keyword(Keyword),

    /// Dotted reference (`db.users.id`)
    Field(Field),

    /// Function call (`MAX(1,2)`)
    Function(Function),

    /// Binary operation (`id=1`, `a OR b`)
    Binary(BinaryExpr),

    /// Unary operation (`-x`, `NOT x`)
    Unary(UnaryExpr),

    /// Comma separated values with no surrounding parentheses
    List(Vec<Expr>),

    /// Ordered `key=value` pairs, as used by `SET`
    Map(Vec<(Expr, Expr)>),

    /// Explicit parenthesization of the inner node: `(1,2,3)`
    Group(Box<Expr>),

    /// Nested statement; parenthesized when used as an operand
    Statement(Box<Statement>),

    /// Node type defined outside this crate that renders itself
    Custom(Arc<dyn CustomNode>),
}

/// Hook for node types the emitter has no rule for.
///
/// A custom node either renders itself or reports that it cannot, in which
/// case emission fails with [`EmitError::UnsupportedNode`].
pub trait CustomNode: fmt::Debug + Send + Sync {
    /// Type name reported in errors.
    fn node_name(&self) -> &str;

    fn render(&self, _emitter: &mut Emitter) -> Option<Result<String, EmitError>> {
        None
    }
}

/// `left operator right`
#[derive(Debug, Clone)]
pub struct BinaryExpr {
    left: Box<Expr>,
    operator: Keyword,
    right: Box<Expr>,
}

impl BinaryExpr {
    pub fn new(left: impl Into<Expr>, operator: impl Into<Keyword>, right: impl Into<Expr>) -> Self {
        BinaryExpr {
            left: Box::new(left.into()),
            operator: operator.into(),
            right: Box::new(right.into()),
        }
    }

    pub fn left(&self) -> &Expr {
        &self.left
    }

    pub fn operator(&self) -> &Keyword {
        &self.operator
    }

    pub fn right(&self) -> &Expr {
        &self.right
    }
}

/// `operator operand`
#[derive(Debug, Clone)]
pub struct UnaryExpr {
    operator: Keyword,
    operand: Box<Expr>,
}

impl UnaryExpr {
    pub fn new(operator: impl Into<Keyword>, operand: impl Into<Expr>) -> Self {
        UnaryExpr {
            operator: operator.into(),
            operand: Box::new(operand.into()),
        }
    }

    pub fn operator(&self) -> &Keyword {
        &self.operator
    }

    pub fn operand(&self) -> &Expr {
        &self.operand
    }
}

impl Expr {
    pub fn null() -> Self {
        Expr::Literal(Literal::Null)
    }

    pub fn keyword(kw: impl Into<Keyword>) -> Self {
        Expr::Keyword(kw.into())
    }

    pub fn field(name: impl ToString) -> Self {
        Expr::Field(Field::new(name))
    }

    pub fn list<I, A>(items: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<Expr>,
    {
        Expr::List(items.into_iter().map(Into::into).collect())
    }

    /// `(inner)`
    pub fn group(inner: impl Into<Expr>) -> Self {
        Expr::Group(Box::new(inner.into()))
    }

    pub fn custom(node: impl CustomNode + 'static) -> Self {
        Expr::Custom(Arc::new(node))
    }

    pub fn is_statement(&self) -> bool {
        matches!(self, Expr::Statement(_))
    }

    /// Short type name, used in error messages and logs.
    pub fn node_name(&self) -> &str {
        match self {
            Expr::Literal(_) => "Literal",
            Expr::Boolean(_) => "Boolean",
            Expr::Keyword(_) => "Keyword",
            Expr::Field(_) => "Field",
            Expr::Function(_) => "Function",
            Expr::Binary(_) => "BinaryExpr",
            Expr::Unary(_) => "UnaryExpr",
            Expr::List(_) => "List",
            Expr::Map(_) => "Map",
            Expr::Group(_) => "Group",
            Expr::Statement(_) => "Statement",
            Expr::Custom(node) => node.node_name(),
        }
    }
}

impl From<Literal> for Expr {
    fn from(l: Literal) -> Self {
        Expr::Literal(l)
    }
}

impl From<i64> for Expr {
    fn from(n: i64) -> Self {
        Expr::Literal(Literal::Integer(n))
    }
}

impl From<i32> for Expr {
    fn from(n: i32) -> Self {
        Expr::Literal(Literal::from(n))
    }
}

impl From<u32> for Expr {
    fn from(n: u32) -> Self {
        Expr::Literal(Literal::from(n))
    }
}

impl From<f64> for Expr {
    fn from(n: f64) -> Self {
        Expr::Literal(Literal::Float(n))
    }
}

impl From<Decimal> for Expr {
    fn from(d: Decimal) -> Self {
        Expr::Literal(Literal::Decimal(d))
    }
}

impl From<&str> for Expr {
    fn from(s: &str) -> Self {
        Expr::Literal(Literal::from(s))
    }
}

impl From<String> for Expr {
    fn from(s: String) -> Self {
        Expr::Literal(Literal::String(s))
    }
}

impl From<bool> for Expr {
    fn from(b: bool) -> Self {
        Expr::Boolean(b)
    }
}

impl From<Keyword> for Expr {
    fn from(kw: Keyword) -> Self {
        Expr::Keyword(kw)
    }
}

impl From<Field> for Expr {
    fn from(f: Field) -> Self {
        Expr::Field(f)
    }
}

impl From<Function> for Expr {
    fn from(f: Function) -> Self {
        Expr::Function(f)
    }
}

impl From<BinaryExpr> for Expr {
    fn from(e: BinaryExpr) -> Self {
        Expr::Binary(e)
    }
}

impl From<UnaryExpr> for Expr {
    fn from(e: UnaryExpr) -> Self {
        Expr::Unary(e)
    }
}

impl From<Statement> for Expr {
    fn from(s: Statement) -> Self {
        Expr::Statement(Box::new(s))
    }
}

impl<T: Into<Expr>> From<Vec<T>> for Expr {
    fn from(items: Vec<T>) -> Self {
        Expr::list(items)
    }
}

impl<T: Into<Expr>> From<Option<T>> for Expr {
    fn from(value: Option<T>) -> Self {
        value.map_or_else(Expr::null, Into::into)
    }
}
