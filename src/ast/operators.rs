//! Operator capability shared by every value node.
//!
//! Arithmetic and bitwise operators go through `std::ops`, so
//! `Field::new("a") + 1` builds a [`BinaryExpr`]. Comparisons, SQL keyword
//! operators, boolean combinators and the remaining unary operators are
//! methods on [`SqlOps`]. None of them inspect their operands.

use std::ops::{Add, BitAnd, BitOr, Div, Mul, Neg, Rem, Shl, Shr, Sub};

use crate::ast::{BinaryExpr, Expr, Field, Function, Keyword, Literal, UnaryExpr};

/// Expression-building methods available on every value node.
///
/// # Examples
///
/// ```
/// use sqlcraft::{Field, SqlOps, ToSql};
///
/// let cond = Field::new("id").eq(1).or(Field::new("name").like("a%"));
/// assert_eq!(cond.to_sql().unwrap(), "id=1 OR name LIKE 'a%'");
/// ```
#[allow(clippy::should_implement_trait, clippy::wrong_self_convention)]
pub trait SqlOps: Into<Expr> + Sized {
    /// `self op other`
    fn binary(self, operator: impl Into<Keyword>, other: impl Into<Expr>) -> Expr {
        Expr::Binary(BinaryExpr::new(self, operator, other))
    }

    /// `op self`
    fn unary(self, operator: impl Into<Keyword>) -> Expr {
        Expr::Unary(UnaryExpr::new(operator, self))
    }

    // Comparison
    /// `self=other`
    fn eq(self, other: impl Into<Expr>) -> Expr {
        self.binary("=", other)
    }
    /// `self!=other`
    fn ne(self, other: impl Into<Expr>) -> Expr {
        self.binary("!=", other)
    }
    /// `self<other`
    fn lt(self, other: impl Into<Expr>) -> Expr {
        self.binary("<", other)
    }
    /// `self<=other`
    fn le(self, other: impl Into<Expr>) -> Expr {
        self.binary("<=", other)
    }
    /// `self>other`
    fn gt(self, other: impl Into<Expr>) -> Expr {
        self.binary(">", other)
    }
    /// `self>=other`
    fn ge(self, other: impl Into<Expr>) -> Expr {
        self.binary(">=", other)
    }

    // Keyword comparison
    fn is(self, other: impl Into<Expr>) -> Expr {
        self.binary("IS", other)
    }
    fn is_not(self, other: impl Into<Expr>) -> Expr {
        self.binary(Keyword::compound(["IS", "NOT"]), other)
    }
    fn like(self, pattern: impl Into<Expr>) -> Expr {
        self.binary("LIKE", pattern)
    }
    fn glob(self, pattern: impl Into<Expr>) -> Expr {
        self.binary("GLOB", pattern)
    }
    fn match_(self, pattern: impl Into<Expr>) -> Expr {
        self.binary("MATCH", pattern)
    }
    fn regexp(self, pattern: impl Into<Expr>) -> Expr {
        self.binary("REGEXP", pattern)
    }
    /// `self IN other`; a statement operand is parenthesized by the emitter.
    fn in_(self, other: impl Into<Expr>) -> Expr {
        self.binary("IN", other)
    }
    /// `self IN (a,b,c)`
    fn in_list<I, A>(self, values: I) -> Expr
    where
        I: IntoIterator<Item = A>,
        A: Into<Expr>,
    {
        self.binary("IN", Expr::group(Expr::list(values)))
    }
    /// `self AS alias`
    fn as_(self, alias: impl ToString) -> Expr {
        self.binary("AS", Field::new(alias))
    }

    // Boolean
    fn and(self, other: impl Into<Expr>) -> Expr {
        self.binary("AND", other)
    }
    fn or(self, other: impl Into<Expr>) -> Expr {
        self.binary("OR", other)
    }

    // Unary
    /// `+self`
    fn pos(self) -> Expr {
        self.unary("+")
    }
    /// `~self`
    fn bit_not(self) -> Expr {
        self.unary("~")
    }
    /// `!self`
    fn negate(self) -> Expr {
        self.unary("!")
    }
    /// `NOT self`
    fn not(self) -> Expr {
        self.unary("NOT")
    }
}

macro_rules! impl_sql_ops {
    ($($node:ty),* $(,)?) => {
        $(
            impl SqlOps for $node {}

            impl Neg for $node {
                type Output = Expr;

                fn neg(self) -> Expr {
                    self.unary("-")
                }
            }

            impl_binary_ops!($node;
                Add, add, "+";
                Sub, sub, "-";
                Mul, mul, "*";
                Div, div, "/";
                Rem, rem, "%";
                Shl, shl, "<<";
                Shr, shr, ">>";
                BitAnd, bitand, "&";
                BitOr, bitor, "|";
            );
        )*
    };
}

macro_rules! impl_binary_ops {
    ($node:ty; $($trait:ident, $method:ident, $op:literal);* $(;)?) => {
        $(
            impl<R: Into<Expr>> $trait<R> for $node {
                type Output = Expr;

                fn $method(self, rhs: R) -> Expr {
                    self.binary($op, rhs)
                }
            }
        )*
    };
}

impl_sql_ops!(Expr, Field, Function, Literal, BinaryExpr, UnaryExpr);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comparison_builds_binary_with_symbolic_operator() {
        let expr = Field::new("id").eq(1);
        match expr {
            Expr::Binary(b) => {
                assert_eq!(b.operator().to_string(), "=");
                assert!(matches!(b.left(), Expr::Field(f) if f.name() == "id"));
                assert!(matches!(b.right(), Expr::Literal(Literal::Integer(1))));
            }
            other => panic!("expected binary expression, got {:?}", other),
        }
    }

    #[test]
    fn is_not_is_a_two_part_keyword() {
        let Expr::Binary(b) = Field::new("x").is_not(Expr::null()) else {
            panic!("expected binary expression");
        };
        assert_eq!(b.operator().parts(), ["IS", "NOT"]);
    }

    #[test]
    fn std_ops_build_arithmetic() {
        let Expr::Binary(b) = Field::new("a") << 2 else {
            panic!("expected binary expression");
        };
        assert_eq!(b.operator().to_string(), "<<");

        let Expr::Unary(u) = -Field::new("a") else {
            panic!("expected unary expression");
        };
        assert_eq!(u.operator().to_string(), "-");
    }

    #[test]
    fn boolean_combinators_nest_left() {
        let Expr::Binary(outer) = Expr::from(1).or(2).or(3) else {
            panic!("expected binary expression");
        };
        assert_eq!(outer.operator().to_string(), "OR");
        assert!(matches!(outer.left(), Expr::Binary(inner) if inner.operator().to_string() == "OR"));
    }
}
