use rust_decimal::Decimal;

/// A SQL-level constant.
///
/// # Examples
///
/// ```
/// use sqlcraft::{Literal, ToSql};
///
/// assert_eq!(Literal::Integer(42).to_sql().unwrap(), "42");
/// assert_eq!(Literal::from("it's").to_sql().unwrap(), "'it''s'");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// `NULL`
    Null,

    /// Integer number
    Integer(i64),

    /// Floating point number
    Float(f64),

    /// Exact decimal, emitted with its scale (`1.0` stays `1.0`)
    Decimal(Decimal),

    /// String, quoted on emission
    String(String),
}

impl Literal {
    pub fn is_null(&self) -> bool {
        matches!(self, Literal::Null)
    }
}

impl From<i64> for Literal {
    fn from(n: i64) -> Self {
        Literal::Integer(n)
    }
}

impl From<i32> for Literal {
    fn from(n: i32) -> Self {
        Literal::Integer(n.into())
    }
}

impl From<u32> for Literal {
    fn from(n: u32) -> Self {
        Literal::Integer(n.into())
    }
}

impl From<f64> for Literal {
    fn from(n: f64) -> Self {
        Literal::Float(n)
    }
}

impl From<Decimal> for Literal {
    fn from(d: Decimal) -> Self {
        Literal::Decimal(d)
    }
}

impl From<&str> for Literal {
    fn from(s: &str) -> Self {
        Literal::String(s.to_string())
    }
}

impl From<String> for Literal {
    fn from(s: String) -> Self {
        Literal::String(s)
    }
}
