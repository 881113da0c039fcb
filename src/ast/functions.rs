use crate::ast::{Expr, Keyword};

/// A named SQL function call with positional arguments.
///
/// Arity is never checked; a wrong argument count only shows up in the
/// emitted SQL.
///
/// # Examples
///
/// ```
/// use sqlcraft::{Function, ToSql};
///
/// let max = Function::new("MAX", [1, 2]);
/// assert_eq!(max.to_sql().unwrap(), "MAX(1,2)");
/// ```
#[derive(Debug, Clone)]
pub struct Function {
    name: Keyword,
    arguments: Vec<Expr>,
}

impl Function {
    pub fn new<I, A>(name: impl Into<Keyword>, arguments: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<Expr>,
    {
        Function {
            name: name.into(),
            arguments: arguments.into_iter().map(Into::into).collect(),
        }
    }

    /// Call with no arguments, e.g. `VERSION()`.
    pub fn nullary(name: impl Into<Keyword>) -> Self {
        Function {
            name: name.into(),
            arguments: Vec::new(),
        }
    }

    /// Appends one more argument.
    pub fn arg(mut self, argument: impl Into<Expr>) -> Self {
        self.arguments.push(argument.into());
        self
    }

    pub fn name(&self) -> &Keyword {
        &self.name
    }

    pub fn arguments(&self) -> &[Expr] {
        &self.arguments
    }
}

macro_rules! unary_functions {
    ($($(#[$doc:meta])* $fn_name:ident => $sql:literal),* $(,)?) => {
        $(
            $(#[$doc])*
            pub fn $fn_name(argument: impl Into<Expr>) -> Function {
                Function::new($sql, [argument.into()])
            }
        )*
    };
}

macro_rules! nullary_functions {
    ($($(#[$doc:meta])* $fn_name:ident => $sql:literal),* $(,)?) => {
        $(
            $(#[$doc])*
            pub fn $fn_name() -> Function {
                Function::nullary($sql)
            }
        )*
    };
}

unary_functions! {
    /// `COUNT(x)`
    count => "COUNT",
    /// `MAX(x)`
    max => "MAX",
    /// `MIN(x)`
    min => "MIN",
    /// `SUM(x)`
    sum => "SUM",
    /// `AVG(x)`
    avg => "AVG",
    /// `LENGTH(x)`
    length => "LENGTH",
    /// `LOWER(x)`
    lower => "LOWER",
    /// `UPPER(x)`
    upper => "UPPER",
    /// `ASCII(x)`
    ascii => "ASCII",
    /// `CHAR(x)`
    char => "CHAR",
    /// `HEX(x)`
    hex => "HEX",
    /// `MD5(x)`
    md5 => "MD5",
    /// `SLEEP(seconds)`, the usual time-based probe
    sleep => "SLEEP",
    /// `LOAD_FILE(path)` (MySQL)
    load_file => "LOAD_FILE",
}

nullary_functions! {
    /// `VERSION()`
    version => "VERSION",
    /// `DATABASE()`
    database => "DATABASE",
    /// `USER()`
    user => "USER",
    /// `RANDOM()`
    random => "RANDOM",
}

/// `CONCAT(a, b, ...)`
pub fn concat<I, A>(arguments: I) -> Function
where
    I: IntoIterator<Item = A>,
    A: Into<Expr>,
{
    Function::new("CONCAT", arguments)
}

/// `SUBSTR(string, start, length)`
pub fn substr(string: impl Into<Expr>, start: i64, length: i64) -> Function {
    Function::new("SUBSTR", [string.into(), start.into(), length.into()])
}
