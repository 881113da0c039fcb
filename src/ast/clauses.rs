use crate::ast::{Expr, Keyword};

/// One keyword + argument fragment of a statement tail (`WHERE id=1`).
///
/// # Examples
///
/// ```
/// use sqlcraft::{Clause, ToSql};
///
/// let limit = Clause::new("LIMIT", 10);
/// assert_eq!(limit.to_sql().unwrap(), "LIMIT 10");
///
/// let mut clause = Clause::bare("ORDER BY");
/// clause.set_argument(1);
/// assert_eq!(clause.to_sql().unwrap(), "ORDER BY 1");
/// ```
#[derive(Debug, Clone)]
pub struct Clause {
    keyword: Keyword,
    argument: Option<Expr>,
}

impl Clause {
    pub fn new(keyword: impl Into<Keyword>, argument: impl Into<Expr>) -> Self {
        Clause {
            keyword: keyword.into(),
            argument: Some(argument.into()),
        }
    }

    /// Clause without an argument (`NOT INDEXED`).
    pub fn bare(keyword: impl Into<Keyword>) -> Self {
        Clause {
            keyword: keyword.into(),
            argument: None,
        }
    }

    /// Creates a bare clause and hands it to `build` for in-place setup.
    pub fn build(keyword: impl Into<Keyword>, build: impl FnOnce(&mut Clause)) -> Self {
        let mut clause = Clause::bare(keyword);
        build(&mut clause);
        clause
    }

    pub fn set_argument(&mut self, argument: impl Into<Expr>) -> &mut Self {
        self.argument = Some(argument.into());
        self
    }

    pub fn keyword(&self) -> &Keyword {
        &self.keyword
    }

    pub fn argument(&self) -> Option<&Expr> {
        self.argument.as_ref()
    }

    /// Registered clause kind for this keyword, if any.
    pub fn kind(&self) -> Option<ClauseKind> {
        ClauseKind::from_keyword(&self.keyword)
    }
}

/// Clause keywords statements know how to register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClauseKind {
    From,
    Into,
    Where,
    Join,
    GroupBy,
    Having,
    OrderBy,
    Limit,
    Offset,
    Union,
    UnionAll,
    Values,
    DefaultValues,
    Set,
    IndexedBy,
    NotIndexed,
}

impl ClauseKind {
    pub const ALL: [ClauseKind; 16] = [
        ClauseKind::From,
        ClauseKind::Into,
        ClauseKind::Where,
        ClauseKind::Join,
        ClauseKind::GroupBy,
        ClauseKind::Having,
        ClauseKind::OrderBy,
        ClauseKind::Limit,
        ClauseKind::Offset,
        ClauseKind::Union,
        ClauseKind::UnionAll,
        ClauseKind::Values,
        ClauseKind::DefaultValues,
        ClauseKind::Set,
        ClauseKind::IndexedBy,
        ClauseKind::NotIndexed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClauseKind::From => "FROM",
            ClauseKind::Into => "INTO",
            ClauseKind::Where => "WHERE",
            ClauseKind::Join => "JOIN",
            ClauseKind::GroupBy => "GROUP BY",
            ClauseKind::Having => "HAVING",
            ClauseKind::OrderBy => "ORDER BY",
            ClauseKind::Limit => "LIMIT",
            ClauseKind::Offset => "OFFSET",
            ClauseKind::Union => "UNION",
            ClauseKind::UnionAll => "UNION ALL",
            ClauseKind::Values => "VALUES",
            ClauseKind::DefaultValues => "DEFAULT VALUES",
            ClauseKind::Set => "SET",
            ClauseKind::IndexedBy => "INDEXED BY",
            ClauseKind::NotIndexed => "NOT INDEXED",
        }
    }

    pub fn keyword(&self) -> Keyword {
        Keyword::from(self.as_str())
    }

    /// Case-insensitive lookup by keyword text.
    pub fn from_keyword(keyword: &Keyword) -> Option<ClauseKind> {
        let normalized = keyword.normalized();
        ClauseKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
    }
}
