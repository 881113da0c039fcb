//! Dialect registry interface.
//!
//! Per-database keyword and data type names are supplied by a collaborator
//! implementing [`Dialect`]. [`KeywordTable`] is a plain registry built once
//! by the caller and passed where it is needed; there is no global table.

use std::collections::HashMap;

use crate::ast::Keyword;

/// Name lookups supplied by a dialect.
pub trait Dialect {
    /// Dialect-specific spelling of a keyword.
    fn lookup_keyword(&self, name: &str) -> Option<Keyword>;

    /// Data type keyword, with an optional length (`VARCHAR(255)`).
    fn lookup_datatype(&self, name: &str, length: Option<usize>) -> Option<Keyword>;
}

/// Registry of keyword and data type names, keyed case-insensitively.
///
/// # Examples
///
/// ```
/// use sqlcraft::dialect::{Dialect, KeywordTable};
///
/// let mut mysql = KeywordTable::new("mysql");
/// mysql.keyword("concat", "CONCAT_WS").datatype("string", "VARCHAR");
///
/// assert_eq!(mysql.lookup_keyword("CONCAT").unwrap().to_string(), "CONCAT_WS");
/// assert_eq!(
///     mysql.lookup_datatype("string", Some(255)).unwrap().to_string(),
///     "VARCHAR(255)"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct KeywordTable {
    name: String,
    keywords: HashMap<String, String>,
    datatypes: HashMap<String, String>,
}

impl KeywordTable {
    pub fn new(name: impl Into<String>) -> Self {
        KeywordTable {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn keyword(&mut self, name: &str, spelling: impl Into<String>) -> &mut Self {
        self.keywords.insert(name.to_uppercase(), spelling.into());
        self
    }

    pub fn datatype(&mut self, name: &str, spelling: impl Into<String>) -> &mut Self {
        self.datatypes.insert(name.to_uppercase(), spelling.into());
        self
    }
}

impl Dialect for KeywordTable {
    fn lookup_keyword(&self, name: &str) -> Option<Keyword> {
        self.keywords
            .get(&name.to_uppercase())
            .map(|s| Keyword::from(s.as_str()))
    }

    fn lookup_datatype(&self, name: &str, length: Option<usize>) -> Option<Keyword> {
        let spelling = self.datatypes.get(&name.to_uppercase())?;
        Some(match length {
            Some(n) => Keyword::new(format!("{}({})", spelling, n)),
            None => Keyword::from(spelling.as_str()),
        })
    }
}
