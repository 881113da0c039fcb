//! Error-signature matcher interface.
//!
//! Detecting database error strings in a response body is a collaborator
//! concern; this module fixes its interface and ships a regex-backed
//! [`SignatureSet`] that callers populate with their own patterns.

use regex::Regex;

/// A database error recognised in some text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorMatch {
    pub software: String,
    pub dialect: String,
    pub matched_text: String,
}

/// Finds a database error message in a response body.
pub trait ErrorMatcher {
    fn find(&self, text: &str) -> Option<ErrorMatch>;
}

#[derive(Debug, Clone)]
struct Signature {
    software: String,
    dialect: String,
    pattern: Regex,
}

/// Ordered list of regex signatures; the first match wins.
///
/// # Examples
///
/// ```
/// use sqlcraft::signature::{ErrorMatcher, SignatureSet};
///
/// let mut set = SignatureSet::new();
/// set.add("MySQL", "mysql", r"You have an error in your SQL syntax")?;
///
/// let found = set.find("<b>You have an error in your SQL syntax</b>").unwrap();
/// assert_eq!(found.software, "MySQL");
/// assert!(set.find("all good").is_none());
/// # Ok::<(), regex::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct SignatureSet {
    signatures: Vec<Signature>,
}

impl SignatureSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(
        &mut self,
        software: impl Into<String>,
        dialect: impl Into<String>,
        pattern: &str,
    ) -> Result<&mut Self, regex::Error> {
        self.signatures.push(Signature {
            software: software.into(),
            dialect: dialect.into(),
            pattern: Regex::new(pattern)?,
        });
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }
}

impl ErrorMatcher for SignatureSet {
    fn find(&self, text: &str) -> Option<ErrorMatch> {
        self.signatures.iter().find_map(|sig| {
            sig.pattern.find(text).map(|m| ErrorMatch {
                software: sig.software.clone(),
                dialect: sig.dialect.clone(),
                matched_text: m.as_str().to_string(),
            })
        })
    }
}
