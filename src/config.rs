//! Emitter configuration.
//!
//! Nodes carry no formatting state; every emission takes an
//! [`EmitterConfig`]. `Case` and `Quotes` parse from the names used on the
//! command line (`upper`, `double`, ...).

use std::{fmt, str::FromStr};

/// Keyword casing applied on emission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Case {
    /// Keywords emitted as supplied
    #[default]
    None,
    Lower,
    Upper,
    /// Swap the case of random characters, for signature evasion
    Random,
}

impl FromStr for Case {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(Case::None),
            "lower" => Ok(Case::Lower),
            "upper" => Ok(Case::Upper),
            "random" => Ok(Case::Random),
            _ => Err(ConfigError::InvalidCase(s.to_string())),
        }
    }
}

/// String quoting style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Quotes {
    /// `'text'`
    #[default]
    Single,
    /// `"text"`
    Double,
    /// `` `text` ``
    Tick,
}

impl Quotes {
    pub fn char(&self) -> char {
        match self {
            Quotes::Single => '\'',
            Quotes::Double => '"',
            Quotes::Tick => '`',
        }
    }

    /// Wraps `s` in quotes, doubling every embedded quote character.
    ///
    /// ```
    /// use sqlcraft::Quotes;
    ///
    /// assert_eq!(Quotes::Single.quote("it's"), "'it''s'");
    /// assert_eq!(Quotes::Double.quote("say \"hi\""), "\"say \"\"hi\"\"\"");
    /// ```
    pub fn quote(&self, s: &str) -> String {
        let q = self.char();
        let mut out = String::with_capacity(s.len() + 2);
        out.push(q);
        for c in s.chars() {
            if c == q {
                out.push(q);
            }
            out.push(c);
        }
        out.push(q);
        out
    }

    /// Inverse of [`quote`](Self::quote). Returns `None` when `s` is not a
    /// well-formed quoted string in this style.
    pub fn unquote(&self, s: &str) -> Option<String> {
        let q = self.char();
        let inner = s.strip_prefix(q)?.strip_suffix(q)?;
        let mut out = String::with_capacity(inner.len());
        let mut chars = inner.chars();
        while let Some(c) = chars.next() {
            if c == q {
                // A lone quote inside the body is malformed
                if chars.next() != Some(q) {
                    return None;
                }
            }
            out.push(c);
        }
        Some(out)
    }
}

impl FromStr for Quotes {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "single" => Ok(Quotes::Single),
            "double" => Ok(Quotes::Double),
            "tick" => Ok(Quotes::Tick),
            _ => Err(ConfigError::InvalidQuoteStyle(s.to_string())),
        }
    }
}

/// Opaque name of the target SQL dialect (`mysql`, `sqlite`, ...).
///
/// The emitter carries it through untouched; dialect-aware collaborators
/// may read it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DialectHint(String);

impl DialectHint {
    pub fn new(name: impl Into<String>) -> Self {
        DialectHint(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DialectHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Formatting options for one emission.
///
/// # Examples
///
/// ```
/// use sqlcraft::{Case, EmitterConfig, Quotes};
///
/// let config = EmitterConfig::default()
///     .with_case(Case::Lower)
///     .with_space("/**/")
///     .with_quotes(Quotes::Double);
/// assert_eq!(config.space, "/**/");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EmitterConfig {
    pub case: Case,
    /// Whitespace token placed between keywords and operands
    pub space: String,
    pub quotes: Quotes,
    pub syntax: Option<DialectHint>,
    /// Comment marker used to terminate injections (`;--` when unset)
    pub comment: Option<String>,
    /// Seed for [`Case::Random`]; entropy is used when unset
    pub seed: Option<u64>,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        EmitterConfig {
            case: Case::None,
            space: " ".to_string(),
            quotes: Quotes::Single,
            syntax: None,
            comment: None,
            seed: None,
        }
    }
}

impl EmitterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_case(mut self, case: Case) -> Self {
        self.case = case;
        self
    }

    pub fn with_space(mut self, space: impl Into<String>) -> Self {
        self.space = space.into();
        self
    }

    pub fn with_quotes(mut self, quotes: Quotes) -> Self {
        self.quotes = quotes;
        self
    }

    pub fn with_syntax(mut self, syntax: DialectHint) -> Self {
        self.syntax = Some(syntax);
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Errors from parsing configuration values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid quote style: {0} (expected single, double or tick)")]
    InvalidQuoteStyle(String),

    #[error("invalid case: {0} (expected lower, upper, random or none)")]
    InvalidCase(String),

    #[error("invalid escape kind: {0} (expected integer, decimal, string, list or column)")]
    InvalidEscapeKind(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unquote_rejects_lone_inner_quote() {
        assert_eq!(Quotes::Single.unquote("'a'b'"), None);
        assert_eq!(Quotes::Single.unquote("'a''b'"), Some("a'b".to_string()));
    }

    #[test]
    fn unquote_rejects_missing_delimiters() {
        assert_eq!(Quotes::Tick.unquote("abc"), None);
        assert_eq!(Quotes::Tick.unquote("`"), None);
    }

    #[test]
    fn quote_style_parse_errors_name_the_value() {
        let err = "backtick".parse::<Quotes>().unwrap_err();
        assert_eq!(err, ConfigError::InvalidQuoteStyle("backtick".to_string()));
        assert_eq!("TICK".parse::<Quotes>().unwrap(), Quotes::Tick);
    }
}
