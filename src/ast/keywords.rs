use std::fmt;

/// A SQL keyword or operator token.
///
/// A keyword is made of one or more parts. Compound keywords such as
/// `ORDER BY` or `IS NOT` keep their parts separate so the emitter can join
/// them with the configured space token (e.g. `ORDER/**/BY`).
///
/// # Examples
///
/// ```
/// use sqlcraft::Keyword;
///
/// let kw = Keyword::from("IS NOT");
/// assert_eq!(kw.parts(), ["IS", "NOT"]);
/// assert_eq!(kw.to_string(), "IS NOT");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Keyword {
    parts: Vec<String>,
}

impl Keyword {
    /// Single-part keyword, kept verbatim (no whitespace splitting).
    pub fn new(word: impl Into<String>) -> Self {
        Keyword {
            parts: vec![word.into()],
        }
    }

    /// Compound keyword from explicit parts.
    pub fn compound<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Keyword {
            parts: parts.into_iter().map(Into::into).collect(),
        }
    }

    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    /// Upper-cased, single-space form used for keyword comparisons.
    pub fn normalized(&self) -> String {
        self.parts
            .iter()
            .map(|p| p.to_uppercase())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Case-insensitive comparison against a space separated keyword.
    pub fn matches(&self, other: &str) -> bool {
        self.normalized() == other.to_uppercase()
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.parts.join(" "))
    }
}

/// Splits on whitespace, so `"GROUP BY"` becomes a two-part keyword.
impl From<&str> for Keyword {
    fn from(s: &str) -> Self {
        let parts: Vec<String> = s.split_whitespace().map(str::to_string).collect();
        if parts.is_empty() {
            Keyword::new(s)
        } else {
            Keyword { parts }
        }
    }
}

impl From<String> for Keyword {
    fn from(s: String) -> Self {
        Keyword::from(s.as_str())
    }
}

impl From<&[&str]> for Keyword {
    fn from(parts: &[&str]) -> Self {
        Keyword::compound(parts.iter().copied())
    }
}
