use crate::{Error, Result};

/// Shortest question, in characters after trimming, worth sending to a backend.
pub const MIN_QUESTION_CHARS: usize = 5;

/// Returns `false` for absent, empty, or too-short questions.
pub fn validate<'a>(query: impl Into<Option<&'a str>>) -> bool {
    QueryValidator::default().is_valid(query)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryValidator {
    min_chars: usize,
}

impl QueryValidator {
    pub fn new(min_chars: usize) -> Self {
        Self { min_chars }
    }

    pub fn min_chars(&self) -> usize {
        self.min_chars
    }

    pub fn is_valid<'a>(&self, query: impl Into<Option<&'a str>>) -> bool {
        match query.into() {
            Some(text) => text.trim().chars().count() >= self.min_chars,
            None => false,
        }
    }

    /// Hands back the question untouched when it passes.
    pub fn check<'a>(&self, query: impl Into<Option<&'a str>>) -> Result<&'a str> {
        match query.into() {
            Some(text) if self.is_valid(text) => Ok(text),
            _ => Err(Error::validation(format!(
                "question must contain at least {} characters",
                self.min_chars
            ))),
        }
    }
}

impl Default for QueryValidator {
    fn default() -> Self {
        Self::new(MIN_QUESTION_CHARS)
    }
}
