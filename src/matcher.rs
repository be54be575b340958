use crate::errors::{Result, SafelistError};
use regex::Regex;

/// A safelist pattern compiled for whole-class matching.
///
/// Safelist patterns are implicitly anchored: `bg-.*-(500|600)` must cover
/// the entire class name, so `xbg-red-500` and `bg-red-500x` do not match.
#[derive(Debug, Clone)]
pub struct ClassMatcher {
    source: String,
    regex: Regex,
}

impl ClassMatcher {
    /// Compile a pattern, anchoring it to the full class name.
    pub fn new(pattern: &str) -> Result<Self> {
        let anchored = format!("^(?:{})$", pattern);
        let regex = Regex::new(&anchored).map_err(|e| SafelistError::MalformedPattern {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;

        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }

    /// The pattern source as written in the configuration.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Whether `candidate` is covered by this pattern in full.
    pub fn is_match(&self, candidate: &str) -> bool {
        self.regex.is_match(candidate)
    }
}

/// Check whether a pattern compiles, without keeping the compiled form.
pub fn compiles(pattern: &str) -> bool {
    ClassMatcher::new(pattern).is_ok()
}

/// One-shot match check. Prefer a `ClassMatcher` when matching repeatedly.
pub fn matches(pattern: &str, candidate: &str) -> Result<bool> {
    Ok(ClassMatcher::new(pattern)?.is_match(candidate))
}
