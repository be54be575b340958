use crate::safelist::Safelist;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Metadata for a generated safelist report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Version of the report format
    pub version: String,

    /// Timestamp when the report was generated
    pub generated_at: DateTime<Utc>,

    /// Number of safelist rules in the configuration
    pub rules_total: usize,

    /// Number of candidate classes checked
    pub candidates_checked: usize,

    /// Number of candidates preserved by the safelist
    pub classes_preserved: usize,

    /// Crate version that produced the report
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_version: Option<String>,
}

/// Outcome for a single candidate class
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassDecision {
    /// Whether the safelist preserves this class
    pub preserved: bool,

    /// Zero-based index of the first matching rule, in declared order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<usize>,
}

/// Complete report of one safelist evaluation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SafelistReport {
    /// Metadata about the evaluation
    pub metadata: ReportMetadata,

    /// Map of candidate class names to their decision, in input order
    pub classes: IndexMap<String, ClassDecision>,
}

impl SafelistReport {
    /// Evaluate `candidates` against a compiled safelist. Duplicate
    /// candidates collapse onto one entry.
    pub fn evaluate<'a, I>(safelist: &Safelist, candidates: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut classes = IndexMap::new();

        for candidate in candidates {
            if classes.contains_key(candidate) {
                continue;
            }

            let rule = safelist.matching_rule(candidate);
            classes.insert(
                candidate.to_string(),
                ClassDecision {
                    preserved: rule.is_some(),
                    rule,
                },
            );
        }

        let preserved = classes.values().filter(|d| d.preserved).count();

        Self {
            metadata: ReportMetadata {
                version: "1.0.0".to_string(),
                generated_at: Utc::now(),
                rules_total: safelist.len(),
                candidates_checked: classes.len(),
                classes_preserved: preserved,
                tool_version: Some(env!("CARGO_PKG_VERSION").to_string()),
            },
            classes,
        }
    }

    /// Convert the report to a pretty JSON string
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Convert the report to a compact JSON string
    pub fn to_compact_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
