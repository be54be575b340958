use crate::config::{SafelistEntry, ScanConfig};
use crate::errors::Result;
use crate::matcher::ClassMatcher;

/// A compiled safelist rule
#[derive(Debug, Clone)]
pub enum SafelistRule {
    /// Retain exactly this class name
    Literal(String),

    /// Retain any class the pattern covers, and its variant-prefixed forms
    Pattern {
        matcher: ClassMatcher,
        variants: Vec<String>,
    },
}

impl SafelistRule {
    /// Whether this rule preserves `class`.
    pub fn preserves(&self, class: &str) -> bool {
        match self {
            SafelistRule::Literal(name) => name == class,
            SafelistRule::Pattern { matcher, variants } => {
                if matcher.is_match(class) {
                    return true;
                }

                variants.iter().any(|variant| {
                    strip_variant(class, variant)
                        .map(|base| matcher.is_match(base))
                        .unwrap_or(false)
                })
            }
        }
    }
}

/// Strip a `variant:` prefix from a class name. Variants may be declared
/// with or without the trailing colon.
fn strip_variant<'a>(class: &'a str, variant: &str) -> Option<&'a str> {
    let prefix = variant.strip_suffix(':').unwrap_or(variant);
    class.strip_prefix(prefix)?.strip_prefix(':')
}

/// The compiled safelist of one configuration, rules in declared order
#[derive(Debug, Clone, Default)]
pub struct Safelist {
    rules: Vec<SafelistRule>,
}

impl Safelist {
    /// Compile the safelist entries of `config`, keeping declared order.
    pub fn compile(config: &ScanConfig) -> Result<Self> {
        let mut rules = Vec::with_capacity(config.safelist.len());

        for entry in &config.safelist {
            let rule = match entry {
                SafelistEntry::Literal(name) => SafelistRule::Literal(name.clone()),
                SafelistEntry::Pattern(p) => SafelistRule::Pattern {
                    matcher: ClassMatcher::new(&p.pattern)?,
                    variants: p.variants.clone(),
                },
            };
            rules.push(rule);
        }

        Ok(Self { rules })
    }

    /// The compiled rules, in declared order
    pub fn rules(&self) -> &[SafelistRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Whether any rule preserves `class`. The outcome does not depend on
    /// rule order; only `matching_rule` does.
    pub fn is_preserved(&self, class: &str) -> bool {
        self.rules.iter().any(|rule| rule.preserves(class))
    }

    /// Index of the first rule preserving `class`, for diagnostics.
    pub fn matching_rule(&self, class: &str) -> Option<usize> {
        self.rules.iter().position(|rule| rule.preserves(class))
    }

    /// Filter `candidates` down to the preserved subset, deduplicated and in
    /// input order.
    pub fn preserved<'a, I>(&self, candidates: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut seen = std::collections::HashSet::new();
        let mut kept = Vec::new();

        for candidate in candidates {
            if self.is_preserved(candidate) && seen.insert(candidate.to_string()) {
                kept.push(candidate.to_string());
            }
        }

        kept
    }
}
