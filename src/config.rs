use crate::errors::{Result, SafelistError};
use crate::matcher::ClassMatcher;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

/// Content-scan configuration for a Tailwind-style build.
///
/// All entry sequences keep their declared order so diagnostics can refer to
/// rules by position. Unknown top-level fields are rejected rather than
/// silently dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    /// Glob patterns naming the files to scan for class usage
    pub content: Vec<String>,

    /// Rules forcing retention of classes a static scan would miss
    pub safelist: Vec<SafelistEntry>,

    /// Theme configuration, passed through to the host framework untouched
    pub theme: ThemeConfig,

    /// Plugin identifiers for the host loader; resolution is the host's job
    pub plugins: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            content: Vec::new(),
            safelist: Vec::new(),
            theme: ThemeConfig::default(),
            plugins: Vec::new(),
        }
    }
}

/// A single safelist entry as written in the configuration file.
///
/// Either a bare class name, retained literally, or a pattern record with
/// optional variant prefixes under which matched classes are also retained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SafelistEntry {
    Literal(String),
    Pattern(PatternEntry),
}

/// The pattern form of a safelist entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PatternEntry {
    /// Regular expression source, matched against the whole class name
    pub pattern: String,

    /// Variant prefixes (e.g. `hover` or `md`) under which matched classes
    /// must also be preserved. Empty means the base class only.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<String>,
}

/// Theme section. The scanner never interprets it; arbitrary nested values
/// are carried through for the host framework.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Theme extensions, opaque to the scanner
    pub extend: IndexMap<String, Value>,

    /// Any other theme keys, also opaque
    #[serde(flatten)]
    pub rest: IndexMap<String, Value>,
}

impl ScanConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SafelistError::ConfigError {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        Self::from_yaml_str(&content)
    }

    /// Load configuration from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SafelistError::ConfigError {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        Self::from_json_str(&content)
    }

    /// Parse configuration from a YAML string
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| SafelistError::ConfigError {
            message: format!("Failed to parse YAML config: {}", e),
        })
    }

    /// Parse configuration from a JSON string
    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| SafelistError::ConfigError {
            message: format!("Failed to parse JSON config: {}", e),
        })
    }

    /// Load configuration from a file (auto-detect format)
    pub fn from_file(path: &Path) -> Result<Self> {
        match path.extension().and_then(|s| s.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            Some("json") => Self::from_json_file(path),
            _ => Err(SafelistError::ConfigError {
                message: format!(
                    "Unsupported config file format: {}. Use .yaml, .yml, or .json",
                    path.display()
                ),
            }),
        }
    }

    /// Load and validate configuration from a file in one step
    pub fn load(path: &Path) -> Result<Self> {
        let config = Self::from_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Check structural validity: every content glob must be non-empty and
    /// syntactically valid, and every safelist pattern must compile.
    pub fn validate(&self) -> Result<()> {
        for entry in &self.content {
            if entry.trim().is_empty() {
                return Err(SafelistError::InvalidGlob {
                    glob: entry.clone(),
                    message: "content entries must not be empty".to_string(),
                });
            }

            glob::Pattern::new(entry).map_err(|e| SafelistError::InvalidGlob {
                glob: entry.clone(),
                message: e.to_string(),
            })?;
        }

        for entry in &self.safelist {
            if let SafelistEntry::Pattern(p) = entry {
                ClassMatcher::new(&p.pattern)?;
            }
        }

        Ok(())
    }

    /// An empty `content` list loads fine structurally, but a scanner driven
    /// by it matches no files and the safelist can never apply.
    pub fn is_zero_coverage(&self) -> bool {
        self.content.is_empty()
    }

    /// Whether any content glob matches the given path. Pure pattern
    /// matching; the filesystem is never consulted.
    pub fn covers(&self, path: &Path) -> Result<bool> {
        for entry in &self.content {
            let pattern = glob::Pattern::new(entry).map_err(|e| SafelistError::InvalidGlob {
                glob: entry.clone(),
                message: e.to_string(),
            })?;

            if pattern.matches_path(path) {
                return Ok(true);
            }
        }

        Ok(false)
    }

    /// Serialize back to the declarative JSON form
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = ScanConfig::default();
        assert!(config.content.is_empty());
        assert!(config.safelist.is_empty());
        assert!(config.plugins.is_empty());
        assert!(config.is_zero_coverage());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_yaml_config_loading() {
        let yaml_content = r##"
content:
  - "./src/**/*.rs"
  - "./index.html"
safelist:
  - "sr-only"
  - pattern: "bg-.*-(500|600)"
    variants: ["hover"]
plugins:
  - "@tailwindcss/typography"
"##;

        let mut file = NamedTempFile::with_suffix(".yaml").unwrap();
        file.write_all(yaml_content.as_bytes()).unwrap();

        let config = ScanConfig::load(file.path()).unwrap();
        assert_eq!(config.content.len(), 2);
        assert_eq!(config.plugins, vec!["@tailwindcss/typography".to_string()]);
        assert_eq!(config.safelist.len(), 2);
        assert_eq!(
            config.safelist[0],
            SafelistEntry::Literal("sr-only".to_string())
        );
        assert_eq!(
            config.safelist[1],
            SafelistEntry::Pattern(PatternEntry {
                pattern: "bg-.*-(500|600)".to_string(),
                variants: vec!["hover".to_string()],
            })
        );
    }

    #[test]
    fn test_json_config_loading() {
        let json_content = r##"{
  "content": ["./dist/**/*.html"],
  "safelist": [{ "pattern": "text-(left|right)" }],
  "theme": {
    "extend": {
      "colors": { "brand": "#0066cc" }
    }
  }
}"##;

        let mut file = NamedTempFile::with_suffix(".json").unwrap();
        file.write_all(json_content.as_bytes()).unwrap();

        let config = ScanConfig::load(file.path()).unwrap();
        assert_eq!(config.content.len(), 1);
        assert!(config.theme.extend.contains_key("colors"));

        match &config.safelist[0] {
            SafelistEntry::Pattern(p) => {
                assert_eq!(p.pattern, "text-(left|right)");
                assert!(p.variants.is_empty());
            }
            other => panic!("Expected pattern entry, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_top_level_field_is_rejected() {
        // `safelsit` typo must fail loudly instead of being dropped
        let result = ScanConfig::from_json_str(r#"{ "safelsit": ["p-4"] }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_theme_passes_through_unknown_keys() {
        let config = ScanConfig::from_json_str(
            r##"{ "theme": { "extend": {}, "colors": { "primary": "#111" } } }"##,
        )
        .unwrap();

        assert!(config.theme.rest.contains_key("colors"));
    }

    #[test]
    fn test_loading_is_idempotent() {
        let json = r##"{
  "content": ["./src/**/*.rs", "./src/**/*.html"],
  "safelist": ["p-4", { "pattern": "m-[0-9]+", "variants": ["md", "lg"] }],
  "plugins": ["@tailwindcss/forms"]
}"##;

        let first = ScanConfig::from_json_str(json).unwrap();
        let second = ScanConfig::from_json_str(json).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_round_trip_preserves_value() {
        let json = r##"{
  "content": ["./src/**/*.rs"],
  "safelist": ["sr-only", { "pattern": "bg-.*-(100|900)", "variants": ["hover"] }],
  "theme": { "extend": { "spacing": { "72": "18rem" } } },
  "plugins": ["@tailwindcss/typography"]
}"##;

        let config = ScanConfig::from_json_str(json).unwrap();
        let serialized = config.to_json_string().unwrap();
        let reloaded = ScanConfig::from_json_str(&serialized).unwrap();
        assert_eq!(config, reloaded);
    }

    #[test]
    fn test_empty_content_entry_is_invalid() {
        let config = ScanConfig::from_json_str(r#"{ "content": [""] }"#).unwrap();
        let err = config.validate().unwrap_err();
        match err {
            SafelistError::InvalidGlob { glob, .. } => assert_eq!(glob, ""),
            other => panic!("Expected InvalidGlob, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_glob_syntax_is_invalid() {
        let config = ScanConfig::from_json_str(r#"{ "content": ["src/[unclosed"] }"#).unwrap();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, SafelistError::InvalidGlob { .. }));
    }

    #[test]
    fn test_malformed_safelist_pattern_fails_validation() {
        let config = ScanConfig::from_json_str(r#"{ "safelist": [{ "pattern": "(" }] }"#).unwrap();
        let err = config.validate().unwrap_err();
        match err {
            SafelistError::MalformedPattern { pattern, .. } => assert_eq!(pattern, "("),
            other => panic!("Expected MalformedPattern, got {:?}", other),
        }
    }

    #[test]
    fn test_covers_matches_content_globs() {
        let config = ScanConfig::from_json_str(
            r#"{ "content": ["./src/**/*.rs", "./index.html"] }"#,
        )
        .unwrap();

        assert!(config.covers(Path::new("./src/components/button.rs")).unwrap());
        assert!(config.covers(Path::new("./index.html")).unwrap());
        assert!(!config.covers(Path::new("./build/out.css")).unwrap());
    }

    #[test]
    fn test_unsupported_extension_is_rejected() {
        let result = ScanConfig::from_file(Path::new("tailwind.config.js"));
        assert!(result.is_err());
    }
}
