//! Supported locale codes.
//!
//! The registry is the closed set of locales every fragment must resolve to.
//! Three matching rules exist and they are deliberately different:
//!
//! - discovery is permissive: the file name only has to *contain* a code
//! - batch merging is strict: the file stem must *equal* a code (case-insensitive)
//! - watch mode matches on the file name *prefix* (case-insensitive)

pub const DEFAULT_LOCALES: &[&str] = &["fr"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleRegistry {
    codes: Vec<String>,
}

impl Default for LocaleRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_LOCALES.iter().map(|code| code.to_string()))
    }
}

impl LocaleRegistry {
    pub fn new(codes: impl IntoIterator<Item = String>) -> Self {
        let mut unique: Vec<String> = Vec::new();
        for code in codes {
            if !unique.contains(&code) {
                unique.push(code);
            }
        }
        Self { codes: unique }
    }

    pub fn codes(&self) -> &[String] {
        &self.codes
    }

    pub fn contains(&self, code: &str) -> bool {
        self.codes.iter().any(|c| c == code)
    }

    /// Discovery rule: does the file name mention any known locale?
    pub fn matches_file_name(&self, file_name: &str) -> bool {
        self.codes.iter().any(|code| file_name.contains(code.as_str()))
    }

    /// Batch rule: the stem (file name without `.json`) must equal a locale code.
    pub fn resolve_exact(&self, stem: &str) -> Option<&str> {
        let stem = stem.to_lowercase();
        self.codes
            .iter()
            .find(|code| code.to_lowercase() == stem)
            .map(String::as_str)
    }

    /// Watch rule: the file name must start with a locale code.
    ///
    /// The longest matching code wins, so `fr-CA.json` is `fr-CA` even when
    /// `fr` is also registered.
    pub fn resolve_prefix(&self, file_name: &str) -> Option<&str> {
        let file_name = file_name.to_lowercase();
        self.codes
            .iter()
            .filter(|code| file_name.starts_with(&code.to_lowercase()))
            .max_by_key(|code| code.len())
            .map(String::as_str)
    }
}
