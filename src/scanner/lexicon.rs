//! Synonym table and skill classification sets used by the scanning engine.
//!
//! All tables are fixed at construction and never mutated afterwards, so a
//! [`Lexicon`] can be shared freely across threads behind `&self`.

use std::collections::HashMap;

/// Canonical skill terms carrying the high scoring weight.
pub const CORE_TECH_STACK: &[&str] = &[
    "react",
    "node",
    "javascript",
    "python",
    "java",
    "sql",
    "aws",
    "docker",
    "kubernetes",
    "typescript",
];

/// Interpersonal and process skills, baseline scoring weight.
///
/// Spanish and English surface forms are both listed because CVs in the
/// target market freely mix the two languages.
pub const SOFT_SKILLS: &[&str] = &[
    "liderazgo",
    "leadership",
    "comunicacion",
    "communication",
    "teamwork",
    "agile",
    "scrum",
];

/// Immutable synonym dictionary mapping a canonical term to its known
/// surface variants.
pub struct Lexicon {
    synonyms: HashMap<&'static str, &'static [&'static str]>,
}

impl Lexicon {
    pub fn new() -> Self {
        let mut synonyms: HashMap<&'static str, &'static [&'static str]> = HashMap::new();
        synonyms.insert("javascript", &["js", "es6", "ecmascript"]);
        synonyms.insert("react", &["reactjs", "react.js"]);
        synonyms.insert("node", &["nodejs", "node.js"]);
        synonyms.insert("aws", &["amazon web services", "cloud"]);
        synonyms.insert("english", &["ingles", "inglés", "idioma"]);
        synonyms.insert("python", &["py"]);
        synonyms.insert("sql", &["mysql", "postgresql", "postgres"]);

        Self { synonyms }
    }

    /// Synonym-aware containment check: true when `text` contains `term` as
    /// a literal substring, or contains any variant registered under `term`.
    ///
    /// Deliberately substring-based rather than token-bounded ("java" is
    /// found inside "javascript"); downstream scoring depends on this exact
    /// behavior.
    pub fn has_term(&self, text: &str, term: &str) -> bool {
        if text.contains(term) {
            return true;
        }
        self.synonyms
            .get(term)
            .map_or(false, |variants| variants.iter().any(|v| text.contains(v)))
    }

    /// True if `token` matches any core tech-stack entry (synonym-aware).
    pub fn is_core_tech(&self, token: &str) -> bool {
        CORE_TECH_STACK.iter().any(|core| self.has_term(token, core))
    }

    /// True if `token` matches any soft-skill entry (synonym-aware).
    pub fn is_soft_skill(&self, token: &str) -> bool {
        SOFT_SKILLS.iter().any(|soft| self.has_term(token, soft))
    }

    /// Number of registered synonym groups.
    pub fn synonym_group_count(&self) -> usize {
        self.synonyms.len()
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}
