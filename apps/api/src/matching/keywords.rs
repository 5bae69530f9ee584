//! Skill vocabulary and text helpers used to find job-side requirements.

use aho_corasick::{AhoCorasick, MatchKind};
use once_cell::sync::Lazy;
use regex::Regex;

/// Recognised skill keywords, lowercase. Every entry must match on token boundaries;
/// where entries overlap the longest one wins.
pub const SKILL_VOCABULARY: &[&str] = &[
    // languages
    "javascript", "typescript", "python", "java", "kotlin", "swift", "go", "golang", "rust",
    "ruby", "php", "scala", "c++", "c#", "sql", "html", "css", "graphql",
    // frameworks
    "react", "angular", "vue", "svelte", "next.js", "node.js", "express", "django", "flask",
    "fastapi", "spring", "spring boot", "rails", "ruby on rails", "laravel", ".net",
    "tensorflow", "pytorch", "pandas",
    // datastores
    "postgresql", "postgres", "mysql", "mongodb", "redis", "elasticsearch", "dynamodb",
    "kafka",
    // cloud and delivery
    "aws", "azure", "gcp", "docker", "kubernetes", "terraform", "ansible", "jenkins",
    "ci/cd", "linux", "git",
    // practices
    "machine learning", "data analysis", "microservices", "rest api", "agile",
];

/// Skill-shaped tokens: letters, digits, `+`, `#` and `.`, so `c++`, `c#` and `node.js` survive.
static WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\p{L}\p{N}#+.]+").expect("token pattern is valid"));

static VOCABULARY_MATCHER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .match_kind(MatchKind::LeftmostLongest)
        .build(SKILL_VOCABULARY)
        .expect("skill vocabulary builds")
});

/// Splits text into lowercase skill-shaped tokens. Trailing dots from sentence ends are dropped.
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    WORD_RE
        .find_iter(&lower)
        .map(|m| m.as_str().trim_end_matches('.'))
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Returns vocabulary skills mentioned in `text`, in order of first mention, deduplicated.
///
/// A match only counts when it sits on token boundaries, so `go` is not found in `good`
/// and `spring boot` is reported without a separate `spring`.
pub fn mentioned_skills(text: &str) -> Vec<&'static str> {
    let mut found: Vec<&'static str> = Vec::new();
    for m in VOCABULARY_MATCHER.find_iter(text) {
        if !is_token_boundary(text, m.start(), m.end()) {
            continue;
        }
        let term = SKILL_VOCABULARY[m.pattern().as_usize()];
        if !found.contains(&term) {
            found.push(term);
        }
    }
    found
}

fn is_token_char(c: char) -> bool {
    c.is_alphanumeric() || c == '+' || c == '#' || c == '.'
}

/// True when `text[start..end]` is not glued to a neighbouring token.
/// A dot right after the match is a sentence end unless more word characters follow it.
fn is_token_boundary(text: &str, start: usize, end: usize) -> bool {
    let before_ok = text[..start]
        .chars()
        .next_back()
        .map_or(true, |c| !is_token_char(c));

    let mut after = text[end..].chars();
    let after_ok = match after.next() {
        None => true,
        Some('.') => after.next().map_or(true, |c| !c.is_alphanumeric()),
        Some(c) => !is_token_char(c),
    };

    before_ok && after_ok
}

/// True when `word` appears in `text` as a whole token. Both sides compare lowercase.
pub fn contains_word(text: &str, word: &str) -> bool {
    let word = word.to_lowercase();
    tokenize(text).iter().any(|t| *t == word)
}
