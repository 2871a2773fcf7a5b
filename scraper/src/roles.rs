//! Role names offered to users and their URL keyword form.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

pub const KNOWN_ROLES: &[&str] = &[
    "Full Stack Engineer",
    "Data Scientist",
    "Designer",
    "Software Architect",
    "DevOps Engineer",
    "Software Engineer",
    "Engineering Manager",
    "Artificial Intelligence Engineer",
    "Machine Learning Engineer",
    "Product Manager",
    "Backend Engineer",
    "Mobile Engineer",
    "Product Designer",
    "Frontend Engineer",
];

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Role {
    pub name: String,
    pub keyword: String,
}

/// Turns a role name into the keyword used in listing URLs:
/// "Full Stack Engineer" becomes "full-stack-engineer".
pub fn normalize_keyword(raw: &str) -> String {
    WHITESPACE.replace_all(raw.trim(), "-").to_lowercase()
}

pub fn known_roles() -> Vec<Role> {
    KNOWN_ROLES
        .iter()
        .map(|name| Role {
            name: name.to_string(),
            keyword: normalize_keyword(name),
        })
        .collect()
}
