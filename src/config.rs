//! Highlight rule-set persistence.
//!
//! The config file is line-oriented: a line containing exactly `[keywords]`
//! starts the keyword list, `[comments]` starts the comment-marker list, and
//! every following line is one verbatim entry (whitespace significant) until
//! the next bracketed line. Unrecognized bracketed lines end the current
//! section and are otherwise ignored; blank lines are skipped. The same
//! format is written back on quit so the rule set round-trips through the
//! file each session.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::highlight::RuleSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    None,
    Keywords,
    Comments,
}

/// Load a rule set from `path`.
///
/// # Errors
///
/// Returns an error when the file cannot be read. Callers treat this as
/// recoverable: highlighting stays in its prior state.
pub fn load_rule_set(path: &Path) -> Result<RuleSet> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    Ok(parse_rule_set(&content))
}

/// Parse rule-set sections from config text.
pub fn parse_rule_set(content: &str) -> RuleSet {
    let mut rules = RuleSet::default();
    let mut section = Section::None;
    for line in content.lines() {
        match line {
            "[keywords]" => section = Section::Keywords,
            "[comments]" => section = Section::Comments,
            other if other.starts_with('[') => section = Section::None,
            "" => {}
            entry => match section {
                Section::Keywords => rules.keywords.push(entry.to_string()),
                Section::Comments => rules.comment_markers.push(entry.to_string()),
                Section::None => {}
            },
        }
    }
    rules
}

/// Write a rule set back to `path` in the section format.
///
/// # Errors
///
/// Returns an error when the destination cannot be written.
pub fn save_rule_set(path: &Path, rules: &RuleSet) -> Result<()> {
    let mut out = String::from("[keywords]\n");
    for keyword in &rules.keywords {
        out.push_str(keyword);
        out.push('\n');
    }
    out.push_str("[comments]\n");
    for marker in &rules.comment_markers {
        out.push_str(marker);
        out.push('\n');
    }
    fs::write(path, out).with_context(|| format!("Failed to write config {}", path.display()))
}
