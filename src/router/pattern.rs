use regex::{Regex, RegexBuilder};

use crate::{Error, Result};

/// Expression a bare `{name}` placeholder expands to.
const SEGMENT: &str = "[^/]+";

/// Compile a `"METHOD /path/{capture}"` pattern into an anchored,
/// case-insensitive regex that tolerates one trailing slash.
///
/// `{name}` captures a single path segment and `{name:expr}` captures `expr`.
/// Everything else is regex syntax and is used as written.
pub fn compile(pattern: &str) -> Result<Regex> {
    RegexBuilder::new(&format!("^(?:{})/?$", expand(pattern)))
        .case_insensitive(true)
        .build()
        .map_err(|e| Error::invalid_pattern(pattern, e))
}

/// Match `subject` against `pattern`, returning the raw captures after the full match.
pub fn captures(pattern: &str, subject: &str) -> Result<Option<Vec<String>>> {
    let regex = compile(pattern)?;
    Ok(regex.captures(subject).map(|caps| {
        caps.iter()
            .skip(1)
            .map(|group| group.map(|m| m.as_str()).unwrap_or_default().to_string())
            .collect()
    }))
}

fn expand(pattern: &str) -> String {
    let mut expanded = String::with_capacity(pattern.len());
    let mut rest = pattern;
    while let Some(start) = rest.find('{') {
        let (literal, tail) = rest.split_at(start);
        expanded.push_str(literal);
        let escaped = expanded.chars().rev().take_while(|c| *c == '\\').count() % 2 == 1;
        match placeholder(tail).filter(|_| !escaped) {
            Some((len, expr)) => {
                expanded.push('(');
                expanded.push_str(expr.unwrap_or(SEGMENT));
                expanded.push(')');
                rest = &tail[len..];
            }
            None => {
                expanded.push('{');
                rest = &tail[1..];
            }
        }
    }
    expanded.push_str(rest);
    expanded
}

/// Length and optional custom expression of the placeholder `tail` starts with.
fn placeholder(tail: &str) -> Option<(usize, Option<&str>)> {
    let mut depth = 0usize;
    let end = tail.char_indices().find_map(|(i, c)| {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
        None
    })?;
    let inner = &tail[1..end];
    let (name, expr) = match inner.split_once(':') {
        Some((name, expr)) => (name, Some(expr)),
        None => (inner, None),
    };
    let mut chars = name.chars();
    let valid = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    valid.then_some((end + 1, expr))
}
