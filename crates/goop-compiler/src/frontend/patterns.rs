//! Compiled line patterns.

use regex::Regex;

use super::depth::BraceDepth;

/// Identifier charset for class, field and method names.
pub const VALID_NAME: &str = "[0-9a-zA-Z_]+";

/// Statement keywords that can lead a brace-balanced line shaped like a field.
const STATEMENT_KEYWORDS: &[&str] = &[
    "break", "case", "const", "continue", "default", "defer", "else", "fallthrough", "for",
    "func", "go", "goto", "if", "import", "package", "range", "return", "select", "switch",
    "type", "var",
];

/// A field declaration line, possibly declaring several names.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDecl {
    pub names: Vec<String>,
    pub typ: Option<String>,
    pub tag: Option<String>,
}

/// A method header line `func Name(params) ret {`.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodHeader {
    pub name: String,
    pub params: String,
    pub returns: String,
}

/// Line classification patterns, compiled once per run.
#[derive(Debug, Clone)]
pub struct Patterns {
    class_start: Regex,
    field_decl: Regex,
    method_decl: Regex,
}

pub(crate) fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in pattern is valid")
}

impl Patterns {
    pub fn new() -> Self {
        Self {
            class_start: compile(&format!(r"^\s*class\s+({VALID_NAME})\s*\{{\s*$")),
            field_decl: compile(&format!(
                r"^\s*(?:var\s+)?({VALID_NAME}(?:\s*,\s*{VALID_NAME})*)(?:\s+([^`;=:]*?))?\s*(`[^`]*`)?\s*;?\s*$"
            )),
            method_decl: compile(&format!(r"^\s*func\s+({VALID_NAME})\s*(\(.*)\{{\s*$")),
        }
    }

    /// Class name if `line` is a class header.
    pub fn class_start<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.class_start
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// Parses a field declaration. The line must not open or close a block,
    /// so `chan struct{}` and `interface{}` types qualify.
    pub fn field_decl(&self, line: &str) -> Option<FieldDecl> {
        if line.trim().is_empty() || BraceDepth::delta(line) != 0 {
            return None;
        }
        let caps = self.field_decl.captures(line)?;
        let names: Vec<String> = caps[1]
            .split(',')
            .map(|name| name.trim().to_string())
            .collect();
        if names.iter().any(|name| STATEMENT_KEYWORDS.contains(&name.as_str())) {
            return None;
        }
        let typ = caps
            .get(2)
            .map(|m| m.as_str().trim().to_string())
            .filter(|t| !t.is_empty());
        let tag = caps.get(3).map(|m| m.as_str().to_string());
        Some(FieldDecl { names, typ, tag })
    }

    /// Parses a method header ending in an opening brace.
    pub fn method_decl(&self, line: &str) -> Option<MethodHeader> {
        let caps = self.method_decl.captures(line)?;
        let (params, returns) = split_parameters(caps.get(2)?.as_str())?;
        Some(MethodHeader {
            name: caps[1].to_string(),
            params: params.to_string(),
            returns: returns.to_string(),
        })
    }
}

impl Default for Patterns {
    fn default() -> Self {
        Self::new()
    }
}

/// Splits `(params) ret ` at the parenthesis matching the first one.
fn split_parameters(text: &str) -> Option<(&str, &str)> {
    let inner = text.strip_prefix('(')?;
    let mut depth = 1usize;
    for (idx, c) in inner.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some((&inner[..idx], &inner[idx + 1..]));
                }
            }
            _ => {}
        }
    }
    None
}

/// Argument names for forwarding a parameter list: types dropped, variadics spread.
///
/// `"x, y int, opts ...string"` becomes `"x, y, opts..."`.
pub fn parameter_names(params: &str) -> String {
    let mut names = Vec::new();
    let mut depth = 0i32;
    let mut start = 0;
    let mut segments = Vec::new();
    for (idx, c) in params.char_indices() {
        match c {
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => depth -= 1,
            ',' if depth == 0 => {
                segments.push(&params[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }
    segments.push(&params[start..]);

    for segment in segments {
        let mut parts = segment.split_whitespace();
        let Some(name) = parts.next() else {
            continue;
        };
        let variadic = parts.next().is_some_and(|typ| typ.starts_with("..."));
        if variadic {
            names.push(format!("{}...", name));
        } else {
            names.push(name.to_string());
        }
    }
    names.join(", ")
}
