//! Instantiation and marker rewriting.
//!
//! Runs on every emitted line, inside or outside class regions.
//! String literals are not recognized, so a marker or `new Name(` inside
//! quotes is rewritten too.

use regex::{NoExpand, Regex};

use crate::frontend::patterns::{compile, VALID_NAME};
use super::{ALLOCATOR_PREFIX, INTERFACE_PREFIX};

/// Go's universal type, substituted for a bare marker.
pub const UNIVERSAL_TYPE: &str = "interface{}";

/// Rewrites `new Name(args)` and marker tokens to plain Go.
#[derive(Debug, Clone)]
pub struct ReferenceRewriter {
    new_object: Regex,
    named_marker: Regex,
    bare_marker: Regex,
}

impl ReferenceRewriter {
    pub fn new(marker: char) -> Self {
        let marker = regex::escape(&marker.to_string());
        Self {
            new_object: compile(&format!(r"\bnew\s+({VALID_NAME})\s*\(")),
            named_marker: compile(&format!("{marker}({VALID_NAME})")),
            bare_marker: compile(&marker),
        }
    }

    /// Applies every rewrite to one line.
    pub fn rewrite(&self, line: &str) -> String {
        let line = self.rewrite_new(line);
        self.rewrite_markers(&line)
    }

    /// `new Name(` becomes `New__Name(`, until no instantiation is left.
    pub fn rewrite_new(&self, line: &str) -> String {
        let replacement = format!("{}${{1}}(", ALLOCATOR_PREFIX);
        let mut out = line.to_string();
        while self.new_object.is_match(&out) {
            out = self.new_object.replace_all(&out, replacement.as_str()).into_owned();
        }
        out
    }

    /// `<marker>Name` becomes `Interface__Name`; a bare marker becomes `interface{}`.
    pub fn rewrite_markers(&self, line: &str) -> String {
        let replacement = format!("{}${{1}}", INTERFACE_PREFIX);
        let named = self.named_marker.replace_all(line, replacement.as_str());
        self.bare_marker
            .replace_all(&named, NoExpand(UNIVERSAL_TYPE))
            .into_owned()
    }
}
