//! Compiler configuration.

use std::path::PathBuf;

use crate::diagnostic::CompilerError;

/// Default generic/interface marker.
pub const DEFAULT_MARKER: char = '@';

/// Go operators, delimiters and quotes. A marker drawn from these would
/// rewrite ordinary Go, including the generated `*Class` pointers.
const GO_PUNCTUATION: &str = "+-*/%&|^<>=!~:.,;[]{}()\"'`\\";

/// Configuration for the Goop compiler.
#[derive(Debug, Clone)]
pub struct CompilerConfig {
    /// Directory scanned recursively for `.goo` files.
    pub root_dir: PathBuf,

    /// Marker token for `any` and named interface references.
    pub marker: char,

    /// Write `.go` files next to their sources. Off for dry runs.
    pub write_output: bool,

    /// Follow symbolic links during the directory walk.
    pub follow_links: bool,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            root_dir: PathBuf::from("."),
            marker: DEFAULT_MARKER,
            write_output: true,
            follow_links: true,
        }
    }
}

impl CompilerConfig {
    /// Engine options derived from this configuration.
    pub fn transpile_options(&self) -> TranspileOptions {
        TranspileOptions { marker: self.marker }
    }
}

/// Options for the per-file transformation engine.
#[derive(Debug, Clone, Copy)]
pub struct TranspileOptions {
    pub marker: char,
}

impl Default for TranspileOptions {
    fn default() -> Self {
        Self { marker: DEFAULT_MARKER }
    }
}

impl TranspileOptions {
    /// Rejects markers that could appear in identifiers or Go syntax.
    pub fn validate(&self) -> Result<(), CompilerError> {
        let m = self.marker;
        if m.is_alphanumeric()
            || m == '_'
            || m.is_whitespace()
            || m.is_control()
            || GO_PUNCTUATION.contains(m)
        {
            return Err(CompilerError::InvalidMarker { marker: m });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_marker_is_valid() {
        assert!(TranspileOptions::default().validate().is_ok());
        for marker in ['$', '#', '?'] {
            assert!(TranspileOptions { marker }.validate().is_ok());
        }
    }

    #[test]
    fn test_rejects_identifier_and_brace_markers() {
        for marker in ['a', '7', '_', ' ', '\t', '{', ')'] {
            assert!(
                TranspileOptions { marker }.validate().is_err(),
                "marker {:?} should be rejected",
                marker
            );
        }
    }

    #[test]
    fn test_rejects_go_operator_markers() {
        for marker in ['*', '&', '.', '[', '=', ',', '"', '/', '~', '`', '<', '!'] {
            assert!(
                matches!(
                    TranspileOptions { marker }.validate(),
                    Err(CompilerError::InvalidMarker { .. })
                ),
                "marker {:?} should be rejected",
                marker
            );
        }
    }
}
