//! Compiler error types.
#![allow(unused_assignments)]

use std::path::PathBuf;
use miette::Diagnostic;
use thiserror::Error;

/// Errors that can occur during compilation.
#[allow(unused_assignments)]
#[derive(Error, Diagnostic, Debug)]
pub enum CompilerError {
    // =========================================================================
    // IO Errors
    // =========================================================================
    #[error("Could not open Goop file: {}", path.display())]
    #[diagnostic(code(goop::io::read_error))]
    ReadFailed {
        path: PathBuf,
        message: String,
    },

    #[error("Could not write Go file: {}", path.display())]
    #[diagnostic(code(goop::io::write_error))]
    WriteFailed {
        path: PathBuf,
        message: String,
    },

    #[error("Source directory not found: {}", path.display())]
    #[diagnostic(
        code(goop::io::root_not_found),
        help("Pass the directory that contains your .goo files")
    )]
    RootNotFound {
        path: PathBuf,
    },

    // =========================================================================
    // Input Errors
    // =========================================================================
    #[error("Not a Goop source file: {}", path.display())]
    #[diagnostic(
        code(goop::input::not_goop_file),
        help("Goop sources end in .goo")
    )]
    NotGoopFile {
        path: PathBuf,
    },

    // =========================================================================
    // Configuration Errors
    // =========================================================================
    #[error("Invalid marker '{marker}'")]
    #[diagnostic(
        code(goop::config::invalid_marker),
        help("Pick a symbol Go does not use, such as '@', '$', '#' or '?'")
    )]
    InvalidMarker {
        marker: char,
    },
}

impl CompilerError {
    /// Creates a read error.
    pub fn read(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ReadFailed {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a write error.
    pub fn write(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::WriteFailed {
            path: path.into(),
            message: message.into(),
        }
    }

    /// The path this error is about.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::ReadFailed { path, .. }
            | Self::WriteFailed { path, .. }
            | Self::RootNotFound { path }
            | Self::NotGoopFile { path } => Some(path),
            Self::InvalidMarker { .. } => None,
        }
    }
}
