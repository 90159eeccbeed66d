//! # Goop Compiler
//!
//! This crate expands Goop, Go with a small class syntax, into plain Go.
//! Every `.goo` file found under a root directory is transpiled into a
//! `.go` file beside it.
//!
//! ## Architecture
//!
//! ```text
//! Source (.goo)
//!        │
//!        ▼
//! ┌──────────────┐
//! │   Frontend   │  Comment stripping, brace depth,
//! │ (lines)      │  class/field/method patterns
//! └──────┬───────┘
//!        │
//!        ▼
//! ┌──────────────┐
//! │      IR      │  One ClassIR per class region
//! └──────┬───────┘
//!        │
//!        ▼
//! ┌──────────────┐
//! │   Codegen    │  struct, Interface__X, New__X,
//! │  (IR → Go)   │  accessors, new/marker rewriting
//! └──────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use goop_compiler::{Compiler, CompilerConfig};
//!
//! let config = CompilerConfig {
//!     root_dir: "src".into(),
//!     ..CompilerConfig::default()
//! };
//!
//! let compiler = Compiler::new(config)?;
//! let result = compiler.compile()?;
//! println!("{} files, {} failed", result.files.len(), result.failures.len());
//! ```

pub mod config;
pub mod discover;
pub mod frontend;
pub mod ir;
pub mod codegen;
pub mod diagnostic;
pub mod transpile;

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, warn};

pub use config::{CompilerConfig, TranspileOptions, DEFAULT_MARKER};
pub use diagnostic::CompilerError;
pub use transpile::{ClassSummary, Transpiled, Transpiler};

/// The main compiler struct that drives discovery, transformation and output.
pub struct Compiler {
    config: CompilerConfig,
    transpiler: Transpiler,
}

impl Compiler {
    /// Creates a new compiler, compiling its patterns once.
    pub fn new(config: CompilerConfig) -> Result<Self, CompilerError> {
        let transpiler = Transpiler::new(config.transpile_options())?;
        Ok(Self { config, transpiler })
    }

    pub fn config(&self) -> &CompilerConfig {
        &self.config
    }

    /// Transpiles every Goop file under the root directory.
    ///
    /// A failing file is recorded in the result and the walk continues.
    pub fn compile(&self) -> Result<CompileResult, CompilerError> {
        let root = &self.config.root_dir;
        if !root.exists() {
            return Err(CompilerError::RootNotFound { path: root.clone() });
        }

        let mut result = CompileResult::default();

        for path in discover::discover(root, self.config.follow_links) {
            info!(path = %path.display(), "Matched");
            match self.compile_file(&path) {
                Ok(file) => result.files.push(file),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "file failed");
                    result.failures.push(FileFailure::from_error(&path, &e));
                }
            }
        }

        Ok(result)
    }

    /// Transpiles one file and writes its output unless this is a dry run.
    pub fn compile_file(&self, path: &Path) -> Result<CompiledFile, CompilerError> {
        let output = discover::output_path(path)
            .ok_or_else(|| CompilerError::NotGoopFile { path: path.to_path_buf() })?;

        let source = std::fs::read_to_string(path)
            .map_err(|e| CompilerError::read(path, e.to_string()))?;

        let transpiled = self.transpiler.transpile(&source);

        if self.config.write_output {
            std::fs::write(&output, &transpiled.code)
                .map_err(|e| CompilerError::write(&output, e.to_string()))?;
        }

        Ok(CompiledFile {
            source: path.to_path_buf(),
            output,
            classes: transpiled.classes,
            written: self.config.write_output,
        })
    }

    /// Transpiles one named file without writing, returning the generated code.
    pub fn transpile_file(&self, path: &Path) -> Result<Transpiled, CompilerError> {
        let is_goop = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(discover::is_goop_file);
        if !is_goop {
            return Err(CompilerError::NotGoopFile { path: path.to_path_buf() });
        }

        let source = std::fs::read_to_string(path)
            .map_err(|e| CompilerError::read(path, e.to_string()))?;
        Ok(self.transpiler.transpile(&source))
    }

    /// Transpiles source text directly.
    pub fn transpile_source(&self, source: &str) -> Transpiled {
        self.transpiler.transpile(source)
    }
}

/// One file transpiled successfully.
#[derive(Debug, Clone, Serialize)]
pub struct CompiledFile {
    pub source: PathBuf,
    pub output: PathBuf,
    pub classes: Vec<ClassSummary>,
    /// False on dry runs.
    pub written: bool,
}

/// Stage at which a file failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    Read,
    Write,
    Other,
}

/// One file that could not be processed.
#[derive(Debug, Clone, Serialize)]
pub struct FileFailure {
    pub path: PathBuf,
    pub kind: FailureKind,
    /// Human-readable message naming the path.
    pub message: String,
    /// Underlying OS error, when there is one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
}

impl FileFailure {
    fn from_error(path: &Path, error: &CompilerError) -> Self {
        let (kind, cause) = match error {
            CompilerError::ReadFailed { message, .. } => (FailureKind::Read, Some(message.clone())),
            CompilerError::WriteFailed { message, .. } => (FailureKind::Write, Some(message.clone())),
            _ => (FailureKind::Other, None),
        };
        Self {
            path: error.path().cloned().unwrap_or_else(|| path.to_path_buf()),
            kind,
            message: error.to_string(),
            cause,
        }
    }
}

/// Result of a directory-wide compilation.
#[derive(Debug, Default, Serialize)]
pub struct CompileResult {
    pub files: Vec<CompiledFile>,
    pub failures: Vec<FileFailure>,
}

impl CompileResult {
    /// Number of classes expanded across all files.
    pub fn classes(&self) -> usize {
        self.files.iter().map(|f| f.classes.len()).sum()
    }

    /// Files matched, whether they succeeded or not.
    pub fn matched(&self) -> usize {
        self.files.len() + self.failures.len()
    }

    /// Pretty JSON report.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
