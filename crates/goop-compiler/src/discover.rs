//! Source file discovery.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;
use walkdir::WalkDir;

static GOOP_FILE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^[0-9A-Za-z _\-'"!@#~$%^&*(){}\[\]]+\.(?i:goo)$"#).expect("valid file pattern")
});

/// True if `file_name` names a Goop source.
pub fn is_goop_file(file_name: &str) -> bool {
    GOOP_FILE.is_match(file_name)
}

/// Output path for a source: the same name minus its final character.
pub fn output_path(source: &Path) -> Option<PathBuf> {
    let file_name = source.file_name()?.to_str()?;
    let mut chars = file_name.chars();
    chars.next_back()?;
    Some(source.with_file_name(chars.as_str()))
}

/// Finds every Goop source under `root`, in walk order.
pub fn discover(root: &Path, follow_links: bool) -> Vec<PathBuf> {
    let mut sources = Vec::new();

    for entry in WalkDir::new(root).follow_links(follow_links) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "skipping unreadable directory entry");
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }
        if entry.file_name().to_str().is_some_and(is_goop_file) {
            sources.push(entry.into_path());
        }
    }

    sources
}
