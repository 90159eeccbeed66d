//! Comment stripping.
//!
//! Markers inside string literals are not recognized as such; a `//` in a
//! string still cuts the line.

/// Strips `//` and `/* */` comments, carrying block state across lines.
#[derive(Debug, Default)]
pub struct CommentNormalizer {
    in_block: bool,
}

impl CommentNormalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while an opened block comment has not been terminated.
    pub fn in_block(&self) -> bool {
        self.in_block
    }

    /// Returns `line` with its comment text removed.
    pub fn strip_line(&mut self, line: &str) -> String {
        let line = match line.find("//") {
            Some(idx) => &line[..idx],
            None => line,
        };

        let mut out = String::with_capacity(line.len());
        let mut rest = line;
        loop {
            if self.in_block {
                match rest.find("*/") {
                    Some(idx) => {
                        rest = &rest[idx + 2..];
                        self.in_block = false;
                    }
                    None => break,
                }
            } else {
                match rest.find("/*") {
                    Some(idx) => {
                        out.push_str(&rest[..idx]);
                        rest = &rest[idx + 2..];
                        self.in_block = true;
                    }
                    None => {
                        out.push_str(rest);
                        break;
                    }
                }
            }
        }
        out
    }

    /// Strips every line of a file in order.
    pub fn strip_all<'a, I>(&mut self, lines: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        lines.into_iter().map(|line| self.strip_line(line)).collect()
    }
}
