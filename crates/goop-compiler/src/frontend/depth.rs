//! Brace-depth tracking.

/// Running net count of `{` minus `}` over the lines seen so far.
#[derive(Debug, Default, Clone, Copy)]
pub struct BraceDepth {
    total: i64,
}

impl BraceDepth {
    pub fn new() -> Self {
        Self::default()
    }

    /// Net brace contribution of one line.
    pub fn delta(line: &str) -> i64 {
        line.chars().fold(0, |acc, c| match c {
            '{' => acc + 1,
            '}' => acc - 1,
            _ => acc,
        })
    }

    /// Applies `line` and returns the depth before and after it.
    pub fn advance(&mut self, line: &str) -> (i64, i64) {
        let before = self.total;
        self.total += Self::delta(line);
        (before, self.total)
    }

    pub fn current(&self) -> i64 {
        self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delta() {
        assert_eq!(BraceDepth::delta("func f() {"), 1);
        assert_eq!(BraceDepth::delta("}"), -1);
        assert_eq!(BraceDepth::delta("} else {"), 0);
        assert_eq!(BraceDepth::delta("m := map[string]int{}"), 0);
        assert_eq!(BraceDepth::delta("x := 1"), 0);
    }

    #[test]
    fn test_advance_accumulates() {
        let mut depth = BraceDepth::new();
        assert_eq!(depth.advance("class A {"), (0, 1));
        assert_eq!(depth.advance("  func F() {"), (1, 2));
        assert_eq!(depth.advance("    if x {"), (2, 3));
        assert_eq!(depth.advance("    }"), (3, 2));
        assert_eq!(depth.advance("  }"), (2, 1));
        assert_eq!(depth.advance("}"), (1, 0));
        assert_eq!(depth.current(), 0);
    }

    #[test]
    fn test_unbalanced_input_goes_negative() {
        let mut depth = BraceDepth::new();
        depth.advance("}");
        assert_eq!(depth.current(), -1);
    }
}
