//! Literal-prefix line matching.
//!
//! Statement recognition is a fixed vocabulary of literal prefixes tried
//! in a priority order chosen by each builder. A [`Pattern`] answers one
//! question: does this line start with my prefix, and if so, what is the
//! remainder? `None` means "try the next rule" and is never an error; a
//! line no rule claims is dropped by the caller.

/// One literal-prefix rule.
///
/// Non-anchored patterns tolerate leading whitespace before the prefix,
/// so indented statements still classify. Anchored patterns require the
/// prefix at column zero, which distinguishes top-level statements from
/// indented sub-statements with the same spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    prefix: &'static str,
    anchored: bool,
}

impl Pattern {
    /// Prefix rule that skips leading whitespace before matching.
    pub const fn new(prefix: &'static str) -> Self {
        Self {
            prefix,
            anchored: false,
        }
    }

    /// Prefix rule that only matches at column zero.
    pub const fn anchored(prefix: &'static str) -> Self {
        Self {
            prefix,
            anchored: true,
        }
    }

    /// Try this rule against a line.
    ///
    /// On a match, returns the remainder after the prefix with trailing
    /// whitespace stripped. Internal whitespace is preserved.
    pub fn strip<'a>(&self, line: &'a str) -> Option<&'a str> {
        let haystack = if self.anchored {
            if line.starts_with(char::is_whitespace) {
                return None;
            }
            line
        } else {
            line.trim_start()
        };
        haystack.strip_prefix(self.prefix).map(str::trim_end)
    }
}
