//! Dot-separated key paths addressing locations inside a config tree

/// A dot-delimited address into a config tree, e.g. `"app.name"`.
///
/// A path is split on every `.` with no escaping, so individual keys cannot
/// contain a literal dot. An empty path addresses the root key `""`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPath<'a> {
    raw: &'a str,
}

impl<'a> KeyPath<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self { raw }
    }

    /// Split into the traversal segments and the leaf key, root-to-leaf.
    ///
    /// `split` on an empty string yields one empty segment, so every path
    /// has at least one segment and a leaf always exists.
    pub fn split_leaf(&self) -> (Vec<&'a str>, &'a str) {
        let mut segments: Vec<&'a str> = self.raw.split('.').collect();
        let leaf = segments.pop().unwrap_or("");
        (segments, leaf)
    }
}
