//! Name matching for entry search.

/// A case-insensitive, whitespace-normalized substring query over entry
/// names. An empty query matches everything.
#[derive(Clone, Debug)]
pub struct Query {
    needle: String,
}

impl Query {
    pub fn new(query: &str) -> Self {
        Self {
            needle: normalize(query),
        }
    }

    /// Returns true if `name` matches this query.
    pub fn matches(&self, name: &str) -> bool {
        self.needle.is_empty() || normalize(name).contains(&self.needle)
    }
}

/// Lowercases and collapses runs of whitespace to single spaces, trimming
/// the ends.
fn normalize(s: &str) -> String {
    s.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
