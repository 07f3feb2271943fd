use serde::Deserialize;

/// One page of child records plus the total number the server holds.
///
/// Null entries are kept in `nodes` so the skipped count is computed against
/// what the server actually returned.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Window<T> {
    pub total_count: i64,
    #[serde(default = "Vec::new")]
    pub nodes: Vec<Option<T>>,
}

impl<T> Window<T> {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of records present server-side but missing from this page.
    pub fn skipped(&self) -> i64 {
        let fetched = i64::try_from(self.nodes.len()).unwrap_or(i64::MAX);
        self.total_count.saturating_sub(fetched).max(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.nodes.iter().flatten()
    }
}
