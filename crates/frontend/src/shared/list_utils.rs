/// Trait for record types that support name-based list filtering
pub trait Searchable {
    /// Whether the record matches the search text
    fn matches_filter(&self, filter: &str) -> bool;
}
