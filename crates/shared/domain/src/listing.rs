/// A record that free-text search can look into.
pub trait Searchable {
    /// Display fields consulted by search, in display order.
    fn search_fields(&self) -> impl Iterator<Item = &str>;
}

/// A record that belongs to exactly one value of a closed category set.
pub trait Categorized {
    type Category: Copy + Eq + std::fmt::Debug;

    fn category(&self) -> Self::Category;
}
