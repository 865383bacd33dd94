//! Search-plus-category filtering over static catalogs.
//!
//! A page declares its filter buttons as a `&'static [FilterDef<C>]` and keeps a
//! [`ListQuery`] in its state. Results preserve catalog order.

use heritage_domain::listing::{Categorized, Searchable};
use std::fmt::Debug;
use tracing::debug;

/// Id of the catch-all filter button.
pub const ALL_FILTER_ID: &str = "all";

/// One filter button: `category == None` accepts every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterDef<C> {
    pub id: &'static str,
    pub label: &'static str,
    pub category: Option<C>,
}

impl<C: Copy + Eq + Debug> FilterDef<C> {
    #[must_use]
    pub const fn all(label: &'static str) -> Self {
        Self { id: ALL_FILTER_ID, label, category: None }
    }

    #[must_use]
    pub const fn only(id: &'static str, label: &'static str, category: C) -> Self {
        Self { id, label, category: Some(category) }
    }

    /// Badge count: records this button would show with an empty search.
    pub fn count<T>(&self, items: &[T]) -> usize
    where
        T: Categorized<Category = C>,
    {
        match self.category {
            None => items.len(),
            Some(category) => items.iter().filter(|item| item.category() == category).count(),
        }
    }
}

/// Resolved category predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter<C> {
    #[default]
    All,
    Only(C),
    /// The id named no definition. Matches nothing.
    Unmatched,
}

impl<C: Copy + Eq + Debug> Filter<C> {
    #[must_use]
    pub fn from_id(id: &str, defs: &[FilterDef<C>]) -> Self {
        defs.iter().find(|def| def.id == id).map_or(Self::Unmatched, |def| {
            def.category.map_or(Self::All, Self::Only)
        })
    }

    #[must_use]
    pub fn accepts(&self, category: C) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == category,
            Self::Unmatched => false,
        }
    }
}

/// Free-text search and an active filter button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery<C> {
    search: String,
    needle: String,
    active: &'static str,
    filter: Filter<C>,
}

impl<C> Default for ListQuery<C> {
    fn default() -> Self {
        Self {
            search: String::new(),
            needle: String::new(),
            active: ALL_FILTER_ID,
            filter: Filter::All,
        }
    }
}

impl<C: Copy + Eq + Debug> ListQuery<C> {
    /// Search text as typed.
    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Id of the selected filter button.
    #[must_use]
    pub const fn active(&self) -> &'static str {
        self.active
    }

    #[must_use]
    pub const fn filter(&self) -> Filter<C> {
        self.filter
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.needle = self.search.to_lowercase();
    }

    pub fn select_filter(&mut self, id: &'static str, defs: &[FilterDef<C>]) {
        self.active = id;
        self.filter = Filter::from_id(id, defs);
        debug!(filter = id, resolved = ?self.filter, "Filter selected");
    }

    /// Case-insensitive substring match on any search field, and a category match.
    pub fn matches<T>(&self, item: &T) -> bool
    where
        T: Searchable + Categorized<Category = C>,
    {
        self.filter.accepts(item.category())
            && (self.needle.is_empty()
                || item.search_fields().any(|field| field.to_lowercase().contains(&self.needle)))
    }

    pub fn apply<'a, T>(&self, items: &'a [T]) -> Vec<&'a T>
    where
        T: Searchable + Categorized<Category = C>,
    {
        items.iter().filter(|item| self.matches(*item)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Shape {
        Round,
        Square,
    }

    struct Tile(&'static str, Shape);

    impl Searchable for Tile {
        fn search_fields(&self) -> impl Iterator<Item = &str> {
            std::iter::once(self.0)
        }
    }

    impl Categorized for Tile {
        type Category = Shape;

        fn category(&self) -> Shape {
            self.1
        }
    }

    const DEFS: &[FilterDef<Shape>] =
        &[FilterDef::all("All"), FilterDef::only("round", "Round", Shape::Round)];

    const TILES: &[Tile] = &[
        Tile("Golden Wheel", Shape::Round),
        Tile("Stone Slab", Shape::Square),
        Tile("gold leaf", Shape::Square),
    ];

    #[test]
    fn resolves_filter_ids() {
        assert_eq!(Filter::from_id("all", DEFS), Filter::All);
        assert_eq!(Filter::from_id("round", DEFS), Filter::Only(Shape::Round));
        assert_eq!(Filter::from_id("square", DEFS), Filter::Unmatched);
    }

    #[test]
    fn search_ignores_case() {
        let mut query = ListQuery::default();
        query.set_search("GOLD");
        let names: Vec<_> = query.apply(TILES).iter().map(|t| t.0).collect();
        assert_eq!(names, ["Golden Wheel", "gold leaf"]);
    }

    #[test]
    fn unknown_filter_shows_nothing() {
        let mut query = ListQuery::default();
        query.select_filter("square", DEFS);
        assert_eq!(query.active(), "square");
        assert!(query.apply(TILES).is_empty());
    }

    #[test]
    fn counts_per_definition() {
        assert_eq!(DEFS[0].count(TILES), 3);
        assert_eq!(DEFS[1].count(TILES), 1);
    }
}
