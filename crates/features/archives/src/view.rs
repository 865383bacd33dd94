use crate::catalog::{FILTERS, ITEMS};
use heritage_domain::{ArchiveItem, ArchiveKind};
use heritage_kernel::filter::ListQuery;
use heritage_kernel::toggle::ToggleSet;
use tracing::debug;

/// Grid cards show this many tags before collapsing the rest into a badge.
pub const CARD_TAGS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    #[default]
    Grid,
    List,
}

/// Leading tags of a grid card plus the size of the `+N` badge, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagPreview {
    pub shown: &'static [&'static str],
    pub hidden: usize,
}

impl TagPreview {
    #[must_use]
    pub fn of(item: &ArchiveItem) -> Self {
        let cut = item.tags.len().min(CARD_TAGS);
        Self { shown: &item.tags[..cut], hidden: item.tags.len() - cut }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchivesView {
    query: ListQuery<ArchiveKind>,
    layout: Layout,
    favorites: ToggleSet<u32>,
    selected: Option<u32>,
}

impl Default for ArchivesView {
    fn default() -> Self {
        Self {
            query: ListQuery::default(),
            layout: Layout::default(),
            favorites: ToggleSet::seeded(ITEMS.iter().map(|item| (item.id, item.favorite))),
            selected: None,
        }
    }
}

impl ArchivesView {
    #[must_use]
    pub const fn query(&self) -> &ListQuery<ArchiveKind> {
        &self.query
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.query.set_search(search);
    }

    pub fn select_filter(&mut self, id: &'static str) {
        self.query.select_filter(id, FILTERS);
    }

    #[must_use]
    pub fn visible(&self) -> Vec<&'static ArchiveItem> {
        self.query.apply(&ITEMS)
    }

    /// `Showing 3 results` with ` for "<term>"` appended while searching.
    #[must_use]
    pub fn summary(&self) -> String {
        let count = self.visible().len();
        match self.query.search() {
            "" => format!("Showing {count} results"),
            term => format!("Showing {count} results for \"{term}\""),
        }
    }

    #[must_use]
    pub const fn layout(&self) -> Layout {
        self.layout
    }

    pub fn set_layout(&mut self, layout: Layout) {
        debug!(?layout, "Archive layout changed");
        self.layout = layout;
    }

    #[must_use]
    pub fn is_favorite(&self, id: u32) -> bool {
        self.favorites.contains(id)
    }

    pub fn toggle_favorite(&mut self, id: u32) -> bool {
        self.favorites.toggle(id)
    }

    pub const fn select(&mut self, id: u32) {
        self.selected = Some(id);
    }

    pub const fn close(&mut self) {
        self.selected = None;
    }

    #[must_use]
    pub fn selected(&self) -> Option<&'static ArchiveItem> {
        let id = self.selected?;
        ITEMS.iter().find(|item| item.id == id)
    }
}
