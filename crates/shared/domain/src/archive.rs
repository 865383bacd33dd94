use crate::listing::{Categorized, Searchable};
use chrono::NaiveDate;
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// What kind of object an archive item digitizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum ArchiveKind {
    Manuscript,
    Mural,
    Document,
    Thangka,
    Chronicle,
    Inscription,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveItem {
    pub id: u32,
    pub title: &'static str,
    pub monastery: &'static str,
    pub kind: ArchiveKind,
    pub period: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub language: &'static str,
    pub condition: &'static str,
    pub digitized: NaiveDate,
    /// Initial flag only; toggles live in view state.
    pub favorite: bool,
    pub view_count: u32,
}

impl ArchiveItem {
    /// `Aug 15, 2023`
    #[must_use]
    pub fn digitized_label(&self) -> String {
        self.digitized.format("%b %-d, %Y").to_string()
    }
}

impl Searchable for ArchiveItem {
    fn search_fields(&self) -> impl Iterator<Item = &str> {
        [self.title, self.monastery].into_iter().chain(self.tags.iter().copied())
    }
}

impl Categorized for ArchiveItem {
    type Category = ArchiveKind;

    fn category(&self) -> ArchiveKind {
        self.kind
    }
}
