use crate::catalog::{FILTERS, MONASTERIES};
use heritage_domain::{MonasteryRecord, SiteCategory};
use heritage_kernel::filter::ListQuery;
use tracing::debug;

/// A visible record and its pin offset on the map canvas, in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pin {
    pub record: &'static MonasteryRecord,
    pub left: u32,
    pub top: u32,
}

impl Pin {
    /// Pins fan out diagonally by their position in the filtered list.
    #[must_use]
    pub const fn offset(index: u32) -> (u32, u32) {
        (20 + index * 15, 30 + index * 10)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapView {
    query: ListQuery<SiteCategory>,
    selected: Option<u32>,
}

impl MapView {
    #[must_use]
    pub const fn query(&self) -> &ListQuery<SiteCategory> {
        &self.query
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.query.set_search(search);
    }

    pub fn select_filter(&mut self, id: &'static str) {
        self.query.select_filter(id, FILTERS);
    }

    #[must_use]
    pub fn visible(&self) -> Vec<&'static MonasteryRecord> {
        self.query.apply(&MONASTERIES)
    }

    #[must_use]
    pub fn pins(&self) -> Vec<Pin> {
        self.visible()
            .into_iter()
            .zip(0_u32..)
            .map(|(record, index)| {
                let (left, top) = Pin::offset(index);
                Pin { record, left, top }
            })
            .collect()
    }

    /// Selects a site by id. The selection survives later filtering.
    pub fn select(&mut self, id: u32) {
        debug!(site = id, "Map site selected");
        self.selected = Some(id);
    }

    #[must_use]
    pub fn selected(&self) -> Option<&'static MonasteryRecord> {
        let id = self.selected?;
        MONASTERIES.iter().find(|record| record.id == id)
    }

    #[must_use]
    pub const fn is_selected(&self, id: u32) -> bool {
        matches!(self.selected, Some(selected) if selected == id)
    }
}
