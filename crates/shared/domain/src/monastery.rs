use crate::listing::{Categorized, Searchable};
use strum::{AsRefStr, Display, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// How demanding the approach to a site is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, EnumIter)]
pub enum Difficulty {
    Easy,
    Moderate,
    Hard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum SiteCategory {
    Major,
    Historical,
    Sacred,
}

/// A monastery as shown on the interactive map.
#[derive(Debug, Clone, PartialEq)]
pub struct MonasteryRecord {
    pub id: u32,
    pub name: &'static str,
    pub region: &'static str,
    pub coordinates: Coordinates,
    /// 0.0 to 5.0
    pub rating: f32,
    pub difficulty: Difficulty,
    pub distance: &'static str,
    pub description: &'static str,
    pub category: SiteCategory,
    pub visit_duration: &'static str,
    pub nearby_attractions: &'static [&'static str],
}

impl Searchable for MonasteryRecord {
    fn search_fields(&self) -> impl Iterator<Item = &str> {
        [self.name, self.region].into_iter()
    }
}

impl Categorized for MonasteryRecord {
    type Category = SiteCategory;

    fn category(&self) -> SiteCategory {
        self.category
    }
}
