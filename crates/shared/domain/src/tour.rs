/// A monastery with a 360° tour. Looked up by its slug from the route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TourSite {
    pub id: &'static str,
    pub name: &'static str,
    pub region: &'static str,
    pub description: &'static str,
    /// Never empty.
    pub scenes: &'static [&'static str],
    pub duration: &'static str,
    pub visitors: &'static str,
}
