use heritage_domain::TourSite;

pub static SITES: [TourSite; 2] = [
    TourSite {
        id: "rumtek",
        name: "Rumtek Monastery",
        region: "East Sikkim",
        description: "The largest monastery in Sikkim, seat of the Kagyu lineage",
        scenes: &["Main Hall", "Prayer Wheels", "Golden Stupa", "Courtyard", "Monks' Quarters"],
        duration: "45 minutes",
        visitors: "1.2k today",
    },
    TourSite {
        id: "pemayangtse",
        name: "Pemayangtse Monastery",
        region: "West Sikkim",
        description: "One of the oldest monasteries in Sikkim",
        scenes: &["Assembly Hall", "Sacred Relics", "Wooden Sculptures", "Mountain View"],
        duration: "35 minutes",
        visitors: "856 today",
    },
];

/// Visit facts shown beside every tour.
pub const VISIT_INFO: &[(&str, &str)] =
    &[("Best Time", "Oct - Mar"), ("Entry Fee", "₹20 (Indians)"), ("Photography", "Allowed")];

pub const SCENE_TAGS: &[&str] = &["Architecture", "Buddhist Art", "Cultural Heritage", "360° View"];

#[must_use]
pub fn find_site(id: &str) -> Option<&'static TourSite> {
    SITES.iter().find(|site| site.id == id)
}

/// Site for a route parameter; unknown or missing ids fall back to the first site.
#[must_use]
pub fn resolve_site(id: Option<&str>) -> &'static TourSite {
    match id.and_then(find_site) {
        Some(site) => site,
        None => {
            tracing::debug!(requested = ?id, fallback = SITES[0].id, "Tour site not found");
            &SITES[0]
        },
    }
}
