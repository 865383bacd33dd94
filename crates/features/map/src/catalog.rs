use heritage_domain::{Coordinates, Difficulty, MonasteryRecord, SiteCategory};
use heritage_kernel::filter::FilterDef;

pub static MONASTERIES: [MonasteryRecord; 4] = [
    MonasteryRecord {
        id: 1,
        name: "Rumtek Monastery",
        region: "East Sikkim",
        coordinates: Coordinates { lat: 27.3389, lng: 88.5698 },
        rating: 4.8,
        difficulty: Difficulty::Easy,
        distance: "24 km from Gangtok",
        description: "The largest monastery in Sikkim and the main seat of the Kagyu lineage",
        category: SiteCategory::Major,
        visit_duration: "2-3 hours",
        nearby_attractions: &["Gangtok", "Banjhakri Falls", "Tsomgo Lake"],
    },
    MonasteryRecord {
        id: 2,
        name: "Pemayangtse Monastery",
        region: "West Sikkim",
        coordinates: Coordinates { lat: 27.2046, lng: 88.2079 },
        rating: 4.6,
        difficulty: Difficulty::Moderate,
        distance: "110 km from Gangtok",
        description: "One of the oldest and most important monasteries in Sikkim",
        category: SiteCategory::Historical,
        visit_duration: "1-2 hours",
        nearby_attractions: &["Pelling", "Rabdentse Ruins", "Khecheopalri Lake"],
    },
    MonasteryRecord {
        id: 3,
        name: "Tashiding Monastery",
        region: "West Sikkim",
        coordinates: Coordinates { lat: 27.3167, lng: 88.2667 },
        rating: 4.7,
        difficulty: Difficulty::Hard,
        distance: "40 km from Pelling",
        description: "Sacred monastery between two rivers with mystical significance",
        category: SiteCategory::Sacred,
        visit_duration: "1-2 hours",
        nearby_attractions: &["Yuksom", "Dubdi Monastery"],
    },
    MonasteryRecord {
        id: 4,
        name: "Enchey Monastery",
        region: "East Sikkim",
        coordinates: Coordinates { lat: 27.3389, lng: 88.6198 },
        rating: 4.5,
        difficulty: Difficulty::Easy,
        distance: "3 km from Gangtok",
        description: "Beautiful monastery with panoramic views of Gangtok",
        category: SiteCategory::Major,
        visit_duration: "1 hour",
        nearby_attractions: &["Gangtok City Center", "MG Marg", "Ridge Park"],
    },
];

pub const FILTERS: &[FilterDef<SiteCategory>] = &[
    FilterDef::all("All Monasteries"),
    FilterDef::only("major", "Major Sites", SiteCategory::Major),
    FilterDef::only("historical", "Historical", SiteCategory::Historical),
    FilterDef::only("sacred", "Sacred Sites", SiteCategory::Sacred),
];

pub const TRAVEL_TIPS: &[&str] = &[
    "Best visited between October and March for clear mountain views",
    "Carry warm clothes as temperatures can drop suddenly",
    "Respect photography restrictions inside monastery halls",
];
