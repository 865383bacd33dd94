use heritage_domain::AudioGuideTrack;

pub static TRACKS: [AudioGuideTrack; 4] = [
    AudioGuideTrack {
        id: 1,
        title: "Introduction to Rumtek Monastery",
        monastery: "Rumtek Monastery",
        narrator: "Lama Tenzin",
        duration_secs: 8 * 60 + 45,
        language: "English",
        description: "Welcome to the spiritual heart of Sikkim. Learn about the history and significance of Rumtek.",
        category: "Introduction",
        downloaded: true,
    },
    AudioGuideTrack {
        id: 2,
        title: "The Golden Stupa - Sacred Architecture",
        monastery: "Rumtek Monastery",
        narrator: "Dr. Pemba Sherpa",
        duration_secs: 12 * 60 + 30,
        language: "English",
        description: "Explore the intricate details of the golden stupa and its symbolic meanings.",
        category: "Architecture",
        downloaded: true,
    },
    AudioGuideTrack {
        id: 3,
        title: "Daily Life of Monks",
        monastery: "Rumtek Monastery",
        narrator: "Monk Lobsang",
        duration_secs: 15 * 60 + 20,
        language: "English",
        description: "Experience a day in the life of Buddhist monks through their own voices.",
        category: "Culture",
        downloaded: false,
    },
    AudioGuideTrack {
        id: 4,
        title: "Prayer Wheels and Their Significance",
        monastery: "Enchey Monastery",
        narrator: "Ani Dolma",
        duration_secs: 6 * 60 + 15,
        language: "English",
        description: "Understanding the spiritual practice of prayer wheels and mantras.",
        category: "Spirituality",
        downloaded: true,
    },
];

/// Where the seek bar starts on first load, in seconds.
pub const INITIAL_POSITION: u32 = 120;
/// Fixed length of the seek bar (8:45), shared by every track.
pub const SEEK_BAR_SECS: u32 = 525;
pub const DEFAULT_VOLUME: u32 = 75;
pub const MAX_VOLUME: u32 = 100;

/// Offline card figures. Display copy, not computed.
pub const DOWNLOADED_SUMMARY: &str = "3 of 4 guides";
pub const STORAGE_USED: &str = "45 MB";

pub const FEATURES: &[&str] =
    &["GPS-triggered audio", "Bluetooth beacon support", "Offline mode", "Multi-language support"];
