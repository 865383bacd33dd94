use heritage_domain::constants::{
    ARCHIVES_PATH, AUDIO_GUIDE_PATH, CALENDAR_PATH, MAP_PATH, VIRTUAL_TOUR_PATH,
};

/// One tile in the "Explore Our Features" grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureCard {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    /// Route the "Explore" button opens.
    pub href: &'static str,
    pub stats: &'static str,
    pub bullets: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickStat {
    pub label: &'static str,
    pub value: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub content: &'static str,
    /// 1 to 5
    pub rating: u8,
    pub avatar: &'static str,
}

impl Testimonial {
    #[must_use]
    pub fn stars(&self) -> String {
        "★".repeat(usize::from(self.rating))
    }
}

/// "Built for Modern Exploration" bullet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

pub const FEATURES: &[FeatureCard] = &[
    FeatureCard {
        title: "Virtual Tours",
        description: "Experience 360° panoramic views of monastery interiors with immersive walkthroughs",
        icon: "📷",
        href: VIRTUAL_TOUR_PATH,
        stats: "200+ Monasteries",
        bullets: &["360° Views", "HD Quality", "Multiple Angles"],
    },
    FeatureCard {
        title: "Interactive Map",
        description: "Explore geo-tagged locations with travel routes and nearby attractions",
        icon: "📍",
        href: MAP_PATH,
        stats: "25+ Locations",
        bullets: &["GPS Routes", "Local Transport", "Travel Tips"],
    },
    FeatureCard {
        title: "Smart Audio Guide",
        description: "Location-based audio guides in multiple languages with offline support",
        icon: "🎧",
        href: AUDIO_GUIDE_PATH,
        stats: "5 Languages",
        bullets: &["Offline Mode", "GPS Triggered", "Native Voices"],
    },
    FeatureCard {
        title: "Digital Archives",
        description: "Scanned manuscripts, murals, and historical documents with AI-powered search",
        icon: "📖",
        href: ARCHIVES_PATH,
        stats: "1000+ Documents",
        bullets: &["AI Search", "HD Scans", "Historical Context"],
    },
    FeatureCard {
        title: "Cultural Calendar",
        description: "Schedule of festivals, rituals, and events with booking capabilities",
        icon: "📅",
        href: CALENDAR_PATH,
        stats: "50+ Events/Year",
        bullets: &["Event Booking", "Notifications", "Festival Guide"],
    },
];

pub const QUICK_STATS: &[QuickStat] = &[
    QuickStat { label: "Monasteries", value: "25+", icon: "🏔" },
    QuickStat { label: "Virtual Tours", value: "15", icon: "📷" },
    QuickStat { label: "Languages", value: "5", icon: "🌐" },
    QuickStat { label: "Visitors", value: "10K+", icon: "👥" },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Sarah Johnson",
        role: "Cultural Enthusiast",
        content: "The virtual tours are absolutely stunning. I felt like I was actually walking through these sacred spaces.",
        rating: 5,
        avatar: "🧘‍♀️",
    },
    Testimonial {
        name: "Tenzin Norbu",
        role: "Local Guide",
        content: "This platform beautifully preserves our heritage. The audio guides in Tibetan are authentic and meaningful.",
        rating: 5,
        avatar: "🙏",
    },
    Testimonial {
        name: "Dr. Maya Patel",
        role: "Buddhist Scholar",
        content: "The digital archives are a treasure trove. The AI search helps me find exactly what I need for my research.",
        rating: 5,
        avatar: "📚",
    },
];

pub const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        icon: "📶",
        title: "Offline Capability",
        body: "Access content even in remote monastery locations without internet connectivity.",
    },
    Highlight {
        icon: "🌐",
        title: "Multi-Language Support",
        body: "Experience content in English, Nepali, Hindi, Tibetan, and Sinhala languages.",
    },
    Highlight {
        icon: "❤",
        title: "Cultural Preservation",
        body: "Digitally preserving sacred texts, artwork, and traditions for future generations.",
    },
];
