use heritage_domain::event::date;
use heritage_domain::{ArchiveItem, ArchiveKind};
use heritage_kernel::filter::FilterDef;

pub static ITEMS: [ArchiveItem; 6] = [
    ArchiveItem {
        id: 1,
        title: "Ancient Tibetan Manuscript",
        monastery: "Pemayangtse Monastery",
        kind: ArchiveKind::Manuscript,
        period: "16th Century",
        description: "Rare Buddhist text on meditation practices written in gold ink",
        tags: &["Buddhism", "Meditation", "Tibetan", "Ancient"],
        language: "Classical Tibetan",
        condition: "Excellent",
        digitized: date(2023, 8, 15),
        favorite: false,
        view_count: 1247,
    },
    ArchiveItem {
        id: 2,
        title: "Monastery Foundation Murals",
        monastery: "Rumtek Monastery",
        kind: ArchiveKind::Mural,
        period: "18th Century",
        description: "Detailed wall paintings depicting the founding story of the monastery",
        tags: &["Art", "History", "Founding", "Murals"],
        language: "Visual Art",
        condition: "Good",
        digitized: date(2023, 9, 20),
        favorite: true,
        view_count: 892,
    },
    ArchiveItem {
        id: 3,
        title: "Ritual Dance Handbook",
        monastery: "Tashiding Monastery",
        kind: ArchiveKind::Document,
        period: "17th Century",
        description: "Complete guide to sacred Cham dance performances and their meanings",
        tags: &["Dance", "Ritual", "Performance", "Sacred"],
        language: "Tibetan",
        condition: "Fair",
        digitized: date(2023, 7, 10),
        favorite: false,
        view_count: 634,
    },
    ArchiveItem {
        id: 4,
        title: "Thangka Painting - Green Tara",
        monastery: "Enchey Monastery",
        kind: ArchiveKind::Thangka,
        period: "19th Century",
        description: "Exquisite thangka painting of Green Tara, goddess of compassion",
        tags: &["Thangka", "Green Tara", "Goddess", "Compassion"],
        language: "Visual Art",
        condition: "Excellent",
        digitized: date(2023, 10, 5),
        favorite: true,
        view_count: 2156,
    },
    ArchiveItem {
        id: 5,
        title: "Monastery Chronicle",
        monastery: "Pemayangtse Monastery",
        kind: ArchiveKind::Chronicle,
        period: "Multiple Periods",
        description: "Historical records spanning 300 years of monastery events and lineages",
        tags: &["History", "Chronicle", "Lineage", "Records"],
        language: "Tibetan & English",
        condition: "Good",
        digitized: date(2023, 6, 30),
        favorite: false,
        view_count: 445,
    },
    ArchiveItem {
        id: 6,
        title: "Prayer Wheel Inscriptions",
        monastery: "Rumtek Monastery",
        kind: ArchiveKind::Inscription,
        period: "15th Century",
        description: "Sacred mantras and prayers carved on ancient prayer wheels",
        tags: &["Prayer", "Mantra", "Inscription", "Sacred"],
        language: "Sanskrit & Tibetan",
        condition: "Fair",
        digitized: date(2023, 11, 12),
        favorite: false,
        view_count: 789,
    },
];

// Chronicles and inscriptions have no button of their own; "all" reaches them.
pub const FILTERS: &[FilterDef<ArchiveKind>] = &[
    FilterDef::all("All Items"),
    FilterDef::only("manuscript", "Manuscripts", ArchiveKind::Manuscript),
    FilterDef::only("mural", "Murals", ArchiveKind::Mural),
    FilterDef::only("document", "Documents", ArchiveKind::Document),
    FilterDef::only("thangka", "Thangkas", ArchiveKind::Thangka),
];

pub const SEARCH_HINT: &str =
    "Try searching \"meditation texts from 16th century\" or \"Green Tara paintings\"";

/// Placeholder glyph for an item without imagery.
#[must_use]
pub const fn kind_icon(kind: ArchiveKind) -> &'static str {
    match kind {
        ArchiveKind::Manuscript | ArchiveKind::Chronicle => "📖",
        ArchiveKind::Mural | ArchiveKind::Thangka => "🖼",
        ArchiveKind::Document | ArchiveKind::Inscription => "📄",
    }
}
