use heritage_domain::Difficulty;
use heritage_map::{FILTERS, MONASTERIES, MapView, Pin};

fn names(view: &MapView) -> Vec<&'static str> {
    view.visible().iter().map(|record| record.name).collect()
}

#[test]
fn default_view_lists_everything_in_order() {
    let view = MapView::default();
    assert_eq!(
        names(&view),
        ["Rumtek Monastery", "Pemayangtse Monastery", "Tashiding Monastery", "Enchey Monastery"]
    );
}

#[test]
fn search_covers_name_and_region() {
    let mut view = MapView::default();
    view.set_search("west");
    assert_eq!(names(&view), ["Pemayangtse Monastery", "Tashiding Monastery"]);

    view.set_search("ENCHEY");
    assert_eq!(names(&view), ["Enchey Monastery"]);
}

#[test]
fn category_and_search_combine() {
    let mut view = MapView::default();
    view.select_filter("major");
    view.set_search("east");
    assert_eq!(names(&view), ["Rumtek Monastery", "Enchey Monastery"]);

    view.select_filter("sacred");
    assert!(view.visible().is_empty());
}

#[test]
fn filter_badges_count_categories() {
    let counts: Vec<_> = FILTERS.iter().map(|def| (def.id, def.count(&MONASTERIES))).collect();
    assert_eq!(counts, [("all", 4), ("major", 2), ("historical", 1), ("sacred", 1)]);
}

#[test]
fn pins_follow_filtered_positions() {
    let mut view = MapView::default();
    view.select_filter("major");
    let pins = view.pins();

    assert_eq!(pins.len(), 2);
    assert_eq!((pins[0].left, pins[0].top), (20, 30));
    assert_eq!((pins[1].left, pins[1].top), (35, 40));
    assert_eq!(pins[1].record.name, "Enchey Monastery");
    assert_eq!(Pin::offset(3), (65, 60));
}

#[test]
fn selection_shows_details_and_survives_filtering() {
    let mut view = MapView::default();
    assert!(view.selected().is_none());

    view.select(3);
    view.select_filter("major");

    let selected = view.selected().expect("selection kept");
    assert_eq!(selected.name, "Tashiding Monastery");
    assert_eq!(selected.difficulty, Difficulty::Hard);
    assert!(view.is_selected(3));
    assert!(!view.is_selected(1));
}
