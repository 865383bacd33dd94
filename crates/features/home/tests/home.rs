use heritage_domain::constants::{
    ARCHIVES_PATH, AUDIO_GUIDE_PATH, CALENDAR_PATH, MAP_PATH, VIRTUAL_TOUR_PATH,
};
use heritage_home::{FEATURES, QUICK_STATS, TESTIMONIALS};

#[test]
fn feature_cards_link_to_every_page_once() {
    let hrefs: Vec<_> = FEATURES.iter().map(|card| card.href).collect();
    assert_eq!(hrefs, [VIRTUAL_TOUR_PATH, MAP_PATH, AUDIO_GUIDE_PATH, ARCHIVES_PATH, CALENDAR_PATH]);
}

#[test]
fn cards_carry_three_bullets() {
    assert!(FEATURES.iter().all(|card| card.bullets.len() == 3));
}

#[test]
fn testimonial_ratings_render_as_stars() {
    assert!(TESTIMONIALS.iter().all(|t| (1..=5).contains(&t.rating)));
    assert_eq!(TESTIMONIALS[0].stars(), "★★★★★");
}

#[test]
fn quick_stats_labels() {
    let labels: Vec<_> = QUICK_STATS.iter().map(|stat| stat.label).collect();
    assert_eq!(labels, ["Monasteries", "Virtual Tours", "Languages", "Visitors"]);
}
