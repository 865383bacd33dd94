use heritage_audio::{AudioView, TRACKS};
use heritage_domain::GuideLanguage;

#[test]
fn starts_on_first_track_with_defaults() {
    let view = AudioView::default();
    assert_eq!(view.current().title, "Introduction to Rumtek Monastery");
    assert_eq!(view.position(), 120);
    assert_eq!(view.position_label(), "2:00");
    assert_eq!(view.duration_label(), "8:45");
    assert_eq!(view.volume(), 75);
    assert_eq!(view.language(), GuideLanguage::English);
    assert!(!view.is_playing());
}

#[test]
fn language_comes_from_preferences() {
    let view = AudioView::new(GuideLanguage::Hindi);
    assert_eq!(view.language(), GuideLanguage::Hindi);
}

#[test]
fn skip_controls_are_clamped() {
    let mut view = AudioView::default();
    view.previous();
    assert_eq!(view.track_index(), 0);
    assert!(!view.can_previous());

    for _ in 0..10 {
        view.next();
    }
    assert_eq!(view.track_index(), TRACKS.len() - 1);
    assert!(!view.can_next());
    assert_eq!(view.current().narrator, "Ani Dolma");
}

#[test]
fn seek_bar_has_fixed_length() {
    let mut view = AudioView::default();
    view.seek(10_000);
    assert_eq!(view.position(), 525);
    assert_eq!(view.position_label(), "8:45");

    view.select(2);
    assert_eq!(view.duration(), 525);
    assert_eq!(view.duration_label(), "15:20");
    view.seek(10_000);
    assert_eq!(view.position(), 525);
}

#[test]
fn position_survives_track_changes() {
    let mut view = AudioView::default();
    view.seek(300);
    view.next();
    assert_eq!(view.track_index(), 1);
    assert_eq!(view.position(), 300);
    view.select(3);
    view.previous();
    view.select(99);
    assert_eq!(view.track_index(), 2);
    assert_eq!(view.position(), 300);
}

#[test]
fn volume_is_clamped() {
    let mut view = AudioView::default();
    view.set_volume(250);
    assert_eq!(view.volume(), 100);
    view.set_volume(0);
    assert_eq!(view.volume(), 0);
}

#[test]
fn offline_switch_labels() {
    let mut view = AudioView::default();
    assert_eq!(view.connection_labels(), ("Connected", "Go Offline"));
    view.toggle_offline();
    assert_eq!(view.connection_labels(), ("Offline Mode", "Go Online"));
}
