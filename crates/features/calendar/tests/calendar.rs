use chrono::{Datelike, Local};
use heritage_calendar::{Booking, CalendarMode, CalendarStats, CalendarView, EVENTS, FILTERS};
use heritage_domain::event::date;

fn titles(view: &CalendarView) -> Vec<&'static str> {
    view.visible().iter().map(|event| event.title).collect()
}

#[test]
fn type_filter() {
    let mut view = CalendarView::default();
    assert_eq!(view.visible().len(), 5);

    view.select_filter("festival");
    assert_eq!(titles(&view), ["Losar Festival - Tibetan New Year", "Saga Dawa Festival"]);

    view.select_filter("daily_prayer");
    assert_eq!(titles(&view), ["Morning Prayer Ceremony"]);
}

#[test]
fn search_covers_title_and_monastery() {
    let mut view = CalendarView::default();
    view.set_search("rumtek");
    assert_eq!(titles(&view), ["Losar Festival - Tibetan New Year", "Meditation Retreat"]);

    view.select_filter("retreat");
    view.set_search("DANCE");
    assert!(view.visible().is_empty());
}

#[test]
fn filter_counts() {
    let counts: Vec<_> = FILTERS.iter().map(|def| def.count(&EVENTS)).collect();
    assert_eq!(counts, [5, 2, 1, 1, 1]);
}

#[test]
fn stats_cover_whole_catalog() {
    let mut view = CalendarView::default();
    view.select_filter("retreat");
    assert_eq!(
        view.stats(),
        CalendarStats { total: 5, festivals: 2, free: 2, participants: 1080 }
    );
}

#[test]
fn opens_on_current_month() {
    let today = Local::now().date_naive();
    let view = CalendarView::default();
    assert_eq!(view.month().year(), today.year());
    assert_eq!(view.month().month(), today.month());
    assert_eq!(view.month().day(), 1);
}

#[test]
fn month_header_navigation() {
    let mut view = CalendarView::starting_at(date(2024, 1, 15));
    assert_eq!(view.month_label(), "January 2024");

    view.previous_month();
    assert_eq!(view.month_label(), "December 2023");
    view.next_month();
    view.next_month();
    assert_eq!(view.month(), date(2024, 2, 1));

    let view = CalendarView::starting_at(date(2024, 5, 23));
    assert_eq!(view.month(), date(2024, 5, 1));
}

#[test]
fn view_modes() {
    let mut view = CalendarView::default();
    assert_eq!(view.mode(), CalendarMode::Month);
    view.set_mode(CalendarMode::List);
    assert_eq!(view.mode().label(), "List");
    let labels: Vec<_> = CalendarMode::ALL.iter().map(|mode| mode.label()).collect();
    assert_eq!(labels, ["Month", "Week", "List"]);
}

#[test]
fn selected_event_details() {
    let mut view = CalendarView::default();
    view.select(3);
    let event = view.selected().expect("selected event");

    assert_eq!(event.long_date(), "May 23, 2024");
    assert_eq!(event.time_range(), "04:00 - 18:00");
    assert_eq!(event.status.label(), "UPCOMING");
    assert_eq!(
        Booking::for_event(event),
        Some(Booking { action: "Book & Pay", note: "Payment required for confirmation" })
    );
}

#[test]
fn free_events_reserve_a_spot() {
    let booking = Booking::for_event(&EVENTS[0]).expect("bookable");
    assert_eq!(booking.action, "Reserve Spot");
    assert_eq!(EVENTS[4].status.label(), "BOOKING OPEN");
}
