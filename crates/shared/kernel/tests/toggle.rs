use heritage_kernel::toggle::ToggleSet;

#[test]
fn seeded_from_initial_flags() {
    let set = ToggleSet::seeded([(1_u32, true), (2, false), (3, true)]);
    assert!(set.contains(1));
    assert!(!set.contains(2));
    assert_eq!(set.len(), 2);
}

#[test]
fn double_toggle_restores_and_isolates() {
    let mut set = ToggleSet::seeded([(1_u32, false), (2, true)]);

    assert!(set.toggle(1));
    assert!(!set.toggle(1));

    assert!(!set.contains(1));
    assert!(set.contains(2));
}
