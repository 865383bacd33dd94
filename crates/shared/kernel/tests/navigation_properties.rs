use heritage_kernel::navigation::{Slider, Stepper};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Click {
    Next,
    Previous,
    Select(usize),
}

fn click() -> impl Strategy<Value = Click> {
    prop_oneof![Just(Click::Next), Just(Click::Previous), (0usize..12).prop_map(Click::Select)]
}

proptest! {
    #[test]
    fn index_stays_in_bounds(len in 1usize..8, clicks in prop::collection::vec(click(), 0..64)) {
        let mut stepper = Stepper::new(len);
        for click in clicks {
            let before = stepper.index();
            match click {
                Click::Next => {
                    let moved = stepper.next();
                    prop_assert_eq!(moved, before + 1 < len);
                }
                Click::Previous => {
                    let moved = stepper.previous();
                    prop_assert_eq!(moved, before > 0);
                }
                Click::Select(i) => {
                    stepper.select(i);
                    prop_assert_eq!(stepper.index(), if i < len { i } else { before });
                }
            }
            prop_assert!(stepper.index() < len);
        }
    }

    #[test]
    fn slider_never_exceeds_max(max in 0u32..1000, values in prop::collection::vec(any::<u32>(), 0..16)) {
        let mut slider = Slider::new(0, max);
        for value in values {
            prop_assert_eq!(slider.set(value), value.min(max));
        }
    }
}
