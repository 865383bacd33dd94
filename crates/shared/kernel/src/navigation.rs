//! Bounded positions: list cursors, play flags and sliders.

/// Cursor over a fixed-length list. Stays within `[0, len - 1]`; never wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stepper {
    index: usize,
    len: usize,
}

impl Stepper {
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn can_next(&self) -> bool {
        self.index + 1 < self.len
    }

    #[must_use]
    pub const fn can_previous(&self) -> bool {
        self.index > 0
    }

    /// Returns `false` when already at the last position.
    pub const fn next(&mut self) -> bool {
        if !self.can_next() {
            return false;
        }
        self.index += 1;
        true
    }

    /// Returns `false` when already at the first position.
    pub const fn previous(&mut self) -> bool {
        if !self.can_previous() {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Jumps to `index`; out-of-range indices are ignored.
    pub const fn select(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.index = index;
        true
    }
}

/// Play/pause flag. Nothing is attached to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Playback {
    playing: bool,
}

impl Playback {
    #[must_use]
    pub const fn new() -> Self {
        Self { playing: false }
    }

    #[must_use]
    pub const fn is_playing(&self) -> bool {
        self.playing
    }

    /// Flips the flag and returns the new value.
    pub const fn toggle(&mut self) -> bool {
        self.playing = !self.playing;
        self.playing
    }
}

/// Integer slider value in `0..=max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slider {
    value: u32,
    max: u32,
}

impl Slider {
    #[must_use]
    pub const fn new(value: u32, max: u32) -> Self {
        Self { value: if value > max { max } else { value }, max }
    }

    #[must_use]
    pub const fn value(&self) -> u32 {
        self.value
    }

    #[must_use]
    pub const fn max(&self) -> u32 {
        self.max
    }

    /// Stores `value`, clamped to `max`, and returns what was stored.
    pub const fn set(&mut self, value: u32) -> u32 {
        self.value = if value > self.max { self.max } else { value };
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_stop_at_bounds() {
        let mut stepper = Stepper::new(2);
        assert!(!stepper.previous());
        assert!(stepper.next());
        assert!(!stepper.next());
        assert_eq!(stepper.index(), 1);
    }

    #[test]
    fn empty_stepper_never_moves() {
        let mut stepper = Stepper::new(0);
        assert!(!stepper.can_next());
        assert!(!stepper.next());
        assert!(!stepper.select(0));
        assert_eq!(stepper.index(), 0);
    }

    #[test]
    fn select_ignores_out_of_range() {
        let mut stepper = Stepper::new(4);
        assert!(stepper.select(3));
        assert!(!stepper.select(4));
        assert_eq!(stepper.index(), 3);
    }

    #[test]
    fn slider_clamps() {
        let mut slider = Slider::new(75, 100);
        assert_eq!(slider.set(140), 100);
        assert_eq!(slider.set(0), 0);
        assert_eq!(Slider::new(9, 5).value(), 5);
    }

    #[test]
    fn playback_toggles() {
        let mut playback = Playback::default();
        assert!(playback.toggle());
        assert!(playback.is_playing());
        assert!(!playback.toggle());
        assert_eq!(playback, Playback::new());
    }
}
