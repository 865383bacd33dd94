use crate::catalog::{DEFAULT_VOLUME, INITIAL_POSITION, MAX_VOLUME, SEEK_BAR_SECS, TRACKS};
use heritage_domain::audio::format_clock;
use heritage_domain::{AudioGuideTrack, GuideLanguage};
use heritage_kernel::navigation::{Playback, Slider, Stepper};
use tracing::debug;

/// Player state. The seek bar has a fixed length and keeps its position across tracks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioView {
    track: Stepper,
    playback: Playback,
    position: Slider,
    volume: Slider,
    language: GuideLanguage,
    offline: bool,
}

impl Default for AudioView {
    fn default() -> Self {
        Self::new(GuideLanguage::default())
    }
}

impl AudioView {
    #[must_use]
    pub fn new(language: GuideLanguage) -> Self {
        Self {
            track: Stepper::new(TRACKS.len()),
            playback: Playback::new(),
            position: Slider::new(INITIAL_POSITION, SEEK_BAR_SECS),
            volume: Slider::new(DEFAULT_VOLUME, MAX_VOLUME),
            language,
            offline: false,
        }
    }

    #[must_use]
    pub fn current(&self) -> &'static AudioGuideTrack {
        &TRACKS[self.track.index()]
    }

    #[must_use]
    pub const fn track_index(&self) -> usize {
        self.track.index()
    }

    #[must_use]
    pub const fn can_previous(&self) -> bool {
        self.track.can_previous()
    }

    #[must_use]
    pub const fn can_next(&self) -> bool {
        self.track.can_next()
    }

    pub fn next(&mut self) {
        if self.track.next() {
            self.track_changed();
        }
    }

    pub fn previous(&mut self) {
        if self.track.previous() {
            self.track_changed();
        }
    }

    pub fn select(&mut self, index: usize) {
        if index != self.track.index() && self.track.select(index) {
            self.track_changed();
        }
    }

    fn track_changed(&mut self) {
        let track = self.current();
        debug!(track = track.id, title = track.title, "Audio track changed");
    }

    #[must_use]
    pub const fn is_playing(&self) -> bool {
        self.playback.is_playing()
    }

    pub fn toggle_play(&mut self) {
        let playing = self.playback.toggle();
        debug!(track = self.current().id, playing, "Audio playback toggled");
    }

    #[must_use]
    pub const fn position(&self) -> u32 {
        self.position.value()
    }

    /// Upper bound of the seek bar.
    #[must_use]
    pub const fn duration(&self) -> u32 {
        self.position.max()
    }

    pub const fn seek(&mut self, secs: u32) {
        self.position.set(secs);
    }

    #[must_use]
    pub fn position_label(&self) -> String {
        format_clock(self.position.value())
    }

    /// Length of the current track, shown beside the seek bar.
    #[must_use]
    pub fn duration_label(&self) -> String {
        format_clock(self.current().duration_secs)
    }

    #[must_use]
    pub const fn volume(&self) -> u32 {
        self.volume.value()
    }

    pub const fn set_volume(&mut self, volume: u32) {
        self.volume.set(volume);
    }

    #[must_use]
    pub const fn language(&self) -> GuideLanguage {
        self.language
    }

    pub fn select_language(&mut self, language: GuideLanguage) {
        debug!(language = language.code(), "Narration language selected");
        self.language = language;
    }

    #[must_use]
    pub const fn is_offline(&self) -> bool {
        self.offline
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
        debug!(offline = self.offline, "Offline mode toggled");
    }

    /// `("Offline Mode", "Go Online")` or `("Connected", "Go Offline")`.
    #[must_use]
    pub const fn connection_labels(&self) -> (&'static str, &'static str) {
        if self.offline { ("Offline Mode", "Go Online") } else { ("Connected", "Go Offline") }
    }
}
