use crate::catalog::{SITES, resolve_site};
use heritage_domain::TourSite;
use heritage_kernel::navigation::{Playback, Stepper};
use tracing::debug;

/// Viewer state for one site. Build a fresh one when the route id changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TourView {
    site: &'static TourSite,
    scene: Stepper,
    playback: Playback,
    muted: bool,
}

impl TourView {
    #[must_use]
    pub fn for_site(id: Option<&str>) -> Self {
        let site = resolve_site(id);
        Self { site, scene: Stepper::new(site.scenes.len()), playback: Playback::default(), muted: false }
    }

    #[must_use]
    pub const fn site(&self) -> &'static TourSite {
        self.site
    }

    #[must_use]
    pub const fn scene_index(&self) -> usize {
        self.scene.index()
    }

    #[must_use]
    pub fn scene(&self) -> &'static str {
        self.site.scenes.get(self.scene.index()).copied().unwrap_or_default()
    }

    #[must_use]
    pub const fn can_previous(&self) -> bool {
        self.scene.can_previous()
    }

    #[must_use]
    pub const fn can_next(&self) -> bool {
        self.scene.can_next()
    }

    pub fn select_scene(&mut self, index: usize) {
        if self.scene.select(index) {
            debug!(site = self.site.id, scene = self.scene(), "Scene selected");
        }
    }

    pub fn next_scene(&mut self) {
        if self.scene.next() {
            debug!(site = self.site.id, scene = self.scene(), "Next scene");
        }
    }

    pub fn previous_scene(&mut self) {
        if self.scene.previous() {
            debug!(site = self.site.id, scene = self.scene(), "Previous scene");
        }
    }

    #[must_use]
    pub const fn is_playing(&self) -> bool {
        self.playback.is_playing()
    }

    pub fn toggle_play(&mut self) {
        let playing = self.playback.toggle();
        debug!(site = self.site.id, playing, "Tour playback toggled");
    }

    #[must_use]
    pub const fn is_muted(&self) -> bool {
        self.muted
    }

    pub const fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    /// Body of the "About this scene" card.
    #[must_use]
    pub fn about(&self) -> String {
        format!(
            "The {} is one of the most sacred spaces in {}. This virtual tour allows you to \
             explore intricate details of the architecture, artwork, and religious artifacts \
             that make this monastery unique.",
            self.scene(),
            self.site.name
        )
    }

    /// Every site except the one on screen.
    pub fn others(&self) -> impl Iterator<Item = &'static TourSite> + use<> {
        let current = self.site.id;
        SITES.iter().filter(move |site| site.id != current)
    }
}
