pub use crate::filter::{Filter, FilterDef, ListQuery};
pub use crate::navigation::{Playback, Slider, Stepper};
pub use crate::toggle::ToggleSet;
pub use heritage_domain::listing::{Categorized, Searchable};
