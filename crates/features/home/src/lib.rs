//! Landing page feature slice. Static marketing content only; every interactive
//! element is a link into another slice.

pub mod catalog;
#[cfg(feature = "client")]
pub mod client;

pub use catalog::{
    FEATURES, FeatureCard, HIGHLIGHTS, Highlight, QUICK_STATS, QuickStat, TESTIMONIALS, Testimonial,
};
