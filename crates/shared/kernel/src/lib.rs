//! Kernel utilities shared across slices.
//! Keep this crate renderer-agnostic: everything here is plain state that a page
//! component wraps in a signal, so it can be exercised without a UI.
//!
//! ## List queries
//! ```rust
//! # use heritage_kernel::prelude::*;
//! # use heritage_kernel::domain::{ArchiveItem, ArchiveKind};
//! const FILTERS: &[FilterDef<ArchiveKind>] = &[
//!     FilterDef::all("All Items"),
//!     FilterDef::only("mural", "Murals", ArchiveKind::Mural),
//! ];
//!
//! let mut query = ListQuery::<ArchiveKind>::default();
//! query.select_filter("mural", FILTERS);
//! query.set_search("tara");
//! let visible: Vec<&ArchiveItem> = query.apply(&[]);
//! assert!(visible.is_empty());
//! ```
//!
//! ## Config loading (non-wasm)
//! ```rust,ignore
//! use heritage_kernel::config::load_config;
//! use heritage_kernel::domain::config::AppConfig;
//!
//! let cfg: AppConfig = load_config(Some("heritage.toml"))?;
//! ```
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
pub mod filter;
pub mod navigation;
pub mod prelude;
pub mod toggle;

pub use heritage_domain as domain;
