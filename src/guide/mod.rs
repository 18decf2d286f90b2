//! Contracts between menus and the host guide system
//!
//! The menu layer never talks to a concrete server. Everything it needs
//! from the outside world comes in through the traits here, carried by
//! a [`GuideContext`] per open call and a
//! [`ClickContext`](crate::menu::ClickContext) per click.

pub mod context;
pub mod group;
pub mod history;
pub mod key;
pub mod localization;
pub mod service;

pub use context::GuideContext;
pub use group::{GuideGroup, SimpleGroup};
pub use history::GuideHistory;
pub use key::{GroupKey, KeyError};
pub use localization::{keys, Localization};
pub use service::{GuideMode, GuideService};
