//! Menu composition: grid layout, entries, chrome and the host view seam

pub mod chrome;
pub mod entry;
pub mod group;
pub mod layout;
pub mod view;

pub use entry::MenuEntry;
pub use group::MainMenuGroup;
pub use layout::{LayoutError, MenuLayout};
pub use view::{
    ClickAction, ClickContext, ClickHandler, ClickOutcome, MenuHost, MenuView, OpenHandler,
};
