//! Shared decoration every guide menu carries
//!
//! The background tile, the click-absorbing handler for it and the
//! page-turn cue are the same for every menu, so they live behind
//! statics and are handed out as cheap clones.

use std::sync::Arc;

use lazy_static::lazy_static;

use crate::icon::ItemIcon;
use crate::menu::view::{ClickContext, ClickHandler, ClickOutcome, OpenHandler};
use crate::player::Player;
use crate::sound::SoundEffect;

lazy_static! {
    static ref BACKGROUND: ItemIcon = ItemIcon::new("gray_stained_glass_pane", " ");
    static ref EMPTY_CLICK: ClickHandler =
        Arc::new(|_click: &mut ClickContext<'_>| ClickOutcome::Deny);
    static ref PAGE_TURN_CUE: OpenHandler =
        Arc::new(|player: &dyn Player| player.play_sound(&SoundEffect::page_turn()));
}

/// Inert tile used to fill header and footer slots
pub fn background() -> ItemIcon {
    BACKGROUND.clone()
}

/// Handler for chrome slots; absorbs the click so nothing happens
pub fn empty_click_handler() -> ClickHandler {
    Arc::clone(&EMPTY_CLICK)
}

/// Back control icon carrying an already localized label
pub fn back_button(label: impl Into<String>) -> ItemIcon {
    ItemIcon::new("arrow", label)
}

/// Open hook that plays the page-turn cue once
pub fn page_turn_cue() -> OpenHandler {
    Arc::clone(&PAGE_TURN_CUE)
}
