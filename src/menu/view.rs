use std::sync::Arc;

use crate::guide::service::{GuideMode, GuideService};
use crate::icon::ItemIcon;
use crate::player::{Player, PlayerProfile};

/// Shared handler invoked when a player clicks a menu slot
pub type ClickHandler = Arc<dyn Fn(&mut ClickContext<'_>) -> ClickOutcome + Send + Sync>;

/// Hook invoked by the host when a menu view is shown to a player
pub type OpenHandler = Arc<dyn Fn(&dyn Player) + Send + Sync>;

/// What the host should do after a click handler ran
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Run the host's default slot behavior as well
    Allow,
    /// The menu handled the click; suppress the default behavior
    Deny,
}

/// Mouse action the player performed on a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    Left,
    Right,
    ShiftLeft,
    ShiftRight,
}

impl ClickAction {
    pub fn is_right_click(self) -> bool {
        matches!(self, ClickAction::Right | ClickAction::ShiftRight)
    }

    pub fn is_shift_click(self) -> bool {
        matches!(self, ClickAction::ShiftLeft | ClickAction::ShiftRight)
    }
}

/// Everything a click handler needs, built by the host per click
pub struct ClickContext<'a> {
    /// Player who clicked
    pub player: &'a dyn Player,
    /// That player's guide profile
    pub profile: &'a mut dyn PlayerProfile,
    /// Ruleset the guide was opened under
    pub mode: GuideMode,
    /// Navigation entry points of the host's guide
    pub guide: &'a dyn GuideService,
    /// Slot that was clicked
    pub slot: usize,
    /// Mouse action performed
    pub click: ClickAction,
}

/// One host-backed menu screen under construction
///
/// Implementations collect items and handlers, then render themselves
/// when [`present`](MenuView::present) is called. Slots may be written
/// more than once; the last write wins.
pub trait MenuView {
    /// Put an icon in a slot
    fn set_item(&mut self, slot: usize, icon: ItemIcon);

    /// Attach the click handler for a slot
    fn set_click_handler(&mut self, slot: usize, handler: ClickHandler);

    /// Register the hook run once when the view is shown
    fn set_open_handler(&mut self, handler: OpenHandler);

    /// Control whether clicks on empty slots reach the player
    fn set_empty_slots_interactive(&mut self, interactive: bool);

    /// Show the finished view to the player
    fn present(&mut self, player: &dyn Player);
}

/// Factory for host menu views
pub trait MenuHost {
    /// Create an empty view with the given title
    fn create_menu(&self, title: &str) -> Box<dyn MenuView>;
}
