use crate::guide::localization::Localization;
use crate::guide::service::{GuideMode, GuideService};
use crate::menu::view::MenuHost;
use crate::player::{Player, PlayerProfile};

/// Everything a group needs to open a menu for one player
///
/// Bundles the per-open collaborators into a single argument so group
/// implementations never reach for global state. Built fresh by the
/// host for each open call.
pub struct GuideContext<'a> {
    /// Player the menu is being opened for
    pub player: &'a dyn Player,
    /// That player's guide profile
    pub profile: &'a mut dyn PlayerProfile,
    /// Ruleset the guide was opened under
    pub mode: GuideMode,
    /// Navigation entry points of the host's guide
    pub guide: &'a dyn GuideService,
    /// Message lookup for menu labels
    pub localization: &'a dyn Localization,
    /// Factory for host menu views
    pub menus: &'a dyn MenuHost,
}
