use std::sync::Arc;

use serde::{Serialize, Deserialize};

use crate::guide::group::GuideGroup;
use crate::player::PlayerProfile;

/// Which ruleset the guide was opened under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GuideMode {
    /// Normal progression
    Survival,
    /// Creative-style access to everything
    Cheat,
}

/// Navigation entry points of the host's guide
///
/// Click handlers route all "go somewhere else" requests through this
/// trait instead of reaching into global state. The host decides what
/// actually opens; the menu only states intent.
pub trait GuideService {
    /// Open the guide's top-level menu
    fn open_main_menu(&self, profile: &mut dyn PlayerProfile, mode: GuideMode, page: u32);

    /// Open a specific group at the given page
    fn open_group(
        &self,
        profile: &mut dyn PlayerProfile,
        group: Arc<dyn GuideGroup>,
        mode: GuideMode,
        page: u32,
    );
}
