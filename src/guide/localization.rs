use crate::player::Player;

/// Resolves message keys into player-facing text
pub trait Localization {
    /// Look up `key` in the viewer's language
    fn message(&self, viewer: &dyn Player, key: &str) -> String;
}

/// Message keys this crate asks a `Localization` to resolve
pub mod keys {
    /// Label of the back control in the menu chrome
    pub const GUIDE_BACK: &str = "guide.back.guide";
}
