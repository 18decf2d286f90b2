use crate::guide::key::GroupKey;
use crate::guide::service::GuideMode;
use crate::icon::ItemIcon;
use crate::player::{Player, PlayerProfile};

/// A navigable group inside the guide
///
/// Implementations decide their own icon and visibility per viewer, so
/// the same group can look different to different players. Groups are
/// shared behind `Arc` and may be used from any thread the host runs
/// menus on.
pub trait GuideGroup: Send + Sync {
    /// Stable identity of this group
    fn key(&self) -> &GroupKey;

    /// Name used for menu titles
    fn name(&self) -> &str;

    /// Icon shown for this viewer
    fn icon(&self, viewer: &dyn Player) -> ItemIcon;

    /// Whether this viewer sees the group at all
    fn is_visible(
        &self,
        viewer: &dyn Player,
        profile: &dyn PlayerProfile,
        mode: GuideMode,
    ) -> bool;
}

/// Leaf group with a fixed icon, visible to everyone
#[derive(Debug, Clone)]
pub struct SimpleGroup {
    key: GroupKey,
    name: String,
    icon: ItemIcon,
}

impl SimpleGroup {
    pub fn new(key: GroupKey, name: impl Into<String>, icon: ItemIcon) -> Self {
        Self {
            key,
            name: name.into(),
            icon,
        }
    }
}

impl GuideGroup for SimpleGroup {
    fn key(&self) -> &GroupKey {
        &self.key
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn icon(&self, _viewer: &dyn Player) -> ItemIcon {
        self.icon.clone()
    }

    fn is_visible(
        &self,
        _viewer: &dyn Player,
        _profile: &dyn PlayerProfile,
        _mode: GuideMode,
    ) -> bool {
        true
    }
}
