use std::fmt;
use std::sync::Arc;

use crate::guide::group::GuideGroup;
use crate::icon::ItemIcon;
use crate::menu::view::{ClickContext, ClickHandler, ClickOutcome};

/// One registered tile of a menu group
///
/// An entry is either a link to a nested group, which supplies its own
/// icon and navigation, or a direct action tile with a fixed icon and
/// handler. There is no way to register a tile with a missing half.
#[derive(Clone)]
pub enum MenuEntry {
    /// Link to a nested navigable group
    Group(Arc<dyn GuideGroup>),
    /// Fixed tile with its click action
    Action {
        icon: ItemIcon,
        on_click: ClickHandler,
    },
}

impl MenuEntry {
    /// Entry linking to a nested group
    pub fn group(group: Arc<dyn GuideGroup>) -> Self {
        MenuEntry::Group(group)
    }

    /// Entry showing `icon` and running `on_click` when clicked
    pub fn action<F>(icon: ItemIcon, on_click: F) -> Self
    where
        F: Fn(&mut ClickContext<'_>) -> ClickOutcome + Send + Sync + 'static,
    {
        MenuEntry::Action {
            icon,
            on_click: Arc::new(on_click),
        }
    }
}

impl fmt::Debug for MenuEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuEntry::Group(group) => f.debug_tuple("Group").field(&group.key().to_string()).finish(),
            MenuEntry::Action { icon, .. } => f
                .debug_struct("Action")
                .field("icon", &icon.display_name)
                .finish_non_exhaustive(),
        }
    }
}
