pub mod guide;
pub mod icon;
pub mod menu;
pub mod player;
pub mod sound;

pub use guide::{
    keys, GroupKey, GuideContext, GuideGroup, GuideHistory, GuideMode, GuideService, KeyError,
    Localization, SimpleGroup,
};
pub use icon::ItemIcon;
pub use menu::{
    ClickAction, ClickContext, ClickHandler, ClickOutcome, LayoutError, MainMenuGroup, MenuEntry,
    MenuHost, MenuLayout, MenuView, OpenHandler,
};
pub use player::{Player, PlayerProfile};
pub use sound::SoundEffect;
