use std::sync::Arc;

use crate::guide::context::GuideContext;
use crate::guide::group::GuideGroup;
use crate::guide::key::GroupKey;
use crate::guide::localization::keys;
use crate::guide::service::GuideMode;
use crate::icon::ItemIcon;
use crate::menu::chrome;
use crate::menu::entry::MenuEntry;
use crate::menu::layout::MenuLayout;
use crate::menu::view::{ClickContext, ClickOutcome, MenuView};
use crate::player::{Player, PlayerProfile};

/// Top-level menu group of an addon's guide section
///
/// Holds an ordered list of entries and renders them into a chest-style
/// grid: decorative chrome around the edge, a back control, and one
/// tile per entry in the content area. Entries are registered up front
/// with the chaining `add_*` calls; the group is immutable once built.
#[derive(Debug)]
pub struct MainMenuGroup {
    key: GroupKey,
    name: String,
    icon: ItemIcon,
    layout: MenuLayout,
    entries: Vec<MenuEntry>,
}

impl MainMenuGroup {
    /// Group using the classic 6x9 chest layout
    pub fn new(key: GroupKey, name: impl Into<String>, icon: ItemIcon) -> Self {
        Self::with_layout(key, name, icon, MenuLayout::standard())
    }

    /// Group using a custom layout
    pub fn with_layout(
        key: GroupKey,
        name: impl Into<String>,
        icon: ItemIcon,
        layout: MenuLayout,
    ) -> Self {
        Self {
            key,
            name: name.into(),
            icon,
            layout,
            entries: Vec::new(),
        }
    }

    /// Append a nested group; entries appear in registration order
    pub fn add_group(mut self, group: Arc<dyn GuideGroup>) -> Self {
        self.entries.push(MenuEntry::group(group));
        self
    }

    /// Append a pre-built entry; entries appear in registration order
    pub fn add_entry(mut self, entry: MenuEntry) -> Self {
        self.entries.push(entry);
        self
    }

    pub fn layout(&self) -> &MenuLayout {
        &self.layout
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    /// Build the menu for one viewer and hand it to the host to show
    pub fn open(&self, ctx: &mut GuideContext<'_>) {
        log::debug!("Opening menu group {} for {}", self.key, ctx.player.name());
        let mut view = ctx.menus.create_menu(&self.name);
        self.populate(ctx, view.as_mut());
        view.present(ctx.player);
    }

    fn populate(&self, ctx: &mut GuideContext<'_>, view: &mut dyn MenuView) {
        for &slot in self.layout.header() {
            view.set_item(slot, chrome::background());
            view.set_click_handler(slot, chrome::empty_click_handler());
        }
        for &slot in self.layout.footer() {
            view.set_item(slot, chrome::background());
            view.set_click_handler(slot, chrome::empty_click_handler());
        }
        view.set_empty_slots_interactive(false);
        view.set_open_handler(chrome::page_turn_cue());

        // Back control replaces the background on its chrome slot
        let back_label = ctx.localization.message(ctx.player, keys::GUIDE_BACK);
        view.set_item(self.layout.back_slot(), chrome::back_button(back_label));
        let origin = self.key.clone();
        view.set_click_handler(
            self.layout.back_slot(),
            Arc::new(move |click: &mut ClickContext<'_>| {
                click.profile.history_mut().push(&origin, 1);
                let guide = click.guide;
                guide.open_main_menu(click.profile, click.mode, 1);
                ClickOutcome::Deny
            }),
        );

        let capacity = self.layout.content_capacity();
        if self.entries.len() > capacity {
            log::warn!(
                "Menu group {} holds {} entries but its layout fits {}; the rest are not shown",
                self.key,
                self.entries.len(),
                capacity
            );
        }
        for (index, entry) in self.entries.iter().enumerate() {
            let slot = match self.layout.content_slot(index) {
                Some(slot) => slot,
                None => break,
            };
            match entry {
                MenuEntry::Group(group) => {
                    view.set_item(slot, group.icon(ctx.player));
                    let origin = self.key.clone();
                    let target = Arc::clone(group);
                    view.set_click_handler(
                        slot,
                        Arc::new(move |click: &mut ClickContext<'_>| {
                            click.profile.history_mut().push(&origin, 1);
                            let guide = click.guide;
                            guide.open_group(click.profile, Arc::clone(&target), click.mode, 1);
                            ClickOutcome::Deny
                        }),
                    );
                }
                MenuEntry::Action { icon, on_click } => {
                    view.set_item(slot, icon.clone());
                    view.set_click_handler(slot, Arc::clone(on_click));
                }
            }
        }
    }
}

impl GuideGroup for MainMenuGroup {
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

#[cfg(test)]
mod tests {
    use super::*;

    fn icon(name: &str) -> ItemIcon {
        ItemIcon::new("book", name)
    }

    fn group() -> MainMenuGroup {
        MainMenuGroup::new(
            GroupKey::new("addon", "main").unwrap(),
            "Addon",
            icon("Addon"),
        )
    }

    #[test]
    fn chaining_preserves_interleaved_registration_order() {
        use crate::guide::SimpleGroup;

        let machines = Arc::new(SimpleGroup::new(
            GroupKey::new("addon", "machines").unwrap(),
            "Machines",
            icon("Machines"),
        ));
        let tools = Arc::new(SimpleGroup::new(
            GroupKey::new("addon", "tools").unwrap(),
            "Tools",
            icon("Tools"),
        ));
        let built = group()
            .add_group(machines)
            .add_entry(MenuEntry::action(icon("Info"), |_click: &mut ClickContext<'_>| {
                ClickOutcome::Deny
            }))
            .add_group(tools);

        let entries = built.entries();
        assert_eq!(entries.len(), 3);
        assert!(matches!(&entries[0], MenuEntry::Group(g) if g.key().key() == "machines"));
        assert!(matches!(&entries[1], MenuEntry::Action { .. }));
        assert!(matches!(&entries[2], MenuEntry::Group(g) if g.key().key() == "tools"));
    }

    #[test]
    fn new_group_starts_empty_on_the_standard_layout() {
        let built = group();
        assert!(built.entries().is_empty());
        assert_eq!(built.layout(), &MenuLayout::standard());
    }
}
