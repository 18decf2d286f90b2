//! Walks a small guide tree with console-backed collaborators
//!
//! Every host seam is implemented against stdout, so the whole open
//! and click cycle can be watched without a game server:
//!
//! ```text
//! cargo run --example guide_tour
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

use anyhow::Result;
use parking_lot::Mutex;

use guide_menu::menu::chrome;
use guide_menu::{
    keys, ClickAction, ClickContext, ClickHandler, ClickOutcome, GroupKey, GuideContext,
    GuideGroup, GuideHistory, GuideMode, GuideService, ItemIcon, Localization, MainMenuGroup,
    MenuEntry, MenuHost, MenuLayout, MenuView, OpenHandler, Player, PlayerProfile, SimpleGroup,
    SoundEffect,
};

struct ConsolePlayer {
    name: String,
}

impl Player for ConsolePlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn play_sound(&self, effect: &SoundEffect) {
        println!("  [sound] {} (volume {}, pitch {})", effect.key, effect.volume, effect.pitch);
    }
}

#[derive(Default)]
struct ConsoleHistory {
    entries: Vec<(GroupKey, u32)>,
}

impl GuideHistory for ConsoleHistory {
    fn push(&mut self, group: &GroupKey, page: u32) {
        println!("  [history] push {} page {}", group, page);
        self.entries.push((group.clone(), page));
    }
}

#[derive(Default)]
struct ConsoleProfile {
    history: ConsoleHistory,
}

impl PlayerProfile for ConsoleProfile {
    fn history_mut(&mut self) -> &mut dyn GuideHistory {
        &mut self.history
    }
}

struct ConsoleGuide;

impl GuideService for ConsoleGuide {
    fn open_main_menu(&self, _profile: &mut dyn PlayerProfile, mode: GuideMode, page: u32) {
        println!("  [guide] open main menu ({:?}, page {})", mode, page);
    }

    fn open_group(
        &self,
        _profile: &mut dyn PlayerProfile,
        group: Arc<dyn GuideGroup>,
        mode: GuideMode,
        page: u32,
    ) {
        println!("  [guide] open {} ({:?}, page {})", group.key(), mode, page);
    }
}

struct ConsoleLocalization;

impl Localization for ConsoleLocalization {
    fn message(&self, _viewer: &dyn Player, key: &str) -> String {
        match key {
            keys::GUIDE_BACK => "Back".to_string(),
            other => other.to_string(),
        }
    }
}

#[derive(Default)]
struct ViewState {
    title: String,
    items: BTreeMap<usize, ItemIcon>,
    handlers: BTreeMap<usize, ClickHandler>,
    open_handlers: Vec<OpenHandler>,
}

struct ConsoleView {
    cols: usize,
    state: Arc<Mutex<ViewState>>,
}

impl MenuView for ConsoleView {
    fn set_item(&mut self, slot: usize, icon: ItemIcon) {
        self.state.lock().items.insert(slot, icon);
    }

    fn set_click_handler(&mut self, slot: usize, handler: ClickHandler) {
        self.state.lock().handlers.insert(slot, handler);
    }

    fn set_open_handler(&mut self, handler: OpenHandler) {
        self.state.lock().open_handlers.push(handler);
    }

    fn set_empty_slots_interactive(&mut self, interactive: bool) {
        println!("  [view] empty slots interactive: {}", interactive);
    }

    fn present(&mut self, player: &dyn Player) {
        let background = chrome::background();
        let state = self.state.lock();
        println!("\n=== {} (shown to {}) ===", state.title, player.name());
        let rows = state.items.keys().max().map_or(0, |last| last / self.cols + 1);
        for row in 0..rows {
            let mut line = String::new();
            for col in 0..self.cols {
                let slot = row * self.cols + col;
                let glyph = match state.items.get(&slot) {
                    Some(icon) if icon == &background => '#',
                    Some(icon) if icon.material == "arrow" => '<',
                    Some(_) => 'o',
                    None => '.',
                };
                line.push(glyph);
            }
            println!("  {}", line);
        }
        for (slot, icon) in state.items.iter() {
            if icon != &background {
                println!("  slot {:2}: {}", slot, icon.display_name);
            }
        }
        drop(state);
        let open_handlers: Vec<OpenHandler> = self.state.lock().open_handlers.clone();
        for handler in &open_handlers {
            handler(player);
        }
    }
}

/// Remembers every view it created so clicks can be replayed later
struct ConsoleHost {
    cols: usize,
    views: Mutex<Vec<Arc<Mutex<ViewState>>>>,
}

impl ConsoleHost {
    fn new(cols: usize) -> Self {
        Self {
            cols,
            views: Mutex::new(Vec::new()),
        }
    }

    fn click(
        &self,
        player: &dyn Player,
        profile: &mut dyn PlayerProfile,
        guide: &dyn GuideService,
        slot: usize,
        click: ClickAction,
    ) {
        let handler = self
            .views
            .lock()
            .last()
            .and_then(|state| state.lock().handlers.get(&slot).cloned());
        match handler {
            Some(handler) => {
                println!("\n{} clicks slot {} ({:?})", player.name(), slot, click);
                let mut ctx = ClickContext {
                    player,
                    profile,
                    mode: GuideMode::Survival,
                    guide,
                    slot,
                    click,
                };
                let outcome = handler(&mut ctx);
                println!("  [view] outcome: {:?}", outcome);
            }
            None => println!("\nslot {} has no handler", slot),
        }
    }
}

impl MenuHost for ConsoleHost {
    fn create_menu(&self, title: &str) -> Box<dyn MenuView> {
        let state = Arc::new(Mutex::new(ViewState {
            title: title.to_string(),
            ..ViewState::default()
        }));
        self.views.lock().push(Arc::clone(&state));
        Box::new(ConsoleView {
            cols: self.cols,
            state,
        })
    }
}

fn build_guide(layout: MenuLayout) -> Result<MainMenuGroup> {
    let machines = Arc::new(SimpleGroup::new(
        GroupKey::new("demo", "machines")?,
        "Machines",
        ItemIcon::new("furnace", "Machines").with_lore("Ore processing and power"),
    ));
    let tools = Arc::new(SimpleGroup::new(
        GroupKey::new("demo", "tools")?,
        "Tools",
        ItemIcon::new("iron_pickaxe", "Tools"),
    ));
    let group = MainMenuGroup::with_layout(
        GroupKey::new("demo", "main")?,
        "Demo Guide",
        ItemIcon::new("chest", "Demo Guide"),
        layout,
    )
    .add_group(machines)
    .add_group(tools)
    .add_entry(MenuEntry::action(
        ItemIcon::new("paper", "Changelog").with_lore("What changed lately"),
        |click: &mut ClickContext<'_>| {
            println!("  [action] {} read the changelog", click.player.name());
            ClickOutcome::Deny
        },
    ));
    Ok(group)
}

fn main() -> Result<()> {
    env_logger::init();

    let layout: MenuLayout = toml::from_str(
        r#"
        rows = 6
        cols = 9
        header = [0, 1, 2, 3, 4, 5, 6, 7, 8]
        footer = [45, 46, 47, 48, 49, 50, 51, 52, 53]
        back_slot = 1
        "#,
    )?;
    log::info!(
        "Loaded a {}x{} layout with room for {} entries",
        layout.rows(),
        layout.cols(),
        layout.content_capacity()
    );

    let host = ConsoleHost::new(layout.cols());
    let group = build_guide(layout)?;
    let player = ConsolePlayer {
        name: "steve".to_string(),
    };
    let mut profile = ConsoleProfile::default();
    let guide = ConsoleGuide;
    let localization = ConsoleLocalization;

    let mut ctx = GuideContext {
        player: &player,
        profile: &mut profile,
        mode: GuideMode::Survival,
        guide: &guide,
        localization: &localization,
        menus: &host,
    };
    group.open(&mut ctx);

    // Replay a few clicks against the view the host just showed
    host.click(&player, &mut profile, &guide, 9, ClickAction::Left);
    host.click(&player, &mut profile, &guide, 11, ClickAction::Left);
    host.click(&player, &mut profile, &guide, 1, ClickAction::Left);
    host.click(&player, &mut profile, &guide, 0, ClickAction::Left);

    println!(
        "\nvisited {} screens according to the history stack",
        profile.history.entries.len()
    );
    Ok(())
}
