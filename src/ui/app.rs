use crate::config::ConfigStore;
use crate::context::RitualContext;
use crate::remote::{RemoteError, RitualClient};
use crate::ui::bonding::BondingScreen;
use crate::ui::footprint::FootprintPanel;
use crate::ui::lab::LabScreen;
use crate::ui::logs::LogViewerScreen;
use crate::ui::profile::ProfileScreen;
use crate::ui::reflection::ReflectionScreen;
use crate::ui::riddle::RiddleScreen;
use crate::ui::streak::{DeliveryTime, StreakScreen};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Ritual,
    Lab,
    Streak,
    Riddle,
    Profile,
    Bonding,
}

impl Tab {
    pub const ALL: [Tab; 6] = [
        Tab::Ritual,
        Tab::Lab,
        Tab::Streak,
        Tab::Riddle,
        Tab::Profile,
        Tab::Bonding,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Ritual => "The 19",
            Tab::Lab => "The Lab",
            Tab::Streak => "Echo & Streak",
            Tab::Riddle => "The Riddle",
            Tab::Profile => "Profile",
            Tab::Bonding => "Bond",
        }
    }

    fn position(&self) -> usize {
        match self {
            Tab::Ritual => 0,
            Tab::Lab => 1,
            Tab::Streak => 2,
            Tab::Riddle => 3,
            Tab::Profile => 4,
            Tab::Bonding => 5,
        }
    }

    pub fn next(&self) -> Tab {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> Tab {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Application root.
///
/// Builds the API client and the shared ritual context once and injects
/// them into every screen it creates.
pub struct App {
    config: ConfigStore,
    client: RitualClient,
    context: RitualContext,
    tab: Tab,
}

impl App {
    pub fn new(config: ConfigStore) -> Result<Self, RemoteError> {
        let current = config.get();
        let client = RitualClient::new(&current.api)?;
        let context = match current.ritual.bond_id {
            Some(bond_id) => RitualContext::with_bond(bond_id),
            None => RitualContext::new(),
        };

        Ok(Self {
            config,
            client,
            context,
            tab: Tab::default(),
        })
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    pub fn next_tab(&mut self) {
        self.tab = self.tab.next();
    }

    pub fn previous_tab(&mut self) {
        self.tab = self.tab.previous();
    }

    pub fn config(&self) -> &ConfigStore {
        &self.config
    }

    pub fn client(&self) -> &RitualClient {
        &self.client
    }

    pub fn context(&self) -> &RitualContext {
        &self.context
    }

    pub fn reflection_screen(&self, endearments: Vec<String>) -> ReflectionScreen {
        ReflectionScreen::new(
            self.client.clone(),
            self.context.clone(),
            endearments,
            self.config.get().ritual.card_count,
        )
    }

    pub fn streak_screen(&self) -> StreakScreen {
        let default_time = DeliveryTime::parse(&self.config.get().ritual.default_delivery_time)
            .unwrap_or_default();
        StreakScreen::new(self.client.clone(), self.context.clone(), default_time)
    }

    pub fn riddle_screen(&self) -> RiddleScreen {
        RiddleScreen::new(self.client.clone(), self.context.clone())
    }

    pub fn bonding_screen(&self) -> BondingScreen {
        BondingScreen::new(self.client.clone(), self.context.clone())
    }

    pub fn lab_screen(&self) -> LabScreen {
        LabScreen::new(self.client.clone())
    }

    pub fn profile_screen(&self) -> ProfileScreen {
        ProfileScreen::new(self.client.clone(), self.context.clone())
    }

    /// Error log overlay, available from every tab.
    pub fn log_viewer(&self) -> LogViewerScreen {
        LogViewerScreen::new(self.client.clone())
    }

    /// Resource usage overlay, available from every tab.
    pub fn footprint_panel(&self) -> FootprintPanel {
        FootprintPanel::new(self.client.clone())
    }
}
