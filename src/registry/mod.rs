
use crate::extensions::string::ToChoiceKey;
use crate::modules::AttackModule;

/// What selecting a menu row does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Hand the terminal to a loadable module.
    Launch(AttackModule),
    /// Placeholder for a module announced for a later release.
    Stub { module: AttackModule, release: u8 },
    Quit,
}

/// One row of the main menu.
#[derive(Debug, PartialEq, Eq)]
pub struct MenuEntry {
    key: &'static str,
    aliases: &'static [&'static str],
    label: &'static str,
    description: &'static str,
    action: MenuAction,
}

impl MenuEntry {
    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    pub fn action(&self) -> MenuAction {
        self.action
    }

    fn accepts(&self, key: &str) -> bool {
        self.key == key || self.aliases.contains(&key)
    }
}

// Row order is display order. New modules are new rows.
static MENU_TABLE: [MenuEntry; 5] = [
    MenuEntry {
        key: "0",
        aliases: &[],
        label: "SS7",
        description: "2G/3G Voice and SMS attacks",
        action: MenuAction::Launch(AttackModule::Ss7),
    },
    MenuEntry {
        key: "1",
        aliases: &[],
        label: "GTP",
        description: "3G/4G Data attacks",
        action: MenuAction::Launch(AttackModule::Gtp),
    },
    MenuEntry {
        key: "2",
        aliases: &[],
        label: "Diameter",
        description: "4G Data attacks",
        action: MenuAction::Stub {
            module: AttackModule::Diameter,
            release: 3,
        },
    },
    MenuEntry {
        key: "3",
        aliases: &[],
        label: "SIP",
        description: "4G IMS attacks",
        action: MenuAction::Stub {
            module: AttackModule::Sip,
            release: 4,
        },
    },
    MenuEntry {
        key: "q",
        aliases: &["quit", "exit"],
        label: "Quit",
        description: "Exit SigPloit",
        action: MenuAction::Quit,
    },
];

static REGISTRY: ModuleRegistry = ModuleRegistry { table: &MENU_TABLE };

/// Read-only view over the process-wide menu table.
#[derive(Debug)]
pub struct ModuleRegistry {
    table: &'static [MenuEntry],
}

impl ModuleRegistry {
    pub fn global() -> &'static ModuleRegistry {
        &REGISTRY
    }

    /// Exact match on the trimmed, lowercased input. Prefixes never match.
    pub fn resolve(&self, input: &str) -> Option<&'static MenuEntry> {
        let key = input.to_choice_key();
        self.table.iter().find(|entry| entry.accepts(&key))
    }

    pub fn entries(&self) -> &'static [MenuEntry] {
        self.table
    }

    /// Every accepted key, primary keys first in display order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        let primary = self.table.iter().map(|e| e.key);
        let aliases = self.table.iter().flat_map(|e| e.aliases.iter().copied());
        primary.chain(aliases)
    }
}
