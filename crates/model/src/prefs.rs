use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub const DEFAULT_INVENTORY_FILE: &str = "data/inventory.json";

/// Window geometry remembered between sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GuiSettings {
    pub window_width: u32,
    pub window_height: u32,
    pub window_x: Option<i32>,
    pub window_y: Option<i32>,
}

impl Default for GuiSettings {
    fn default() -> Self {
        Self {
            window_width: 740,
            window_height: 600,
            window_x: None,
            window_y: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPrefs {
    gui_settings: GuiSettings,
    inventory_file_path: PathBuf,
}

impl Default for UserPrefs {
    fn default() -> Self {
        Self {
            gui_settings: GuiSettings::default(),
            inventory_file_path: PathBuf::from(DEFAULT_INVENTORY_FILE),
        }
    }
}

impl UserPrefs {
    pub fn new(gui_settings: GuiSettings, inventory_file_path: impl Into<PathBuf>) -> Self {
        Self {
            gui_settings,
            inventory_file_path: inventory_file_path.into(),
        }
    }

    pub fn gui_settings(&self) -> &GuiSettings {
        &self.gui_settings
    }

    pub fn set_gui_settings(&mut self, settings: GuiSettings) {
        self.gui_settings = settings;
    }

    pub fn inventory_file_path(&self) -> &Path {
        &self.inventory_file_path
    }

    pub fn set_inventory_file_path(&mut self, path: impl Into<PathBuf>) {
        self.inventory_file_path = path.into();
    }
}
