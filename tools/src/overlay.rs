use std::path::{Path, PathBuf};

use settings_engine::{
    error::SettingsError,
    imgui::{centered_button, centered_text, fullscreen_window},
    keyvalue::{self, WriteMode},
    notification::{Notification, NotificationModal},
};

pub const WINDOW_TITLE: &str = "Easy Overlay Settings";
pub const OVERLAY_KEY: &str = "enable_experimental_overlay";

const TOGGLE_WIDTH: f32 = 90.0;
const SAVE_WIDTH: f32 = 140.0;

/// Session state of the overlay tool: the flag as last loaded or toggled.
/// Nothing is written until `save`.
pub struct OverlayTool {
    config_path: PathBuf,
    enabled: bool,
    modal: NotificationModal,
}

impl OverlayTool {
    /// Reads the current flag. A missing or unreadable file leaves the
    /// overlay disabled and returns a notification for the user.
    pub fn load(config_path: PathBuf) -> (Self, Option<Notification>) {
        let (enabled, notification) = match keyvalue::read_value(&config_path, OVERLAY_KEY) {
            Ok(value) => (value.as_deref() == Some("1"), None),
            Err(SettingsError::FileNotFound(path)) => (
                false,
                Some(Notification::warning(format!(
                    "Config file not found: {}\nCreating a new one.",
                    path.display()
                ))),
            ),
            Err(e) => (
                false,
                Some(Notification::error(format!(
                    "Failed to read config file: {}",
                    e
                ))),
            ),
        };

        let tool = OverlayTool {
            config_path,
            enabled,
            modal: NotificationModal::new(),
        };
        (tool, notification)
    }

    /// Loads the tool, queueing any load notification on its modal.
    pub fn open(config_path: PathBuf) -> Self {
        let (mut tool, notification) = OverlayTool::load(config_path);
        if let Some(notification) = notification {
            tool.modal.show(notification);
        }
        tool
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
    }

    pub fn value(&self) -> &'static str {
        if self.enabled {
            "1"
        } else {
            "0"
        }
    }

    pub fn save(&self) -> Notification {
        let result = keyvalue::write_value(
            &self.config_path,
            OVERLAY_KEY,
            self.value(),
            WriteMode::CreateIfMissing,
        );
        match result {
            Ok(()) => Notification::info("Overlay setting updated successfully!"),
            Err(e) => Notification::error(format!("Failed to update setting: {}", e)),
        }
    }

    pub fn draw(&mut self, ui: &imgui::Ui) {
        if let Some(_window) = fullscreen_window(ui, WINDOW_TITLE) {
            ui.dummy([0.0, 6.0]);
            centered_text(ui, "Enable Experimental Overlay:");
            ui.dummy([0.0, 4.0]);

            let toggle_label = if self.enabled { "ON###toggle" } else { "OFF###toggle" };
            if centered_button(ui, toggle_label, TOGGLE_WIDTH) {
                self.toggle();
            }

            ui.dummy([0.0, 8.0]);
            if centered_button(ui, "Save Settings", SAVE_WIDTH) {
                let notification = self.save();
                self.modal.show(notification);
            }

            self.modal.draw(ui);
        }
    }
}
