use settings_engine::{
    browser,
    error::SettingsError,
    imgui::{center_next_item, centered_button, centered_text, fullscreen_window},
    keyvalue::{self, WriteMode},
    languages::{Language, LanguageTable},
    locator::LanguagePaths,
    notification::{Notification, NotificationModal},
};

pub const WINDOW_TITLE: &str = "Language Changer";
pub const LANGUAGE_KEY: &str = "language";
pub const SUPPORT_URL: &str = "https://gamedrive.org/discord";

const COMBO_WIDTH: f32 = 300.0;
const BUTTON_WIDTH: f32 = 180.0;

/// Session state of the language tool.
pub struct LanguageTool {
    paths: LanguagePaths,
    table: LanguageTable,
    selected: Option<usize>,
    modal: NotificationModal,
}

impl LanguageTool {
    /// Loads the offered languages and preselects the one currently stored
    /// in the settings file, "English" if it can't be determined. A read
    /// failure other than a missing file returns a notification for the user.
    pub fn load(paths: LanguagePaths) -> (Self, Option<Notification>) {
        let table = LanguageTable::load(&paths.supported_languages_file);
        let (current_code, notification) =
            match keyvalue::read_value(&paths.settings_file, LANGUAGE_KEY) {
                Ok(code) => (code, None),
                Err(SettingsError::FileNotFound(path)) => {
                    log::warn!("Config file not found: {}", path.display());
                    (None, None)
                }
                Err(e) => (
                    None,
                    Some(Notification::error(format!(
                        "Error reading language setting: {}",
                        e
                    ))),
                ),
            };

        let current_name = table.display_name_for(current_code.as_deref());
        let selected = table.position_of_name(current_name);
        log::info!(
            "current language: {} ({})",
            current_name,
            current_code.as_deref().unwrap_or("not set")
        );

        let tool = LanguageTool {
            paths,
            table,
            selected,
            modal: NotificationModal::new(),
        };
        (tool, notification)
    }

    /// Loads the tool, queueing any load notification on its modal.
    pub fn open(paths: LanguagePaths) -> Self {
        let (mut tool, notification) = LanguageTool::load(paths);
        if let Some(notification) = notification {
            tool.modal.show(notification);
        }
        tool
    }

    pub fn paths(&self) -> &LanguagePaths {
        &self.paths
    }

    pub fn table(&self) -> &LanguageTable {
        &self.table
    }

    pub fn select(&mut self, index: usize) {
        if index < self.table.len() {
            self.selected = Some(index);
        }
    }

    pub fn selected_language(&self) -> Option<&Language> {
        self.selected.and_then(|index| self.table.get(index))
    }

    /// Writes the selected language code. The settings file must already exist.
    pub fn apply(&self) -> Notification {
        let Some(language) = self.selected_language() else {
            return Notification::warning("Please select a language.");
        };

        let result = keyvalue::write_value(
            &self.paths.settings_file,
            LANGUAGE_KEY,
            language.code,
            WriteMode::ExistingOnly,
        );
        match result {
            Ok(()) => Notification::info(format!(
                "Language changed to '{}'!\nRestart your game to apply changes.",
                language.name
            )),
            Err(SettingsError::FileNotFound(path)) => Notification::warning(format!(
                "Config file not found: {}\nSkipping language update.",
                path.display()
            )),
            Err(e) => Notification::error(format!("Failed to update language: {}", e)),
        }
    }

    pub fn open_support_link(&self) -> Option<Notification> {
        browser::open_url(SUPPORT_URL)
            .err()
            .map(|e| Notification::error(format!("Failed to open {}: {}", SUPPORT_URL, e)))
    }

    pub fn draw(&mut self, ui: &imgui::Ui) {
        if let Some(_window) = fullscreen_window(ui, WINDOW_TITLE) {
            ui.dummy([0.0, 6.0]);
            centered_text(ui, "Select Game Language");
            ui.dummy([0.0, 2.0]);

            self.draw_language_combo(ui);

            ui.dummy([0.0, 8.0]);
            if centered_button(ui, "Apply Language", BUTTON_WIDTH) {
                let notification = self.apply();
                self.modal.show(notification);
            }

            ui.dummy([0.0, 4.0]);
            if centered_button(ui, "Support on Discord", BUTTON_WIDTH) {
                if let Some(notification) = self.open_support_link() {
                    self.modal.show(notification);
                }
            }

            ui.dummy([0.0, 8.0]);
            centered_text(ui, "Powered by GameDrive.Org");

            self.modal.draw(ui);
        }
    }

    fn draw_language_combo(&mut self, ui: &imgui::Ui) {
        let preview = self.selected_language().map(|l| l.name).unwrap_or("");
        let mut clicked = None;

        center_next_item(ui, COMBO_WIDTH);
        let _width = ui.push_item_width(COMBO_WIDTH);
        if let Some(_combo) = ui.begin_combo("##language", preview) {
            for (index, language) in self.table.iter().enumerate() {
                let is_selected = self.selected == Some(index);
                if ui
                    .selectable_config(language.name)
                    .selected(is_selected)
                    .build()
                {
                    clicked = Some(index);
                }
                if is_selected {
                    ui.set_item_default_focus();
                }
            }
        }

        if let Some(index) = clicked {
            self.select(index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use settings_engine::{locator::locate_language_paths, notification::NotificationKind};
    use std::path::{Path, PathBuf};
    use tempfile::{tempdir, TempDir};

    fn write_file(dir: &Path, relative_path: &str, contents: &str) -> PathBuf {
        let path = dir.join(relative_path);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, contents).unwrap();
        path
    }

    fn tool_in(dir: &TempDir) -> LanguageTool {
        let (tool, notification) = LanguageTool::load(locate_language_paths(dir.path()));
        assert_eq!(notification, None);
        tool
    }

    #[test]
    fn preselects_stored_language() {
        let dir = tempdir().unwrap();
        write_file(dir.path(), "steam_settings/configs.user.ini", "language=koreana\n");

        let tool = tool_in(&dir);

        assert_eq!(tool.selected_language().map(|l| l.name), Some("Korean"));
    }

    #[parameterized(contents = {
        "account_name=gamer\n",
        "language=klingon\n",
    })]
    fn defaults_to_english_without_known_language(contents: &str) {
        let dir = tempdir().unwrap();
        write_file(dir.path(), "steam_settings/configs.user.ini", contents);

        let tool = tool_in(&dir);

        assert_eq!(tool.selected_language().map(|l| l.name), Some("English"));
    }

    #[test]
    fn defaults_to_english_without_settings_file() {
        let dir = tempdir().unwrap();

        let tool = tool_in(&dir);

        assert_eq!(tool.selected_language().map(|l| l.code), Some("english"));
    }

    #[test]
    fn supported_languages_file_restricts_choices() {
        let dir = tempdir().unwrap();
        write_file(dir.path(), "steam_settings/supported_languages.txt", "english\ngerman\n");

        let tool = tool_in(&dir);

        let names: Vec<&str> = tool.table().iter().map(|l| l.name).collect();
        assert_eq!(names, vec!["English", "German"]);
    }

    #[test]
    fn nothing_is_selected_when_english_is_filtered_out() {
        let dir = tempdir().unwrap();
        write_file(dir.path(), "steam_settings/supported_languages.txt", "french\n");

        let tool = tool_in(&dir);

        assert_eq!(tool.selected_language(), None);
        assert_eq!(tool.apply().kind, NotificationKind::Warning);
    }

    #[test]
    fn apply_writes_selected_code() {
        let dir = tempdir().unwrap();
        let path = write_file(dir.path(), 
            "steam_settings/configs.user.ini",
            "[user::general]\nlanguage=english\naccount_name=gamer\n",
        );
        let mut tool = tool_in(&dir);

        let index = tool.table().position_of_name("Spanish-Latin America").unwrap();
        tool.select(index);
        let notification = tool.apply();

        assert_eq!(notification.kind, NotificationKind::Info);
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "[user::general]\nlanguage=latam\naccount_name=gamer\n"
        );
    }

    #[test]
    fn apply_appends_language_when_absent() {
        let dir = tempdir().unwrap();
        let path = write_file(dir.path(), "steam_settings/configs.user.ini", "account_name=gamer\n");
        let tool = tool_in(&dir);

        tool.apply();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "account_name=gamer\nlanguage=english\n"
        );
    }

    #[test]
    fn apply_skips_missing_settings_file() {
        let dir = tempdir().unwrap();
        let tool = tool_in(&dir);

        let notification = tool.apply();

        assert_eq!(notification.kind, NotificationKind::Warning);
        assert!(notification.message.ends_with("Skipping language update."));
        assert!(!tool.paths().settings_file.exists());
    }

    #[test]
    fn side_config_redirects_settings_file() {
        let dir = tempdir().unwrap();
        write_file(dir.path(), "language_changer.ini", "[Settings]\nconfig_path=custom\n");
        let path = write_file(dir.path(), "custom/configs.user.ini", "language=german\n");
        let mut tool = tool_in(&dir);

        assert_eq!(tool.selected_language().map(|l| l.name), Some("German"));
        tool.select(tool.table().position_of_name("Thai").unwrap());
        tool.apply();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "language=thai\n");
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let dir = tempdir().unwrap();
        let mut tool = tool_in(&dir);

        tool.select(1000);

        assert_eq!(tool.selected_language().map(|l| l.name), Some("English"));
    }

    #[test]
    fn unreadable_settings_file_reports_error_and_defaults_to_english() {
        let dir = tempdir().unwrap();
        // a directory in place of the file makes reading fail with something other than "not found"
        std::fs::create_dir_all(dir.path().join("steam_settings/configs.user.ini")).unwrap();

        let (tool, notification) = LanguageTool::load(locate_language_paths(dir.path()));

        let notification = notification.unwrap();
        assert_eq!(notification.kind, NotificationKind::Error);
        assert!(notification.message.starts_with("Error reading language setting"));
        assert_eq!(tool.selected_language().map(|l| l.name), Some("English"));
    }

    #[test]
    fn failed_apply_reports_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("steam_settings/configs.user.ini");
        std::fs::create_dir_all(&path).unwrap();
        let (tool, _) = LanguageTool::load(locate_language_paths(dir.path()));

        let notification = tool.apply();

        assert_eq!(notification.kind, NotificationKind::Error);
        assert!(notification.message.starts_with("Failed to update language"));
        assert!(path.is_dir());
    }
}
