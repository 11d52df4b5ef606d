#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Warning,
    Error,
}

/// Outcome of a user action, shown to the user as a modal message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Notification {
            kind: NotificationKind::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Notification {
            kind: NotificationKind::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Notification {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self.kind {
            NotificationKind::Info => "Success",
            NotificationKind::Warning => "Warning",
            NotificationKind::Error => "Error",
        }
    }

    fn log(&self) {
        let message = self.message.replace('\n', " ");
        match self.kind {
            NotificationKind::Info => log::info!("{}", message),
            NotificationKind::Warning => log::warn!("{}", message),
            NotificationKind::Error => log::error!("{}", message),
        }
    }
}

/// Blocking message box drawn as an ImGui modal popup.
pub struct NotificationModal {
    current: Option<Notification>,
    needs_open: bool,
}

impl NotificationModal {
    pub fn new() -> Self {
        NotificationModal {
            current: None,
            needs_open: false,
        }
    }

    pub fn show(&mut self, notification: Notification) {
        notification.log();
        self.current = Some(notification);
        self.needs_open = true;
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn dismiss(&mut self) {
        self.current = None;
        self.needs_open = false;
    }

    pub fn draw(&mut self, ui: &imgui::Ui) {
        let (popup_id, message) = match &self.current {
            Some(notification) => (
                format!("{}###notification", notification.title()),
                notification.message.clone(),
            ),
            None => return,
        };

        if self.needs_open {
            ui.open_popup(&popup_id);
            self.needs_open = false;
        }

        let mut dismissed = false;
        if let Some(_popup) = ui
            .modal_popup_config(&popup_id)
            .always_auto_resize(true)
            .movable(false)
            .begin_popup()
        {
            ui.text(&message);
            ui.spacing();
            if ui.button_with_size("OK", [120.0, 0.0]) {
                ui.close_current_popup();
                dismissed = true;
            }
        }

        if dismissed {
            self.dismiss();
        }
    }
}

impl Default for NotificationModal {
    fn default() -> Self {
        NotificationModal::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_match_notification_kind() {
        assert_eq!(Notification::info("ok").title(), "Success");
        assert_eq!(Notification::warning("hm").title(), "Warning");
        assert_eq!(Notification::error("no").title(), "Error");
    }

    #[test]
    fn modal_is_initially_empty() {
        let modal = NotificationModal::new();
        assert_eq!(modal.current(), None);
    }

    #[test]
    fn shown_notification_replaces_previous_until_dismissed() {
        let mut modal = NotificationModal::new();

        modal.show(Notification::warning("first"));
        modal.show(Notification::error("second"));
        assert_eq!(modal.current(), Some(&Notification::error("second")));

        modal.dismiss();
        assert_eq!(modal.current(), None);
    }
}
