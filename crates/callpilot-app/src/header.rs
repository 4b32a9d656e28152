//! Header menus: notifications and profile.

use callpilot_core::Notification;

/// Static profile shown in the header menu.
pub const PROFILE_NAME: &str = "John Doe";
pub const PROFILE_ROLE: &str = "Admin";
pub const PROFILE_EMAIL: &str = "john@example.com";

#[derive(Debug, Clone, Default)]
pub struct HeaderState {
    pub show_notifications: bool,
    pub show_profile_menu: bool,
    pub language: String,
    /// Session copy of the seeded notifications; read markers live here.
    pub notifications: Vec<Notification>,
}

impl HeaderState {
    pub fn new(language: impl Into<String>, notifications: Vec<Notification>) -> Self {
        Self {
            show_notifications: false,
            show_profile_menu: false,
            language: language.into(),
            notifications,
        }
    }

    /// Opening one menu closes the other.
    pub fn toggle_notifications(&mut self) {
        self.show_notifications = !self.show_notifications;
        if self.show_notifications {
            self.show_profile_menu = false;
        }
    }

    pub fn toggle_profile_menu(&mut self) {
        self.show_profile_menu = !self.show_profile_menu;
        if self.show_profile_menu {
            self.show_notifications = false;
        }
    }

    pub fn close_menus(&mut self) {
        self.show_notifications = false;
        self.show_profile_menu = false;
    }

    pub fn any_menu_open(&self) -> bool {
        self.show_notifications || self.show_profile_menu
    }

    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| n.unread).count()
    }

    pub fn mark_all_read(&mut self) {
        for n in &mut self.notifications {
            n.unread = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header() -> HeaderState {
        HeaderState::new(
            "uz",
            vec![
                Notification {
                    id: 1,
                    title: "Missed Call".into(),
                    time: "5 min ago".into(),
                    unread: true,
                },
                Notification {
                    id: 2,
                    title: "New Number Active".into(),
                    time: "1 hour ago".into(),
                    unread: false,
                },
            ],
        )
    }

    #[test]
    fn test_menus_are_exclusive() {
        let mut h = header();
        h.toggle_notifications();
        assert!(h.show_notifications);
        h.toggle_profile_menu();
        assert!(h.show_profile_menu);
        assert!(!h.show_notifications);
        h.close_menus();
        assert!(!h.any_menu_open());
    }

    #[test]
    fn test_mark_all_read() {
        let mut h = header();
        assert_eq!(h.unread_count(), 1);
        h.mark_all_read();
        assert_eq!(h.unread_count(), 0);
    }
}
