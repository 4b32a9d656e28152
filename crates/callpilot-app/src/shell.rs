//! Dashboard shell: active section, theme flag and time range.

use serde::{Deserialize, Serialize};

/// Top-level section shown in the content area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Dashboard,
    Numbers,
    CallLogs,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Dashboard, Section::Numbers, Section::CallLogs];

    /// Page title, also used for the sidebar entry and breadcrumbs.
    pub fn title(&self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Numbers => "Numbers & Connectivity",
            Section::CallLogs => "Call Logs & Recordings",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Section::Dashboard => 0,
            Section::Numbers => 1,
            Section::CallLogs => 2,
        }
    }

    pub fn from_index(idx: usize) -> Option<Self> {
        Self::ALL.get(idx).copied()
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Reporting window for the dashboard section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TimeRange {
    #[serde(rename = "24h")]
    Last24Hours,
    #[default]
    #[serde(rename = "7days")]
    Last7Days,
    #[serde(rename = "30days")]
    Last30Days,
    #[serde(rename = "year")]
    Year,
}

impl TimeRange {
    pub const ALL: [TimeRange; 4] = [
        TimeRange::Last24Hours,
        TimeRange::Last7Days,
        TimeRange::Last30Days,
        TimeRange::Year,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::Last24Hours => "24 soat",
            TimeRange::Last7Days => "7 kun",
            TimeRange::Last30Days => "30 kun",
            TimeRange::Year => "Yil",
        }
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|r| r == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Shell-level view state. Lives as long as the authenticated session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShellState {
    pub active: Section,
    pub dark_mode: bool,
    pub time_range: TimeRange,
}

impl ShellState {
    pub fn new(dark_mode: bool, time_range: TimeRange) -> Self {
        Self {
            active: Section::default(),
            dark_mode,
            time_range,
        }
    }

    /// Switch sections. Returns the section being left, if any.
    pub fn switch_to(&mut self, section: Section) -> Option<Section> {
        if self.active == section {
            return None;
        }
        let left = self.active;
        self.active = section;
        Some(left)
    }

    pub fn toggle_theme(&mut self) {
        self.dark_mode = !self.dark_mode;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_cycles() {
        assert_eq!(Section::Dashboard.next(), Section::Numbers);
        assert_eq!(Section::CallLogs.next(), Section::Dashboard);
        assert_eq!(Section::Dashboard.previous(), Section::CallLogs);
        assert_eq!(Section::from_index(2), Some(Section::CallLogs));
        assert_eq!(Section::from_index(3), None);
    }

    #[test]
    fn test_time_range_defaults_to_seven_days() {
        assert_eq!(TimeRange::default(), TimeRange::Last7Days);
        assert_eq!(TimeRange::Year.next(), TimeRange::Last24Hours);
        assert_eq!(TimeRange::Last24Hours.previous(), TimeRange::Year);
    }

    #[test]
    fn test_switch_to_reports_left_section() {
        let mut shell = ShellState::default();
        assert_eq!(shell.switch_to(Section::Dashboard), None);
        assert_eq!(shell.switch_to(Section::CallLogs), Some(Section::Dashboard));
        assert_eq!(shell.active, Section::CallLogs);
    }
}
