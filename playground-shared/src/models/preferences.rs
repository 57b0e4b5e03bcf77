use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Colour scheme applied to the document element.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err("unknown theme"),
        }
    }
}

/// UI preferences kept for the lifetime of the page. Not persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UiPreferences {
    pub theme: Theme,
    pub show_hints: bool,
    pub global_clicks: u64,
}

impl Default for UiPreferences {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            show_hints: true,
            global_clicks: 0,
        }
    }
}

impl UiPreferences {
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    pub fn toggle_hints(&mut self) {
        self.show_hints = !self.show_hints;
    }

    pub fn increment_clicks(&mut self) {
        self.global_clicks = self.global_clicks.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn defaults_match_first_load() {
        let prefs = UiPreferences::default();
        assert_eq!(prefs.theme, Theme::Light);
        assert!(prefs.show_hints);
        assert_eq!(prefs.global_clicks, 0);
    }

    #[test_case(Theme::Light ; "from light")]
    #[test_case(Theme::Dark ; "from dark")]
    fn toggling_theme_twice_restores_it(start: Theme) {
        let mut prefs = UiPreferences {
            theme: start,
            ..UiPreferences::default()
        };
        prefs.toggle_theme();
        assert_ne!(prefs.theme, start);
        prefs.toggle_theme();
        assert_eq!(prefs.theme, start);
    }

    #[test_case(0, 0)]
    #[test_case(0, 1)]
    #[test_case(7, 25)]
    #[test_case(1_000, 333)]
    fn incrementing_n_times_adds_exactly_n(start: u64, n: u64) {
        let mut prefs = UiPreferences {
            global_clicks: start,
            ..UiPreferences::default()
        };
        for _ in 0..n {
            prefs.increment_clicks();
        }
        assert_eq!(prefs.global_clicks, start + n);
    }

    #[test]
    fn click_counter_saturates() {
        let mut prefs = UiPreferences {
            global_clicks: u64::MAX,
            ..UiPreferences::default()
        };
        prefs.increment_clicks();
        assert_eq!(prefs.global_clicks, u64::MAX);
    }

    #[test]
    fn toggling_hints_leaves_other_fields_alone() {
        let mut prefs = UiPreferences::default();
        prefs.toggle_hints();
        assert!(!prefs.show_hints);
        assert_eq!(prefs.theme, Theme::Light);
        assert_eq!(prefs.global_clicks, 0);
    }

    #[test]
    fn theme_parses_its_own_display() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(theme.to_string().parse::<Theme>(), Ok(theme));
        }
        assert!("system".parse::<Theme>().is_err());
    }
}
