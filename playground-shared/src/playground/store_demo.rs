//! Nested store updated one path at a time.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProfileTheme {
    #[default]
    Light,
    Dark,
    System,
}

impl ProfileTheme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileSettings {
    pub notifications: bool,
    pub theme: ProfileTheme,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    pub settings: ProfileSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoreUser {
    pub profile: Profile,
    pub scores: Vec<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoreItem {
    pub id: u64,
    pub name: String,
    pub active: bool,
}

/// Root of the store demo.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlaygroundStore {
    pub user: StoreUser,
    pub items: Vec<StoreItem>,
}

impl Default for PlaygroundStore {
    fn default() -> Self {
        Self {
            user: StoreUser {
                profile: Profile {
                    first_name: "Jane".to_string(),
                    last_name: "Doe".to_string(),
                    settings: ProfileSettings {
                        notifications: true,
                        theme: ProfileTheme::Light,
                    },
                },
                scores: vec![85, 92, 78],
            },
            items: vec![
                StoreItem {
                    id: 1,
                    name: "Item A".to_string(),
                    active: true,
                },
                StoreItem {
                    id: 2,
                    name: "Item B".to_string(),
                    active: false,
                },
                StoreItem {
                    id: 3,
                    name: "Item C".to_string(),
                    active: true,
                },
            ],
        }
    }
}

/// A single targeted update. Each variant touches exactly one path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorePatch {
    /// `user.profile.first_name = name`
    SetFirstName(String),
    /// `user.profile.settings.theme = theme`
    SetProfileTheme(ProfileTheme),
    /// `user.profile.settings.notifications = !notifications`
    ToggleNotifications,
    /// `user.scores[index] += by`; out-of-range indices are ignored.
    BumpScore { index: usize, by: i64 },
    /// `user.scores.push(score)`
    PushScore(i64),
    /// Flip `active` on every item with this id.
    ToggleItem { id: u64 },
    /// Append a new active item named after its position, with an id one
    /// past the largest in use.
    AddItem,
}

impl PlaygroundStore {
    pub fn apply(&mut self, patch: StorePatch) {
        match patch {
            StorePatch::SetFirstName(name) => self.user.profile.first_name = name,
            StorePatch::SetProfileTheme(theme) => self.user.profile.settings.theme = theme,
            StorePatch::ToggleNotifications => {
                let settings = &mut self.user.profile.settings;
                settings.notifications = !settings.notifications;
            }
            StorePatch::BumpScore { index, by } => {
                if let Some(score) = self.user.scores.get_mut(index) {
                    *score = score.saturating_add(by);
                }
            }
            StorePatch::PushScore(score) => self.user.scores.push(score),
            StorePatch::ToggleItem { id } => self
                .items
                .iter_mut()
                .filter(|item| item.id == id)
                .for_each(|item| item.active = !item.active),
            StorePatch::AddItem => {
                let id = self.next_item_id();
                let name = format!("Item {}", self.items.len() + 1);
                self.items.push(StoreItem {
                    id,
                    name,
                    active: true,
                });
            }
        }
    }

    #[must_use]
    pub fn next_item_id(&self) -> u64 {
        self.items
            .iter()
            .map(|item| item.id)
            .max()
            .map_or(1, |max| max.saturating_add(1))
    }

    #[must_use]
    pub fn full_name(&self) -> String {
        format!(
            "{} {}",
            self.user.profile.first_name, self.user.profile.last_name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_first_name_only_changes_that_field() {
        let mut store = PlaygroundStore::default();
        let before = store.clone();
        store.apply(StorePatch::SetFirstName("John".to_string()));

        assert_eq!(store.full_name(), "John Doe");
        assert_eq!(store.user.profile.settings, before.user.profile.settings);
        assert_eq!(store.user.scores, before.user.scores);
        assert_eq!(store.items, before.items);
    }

    #[test]
    fn nested_settings_updates() {
        let mut store = PlaygroundStore::default();
        store.apply(StorePatch::SetProfileTheme(ProfileTheme::Dark));
        store.apply(StorePatch::ToggleNotifications);
        assert_eq!(store.user.profile.settings.theme, ProfileTheme::Dark);
        assert!(!store.user.profile.settings.notifications);
    }

    #[test]
    fn bump_score_by_index() {
        let mut store = PlaygroundStore::default();
        store.apply(StorePatch::BumpScore { index: 0, by: 5 });
        assert_eq!(store.user.scores, vec![90, 92, 78]);

        store.apply(StorePatch::BumpScore { index: 42, by: 5 });
        assert_eq!(store.user.scores, vec![90, 92, 78]);
    }

    #[test]
    fn bump_score_saturates() {
        let mut store = PlaygroundStore::default();
        store.apply(StorePatch::BumpScore {
            index: 1,
            by: i64::MAX,
        });
        store.apply(StorePatch::BumpScore {
            index: 1,
            by: i64::MAX,
        });
        assert_eq!(store.user.scores, vec![85, i64::MAX, 78]);
    }

    #[test]
    fn push_score_appends() {
        let mut store = PlaygroundStore::default();
        store.apply(StorePatch::PushScore(61));
        assert_eq!(store.user.scores.last(), Some(&61));
        assert_eq!(store.user.scores.len(), 4);
    }

    #[test]
    fn toggle_item_matches_by_id() {
        let mut store = PlaygroundStore::default();
        store.apply(StorePatch::ToggleItem { id: 2 });
        let flags: Vec<bool> = store.items.iter().map(|item| item.active).collect();
        assert_eq!(flags, vec![true, true, true]);
    }

    #[test]
    fn add_item_names_by_position() {
        let mut store = PlaygroundStore::default();
        store.apply(StorePatch::AddItem);
        let added = store.items.last().unwrap();
        assert_eq!(added.name, "Item 4");
        assert_eq!(added.id, 4);
        assert!(added.active);
    }

    #[test]
    fn back_to_back_adds_get_distinct_ids() {
        let mut store = PlaygroundStore::default();
        store.apply(StorePatch::AddItem);
        store.apply(StorePatch::AddItem);

        let ids: Vec<u64> = store.items.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);

        store.apply(StorePatch::ToggleItem { id: 5 });
        let flags: Vec<bool> = store.items.iter().map(|item| item.active).collect();
        assert_eq!(flags, vec![true, false, true, true, false]);
    }

    #[test]
    fn next_item_id_starts_at_one_when_empty() {
        let store = PlaygroundStore {
            items: Vec::new(),
            ..PlaygroundStore::default()
        };
        assert_eq!(store.next_item_id(), 1);
    }
}
