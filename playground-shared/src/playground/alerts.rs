use strum::{Display, EnumIter, IntoEnumIterator};

/// Which alert component the dynamic demo mounts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum AlertKind {
    #[default]
    Success,
    Warning,
    Error,
    Info,
}

impl AlertKind {
    #[must_use]
    pub fn all() -> Vec<Self> {
        Self::iter().collect()
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✅",
            Self::Warning => "⚠️",
            Self::Error => "❌",
            Self::Info => "ℹ️",
        }
    }

    #[must_use]
    pub fn message(self) -> String {
        format!("This is a {self} alert rendered dynamically!")
    }
}
