/// Four-way status driving the match demo.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

impl FetchStatus {
    pub const ALL: [Self; 4] = [Self::Idle, Self::Loading, Self::Success, Self::Error];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Loading => "Loading",
            Self::Success => "Success",
            Self::Error => "Error",
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Idle => "⏸️ Status: Idle, waiting for action",
            Self::Loading => "⏳ Status: Loading, please wait...",
            Self::Success => "✅ Status: Success, operation completed!",
            Self::Error => "❌ Status: Error, something went wrong",
        }
    }
}
