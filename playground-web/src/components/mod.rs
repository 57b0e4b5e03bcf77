pub(crate) mod alert;
pub(crate) mod code_block;
pub(crate) mod error_boundary;
pub(crate) mod header_nav_item;
pub(crate) mod loading;
pub(crate) mod section_card;
pub(crate) mod stat_card;
pub(crate) mod theme_switcher;
pub(crate) mod user_dropdown;

// Re-export components for convenience
pub use alert::DynamicAlert;
pub use code_block::CodeBlock;
pub use error_boundary::{BoundaryFallback, ErrorBoundary};
pub use loading::Loading;
pub use section_card::SectionCard;
pub use stat_card::StatCard;
