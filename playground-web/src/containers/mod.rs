pub mod guest_layout;
pub mod header;
pub mod layout;
