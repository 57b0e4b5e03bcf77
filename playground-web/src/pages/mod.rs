mod dashboard;
pub mod login;
mod playground;

pub use dashboard::DashboardPage;
pub use login::LoginPage;
pub use playground::PlaygroundPage;
