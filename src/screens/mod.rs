mod dashboard;
mod history;
mod login;
mod navbar;
mod profile;
mod report_missing;
mod report_sighting;
mod signup;

pub use dashboard::DashboardScreen;
pub use history::HistoryScreen;
pub use login::LoginScreen;
pub use navbar::Navbar;
pub use profile::ProfileScreen;
pub use report_missing::ReportMissingScreen;
pub use report_sighting::ReportSightingScreen;
pub use signup::SignupScreen;
