use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Vitalia";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Storage key for the serialized report collection.
pub const REPORTS_KEY: &str = "healthReports";
/// Storage key for the serialized weekly plan collection.
pub const PLANS_KEY: &str = "weeklyPlans";

/// Default tracing filter when RUST_LOG is unset.
pub fn default_log_filter() -> &'static str {
    "info,vitalia=debug"
}

/// Get the application data directory
/// ~/Vitalia/ on all platforms (user-visible, per design requirement)
pub fn app_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join("Vitalia")
}

/// Default path for the SQLite-backed store.
pub fn default_db_path() -> PathBuf {
    app_data_dir().join("vitalia.db")
}
