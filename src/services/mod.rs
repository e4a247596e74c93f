pub mod app_dirs;
pub mod prefs;
pub mod tracing_setup;
