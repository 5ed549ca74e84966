#![cfg_attr(
    all(target_os = "windows", not(debug_assertions)),
    windows_subsystem = "windows"
)]

#[cfg(target_os = "windows")]
mod windows_main;

fn main() {
    #[cfg(target_os = "windows")]
    windows_main::run();

    #[cfg(not(target_os = "windows"))]
    {
        tabstash::logging::init_logging(tabstash::model::constants::DEFAULT_LOG_LEVEL);
        tracing::warn!(
            event = "app.unsupported_platform",
            "Tabstash only runs on Windows; nothing to do"
        );
    }
}
