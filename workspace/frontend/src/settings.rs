use common::ColorScheme;
use log::Level;
use wasm_bindgen::JsValue;
use web_sys::window;

const STORAGE_PREFIX: &str = "treemap_";

/// Global application settings
#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    /// Data service host (e.g., "localhost")
    pub api_host: String,

    /// Data service port
    pub api_port: u16,

    /// Path of the holdings endpoint
    pub portfolio_path: String,

    /// Use HTTPS for API requests
    pub api_use_https: bool,

    /// Default log level for the application
    pub log_level: Level,

    /// How treemap slices are colored
    pub color_scheme: ColorScheme,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_host: "localhost".to_string(),
            api_port: 5000,
            portfolio_path: "/portfolio".to_string(),
            api_use_https: false,
            log_level: Level::Info,
            color_scheme: ColorScheme::Palette,
        }
    }
}

fn storage_key(name: &str) -> String {
    format!("{STORAGE_PREFIX}{name}")
}

fn parse_log_level(value: &str) -> Option<Level> {
    match value.to_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        "trace" => Some(Level::Trace),
        _ => None,
    }
}

impl AppSettings {
    /// Create settings from window location and localStorage overrides
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        let Some(window) = window() else {
            return settings;
        };

        if let Ok(hostname) = window.location().hostname() {
            // Local development gets verbose logging
            if hostname == "localhost" || hostname == "127.0.0.1" {
                settings.log_level = Level::Debug;
            }
        }

        if let Ok(Some(storage)) = window.local_storage() {
            let get = |name: &str| storage.get_item(&storage_key(name)).ok().flatten();

            if let Some(api_host) = get("api_host") {
                settings.api_host = api_host;
            }
            if let Some(port) = get("api_port").and_then(|p| p.parse::<u16>().ok()) {
                settings.api_port = port;
            }
            if let Some(path) = get("portfolio_path") {
                settings.portfolio_path = path;
            }
            if let Some(use_https) = get("api_use_https") {
                settings.api_use_https = use_https.to_lowercase() == "true";
            }
            if let Some(level) = get("log_level").as_deref().and_then(parse_log_level) {
                settings.log_level = level;
            }
            if let Some(scheme) = get("color_scheme") {
                match scheme.parse::<ColorScheme>() {
                    Ok(scheme) => settings.color_scheme = scheme,
                    Err(e) => log::warn!("Ignoring stored color scheme: {}", e),
                }
            }
        }

        settings
    }

    /// Save settings to localStorage
    pub fn save_to_storage(&self) -> Result<(), JsValue> {
        if let Some(window) = window() {
            if let Some(storage) = window.local_storage()? {
                storage.set_item(&storage_key("api_host"), &self.api_host)?;
                storage.set_item(&storage_key("api_port"), &self.api_port.to_string())?;
                storage.set_item(&storage_key("portfolio_path"), &self.portfolio_path)?;
                storage.set_item(&storage_key("api_use_https"), &self.api_use_https.to_string())?;
                storage.set_item(
                    &storage_key("log_level"),
                    &format!("{:?}", self.log_level).to_lowercase(),
                )?;
                storage.set_item(&storage_key("color_scheme"), &self.color_scheme.to_string())?;
            }
        }
        Ok(())
    }

    /// Base URL of the data service (protocol + host + port)
    pub fn api_base_url(&self) -> String {
        let protocol = if self.api_use_https { "https" } else { "http" };
        format!("{}://{}:{}", protocol, self.api_host, self.api_port)
    }

    /// Full URL of the holdings endpoint
    pub fn portfolio_url(&self) -> String {
        format!("{}{}", self.api_base_url(), self.portfolio_path)
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::default());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Update the global settings
pub fn update_settings<F>(f: F)
where
    F: FnOnce(&mut AppSettings),
{
    SETTINGS.with(|s| {
        let mut settings = s.borrow_mut();
        f(&mut settings);
    });
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}
