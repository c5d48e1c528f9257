//! Configuration module for `EduPortal`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Variable expanded to the config directory inside path-like values
const DIR_VARIABLE: &str = "$EDU_PORTAL";

/// Delay before the post-login redirect fires, in milliseconds
pub const DEFAULT_REDIRECT_DELAY_MS: u64 = 1000;

/// Longest accepted post-login redirect delay, in milliseconds
pub const MAX_REDIRECT_DELAY_MS: u64 = 60_000;

const fn default_redirect_delay() -> u64 {
    DEFAULT_REDIRECT_DELAY_MS
}

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Site layout: where pages live and where they send the visitor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Directory of the course listing page; relative resources resolve against it
    #[serde(default)]
    pub page_dir: String,
    /// Relative path of the course list resource
    #[serde(default)]
    pub courses_resource: String,
    /// Checkout page the buy action redirects to
    #[serde(default)]
    pub checkout_path: String,
    /// Login page that guards and logout send the visitor back to
    #[serde(default)]
    pub login_path: String,
    /// Delay between a successful login and the dashboard redirect
    #[serde(default = "default_redirect_delay")]
    pub redirect_delay_ms: u64,
}

impl SiteConfig {
    /// Post-login redirect delay, capped at [`MAX_REDIRECT_DELAY_MS`]
    #[must_use]
    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms.min(MAX_REDIRECT_DELAY_MS))
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            page_dir: String::new(),
            courses_resource: String::new(),
            checkout_path: String::new(),
            login_path: String::new(),
            redirect_delay_ms: DEFAULT_REDIRECT_DELAY_MS,
        }
    }
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// JSON file backing the durable key-value store
    #[serde(default)]
    pub storage_file: String,
    /// Directory for rendered catalog pages
    #[serde(default)]
    pub pages_dir: String,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Site layout settings
    #[serde(default)]
    pub site: SiteConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override course page directory
    pub page_dir: Option<String>,
    /// Override storage file
    pub storage_file: Option<String>,
    /// Override rendered pages directory
    pub pages_dir: Option<String>,
}

/// Copy `default` into `field` when `field` is empty and `default` is not.
fn fill_empty(field: &mut String, default: &str) -> bool {
    if field.is_empty() && !default.is_empty() {
        default.clone_into(field);
        true
    } else {
        false
    }
}

impl Config {
    /// Get the `$EDU_PORTAL` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/eduportal`
    /// - macOS: `~/Library/Application Support/eduportal`
    /// - Windows: `%APPDATA%\eduportal`
    #[must_use]
    pub fn get_eduportal_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("eduportal")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Only string fields that are empty here and non-empty in `defaults`
    /// are filled in, so upgrading keeps every user setting.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let updates = [
            fill_empty(&mut self.logging.level, &defaults.logging.level),
            fill_empty(&mut self.logging.file, &defaults.logging.file),
            fill_empty(&mut self.site.page_dir, &defaults.site.page_dir),
            fill_empty(
                &mut self.site.courses_resource,
                &defaults.site.courses_resource,
            ),
            fill_empty(&mut self.site.checkout_path, &defaults.site.checkout_path),
            fill_empty(&mut self.site.login_path, &defaults.site.login_path),
            fill_empty(&mut self.paths.storage_file, &defaults.paths.storage_file),
            fill_empty(&mut self.paths.pages_dir, &defaults.paths.pages_dir),
        ];
        updates.contains(&true)
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Overrides only affect this run; the config file is left untouched.
    /// Only non-`None` values replace config values.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }
        if let Some(page_dir) = &overrides.page_dir {
            self.site.page_dir.clone_from(page_dir);
        }
        if let Some(storage_file) = &overrides.storage_file {
            self.paths.storage_file.clone_from(storage_file);
        }
        if let Some(pages_dir) = &overrides.pages_dir {
            self.paths.pages_dir.clone_from(pages_dir);
        }
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds, `dconfig.toml` for debug builds, inside
    /// the directory returned by [`get_eduportal_dir`](Self::get_eduportal_dir).
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_eduportal_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$EDU_PORTAL` in a string to the config directory
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let dir = Self::get_eduportal_dir();
            value.replace(DIR_VARIABLE, dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Missing fields use their serde defaults and `$EDU_PORTAL` is expanded in
    /// every path-like value.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let config = Config::from_toml(r#"
    /// [logging]
    /// level = "info"
    /// file = "$EDU_PORTAL/logs/eduportal.log"
    /// "#)?;
    /// ```
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.site.page_dir = Self::expand_variables(&config.site.page_dir);
        config.paths.storage_file = Self::expand_variables(&config.paths.storage_file);
        config.paths.pages_dir = Self::expand_variables(&config.paths.pages_dir);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML. The
    /// defaults are compiled into the binary, so this is caught by the test suite.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from the user config file, or create it from defaults
    ///
    /// Falls back to defaults if the existing file cannot be read or parsed.
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&Self::get_config_file_path())
    }

    /// Load configuration from `config_file`, creating it from defaults on first run
    ///
    /// An existing file gets any newly added default fields merged in and is
    /// re-saved when that changed anything.
    #[must_use]
    pub fn load_from(config_file: &Path) -> Self {
        let defaults = Self::from_defaults();

        if !config_file.exists() {
            let _ = defaults.save_to(config_file);
            return defaults;
        }

        fs::read_to_string(config_file)
            .ok()
            .and_then(|content| Self::from_toml(&content).ok())
            .map_or(defaults.clone(), |mut config| {
                if config.merge_defaults(&defaults) {
                    let _ = config.save_to(config_file);
                }
                config
            })
    }

    /// Save configuration to the user config file
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created or the file cannot be written.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.save_to(&Self::get_config_file_path())
    }

    /// Save configuration as pretty TOML to `config_file`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config cannot be serialized to TOML (shouldn't happen)
    /// - The config directory cannot be created
    /// - The file cannot be written (permissions, disk full, etc.)
    pub fn save_to(&self, config_file: &Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(config_file, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    ///
    /// Supported keys: `level`, `file`, `verbose`, `page_dir`,
    /// `courses_resource`, `checkout_path`, `login_path`, `redirect_delay_ms`,
    /// `storage_file`, `pages_dir`. Dashed spellings are accepted too.
    ///
    /// # Returns
    /// - `Some(String)`: The configuration value as a string
    /// - `None`: If the key is not recognized
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "page_dir" | "page-dir" => Some(self.site.page_dir.clone()),
            "courses_resource" | "courses-resource" => Some(self.site.courses_resource.clone()),
            "checkout_path" | "checkout-path" => Some(self.site.checkout_path.clone()),
            "login_path" | "login-path" => Some(self.site.login_path.clone()),
            "redirect_delay_ms" | "redirect-delay-ms" => {
                Some(self.site.redirect_delay_ms.to_string())
            }
            "storage_file" | "storage-file" => Some(self.paths.storage_file.clone()),
            "pages_dir" | "pages-dir" => Some(self.paths.pages_dir.clone()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Updates the in-memory config only. Call [`save()`](Config::save) to persist changes.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized or the value cannot be
    /// parsed (e.g. "maybe" for `verbose`, "loud" for `level`).
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => {
                let level = value.parse::<crate::logger::Level>()?;
                self.logging.level = level.to_string();
            }
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "page_dir" | "page-dir" => self.site.page_dir = value.to_string(),
            "courses_resource" | "courses-resource" => {
                self.site.courses_resource = value.to_string();
            }
            "checkout_path" | "checkout-path" => self.site.checkout_path = value.to_string(),
            "login_path" | "login-path" => self.site.login_path = value.to_string(),
            "redirect_delay_ms" | "redirect-delay-ms" => {
                self.site.redirect_delay_ms = value
                    .parse::<u64>()
                    .ok()
                    .filter(|ms| *ms <= MAX_REDIRECT_DELAY_MS)
                    .ok_or_else(|| {
                        format!(
                            "Invalid value for 'redirect_delay_ms': '{value}' \
                             (expected 0 to {MAX_REDIRECT_DELAY_MS})"
                        )
                    })?;
            }
            "storage_file" | "storage-file" => self.paths.storage_file = value.to_string(),
            "pages_dir" | "pages-dir" => self.paths.pages_dir = value.to_string(),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to its value in `defaults`)
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "page_dir" | "page-dir" => self.site.page_dir.clone_from(&defaults.site.page_dir),
            "courses_resource" | "courses-resource" => self
                .site
                .courses_resource
                .clone_from(&defaults.site.courses_resource),
            "checkout_path" | "checkout-path" => self
                .site
                .checkout_path
                .clone_from(&defaults.site.checkout_path),
            "login_path" | "login-path" => {
                self.site.login_path.clone_from(&defaults.site.login_path);
            }
            "redirect_delay_ms" | "redirect-delay-ms" => {
                self.site.redirect_delay_ms = defaults.site.redirect_delay_ms;
            }
            "storage_file" | "storage-file" => self
                .paths
                .storage_file
                .clone_from(&defaults.paths.storage_file),
            "pages_dir" | "pages-dir" => self.paths.pages_dir.clone_from(&defaults.paths.pages_dir),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults by deleting the config file
    ///
    /// The next [`load()`](Config::load) recreates it. Succeeds without doing
    /// anything when the file does not exist.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be deleted.
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[site]")?;
        writeln!(f, "  page_dir = \"{}\"", self.site.page_dir)?;
        writeln!(f, "  courses_resource = \"{}\"", self.site.courses_resource)?;
        writeln!(f, "  checkout_path = \"{}\"", self.site.checkout_path)?;
        writeln!(f, "  login_path = \"{}\"", self.site.login_path)?;
        writeln!(f, "  redirect_delay_ms = {}", self.site.redirect_delay_ms)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  storage_file = \"{}\"", self.paths.storage_file)?;
        writeln!(f, "  pages_dir = \"{}\"", self.paths.pages_dir)?;

        Ok(())
    }
}
