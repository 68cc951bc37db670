// src/core/config.rs
use std::env;
use std::str::FromStr;
use std::time::Duration;
use log::LevelFilter;

/// Caps and lookback windows applied to the per-session lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryPolicy {
    /// History length kept after a strength check
    pub check_history_cap: usize,
    /// How many recent history entries a new check may not repeat
    pub check_lookback: usize,
    /// History length kept after generating a password
    pub generate_history_cap: usize,
    /// How many recently saved passwords a new save may not repeat
    pub saved_lookback: usize,
}

impl Default for HistoryPolicy {
    fn default() -> Self {
        Self {
            check_history_cap: 10,
            check_lookback: 10,
            generate_history_cap: 5,
            saved_lookback: 10,
        }
    }
}

// Configuration for the password tool
#[derive(Debug, Clone)]
pub struct Config {
    // Password Generation
    pub default_password_length: usize,
    pub min_password_length: usize,
    pub max_password_length: usize,

    // History
    pub history: HistoryPolicy,

    // Session
    pub session_idle_timeout: Duration,
    pub session_sweep_interval: Duration,

    // Web Interface
    pub web_port: u16,
    pub web_address: String,

    // Logging
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Password Generation
            default_password_length: 12,
            min_password_length: 8,
            max_password_length: 20,

            // History
            history: HistoryPolicy::default(),

            // Session
            session_idle_timeout: Duration::from_secs(30 * 60),
            session_sweep_interval: Duration::from_secs(300),

            // Web Interface
            web_port: 5000,
            web_address: "127.0.0.1".to_string(),

            // Logging
            log_level: LevelFilter::Info,
        }
    }
}

// Reads overrides through `lookup`, collecting a warning for every value it
// has to ignore. Warnings are kept until the logger is up.
struct EnvReader<F> {
    lookup: F,
    warnings: Vec<String>,
}

impl<F: Fn(&str) -> Option<String>> EnvReader<F> {
    fn parse<T: FromStr>(&mut self, key: &str) -> Option<T> {
        let val = (self.lookup)(key)?;
        match val.parse() {
            Ok(parsed) => Some(parsed),
            Err(_) => {
                self.warnings.push(format!("Ignoring invalid value '{}' for {}", val, key));
                None
            }
        }
    }

    // Parse into `target`, leaving it untouched when unset or malformed
    fn override_into<T: FromStr>(&mut self, key: &str, target: &mut T) {
        if let Some(parsed) = self.parse(key) {
            *target = parsed;
        }
    }
}

pub fn parse_log_level(level: &str) -> Option<LevelFilter> {
    match level.to_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Returns the config along with warnings about values that were ignored
    /// or adjusted, for the caller to log once logging is initialised.
    pub fn load() -> (Self, Vec<String>) {
        Self::load_from(|key| env::var(key).ok())
    }

    fn load_from<F: Fn(&str) -> Option<String>>(lookup: F) -> (Self, Vec<String>) {
        let mut config = Config::default();
        let mut reader = EnvReader { lookup, warnings: Vec::new() };

        // Password Generation
        reader.override_into("DEFAULT_PASSWORD_LENGTH", &mut config.default_password_length);
        reader.override_into("MIN_PASSWORD_LENGTH", &mut config.min_password_length);
        reader.override_into("MAX_PASSWORD_LENGTH", &mut config.max_password_length);

        // History
        reader.override_into("CHECK_HISTORY_CAP", &mut config.history.check_history_cap);
        reader.override_into("CHECK_LOOKBACK", &mut config.history.check_lookback);
        reader.override_into("GENERATE_HISTORY_CAP", &mut config.history.generate_history_cap);
        reader.override_into("SAVED_LOOKBACK", &mut config.history.saved_lookback);

        // Session
        if let Some(minutes) = reader.parse::<u64>("SESSION_IDLE_MINUTES") {
            config.session_idle_timeout = Duration::from_secs(minutes.saturating_mul(60));
        }
        if let Some(seconds) = reader.parse::<u64>("SESSION_SWEEP_SECONDS") {
            config.session_sweep_interval = Duration::from_secs(seconds.max(1));
        }

        // Web Interface
        reader.override_into("WEB_PORT", &mut config.web_port);
        if let Some(address) = (reader.lookup)("WEB_ADDRESS") {
            config.web_address = address;
        }

        // Logging
        if let Some(level) = (reader.lookup)("LOG_LEVEL") {
            match parse_log_level(&level) {
                Some(filter) => config.log_level = filter,
                None => reader
                    .warnings
                    .push(format!("Ignoring invalid value '{}' for LOG_LEVEL", level)),
            }
        }

        let mut warnings = reader.warnings;
        warnings.extend(config.normalize());
        (config, warnings)
    }

    // Keep the length bounds consistent with each other
    fn normalize(&mut self) -> Option<String> {
        let mut warning = None;
        if self.min_password_length == 0 {
            self.min_password_length = 1;
        }
        if self.max_password_length < self.min_password_length {
            warning = Some(format!(
                "MAX_PASSWORD_LENGTH {} is below MIN_PASSWORD_LENGTH {}, raising it",
                self.max_password_length, self.min_password_length
            ));
            self.max_password_length = self.min_password_length;
        }
        self.default_password_length = self
            .default_password_length
            .clamp(self.min_password_length, self.max_password_length);
        warning
    }

    pub fn length_in_bounds(&self, length: usize) -> bool {
        (self.min_password_length..=self.max_password_length).contains(&length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_ui_bounds() {
        let config = Config::default();
        assert_eq!(config.default_password_length, 12);
        assert!(config.length_in_bounds(8));
        assert!(config.length_in_bounds(20));
        assert!(!config.length_in_bounds(7));
        assert!(!config.length_in_bounds(21));
    }

    #[test]
    fn default_history_caps_differ_per_flow() {
        let policy = HistoryPolicy::default();
        assert_eq!(policy.check_history_cap, 10);
        assert_eq!(policy.generate_history_cap, 5);
        assert_eq!(policy.check_lookback, 10);
        assert_eq!(policy.saved_lookback, 10);
    }

    #[test]
    fn normalize_fixes_inverted_bounds() {
        let mut config = Config {
            min_password_length: 16,
            max_password_length: 10,
            default_password_length: 4,
            ..Config::default()
        };
        assert!(config.normalize().is_some());
        assert_eq!(config.max_password_length, 16);
        assert_eq!(config.default_password_length, 16);
    }

    fn env_of<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            vars.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn huge_idle_timeout_saturates() {
        let (config, warnings) =
            Config::load_from(env_of(&[("SESSION_IDLE_MINUTES", "922337203685477580")]));
        assert_eq!(config.session_idle_timeout, Duration::from_secs(u64::MAX));
        assert!(warnings.is_empty());
    }

    #[test]
    fn invalid_values_are_reported() {
        let (config, warnings) = Config::load_from(env_of(&[
            ("SESSION_IDLE_MINUTES", "soon"),
            ("SESSION_SWEEP_SECONDS", "-5"),
            ("WEB_PORT", "99999"),
            ("LOG_LEVEL", "verbose"),
            ("CHECK_HISTORY_CAP", "3"),
        ]));
        assert_eq!(config.session_idle_timeout, Duration::from_secs(30 * 60));
        assert_eq!(config.session_sweep_interval, Duration::from_secs(300));
        assert_eq!(config.web_port, 5000);
        assert_eq!(config.log_level, LevelFilter::Info);
        assert_eq!(config.history.check_history_cap, 3);
        assert_eq!(warnings.len(), 4);
        assert!(warnings[0].contains("SESSION_IDLE_MINUTES"));
        assert!(warnings[3].contains("LOG_LEVEL"));
    }

    #[test]
    fn inverted_bounds_from_env_are_reported() {
        let (config, warnings) = Config::load_from(env_of(&[
            ("MIN_PASSWORD_LENGTH", "16"),
            ("MAX_PASSWORD_LENGTH", "10"),
        ]));
        assert_eq!(config.max_password_length, 16);
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn log_levels_parse_case_insensitively() {
        assert_eq!(parse_log_level("DEBUG"), Some(LevelFilter::Debug));
        assert_eq!(parse_log_level("Warn"), Some(LevelFilter::Warn));
        assert_eq!(parse_log_level("verbose"), None);
    }
}
