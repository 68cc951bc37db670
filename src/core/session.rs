// src/core/session.rs
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::Mutex;
use thiserror::Error;
use uuid::Uuid;

use crate::core::config::HistoryPolicy;
use crate::generators::PasswordGenerator;
use crate::models::{PasswordGenerationOptions, StrengthResult};
use crate::strength;

/// Advisory rejections shown to the user. None of these are failures of
/// computation; the session is left untouched when one is returned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("❌ You cannot use the same password from your last {0} password history!")]
    RecentlyChecked(usize),

    #[error("❌ This password has been used recently! Try generating a new one.")]
    RecentlySaved,

    #[error("⚠️ No password generated yet!")]
    NothingGenerated,

    #[error("Session not found or expired")]
    UnknownSession,
}

pub type Result<T> = std::result::Result<T, SessionError>;

/// Everything one browser session knows about. Dropped with the session.
#[derive(Debug, Clone)]
pub struct SessionState {
    history: Vec<String>,
    saved: Vec<String>,
    last_generated: Option<String>,
    last_options: Option<PasswordGenerationOptions>,
    pub created_at: DateTime<Utc>,
    pub last_seen: DateTime<Utc>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            history: Vec::new(),
            saved: Vec::new(),
            last_generated: None,
            last_options: None,
            created_at: now,
            last_seen: now,
        }
    }

    /// Most recent first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Insertion order.
    pub fn saved(&self) -> &[String] {
        &self.saved
    }

    pub fn last_generated(&self) -> Option<&str> {
        self.last_generated.as_deref()
    }

    /// Generator settings from the most recent generate request.
    pub fn last_options(&self) -> Option<&PasswordGenerationOptions> {
        self.last_options.as_ref()
    }

    fn push_history(&mut self, password: String, cap: usize) {
        self.history.insert(0, password);
        self.history.truncate(cap);
    }

    /// Score `password` and record it in the history.
    ///
    /// Empty input is ignored and yields `Ok(None)`. A password already among
    /// the last `check_lookback` history entries is rejected.
    pub fn check(&mut self, password: &str, policy: &HistoryPolicy) -> Result<Option<StrengthResult>> {
        if password.is_empty() {
            return Ok(None);
        }

        let window = policy.check_lookback.min(self.history.len());
        if self.history[..window].iter().any(|p| p == password) {
            log::debug!("Rejected strength check for a recently used password");
            return Err(SessionError::RecentlyChecked(policy.check_lookback));
        }

        self.push_history(password.to_string(), policy.check_history_cap);

        Ok(Some(strength::analyze_password_strength(password)))
    }

    pub fn generate(
        &mut self,
        generator: &PasswordGenerator,
        options: &PasswordGenerationOptions,
        policy: &HistoryPolicy,
    ) -> String {
        let password = generator.generate_password(options);
        self.last_generated = Some(password.clone());
        self.last_options = Some(options.clone());
        self.push_history(password.clone(), policy.generate_history_cap);
        password
    }

    /// Append the last generated password to the saved list.
    pub fn save_generated(&mut self, policy: &HistoryPolicy) -> Result<String> {
        let password = match self.last_generated.as_deref() {
            Some(p) if !p.is_empty() => p.to_string(),
            _ => return Err(SessionError::NothingGenerated),
        };

        let start = self.saved.len().saturating_sub(policy.saved_lookback);
        if self.saved[start..].contains(&password) {
            return Err(SessionError::RecentlySaved);
        }

        self.saved.push(password.clone());
        Ok(password)
    }

    fn touch(&mut self) {
        self.last_seen = Utc::now();
    }

    fn is_expired(&self, now: DateTime<Utc>, idle_timeout: Duration) -> bool {
        now.signed_duration_since(self.last_seen) >= idle_timeout
    }
}

/// All live sessions, keyed by the id handed to the browser.
pub struct SessionStore {
    sessions: Mutex<HashMap<Uuid, SessionState>>,
    idle_timeout: Duration,
}

impl SessionStore {
    pub fn new(idle_timeout: std::time::Duration) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            idle_timeout: Duration::from_std(idle_timeout).unwrap_or_else(|_| Duration::max_value()),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<Uuid, SessionState>> {
        self.sessions.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn create(&self) -> Uuid {
        let id = Uuid::new_v4();
        self.lock().insert(id, SessionState::new());
        log::debug!("🆕 Created session {}", id);
        id
    }

    pub fn contains(&self, id: &Uuid) -> bool {
        let now = Utc::now();
        self.lock()
            .get(id)
            .map_or(false, |s| !s.is_expired(now, self.idle_timeout))
    }

    /// Run `f` against a live session, refreshing its idle timer.
    ///
    /// Returns `None` when the id is unknown or the session has expired.
    pub fn with_session<F, R>(&self, id: &Uuid, f: F) -> Option<R>
    where
        F: FnOnce(&mut SessionState) -> R,
    {
        let now = Utc::now();
        let mut sessions = self.lock();

        if sessions.get(id).map_or(false, |s| s.is_expired(now, self.idle_timeout)) {
            sessions.remove(id);
            log::debug!("⌛ Session {} expired", id);
            return None;
        }

        let session = sessions.get_mut(id)?;
        session.touch();
        Some(f(session))
    }

    pub fn remove(&self, id: &Uuid) -> bool {
        let removed = self.lock().remove(id).is_some();
        if removed {
            log::debug!("🗑️ Ended session {}", id);
        }
        removed
    }

    /// Drop sessions idle for longer than the timeout. Returns how many went.
    pub fn cleanup_expired(&self) -> usize {
        let now = Utc::now();
        let mut sessions = self.lock();
        let before = sessions.len();
        sessions.retain(|_, session| !session.is_expired(now, self.idle_timeout));
        before - sessions.len()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
