//! Per-session conversation state with idle expiry.
//!
//! The interpreter itself is pure; this store is the only stateful piece.
//! Each session id maps to its conversation state plus the instant of
//! last activity. Sessions idle past the TTL are dropped so an abandoned
//! dialogue never resumes mid-question days later.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::interpreter::{CoreResult, interpret};
use crate::state::ConversationState;

const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(30 * 60);

/// Thread-safe map of session id to conversation state.
pub struct SessionStore {
    sessions: Mutex<HashMap<String, (ConversationState, Instant)>>,
    ttl: Duration,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    /// Store with the default 30 minute idle TTL.
    #[must_use]
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_SESSION_TTL)
    }

    #[must_use]
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    /// Current state for a session, or the initial state if the session
    /// is unknown or has expired. Touches the session's activity clock.
    pub fn get(&self, session_id: &str) -> ConversationState {
        let mut sessions = self.sessions.lock().expect("session lock poisoned");
        match sessions.get_mut(session_id) {
            Some((state, touched)) if touched.elapsed() < self.ttl => {
                *touched = Instant::now();
                state.clone()
            }
            Some(_) => {
                debug!(session_id, "session expired, resetting");
                sessions.remove(session_id);
                ConversationState::initial()
            }
            None => ConversationState::initial(),
        }
    }

    pub fn set(&self, session_id: &str, state: ConversationState) {
        let mut sessions = self.sessions.lock().expect("session lock poisoned");
        sessions.insert(session_id.to_string(), (state, Instant::now()));
    }

    /// Drop every session idle past the TTL. Called opportunistically
    /// from [`SessionStore::handle`]; safe to call any time.
    pub fn evict_expired(&self) {
        let mut sessions = self.sessions.lock().expect("session lock poisoned");
        sessions.retain(|_, (_, touched)| touched.elapsed() < self.ttl);
    }

    /// Interpret one turn for a session, persisting the resulting state.
    pub fn handle(&self, session_id: &str, input: &str) -> CoreResult {
        self.evict_expired();
        let state = self.get(session_id);
        let (result, next) = interpret(input, state);
        self.set(session_id, next);
        result
    }
}
