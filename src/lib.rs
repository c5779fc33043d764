//! TaskTalk - a natural-language command interpreter for a task manager.
//!
//! This crate turns free-form English like "remind me to buy milk tomorrow
//! at 10am" into structured commands. It has two halves:
//! 1. A stateless pipeline that normalizes text, detects the intent and
//!    extracts slots (title, date, time, priority, recurrence, description)
//! 2. A conversation state machine that asks follow-up questions until a
//!    command is complete, then hands the caller a final intent + payload
//!
//! The interpreter never executes anything. A `FINAL` result is a contract
//! with the caller: run this intent with this payload. `QUESTION` and
//! `INFO` results carry text for the user and execute nothing.
//!
//! # Example
//!
//! ```
//! use tasktalk::{ConversationState, CoreResult, Intent, interpret};
//!
//! let (result, state) = interpret("add study english tomorrow at 10am", ConversationState::initial());
//! match result {
//!     CoreResult::Final { intent, payload } => {
//!         assert_eq!(intent, Intent::CreateTask);
//!         assert_eq!(payload["title"], "study english");
//!         assert_eq!(payload["date"], "tomorrow");
//!     }
//!     other => panic!("expected a final command, got {other:?}"),
//! }
//! assert_eq!(state, ConversationState::initial());
//! ```
// Module declarations
pub mod ambiguity;
pub mod error;
pub mod intent;
pub mod interpreter;
pub mod normalizer;
pub mod payload;
pub mod pipeline;
pub mod resolve;
pub mod session;
pub mod slots;
pub mod smalltalk;
pub mod state;

pub use ambiguity::{AmbiguityResult, check_ambiguity, required_slots};
pub use error::ResolveError;
pub use intent::{DetectedIntent, Intent, detect_intent};
pub use interpreter::{CoreResult, interpret};
pub use payload::{Payload, normalize_payload};
pub use pipeline::{PipelineContext, run_pipeline};
pub use session::SessionStore;
pub use slots::{SlotBag, SlotValue, extract_slots};
pub use state::{ConversationState, DeleteCandidate};

/// Configure structured logging to stderr.
///
/// Honors `RUST_LOG` for filtering and defaults to `info`. Call once at
/// process start.
///
/// # Example
///
/// ```
/// // Initialize structured logging at the start of your binary
/// tasktalk::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
