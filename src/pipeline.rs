//! The request-scoped interpretation pipeline.
//!
//! One pass per interpreter call: normalize, detect intent, extract slots,
//! classify ambiguity. Stateless; the context lives for exactly one call.

use crate::ambiguity::{self, AmbiguityResult};
use crate::intent::{DetectedIntent, Intent, detect_intent};
use crate::normalizer::normalize_input;
use crate::slots::{SlotBag, extract_slots};

/// Ephemeral per-call context, owned by the pipeline.
#[derive(Debug, Clone)]
pub struct PipelineContext {
    pub raw_input: String,
    pub normalized_input: String,
    pub detected: DetectedIntent,
    pub slots: SlotBag,
}

impl PipelineContext {
    /// The primary detected intent, if any.
    #[must_use]
    pub fn intent(&self) -> Option<Intent> {
        self.detected.primary
    }
}

/// Run the full pipeline over one input.
///
/// The ambiguity classification is only computed when an intent was
/// detected; without one there is nothing to be complete or ambiguous for.
#[must_use]
pub fn run_pipeline(input: &str) -> (PipelineContext, Option<AmbiguityResult>) {
    let normalized_input = normalize_input(input);
    let detected = detect_intent(&normalized_input);
    let slots = extract_slots(&normalized_input, detected.primary);

    let ambiguity = detected
        .primary
        .map(|intent| ambiguity::check_ambiguity(intent, &slots));

    let ctx = PipelineContext {
        raw_input: input.to_string(),
        normalized_input,
        detected,
        slots,
    };

    (ctx, ambiguity)
}
