//! Intent detection.
//!
//! Each intent owns a keyword list. Multi-word keywords match by substring
//! containment on the lowercased text; single words match with a
//! case-insensitive word-boundary regex. Multi-intent collisions resolve
//! through a small set of fixed rules rather than scoring.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// The user's high-level goal for a turn.
///
/// `RawInput` is a meta-intent used at the dispatch boundary: it marks text
/// that has not been interpreted yet and must be routed through
/// [`interpret`](crate::interpret). The detector never produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Intent {
    CreateTask,
    ListTasks,
    EditTask,
    DeleteTask,
    DeleteAllTasks,
    UndoAction,
    RawInput,
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Intent::CreateTask => "CREATE_TASK",
            Intent::ListTasks => "LIST_TASKS",
            Intent::EditTask => "EDIT_TASK",
            Intent::DeleteTask => "DELETE_TASK",
            Intent::DeleteAllTasks => "DELETE_ALL_TASKS",
            Intent::UndoAction => "UNDO_ACTION",
            Intent::RawInput => "RAW_INPUT",
        };
        f.write_str(name)
    }
}

/// Detection outcome: at most one primary intent, plus an advisory
/// secondary intent for the single sanctioned chaining combination
/// (create-and-list). The secondary is surfaced but never executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DetectedIntent {
    pub primary: Option<Intent>,
    pub secondary: Option<Intent>,
}

/// Keyword tables, in the order intents are tested.
const INTENT_KEYWORDS: &[(Intent, &[&str])] = &[
    (Intent::CreateTask, &["add", "create", "new", "schedule"]),
    (
        Intent::ListTasks,
        &[
            "list",
            "show",
            "view",
            "see",
            "calendar",
            "tasks i did",
            "tasks i have",
            "what tasks",
            "my tasks",
            "pending tasks",
            "completed tasks",
            "done tasks",
        ],
    ),
    (
        Intent::EditTask,
        &["edit", "change", "update", "move", "mark as"],
    ),
    (Intent::DeleteTask, &["delete", "remove", "cancel task"]),
    (
        Intent::DeleteAllTasks,
        &[
            "delete all",
            "remove all",
            "clear all",
            "delete everything",
            "remove everything",
        ],
    ),
    (Intent::UndoAction, &["undo", "revert", "go back", "undo that"]),
];

enum Matcher {
    /// Multi-word keyword, substring containment on the lowercased input.
    Phrase(&'static str),
    /// Single word, word-boundary regex, case-insensitive.
    Word(Regex),
}

static MATCHERS: Lazy<Vec<(Intent, Vec<Matcher>)>> = Lazy::new(|| {
    INTENT_KEYWORDS
        .iter()
        .map(|(intent, keywords)| {
            let matchers = keywords
                .iter()
                .map(|k| {
                    if k.contains(' ') {
                        Matcher::Phrase(k)
                    } else {
                        Matcher::Word(
                            Regex::new(&format!(r"(?i)\b{k}\b"))
                                .expect("static keyword regex compiles"),
                        )
                    }
                })
                .collect();
            (*intent, matchers)
        })
        .collect()
});

fn find_intents(text: &str) -> Vec<Intent> {
    let lower = text.to_lowercase();
    MATCHERS
        .iter()
        .filter(|(_, matchers)| {
            matchers.iter().any(|m| match m {
                Matcher::Phrase(p) => lower.contains(p),
                Matcher::Word(re) => re.is_match(text),
            })
        })
        .map(|(intent, _)| *intent)
        .collect()
}

/// The only multi-intent combination treated as deliberate chaining:
/// create-and-list, e.g. "add buy milk and show tasks".
fn is_safe_chaining(intents: &[Intent]) -> bool {
    intents.len() == 2
        && intents.contains(&Intent::CreateTask)
        && intents.contains(&Intent::ListTasks)
}

/// Detect the user's intent from free text.
///
/// Zero keyword matches yield no primary intent (unparseable). A lone match
/// wins outright. When both delete-all and single-delete keywords appear,
/// delete-all wins so a bulk action is never silently narrowed to a single
/// delete. Any other multi-match combination is an unresolved conflict and
/// yields no primary intent.
///
/// # Examples
///
/// ```
/// use tasktalk::intent::{detect_intent, Intent};
///
/// let detected = detect_intent("add buy milk");
/// assert_eq!(detected.primary, Some(Intent::CreateTask));
/// ```
pub fn detect_intent(text: &str) -> DetectedIntent {
    let intents = find_intents(text);

    if intents.is_empty() {
        return DetectedIntent::default();
    }

    if intents.len() == 1 {
        return DetectedIntent {
            primary: Some(intents[0]),
            secondary: None,
        };
    }

    if intents.contains(&Intent::DeleteAllTasks) && intents.contains(&Intent::DeleteTask) {
        return DetectedIntent {
            primary: Some(Intent::DeleteAllTasks),
            secondary: None,
        };
    }

    if is_safe_chaining(&intents) {
        return DetectedIntent {
            primary: Some(Intent::CreateTask),
            secondary: Some(Intent::ListTasks),
        };
    }

    DetectedIntent::default()
}

/// Whether the text would resolve to a command at all.
#[must_use]
pub fn is_likely_command(text: &str) -> bool {
    detect_intent(text).primary.is_some()
}
