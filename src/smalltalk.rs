//! Conversational small-talk matchers.
//!
//! A fixed battery of regex matchers with canned replies, checked before
//! intent detection so "what can you do" never reaches keyword matching
//! even though it happens to contain command words. Matchers run in
//! declaration order; the first hit wins.

use chrono::Local;
use once_cell::sync::Lazy;
use rand::Rng;
use rand::seq::SliceRandom;
use regex::Regex;

struct Matcher {
    patterns: Vec<Regex>,
    respond: fn() -> String,
}

fn re(pattern: &str) -> Regex {
    Regex::new(pattern).expect("static regex compiles")
}

const JOKES: &[&str] = &[
    "Why did the task go to therapy? It had too many issues to resolve! 😄",
    "I tried to organize a hide and seek tournament, but it was a disaster. Good players are hard to find!",
    "Why do programmers prefer dark mode? Because light attracts bugs! 🐛",
    "What do you call a task that's been waiting forever? Pro-crastinated! ⏰",
];

const MOTIVATION: &[&str] = &[
    "You've got this! Remember: every big accomplishment starts with a single task. Let's tackle one thing at a time! 💪",
    "Take a deep breath. Progress, not perfection! What's one small task you can finish right now?",
    "Even the longest journey begins with a single step. You're doing great just by being here! ⭐",
    "Feeling overwhelmed? Let's break things down. Show me your tasks and we'll prioritize together!",
];

const CAPABILITIES: &str = "I can help you with:\n\
    • Create tasks: 'add buy groceries tomorrow at 3pm'\n\
    • View tasks: 'show my tasks' or 'tasks for today'\n\
    • Edit tasks: 'edit #1 to Friday'\n\
    • Delete tasks: 'delete task #1'\n\
    • Set priorities: 'high priority meeting tomorrow'\n\
    • Add descriptions: 'description: bring the documents'";

const HELP: &str = "Here's how to use me:\n\
    • Create: 'create task [name] [date] [time]'\n\
    • List: 'show tasks', 'today's tasks', 'pending tasks'\n\
    • Edit: 'edit #[id] [changes]'\n\
    • Delete: 'delete #[id]' or 'delete all'\n\
    • Undo: 'undo'\n\
    Tip: You can use natural language like 'remind me to call mom tomorrow at 5pm'!";

const COMMAND_REFERENCE: &str = "**Quick Commands:**\n\n\
    **Creating Tasks:**\n\
    • \"add meeting tomorrow at 2pm\"\n\
    • \"create buy groceries next friday\"\n\
    • \"remind me to call mom at 5pm\"\n\
    • \"high priority report due monday\"\n\n\
    **Viewing Tasks:**\n\
    • \"show my tasks\" or \"list tasks\"\n\
    • \"today's tasks\" or \"tasks for today\"\n\
    • \"pending tasks\" or \"completed tasks\"\n\
    • \"show tasks for february 10\"\n\n\
    **Editing Tasks:**\n\
    • \"edit #5 to next week\"\n\
    • \"change #3 to high priority\"\n\
    • \"rename #2 to new title\"\n\
    • \"edit #1 description: add notes here\"\n\n\
    **Deleting Tasks:**\n\
    • \"delete #5\" or \"remove task #5\"\n\
    • \"delete all tasks\"\n\n\
    **Other:**\n\
    • \"undo\" - undo last action\n\
    • \"help\" - show help\n\
    • \"who are you?\" - about me";

static MATCHERS: Lazy<Vec<Matcher>> = Lazy::new(|| {
    vec![
        // Identity.
        Matcher {
            patterns: vec![
                re(r"\b(who|what)\s+(are|r)\s+(you|u)\b"),
                re(r"\bwhat('?s| is)\s+this\b"),
            ],
            respond: || {
                "Hi! I'm your personal Task Manager assistant. I help you organize your tasks, \
                 set reminders, and stay on top of your schedule. Just tell me what you need!"
                    .into()
            },
        },
        // Name.
        Matcher {
            patterns: vec![re(r"\b(what('?s| is)\s+(your|ur)\s+name|do you have a name)\b")],
            respond: || {
                "I'm Task Manager, your friendly productivity assistant! You can just call me TM \
                 if you like. 😊"
                    .into()
            },
        },
        // Creator.
        Matcher {
            patterns: vec![re(
                r"\b(who\s+(made|created|built|designed)\s+(you|this)|who('?s| is)\s+(your|ur)\s+(creator|maker|developer))\b",
            )],
            respond: || {
                "I was crafted with care to help you stay organized and productive. Think of me \
                 as your digital sidekick!"
                    .into()
            },
        },
        // Capabilities.
        Matcher {
            patterns: vec![
                re(r"\b(what|how)\s+(can|do)\s+(you|u)\s+(do|help)\b"),
                re(r"\bwhat\s+(do|can)\s+(you|u)\b"),
                re(r"\b(your|ur)\s+(capabilities|features|functions)\b"),
            ],
            respond: || CAPABILITIES.into(),
        },
        // Help.
        Matcher {
            patterns: vec![
                re(r"^help\b"),
                re(r"\bhow\s+to\s+use\b"),
                re(r"\bhelp\s+me\b"),
            ],
            respond: || HELP.into(),
        },
        // Command reference / examples.
        Matcher {
            patterns: vec![re(
                r"^(explain|commands?|examples?|show\s+commands?|what\s+can\s+i\s+(say|type|do)|options)\b",
            )],
            respond: || COMMAND_REFERENCE.into(),
        },
        // Greetings.
        Matcher {
            patterns: vec![re(
                r"^(hi|hello|hey|good\s+(morning|afternoon|evening)|howdy|yo|sup|what'?s\s+up)\b",
            )],
            respond: || {
                "Hello! I'm ready to help you manage your tasks. What would you like to do today?"
                    .into()
            },
        },
        // Farewells.
        Matcher {
            patterns: vec![re(r"^(bye|goodbye|see\s+(you|ya)|later|good\s*night|cya|gtg)\b")],
            respond: || {
                "Goodbye! Stay productive and come back anytime you need help with your tasks! 👋"
                    .into()
            },
        },
        // Thanks.
        Matcher {
            patterns: vec![re(r"^(thanks|thank\s+you|thx|ty|appreciate\s+it)\b")],
            respond: || "You're welcome! Let me know if you need anything else. 😊".into(),
        },
        // How are you.
        Matcher {
            patterns: vec![
                re(r"\bhow\s+(are|r)\s+(you|u)\b"),
                re(r"\bhow('?s| is)\s+it\s+going\b"),
            ],
            respond: || {
                "I'm doing great, thanks for asking! Ready to help you stay organized. What can I \
                 do for you?"
                    .into()
            },
        },
        // Compliments.
        Matcher {
            patterns: vec![re(
                r"\b(you('?re| are)\s+(great|awesome|amazing|the\s+best|helpful|cool)|good\s+(job|work)|nice|well\s+done|love\s+(you|this))\b",
            )],
            respond: || "Aw, thank you! That means a lot. I'm here to make your life easier! 💪".into(),
        },
        // Apologies.
        Matcher {
            patterns: vec![re(r"^(sorry|my\s+bad|oops|whoops|apologies)\b")],
            respond: || "No worries at all! How can I help you?".into(),
        },
        // Frustration.
        Matcher {
            patterns: vec![re(
                r"\b(this\s+(sucks|is\s+bad)|you('?re| are)\s+(bad|useless|stupid|dumb)|i\s+hate\s+(you|this)|ugh|argh)\b",
            )],
            respond: || {
                "I'm sorry you're frustrated. Let me try to help - what are you trying to do? \
                 Maybe I can explain it better."
                    .into()
            },
        },
        // Jokes.
        Matcher {
            patterns: vec![re(
                r"\b(tell\s+(me\s+)?a\s+joke|make\s+me\s+laugh|say\s+something\s+funny|joke)\b",
            )],
            respond: || {
                JOKES
                    .choose(&mut rand::thread_rng())
                    .copied()
                    .unwrap_or(JOKES[0])
                    .into()
            },
        },
        // Motivation.
        Matcher {
            patterns: vec![re(
                r"\b(motivate\s+me|i('?m| am)\s+(stressed|overwhelmed|tired|lazy)|need\s+motivation|inspire\s+me)\b",
            )],
            respond: || {
                MOTIVATION
                    .choose(&mut rand::thread_rng())
                    .copied()
                    .unwrap_or(MOTIVATION[0])
                    .into()
            },
        },
        // Boredom.
        Matcher {
            patterns: vec![re(r"\b(i('?m| am)\s+bored|nothing\s+to\s+do|bored)\b")],
            respond: || {
                "Bored? Perfect time to get ahead! Try 'show my tasks' to see what you can knock \
                 out, or create a new task for something you've been putting off!"
                    .into()
            },
        },
        // Productivity tips.
        Matcher {
            patterns: vec![re(
                r"\b(productivity\s+tips?|how\s+to\s+be\s+(productive|organized)|tips?|advice)\b",
            )],
            respond: || {
                "Here are some productivity tips:\n\
                 • Break big tasks into smaller ones\n\
                 • Use priorities (urgent, high, normal, low)\n\
                 • Set specific times for tasks\n\
                 • Review your completed tasks to stay motivated\n\
                 • Don't forget to take breaks! 🧘"
                    .into()
            },
        },
        // Acknowledgment.
        Matcher {
            patterns: vec![re(r"^(ok|okay|alright|got\s+it|understood|sure|k|kk)\.?$")],
            respond: || "Great! What would you like to do next?".into(),
        },
        // Nevermind.
        Matcher {
            patterns: vec![re(r"^(never\s*mind|nvm|forget\s+it|cancel|nope|nothing)\b")],
            respond: || "No problem! Let me know when you need something.".into(),
        },
        // Love.
        Matcher {
            patterns: vec![re(r"\bi\s+(love|like)\s+(you|this|using\s+this)\b")],
            respond: || "That makes me happy! I love helping you stay on top of things! ❤️".into(),
        },
        // Date/time query.
        Matcher {
            patterns: vec![re(
                r"\b(what\s+(day|time)\s+is\s+it|what('?s| is)\s+(the\s+)?(date|time|day))\b",
            )],
            respond: || {
                let today = Local::now().format("%A, %B %-d, %Y");
                format!("Today is {today}. Need to create a task for today?")
            },
        },
        // Coin flip.
        Matcher {
            patterns: vec![re(r"\b(flip\s+a?\s*coin|heads\s+or\s+tails)\b")],
            respond: || {
                if rand::thread_rng().gen_bool(0.5) {
                    "🪙 Heads!".into()
                } else {
                    "🪙 Tails!".into()
                }
            },
        },
        // Dice roll.
        Matcher {
            patterns: vec![re(r"\b(roll\s+(a\s+)?dice?|roll\s+d6)\b")],
            respond: || {
                let roll = rand::thread_rng().gen_range(1..=6);
                format!("🎲 You rolled a {roll}!")
            },
        },
        // Easter eggs.
        Matcher {
            patterns: vec![re(r"\b(sing|song|music)\b")],
            respond: || {
                "🎵 Task, task, baby! Too many tasks to do today... 🎵 (I'm better at organizing \
                 than singing!)"
                    .into()
            },
        },
        Matcher {
            patterns: vec![re(r"\b(meaning\s+of\s+life|42)\b")],
            respond: || {
                "42? Ah, I see you're a person of culture! But here, the meaning of life is \
                 getting things done! 📋"
                    .into()
            },
        },
    ]
});

/// Return the canned reply for a conversational input, if any matcher hits.
///
/// Matching runs over the lowercased, trimmed input.
#[must_use]
pub fn conversational_response(text: &str) -> Option<String> {
    let lower = text.to_lowercase().trim().to_string();
    MATCHERS
        .iter()
        .find(|m| m.patterns.iter().any(|p| p.is_match(&lower)))
        .map(|m| (m.respond)())
}
