//! Chat demo state machine
//!
//! The AI Advisor page is a scripted demo: every reply is drawn uniformly at
//! random from a fixed set of canned advice strings after a fixed delay.
//! The log itself is append-only and insertion-ordered.

use chrono::{DateTime, Utc};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Delay before a simulated reply is appended, in milliseconds
pub const REPLY_DELAY_MS: u32 = 1000;

/// Greeting shown when the chat opens
pub const ADVISOR_GREETING: &str = "Hi there! I'm your EmoFlow AI assistant. How are you feeling today, and how can I help optimize your productivity?";

/// Fixed set of canned advisor replies
pub const ADVISOR_REPLIES: [&str; 7] = [
    "Based on your current emotional state, I recommend taking a short 5-minute break to reset your focus.",
    "I notice you're feeling energetic! Now would be a great time to tackle that challenging task you've been postponing.",
    "Your productivity tends to peak in the morning. Consider scheduling your most important tasks before noon.",
    "I've detected signs of mental fatigue. Try the 2-minute breathing exercise in our Wellness tab.",
    "According to your patterns, you work best in 45-minute focus sessions followed by a 10-minute break.",
    "Your emotional state suggests you might be experiencing some stress. Consider prioritizing tasks that bring you a sense of accomplishment.",
    "You've been working for 2 hours straight. Remember to stand up, stretch, and hydrate to maintain optimal productivity.",
];

/// Who authored a chat message
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// A single chat message, immutable once created
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::User,
            timestamp: Utc::now(),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::Bot,
            timestamp: Utc::now(),
        }
    }

    /// HH:MM display form of the timestamp
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}

/// Append-only message log for the advisor demo
///
/// Messages are never mutated or removed; ordering is insertion order.
/// Replies scheduled for overlapping sends may interleave: each one fires
/// a fixed delay after its own send, so the log guarantees presence, not
/// reply ordering across concurrent delays.
#[derive(Clone, Debug, Default)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
}

impl ChatLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Log pre-seeded with the advisor greeting
    pub fn with_greeting() -> Self {
        Self {
            messages: vec![ChatMessage::bot(ADVISOR_GREETING)],
        }
    }

    /// Submit user input. Empty or whitespace-only input is rejected
    /// silently and leaves the log untouched.
    pub fn submit(&mut self, input: &str) -> bool {
        if input.trim().is_empty() {
            return false;
        }
        self.messages.push(ChatMessage::user(input));
        true
    }

    /// Append a bot reply
    pub fn push_reply(&mut self, text: impl Into<String>) {
        self.messages.push(ChatMessage::bot(text));
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Uniform sampler over the canned reply set
///
/// Owns its rng so tests can seed it and assert deterministic draws.
#[derive(Clone, Debug)]
pub struct ReplySampler {
    rng: SmallRng,
}

impl ReplySampler {
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Draw one reply; draws are independent and repeats are allowed
    pub fn next(&mut self) -> &'static str {
        ADVISOR_REPLIES[self.rng.gen_range(0..ADVISOR_REPLIES.len())]
    }
}

impl Default for ReplySampler {
    fn default() -> Self {
        Self::new()
    }
}
