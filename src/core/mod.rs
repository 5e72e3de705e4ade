//! Core domain models and demo state machines

pub mod chat;
pub mod effects;
pub mod notify;
pub mod schedule;
#[cfg(test)]
mod tests;

pub use chat::{
    ADVISOR_GREETING, ADVISOR_REPLIES, ChatLog, ChatMessage, REPLY_DELAY_MS, ReplySampler, Sender,
};
pub use effects::{RevealLatch, parallax_offsets};
pub use notify::{Toast, ToastLevel};
pub use schedule::{
    ANALYZE_DELAY_MS, EmotionProfile, Priority, ScheduleTask, Session, UpcomingTask,
    initial_schedule, initial_upcoming, run_analysis, toggle_task,
};
