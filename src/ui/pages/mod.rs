//! Page components, one per route

mod chatbot;
mod home;
mod not_found;
mod schedule;

pub use chatbot::ChatbotPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use schedule::SchedulePage;
