//! Schedule demo state machine
//!
//! Owns the mock data behind the schedule dashboard: the login gate, the
//! fixed task list, and the randomized "emotion analysis" that nudges the
//! emotion profile inside clamped bounds and flips task completion flags.

use rand::Rng;

/// Delay before analysis results are applied, in milliseconds
pub const ANALYZE_DELAY_MS: u32 = 2000;

/// Probability that the analyze operation flips a task's completion flag
pub const TASK_FLIP_PROBABILITY: f64 = 0.3;

/// Task priority as displayed in the tables
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Priority {
    Medium,
    High,
    Critical,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Critical => "Critical",
        }
    }
}

/// One row of today's schedule
///
/// The collection is fixed at initialization; only `completed` ever changes.
#[derive(Clone, Debug, PartialEq)]
pub struct ScheduleTask {
    pub id: u32,
    pub time: &'static str,
    pub task: &'static str,
    pub emotion_state: &'static str,
    pub priority: Priority,
    pub completed: bool,
}

/// Read-only row of the upcoming tasks table
#[derive(Clone, Debug, PartialEq)]
pub struct UpcomingTask {
    pub id: u32,
    pub date: &'static str,
    pub task: &'static str,
    pub emotion_state: &'static str,
    pub priority: Priority,
}

/// Initial fake schedule
pub fn initial_schedule() -> Vec<ScheduleTask> {
    vec![
        ScheduleTask { id: 1, time: "09:00 - 10:30", task: "Creative Brief Development", emotion_state: "High Focus", priority: Priority::High, completed: true },
        ScheduleTask { id: 2, time: "10:45 - 11:30", task: "Team Standup Meeting", emotion_state: "Social Energy", priority: Priority::Medium, completed: true },
        ScheduleTask { id: 3, time: "11:30 - 12:30", task: "Client Proposal Review", emotion_state: "Critical Thinking", priority: Priority::High, completed: false },
        ScheduleTask { id: 4, time: "12:30 - 13:15", task: "Lunch Break + Mindfulness", emotion_state: "Rest & Recovery", priority: Priority::Medium, completed: false },
        ScheduleTask { id: 5, time: "13:30 - 15:00", task: "Product Development", emotion_state: "Deep Work", priority: Priority::High, completed: false },
        ScheduleTask { id: 6, time: "15:15 - 16:00", task: "Email & Communication", emotion_state: "Administrative", priority: Priority::Medium, completed: false },
        ScheduleTask { id: 7, time: "16:00 - 17:30", task: "Strategic Planning Session", emotion_state: "Creative Energy", priority: Priority::High, completed: false },
    ]
}

/// Initial upcoming tasks, display-only
pub fn initial_upcoming() -> Vec<UpcomingTask> {
    vec![
        UpcomingTask { id: 1, date: "Tomorrow", task: "Quarterly Report Analysis", emotion_state: "Deep Focus Required", priority: Priority::Critical },
        UpcomingTask { id: 2, date: "Tomorrow", task: "Team Feedback Sessions", emotion_state: "Empathetic Listening", priority: Priority::High },
        UpcomingTask { id: 3, date: "In 2 days", task: "Project Timeline Review", emotion_state: "Strategic Thinking", priority: Priority::Medium },
        UpcomingTask { id: 4, date: "In 3 days", task: "Client Presentation", emotion_state: "Confident Energy", priority: Priority::High },
    ]
}

/// Three clamped gauges shown on the dashboard
///
/// Purely presentational numbers; the analyze operation performs a random
/// walk with per-field floors and ceilings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EmotionProfile {
    pub focus: f64,
    pub creativity: f64,
    pub stress: f64,
}

impl EmotionProfile {
    pub const FOCUS_RANGE: (f64, f64) = (50.0, 100.0);
    pub const CREATIVITY_RANGE: (f64, f64) = (40.0, 100.0);
    pub const STRESS_RANGE: (f64, f64) = (10.0, 100.0);

    pub fn initial() -> Self {
        Self {
            focus: 75.0,
            creativity: 60.0,
            stress: 30.0,
        }
    }

    /// One analysis step: add an independent uniform delta in [-10, +10] to
    /// each field, then clamp to its range.
    pub fn analyze_step(&mut self, rng: &mut impl Rng) {
        self.focus = clamp(self.focus + delta(rng), Self::FOCUS_RANGE);
        self.creativity = clamp(self.creativity + delta(rng), Self::CREATIVITY_RANGE);
        self.stress = clamp(self.stress + delta(rng), Self::STRESS_RANGE);
    }

    /// Derived display value, recomputed each render and never stored
    pub fn productivity_score(&self) -> u32 {
        ((self.focus + (100.0 - self.stress)) / 2.0).round() as u32
    }
}

fn delta(rng: &mut impl Rng) -> f64 {
    rng.gen_range(-10.0..=10.0)
}

fn clamp(value: f64, (lo, hi): (f64, f64)) -> f64 {
    value.clamp(lo, hi)
}

/// Flip the completion flag of the task with the given id
pub fn toggle_task(tasks: &mut [ScheduleTask], id: u32) {
    if let Some(task) = tasks.iter_mut().find(|t| t.id == id) {
        task.completed = !task.completed;
    }
}

/// The analyze operation: random-walk the profile and independently flip
/// each task's completion flag with probability 0.3.
pub fn run_analysis(profile: &mut EmotionProfile, tasks: &mut [ScheduleTask], rng: &mut impl Rng) {
    profile.analyze_step(rng);
    for task in tasks.iter_mut() {
        if rng.gen_bool(TASK_FLIP_PROBABILITY) {
            task.completed = !task.completed;
        }
    }
}

/// Login gate for the schedule page
///
/// The only transition is logged-out to logged-in; there is no logout path,
/// so once `logged_in` is true it stays true for the page lifetime.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub logged_in: bool,
    pub username: String,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attempt login. A name that is empty after trimming is rejected and
    /// the session is unchanged.
    pub fn login(&mut self, name: &str) -> bool {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.logged_in = true;
        self.username = trimmed.to_string();
        true
    }
}
