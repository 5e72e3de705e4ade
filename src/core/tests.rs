#[cfg(test)]
mod tests {
    use crate::core::{
        ADVISOR_GREETING, ADVISOR_REPLIES, ChatLog, EmotionProfile, Priority, ReplySampler,
        RevealLatch, Sender, Session, Toast, ToastLevel, initial_schedule, initial_upcoming,
        parallax_offsets, run_analysis, toggle_task,
    };
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn test_chat_log_starts_with_greeting() {
        let log = ChatLog::with_greeting();

        assert_eq!(log.len(), 1);
        assert_eq!(log.messages()[0].sender, Sender::Bot);
        assert_eq!(log.messages()[0].text, ADVISOR_GREETING);
    }

    #[test]
    fn test_chat_submit_appends_user_message() {
        let mut log = ChatLog::with_greeting();

        assert!(log.submit("How am I doing?"));
        assert_eq!(log.len(), 2);
        assert_eq!(log.messages()[1].sender, Sender::User);
        assert_eq!(log.messages()[1].text, "How am I doing?");
    }

    #[test]
    fn test_chat_submit_rejects_blank_input() {
        let mut log = ChatLog::with_greeting();

        assert!(!log.submit(""));
        assert!(!log.submit("   "));
        assert!(!log.submit("\t\n"));
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_chat_log_is_append_only_and_ordered() {
        let mut log = ChatLog::new();
        log.submit("first");
        log.push_reply(ADVISOR_REPLIES[0]);
        log.submit("second");
        log.push_reply(ADVISOR_REPLIES[1]);

        let senders: Vec<_> = log.messages().iter().map(|m| m.sender).collect();
        assert_eq!(
            senders,
            vec![Sender::User, Sender::Bot, Sender::User, Sender::Bot]
        );
        assert_eq!(log.messages()[0].text, "first");
        assert_eq!(log.messages()[2].text, "second");
    }

    #[test]
    fn test_overlapping_sends_yield_two_replies() {
        // Two sends inside the delay window: both replies must appear, in
        // whatever interleaving, giving 2 user + 2 bot messages.
        let mut log = ChatLog::new();
        let mut sampler = ReplySampler::seeded(7);

        log.submit("hello");
        log.submit("world");
        log.push_reply(sampler.next());
        log.push_reply(sampler.next());

        assert_eq!(log.len(), 4);
        let users = log.messages().iter().filter(|m| m.sender == Sender::User).count();
        let bots = log.messages().iter().filter(|m| m.sender == Sender::Bot).count();
        assert_eq!(users, 2);
        assert_eq!(bots, 2);
    }

    #[test]
    fn test_sampler_draws_from_reply_set() {
        let mut sampler = ReplySampler::seeded(42);

        for _ in 0..100 {
            let reply = sampler.next();
            assert!(ADVISOR_REPLIES.contains(&reply));
        }
    }

    #[test]
    fn test_sampler_is_deterministic_under_fixed_seed() {
        let mut a = ReplySampler::seeded(1234);
        let mut b = ReplySampler::seeded(1234);

        let draws_a: Vec<_> = (0..20).map(|_| a.next()).collect();
        let draws_b: Vec<_> = (0..20).map(|_| b.next()).collect();
        assert_eq!(draws_a, draws_b);
    }

    #[test]
    fn test_login_rejects_blank_username() {
        let mut session = Session::new();

        assert!(!session.login(""));
        assert!(!session.login("   "));
        assert!(!session.logged_in);
        assert!(session.username.is_empty());
    }

    #[test]
    fn test_login_succeeds_and_trims_username() {
        let mut session = Session::new();

        assert!(session.login("  Alice  "));
        assert!(session.logged_in);
        assert_eq!(session.username, "Alice");
    }

    #[test]
    fn test_login_is_irreversible() {
        let mut session = Session::new();
        session.login("Alice");

        // A later rejected attempt must not log the session out
        assert!(!session.login("  "));
        assert!(session.logged_in);
        assert_eq!(session.username, "Alice");
    }

    #[test]
    fn test_initial_schedule_shape() {
        let tasks = initial_schedule();

        assert_eq!(tasks.len(), 7);
        let ids: Vec<_> = tasks.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7]);
        assert!(tasks[0].completed);
        assert!(tasks[1].completed);
        assert!(!tasks[2].completed);
    }

    #[test]
    fn test_initial_upcoming_shape() {
        let upcoming = initial_upcoming();

        assert_eq!(upcoming.len(), 4);
        assert_eq!(upcoming[0].priority, Priority::Critical);
        assert_eq!(upcoming[0].date, "Tomorrow");
    }

    #[test]
    fn test_toggle_task_is_self_inverse() {
        let mut tasks = initial_schedule();
        let original: Vec<_> = tasks.iter().map(|t| t.completed).collect();

        for id in 1..=7 {
            toggle_task(&mut tasks, id);
            toggle_task(&mut tasks, id);
        }

        let after: Vec<_> = tasks.iter().map(|t| t.completed).collect();
        assert_eq!(original, after);
    }

    #[test]
    fn test_toggle_task_flips_exactly_one_row() {
        let mut tasks = initial_schedule();
        toggle_task(&mut tasks, 3);

        assert!(tasks[2].completed);
        for (i, task) in tasks.iter().enumerate() {
            if i != 2 {
                assert_eq!(task.completed, initial_schedule()[i].completed);
            }
        }
    }

    #[test]
    fn test_toggle_task_ignores_unknown_id() {
        let mut tasks = initial_schedule();
        let before = tasks.clone();
        toggle_task(&mut tasks, 99);
        assert_eq!(tasks, before);
    }

    #[test]
    fn test_initial_productivity_score() {
        let profile = EmotionProfile::initial();
        // round((75 + (100 - 30)) / 2) = round(72.5) = 73
        assert_eq!(profile.productivity_score(), 73);
    }

    #[test]
    fn test_productivity_score_recomputes_from_profile() {
        let profile = EmotionProfile {
            focus: 80.0,
            creativity: 65.0,
            stress: 25.0,
        };
        assert_eq!(profile.productivity_score(), 78);
    }

    #[test]
    fn test_analyze_step_stays_within_clamp_ranges() {
        let mut rng = SmallRng::seed_from_u64(99);
        let mut profile = EmotionProfile::initial();

        for _ in 0..500 {
            profile.analyze_step(&mut rng);
            assert!((50.0..=100.0).contains(&profile.focus));
            assert!((40.0..=100.0).contains(&profile.creativity));
            assert!((10.0..=100.0).contains(&profile.stress));
        }
    }

    #[test]
    fn test_analyze_step_moves_at_most_ten_per_field() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut profile = EmotionProfile::initial();

        for _ in 0..200 {
            let before = profile;
            profile.analyze_step(&mut rng);
            // Clamping can only shrink a step, never grow it
            assert!((profile.focus - before.focus).abs() <= 10.0 + 1e-9);
            assert!((profile.creativity - before.creativity).abs() <= 10.0 + 1e-9);
            assert!((profile.stress - before.stress).abs() <= 10.0 + 1e-9);
        }
    }

    #[test]
    fn test_run_analysis_keeps_task_set_fixed() {
        let mut rng = SmallRng::seed_from_u64(11);
        let mut profile = EmotionProfile::initial();
        let mut tasks = initial_schedule();

        run_analysis(&mut profile, &mut tasks, &mut rng);

        assert_eq!(tasks.len(), 7);
        let ids: Vec<_> = tasks.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7]);
        for task in &tasks {
            // Only the completion flag may change
            let initial = &initial_schedule()[(task.id - 1) as usize];
            assert_eq!(task.task, initial.task);
            assert_eq!(task.time, initial.time);
            assert_eq!(task.priority, initial.priority);
        }
    }

    #[test]
    fn test_run_analysis_flip_rate_is_plausible() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut flips = 0usize;
        let rounds = 1000;

        for _ in 0..rounds {
            let mut profile = EmotionProfile::initial();
            let mut tasks = initial_schedule();
            let before: Vec<_> = tasks.iter().map(|t| t.completed).collect();
            run_analysis(&mut profile, &mut tasks, &mut rng);
            flips += tasks
                .iter()
                .zip(&before)
                .filter(|(t, b)| t.completed != **b)
                .count();
        }

        // Bernoulli(0.3) over 7 tasks * 1000 rounds: expect ~2100 flips
        let rate = flips as f64 / (rounds * 7) as f64;
        assert!((0.25..0.35).contains(&rate), "flip rate {rate} out of range");
    }

    #[test]
    fn test_parallax_center_is_neutral() {
        let ((ax, ay), (bx, by)) = parallax_offsets(960.0, 540.0, 1920.0, 1080.0);
        assert_eq!((ax, ay), (0.0, 0.0));
        assert_eq!((bx, by), (0.0, 0.0));
    }

    #[test]
    fn test_parallax_corner_offsets() {
        // Bottom-right corner: dx = dy = 1
        let ((ax, ay), (bx, by)) = parallax_offsets(1920.0, 1080.0, 1920.0, 1080.0);
        assert_eq!((ax, ay), (-30.0, -30.0));
        assert_eq!((bx, by), (20.0, 20.0));

        // Top-left corner: dx = dy = -1
        let ((ax, ay), (bx, by)) = parallax_offsets(0.0, 0.0, 1920.0, 1080.0);
        assert_eq!((ax, ay), (30.0, 30.0));
        assert_eq!((bx, by), (-20.0, -20.0));
    }

    #[test]
    fn test_reveal_latch_is_one_shot() {
        let mut latch = RevealLatch::new();

        assert!(latch.mark(0));
        assert!(!latch.mark(0));
        assert!(latch.is_revealed(0));
        assert!(!latch.is_revealed(1));
        assert_eq!(latch.revealed_count(), 1);
    }

    #[test]
    fn test_reveal_latch_marks_persist() {
        let mut latch = RevealLatch::new();
        for key in 0..5 {
            latch.mark(key);
        }
        for key in 0..5 {
            // Re-triggering never clears a mark
            latch.mark(key);
            assert!(latch.is_revealed(key));
        }
        assert_eq!(latch.revealed_count(), 5);
    }

    #[test]
    fn test_toast_constructors() {
        let success = Toast::success("Schedule analysis complete")
            .with_description("We've analyzed your emotional patterns.");
        assert_eq!(success.level, ToastLevel::Success);
        assert!(success.auto_dismiss_ms.is_some());
        assert!(success.description.is_some());

        let error = Toast::error("Please enter your name to continue");
        assert_eq!(error.level, ToastLevel::Error);
        assert!(error.auto_dismiss_ms.is_none());
        assert!(error.description.is_none());
    }
}
