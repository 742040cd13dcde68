#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, NaiveDateTime};
    use tasktime::libs::clock::ManualClock;
    use tasktime::libs::entry::EntryField;
    use tasktime::libs::session::StartOutcome;
    use tasktime::libs::store::{MemoryStore, LOG_KEY, SESSION_KEY, TITLE_KEY};
    use tasktime::libs::tracker::{Tracker, TrackerError, DEFAULT_TITLE};
    use test_context::{test_context, TestContext};

    fn at(hour: u32, min: u32, sec: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap().and_hms_opt(hour, min, sec).unwrap()
    }

    /// A tracker on a manual clock set to 09:00:00 and an empty in-memory store.
    struct TrackerTestContext {
        clock: ManualClock,
        store: MemoryStore,
        tracker: Tracker<ManualClock, MemoryStore>,
    }

    impl TestContext for TrackerTestContext {
        fn setup() -> Self {
            let clock = ManualClock::new(at(9, 0, 0));
            let store = MemoryStore::new();
            let tracker = Tracker::load(clock.clone(), store.clone()).unwrap();
            TrackerTestContext { clock, store, tracker }
        }
    }

    impl TrackerTestContext {
        /// Runs one full start/stop cycle lasting `minutes`.
        fn log_task(&mut self, task: &str, minutes: i64) {
            self.tracker.start(task);
            self.clock.advance(Duration::minutes(minutes));
            self.tracker.stop().unwrap();
        }

        fn tasks(&self) -> Vec<&str> {
            self.tracker.entries().iter().map(|e| e.task.as_str()).collect()
        }
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_new_tracker_is_idle(ctx: &mut TrackerTestContext) {
        assert!(!ctx.tracker.is_running());
        assert!(ctx.tracker.entries().is_empty());
        assert_eq!(ctx.tracker.title(), DEFAULT_TITLE);
        assert_eq!(ctx.tracker.last_stop(), None);
        assert_eq!(ctx.tracker.elapsed(), None);
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_start_then_stop_appends_one_entry(ctx: &mut TrackerTestContext) {
        assert!(matches!(ctx.tracker.start("Write report"), StartOutcome::Started(_)));
        assert!(ctx.tracker.is_running());

        ctx.clock.advance(Duration::seconds(5));
        let entry = ctx.tracker.stop().unwrap();

        assert_eq!(entry.task, "Write report");
        assert_eq!(entry.date, "2025-01-15");
        assert_eq!(entry.start_time, "09:00:00");
        assert_eq!(entry.stop_time, "09:00:05");
        assert_eq!(entry.duration, "00:00:05");
        assert_eq!(ctx.tracker.entries(), &[entry]);
        assert!(!ctx.tracker.is_running());
        assert_eq!(ctx.store.slot(SESSION_KEY).as_deref(), Some(""));
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_duration_is_floored_to_seconds(ctx: &mut TrackerTestContext) {
        ctx.tracker.start("Calls");
        ctx.clock.advance(Duration::milliseconds(5_999));
        assert_eq!(ctx.tracker.stop().unwrap().duration, "00:00:05");

        ctx.tracker.start("Calls");
        ctx.clock.advance(Duration::milliseconds(999));
        assert_eq!(ctx.tracker.stop().unwrap().duration, "00:00:00");
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_session_across_midnight(ctx: &mut TrackerTestContext) {
        ctx.clock.set(at(23, 0, 0));
        ctx.tracker.start("Release");
        ctx.clock.advance(Duration::hours(2));

        let entry = ctx.tracker.stop().unwrap();
        assert_eq!(entry.date, "2025-01-15");
        assert_eq!(entry.start_time, "23:00:00");
        assert_eq!(entry.stop_time, "01:00:00");
        assert_eq!(entry.duration, "02:00:00");
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_long_session_hours_are_not_wrapped(ctx: &mut TrackerTestContext) {
        ctx.tracker.start("Migration");
        ctx.clock.advance(Duration::hours(26) + Duration::seconds(1));
        assert_eq!(ctx.tracker.stop().unwrap().duration, "26:00:01");
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_stop_without_start_is_noop(ctx: &mut TrackerTestContext) {
        assert_eq!(ctx.tracker.stop(), None);
        assert!(ctx.tracker.entries().is_empty());
        assert_eq!(ctx.tracker.last_stop(), None);
        assert_eq!(ctx.store.slot(LOG_KEY), None);
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_empty_task_name_is_ignored(ctx: &mut TrackerTestContext) {
        assert_eq!(ctx.tracker.start(""), StartOutcome::EmptyTaskName);
        assert_eq!(ctx.tracker.start("   "), StartOutcome::EmptyTaskName);
        assert!(!ctx.tracker.is_running());
        assert_eq!(ctx.store.slot(SESSION_KEY), None);
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_task_name_is_trimmed(ctx: &mut TrackerTestContext) {
        ctx.tracker.start("  Docs  ");
        assert_eq!(ctx.tracker.active().unwrap().task, "Docs");
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_start_while_running_is_ignored(ctx: &mut TrackerTestContext) {
        ctx.tracker.start("First");
        ctx.clock.advance(Duration::minutes(3));

        match ctx.tracker.start("Second") {
            StartOutcome::AlreadyRunning(session) => {
                assert_eq!(session.task, "First");
                assert_eq!(session.started_at, at(9, 0, 0));
            }
            other => panic!("unexpected outcome: {:?}", other),
        }

        let entry = ctx.tracker.stop().unwrap();
        assert_eq!(entry.task, "First");
        assert_eq!(entry.duration, "00:03:00");
        assert_eq!(ctx.tracker.entries().len(), 1);
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_last_stop_is_cleared_by_start(ctx: &mut TrackerTestContext) {
        ctx.log_task("Review", 10);
        assert_eq!(ctx.tracker.last_stop(), Some(at(9, 10, 0)));

        ctx.tracker.start("Review");
        assert_eq!(ctx.tracker.last_stop(), None);
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_elapsed_tracks_running_session(ctx: &mut TrackerTestContext) {
        ctx.tracker.start("Standup");
        ctx.clock.advance(Duration::seconds(90));
        assert_eq!(ctx.tracker.elapsed(), Some(Duration::seconds(90)));

        ctx.tracker.stop();
        assert_eq!(ctx.tracker.elapsed(), None);
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_delete_preserves_order(ctx: &mut TrackerTestContext) {
        ctx.log_task("A", 1);
        ctx.log_task("B", 2);
        ctx.log_task("C", 3);

        let removed = ctx.tracker.delete_entry(1).unwrap();
        assert_eq!(removed.task, "B");
        assert_eq!(ctx.tasks(), vec!["A", "C"]);
        assert_eq!(ctx.tracker.entries()[1].duration, "00:03:00");
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_edit_task_changes_only_that_field(ctx: &mut TrackerTestContext) {
        ctx.log_task("A", 1);
        ctx.log_task("B", 2);
        let before = ctx.tracker.entries().to_vec();

        let edited = ctx.tracker.edit_entry(0, EntryField::Task, "Renamed").unwrap().clone();

        assert_eq!(edited.task, "Renamed");
        assert_eq!(edited.date, before[0].date);
        assert_eq!(edited.start_time, before[0].start_time);
        assert_eq!(edited.stop_time, before[0].stop_time);
        assert_eq!(edited.duration, before[0].duration);
        assert_eq!(ctx.tracker.entries()[1], before[1]);
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_edit_times_keeps_duration(ctx: &mut TrackerTestContext) {
        ctx.log_task("A", 15);

        ctx.tracker.edit_entry(0, EntryField::StartTime, "08:00:00").unwrap();
        ctx.tracker.edit_entry(0, EntryField::StopTime, "not a time").unwrap();

        let entry = &ctx.tracker.entries()[0];
        assert_eq!(entry.start_time, "08:00:00");
        assert_eq!(entry.stop_time, "not a time");
        assert_eq!(entry.duration, "00:15:00");
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_out_of_range_index_is_rejected(ctx: &mut TrackerTestContext) {
        ctx.log_task("A", 1);
        ctx.log_task("B", 1);

        let err = ctx.tracker.edit_entry(2, EntryField::Task, "X").unwrap_err();
        assert!(matches!(err, TrackerError::IndexOutOfRange { index: 2, len: 2 }));

        let err = ctx.tracker.delete_entry(7).unwrap_err();
        assert!(matches!(err, TrackerError::IndexOutOfRange { index: 7, len: 2 }));

        assert_eq!(ctx.tasks(), vec!["A", "B"]);
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_total_duration_skips_unparseable(ctx: &mut TrackerTestContext) {
        ctx.log_task("A", 10);
        ctx.log_task("B", 20);
        ctx.log_task("C", 5);
        assert_eq!(ctx.tracker.total_duration(), Duration::minutes(35));

        ctx.tracker.edit_entry(2, EntryField::Duration, "about five minutes").unwrap();
        assert_eq!(ctx.tracker.total_duration(), Duration::minutes(30));
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_set_title_is_persisted(ctx: &mut TrackerTestContext) {
        ctx.tracker.set_title("Sprint 12");
        assert_eq!(ctx.tracker.title(), "Sprint 12");
        assert_eq!(ctx.store.slot(TITLE_KEY).as_deref(), Some("Sprint 12"));
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_every_mutation_writes_the_log(ctx: &mut TrackerTestContext) {
        ctx.log_task("A", 1);
        assert!(ctx.store.slot(LOG_KEY).unwrap().contains("\"A\""));

        ctx.tracker.edit_entry(0, EntryField::Task, "B").unwrap();
        assert!(ctx.store.slot(LOG_KEY).unwrap().contains("\"B\""));

        ctx.tracker.delete_entry(0).unwrap();
        assert_eq!(ctx.store.slot(LOG_KEY).as_deref(), Some("[]"));
    }
}
