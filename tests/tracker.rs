#[cfg(test)]
mod tests {
    use studymate::db::storage::{Storage, QUIZZES_TAKEN, STUDY_HOURS, STUDY_TASKS};
    use studymate::libs::tracker::StudyTracker;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct TrackerTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for TrackerTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            TrackerTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_empty_store_loads_empty_state(_ctx: &mut TrackerTestContext) {
        let tracker = StudyTracker::load(Storage::new().unwrap()).unwrap();
        let snapshot = tracker.snapshot();

        assert!(snapshot.tasks.is_empty());
        assert_eq!(snapshot.study_hours, 0);
        assert_eq!(snapshot.quizzes_taken, 0);
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_schedule_appends_in_order_with_unique_ids(_ctx: &mut TrackerTestContext) {
        let mut tracker = StudyTracker::load(Storage::new().unwrap()).unwrap();

        for i in 1..=5 {
            tracker.schedule(&format!("Task {}", i), "2024-05-01", "09:00").unwrap();
        }

        let snapshot = tracker.snapshot();
        assert_eq!(snapshot.tasks.len(), 5);

        // Insertion order is preserved
        let names: Vec<&str> = snapshot.tasks.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Task 1", "Task 2", "Task 3", "Task 4", "Task 5"]);

        // Ids are unique even when scheduled within the same millisecond
        let mut ids: Vec<i64> = snapshot.tasks.iter().map(|t| t.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_scheduled_task_starts_uncompleted(_ctx: &mut TrackerTestContext) {
        let mut tracker = StudyTracker::load(Storage::new().unwrap()).unwrap();

        let task = tracker.schedule("Read Ch.3", "2024-05-01", "14:00").unwrap();
        assert_eq!(task.name, "Read Ch.3");
        assert_eq!(task.date, "2024-05-01");
        assert_eq!(task.time, "14:00");
        assert!(!task.completed);
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_complete_removes_task_and_advances_counters(_ctx: &mut TrackerTestContext) {
        let mut tracker = StudyTracker::load(Storage::new().unwrap()).unwrap();

        let first = tracker.schedule("First", "2024-05-01", "09:00").unwrap();
        let second = tracker.schedule("Second", "2024-05-02", "10:00").unwrap();

        assert!(tracker.complete(first.id).unwrap());

        let snapshot = tracker.snapshot();
        assert_eq!(snapshot.tasks.len(), 1);
        assert_eq!(snapshot.tasks[0].id, second.id);
        assert_eq!(snapshot.study_hours, 1);
        assert_eq!(snapshot.quizzes_taken, 1);
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_complete_unknown_id_is_a_no_op(_ctx: &mut TrackerTestContext) {
        let mut tracker = StudyTracker::load(Storage::new().unwrap()).unwrap();
        tracker.schedule("Keep me", "2024-05-01", "09:00").unwrap();

        let before = tracker.snapshot();
        assert!(!tracker.complete(-1).unwrap());

        assert_eq!(tracker.snapshot(), before);
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_duplicate_completion_is_tolerated(_ctx: &mut TrackerTestContext) {
        let mut tracker = StudyTracker::load(Storage::new().unwrap()).unwrap();
        let task = tracker.schedule("Once", "2024-05-01", "09:00").unwrap();

        assert!(tracker.complete(task.id).unwrap());
        assert!(!tracker.complete(task.id).unwrap());

        // Counters advanced exactly once
        let snapshot = tracker.snapshot();
        assert_eq!(snapshot.study_hours, 1);
        assert_eq!(snapshot.quizzes_taken, 1);
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_snapshot_has_no_side_effects(_ctx: &mut TrackerTestContext) {
        let mut tracker = StudyTracker::load(Storage::new().unwrap()).unwrap();
        tracker.schedule("Stable", "2024-05-01", "09:00").unwrap();

        assert_eq!(tracker.snapshot(), tracker.snapshot());
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_state_round_trips_through_storage(_ctx: &mut TrackerTestContext) {
        let mut tracker = StudyTracker::load(Storage::new().unwrap()).unwrap();
        tracker.schedule("Read Ch.3", "2024-05-01", "14:00").unwrap();
        let kept = tracker.schedule("Review notes", "2024-05-02", "16:30").unwrap();
        let done = tracker.schedule("Flashcards", "2024-05-03", "08:15").unwrap();
        tracker.complete(done.id).unwrap();
        let saved = tracker.snapshot();

        // A fresh tracker over the same store sees identical state
        let reloaded = StudyTracker::load(Storage::new().unwrap()).unwrap();
        let snapshot = reloaded.snapshot();
        assert_eq!(snapshot, saved);
        assert_eq!(snapshot.tasks.len(), 2);
        assert_eq!(snapshot.tasks[1].id, kept.id);
        assert_eq!(snapshot.study_hours, 1);
        assert_eq!(snapshot.quizzes_taken, 1);
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_scenario_schedule_then_complete(_ctx: &mut TrackerTestContext) {
        let mut tracker = StudyTracker::load(Storage::new().unwrap()).unwrap();

        let task = tracker.schedule("Read Ch.3", "2024-05-01", "14:00").unwrap();
        assert_eq!(tracker.snapshot().tasks.len(), 1);
        assert_eq!(tracker.snapshot().tasks[0].name, "Read Ch.3");

        assert!(tracker.complete(task.id).unwrap());

        let snapshot = tracker.snapshot();
        assert!(snapshot.tasks.is_empty());
        assert_eq!(snapshot.study_hours, 1);
        assert_eq!(snapshot.quizzes_taken, 1);
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_malformed_task_list_fails_closed(_ctx: &mut TrackerTestContext) {
        let mut storage = Storage::new().unwrap();
        storage.set(STUDY_TASKS, "{not json").unwrap();
        storage.set_counter(STUDY_HOURS, 7).unwrap();

        // The broken list degrades to empty; the readable counter survives
        let tracker = StudyTracker::load(storage).unwrap();
        let snapshot = tracker.snapshot();
        assert!(snapshot.tasks.is_empty());
        assert_eq!(snapshot.study_hours, 7);
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_malformed_counter_fails_closed_to_zero(_ctx: &mut TrackerTestContext) {
        let mut storage = Storage::new().unwrap();
        storage.set(STUDY_HOURS, "a lot").unwrap();
        storage.set_counter(QUIZZES_TAKEN, 3).unwrap();

        let tracker = StudyTracker::load(storage).unwrap();
        let snapshot = tracker.snapshot();
        assert_eq!(snapshot.study_hours, 0);
        assert_eq!(snapshot.quizzes_taken, 3);
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_recovered_state_is_written_back_on_next_flush(_ctx: &mut TrackerTestContext) {
        let mut storage = Storage::new().unwrap();
        storage.set(STUDY_TASKS, "][").unwrap();

        let mut tracker = StudyTracker::load(storage).unwrap();
        tracker.schedule("Fresh start", "2024-06-01", "10:00").unwrap();

        // The flush replaced the broken value with a valid list
        let reloaded = StudyTracker::load(Storage::new().unwrap()).unwrap();
        assert_eq!(reloaded.snapshot().tasks.len(), 1);
        assert_eq!(reloaded.snapshot().tasks[0].name, "Fresh start");
    }
}
