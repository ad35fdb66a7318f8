#[cfg(test)]
mod tests {
    use studymate::db::storage::{Storage, QUIZZES_TAKEN, QUIZ_HISTORY};
    use studymate::libs::quiz::{self, Answer, Question, QuizResult, QuizStore};
    use studymate::libs::tracker::StudyTracker;
    use std::fs;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct QuizTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for QuizTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            QuizTestContext { temp_dir }
        }
    }

    #[test]
    fn test_builtin_bank_is_askable() {
        let bank = quiz::builtin_bank();
        assert_eq!(bank.len(), 5);
        for question in &bank {
            assert!(question.is_askable());
            assert_eq!(question.answers.len(), 4);
        }
    }

    #[test]
    fn test_askable_requires_exactly_one_correct_answer() {
        let none_correct = Question::new("Pick one", &[("A", false), ("B", false)]);
        assert!(!none_correct.is_askable());

        let two_correct = Question::new("Pick one", &[("A", true), ("B", true)]);
        assert!(!two_correct.is_askable());

        let single_choice = Question::new("Pick one", &[("A", true)]);
        assert!(!single_choice.is_askable());

        let no_text = Question::new("   ", &[("A", true), ("B", false)]);
        assert!(!no_text.is_askable());

        let valid = Question::new("Pick one", &[("A", true), ("B", false)]);
        assert!(valid.is_askable());
        assert_eq!(valid.correct_index(), Some(0));
    }

    #[test]
    fn test_answer_correct_defaults_to_false() {
        let answer: Answer = serde_json::from_str(r#"{"text": "Mars"}"#).unwrap();
        assert_eq!(answer.text, "Mars");
        assert!(!answer.correct);
    }

    #[test]
    fn test_result_percentage_rounds_to_nearest() {
        assert_eq!(QuizResult::new(2, 3).percentage, 67);
        assert_eq!(QuizResult::new(1, 3).percentage, 33);
        assert_eq!(QuizResult::new(1, 6).percentage, 17);
        assert_eq!(QuizResult::new(0, 5).percentage, 0);
        assert_eq!(QuizResult::new(5, 5).percentage, 100);
        assert_eq!(QuizResult::new(0, 0).percentage, 0);
    }

    #[test]
    fn test_result_date_is_iso_formatted() {
        let result = QuizResult::new(3, 5);
        assert_eq!(result.date.len(), 10);
        assert_eq!(&result.date[4..5], "-");
        assert_eq!(&result.date[7..8], "-");
    }

    #[test]
    fn test_prepare_session_truncates_to_limit() {
        let bank = quiz::builtin_bank();

        assert_eq!(quiz::prepare_session(bank.clone(), 2).len(), 2);
        assert_eq!(quiz::prepare_session(bank.clone(), 0).len(), 5);
        assert_eq!(quiz::prepare_session(bank.clone(), 99).len(), 5);

        // Shuffling keeps the questions themselves intact
        let session = quiz::prepare_session(bank.clone(), 0);
        for question in &session {
            assert!(bank.contains(question));
        }
    }

    #[test_context(QuizTestContext)]
    #[test]
    fn test_load_bank_without_file_uses_builtin(_ctx: &mut QuizTestContext) {
        let bank = quiz::load_bank(None);
        assert_eq!(bank, quiz::builtin_bank());
    }

    #[test_context(QuizTestContext)]
    #[test]
    fn test_load_bank_reads_custom_file_and_skips_bad_entries(ctx: &mut QuizTestContext) {
        let path = ctx.temp_dir.path().join("questions.json");
        fs::write(
            &path,
            r#"[
                {"question": "Largest planet?", "answers": [
                    {"text": "Jupiter", "correct": true},
                    {"text": "Mars"}
                ]},
                {"question": "", "answers": []},
                {"not": "a question"}
            ]"#,
        )
        .unwrap();

        let bank = quiz::load_bank(path.to_str());
        assert_eq!(bank.len(), 1);
        assert_eq!(bank[0].question, "Largest planet?");
        assert_eq!(bank[0].correct_index(), Some(0));
    }

    #[test_context(QuizTestContext)]
    #[test]
    fn test_load_bank_falls_back_on_unreadable_file(ctx: &mut QuizTestContext) {
        let missing = ctx.temp_dir.path().join("nope.json");
        assert_eq!(quiz::load_bank(missing.to_str()), quiz::builtin_bank());
    }

    #[test_context(QuizTestContext)]
    #[test]
    fn test_load_bank_falls_back_on_useless_content(ctx: &mut QuizTestContext) {
        let not_array = ctx.temp_dir.path().join("object.json");
        fs::write(&not_array, r#"{"question": "alone"}"#).unwrap();
        assert_eq!(quiz::load_bank(not_array.to_str()), quiz::builtin_bank());

        let empty = ctx.temp_dir.path().join("empty.json");
        fs::write(&empty, "[]").unwrap();
        assert_eq!(quiz::load_bank(empty.to_str()), quiz::builtin_bank());
    }

    #[test_context(QuizTestContext)]
    #[test]
    fn test_history_starts_empty(_ctx: &mut QuizTestContext) {
        let store = QuizStore::new(Storage::new().unwrap());
        assert!(store.history().unwrap().is_empty());
    }

    #[test_context(QuizTestContext)]
    #[test]
    fn test_record_appends_history_and_bumps_counter(_ctx: &mut QuizTestContext) {
        let mut store = QuizStore::new(Storage::new().unwrap());

        store.record(&QuizResult::new(4, 5)).unwrap();
        store.record(&QuizResult::new(2, 5)).unwrap();

        let history = store.history().unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].score, 4);
        assert_eq!(history[1].score, 2);

        let storage = Storage::new().unwrap();
        assert_eq!(storage.get_counter(QUIZZES_TAKEN).unwrap(), 2);
    }

    #[test_context(QuizTestContext)]
    #[test]
    fn test_stored_history_uses_camel_case_keys(_ctx: &mut QuizTestContext) {
        let mut store = QuizStore::new(Storage::new().unwrap());
        store.record(&QuizResult::new(3, 5)).unwrap();

        // Field names are part of the storage format
        let raw = Storage::new().unwrap().get(QUIZ_HISTORY).unwrap().unwrap();
        assert!(raw.contains("\"totalQuestions\":5"));
    }

    #[test_context(QuizTestContext)]
    #[test]
    fn test_malformed_history_fails_closed(_ctx: &mut QuizTestContext) {
        let mut storage = Storage::new().unwrap();
        storage.set(QUIZ_HISTORY, "oops").unwrap();

        let mut store = QuizStore::new(storage);
        assert!(store.history().unwrap().is_empty());

        // Recording after recovery starts a fresh list
        store.record(&QuizResult::new(1, 5)).unwrap();
        assert_eq!(store.history().unwrap().len(), 1);
    }

    #[test_context(QuizTestContext)]
    #[test]
    fn test_malformed_counter_resets_before_increment(_ctx: &mut QuizTestContext) {
        let mut storage = Storage::new().unwrap();
        storage.set(QUIZZES_TAKEN, "not a number").unwrap();

        let mut store = QuizStore::new(storage);
        store.record(&QuizResult::new(5, 5)).unwrap();

        assert_eq!(Storage::new().unwrap().get_counter(QUIZZES_TAKEN).unwrap(), 1);
    }

    #[test_context(QuizTestContext)]
    #[test]
    fn test_completion_and_quiz_finish_share_the_counter(_ctx: &mut QuizTestContext) {
        // Task completion is one writer of the counter
        let mut tracker = StudyTracker::load(Storage::new().unwrap()).unwrap();
        let task = tracker.schedule("Read Ch.3", "2024-05-01", "14:00").unwrap();
        tracker.complete(task.id).unwrap();
        drop(tracker);

        // A finished quiz is the other
        let mut store = QuizStore::new(Storage::new().unwrap());
        store.record(&QuizResult::new(4, 5)).unwrap();

        assert_eq!(Storage::new().unwrap().get_counter(QUIZZES_TAKEN).unwrap(), 2);
    }

    #[test_context(QuizTestContext)]
    #[test]
    fn test_stale_tracker_flush_overwrites_quiz_increment(_ctx: &mut QuizTestContext) {
        // The two writers do not coordinate: a tracker that loaded its
        // counter before a quiz finished flushes the stale value back
        let mut tracker = StudyTracker::load(Storage::new().unwrap()).unwrap();
        let task = tracker.schedule("Read Ch.3", "2024-05-01", "14:00").unwrap();

        let mut store = QuizStore::new(Storage::new().unwrap());
        store.record(&QuizResult::new(4, 5)).unwrap();
        assert_eq!(Storage::new().unwrap().get_counter(QUIZZES_TAKEN).unwrap(), 1);

        tracker.complete(task.id).unwrap();
        assert_eq!(Storage::new().unwrap().get_counter(QUIZZES_TAKEN).unwrap(), 1);
    }
}
