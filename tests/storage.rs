#[cfg(test)]
mod tests {
    use studymate::db::storage::{
        Storage, StorageError, DARK_MODE, QUIZZES_TAKEN, QUIZ_HISTORY, STUDY_HOURS, STUDY_TASKS, USER_BIO, USER_SKILLS,
    };
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct StorageTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for StorageTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            StorageTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_get_absent_key_is_none(_ctx: &mut StorageTestContext) {
        let storage = Storage::new().unwrap();
        assert_eq!(storage.get("missing").unwrap(), None);
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_set_and_get_round_trip(_ctx: &mut StorageTestContext) {
        let mut storage = Storage::new().unwrap();
        storage.set("greeting", "hello").unwrap();
        assert_eq!(storage.get("greeting").unwrap(), Some("hello".to_string()));
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_set_overwrites_existing_value(_ctx: &mut StorageTestContext) {
        let mut storage = Storage::new().unwrap();
        storage.set("key", "first").unwrap();
        storage.set("key", "second").unwrap();
        assert_eq!(storage.get("key").unwrap(), Some("second".to_string()));
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_remove_reports_deleted_rows(_ctx: &mut StorageTestContext) {
        let mut storage = Storage::new().unwrap();
        storage.set("key", "value").unwrap();

        assert_eq!(storage.remove("key").unwrap(), 1);
        assert_eq!(storage.get("key").unwrap(), None);
        assert_eq!(storage.remove("key").unwrap(), 0);
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_values_survive_reopening(_ctx: &mut StorageTestContext) {
        let mut storage = Storage::new().unwrap();
        storage.set("persistent", "yes").unwrap();
        drop(storage);

        let reopened = Storage::new().unwrap();
        assert_eq!(reopened.get("persistent").unwrap(), Some("yes".to_string()));
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_json_round_trip(_ctx: &mut StorageTestContext) {
        let mut storage = Storage::new().unwrap();
        let items = vec!["one".to_string(), "two".to_string()];

        storage.set_json("list", &items).unwrap();
        let loaded: Option<Vec<String>> = storage.get_json("list").unwrap();
        assert_eq!(loaded, Some(items));
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_get_json_absent_key_is_none(_ctx: &mut StorageTestContext) {
        let storage = Storage::new().unwrap();
        let loaded: Option<Vec<String>> = storage.get_json("missing").unwrap();
        assert_eq!(loaded, None);
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_get_json_malformed_content_is_typed(_ctx: &mut StorageTestContext) {
        let mut storage = Storage::new().unwrap();
        storage.set("broken", "{not json").unwrap();

        let result = storage.get_json::<Vec<String>>("broken");
        assert!(matches!(result, Err(StorageError::MalformedJson { .. })));
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_counter_absent_key_is_zero(_ctx: &mut StorageTestContext) {
        let storage = Storage::new().unwrap();
        assert_eq!(storage.get_counter("missing").unwrap(), 0);
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_counter_round_trip(_ctx: &mut StorageTestContext) {
        let mut storage = Storage::new().unwrap();
        storage.set_counter("count", 42).unwrap();
        assert_eq!(storage.get_counter("count").unwrap(), 42);
        assert_eq!(storage.get("count").unwrap(), Some("42".to_string()));
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_counter_tolerates_surrounding_whitespace(_ctx: &mut StorageTestContext) {
        let mut storage = Storage::new().unwrap();
        storage.set("count", " 17 ").unwrap();
        assert_eq!(storage.get_counter("count").unwrap(), 17);
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_counter_malformed_content_is_typed(_ctx: &mut StorageTestContext) {
        let mut storage = Storage::new().unwrap();
        storage.set("count", "many").unwrap();

        let result = storage.get_counter("count");
        assert!(matches!(result, Err(StorageError::MalformedNumber { .. })));
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_counter_rejects_negative_numbers(_ctx: &mut StorageTestContext) {
        let mut storage = Storage::new().unwrap();
        storage.set("count", "-5").unwrap();

        let result = storage.get_counter("count");
        assert!(matches!(result, Err(StorageError::MalformedNumber { .. })));
    }

    #[test]
    fn test_key_names_are_part_of_the_storage_format() {
        // Renaming a key would orphan previously stored data
        assert_eq!(STUDY_TASKS, "studyTasks");
        assert_eq!(STUDY_HOURS, "studyHours");
        assert_eq!(QUIZZES_TAKEN, "quizzesTaken");
        assert_eq!(QUIZ_HISTORY, "quizHistory");
        assert_eq!(USER_SKILLS, "userSkills");
        assert_eq!(USER_BIO, "userBio");
        assert_eq!(DARK_MODE, "darkMode");
    }
}
