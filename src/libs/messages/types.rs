#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskScheduled(String),
    TaskCompleted(String),
    TaskNotFoundWithId(i64),
    TasksHeader,
    NoTasksScheduled,
    NoTasksSelected,
    SelectTasksToComplete,
    TaskFieldsRequired,

    // === PROGRESS MESSAGES ===
    ProgressHeader,
    StoredTasksUnreadable,
    StoredCounterUnreadable(String), // key

    // === QUIZ MESSAGES ===
    QuizHeader,
    QuizAnswerCorrect,
    QuizAnswerWrong(String), // correct answer text
    QuizFinished(usize, usize), // score, total
    QuizHistoryHeader,
    QuizHistoryEmpty,
    QuizFileUnreadable(String), // path
    QuizFileEmpty(String),      // path
    QuizEntrySkipped(usize),    // entry index
    StoredQuizHistoryUnreadable,

    // === PROFILE MESSAGES ===
    BioUpdated,
    SkillUpdated(String, u8), // name, level
    SkillLevelRequired,
    ThemeUpdated(String),
    StoredSkillsUnreadable,

    // === ACTIVITY MESSAGES ===
    ActivityHeader,
    ActivityEmpty,
    PageInfo(usize, usize), // page, total pages

    // === FEED MESSAGES ===
    FeedHeader,
    FeedEmpty,
    PostAdded,
    PostTextRequired,
    PostNotFoundWithId(i64),
    PostLiked(String),   // author
    PostUnliked(String), // author

    // === ACHIEVEMENTS MESSAGES ===
    AchievementsHeader,
    BadgesHeader,
    MilestonesHeader,
    LeaderboardHeader,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigRemoved,
    PromptSelectModules,
    ConfigModuleStudent,
    ConfigModuleQuiz,
    ConfigModuleView,
    PromptStudentName,
    PromptStudentSchool,
    PromptQuizFile,
    PromptQuizLength,
    PromptPageSize,

    // === EXPORT MESSAGES ===
    ExportCompleted(String), // path
}
