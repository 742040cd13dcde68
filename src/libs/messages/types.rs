#[derive(Debug, Clone)]
pub enum Message {
    // === SESSION MESSAGES ===
    SessionStarted(String),                // task
    SessionAlreadyRunning(String, String), // task, start time
    EmptyTaskName,
    SessionStopped { task: String, duration: String },
    NoActiveSession,
    StatusRunning { task: String, since: String, elapsed: String },
    StatusIdle,

    // === LOG MESSAGES ===
    LogEmpty,
    EntryUpdated(usize),          // row number
    EntryDeleted(usize, String),  // row number, task
    EntryNotFound(usize, usize),  // row number, row count

    // === TITLE MESSAGES ===
    TitleCurrent(String),
    TitleUpdated(String),

    // === EXPORT MESSAGES ===
    ExportingLog(usize, String), // entry count, format
    ExportCompleted(String),     // path
    ExportEmptyLog,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigNotFound,
    ConfigModuleCelebration,
    ConfigModuleExport,

    // === STORAGE MESSAGES ===
    StorageLoadFailed(String), // error

    // === PROMPTS ===
    PromptSelectModules,
    PromptCelebrationEnabled,
    PromptCelebrationTicks,
    PromptCelebrationInterval,
    PromptExportFormat,
    PromptExportFileName,
}
