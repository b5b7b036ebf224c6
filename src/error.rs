use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    ValidationError,
    LimitReached,
    TaskNotFound,
    InvalidTaskId,
    InvalidDate,
    MalformedTimestamp,
    InvalidStatusTransition,
    CorruptStore,
    CorruptConfig,
    NotConfigured,
    ProjectNotFound,
    IoError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::LimitReached => "LIMIT_REACHED",
            Self::TaskNotFound => "TASK_NOT_FOUND",
            Self::InvalidTaskId => "INVALID_TASK_ID",
            Self::InvalidDate => "INVALID_DATE",
            Self::MalformedTimestamp => "MALFORMED_TIMESTAMP",
            Self::InvalidStatusTransition => "INVALID_STATUS_TRANSITION",
            Self::CorruptStore => "CORRUPT_STORE",
            Self::CorruptConfig => "CORRUPT_CONFIG",
            Self::NotConfigured => "NOT_CONFIGURED",
            Self::ProjectNotFound => "PROJECT_NOT_FOUND",
            Self::IoError => "IO_ERROR",
        }
    }

    /// Fatal errors end the command; everything else is reported per item.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::CorruptStore
                | Self::CorruptConfig
                | Self::NotConfigured
                | Self::ProjectNotFound
                | Self::IoError
        )
    }
}

#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ClikanError {
    pub code: ErrorCode,
    pub message: String,
}

impl ClikanError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationError, message)
    }

    pub fn task_too_long(max: usize, task: &str) -> Self {
        Self::validation(format!(
            "Task must be at most {max} chars, Brevity counts: {task}"
        ))
    }

    pub fn limit_reached(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::LimitReached, message)
    }

    pub fn task_not_found(id: u32) -> Self {
        Self::new(
            ErrorCode::TaskNotFound,
            format!("No existing task with that id: {id}"),
        )
    }

    pub fn invalid_task_id(raw: &str) -> Self {
        Self::new(ErrorCode::InvalidTaskId, format!("Invalid task id: {raw}"))
    }

    pub fn invalid_date(raw: &str) -> Self {
        Self::new(
            ErrorCode::InvalidDate,
            format!("Invalid date '{raw}'. Use today, tomorrow, nextweek or an ISO-8601 date."),
        )
    }

    pub fn malformed_timestamp(raw: &str) -> Self {
        Self::new(
            ErrorCode::MalformedTimestamp,
            format!("Malformed timestamp: {raw}"),
        )
    }

    pub fn invalid_transition(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidStatusTransition, message)
    }

    pub fn corrupt_store(path: &std::path::Path, detail: impl std::fmt::Display) -> Self {
        Self::new(
            ErrorCode::CorruptStore,
            format!(
                "Ensure {} exists and is a valid clikan data file: {detail}",
                path.display()
            ),
        )
    }

    pub fn corrupt_config(path: &std::path::Path, detail: impl std::fmt::Display) -> Self {
        Self::new(
            ErrorCode::CorruptConfig,
            format!("Ensure {} is valid, expected YAML: {detail}", path.display()),
        )
    }

    pub fn not_configured(project: &str) -> Self {
        Self::new(
            ErrorCode::NotConfigured,
            format!("Project '{project}' is not configured. Run `clikan configure` first."),
        )
    }

    pub fn project_not_found(name: &str) -> Self {
        Self::new(
            ErrorCode::ProjectNotFound,
            format!("Project {name} does not exist."),
        )
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::IoError, message)
    }
}

impl From<std::io::Error> for ClikanError {
    fn from(e: std::io::Error) -> Self {
        Self::io(e.to_string())
    }
}
