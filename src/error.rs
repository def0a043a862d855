#[derive(Debug, thiserror::Error)]
pub enum AdvisorError {
    #[error("unknown panel: {0}")]
    UnknownPanel(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("panel {panel} is not offered for test type {test_type}")]
    PanelNotOffered { panel: String, test_type: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("selection file error: {0}")]
    Json(#[from] serde_json::Error),
}
