use thiserror::Error;

#[derive(Error, Debug)]
pub enum PressError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("planning error: {0}")]
    Plan(#[from] prepress_plan::PlanError),
    #[error("external tool {tool} exited with status {status}")]
    ExternalTool { tool: String, status: i32 },
    #[error("task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("document has no pages")]
    NoPages,
    #[error("invalid document: {0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, PressError>;
