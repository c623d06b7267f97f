use crate::controller::Ticket;
use crate::error::AnalyzeError;
use crate::model::{ClassificationResult, ImageFile};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum Message {
    PickFile,
    FilePicked(Option<PathBuf>),
    FileHovered,
    FilesHoveredLeft,
    FileDropped(PathBuf),
    FileLoaded(Result<ImageFile, String>),
    AnalysisFinished(Ticket, Result<ClassificationResult, AnalyzeError>),
    Retry,
    Reset,
}
