//! Rejections surfaced to the user as blocking notifications.
//!
//! The `Display` text of each variant is the exact message shown in the alert.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeskError {
    #[error("Add a title")]
    EmptyTitle,
    #[error("Type a question")]
    EmptyQuestion,
    #[error("Generate a quiz first")]
    NoQuizGenerated,
    #[error("No doubts yet")]
    NoDoubts,
    #[error("Nothing to export")]
    NothingToExport,
    #[error("No table to export on the active module.")]
    NoVisibleTable,
}
