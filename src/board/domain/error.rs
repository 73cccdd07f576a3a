//! Error types for board domain validation and lookup.

use super::{MemberId, TaskId};
use thiserror::Error;

/// Errors returned by board document operations.
///
/// Every variant is raised before the document is touched, so a failed
/// operation leaves the document exactly as it was.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BoardDomainError {
    /// No active task has the given identifier.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// No completed task has the given identifier.
    #[error("completed task not found: {0}")]
    CompletedTaskNotFound(TaskId),

    /// No team member has the given identifier.
    #[error("team member not found: {0}")]
    MemberNotFound(MemberId),

    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTaskTitle,

    /// The task score is zero, negative, or not a finite number.
    #[error("invalid task score {0}, expected a positive number")]
    InvalidScore(f64),

    /// The task assignee is empty after trimming.
    #[error("task assignee must not be empty")]
    EmptyAssignee,

    /// The team member name is empty after trimming.
    #[error("team member name must not be empty")]
    EmptyMemberName,

    /// Two members in a supplied document share an identifier.
    #[error("team member id {0} appears more than once")]
    DuplicateMemberId(MemberId),

    /// A task identifier appears more than once across the active and
    /// completed sets of a supplied document.
    #[error("task id {0} appears more than once")]
    DuplicateTaskId(TaskId),

    /// A task in a supplied document names a member that does not exist.
    #[error("task {task} is assigned to unknown team member {member}")]
    UnknownAssignee {
        /// The offending task.
        task: TaskId,
        /// The missing member.
        member: MemberId,
    },
}

impl BoardDomainError {
    /// Returns `true` when the error reports a missing task or member.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::TaskNotFound(_) | Self::CompletedTaskNotFound(_) | Self::MemberNotFound(_)
        )
    }
}

