//! Task record, lifecycle status, and creation/edit inputs.

use super::{BoardDomainError, MemberId, TaskId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task lifecycle status.
///
/// `Active -> Completed` via completion, `Completed -> Active` via restore.
/// Deletion removes a task from either state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Task is on its assignee's priority list.
    #[default]
    Active,
    /// Task is in the completed history.
    Completed,
}

/// A unit of work assigned to one team member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    title: String,
    score: f64,
    #[serde(
        default,
        deserialize_with = "super::deadline::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    deadline: Option<DateTime<Utc>>,
    assigned_to: MemberId,
    priority: u32,
    #[serde(default)]
    status: TaskStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    completed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Creates an active task from validated input at the given priority.
    pub(crate) fn create(
        id: TaskId,
        input: ValidatedTask,
        priority: u32,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            id,
            title: input.title,
            score: input.score,
            deadline: input.deadline,
            assigned_to: input.assigned_to,
            priority,
            status: TaskStatus::Active,
            created_at: timestamp,
            updated_at: timestamp,
            completed_at: None,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the effort score.
    #[must_use]
    pub const fn score(&self) -> f64 {
        self.score
    }

    /// Returns the optional deadline.
    #[must_use]
    pub const fn deadline(&self) -> Option<DateTime<Utc>> {
        self.deadline
    }

    /// Returns the assignee.
    #[must_use]
    pub const fn assigned_to(&self) -> &MemberId {
        &self.assigned_to
    }

    /// Returns the priority within the assignee's active list (0 first).
    #[must_use]
    pub const fn priority(&self) -> u32 {
        self.priority
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the completion timestamp, set only while completed.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Moves the task to `assignee` at `priority`.
    ///
    /// `updated_at` is stamped only when the assignee or priority changed.
    pub(crate) fn place(&mut self, assignee: &MemberId, priority: u32, clock: &impl Clock) {
        if self.assigned_to == *assignee && self.priority == priority {
            return;
        }
        assignee.clone_into(&mut self.assigned_to);
        self.priority = priority;
        self.touch(clock);
    }

    /// Sets the priority, stamping `updated_at` when it changed.
    pub(crate) fn set_priority(&mut self, priority: u32, clock: &impl Clock) {
        if self.priority == priority {
            return;
        }
        self.priority = priority;
        self.touch(clock);
    }

    /// Applies the non-positional fields of a validated edit.
    pub(crate) fn apply_details(&mut self, details: TaskDetails, clock: &impl Clock) {
        if let Some(title) = details.title {
            self.title = title;
        }
        if let Some(score) = details.score {
            self.score = score;
        }
        if let Some(deadline) = details.deadline {
            self.deadline = deadline;
        }
        self.touch(clock);
    }

    /// Marks the task completed.
    pub(crate) fn complete(&mut self, clock: &impl Clock) {
        let timestamp = clock.utc();
        self.status = TaskStatus::Completed;
        self.completed_at = Some(timestamp);
        self.updated_at = timestamp;
    }

    /// Returns a completed task to the active state at `priority`.
    pub(crate) fn restore(&mut self, priority: u32, clock: &impl Clock) {
        self.status = TaskStatus::Active;
        self.completed_at = None;
        self.priority = priority;
        self.touch(clock);
    }

    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}

/// Input for creating a task.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTask {
    title: String,
    score: f64,
    deadline: Option<DateTime<Utc>>,
    assigned_to: String,
    priority: Option<u32>,
}

impl NewTask {
    /// Creates task input with the required fields.
    #[must_use]
    pub fn new(title: impl Into<String>, score: f64, assigned_to: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            score,
            deadline: None,
            assigned_to: assigned_to.into(),
            priority: None,
        }
    }

    /// Sets the deadline.
    #[must_use]
    pub const fn with_deadline(mut self, deadline: DateTime<Utc>) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Requests an explicit position in the assignee's list.
    ///
    /// Without it the task is appended after the assignee's last task.
    #[must_use]
    pub const fn with_priority(mut self, priority: u32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Returns the requested position, if any.
    #[must_use]
    pub const fn priority(&self) -> Option<u32> {
        self.priority
    }

    /// Checks the required fields.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTaskTitle`],
    /// [`BoardDomainError::InvalidScore`] or
    /// [`BoardDomainError::EmptyAssignee`] for the first missing field.
    pub fn validate(self) -> Result<ValidatedTask, BoardDomainError> {
        let title = validate_title(&self.title)?;
        let score = validate_score(self.score)?;
        let assignee = self.assigned_to.trim();
        if assignee.is_empty() {
            return Err(BoardDomainError::EmptyAssignee);
        }
        Ok(ValidatedTask {
            title,
            score,
            deadline: self.deadline,
            assigned_to: MemberId::new(assignee),
        })
    }
}

/// Task input that passed field validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedTask {
    title: String,
    score: f64,
    deadline: Option<DateTime<Utc>>,
    assigned_to: MemberId,
}

impl ValidatedTask {
    /// Returns the assignee.
    #[must_use]
    pub const fn assigned_to(&self) -> &MemberId {
        &self.assigned_to
    }
}

/// Partial edit of an active task.
///
/// Unset fields are left unchanged. Assignee and priority changes are
/// applied through the reorder algorithm so the priority lists stay dense.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskPatch {
    title: Option<String>,
    score: Option<f64>,
    deadline: Option<Option<DateTime<Utc>>>,
    assigned_to: Option<MemberId>,
    priority: Option<u32>,
}

impl TaskPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replaces the score.
    #[must_use]
    pub const fn with_score(mut self, score: f64) -> Self {
        self.score = Some(score);
        self
    }

    /// Replaces or clears the deadline.
    #[must_use]
    pub const fn with_deadline(mut self, deadline: Option<DateTime<Utc>>) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Moves the task to another assignee.
    #[must_use]
    pub fn with_assignee(mut self, assigned_to: impl Into<MemberId>) -> Self {
        self.assigned_to = Some(assigned_to.into());
        self
    }

    /// Moves the task to a new position.
    #[must_use]
    pub const fn with_priority(mut self, priority: u32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Returns the requested assignee, if any.
    #[must_use]
    pub const fn assigned_to(&self) -> Option<&MemberId> {
        self.assigned_to.as_ref()
    }

    /// Returns the requested position, if any.
    #[must_use]
    pub const fn priority(&self) -> Option<u32> {
        self.priority
    }

    /// Validates the detail fields and splits them from the positional ones.
    pub(crate) fn into_details(self) -> Result<TaskDetails, BoardDomainError> {
        let title = self.title.as_deref().map(validate_title).transpose()?;
        let score = self.score.map(validate_score).transpose()?;
        Ok(TaskDetails {
            title,
            score,
            deadline: self.deadline,
        })
    }
}

/// Validated non-positional task fields.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TaskDetails {
    title: Option<String>,
    score: Option<f64>,
    deadline: Option<Option<DateTime<Utc>>>,
}

fn validate_title(title: &str) -> Result<String, BoardDomainError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(BoardDomainError::EmptyTaskTitle);
    }
    Ok(trimmed.to_owned())
}

fn validate_score(score: f64) -> Result<f64, BoardDomainError> {
    if !score.is_finite() || score <= 0.0 {
        return Err(BoardDomainError::InvalidScore(score));
    }
    Ok(score)
}
