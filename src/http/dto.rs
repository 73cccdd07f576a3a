//! JSON request and response bodies.
//!
//! Field names are camelCase to match the board document wire format.

use crate::board::domain::{MemberId, NewTask, TaskPatch};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/tasks`.
///
/// Required fields are optional here so a missing field is reported as a
/// 400 with a readable message rather than a generic decode failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskBody {
    /// Task title.
    pub title: Option<String>,
    /// Effort score.
    pub score: Option<f64>,
    /// Optional deadline, RFC 3339 or `YYYY-MM-DD`.
    #[serde(default, deserialize_with = "crate::board::domain::deadline::deserialize")]
    pub deadline: Option<DateTime<Utc>>,
    /// Assignee member id.
    pub assigned_to: Option<String>,
    /// Optional position in the assignee's list.
    #[serde(default)]
    pub priority: Option<i64>,
}

impl CreateTaskBody {
    /// Converts the body into task input.
    ///
    /// Returns `None` when title, score or assignee is missing.
    #[must_use]
    pub fn into_new_task(self) -> Option<NewTask> {
        let (Some(title), Some(score), Some(assigned_to)) = (self.title, self.score, self.assigned_to)
        else {
            return None;
        };
        let mut new_task = NewTask::new(title, score, assigned_to);
        if let Some(deadline) = self.deadline {
            new_task = new_task.with_deadline(deadline);
        }
        if let Some(priority) = self.priority {
            new_task = new_task.with_priority(clamp_position(priority));
        }
        Some(new_task)
    }
}

/// Body of `PUT /api/tasks/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskBody {
    /// New title.
    pub title: Option<String>,
    /// New score.
    pub score: Option<f64>,
    /// New deadline; `null` clears it, absence leaves it unchanged.
    #[serde(
        default,
        deserialize_with = "crate::board::domain::deadline::deserialize_edit"
    )]
    pub deadline: Option<Option<DateTime<Utc>>>,
    /// New assignee.
    pub assigned_to: Option<String>,
    /// New position in the (new) assignee's list.
    pub priority: Option<i64>,
}

impl From<UpdateTaskBody> for TaskPatch {
    fn from(body: UpdateTaskBody) -> Self {
        let mut patch = Self::new();
        if let Some(title) = body.title {
            patch = patch.with_title(title);
        }
        if let Some(score) = body.score {
            patch = patch.with_score(score);
        }
        if let Some(deadline) = body.deadline {
            patch = patch.with_deadline(deadline);
        }
        if let Some(assigned_to) = body.assigned_to {
            patch = patch.with_assignee(assigned_to);
        }
        if let Some(priority) = body.priority {
            patch = patch.with_priority(clamp_position(priority));
        }
        patch
    }
}

/// Body of `PUT /api/tasks/reorder`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderTaskBody {
    /// Task to move.
    pub task_id: String,
    /// Destination assignee.
    pub assigned_to: String,
    /// Destination index in the assignee's list.
    pub new_priority: i64,
}

impl ReorderTaskBody {
    /// Returns the destination index with negatives clamped to the front.
    #[must_use]
    pub fn position(&self) -> u32 {
        clamp_position(self.new_priority)
    }
}

/// Body of `POST /api/team-members`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMemberBody {
    /// Display name.
    pub name: Option<String>,
    /// Optional board position.
    #[serde(default)]
    pub order: Option<i64>,
}

impl CreateMemberBody {
    /// Returns the requested board position, if any.
    #[must_use]
    pub fn position(&self) -> Option<u32> {
        self.order.map(clamp_position)
    }
}

/// Body of `PUT /api/team-members/{id}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMemberBody {
    /// New display name.
    pub name: String,
}

/// Body of `PUT /api/team-members/reorder`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderMemberBody {
    /// Member to move.
    pub member_id: String,
    /// Destination board position.
    pub new_order: i64,
}

impl ReorderMemberBody {
    /// Returns the destination position with negatives clamped to the front.
    #[must_use]
    pub fn position(&self) -> u32 {
        clamp_position(self.new_order)
    }
}

/// Response of `DELETE /api/team-members/{id}/completed-tasks`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearedResponse {
    /// Member whose history was cleared.
    pub member_id: MemberId,
    /// Number of completed tasks removed.
    pub removed: usize,
}

/// Response of `GET /api/health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `ok` while the server is up.
    pub status: String,
    /// Human-readable status line.
    pub message: String,
}

/// Clamps a client-supplied index into the `u32` range.
///
/// Values past the end are clamped again against the list length by the
/// board operations.
fn clamp_position(raw: i64) -> u32 {
    u32::try_from(raw.max(0)).unwrap_or(u32::MAX)
}
