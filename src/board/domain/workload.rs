//! Per-member workload totals.

use super::{BoardDocument, MemberId, Task};
use serde::Serialize;

/// Score and task counts for one member.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberWorkload {
    /// Member identifier.
    pub member_id: MemberId,
    /// Member display name.
    pub member_name: String,
    /// Sum of scores over the member's active tasks.
    pub active_score: f64,
    /// Number of active tasks.
    pub active_count: usize,
    /// Sum of scores over the member's completed tasks.
    pub completed_score: f64,
    /// Number of completed tasks.
    pub completed_count: usize,
}

/// Workload for every member plus board-wide totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkloadReport {
    /// One entry per member, in board order.
    pub members: Vec<MemberWorkload>,
    /// Sum of all active task scores.
    pub total_active_score: f64,
    /// Number of active tasks on the board.
    pub total_active_count: usize,
    /// Sum of all completed task scores.
    pub total_completed_score: f64,
    /// Number of completed tasks on the board.
    pub total_completed_count: usize,
}

impl BoardDocument {
    /// Computes workload totals without modifying the board.
    ///
    /// Tasks whose assignee is not a member are counted in the board totals
    /// only.
    #[must_use]
    pub fn workload(&self) -> WorkloadReport {
        let members = self
            .members_in_order()
            .into_iter()
            .map(|member| {
                let (active_score, active_count) = tally(self.tasks(), member.id());
                let (completed_score, completed_count) =
                    tally(self.completed_tasks(), member.id());
                MemberWorkload {
                    member_id: member.id().clone(),
                    member_name: member.name().to_owned(),
                    active_score,
                    active_count,
                    completed_score,
                    completed_count,
                }
            })
            .collect();

        WorkloadReport {
            members,
            total_active_score: self.tasks().iter().map(Task::score).sum(),
            total_active_count: self.tasks().len(),
            total_completed_score: self.completed_tasks().iter().map(Task::score).sum(),
            total_completed_count: self.completed_tasks().len(),
        }
    }
}

fn tally(tasks: &[Task], member_id: &MemberId) -> (f64, usize) {
    let assigned: Vec<&Task> = tasks
        .iter()
        .filter(|task| task.assigned_to() == member_id)
        .collect();
    (assigned.iter().map(|task| task.score()).sum(), assigned.len())
}
