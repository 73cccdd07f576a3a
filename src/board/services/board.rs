//! Service layer running one board operation per request.
//!
//! Each mutating call loads the whole document, applies a single
//! [`BoardDocument`] operation, stamps `last_updated`, and saves the document
//! back. A failed operation is never saved. Calls through the same service
//! are serialized; separate processes sharing a store still race with
//! last-write-wins semantics.

use crate::board::{
    domain::{
        BoardDocument, BoardDomainError, BoardResult, MemberId, MemberRemoval, NewTask, Task,
        TaskId, TaskPatch, TeamMember, WorkloadReport,
    },
    ports::{BoardRepository, BoardRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;

/// Service-level errors for board operations.
#[derive(Debug, Error)]
pub enum BoardServiceError {
    /// Domain validation or lookup failed.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] BoardRepositoryError),
}

/// Result type for board service operations.
pub type BoardServiceResult<T> = Result<T, BoardServiceError>;

/// Board orchestration service.
pub struct BoardService<R, C>
where
    R: BoardRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    write_gate: Arc<Mutex<()>>,
}

impl<R, C> Clone for BoardService<R, C>
where
    R: BoardRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
            write_gate: Arc::clone(&self.write_gate),
        }
    }
}

impl<R, C> BoardService<R, C>
where
    R: BoardRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new board service.
    #[must_use]
    pub fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self {
            repository,
            clock,
            write_gate: Arc::new(Mutex::new(())),
        }
    }

    /// Returns the whole board document.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Repository`] when loading fails.
    pub async fn document(&self) -> BoardServiceResult<BoardDocument> {
        Ok(self.repository.load().await?)
    }

    /// Replaces the whole board document, stamping `last_updated`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Domain`] when the document fails
    /// [`BoardDocument::check_integrity`] and
    /// [`BoardServiceError::Repository`] when saving fails.
    pub async fn replace_document(
        &self,
        mut document: BoardDocument,
    ) -> BoardServiceResult<BoardDocument> {
        document.check_integrity().inspect_err(|err| {
            tracing::warn!(operation = "replace_document", error = %err, "board document rejected");
        })?;
        let _guard = self.write_gate.lock().await;
        document.stamp(&*self.clock);
        self.repository.save(&document).await.inspect_err(|err| {
            tracing::error!(operation = "replace_document", error = %err, "failed to save board");
        })?;
        tracing::info!(
            members = document.team_members().len(),
            tasks = document.tasks().len(),
            completed_tasks = document.completed_tasks().len(),
            "board document replaced"
        );
        Ok(document)
    }

    // ── Tasks ───────────────────────────────────────────────────────

    /// Creates a task.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Domain`] for invalid input or an unknown
    /// assignee and [`BoardServiceError::Repository`] when persistence fails.
    pub async fn add_task(&self, new_task: NewTask) -> BoardServiceResult<Task> {
        self.mutate("add_task", move |document, clock| {
            document.add_task(new_task, clock)
        })
        .await
    }

    /// Edits an active task.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Domain`] for an unknown task, an unknown
    /// assignee or invalid fields.
    pub async fn update_task(&self, task_id: &TaskId, patch: TaskPatch) -> BoardServiceResult<Task> {
        self.mutate("update_task", move |document, clock| {
            document.update_task(task_id, patch, clock)
        })
        .await
    }

    /// Deletes an active task.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Domain`] for an unknown task.
    pub async fn delete_task(&self, task_id: &TaskId) -> BoardServiceResult<Task> {
        self.mutate("delete_task", move |document, _| document.delete_task(task_id))
            .await
    }

    /// Moves an active task to a position in an assignee's list.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Domain`] for an unknown task or member.
    pub async fn reorder_task(
        &self,
        task_id: &TaskId,
        assigned_to: &MemberId,
        new_priority: u32,
    ) -> BoardServiceResult<Task> {
        self.mutate("reorder_task", move |document, clock| {
            document.reorder_task(task_id, assigned_to, new_priority, clock)
        })
        .await
    }

    /// Completes an active task.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Domain`] for an unknown active task.
    pub async fn complete_task(&self, task_id: &TaskId) -> BoardServiceResult<Task> {
        self.mutate("complete_task", move |document, clock| {
            document.complete_task(task_id, clock)
        })
        .await
    }

    /// Restores a completed task to the end of its assignee's list.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Domain`] for an unknown completed task.
    pub async fn restore_task(&self, task_id: &TaskId) -> BoardServiceResult<Task> {
        self.mutate("restore_task", move |document, clock| {
            document.restore_task(task_id, clock)
        })
        .await
    }

    /// Permanently deletes a completed task.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Domain`] for an unknown completed task.
    pub async fn delete_completed_task(&self, task_id: &TaskId) -> BoardServiceResult<Task> {
        self.mutate("delete_completed_task", move |document, _| {
            document.delete_completed_task(task_id)
        })
        .await
    }

    /// Deletes every completed task of a member and returns the count.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Domain`] for an unknown member.
    pub async fn clear_completed_tasks_for_member(
        &self,
        member_id: &MemberId,
    ) -> BoardServiceResult<usize> {
        self.mutate("clear_completed_tasks_for_member", move |document, _| {
            document.clear_completed_tasks_for_member(member_id)
        })
        .await
    }

    /// Returns a member's active tasks, highest priority first.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Domain`] for an unknown member.
    pub async fn tasks_for_member(&self, member_id: &MemberId) -> BoardServiceResult<Vec<Task>> {
        self.read(|document| {
            document
                .tasks_for_member(member_id)
                .map(|tasks| tasks.into_iter().cloned().collect())
        })
        .await
    }

    /// Returns a member's completed tasks, most recent first.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Domain`] for an unknown member.
    pub async fn completed_tasks_for_member(
        &self,
        member_id: &MemberId,
    ) -> BoardServiceResult<Vec<Task>> {
        self.read(|document| {
            document
                .completed_tasks_for_member(member_id)
                .map(|tasks| tasks.into_iter().cloned().collect())
        })
        .await
    }

    // ── Team members ────────────────────────────────────────────────

    /// Returns the members in board order.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Repository`] when loading fails.
    pub async fn team_members(&self) -> BoardServiceResult<Vec<TeamMember>> {
        self.read(|document| {
            Ok(document
                .members_in_order()
                .into_iter()
                .cloned()
                .collect())
        })
        .await
    }

    /// Adds a member.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Domain`] for a blank name.
    pub async fn add_team_member(
        &self,
        name: &str,
        order: Option<u32>,
    ) -> BoardServiceResult<TeamMember> {
        self.mutate("add_team_member", move |document, clock| {
            document.add_team_member(name, order, clock)
        })
        .await
    }

    /// Renames a member.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Domain`] for an unknown member or a blank
    /// name.
    pub async fn update_team_member(
        &self,
        member_id: &MemberId,
        name: &str,
    ) -> BoardServiceResult<TeamMember> {
        self.mutate("update_team_member", move |document, clock| {
            document.update_team_member(member_id, name, clock)
        })
        .await
    }

    /// Moves a member to a position on the board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Domain`] for an unknown member.
    pub async fn reorder_team_member(
        &self,
        member_id: &MemberId,
        new_order: u32,
    ) -> BoardServiceResult<TeamMember> {
        self.mutate("reorder_team_member", move |document, clock| {
            document.reorder_team_member(member_id, new_order, clock)
        })
        .await
    }

    /// Deletes a member and all of their tasks.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Domain`] for an unknown member.
    pub async fn delete_team_member(
        &self,
        member_id: &MemberId,
    ) -> BoardServiceResult<MemberRemoval> {
        self.mutate("delete_team_member", move |document, clock| {
            document.delete_team_member(member_id, clock)
        })
        .await
    }

    /// Computes per-member workload totals.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Repository`] when loading fails.
    pub async fn workload(&self) -> BoardServiceResult<WorkloadReport> {
        self.read(|document| Ok(document.workload())).await
    }

    // ── Internals ───────────────────────────────────────────────────

    async fn read<T, F>(&self, project: F) -> BoardServiceResult<T>
    where
        F: FnOnce(&BoardDocument) -> BoardResult<T> + Send,
    {
        let document = self.repository.load().await.inspect_err(|err| {
            tracing::error!(error = %err, "failed to load board");
        })?;
        Ok(project(&document)?)
    }

    async fn mutate<T, F>(&self, operation: &'static str, apply: F) -> BoardServiceResult<T>
    where
        F: FnOnce(&mut BoardDocument, &C) -> BoardResult<T> + Send,
    {
        let _guard = self.write_gate.lock().await;
        let mut document = self.repository.load().await.inspect_err(|err| {
            tracing::error!(operation, error = %err, "failed to load board");
        })?;

        let output = apply(&mut document, &*self.clock).inspect_err(|err| {
            tracing::warn!(operation, error = %err, "board operation rejected");
        })?;

        document.stamp(&*self.clock);
        self.repository.save(&document).await.inspect_err(|err| {
            tracing::error!(operation, error = %err, "failed to save board");
        })?;
        tracing::info!(operation, "board updated");
        Ok(output)
    }
}
