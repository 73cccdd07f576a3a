//! The board document and every operation that mutates it.
//!
//! A [`BoardDocument`] is the whole persisted state: members, active tasks,
//! and completed tasks. Operations validate their inputs and look up every
//! referenced record before changing anything, so a returned error always
//! means the document is untouched.
//!
//! Ordering invariants maintained here:
//!
//! - active task priorities are a dense `0..K-1` sequence per assignee,
//!   except that [`BoardDocument::delete_task`] leaves a gap;
//! - member `order` values are a dense `0..N-1` sequence;
//! - a task id lives in exactly one of the active or completed sets.

use super::ordering::{clamp_index, rank, ranks, splice};
use super::{BoardDomainError, MemberId, MemberName, NewTask, Task, TaskId, TaskPatch, TeamMember};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Result type for board document operations.
pub type BoardResult<T> = Result<T, BoardDomainError>;

/// Persisted board state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardDocument {
    #[serde(default)]
    team_members: Vec<TeamMember>,
    #[serde(default)]
    tasks: Vec<Task>,
    #[serde(default)]
    completed_tasks: Vec<Task>,
    #[serde(default)]
    last_updated: DateTime<Utc>,
}

/// Records removed by [`BoardDocument::delete_team_member`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberRemoval {
    /// The deleted member.
    pub member: TeamMember,
    /// Number of active tasks removed with the member.
    pub removed_tasks: usize,
    /// Number of completed tasks removed with the member.
    pub removed_completed_tasks: usize,
}

impl BoardDocument {
    /// Creates a board with no members and no tasks.
    #[must_use]
    pub fn empty(clock: &impl Clock) -> Self {
        Self {
            team_members: Vec::new(),
            tasks: Vec::new(),
            completed_tasks: Vec::new(),
            last_updated: clock.utc(),
        }
    }

    /// Returns the members in storage order.
    #[must_use]
    pub fn team_members(&self) -> &[TeamMember] {
        &self.team_members
    }

    /// Returns the active tasks in storage order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the completed tasks in storage order.
    #[must_use]
    pub fn completed_tasks(&self) -> &[Task] {
        &self.completed_tasks
    }

    /// Returns the time of the last save.
    #[must_use]
    pub const fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }

    /// Stamps `last_updated` with the current time.
    pub fn stamp(&mut self, clock: &impl Clock) {
        self.last_updated = clock.utc();
    }

    /// Checks the cross-record rules of a document supplied as a whole.
    ///
    /// Member ids are unique, a task id lives in only one of the two sets,
    /// and every task is assigned to an existing member.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::DuplicateMemberId`],
    /// [`BoardDomainError::DuplicateTaskId`] or
    /// [`BoardDomainError::UnknownAssignee`] for the first violation found.
    pub fn check_integrity(&self) -> BoardResult<()> {
        let mut member_ids = HashSet::new();
        for member in &self.team_members {
            if !member_ids.insert(member.id()) {
                return Err(BoardDomainError::DuplicateMemberId(member.id().clone()));
            }
        }
        let mut task_ids = HashSet::new();
        for task in self.tasks.iter().chain(&self.completed_tasks) {
            if !task_ids.insert(task.id()) {
                return Err(BoardDomainError::DuplicateTaskId(task.id().clone()));
            }
            if !member_ids.contains(task.assigned_to()) {
                return Err(BoardDomainError::UnknownAssignee {
                    task: task.id().clone(),
                    member: task.assigned_to().clone(),
                });
            }
        }
        Ok(())
    }

    // ── Lookups ─────────────────────────────────────────────────────

    /// Finds a member by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::MemberNotFound`] for an unknown id.
    pub fn member(&self, member_id: &MemberId) -> BoardResult<&TeamMember> {
        self.team_members
            .iter()
            .find(|member| member.id() == member_id)
            .ok_or_else(|| BoardDomainError::MemberNotFound(member_id.clone()))
    }

    /// Returns the members sorted by board position.
    #[must_use]
    pub fn members_in_order(&self) -> Vec<&TeamMember> {
        let mut members: Vec<&TeamMember> = self.team_members.iter().collect();
        members.sort_by_key(|member| member.order());
        members
    }

    /// Finds an active task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::TaskNotFound`] when no active task matches.
    pub fn active_task(&self, task_id: &TaskId) -> BoardResult<&Task> {
        self.tasks
            .iter()
            .find(|task| task.id() == task_id)
            .ok_or_else(|| BoardDomainError::TaskNotFound(task_id.clone()))
    }

    /// Finds a completed task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::CompletedTaskNotFound`] when no completed
    /// task matches.
    pub fn completed_task(&self, task_id: &TaskId) -> BoardResult<&Task> {
        self.completed_tasks
            .iter()
            .find(|task| task.id() == task_id)
            .ok_or_else(|| BoardDomainError::CompletedTaskNotFound(task_id.clone()))
    }

    /// Finds a task in either set.
    #[must_use]
    pub fn find_task(&self, task_id: &TaskId) -> Option<&Task> {
        self.tasks
            .iter()
            .chain(&self.completed_tasks)
            .find(|task| task.id() == task_id)
    }

    /// Returns a member's active tasks, highest priority first.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::MemberNotFound`] for an unknown id.
    pub fn tasks_for_member(&self, member_id: &MemberId) -> BoardResult<Vec<&Task>> {
        self.member(member_id)?;
        let mut tasks: Vec<&Task> = self
            .tasks
            .iter()
            .filter(|task| task.assigned_to() == member_id)
            .collect();
        tasks.sort_by_key(|task| task.priority());
        Ok(tasks)
    }

    /// Returns a member's completed tasks, most recently completed first.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::MemberNotFound`] for an unknown id.
    pub fn completed_tasks_for_member(&self, member_id: &MemberId) -> BoardResult<Vec<&Task>> {
        self.member(member_id)?;
        let mut tasks: Vec<&Task> = self
            .completed_tasks
            .iter()
            .filter(|task| task.assigned_to() == member_id)
            .collect();
        tasks.sort_by(|left, right| right.completed_at().cmp(&left.completed_at()));
        Ok(tasks)
    }

    // ── Team members ────────────────────────────────────────────────

    /// Adds a member, appended after the last one unless `order` is given.
    ///
    /// An explicit `order` splices the member in at that (clamped) position
    /// and shifts the following members down.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyMemberName`] for a blank name.
    pub fn add_team_member(
        &mut self,
        name: &str,
        order: Option<u32>,
        clock: &impl Clock,
    ) -> BoardResult<TeamMember> {
        let member_name = MemberName::new(name)?;
        Ok(self.insert_member(MemberId::generate(), member_name, order, clock))
    }

    /// Adds a member under a caller-chosen identifier.
    pub(crate) fn insert_member(
        &mut self,
        member_id: MemberId,
        name: MemberName,
        order: Option<u32>,
        clock: &impl Clock,
    ) -> TeamMember {
        let siblings = self.member_ids_in_order(None);
        let position = clamp_index(order.unwrap_or(u32::MAX), siblings.len());
        let member = TeamMember::create_with_id(member_id.clone(), name, rank(position), clock);
        let ordered = splice(siblings, rank(position), member_id);

        self.team_members.push(member.clone());
        self.apply_member_ranks(&ordered, clock);
        member
    }

    /// Renames a member.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyMemberName`] for a blank name or
    /// [`BoardDomainError::MemberNotFound`] for an unknown id.
    pub fn update_team_member(
        &mut self,
        member_id: &MemberId,
        name: &str,
        clock: &impl Clock,
    ) -> BoardResult<TeamMember> {
        let member_name = MemberName::new(name)?;
        let member = self
            .team_members
            .iter_mut()
            .find(|member| member.id() == member_id)
            .ok_or_else(|| BoardDomainError::MemberNotFound(member_id.clone()))?;
        member.rename(member_name, clock);
        Ok(member.clone())
    }

    /// Moves a member to `new_index` on the board.
    ///
    /// Out-of-range indices are clamped to the ends of the list.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::MemberNotFound`] for an unknown id.
    pub fn reorder_team_member(
        &mut self,
        member_id: &MemberId,
        new_index: u32,
        clock: &impl Clock,
    ) -> BoardResult<TeamMember> {
        self.member(member_id)?;
        let ordered = splice(
            self.member_ids_in_order(Some(member_id)),
            new_index,
            member_id.clone(),
        );
        self.apply_member_ranks(&ordered, clock);
        self.member(member_id).cloned()
    }

    /// Deletes a member together with all of their active and completed
    /// tasks, then closes the gap in the member order.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::MemberNotFound`] for an unknown id.
    pub fn delete_team_member(
        &mut self,
        member_id: &MemberId,
        clock: &impl Clock,
    ) -> BoardResult<MemberRemoval> {
        let position = self
            .team_members
            .iter()
            .position(|member| member.id() == member_id)
            .ok_or_else(|| BoardDomainError::MemberNotFound(member_id.clone()))?;
        let member = self.team_members.remove(position);

        let removed_tasks = remove_assigned(&mut self.tasks, member_id);
        let removed_completed_tasks = remove_assigned(&mut self.completed_tasks, member_id);

        let ordered = self.member_ids_in_order(None);
        self.apply_member_ranks(&ordered, clock);

        Ok(MemberRemoval {
            member,
            removed_tasks,
            removed_completed_tasks,
        })
    }

    // ── Active tasks ────────────────────────────────────────────────

    /// Creates an active task.
    ///
    /// The task is appended after the assignee's last task unless the input
    /// carries an explicit priority, in which case it is spliced in at that
    /// (clamped) position.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a blank title, a non-positive score or
    /// a blank assignee, and [`BoardDomainError::MemberNotFound`] when the
    /// assignee does not exist.
    pub fn add_task(&mut self, new_task: NewTask, clock: &impl Clock) -> BoardResult<Task> {
        self.insert_task(TaskId::generate(), new_task, clock)
    }

    /// Creates an active task under a caller-chosen identifier.
    pub(crate) fn insert_task(
        &mut self,
        task_id: TaskId,
        new_task: NewTask,
        clock: &impl Clock,
    ) -> BoardResult<Task> {
        let requested = new_task.priority();
        let input = new_task.validate()?;
        let assignee = input.assigned_to().clone();
        self.member(&assignee)?;

        let siblings = self.active_ids_for(&assignee, None);
        let position = clamp_index(requested.unwrap_or(u32::MAX), siblings.len());
        let task = Task::create(task_id.clone(), input, rank(position), clock);
        let ordered = splice(siblings, rank(position), task_id);

        self.tasks.push(task.clone());
        self.apply_task_ranks(&assignee, &ordered, clock);
        Ok(task)
    }

    /// Edits an active task in place.
    ///
    /// Title, score and deadline are overwritten when set. An assignee or
    /// priority change moves the task with [`Self::reorder_task`]; a new
    /// assignee without a priority appends the task to that member's list.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::TaskNotFound`], a
    /// [`BoardDomainError::MemberNotFound`] for an unknown new assignee, or a
    /// validation error for a blank title or non-positive score.
    pub fn update_task(
        &mut self,
        task_id: &TaskId,
        patch: TaskPatch,
        clock: &impl Clock,
    ) -> BoardResult<Task> {
        let current = self.active_task(task_id)?;
        let current_assignee = current.assigned_to().clone();
        let new_assignee = patch
            .assigned_to()
            .filter(|assignee| **assignee != current_assignee)
            .cloned();
        let new_priority = patch.priority();
        if let Some(assignee) = &new_assignee {
            self.member(assignee)?;
        }
        let details = patch.into_details()?;

        if let Some(task) = self.tasks.iter_mut().find(|task| task.id() == task_id) {
            task.apply_details(details, clock);
        }

        match (new_assignee, new_priority) {
            (None, None) => self.active_task(task_id).cloned(),
            (Some(assignee), priority) => {
                self.reorder_task(task_id, &assignee, priority.unwrap_or(u32::MAX), clock)
            }
            (None, Some(priority)) => {
                self.reorder_task(task_id, &current_assignee, priority, clock)
            }
        }
    }

    /// Moves an active task to `new_assignee` at position `new_index`.
    ///
    /// The destination list is rebuilt by sorting the assignee's other active
    /// tasks by priority, splicing the moved task in at the clamped index and
    /// numbering the result `0..len`. Only tasks whose priority or assignee
    /// changed get a new `updated_at`. When the task changes assignee, the
    /// source list is renumbered to close the gap it leaves.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::TaskNotFound`] or
    /// [`BoardDomainError::MemberNotFound`] without touching the document.
    pub fn reorder_task(
        &mut self,
        task_id: &TaskId,
        new_assignee: &MemberId,
        new_index: u32,
        clock: &impl Clock,
    ) -> BoardResult<Task> {
        let source = self.active_task(task_id)?.assigned_to().clone();
        self.member(new_assignee)?;

        let ordered = splice(
            self.active_ids_for(new_assignee, Some(task_id)),
            new_index,
            task_id.clone(),
        );
        self.apply_task_ranks(new_assignee, &ordered, clock);
        if source != *new_assignee {
            self.renumber_active(&source, clock);
        }
        self.active_task(task_id).cloned()
    }

    /// Moves an active task to the completed set.
    ///
    /// The task is stamped with `completed_at` and the assignee's remaining
    /// active tasks are renumbered to close the gap.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::TaskNotFound`] when no active task matches.
    pub fn complete_task(&mut self, task_id: &TaskId, clock: &impl Clock) -> BoardResult<Task> {
        let position = self
            .tasks
            .iter()
            .position(|task| task.id() == task_id)
            .ok_or_else(|| BoardDomainError::TaskNotFound(task_id.clone()))?;
        let mut task = self.tasks.remove(position);
        task.complete(clock);
        let assignee = task.assigned_to().clone();
        let completed = task.clone();

        self.completed_tasks.push(task);
        self.renumber_active(&assignee, clock);
        Ok(completed)
    }

    /// Deletes an active task.
    ///
    /// Sibling priorities are left as they are, so a gap may remain until the
    /// next reorder or completion for that assignee.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::TaskNotFound`] when no active task matches.
    pub fn delete_task(&mut self, task_id: &TaskId) -> BoardResult<Task> {
        let position = self
            .tasks
            .iter()
            .position(|task| task.id() == task_id)
            .ok_or_else(|| BoardDomainError::TaskNotFound(task_id.clone()))?;
        Ok(self.tasks.remove(position))
    }

    // ── Completed tasks ─────────────────────────────────────────────

    /// Returns a completed task to its assignee's active list.
    ///
    /// The task is appended after the assignee's highest priority; other
    /// active tasks are not renumbered.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::CompletedTaskNotFound`] when no completed
    /// task matches.
    pub fn restore_task(&mut self, task_id: &TaskId, clock: &impl Clock) -> BoardResult<Task> {
        let position = self
            .completed_tasks
            .iter()
            .position(|task| task.id() == task_id)
            .ok_or_else(|| BoardDomainError::CompletedTaskNotFound(task_id.clone()))?;
        let mut task = self.completed_tasks.remove(position);
        let priority = self.next_priority(task.assigned_to());
        task.restore(priority, clock);
        let restored = task.clone();

        self.tasks.push(task);
        Ok(restored)
    }

    /// Permanently deletes a completed task.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::CompletedTaskNotFound`] when no completed
    /// task matches.
    pub fn delete_completed_task(&mut self, task_id: &TaskId) -> BoardResult<Task> {
        let position = self
            .completed_tasks
            .iter()
            .position(|task| task.id() == task_id)
            .ok_or_else(|| BoardDomainError::CompletedTaskNotFound(task_id.clone()))?;
        Ok(self.completed_tasks.remove(position))
    }

    /// Deletes every completed task assigned to a member.
    ///
    /// Returns the number of tasks removed.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::MemberNotFound`] for an unknown id.
    pub fn clear_completed_tasks_for_member(&mut self, member_id: &MemberId) -> BoardResult<usize> {
        self.member(member_id)?;
        Ok(remove_assigned(&mut self.completed_tasks, member_id))
    }

    // ── Ordering internals ──────────────────────────────────────────

    /// Active task ids of `assignee` sorted by priority, ties in storage order.
    fn active_ids_for(&self, assignee: &MemberId, except: Option<&TaskId>) -> Vec<TaskId> {
        let mut siblings: Vec<&Task> = self
            .tasks
            .iter()
            .filter(|task| task.assigned_to() == assignee && Some(task.id()) != except)
            .collect();
        siblings.sort_by_key(|task| task.priority());
        siblings.into_iter().map(|task| task.id().clone()).collect()
    }

    /// Member ids sorted by order, ties in storage order.
    fn member_ids_in_order(&self, except: Option<&MemberId>) -> Vec<MemberId> {
        self.members_in_order()
            .into_iter()
            .filter(|member| Some(member.id()) != except)
            .map(|member| member.id().clone())
            .collect()
    }

    /// Assigns `assignee` and position-based priorities to the listed tasks.
    fn apply_task_ranks(&mut self, assignee: &MemberId, ordered: &[TaskId], clock: &impl Clock) {
        let ranked = ranks(ordered);
        for task in &mut self.tasks {
            if let Some(&priority) = ranked.get(task.id()) {
                task.place(assignee, priority, clock);
            }
        }
    }

    fn apply_member_ranks(&mut self, ordered: &[MemberId], clock: &impl Clock) {
        let ranked = ranks(ordered);
        for member in &mut self.team_members {
            if let Some(&order) = ranked.get(member.id()) {
                member.set_order(order, clock);
            }
        }
    }

    /// Closes priority gaps in an assignee's list, keeping relative order.
    fn renumber_active(&mut self, assignee: &MemberId, clock: &impl Clock) {
        let ordered = self.active_ids_for(assignee, None);
        let ranked = ranks(&ordered);
        for task in &mut self.tasks {
            if let Some(&priority) = ranked.get(task.id()) {
                task.set_priority(priority, clock);
            }
        }
    }

    fn next_priority(&self, assignee: &MemberId) -> u32 {
        self.tasks
            .iter()
            .filter(|task| task.assigned_to() == assignee)
            .map(Task::priority)
            .max()
            .map_or(0, |highest| highest.saturating_add(1))
    }
}

/// Removes every task assigned to `member_id` and returns how many went.
fn remove_assigned(tasks: &mut Vec<Task>, member_id: &MemberId) -> usize {
    let before = tasks.len();
    tasks.retain(|task| task.assigned_to() != member_id);
    before.saturating_sub(tasks.len())
}
