//! Shared fixtures for board unit tests.

use crate::board::domain::{BoardDocument, MemberId, MemberName, NewTask, Task, TaskId};
use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};
use mockable::Clock;
use rstest::fixture;
use std::sync::{Arc, Mutex};

/// Clock that only moves when told to.
#[derive(Debug, Clone)]
pub(super) struct TestClock {
    now: Arc<Mutex<DateTime<Utc>>>,
}

impl TestClock {
    pub(super) fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0)
            .single()
            .expect("valid start time")
    }

    pub(super) fn new() -> Self {
        Self {
            now: Arc::new(Mutex::new(Self::start())),
        }
    }

    pub(super) fn advance(&self, seconds: i64) -> DateTime<Utc> {
        let mut now = self.now.lock().expect("clock lock");
        *now = now
            .checked_add_signed(TimeDelta::seconds(seconds))
            .expect("time in range");
        *now
    }
}

impl Clock for TestClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.now.lock().expect("clock lock")
    }
}

#[fixture]
pub(super) fn clock() -> TestClock {
    TestClock::new()
}

/// Board with members `m1` and `m2` and no tasks.
pub(super) fn board(clock: &TestClock) -> BoardDocument {
    let mut document = BoardDocument::empty(clock);
    for id in ["m1", "m2"] {
        let name = MemberName::new(id.to_uppercase()).expect("valid name");
        document.insert_member(MemberId::new(id), name, None, clock);
    }
    document
}

/// Appends tasks titled after their ids, each with score 1.
pub(super) fn add_tasks(
    document: &mut BoardDocument,
    clock: &TestClock,
    assignee: &str,
    titles: &[&str],
) {
    for title in titles {
        document
            .insert_task(TaskId::new(*title), NewTask::new(*title, 1.0, assignee), clock)
            .expect("task inserted");
    }
}

/// Titles and priorities of a member's active tasks, priority order.
pub(super) fn lineup(document: &BoardDocument, assignee: &str) -> Vec<(String, u32)> {
    document
        .tasks_for_member(&MemberId::new(assignee))
        .expect("known member")
        .into_iter()
        .map(|task| (task.title().to_owned(), task.priority()))
        .collect()
}

pub(super) fn expected(entries: &[(&str, u32)]) -> Vec<(String, u32)> {
    entries
        .iter()
        .map(|(title, priority)| ((*title).to_owned(), *priority))
        .collect()
}

pub(super) fn active(document: &BoardDocument, id: &str) -> Task {
    document
        .active_task(&TaskId::new(id))
        .expect("active task")
        .clone()
}

/// Checks that every member's active priorities are exactly `0..K`.
pub(super) fn priorities_are_dense(document: &BoardDocument) -> bool {
    document.team_members().iter().all(|member| {
        is_dense(
            document
                .tasks()
                .iter()
                .filter(|task| task.assigned_to() == member.id())
                .map(Task::priority)
                .collect(),
        )
    })
}

/// Checks that member orders are exactly `0..N`.
pub(super) fn member_orders_are_dense(document: &BoardDocument) -> bool {
    is_dense(
        document
            .team_members()
            .iter()
            .map(|member| member.order())
            .collect(),
    )
}

fn is_dense(mut values: Vec<u32>) -> bool {
    values.sort_unstable();
    values
        .into_iter()
        .zip(0_u32..)
        .all(|(value, position)| value == position)
}
