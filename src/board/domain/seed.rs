//! Sample board written when a data file is created for the first time.

use super::{BoardDocument, BoardResult, MemberId, MemberName, NewTask, TaskId};
use chrono::TimeDelta;
use mockable::Clock;

const SAMPLE_MEMBERS: [(&str, &str); 3] = [
    ("john-doe", "John"),
    ("jane-doe", "Doe"),
    ("felix-smith", "Felix"),
];

struct SampleTask {
    id: &'static str,
    title: &'static str,
    score: f64,
    assignee: &'static str,
    due_in_days: Option<i64>,
}

const SAMPLE_TASKS: [SampleTask; 4] = [
    SampleTask {
        id: "task-1",
        title: "Setup project repository",
        score: 5.0,
        assignee: "john-doe",
        due_in_days: None,
    },
    SampleTask {
        id: "task-2",
        title: "Design user interface mockups",
        score: 8.0,
        assignee: "jane-doe",
        due_in_days: Some(7),
    },
    SampleTask {
        id: "task-3",
        title: "Implement authentication system",
        score: 13.0,
        assignee: "felix-smith",
        due_in_days: None,
    },
    SampleTask {
        id: "task-4",
        title: "Write unit tests",
        score: 3.0,
        assignee: "john-doe",
        due_in_days: None,
    },
];

impl BoardDocument {
    /// Builds the sample board: three members and four tasks.
    ///
    /// # Errors
    ///
    /// Returns a [`super::BoardDomainError`] if a sample record fails
    /// validation.
    pub fn sample(clock: &impl Clock) -> BoardResult<Self> {
        let mut document = Self::empty(clock);
        for (id, name) in SAMPLE_MEMBERS {
            document.insert_member(MemberId::new(id), MemberName::new(name)?, None, clock);
        }

        let now = clock.utc();
        for sample in &SAMPLE_TASKS {
            let mut new_task = NewTask::new(sample.title, sample.score, sample.assignee);
            let deadline = sample
                .due_in_days
                .and_then(|days| now.checked_add_signed(TimeDelta::days(days)));
            if let Some(due) = deadline {
                new_task = new_task.with_deadline(due);
            }
            document.insert_task(TaskId::new(sample.id), new_task, clock)?;
        }
        Ok(document)
    }
}
