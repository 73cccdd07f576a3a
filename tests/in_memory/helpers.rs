//! Shared test helpers for in-memory board integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use teamboard::board::{
    adapters::memory::InMemoryBoardRepository,
    domain::{BoardDocument, MemberId, NewTask, Task},
    services::{BoardService, BoardServiceError},
};

/// Service type used by in-memory integration tests.
pub type TestService = BoardService<InMemoryBoardRepository, DefaultClock>;

/// Provides a service over an empty board.
#[fixture]
pub fn service() -> TestService {
    BoardService::new(
        Arc::new(InMemoryBoardRepository::new(BoardDocument::empty(
            &DefaultClock,
        ))),
        Arc::new(DefaultClock),
    )
}

/// Provides a service over the sample board.
///
/// # Errors
///
/// Returns an error if the sample board cannot be built.
#[fixture]
pub fn sample_service() -> Result<TestService, BoardServiceError> {
    let document = BoardDocument::sample(&DefaultClock)?;
    Ok(BoardService::new(
        Arc::new(InMemoryBoardRepository::new(document)),
        Arc::new(DefaultClock),
    ))
}

/// Adds one task per title to `member_id`, in order.
///
/// # Errors
///
/// Returns an error if any task cannot be added.
pub async fn add_tasks(
    service: &TestService,
    member_id: &MemberId,
    titles: &[&str],
) -> Result<Vec<Task>, BoardServiceError> {
    let mut created = Vec::with_capacity(titles.len());
    for title in titles {
        created.push(
            service
                .add_task(NewTask::new(*title, 2.0, member_id.as_str()))
                .await?,
        );
    }
    Ok(created)
}

/// Returns a member's active task titles in priority order.
///
/// # Errors
///
/// Returns an error if the member does not exist.
pub async fn titles_for(
    service: &TestService,
    member_id: &MemberId,
) -> Result<Vec<String>, BoardServiceError> {
    Ok(service
        .tasks_for_member(member_id)
        .await?
        .into_iter()
        .map(|task| task.title().to_owned())
        .collect())
}
