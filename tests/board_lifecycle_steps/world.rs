//! Shared world state for board ordering and lifecycle BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use teamboard::board::{
    adapters::memory::InMemoryBoardRepository,
    domain::{BoardDocument, MemberId, Task, TaskId},
    services::{BoardService, BoardServiceError},
};

/// Service type used by the BDD world.
pub type TestBoardService = BoardService<InMemoryBoardRepository, DefaultClock>;

/// Scenario world for board behaviour tests.
pub struct BoardWorld {
    pub service: TestBoardService,
    pub members: HashMap<String, MemberId>,
    pub tasks: HashMap<String, TaskId>,
    pub last_error: Option<BoardServiceError>,
    pub cleared: Option<usize>,
}

impl BoardWorld {
    /// Creates a world around an empty board.
    #[must_use]
    pub fn new() -> Self {
        let service = BoardService::new(
            Arc::new(InMemoryBoardRepository::new(BoardDocument::empty(
                &DefaultClock,
            ))),
            Arc::new(DefaultClock),
        );

        Self {
            service,
            members: HashMap::new(),
            tasks: HashMap::new(),
            last_error: None,
            cleared: None,
        }
    }

    /// Resolves a member id from the name used in the scenario.
    pub fn member_id(&self, name: &str) -> Result<MemberId, eyre::Report> {
        self.members
            .get(name)
            .cloned()
            .ok_or_else(|| eyre::eyre!("unknown member {name} in scenario world"))
    }

    /// Resolves a task id from the title used in the scenario.
    pub fn task_id(&self, title: &str) -> Result<TaskId, eyre::Report> {
        self.tasks
            .get(title)
            .cloned()
            .ok_or_else(|| eyre::eyre!("unknown task {title} in scenario world"))
    }

    /// Returns a member's active tasks in priority order.
    pub fn active_tasks(&self, name: &str) -> Result<Vec<Task>, eyre::Report> {
        let member_id = self.member_id(name)?;
        Ok(run_async(self.service.tasks_for_member(&member_id))?)
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Splits a comma separated title list.
pub fn titles(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|title| !title.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
