//! In-memory integration tests against the seeded sample board.

use super::helpers::{TestService, sample_service, titles_for};
use eyre::ensure;
use rstest::rstest;
use teamboard::board::{domain::MemberId, services::BoardServiceError};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn sample_board_lists_johns_tasks_in_priority_order(
    sample_service: Result<TestService, BoardServiceError>,
) -> eyre::Result<()> {
    let service = sample_service?;

    let titles = titles_for(&service, &MemberId::new("john-doe")).await?;

    ensure!(titles == ["Setup project repository", "Write unit tests"]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn sample_board_workload_covers_every_member(
    sample_service: Result<TestService, BoardServiceError>,
) -> eyre::Result<()> {
    let service = sample_service?;

    let workload = service.workload().await?;

    let names: Vec<&str> = workload
        .members
        .iter()
        .map(|entry| entry.member_name.as_str())
        .collect();
    ensure!(names == ["John", "Doe", "Felix"]);
    ensure!(workload.total_active_count == 4);
    ensure!(workload.total_completed_count == 0);
    Ok(())
}
