//! In-memory integration tests for day-to-day board usage.

use super::helpers::{TestService, add_tasks, service, titles_for};
use eyre::{bail, ensure};
use rstest::rstest;
use teamboard::board::{
    domain::{BoardDomainError, TaskPatch, TaskStatus},
    services::BoardServiceError,
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn a_week_on_the_board(service: TestService) -> eyre::Result<()> {
    let ana = service.add_team_member("Ana", None).await?;
    let ben = service.add_team_member("Ben", None).await?;
    let tasks = add_tasks(&service, ana.id(), &["Spec", "Build", "Ship"]).await?;
    let [draft, build, ship] = tasks.as_slice() else {
        bail!("expected three tasks");
    };

    service.reorder_task(ship.id(), ana.id(), 0).await?;
    ensure!(titles_for(&service, ana.id()).await? == ["Ship", "Spec", "Build"]);

    service
        .update_task(build.id(), TaskPatch::new().with_assignee(ben.id().clone()))
        .await?;
    ensure!(titles_for(&service, ana.id()).await? == ["Ship", "Spec"]);
    ensure!(titles_for(&service, ben.id()).await? == ["Build"]);

    let done = service.complete_task(draft.id()).await?;
    ensure!(done.status() == TaskStatus::Completed);
    ensure!(titles_for(&service, ana.id()).await? == ["Ship"]);

    let workload = service.workload().await?;
    ensure!(workload.total_active_count == 2);
    ensure!(workload.total_completed_count == 1);

    let back = service.restore_task(draft.id()).await?;
    ensure!(back.priority() == 1);
    ensure!(titles_for(&service, ana.id()).await? == ["Ship", "Spec"]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn member_order_stays_dense(service: TestService) -> eyre::Result<()> {
    let first = service.add_team_member("First", None).await?;
    service.add_team_member("Second", None).await?;
    let third = service.add_team_member("Third", Some(0)).await?;

    service.reorder_team_member(third.id(), 1).await?;
    service.delete_team_member(first.id()).await?;

    let members = service.team_members().await?;
    let layout: Vec<(String, u32)> = members
        .iter()
        .map(|member| (member.name().to_owned(), member.order()))
        .collect();
    ensure!(layout == [("Third".to_owned(), 0), ("Second".to_owned(), 1)]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn missing_ids_are_reported_as_not_found(service: TestService) -> eyre::Result<()> {
    let ana = service.add_team_member("Ana", None).await?;
    let tasks = add_tasks(&service, ana.id(), &["Only"]).await?;
    let only = tasks.first().ok_or_else(|| eyre::eyre!("missing task"))?;

    service.delete_task(only.id()).await?;

    match service.complete_task(only.id()).await {
        Err(BoardServiceError::Domain(err)) if err.is_not_found() => {}
        other => bail!("expected not found, got {other:?}"),
    }
    match service.restore_task(only.id()).await {
        Err(BoardServiceError::Domain(BoardDomainError::CompletedTaskNotFound(_))) => {}
        other => bail!("expected completed task not found, got {other:?}"),
    }
    Ok(())
}
