//! Request handlers translating HTTP calls into board service calls.

use super::dto::{
    ClearedResponse, CreateMemberBody, CreateTaskBody, HealthResponse, ReorderMemberBody,
    ReorderTaskBody, UpdateMemberBody, UpdateTaskBody,
};
use super::error::{ApiError, ApiResult};
use crate::board::{
    domain::{BoardDocument, MemberId, MemberRemoval, Task, TaskId, TeamMember, WorkloadReport},
    ports::BoardRepository,
    services::BoardService,
};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use mockable::Clock;
use std::sync::Arc;

/// Shared handler state.
pub type SharedBoard<R, C> = Arc<BoardService<R, C>>;

type Body<T> = Result<Json<T>, JsonRejection>;

/// `GET /api/health`
#[expect(clippy::unused_async, reason = "axum handlers are async functions")]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_owned(),
        message: "Server is running".to_owned(),
    })
}

/// `GET /api/data`
pub async fn get_data<R, C>(
    State(board): State<SharedBoard<R, C>>,
) -> ApiResult<Json<BoardDocument>>
where
    R: BoardRepository,
    C: Clock + Send + Sync,
{
    Ok(Json(board.document().await?))
}

/// `PUT /api/data`
pub async fn replace_data<R, C>(
    State(board): State<SharedBoard<R, C>>,
    payload: Body<BoardDocument>,
) -> ApiResult<Json<BoardDocument>>
where
    R: BoardRepository,
    C: Clock + Send + Sync,
{
    let Json(document) = payload?;
    Ok(Json(board.replace_document(document).await?))
}

/// `POST /api/tasks`
pub async fn create_task<R, C>(
    State(board): State<SharedBoard<R, C>>,
    payload: Body<CreateTaskBody>,
) -> ApiResult<(StatusCode, Json<Task>)>
where
    R: BoardRepository,
    C: Clock + Send + Sync,
{
    let Json(body) = payload?;
    let new_task = body.into_new_task().ok_or_else(|| {
        ApiError::BadRequest("Title, score, and assignedTo are required".to_owned())
    })?;
    let task = board.add_task(new_task).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// `PUT /api/tasks/{id}`
pub async fn update_task<R, C>(
    State(board): State<SharedBoard<R, C>>,
    Path(task_id): Path<String>,
    payload: Body<UpdateTaskBody>,
) -> ApiResult<Json<Task>>
where
    R: BoardRepository,
    C: Clock + Send + Sync,
{
    let Json(body) = payload?;
    let task = board.update_task(&TaskId::new(task_id), body.into()).await?;
    Ok(Json(task))
}

/// `DELETE /api/tasks/{id}`
pub async fn delete_task<R, C>(
    State(board): State<SharedBoard<R, C>>,
    Path(task_id): Path<String>,
) -> ApiResult<StatusCode>
where
    R: BoardRepository,
    C: Clock + Send + Sync,
{
    board.delete_task(&TaskId::new(task_id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `PUT /api/tasks/reorder`
pub async fn reorder_task<R, C>(
    State(board): State<SharedBoard<R, C>>,
    payload: Body<ReorderTaskBody>,
) -> ApiResult<Json<Task>>
where
    R: BoardRepository,
    C: Clock + Send + Sync,
{
    let Json(body) = payload?;
    let position = body.position();
    let task = board
        .reorder_task(
            &TaskId::new(body.task_id),
            &MemberId::new(body.assigned_to),
            position,
        )
        .await?;
    Ok(Json(task))
}

/// `POST /api/tasks/{id}/complete`
pub async fn complete_task<R, C>(
    State(board): State<SharedBoard<R, C>>,
    Path(task_id): Path<String>,
) -> ApiResult<Json<Task>>
where
    R: BoardRepository,
    C: Clock + Send + Sync,
{
    Ok(Json(board.complete_task(&TaskId::new(task_id)).await?))
}

/// `POST /api/completed-tasks/{id}/restore`
pub async fn restore_task<R, C>(
    State(board): State<SharedBoard<R, C>>,
    Path(task_id): Path<String>,
) -> ApiResult<Json<Task>>
where
    R: BoardRepository,
    C: Clock + Send + Sync,
{
    Ok(Json(board.restore_task(&TaskId::new(task_id)).await?))
}

/// `DELETE /api/completed-tasks/{id}`
pub async fn delete_completed_task<R, C>(
    State(board): State<SharedBoard<R, C>>,
    Path(task_id): Path<String>,
) -> ApiResult<StatusCode>
where
    R: BoardRepository,
    C: Clock + Send + Sync,
{
    board.delete_completed_task(&TaskId::new(task_id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /api/team-members`
pub async fn list_members<R, C>(
    State(board): State<SharedBoard<R, C>>,
) -> ApiResult<Json<Vec<TeamMember>>>
where
    R: BoardRepository,
    C: Clock + Send + Sync,
{
    Ok(Json(board.team_members().await?))
}

/// `POST /api/team-members`
pub async fn create_member<R, C>(
    State(board): State<SharedBoard<R, C>>,
    payload: Body<CreateMemberBody>,
) -> ApiResult<(StatusCode, Json<TeamMember>)>
where
    R: BoardRepository,
    C: Clock + Send + Sync,
{
    let Json(body) = payload?;
    let position = body.position();
    let name = body
        .name
        .ok_or_else(|| ApiError::BadRequest("name is required".to_owned()))?;
    let member = board.add_team_member(&name, position).await?;
    Ok((StatusCode::CREATED, Json(member)))
}

/// `PUT /api/team-members/{id}`
pub async fn update_member<R, C>(
    State(board): State<SharedBoard<R, C>>,
    Path(member_id): Path<String>,
    payload: Body<UpdateMemberBody>,
) -> ApiResult<Json<TeamMember>>
where
    R: BoardRepository,
    C: Clock + Send + Sync,
{
    let Json(body) = payload?;
    let member = board
        .update_team_member(&MemberId::new(member_id), &body.name)
        .await?;
    Ok(Json(member))
}

/// `PUT /api/team-members/reorder`
pub async fn reorder_member<R, C>(
    State(board): State<SharedBoard<R, C>>,
    payload: Body<ReorderMemberBody>,
) -> ApiResult<Json<TeamMember>>
where
    R: BoardRepository,
    C: Clock + Send + Sync,
{
    let Json(body) = payload?;
    let position = body.position();
    let member = board
        .reorder_team_member(&MemberId::new(body.member_id), position)
        .await?;
    Ok(Json(member))
}

/// `DELETE /api/team-members/{id}`
pub async fn delete_member<R, C>(
    State(board): State<SharedBoard<R, C>>,
    Path(member_id): Path<String>,
) -> ApiResult<Json<MemberRemoval>>
where
    R: BoardRepository,
    C: Clock + Send + Sync,
{
    Ok(Json(
        board.delete_team_member(&MemberId::new(member_id)).await?,
    ))
}

/// `GET /api/team-members/{id}/tasks`
pub async fn member_tasks<R, C>(
    State(board): State<SharedBoard<R, C>>,
    Path(member_id): Path<String>,
) -> ApiResult<Json<Vec<Task>>>
where
    R: BoardRepository,
    C: Clock + Send + Sync,
{
    Ok(Json(
        board.tasks_for_member(&MemberId::new(member_id)).await?,
    ))
}

/// `GET /api/team-members/{id}/completed-tasks`
pub async fn member_completed_tasks<R, C>(
    State(board): State<SharedBoard<R, C>>,
    Path(member_id): Path<String>,
) -> ApiResult<Json<Vec<Task>>>
where
    R: BoardRepository,
    C: Clock + Send + Sync,
{
    Ok(Json(
        board
            .completed_tasks_for_member(&MemberId::new(member_id))
            .await?,
    ))
}

/// `DELETE /api/team-members/{id}/completed-tasks`
pub async fn clear_member_completed_tasks<R, C>(
    State(board): State<SharedBoard<R, C>>,
    Path(raw_member_id): Path<String>,
) -> ApiResult<Json<ClearedResponse>>
where
    R: BoardRepository,
    C: Clock + Send + Sync,
{
    let member_id = MemberId::new(raw_member_id);
    let removed = board.clear_completed_tasks_for_member(&member_id).await?;
    Ok(Json(ClearedResponse { member_id, removed }))
}

/// `GET /api/workload`
pub async fn workload<R, C>(
    State(board): State<SharedBoard<R, C>>,
) -> ApiResult<Json<WorkloadReport>>
where
    R: BoardRepository,
    C: Clock + Send + Sync,
{
    Ok(Json(board.workload().await?))
}
