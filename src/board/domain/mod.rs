//! Domain model for the team task board.
//!
//! The board is a single document holding team members, their prioritised
//! active tasks, and the completed-task history. All mutation happens through
//! [`BoardDocument`] methods, which keep the ordering invariants intact and
//! never reach for infrastructure.

pub(crate) mod deadline;
mod document;
mod error;
mod ids;
mod member;
mod ordering;
mod seed;
mod task;
mod workload;

pub use document::{BoardDocument, BoardResult, MemberRemoval};
pub use deadline::parse_deadline;
pub use error::BoardDomainError;
pub use ids::{MemberId, TaskId};
pub use member::{MemberName, TeamMember};
pub use task::{NewTask, Task, TaskPatch, TaskStatus, ValidatedTask};
pub use workload::{MemberWorkload, WorkloadReport};
