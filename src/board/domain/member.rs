//! Team member record.

use super::{BoardDomainError, MemberId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A person on the board who owns an ordered list of tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    id: MemberId,
    name: String,
    #[serde(default)]
    order: u32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TeamMember {
    /// Creates a member with a caller-chosen identifier.
    pub(crate) fn create_with_id(
        id: MemberId,
        name: MemberName,
        order: u32,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            id,
            name: name.0,
            order,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Returns the member identifier.
    #[must_use]
    pub const fn id(&self) -> &MemberId {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the board position (0 first).
    #[must_use]
    pub const fn order(&self) -> u32 {
        self.order
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub(crate) fn rename(&mut self, name: MemberName, clock: &impl Clock) {
        self.name = name.0;
        self.updated_at = clock.utc();
    }

    /// Sets the board position, stamping `updated_at` when it changed.
    pub(crate) fn set_order(&mut self, order: u32, clock: &impl Clock) {
        if self.order == order {
            return;
        }
        self.order = order;
        self.updated_at = clock.utc();
    }
}

/// Non-blank, trimmed team member name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberName(String);

impl MemberName {
    /// Creates a validated member name.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyMemberName`] when the value is blank.
    pub fn new(value: impl AsRef<str>) -> Result<Self, BoardDomainError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(BoardDomainError::EmptyMemberName);
        }
        Ok(Self(trimmed.to_owned()))
    }
}
