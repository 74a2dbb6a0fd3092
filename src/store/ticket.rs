use std::str::FromStr;

use derive_more::Display;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq)]
pub struct Ticket {
    pub id: Id,
    pub name: String,
    pub description: String,
    pub status: Status,
    pub created: OffsetDateTime,
}

#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
pub struct Id(Uuid);

impl Id {
    /// Time-ordered id: millisecond timestamp followed by random bits, so two
    /// tickets created within the same millisecond still get distinct ids.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl From<u128> for Id {
    fn from(value: u128) -> Self {
        Self(Uuid::from_u128(value))
    }
}

impl FromStr for Id {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Status {
    /// Ticket still needs attention.
    #[default]
    Open,

    /// Ticket is done.
    Resolved,
}

impl Status {
    pub fn is_resolved(self) -> bool {
        self == Self::Resolved
    }
}

impl From<bool> for Status {
    fn from(resolved: bool) -> Self {
        if resolved {
            Self::Resolved
        } else {
            Self::Open
        }
    }
}

impl From<Status> for bool {
    fn from(status: Status) -> Self {
        status.is_resolved()
    }
}
