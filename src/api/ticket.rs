use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::store;

pub use crate::store::ticket::{Id, Status};

/// Full ticket, as returned by single-ticket operations.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Ticket {
    pub id: Id,
    pub name: String,
    pub description: String,
    pub status: bool,
    /// Unix epoch milliseconds.
    pub created: i64,
}

/// Ticket as shown in the list, without its description.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Summary {
    pub id: Id,
    pub name: String,
    pub status: bool,
    pub created: i64,
}

impl From<store::Ticket> for Ticket {
    fn from(ticket: store::Ticket) -> Self {
        Self {
            id: ticket.id,
            created: epoch_millis(&ticket),
            name: ticket.name,
            description: ticket.description,
            status: ticket.status.into(),
        }
    }
}

impl From<store::Ticket> for Summary {
    fn from(ticket: store::Ticket) -> Self {
        Self {
            id: ticket.id,
            created: epoch_millis(&ticket),
            name: ticket.name,
            status: ticket.status.into(),
        }
    }
}

fn epoch_millis(ticket: &store::Ticket) -> i64 {
    let millis = ticket.created.unix_timestamp_nanos() / 1_000_000;
    i64::try_from(millis).unwrap_or(i64::MAX)
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct CreateInput {
    #[serde(default, deserialize_with = "text")]
    pub name: String,
    #[serde(default, deserialize_with = "text")]
    pub description: String,
    #[serde(default, deserialize_with = "truthy")]
    pub status: bool,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct UpdateInput {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<Id>,
    #[serde(default, deserialize_with = "text")]
    pub name: String,
    #[serde(default, deserialize_with = "text")]
    pub description: String,
    #[serde(default, deserialize_with = "truthy")]
    pub status: bool,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct DeleteInput {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<Id>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ChangeStatusInput {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<Id>,
    #[serde(default, deserialize_with = "truthy")]
    pub status: bool,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Deleted {
    pub success: bool,
}

/// Coerces any JSON value to a boolean the way JavaScript truthiness does.
fn truthy<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}

/// Falsy values read as an empty string, any other value as its text.
fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null | Value::Bool(false) => String::new(),
        Value::Number(n) if n.as_f64().is_some_and(|n| n == 0.0) => {
            String::new()
        }
        other => other.to_string(),
    })
}

/// An id that doesn't parse can't match any ticket, so it reads as `None`.
fn lenient_id<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Id>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s.parse().ok(),
        _ => None,
    })
}
