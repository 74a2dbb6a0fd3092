pub mod ticket;

use std::fmt;

use serde::{
    de::{self, value::StrDeserializer, DeserializeOwned, IntoDeserializer},
    ser::SerializeMap as _,
    Deserialize, Deserializer, Serialize, Serializer,
};
use serde_json::Value;

pub use self::ticket::Ticket;

/// RPC method tag carried in the `method` query parameter.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum Method {
    AllTickets,
    TicketById,
    CreateTicket,
    UpdateTicket,
    DeleteTicket,
    ChangeStatus,
}

impl Method {
    pub fn parse(tag: &str) -> Option<Self> {
        let de: StrDeserializer<'_, de::value::Error> = tag.into_deserializer();
        Self::deserialize(de).ok()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::AllTickets => "allTickets",
            Self::TicketById => "ticketById",
            Self::CreateTicket => "createTicket",
            Self::UpdateTicket => "updateTicket",
            Self::DeleteTicket => "deleteTicket",
            Self::ChangeStatus => "changeStatus",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a lookup that may find nothing.
///
/// Absence travels over the wire as an empty object `{}`.
#[derive(Clone, Debug, PartialEq)]
pub struct Lookup<T>(pub Option<T>);

impl<T> From<Option<T>> for Lookup<T> {
    fn from(value: Option<T>) -> Self {
        Self(value)
    }
}

impl<T: Serialize> Serialize for Lookup<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.0 {
            Some(found) => found.serialize(serializer),
            None => serializer.serialize_map(Some(0))?.end(),
        }
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Lookup<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(Self(None)),
            Value::Object(map) if map.is_empty() => Ok(Self(None)),
            found => T::deserialize(found)
                .map(|t| Self(Some(t)))
                .map_err(de::Error::custom),
        }
    }
}
