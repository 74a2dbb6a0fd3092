use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use derive_more::From;
use serde::de::DeserializeOwned;

use crate::{
    api::{self, ticket, Lookup, Method},
    store::{Id, Store},
};

pub type SharedStore = Arc<Store>;

pub fn router(store: SharedStore) -> Router {
    Router::new()
        .route("/", get(read).post(write))
        .with_state(store)
}

/// Query parameters; a key given more than once counts as absent.
struct Params {
    method: Option<String>,
    id: Option<String>,
}

impl From<Vec<(String, String)>> for Params {
    fn from(pairs: Vec<(String, String)>) -> Self {
        let single = |key: &str| {
            let mut values = pairs.iter().filter(|(k, _)| k == key);
            match (values.next(), values.next()) {
                (Some((_, value)), None) => Some(value.clone()),
                _ => None,
            }
        };
        Self {
            method: single("method"),
            id: single("id"),
        }
    }
}

impl Params {
    fn method(&self) -> Result<Method, DispatchError> {
        self.method
            .as_deref()
            .and_then(Method::parse)
            .ok_or(DispatchError::UnknownMethod)
    }
}

async fn read(
    State(store): State<SharedStore>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Response, DispatchError> {
    use DispatchError as E;
    use Method as M;

    let params = Params::from(params);
    let method = params.method()?;
    tracing::debug!(%method, "dispatching read");

    Ok(match method {
        M::AllTickets => Json(
            store
                .list_all()
                .into_iter()
                .map(ticket::Summary::from)
                .collect::<Vec<_>>(),
        )
        .into_response(),
        M::TicketById => {
            let found = params
                .id
                .as_deref()
                .and_then(|id| id.parse::<Id>().ok())
                .and_then(|id| store.get_by_id(id))
                .map(api::Ticket::from);
            Json(Lookup(found)).into_response()
        }
        M::CreateTicket
        | M::UpdateTicket
        | M::DeleteTicket
        | M::ChangeStatus => return Err(E::UnknownMethod),
    })
}

async fn write(
    State(store): State<SharedStore>,
    Query(params): Query<Vec<(String, String)>>,
    body: Bytes,
) -> Result<Response, DispatchError> {
    use DispatchError as E;
    use Method as M;

    let method = Params::from(params).method()?;
    tracing::debug!(%method, "dispatching write");

    Ok(match method {
        M::CreateTicket => {
            let ticket::CreateInput {
                name,
                description,
                status,
            } = payload(&body)?;
            let ticket = store.create(name, description, status.into());
            tracing::info!(id = %ticket.id, "ticket created");
            Json(api::Ticket::from(ticket)).into_response()
        }
        M::UpdateTicket => {
            let ticket::UpdateInput {
                id,
                name,
                description,
                status,
            } = payload(&body)?;
            let updated = id
                .and_then(|id| {
                    store.update(id, name, description, status.into())
                })
                .map(api::Ticket::from);
            if let Some(ticket) = &updated {
                tracing::info!(id = %ticket.id, "ticket updated");
            }
            Json(Lookup(updated)).into_response()
        }
        M::DeleteTicket => {
            let ticket::DeleteInput { id } = payload(&body)?;
            if let Some(id) = id {
                if store.delete(id) {
                    tracing::info!(%id, "ticket deleted");
                }
            }
            Json(ticket::Deleted { success: true }).into_response()
        }
        M::ChangeStatus => {
            let ticket::ChangeStatusInput { id, status } = payload(&body)?;
            let changed = id
                .and_then(|id| store.change_status(id, status.into()))
                .map(api::Ticket::from);
            if let Some(ticket) = &changed {
                tracing::info!(
                    id = %ticket.id,
                    status = ticket.status,
                    "ticket status changed"
                );
            }
            Json(Lookup(changed)).into_response()
        }
        M::AllTickets | M::TicketById => return Err(E::UnknownMethod),
    })
}

/// Decodes a write body; an empty body reads as `{}`.
fn payload<T: DeserializeOwned>(body: &[u8]) -> Result<T, DispatchError> {
    let body = if body.iter().all(u8::is_ascii_whitespace) {
        b"{}".as_slice()
    } else {
        body
    };
    Ok(serde_json::from_slice(body).inspect_err(|e| {
        tracing::warn!(error = %e, "malformed request body");
    })?)
}

#[derive(Debug, From)]
pub enum DispatchError {
    #[from]
    MalformedBody(serde_json::Error),
    UnknownMethod,
}

impl IntoResponse for DispatchError {
    fn into_response(self) -> Response {
        match self {
            Self::MalformedBody(_) => StatusCode::BAD_REQUEST,
            Self::UnknownMethod => StatusCode::NOT_FOUND,
        }
        .into_response()
    }
}
