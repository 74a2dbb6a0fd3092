use derive_more::Display;
use serde::{de::DeserializeOwned, Serialize};

use crate::api::{self, ticket, Lookup, Method};

/// The only failure the client reports.
///
/// Network failures, non-success statuses and undecodable bodies all collapse
/// into this one error; the underlying cause is only logged.
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
#[display("connection error")]
pub struct ConnectionError;

impl std::error::Error for ConnectionError {}

impl From<reqwest::Error> for ConnectionError {
    fn from(e: reqwest::Error) -> Self {
        tracing::warn!(error = %e, "helpdesk request failed");
        Self
    }
}

#[derive(Clone, Debug)]
pub struct Client {
    inner: reqwest::Client,
    base_url: String,
}

impl Client {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            inner: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub async fn all_tickets(
        &self,
    ) -> Result<Vec<ticket::Summary>, ConnectionError> {
        self.get(Method::AllTickets, None).await
    }

    pub async fn ticket_by_id(
        &self,
        id: ticket::Id,
    ) -> Result<Option<api::Ticket>, ConnectionError> {
        self.get::<Lookup<api::Ticket>>(Method::TicketById, Some(id))
            .await
            .map(|found| found.0)
    }

    pub async fn create_ticket(
        &self,
        input: &ticket::CreateInput,
    ) -> Result<api::Ticket, ConnectionError> {
        self.post(Method::CreateTicket, input).await
    }

    pub async fn update_ticket(
        &self,
        input: &ticket::UpdateInput,
    ) -> Result<Option<api::Ticket>, ConnectionError> {
        self.post::<_, Lookup<api::Ticket>>(Method::UpdateTicket, input)
            .await
            .map(|found| found.0)
    }

    pub async fn delete_ticket(
        &self,
        id: ticket::Id,
    ) -> Result<ticket::Deleted, ConnectionError> {
        self.post(Method::DeleteTicket, &ticket::DeleteInput { id: Some(id) })
            .await
    }

    pub async fn change_status(
        &self,
        id: ticket::Id,
        status: bool,
    ) -> Result<Option<api::Ticket>, ConnectionError> {
        let input = ticket::ChangeStatusInput {
            id: Some(id),
            status,
        };
        self.post::<_, Lookup<api::Ticket>>(Method::ChangeStatus, &input)
            .await
            .map(|found| found.0)
    }

    async fn get<T: DeserializeOwned>(
        &self,
        method: Method,
        id: Option<ticket::Id>,
    ) -> Result<T, ConnectionError> {
        let mut req = self
            .inner
            .get(&self.base_url)
            .query(&[("method", method.as_str())]);
        if let Some(id) = id {
            req = req.query(&[("id", id.to_string())]);
        }
        Ok(req.send().await?.error_for_status()?.json::<T>().await?)
    }

    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        body: &B,
    ) -> Result<T, ConnectionError> {
        Ok(self
            .inner
            .post(&self.base_url)
            .query(&[("method", method.as_str())])
            .json(body)
            .send()
            .await?
            .error_for_status()?
            .json::<T>()
            .await?)
    }
}
