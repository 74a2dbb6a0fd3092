use std::fmt;

use async_trait::async_trait;
use derive_more::Display;
use itertools::Itertools as _;

use crate::{
    api::{self, ticket},
    client::{Client, ConnectionError},
};

/// Operations the view needs from the backend.
#[async_trait]
pub trait TicketApi: Send + Sync {
    async fn all_tickets(&self) -> Result<Vec<ticket::Summary>, ConnectionError>;

    async fn ticket_by_id(
        &self,
        id: ticket::Id,
    ) -> Result<Option<api::Ticket>, ConnectionError>;

    async fn create_ticket(
        &self,
        input: &ticket::CreateInput,
    ) -> Result<api::Ticket, ConnectionError>;

    async fn update_ticket(
        &self,
        input: &ticket::UpdateInput,
    ) -> Result<Option<api::Ticket>, ConnectionError>;

    async fn delete_ticket(
        &self,
        id: ticket::Id,
    ) -> Result<ticket::Deleted, ConnectionError>;

    async fn change_status(
        &self,
        id: ticket::Id,
        status: bool,
    ) -> Result<Option<api::Ticket>, ConnectionError>;
}

#[async_trait]
impl TicketApi for Client {
    async fn all_tickets(&self) -> Result<Vec<ticket::Summary>, ConnectionError> {
        Client::all_tickets(self).await
    }

    async fn ticket_by_id(
        &self,
        id: ticket::Id,
    ) -> Result<Option<api::Ticket>, ConnectionError> {
        Client::ticket_by_id(self, id).await
    }

    async fn create_ticket(
        &self,
        input: &ticket::CreateInput,
    ) -> Result<api::Ticket, ConnectionError> {
        Client::create_ticket(self, input).await
    }

    async fn update_ticket(
        &self,
        input: &ticket::UpdateInput,
    ) -> Result<Option<api::Ticket>, ConnectionError> {
        Client::update_ticket(self, input).await
    }

    async fn delete_ticket(
        &self,
        id: ticket::Id,
    ) -> Result<ticket::Deleted, ConnectionError> {
        Client::delete_ticket(self, id).await
    }

    async fn change_status(
        &self,
        id: ticket::Id,
        status: bool,
    ) -> Result<Option<api::Ticket>, ConnectionError> {
        Client::change_status(self, id, status).await
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ListDisplay {
    Tickets(Vec<ticket::Summary>),

    /// Loading failed; the message replaces the list.
    Failed(String),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Modal {
    Detail { name: String, description: String },
    Edit(EditForm),
    ConfirmDelete { id: ticket::Id },
    Create(CreateForm),
    Error(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct EditForm {
    pub id: ticket::Id,
    pub name: String,
    pub description: String,
    pub status: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CreateForm {
    pub name: String,
    pub description: String,
    pub status: bool,
}

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum ValidationError {
    #[display("ticket name must not be blank")]
    BlankName,
}

impl std::error::Error for ValidationError {}

const NOT_FOUND: &str = "ticket not found";

pub struct View<A> {
    api: A,
    list: ListDisplay,
    modal: Option<Modal>,
}

impl<A: TicketApi> View<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            list: ListDisplay::Tickets(Vec::new()),
            modal: None,
        }
    }

    pub fn list(&self) -> &ListDisplay {
        &self.list
    }

    pub fn modal(&self) -> Option<&Modal> {
        self.modal.as_ref()
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    pub async fn refresh(&mut self) {
        self.list = match self.api.all_tickets().await {
            Ok(tickets) => ListDisplay::Tickets(tickets),
            Err(e) => ListDisplay::Failed(e.to_string()),
        };
    }

    pub async fn toggle_status(&mut self, id: ticket::Id) {
        let res = match self.api.ticket_by_id(id).await {
            Ok(Some(ticket)) => {
                self.api.change_status(id, !ticket.status).await
            }
            Ok(None) => Ok(None),
            Err(e) => Err(e),
        };
        self.finish(res).await;
    }

    pub async fn open_detail(&mut self, id: ticket::Id) {
        self.modal = Some(match self.api.ticket_by_id(id).await {
            Ok(Some(ticket)) => Modal::Detail {
                name: ticket.name,
                description: ticket.description,
            },
            Ok(None) => Modal::Error(NOT_FOUND.into()),
            Err(e) => Modal::Error(e.to_string()),
        });
    }

    pub async fn open_edit(&mut self, id: ticket::Id) {
        self.modal = Some(match self.api.ticket_by_id(id).await {
            Ok(Some(ticket)) => Modal::Edit(EditForm {
                id: ticket.id,
                name: ticket.name,
                description: ticket.description,
                status: ticket.status,
            }),
            Ok(None) => Modal::Error(NOT_FOUND.into()),
            Err(e) => Modal::Error(e.to_string()),
        });
    }

    pub async fn save_edit(&mut self, form: EditForm) -> Result<(), ValidationError> {
        if form.name.trim().is_empty() {
            return Err(ValidationError::BlankName);
        }
        let input = ticket::UpdateInput {
            id: Some(form.id),
            name: form.name,
            description: form.description,
            status: form.status,
        };
        let res = self.api.update_ticket(&input).await;
        self.modal = None;
        self.finish(res).await;
        Ok(())
    }

    pub fn request_delete(&mut self, id: ticket::Id) {
        self.modal = Some(Modal::ConfirmDelete { id });
    }

    /// Deletes the ticket awaiting confirmation, if any.
    pub async fn confirm_delete(&mut self) {
        let Some(Modal::ConfirmDelete { id }) = self.modal else {
            return;
        };
        self.modal = None;
        let res = self.api.delete_ticket(id).await.map(|_| Some(()));
        self.finish(res).await;
    }

    pub fn open_create(&mut self) {
        self.modal = Some(Modal::Create(CreateForm::default()));
    }

    /// Submits a new ticket. A failed request is dropped without notice.
    pub async fn save_create(
        &mut self,
        form: CreateForm,
    ) -> Result<(), ValidationError> {
        if form.name.trim().is_empty() {
            return Err(ValidationError::BlankName);
        }
        let input = ticket::CreateInput {
            name: form.name,
            description: form.description,
            status: form.status,
        };
        if let Ok(ticket) = self.api.create_ticket(&input).await {
            tracing::debug!(id = %ticket.id, "ticket created");
        }
        self.modal = None;
        self.refresh().await;
        Ok(())
    }

    /// Reports the outcome of an action and re-fetches the list.
    async fn finish<T>(&mut self, res: Result<Option<T>, ConnectionError>) {
        match res {
            Ok(Some(_)) => {}
            Ok(None) => self.modal = Some(Modal::Error(NOT_FOUND.into())),
            Err(e) => self.modal = Some(Modal::Error(e.to_string())),
        }
        self.refresh().await;
    }
}

fn status_mark(resolved: bool) -> &'static str {
    if resolved {
        "✔"
    } else {
        "❌"
    }
}

impl fmt::Display for ListDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Failed(message) => f.write_str(message),
            Self::Tickets(tickets) if tickets.is_empty() => f.write_str("No tickets"),
            Self::Tickets(tickets) => write!(
                f,
                "{}",
                tickets.iter().format_with("\n", |t, f| f(&format_args!(
                    "[{}] {}",
                    status_mark(t.status),
                    t.name,
                ))),
            ),
        }
    }
}

impl fmt::Display for Modal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Detail { name, description } => {
                let description = if description.is_empty() {
                    "No description"
                } else {
                    description.as_str()
                };
                write!(f, "{name}\n{description}")
            }
            Self::Edit(form) => write!(
                f,
                "Edit ticket\nName: {}\nDescription: {}\n[{}] Done",
                form.name,
                form.description,
                if form.status { "x" } else { " " },
            ),
            Self::ConfirmDelete { .. } => f.write_str("Delete ticket?"),
            Self::Create(form) => write!(
                f,
                "Add ticket\nName: {}\nDescription: {}\n[{}] Done",
                form.name,
                form.description,
                if form.status { "x" } else { " " },
            ),
            Self::Error(message) => write!(f, "Error: {message}"),
        }
    }
}
