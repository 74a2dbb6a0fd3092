pub mod ticket;

use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard, PoisonError},
};

use time::OffsetDateTime;

pub use self::ticket::{Id, Status, Ticket};

// Each operation holds the lock for its whole mutation.
#[derive(Debug, Default)]
pub struct Store(Mutex<Inner>);

#[derive(Debug, Default)]
struct Inner {
    tickets: HashMap<Id, Ticket>,

    /// Creation order of the live ids.
    order: Vec<Id>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding the two demonstration tickets.
    pub fn seeded() -> Self {
        let now = OffsetDateTime::now_utc();
        let store = Self::new();
        {
            let mut inner = store.lock();
            inner.insert(Ticket {
                id: Id::from(1),
                name: "First ticket".into(),
                description: String::new(),
                status: Status::Open,
                created: now,
            });
            inner.insert(Ticket {
                id: Id::from(2),
                name: "Second ticket".into(),
                description: String::new(),
                status: Status::Resolved,
                created: now,
            });
        }
        store
    }

    /// Snapshot of every live ticket in creation order.
    pub fn list_all(&self) -> Vec<Ticket> {
        let inner = self.lock();
        inner
            .order
            .iter()
            .filter_map(|id| inner.tickets.get(id))
            .cloned()
            .collect()
    }

    pub fn get_by_id(&self, id: Id) -> Option<Ticket> {
        self.lock().tickets.get(&id).cloned()
    }

    pub fn create(
        &self,
        name: String,
        description: String,
        status: Status,
    ) -> Ticket {
        let mut inner = self.lock();
        let mut id = Id::new();
        while inner.tickets.contains_key(&id) {
            id = Id::new();
        }
        let ticket = Ticket {
            id,
            name,
            description,
            status,
            created: OffsetDateTime::now_utc(),
        };
        inner.insert(ticket.clone());
        ticket
    }

    /// Replaces name, description and status of an existing ticket.
    pub fn update(
        &self,
        id: Id,
        name: String,
        description: String,
        status: Status,
    ) -> Option<Ticket> {
        let mut inner = self.lock();
        let ticket = inner.tickets.get_mut(&id)?;
        ticket.name = name;
        ticket.description = description;
        ticket.status = status;
        Some(ticket.clone())
    }

    pub fn change_status(&self, id: Id, status: Status) -> Option<Ticket> {
        let mut inner = self.lock();
        let ticket = inner.tickets.get_mut(&id)?;
        ticket.status = status;
        Some(ticket.clone())
    }

    /// Removes the ticket, returning whether it existed.
    pub fn delete(&self, id: Id) -> bool {
        let mut inner = self.lock();
        let existed = inner.tickets.remove(&id).is_some();
        if existed {
            inner.order.retain(|live| *live != id);
        }
        existed
    }

    pub fn len(&self) -> usize {
        self.lock().tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Inner {
    fn insert(&mut self, ticket: Ticket) {
        self.order.push(ticket.id);
        self.tickets.insert(ticket.id, ticket);
    }
}
