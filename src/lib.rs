pub mod api;
pub mod client;
pub mod config;
pub mod dispatch;
pub mod store;
pub mod view;

pub use self::{client::Client, config::Config, store::Store};
