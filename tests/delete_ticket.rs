pub mod common;

use helpdesk::api::ticket::{CreateInput, Deleted, Id};
use serde_json::json;

#[tokio::test]
async fn deletes_ticket() {
    let server = common::spawn().await;
    let ticket = server
        .client
        .create_ticket(&CreateInput {
            name: "Printer broken".into(),
            ..CreateInput::default()
        })
        .await
        .unwrap();

    let deleted = server.client.delete_ticket(ticket.id).await.unwrap();

    assert_eq!(deleted, Deleted { success: true });
    assert!(server.client.all_tickets().await.unwrap().is_empty());
}

#[tokio::test]
async fn deleting_missing_ticket_succeeds() {
    let server = common::spawn().await;
    let ticket = server
        .client
        .create_ticket(&CreateInput {
            name: "Printer broken".into(),
            ..CreateInput::default()
        })
        .await
        .unwrap();

    let deleted = server.client.delete_ticket(Id::from(404)).await.unwrap();
    assert_eq!(deleted, Deleted { success: true });

    let (_, body) = server.post("deleteTicket", &json!({})).await;
    assert_eq!(common::json(&body), json!({ "success": true }));

    let tickets = server.client.all_tickets().await.unwrap();
    assert_eq!(tickets.len(), 1);
    assert_eq!(tickets[0].id, ticket.id);
}

#[tokio::test]
async fn deleting_twice_succeeds() {
    let server = common::spawn().await;
    let ticket = server
        .client
        .create_ticket(&CreateInput::default())
        .await
        .unwrap();

    server.client.delete_ticket(ticket.id).await.unwrap();
    let deleted = server.client.delete_ticket(ticket.id).await.unwrap();
    assert!(deleted.success);
}
