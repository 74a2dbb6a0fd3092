pub mod common;

use helpdesk::api::ticket::{CreateInput, Id};
use reqwest::StatusCode;

#[tokio::test]
async fn retrieves_ticket() {
    let server = common::spawn().await;

    let created = server
        .client
        .create_ticket(&CreateInput {
            name: "Printer broken".into(),
            description: "Tray 2 jams".into(),
            status: true,
        })
        .await
        .unwrap();
    let ticket = server.client.ticket_by_id(created.id).await.unwrap();

    assert_eq!(ticket, Some(created));
}

#[tokio::test]
async fn missing_ticket_is_empty_object() {
    let server = common::spawn().await;

    let ticket = server.client.ticket_by_id(Id::from(404)).await.unwrap();
    assert_eq!(ticket, None);

    let (status, body) = server
        .get(&[
            ("method", "ticketById"),
            ("id", "00000000-0000-0000-0000-000000000404"),
        ])
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "{}");
}

#[tokio::test]
async fn malformed_or_missing_id_is_empty_object() {
    let server = common::spawn().await;

    let (status, body) =
        server.get(&[("method", "ticketById"), ("id", "1")]).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "{}");

    let (status, body) = server.get(&[("method", "ticketById")]).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "{}");
}

#[tokio::test]
async fn deleted_ticket_is_gone() {
    let server = common::spawn().await;

    let ticket = server
        .client
        .create_ticket(&CreateInput {
            name: "Printer broken".into(),
            ..CreateInput::default()
        })
        .await
        .unwrap();
    server.client.delete_ticket(ticket.id).await.unwrap();

    assert_eq!(server.client.ticket_by_id(ticket.id).await.unwrap(), None);
}
