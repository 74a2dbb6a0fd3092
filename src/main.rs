use std::{error::Error, sync::Arc};

use axum::http::{header::CONTENT_TYPE, HeaderValue, Method};
use tokio::{fs, net};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{
    layer::SubscriberExt as _, util::SubscriberInitExt as _,
};

use helpdesk::{dispatch, Config, Store};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = fs::read_to_string("config.toml").await?;
    let config = toml::from_str::<Config>(&config)?;

    let store = if config.store.seed {
        Store::seeded()
    } else {
        Store::new()
    };

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);
    let cors = if config.http.cors.allows_any_origin() {
        cors.allow_origin(Any)
    } else {
        let origins = config
            .http
            .cors
            .allowed_origins
            .iter()
            .map(|origin| origin.parse::<HeaderValue>())
            .collect::<Result<Vec<_>, _>>()?;
        cors.allow_origin(origins)
    };

    let app = dispatch::router(Arc::new(store))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let listener = net::TcpListener::bind(config.http.server.addr).await?;
    tracing::info!(addr = %config.http.server.addr, "helpdesk listening");
    axum::serve(listener, app).await?;

    Ok(())
}
