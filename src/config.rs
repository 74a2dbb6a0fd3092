use std::net;

use serde::Deserialize;

#[derive(Deserialize)]
pub struct Config {
    pub http: Http,
    #[serde(default)]
    pub store: Store,
}

#[derive(Deserialize)]
pub struct Http {
    pub server: Server,
    pub cors: Cors,
}

#[derive(Deserialize)]
pub struct Server {
    pub addr: net::SocketAddr,
}

#[derive(Deserialize)]
pub struct Cors {
    /// `"*"` allows any origin.
    pub allowed_origins: Vec<String>,
}

impl Cors {
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == "*")
    }
}

#[derive(Default, Deserialize)]
pub struct Store {
    /// Start with the demonstration tickets instead of an empty store.
    #[serde(default)]
    pub seed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_shipped_config() {
        let config =
            toml::from_str::<Config>(include_str!("../config.toml")).unwrap();
        assert_eq!(config.http.server.addr.port(), 7070);
        assert!(config.http.cors.allows_any_origin());
        assert!(config.store.seed);
    }

    #[test]
    fn store_section_is_optional() {
        let config = toml::from_str::<Config>(
            r#"
            [http.server]
            addr = "127.0.0.1:8080"

            [http.cors]
            allowed_origins = ["http://localhost:8080"]
            "#,
        )
        .unwrap();
        assert!(!config.http.cors.allows_any_origin());
        assert!(!config.store.seed);
    }
}
