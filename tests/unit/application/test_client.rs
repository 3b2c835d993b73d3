use marketo_client::application::client::Client;
use marketo_client::application::config::{Config, Credentials};
use marketo_client::error::AppError;

#[test]
fn client_construction_validates_config() {
    let config = Config::with_credentials(
        "http://127.0.0.1:9",
        Credentials::new("example_id", "", "example_munchkin_id"),
    );
    match Client::new(config) {
        Err(AppError::InvalidInput(msg)) => assert!(msg.contains("client_secret")),
        Err(other) => panic!("Unexpected error: {other:?}"),
        Ok(_) => panic!("client should not be created without a secret"),
    }
}

#[test]
fn client_construction_sends_nothing() {
    // Port 9 (discard) is never contacted: the token is acquired lazily
    let config = Config::with_credentials(
        "http://127.0.0.1:9",
        Credentials::new("example_id", "example_secret", "example_munchkin_id"),
    );
    let client = Client::new(config).expect("valid configuration");
    assert_eq!(client.config().credentials.client_id, "example_id");
    assert!(tokio_test::block_on(client.auth().cached_token()).is_none());
}
