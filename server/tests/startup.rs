use config::{ProviderConfig, KHALTI_SECRET_VAR};
use storefront_server::create_gateway;

fn provider(kind: &str) -> ProviderConfig {
    ProviderConfig {
        kind: kind.to_string(),
        ..Default::default()
    }
}

// The only test in this binary touching KHALTI_SECRET_KEY.
#[test]
fn khalti_gateway_needs_the_secret_at_startup() {
    std::env::remove_var(KHALTI_SECRET_VAR);
    let err = create_gateway(&provider("khalti")).err().unwrap();
    let message = format!("{err:#}");
    assert!(message.contains("no secret key is available"), "{message}");
    assert!(message.contains(KHALTI_SECRET_VAR), "{message}");

    std::env::set_var(KHALTI_SECRET_VAR, "test_secret_key_123");
    assert!(create_gateway(&provider("khalti")).is_ok());
    std::env::remove_var(KHALTI_SECRET_VAR);
}

#[test]
fn unknown_provider_is_refused() {
    let err = create_gateway(&provider("paypal")).err().unwrap();
    assert_eq!(err.to_string(), "Unknown payment provider: paypal");
}

#[tokio::test]
async fn mock_provider_needs_no_secret() {
    let gateway = create_gateway(&provider("mock")).unwrap();
    let reply = gateway.lookup("abc").await.unwrap();
    assert_eq!(reply.body["status"], "Completed");
}
