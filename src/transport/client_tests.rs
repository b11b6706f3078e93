//! Tests for `ReqwestTransport`.
//!
//! Only construction and connection failures are covered here; exchanges
//! with the provider are exercised through mock transports in the client tests.

use super::*;

mod reqwest_transport {
    use super::*;

    #[test]
    fn new_and_default_construct() {
        let _ = format!("{:?}", ReqwestTransport::new());
        let _ = format!("{:?}", ReqwestTransport::default());
    }

    #[test]
    fn from_client_accepts_custom_client() {
        let custom = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap();
        let transport = ReqwestTransport::from_client(custom);

        assert!(format!("{transport:?}").contains("ReqwestTransport"));
    }

    #[test]
    fn transport_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ReqwestTransport>();
    }

    #[tokio::test]
    async fn unreachable_host_returns_error_or_proxy_response() {
        let transport = ReqwestTransport::new();
        let url = url::Url::parse("http://invalid.invalid.invalid/v1/transactions/x").unwrap();

        let result = transport.send(ApiRequest::get(url)).await;

        // A proxy in the environment may answer with an error status instead.
        match result {
            Err(TransportError::Connection(_) | TransportError::Timeout) => {}
            Ok(resp) if !resp.is_ok() => {}
            other => panic!("Expected connection error or proxy error response, got {other:?}"),
        }
    }
}
