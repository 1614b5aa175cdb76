use std::time::Duration;

use menubot::api_client::ChatApiClient;
use menubot::config::{Config, HttpConfig};
use menubot::errors::BotError;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(chat_api: &MockServer, http: HttpConfig) -> Config {
        Config {
            bot_token: "TEST".to_string(),
            api_root: chat_api.uri(),
            menu_service_url: "http://menu.invalid".to_string(),
            login_service_url: "http://login.invalid".to_string(),
            upload_service_url: "http://upload.invalid".to_string(),
            login_authorization_url: "https://auth.example.com/authorize?client_id=abc"
                .to_string(),
            bind_address: "127.0.0.1:0".to_string(),
            http,
        }
    }

    /// A transport-level failure (request timeout) is retried up to the
    /// configured bound, then surfaces as a transport error
    #[tokio::test]
    async fn test_transport_failure_retries_bounded() {
        let chat_api = MockServer::start().await;

        // Respond slower than the client timeout so every attempt expires
        Mock::given(method("GET"))
            .and(path("/botTEST/sendMessage"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(r#"{"ok":true}"#)
                    .set_delay(Duration::from_secs(5)),
            )
            .mount(&chat_api)
            .await;

        let config = test_config(
            &chat_api,
            HttpConfig {
                timeout_secs: 1,
                max_retries: 2,
                retry_delay_ms: 100,
            },
        );
        let client = ChatApiClient::new(&config).unwrap();

        let result = client.send_message("1", "hello", None).await;
        assert!(matches!(result, Err(BotError::Transport(_))));

        // Initial attempt plus two retries
        let requests = chat_api.received_requests().await.unwrap();
        assert_eq!(requests.len(), 3);
    }

    /// A non-2xx status is not retried: the platform saw the request
    #[tokio::test]
    async fn test_non_2xx_is_not_retried() {
        let chat_api = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/botTEST/sendMessage"))
            .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
            .mount(&chat_api)
            .await;

        let config = test_config(
            &chat_api,
            HttpConfig {
                timeout_secs: 2,
                max_retries: 2,
                retry_delay_ms: 100,
            },
        );
        let client = ChatApiClient::new(&config).unwrap();

        let result = client.send_message("1", "hello", None).await;
        assert!(matches!(
            result,
            Err(BotError::ChatApi {
                method: "sendMessage",
                status: 500,
            })
        ));

        let requests = chat_api.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
    }

    /// A transient transport failure followed by success resolves without
    /// surfacing an error
    #[tokio::test]
    async fn test_retry_recovers_after_transient_failure() {
        let chat_api = MockServer::start().await;

        // First attempt expires, the mounted-later mock then answers fast
        Mock::given(method("GET"))
            .and(path("/botTEST/sendMessage"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(r#"{"ok":true}"#)
                    .set_delay(Duration::from_secs(5)),
            )
            .up_to_n_times(1)
            .mount(&chat_api)
            .await;
        Mock::given(method("GET"))
            .and(path("/botTEST/sendMessage"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"ok":true}"#))
            .mount(&chat_api)
            .await;

        let config = test_config(
            &chat_api,
            HttpConfig {
                timeout_secs: 1,
                max_retries: 2,
                retry_delay_ms: 100,
            },
        );
        let client = ChatApiClient::new(&config).unwrap();

        let result = client.send_message("1", "hello", None).await;
        assert!(result.is_ok());

        let requests = chat_api.received_requests().await.unwrap();
        assert_eq!(requests.len(), 2);
    }
}
