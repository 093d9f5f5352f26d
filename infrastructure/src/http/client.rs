//! reqwest-based [`AnswerService`] implementation

use super::error::HttpError;
use async_trait::async_trait;
use edubot_application::{AnswerService, ServiceError};
use edubot_domain::{Answer, FeedbackSubmission, SessionId};
use edubot_domain::util::preview;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

const QUESTIONS_PATH: &str = "/api/questions/";
const FEEDBACK_PATH: &str = "/api/feedback/";

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Serialize)]
struct QuestionRequest<'a> {
    session_id: &'a SessionId,
    question: &'a str,
}

/// Answer service reached over JSON/HTTP
#[derive(Debug, Clone)]
pub struct HttpAnswerService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAnswerService {
    pub fn new(base_url: impl Into<String>) -> Result<Self, HttpError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self, HttpError> {
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();

        let parsed = reqwest::Url::parse(&base_url).map_err(|e| HttpError::InvalidBaseUrl {
            url: base_url.clone(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(HttpError::InvalidBaseUrl {
                url: base_url,
                reason: "scheme must be http or https".to_string(),
            });
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("edubot/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl AnswerService for HttpAnswerService {
    async fn ask(&self, session_id: &SessionId, question: &str) -> Result<Answer, ServiceError> {
        let url = self.endpoint(QUESTIONS_PATH);
        debug!("PUT {} ({})", url, preview(question, 60));

        let response = self
            .client
            .put(&url)
            .json(&QuestionRequest {
                session_id,
                question,
            })
            .send()
            .await
            .map_err(transport_error)?;

        let response = check_status(response)?;

        response
            .json::<Answer>()
            .await
            .map_err(|e| ServiceError::InvalidResponse(e.to_string()))
    }

    async fn send_feedback(&self, submission: &FeedbackSubmission) -> Result<(), ServiceError> {
        let url = self.endpoint(FEEDBACK_PATH);
        debug!("POST {} (question {})", url, submission.question);

        let response = self
            .client
            .post(&url)
            .json(submission)
            .send()
            .await
            .map_err(transport_error)?;

        check_status(response).map(|_| ())
    }
}

fn transport_error(e: reqwest::Error) -> ServiceError {
    if e.is_timeout() {
        ServiceError::Transport("request timed out".to_string())
    } else {
        ServiceError::Transport(e.to_string())
    }
}

fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ServiceError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ServiceError::Status {
            code: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use edubot_domain::{QuestionId, Vote};
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_rejects_invalid_base_url() {
        assert!(matches!(
            HttpAnswerService::new("not a url"),
            Err(HttpError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            HttpAnswerService::new("ftp://example.org"),
            Err(HttpError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let service = HttpAnswerService::new("http://localhost:8000/").unwrap();
        assert_eq!(service.base_url(), "http://localhost:8000");
        assert_eq!(
            service.endpoint(QUESTIONS_PATH),
            "http://localhost:8000/api/questions/"
        );
    }

    #[tokio::test]
    async fn test_ask_sends_put_with_session_and_question() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/questions/"))
            .and(body_json(json!({
                "session_id": "session-1",
                "question": "What is the course schedule?"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "answer": "Monday to Friday, 9am-5pm.",
                "question_id": 42
            })))
            .expect(1)
            .mount(&server)
            .await;

        let service = HttpAnswerService::new(server.uri()).unwrap();
        let answer = service
            .ask(
                &SessionId::from_string("session-1"),
                "What is the course schedule?",
            )
            .await
            .unwrap();

        assert_eq!(answer.text, "Monday to Friday, 9am-5pm.");
        assert_eq!(answer.question_id, QuestionId::new(42));
    }

    #[tokio::test]
    async fn test_ask_server_error_maps_to_status() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/questions/"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let service = HttpAnswerService::new(server.uri()).unwrap();
        let err = service
            .ask(&SessionId::generate(), "hello")
            .await
            .unwrap_err();

        assert_eq!(
            err,
            ServiceError::Status {
                code: 500,
                reason: "Internal Server Error".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_ask_malformed_body_is_invalid_response() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/questions/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"reply": "hi"})))
            .mount(&server)
            .await;

        let service = HttpAnswerService::new(server.uri()).unwrap();
        let err = service
            .ask(&SessionId::generate(), "hello")
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_ask_unreachable_server_is_transport_error() {
        let service = HttpAnswerService::new("http://127.0.0.1:1").unwrap();
        let err = service
            .ask(&SessionId::generate(), "hello")
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Transport(_)));
    }

    #[tokio::test]
    async fn test_feedback_posts_payload() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/feedback/"))
            .and(body_json(json!({
                "question": 42,
                "answer": "Monday to Friday, 9am-5pm.",
                "feedback": false
            })))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;

        let service = HttpAnswerService::new(server.uri()).unwrap();
        let submission = FeedbackSubmission::new(
            QuestionId::new(42),
            "Monday to Friday, 9am-5pm.",
            Vote::ThumbsDown,
        );

        service.send_feedback(&submission).await.unwrap();
    }

    #[tokio::test]
    async fn test_feedback_rejected_maps_to_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/feedback/"))
            .respond_with(ResponseTemplate::new(400))
            .mount(&server)
            .await;

        let service = HttpAnswerService::new(server.uri()).unwrap();
        let submission =
            FeedbackSubmission::new(QuestionId::new(1), "answer", Vote::ThumbsDown);

        let err = service.send_feedback(&submission).await.unwrap_err();
        assert!(matches!(err, ServiceError::Status { code: 400, .. }));
    }
}
