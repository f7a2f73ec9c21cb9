use std::future::Future;
use std::time::Duration;

use ecolearn_quiz::SubmissionClient;
use ecolearn_types::{
    AnswerMap, ChallengeId, ChallengeOutcome, LessonId, QuizOutcome, TransportError,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::ClientConfig;

/// Default request timeout. A stalled submission must not leave the UI
/// stuck with a disabled submit control forever.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the EcoLearn server endpoints.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the server at `base_url` with the default
    /// request timeout.
    pub fn new(base_url: impl Into<String>) -> Result<Self, TransportError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a client with an explicit request timeout.
    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(TransportError::request)?;
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Ok(Self { http, base_url })
    }

    /// Create a client from environment configuration.
    pub fn from_config(config: &ClientConfig) -> Result<Self, TransportError> {
        Self::with_timeout(config.base_url.clone(), config.timeout)
    }

    /// Submit a completed quiz: `POST /submit_quiz/<lesson>`.
    pub async fn submit_quiz(
        &self,
        lesson: LessonId,
        answers: &AnswerMap,
    ) -> Result<QuizOutcome, TransportError> {
        let url = format!("{}/submit_quiz/{lesson}", self.base_url);
        debug!(%url, answers = answers.len(), "submitting quiz");
        let response = self
            .http
            .post(&url)
            .json(&SubmitRequest { answers })
            .send()
            .await
            .map_err(TransportError::request)?;
        let wire: SubmitWire = read_json(&url, response).await?;
        decode_submission(wire)
    }

    /// Join a challenge: `GET /join_challenge/<challenge>`.
    pub async fn join_challenge(
        &self,
        challenge: ChallengeId,
    ) -> Result<ChallengeOutcome, TransportError> {
        let url = format!("{}/join_challenge/{challenge}", self.base_url);
        debug!(%url, "joining challenge");
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(TransportError::request)?;
        let wire: ChallengeWire = read_json(&url, response).await?;
        decode_challenge(wire)
    }

    /// Mark a challenge completed: `POST /complete_challenge/<challenge>`.
    pub async fn complete_challenge(
        &self,
        challenge: ChallengeId,
    ) -> Result<ChallengeOutcome, TransportError> {
        let url = format!("{}/complete_challenge/{challenge}", self.base_url);
        debug!(%url, "completing challenge");
        let response = self
            .http
            .post(&url)
            .send()
            .await
            .map_err(TransportError::request)?;
        let wire: ChallengeWire = read_json(&url, response).await?;
        decode_challenge(wire)
    }
}

impl SubmissionClient for ApiClient {
    fn submit(
        &self,
        lesson: LessonId,
        answers: &AnswerMap,
    ) -> impl Future<Output = Result<QuizOutcome, TransportError>> {
        self.submit_quiz(lesson, answers)
    }
}

async fn read_json<T: for<'de> Deserialize<'de>>(
    url: &str,
    response: reqwest::Response,
) -> Result<T, TransportError> {
    let status = response.status();
    if !status.is_success() {
        error!(%url, %status, "server returned an error status");
        return Err(TransportError::Status(status.as_u16()));
    }
    response
        .json()
        .await
        .map_err(|err| TransportError::MalformedResponse(err.to_string()))
}

#[derive(Serialize)]
struct SubmitRequest<'a> {
    answers: &'a AnswerMap,
}

/// Exactly the fields the server may send back for a submission.
#[derive(Debug, Deserialize)]
struct SubmitWire {
    success: bool,
    #[serde(default)]
    score: Option<u32>,
    #[serde(default)]
    total: Option<u32>,
    #[serde(default)]
    points_earned: Option<u32>,
    #[serde(default)]
    message: Option<String>,
}

fn decode_submission(wire: SubmitWire) -> Result<QuizOutcome, TransportError> {
    if !wire.success {
        return Err(TransportError::Rejected {
            message: wire.message,
        });
    }
    match (wire.score, wire.total, wire.points_earned) {
        (Some(score), Some(total), Some(points_earned)) => {
            Ok(QuizOutcome::new(score, total, points_earned))
        }
        _ => Err(TransportError::MalformedResponse(
            "success response missing score, total or points_earned".into(),
        )),
    }
}

#[derive(Debug, Deserialize)]
struct ChallengeWire {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    points_earned: Option<u32>,
}

fn decode_challenge(wire: ChallengeWire) -> Result<ChallengeOutcome, TransportError> {
    if !wire.success {
        return Err(TransportError::Rejected {
            message: wire.message,
        });
    }
    let message = wire.message.ok_or_else(|| {
        TransportError::MalformedResponse("success response missing message".into())
    })?;
    Ok(ChallengeOutcome::new(message, wire.points_earned))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_shape() {
        let mut answers = AnswerMap::new();
        answers.insert("q1", "b");
        let body = serde_json::to_value(SubmitRequest { answers: &answers }).unwrap();
        assert_eq!(body, serde_json::json!({ "answers": { "q1": "b" } }));
    }

    #[test]
    fn decodes_a_confirmed_submission() {
        let wire: SubmitWire = serde_json::from_str(
            r#"{"success": true, "score": 1, "total": 2, "points_earned": 10}"#,
        )
        .unwrap();
        let outcome = decode_submission(wire).unwrap();
        assert_eq!(outcome, QuizOutcome::new(1, 2, 10));
    }

    #[test]
    fn rejected_submission_carries_the_server_message() {
        let wire: SubmitWire =
            serde_json::from_str(r#"{"success": false, "message": "Please login"}"#).unwrap();
        match decode_submission(wire) {
            Err(TransportError::Rejected { message }) => {
                assert_eq!(message.as_deref(), Some("Please login"));
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn success_with_missing_fields_is_malformed() {
        let wire: SubmitWire =
            serde_json::from_str(r#"{"success": true, "score": 1}"#).unwrap();
        assert!(matches!(
            decode_submission(wire),
            Err(TransportError::MalformedResponse(_))
        ));
    }

    #[test]
    fn decodes_challenge_outcomes() {
        let joined: ChallengeWire = serde_json::from_str(
            r#"{"success": true, "message": "Challenge joined successfully!"}"#,
        )
        .unwrap();
        let joined = decode_challenge(joined).unwrap();
        assert_eq!(joined.message(), "Challenge joined successfully!");
        assert_eq!(joined.points_earned(), None);

        let completed: ChallengeWire = serde_json::from_str(
            r#"{"success": true, "message": "Challenge completed!", "points_earned": 90}"#,
        )
        .unwrap();
        let completed = decode_challenge(completed).unwrap();
        assert_eq!(completed.points_earned(), Some(90));
    }

    #[test]
    fn challenge_rejection_and_malformed_body() {
        let rejected: ChallengeWire =
            serde_json::from_str(r#"{"success": false, "message": "Already joined this challenge"}"#)
                .unwrap();
        assert!(matches!(
            decode_challenge(rejected),
            Err(TransportError::Rejected { .. })
        ));

        let missing: ChallengeWire = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(matches!(
            decode_challenge(missing),
            Err(TransportError::MalformedResponse(_))
        ));
    }

    #[test]
    fn trailing_slashes_are_trimmed_from_the_base_url() {
        let client = ApiClient::new("http://localhost:5000/").unwrap();
        assert_eq!(client.base_url, "http://localhost:5000");
    }
}
