//! Analysis client: one prompt in, one model response out, with rate-limit retries

use crate::error::{Result, ResumeAnalyzerError};
use crate::llm::client::{GenerativeModel, ModelError};
use crate::llm::retry::{retry_with_backoff, RetryError, RetryPolicy};
use log::{debug, error};
use std::time::Instant;

pub struct AnalysisClient {
    model: Box<dyn GenerativeModel>,
    policy: RetryPolicy,
}

impl AnalysisClient {
    pub fn new(model: Box<dyn GenerativeModel>, policy: RetryPolicy) -> Self {
        Self { model, policy }
    }

    pub fn model_name(&self) -> &str {
        self.model.model_name()
    }

    /// Send `prompt` and return the response text verbatim.
    ///
    /// Rate-limited calls are retried per the policy; any other model error is
    /// returned at once.
    pub async fn analyze(&self, prompt: &str) -> Result<String> {
        let start_time = Instant::now();
        let policy = self.policy;

        let result = retry_with_backoff(
            policy.max_attempts,
            |attempt| policy.backoff(attempt),
            ModelError::is_rate_limited,
            || self.model.generate(prompt),
        )
        .await;

        match result {
            Ok(text) => {
                debug!(
                    "{} responded with {} chars in {}ms",
                    self.model.model_name(),
                    text.len(),
                    start_time.elapsed().as_millis()
                );
                Ok(text)
            }
            Err(RetryError::Fatal(e)) => {
                error!("Error in API processing: {}", e);
                Err(ResumeAnalyzerError::Model(e))
            }
            Err(RetryError::Exhausted { attempts, last }) => {
                error!("API rate limit exceeded after {} attempts: {}", attempts, last);
                Err(ResumeAnalyzerError::RateLimitExhausted { attempts })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    /// Replays scripted responses; counts calls.
    struct ScriptedModel {
        responses: Mutex<VecDeque<std::result::Result<String, ModelError>>>,
        calls: Mutex<u32>,
    }

    impl ScriptedModel {
        fn new(responses: Vec<std::result::Result<String, ModelError>>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
                calls: Mutex::new(0),
            }
        }
    }

    #[async_trait]
    impl GenerativeModel for Arc<ScriptedModel> {
        async fn generate(&self, _prompt: &str) -> std::result::Result<String, ModelError> {
            *self.calls.lock().unwrap() += 1;
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(ModelError::InvalidResponse("script exhausted".into())))
        }

        fn model_name(&self) -> &str {
            "scripted"
        }
    }

    fn rate_limited() -> std::result::Result<String, ModelError> {
        Err(ModelError::RateLimited {
            message: "Resource has been exhausted".into(),
        })
    }

    fn client(model: &Arc<ScriptedModel>) -> AnalysisClient {
        AnalysisClient::new(Box::new(model.clone()), RetryPolicy::default())
    }

    #[tokio::test(start_paused = true)]
    async fn test_retries_rate_limit_then_succeeds() {
        let model = Arc::new(ScriptedModel::new(vec![
            rate_limited(),
            rate_limited(),
            Ok("summary text".into()),
        ]));
        let started = tokio::time::Instant::now();

        let text = client(&model).analyze("prompt").await.unwrap();

        assert_eq!(text, "summary text");
        assert_eq!(*model.calls.lock().unwrap(), 3);
        // waits of 2 and 3 units
        assert_eq!(started.elapsed(), Duration::from_secs(5));
    }

    #[tokio::test(start_paused = true)]
    async fn test_exhaustion_reports_attempts() {
        let model = Arc::new(ScriptedModel::new(vec![
            rate_limited(),
            rate_limited(),
            rate_limited(),
            Ok("never reached".into()),
        ]));

        let err = client(&model).analyze("prompt").await.unwrap_err();

        assert!(matches!(err, ResumeAnalyzerError::RateLimitExhausted { attempts: 3 }));
        assert_eq!(*model.calls.lock().unwrap(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_non_rate_limit_error_is_fatal() {
        let model = Arc::new(ScriptedModel::new(vec![
            Err(ModelError::Api {
                status: 400,
                message: "API key not valid.".into(),
            }),
            Ok("never reached".into()),
        ]));
        let started = tokio::time::Instant::now();

        let err = client(&model).analyze("prompt").await.unwrap_err();

        assert!(matches!(err, ResumeAnalyzerError::Model(ModelError::Api { status: 400, .. })));
        assert_eq!(*model.calls.lock().unwrap(), 1);
        assert_eq!(started.elapsed(), Duration::ZERO);
    }

    #[tokio::test]
    async fn test_empty_response_is_valid() {
        let model = Arc::new(ScriptedModel::new(vec![Ok(String::new())]));
        assert_eq!(client(&model).analyze("prompt").await.unwrap(), "");
    }
}
