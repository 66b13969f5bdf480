//! Behaviour tests for the mock language-model adapter.

use crate::chat::domain::ChatMessage;
use crate::llm::adapters::{MockLm, MockLmConfig};
use crate::llm::error::LlmError;
use crate::llm::ports::LanguageModel;
use mockable::DefaultClock;
use rstest::rstest;

const MAX_TOKENS: u32 = 64;

fn pending(content: &str) -> Vec<ChatMessage> {
    vec![ChatMessage::user(content, &DefaultClock)]
}

#[rstest]
#[tokio::test]
async fn default_response_is_used_when_nothing_matches() {
    let lm = MockLm::fixed("fallback");

    let response = lm.chat(&pending("anything"), MAX_TOKENS).await.expect("mock chat");
    assert_eq!(response.message(), "fallback");
    assert!(response.usage().is_some());
}

#[rstest]
#[tokio::test]
async fn response_map_matches_exact_input() {
    let lm = MockLm::new(
        MockLmConfig::new()
            .with_default_response("fallback")
            .with_mapping("3", "10"),
    );

    let mapped = lm.chat(&pending("3"), MAX_TOKENS).await.expect("mock chat");
    assert_eq!(mapped.message(), "10");

    let unmapped = lm.chat(&pending("4"), MAX_TOKENS).await.expect("mock chat");
    assert_eq!(unmapped.message(), "fallback");
}

#[rstest]
#[tokio::test]
async fn response_fn_takes_priority_and_may_decline() {
    let lm = MockLm::new(
        MockLmConfig::new()
            .with_default_response("fallback")
            .with_response_fn(|input| {
                let n: i64 = input.trim().parse().ok()?;
                (n % 2 == 1).then(|| (3 * n + 1).to_string())
            }),
    );

    let odd = lm.chat(&pending("3"), MAX_TOKENS).await.expect("mock chat");
    assert_eq!(odd.message(), "10");

    let even = lm.chat(&pending("4"), MAX_TOKENS).await.expect("mock chat");
    assert!(even.is_empty(), "declined input should yield an empty reply");
}

#[rstest]
#[tokio::test]
async fn empty_configuration_declines_everything() {
    let lm = MockLm::new(MockLmConfig::new());

    let response = lm.chat(&pending("hello"), MAX_TOKENS).await.expect("mock chat");
    assert!(response.is_empty());
}

#[rstest]
#[tokio::test]
async fn configured_failure_propagates_unmasked() {
    let lm = MockLm::new(MockLmConfig::new().with_failure(LlmError::RateLimited));

    let result = lm.chat(&pending("hello"), MAX_TOKENS).await;
    assert_eq!(result, Err(LlmError::RateLimited));
}
