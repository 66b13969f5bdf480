//! Tests for the turn-taking loop: termination, budgets, and cancellation.

use crate::agent::adapters::ScriptedUserInput;
use crate::agent::domain::AgentConfig;
use crate::agent::error::AgentError;
use crate::agent::services::ChatAgent;
use crate::chat::domain::Role;
use crate::llm::adapters::{MockLm, MockLmConfig};
use crate::llm::error::LlmError;
use crate::task::domain::{RunOutcome, TaskSettings};
use crate::task::error::TaskError;
use crate::task::services::Task;
use crate::tool::domain::{ParameterKind, ToolParameter, ToolSchema};
use crate::tool::ports::{ToolHandlerError, ToolHandlerResult};
use mockable::DefaultClock;
use rstest::rstest;
use serde_json::{Map, Value};
use std::sync::Arc;

fn solver_with_llm(llm: MockLm) -> ChatAgent<DefaultClock> {
    ChatAgent::new(AgentConfig::new("solver"), Arc::new(DefaultClock)).with_llm(Arc::new(llm))
}

#[rstest]
#[tokio::test]
async fn single_round_returns_the_first_reply() {
    let agent = solver_with_llm(MockLm::fixed("42"));
    let mut task = Task::new("root", agent, TaskSettings::new().with_single_round(true));

    let outcome = task.run("meaning of life?").await.expect("run");
    assert_eq!(outcome.content(), Some("42"));
}

#[rstest]
#[tokio::test]
async fn task_without_responders_declines_immediately() {
    let settings = TaskSettings::new();
    let mut bare = Task::without_agent("bare", settings, Arc::new(DefaultClock));
    assert_eq!(bare.run("anyone?").await.expect("run"), RunOutcome::NoAnswer);

    let incapable =
        ChatAgent::new(AgentConfig::new("mute"), Arc::new(DefaultClock));
    let mut task = Task::new("mute", incapable, settings);
    assert_eq!(task.run("anyone?").await.expect("run"), RunOutcome::NoAnswer);
}

#[rstest]
#[tokio::test]
async fn multi_turn_completes_on_done_invocation() {
    let mut agent = solver_with_llm(MockLm::fixed(
        r#"{"request": "task_done", "result": "all wrapped up"}"#,
    ));
    agent.enable_done_tool().expect("enable done tool");
    let mut task = Task::new("root", agent, TaskSettings::new());

    let outcome = task.run("finish up").await.expect("run");
    let message = outcome.into_completed().expect("completed");
    assert_eq!(message.content(), "all wrapped up");
}

#[rstest]
#[tokio::test]
async fn invalid_invocations_loop_as_feedback_until_budget_runs_out() {
    let mut agent = solver_with_llm(MockLm::fixed(
        r#"{"request": "multiplier_tool", "a": "not a number", "b": 2}"#,
    ));
    let schema = ToolSchema::new("multiplier_tool", "Calculate the product of two numbers")
        .expect("valid schema")
        .with_parameter(ToolParameter::required("a", ParameterKind::Integer))
        .with_parameter(ToolParameter::required("b", ParameterKind::Integer));
    fn multiply(_arguments: &Map<String, Value>) -> ToolHandlerResult {
        Err(ToolHandlerError::new(
            "validation rejects the arguments before the handler runs",
        ))
    }
    agent.enable_tool(schema, Arc::new(multiply)).expect("enable tool");
    let mut task = Task::new("root", agent, TaskSettings::new().with_max_turns(6));

    let outcome = task.run("multiply things").await.expect("run");
    let RunOutcome::Exhausted(pending) = outcome else {
        panic!("expected exhaustion, got {outcome:?}");
    };
    // The last turn produced either the model's retry or the feedback message.
    assert!(pending.is_some());
}

#[rstest]
#[tokio::test]
async fn zero_turn_budget_is_exhaustion_not_an_error() {
    let agent = solver_with_llm(MockLm::fixed("never consulted"));
    let mut task = Task::new("root", agent, TaskSettings::new().with_max_turns(0));

    let outcome = task.run("hello").await.expect("run");
    let RunOutcome::Exhausted(pending) = outcome else {
        panic!("expected exhaustion, got {outcome:?}");
    };
    assert_eq!(pending.expect("initial message").content(), "hello");
}

#[rstest]
#[tokio::test]
async fn operator_quit_token_cancels_the_run() {
    let agent =
        ChatAgent::new(AgentConfig::new("operator"), Arc::new(DefaultClock))
            .with_user_input(Arc::new(ScriptedUserInput::new(["q"])));
    let mut task = Task::new(
        "root",
        agent,
        TaskSettings::new().with_interactive(true),
    );

    let outcome = task.run("keep going?").await.expect("run");
    assert_eq!(outcome, RunOutcome::Cancelled);
}

#[rstest]
#[tokio::test]
async fn unprompted_single_round_takes_opener_plus_reply() {
    let agent =
        ChatAgent::new(AgentConfig::new("operator"), Arc::new(DefaultClock))
            .with_user_input(Arc::new(ScriptedUserInput::new(["what is 6 times 7?"])))
            .with_llm(Arc::new(MockLm::fixed("42")));
    let mut task = Task::new(
        "root",
        agent,
        TaskSettings::new()
            .with_interactive(true)
            .with_single_round(true),
    );

    let outcome = task.run_unprompted().await.expect("run");
    let message = outcome.into_completed().expect("completed");
    assert_eq!(message.role(), Role::Assistant);
    assert_eq!(message.content(), "42");
}

#[rstest]
#[tokio::test]
async fn provider_failure_propagates_unmasked() {
    let failing = MockLm::new(MockLmConfig::new().with_failure(LlmError::provider("boom")));
    let mut task = Task::new(
        "root",
        solver_with_llm(failing),
        TaskSettings::new().with_single_round(true),
    );

    let error = task.run("hello").await.unwrap_err();
    assert_eq!(
        error,
        TaskError::Agent(AgentError::Llm(LlmError::provider("boom")))
    );
}
