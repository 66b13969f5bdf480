//! Tests for sub-task registration and depth-first delegation.

use crate::agent::domain::AgentConfig;
use crate::agent::services::ChatAgent;
use crate::llm::adapters::MockLm;
use crate::task::domain::TaskSettings;
use crate::task::error::TaskError;
use crate::task::services::Task;
use mockable::DefaultClock;
use rstest::rstest;
use std::sync::Arc;

type TestTask = Task<DefaultClock>;

fn answering_task(name: &str, reply: &str) -> TestTask {
    let agent = ChatAgent::new(AgentConfig::new(name), Arc::new(DefaultClock))
        .with_llm(Arc::new(MockLm::fixed(reply)));
    Task::new(name, agent, TaskSettings::new().with_single_round(true))
}

fn declining_task(name: &str) -> TestTask {
    let agent = ChatAgent::new(AgentConfig::new(name), Arc::new(DefaultClock));
    Task::new(name, agent, TaskSettings::new().with_single_round(true))
}

fn delegating_parent(name: &str) -> TestTask {
    Task::without_agent(
        name,
        TaskSettings::new().with_single_round(true),
        Arc::new(DefaultClock),
    )
}

#[rstest]
#[tokio::test]
async fn self_registration_violates_the_forest_invariant() {
    let shared = declining_task("loner").into_shared();
    let error = shared
        .lock()
        .await
        .add_sub_task(&shared)
        .expect_err("self-delegation must be rejected");
    assert_eq!(error, TaskError::SelfDelegation(shared.id()));
}

#[rstest]
#[tokio::test]
async fn re_registration_is_idempotent() {
    let child = declining_task("child").into_shared();
    let mut parent = delegating_parent("parent");

    parent.add_sub_task(&child).expect("first registration");
    parent.add_sub_task(&child).expect("second registration");
    assert_eq!(parent.sub_task_ids(), vec![child.id()]);
}

#[rstest]
#[tokio::test]
async fn delegation_tries_sub_tasks_in_registration_order() {
    let mut parent = delegating_parent("parent");
    parent
        .add_sub_task(&declining_task("first").into_shared())
        .expect("register first");
    parent
        .add_sub_task(&answering_task("second", "from-second").into_shared())
        .expect("register second");

    let outcome = parent.run("who answers?").await.expect("run");
    assert_eq!(outcome.content(), Some("from-second"));
}

#[rstest]
#[tokio::test]
async fn earlier_sub_task_wins_over_later_ones() {
    let mut parent = delegating_parent("parent");
    parent
        .add_sub_task(&answering_task("alpha", "alpha says").into_shared())
        .expect("register alpha");
    parent
        .add_sub_task(&answering_task("beta", "beta says").into_shared())
        .expect("register beta");

    let outcome = parent.run("who answers?").await.expect("run");
    assert_eq!(outcome.content(), Some("alpha says"));
}

#[rstest]
#[tokio::test]
async fn delegation_recurses_depth_first() {
    let grandchild = answering_task("grandchild", "from the deep").into_shared();
    let child = delegating_parent("child").into_shared();
    child
        .lock()
        .await
        .add_sub_task(&grandchild)
        .expect("register grandchild");
    let mut root = delegating_parent("root");
    root.add_sub_task(&child).expect("register child");

    let outcome = root.run("anyone down there?").await.expect("run");
    assert_eq!(outcome.content(), Some("from the deep"));
}

#[rstest]
#[tokio::test]
async fn mutual_delegation_declines_instead_of_deadlocking() {
    let first = delegating_parent("first").into_shared();
    let second = delegating_parent("second").into_shared();
    first.lock().await.add_sub_task(&second).expect("register second");
    second.lock().await.add_sub_task(&first).expect("register first");

    let outcome = first.lock().await.run("anyone?").await.expect("run");
    assert_eq!(outcome, crate::task::domain::RunOutcome::NoAnswer);
}

#[rstest]
#[tokio::test]
async fn cyclic_forest_still_reaches_a_capable_sub_task() {
    let first = delegating_parent("first").into_shared();
    let second = delegating_parent("second").into_shared();
    let worker = answering_task("worker", "made it through").into_shared();
    first.lock().await.add_sub_task(&second).expect("register second");
    {
        let mut guard = second.lock().await;
        guard.add_sub_task(&first).expect("register first");
        guard.add_sub_task(&worker).expect("register worker");
    }

    let outcome = first.lock().await.run("anyone?").await.expect("run");
    assert_eq!(outcome.content(), Some("made it through"));
}

#[rstest]
#[tokio::test]
async fn sub_task_outlives_parent_runs_and_serves_several_parents() {
    let worker = answering_task("worker", "ready").into_shared();

    let mut first_parent = delegating_parent("first");
    first_parent.add_sub_task(&worker).expect("register");
    let mut second_parent = delegating_parent("second");
    second_parent.add_sub_task(&worker).expect("register");

    assert_eq!(
        first_parent.run("ping").await.expect("run").content(),
        Some("ready")
    );
    assert_eq!(
        second_parent.run("ping").await.expect("run").content(),
        Some("ready")
    );
    // Reusable after its parents complete.
    assert_eq!(
        first_parent.run("ping").await.expect("run").content(),
        Some("ready")
    );
}
