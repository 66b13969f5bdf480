//! The turn-taking loop and sub-task delegation.
//!
//! A task wraps one agent and an ordered list of shared sub-task handles. Each
//! turn, the agent's responders are consulted in a fixed priority order; when
//! all of them decline, the pending message is offered to the sub-tasks in
//! registration order, depth-first. The first usable response wins the turn
//! and becomes the new pending message.

use crate::agent::domain::StepOutcome;
use crate::agent::services::ChatAgent;
use crate::chat::domain::{ChatMessage, TaskControl};
use crate::task::domain::{RunOutcome, TaskId, TaskSettings};
use crate::task::error::{TaskError, TaskResult};
use mockable::Clock;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use tokio::sync::Mutex;

/// An orchestration unit driving one agent and its delegation list.
///
/// # Examples
///
/// ```
/// use ensemble::agent::domain::AgentConfig;
/// use ensemble::agent::services::ChatAgent;
/// use ensemble::llm::adapters::MockLm;
/// use ensemble::task::domain::TaskSettings;
/// use ensemble::task::services::Task;
/// use mockable::DefaultClock;
/// use std::sync::Arc;
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let agent = ChatAgent::new(AgentConfig::new("echo"), Arc::new(DefaultClock))
///     .with_llm(Arc::new(MockLm::fixed("42")));
/// let mut task = Task::new("root", agent, TaskSettings::new().with_single_round(true));
/// let outcome = task.run("meaning of life?").await.expect("run");
/// assert_eq!(outcome.content(), Some("42"));
/// # });
/// ```
pub struct Task<C: Clock + Send + Sync> {
    id: TaskId,
    name: String,
    agent: Option<ChatAgent<C>>,
    settings: TaskSettings,
    sub_tasks: Vec<SharedTask<C>>,
    clock: Arc<C>,
}

impl<C: Clock + Send + Sync> Task<C> {
    /// Creates a task around an agent.
    #[must_use]
    pub fn new(name: impl Into<String>, agent: ChatAgent<C>, settings: TaskSettings) -> Self {
        let clock = agent.clock();
        Self {
            id: TaskId::new(),
            name: name.into(),
            agent: Some(agent),
            settings,
            sub_tasks: Vec::new(),
            clock,
        }
    }

    /// Creates a task with no agent of its own.
    ///
    /// Such a task can still answer through its sub-tasks; with none
    /// registered it declines every run.
    #[must_use]
    pub fn without_agent(name: impl Into<String>, settings: TaskSettings, clock: Arc<C>) -> Self {
        Self {
            id: TaskId::new(),
            name: name.into(),
            agent: None,
            settings,
            sub_tasks: Vec::new(),
            clock,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the task settings.
    #[must_use]
    pub const fn settings(&self) -> &TaskSettings {
        &self.settings
    }

    /// Returns the wrapped agent, if any.
    #[must_use]
    pub const fn agent(&self) -> Option<&ChatAgent<C>> {
        self.agent.as_ref()
    }

    /// Returns the wrapped agent mutably, if any.
    pub fn agent_mut(&mut self) -> Option<&mut ChatAgent<C>> {
        self.agent.as_mut()
    }

    /// Returns the identifiers of the registered sub-tasks, in order.
    #[must_use]
    pub fn sub_task_ids(&self) -> Vec<TaskId> {
        self.sub_tasks.iter().map(SharedTask::id).collect()
    }

    /// Wraps the task in a shared handle suitable for delegation.
    #[must_use]
    pub fn into_shared(self) -> SharedTask<C> {
        SharedTask {
            id: self.id,
            name: self.name.clone(),
            inner: Arc::new(Mutex::new(self)),
        }
    }

    /// Appends a sub-task to the ordered delegation list.
    ///
    /// Registering the same task twice is a no-op; the list keeps its first
    /// position. A sub-task's lifecycle is independent of this task: the same
    /// handle may serve several parents and outlives any one run. Indirect
    /// cycles between shared handles are permitted here and skipped at
    /// delegation time.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::SelfDelegation`] when the handle refers to this
    /// task itself.
    pub fn add_sub_task(&mut self, sub_task: &SharedTask<C>) -> TaskResult<()> {
        if sub_task.id() == self.id {
            return Err(TaskError::SelfDelegation(self.id));
        }
        if self.sub_tasks.iter().any(|existing| existing.id() == sub_task.id()) {
            return Ok(());
        }
        self.sub_tasks.push(sub_task.clone());
        Ok(())
    }

    /// Runs the task with an initial textual prompt.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::Agent`] when a responder collaborator fails.
    pub async fn run(&mut self, prompt: impl Into<String>) -> TaskResult<RunOutcome> {
        let message = ChatMessage::user(prompt, &*self.clock);
        self.drive(Some(message), Vec::new()).await
    }

    /// Runs the task with a prepared initial message.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::Agent`] when a responder collaborator fails.
    pub async fn run_message(&mut self, message: ChatMessage) -> TaskResult<RunOutcome> {
        self.drive(Some(message), Vec::new()).await
    }

    /// Runs the task with no initial message.
    ///
    /// The first answer then counts as the controller's opener rather than
    /// as the reply to one.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::Agent`] when a responder collaborator fails.
    pub async fn run_unprompted(&mut self) -> TaskResult<RunOutcome> {
        self.drive(None, Vec::new()).await
    }

    /// Drives the turn-taking loop to termination.
    ///
    /// Boxed so sub-task delegation can recurse through the shared handles.
    /// `ancestors` carries the identifiers of the tasks already running above
    /// this one; delegation skips any handle found in it, so a cycle between
    /// shared handles reads as a decline instead of deadlocking on the task
    /// mutexes.
    fn drive(
        &mut self,
        initial: Option<ChatMessage>,
        ancestors: Vec<TaskId>,
    ) -> Pin<Box<dyn Future<Output = TaskResult<RunOutcome>> + Send + '_>> {
        Box::pin(async move {
            let opened_by_caller = initial.is_some();
            let mut pending = initial;
            let mut answers: u32 = 0;

            for turn in 0..self.settings.max_turns() {
                tracing::debug!(task = %self.name, turn, "taking turn");
                match self.step(pending.as_ref(), &ancestors).await? {
                    StepOutcome::NoAnswer => {
                        tracing::debug!(task = %self.name, turn, "no responder answered");
                        return Ok(RunOutcome::NoAnswer);
                    }
                    StepOutcome::Answer(message) => {
                        match message.control() {
                            Some(TaskControl::Done) => {
                                return Ok(RunOutcome::Completed(message));
                            }
                            Some(TaskControl::Quit) => return Ok(RunOutcome::Cancelled),
                            None => {}
                        }
                        answers += 1;
                        if self.settings.single_round() {
                            let required = if opened_by_caller { 1 } else { 2 };
                            if answers >= required {
                                return Ok(RunOutcome::Completed(message));
                            }
                        }
                        pending = Some(message);
                    }
                }
            }

            tracing::debug!(task = %self.name, "turn budget exhausted");
            Ok(RunOutcome::Exhausted(pending))
        })
    }

    /// Takes one turn: own responders in priority order, then delegation.
    async fn step(
        &mut self,
        pending: Option<&ChatMessage>,
        ancestors: &[TaskId],
    ) -> TaskResult<StepOutcome> {
        if let Some(agent) = self.agent.as_mut() {
            let handler_outcome = agent.handler_response(pending);
            if handler_outcome.is_answer() {
                return Ok(handler_outcome);
            }
            if self.settings.interactive() {
                let user_outcome = agent.user_response(pending).await?;
                if user_outcome.is_answer() {
                    return Ok(user_outcome);
                }
                let llm_outcome = agent.llm_response(pending).await?;
                if llm_outcome.is_answer() {
                    return Ok(llm_outcome);
                }
            } else {
                let llm_outcome = agent.llm_response(pending).await?;
                if llm_outcome.is_answer() {
                    return Ok(llm_outcome);
                }
                let user_outcome = agent.user_response(pending).await?;
                if user_outcome.is_answer() {
                    return Ok(user_outcome);
                }
            }
        }

        let Some(message) = pending else {
            return Ok(StepOutcome::NoAnswer);
        };
        let mut chain = ancestors.to_vec();
        chain.push(self.id);
        for sub_task in &self.sub_tasks {
            if chain.contains(&sub_task.id()) {
                tracing::debug!(
                    task = %self.name,
                    sub_task = %sub_task.name(),
                    "skipping sub-task already running above this one"
                );
                continue;
            }
            tracing::debug!(task = %self.name, sub_task = %sub_task.name(), "delegating");
            match sub_task.run_delegated_from(message.clone(), &chain).await? {
                RunOutcome::Completed(reply) => return Ok(StepOutcome::Answer(reply)),
                RunOutcome::NoAnswer | RunOutcome::Exhausted(_) | RunOutcome::Cancelled => {}
            }
        }
        Ok(StepOutcome::NoAnswer)
    }
}

impl<C: Clock + Send + Sync> fmt::Debug for Task<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Task")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("settings", &self.settings)
            .field("has_agent", &self.agent.is_some())
            .field("sub_tasks", &self.sub_task_ids())
            .finish()
    }
}

/// A cloneable handle to a task usable in delegation lists.
///
/// The identifier and name are cached on the handle so registration and
/// tracing never need to take the lock.
pub struct SharedTask<C: Clock + Send + Sync> {
    id: TaskId,
    name: String,
    inner: Arc<Mutex<Task<C>>>,
}

impl<C: Clock + Send + Sync> SharedTask<C> {
    /// Returns the identifier of the underlying task.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the name of the underlying task.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Runs the underlying task with a delegated pending message.
    ///
    /// Anything short of [`RunOutcome::Completed`] reads as a decline to the
    /// delegating parent, which then tries its next sub-task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::Agent`] when a responder collaborator fails.
    pub async fn run_delegated(&self, message: ChatMessage) -> TaskResult<RunOutcome> {
        self.run_delegated_from(message, &[]).await
    }

    /// Runs the underlying task with the delegating ancestor chain attached.
    async fn run_delegated_from(
        &self,
        message: ChatMessage,
        ancestors: &[TaskId],
    ) -> TaskResult<RunOutcome> {
        let mut task = self.inner.lock().await;
        task.drive(Some(message), ancestors.to_vec()).await
    }

    /// Locks and returns the underlying task.
    pub async fn lock(&self) -> tokio::sync::MutexGuard<'_, Task<C>> {
        self.inner.lock().await
    }
}

impl<C: Clock + Send + Sync> Clone for SharedTask<C> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            name: self.name.clone(),
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C: Clock + Send + Sync> fmt::Debug for SharedTask<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedTask")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish()
    }
}
