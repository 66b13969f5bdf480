//! Turn-taking settings for a task run.

/// Turn budget applied when none is supplied.
pub const DEFAULT_MAX_TURNS: u32 = 40;

/// Settings governing how a task's turn-taking loop behaves.
///
/// # Examples
///
/// ```
/// use ensemble::task::domain::TaskSettings;
///
/// let settings = TaskSettings::new().with_single_round(true);
/// assert!(settings.single_round());
/// assert!(!settings.interactive());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskSettings {
    /// Whether the human-input responder is the designated controller.
    interactive: bool,

    /// Whether the run stops after one controller message plus one reply.
    single_round: bool,

    /// Upper bound on completed turns before the run is cut short.
    max_turns: u32,
}

impl TaskSettings {
    /// Creates non-interactive multi-turn settings with the default budget.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            interactive: false,
            single_round: false,
            max_turns: DEFAULT_MAX_TURNS,
        }
    }

    /// Designates the human-input responder as the controller.
    #[must_use]
    pub const fn with_interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    /// Limits the run to a single controller message plus one reply.
    #[must_use]
    pub const fn with_single_round(mut self, single_round: bool) -> Self {
        self.single_round = single_round;
        self
    }

    /// Overrides the turn budget.
    #[must_use]
    pub const fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// Returns whether the human-input responder is the controller.
    #[must_use]
    pub const fn interactive(&self) -> bool {
        self.interactive
    }

    /// Returns whether the run is limited to a single round.
    #[must_use]
    pub const fn single_round(&self) -> bool {
        self.single_round
    }

    /// Returns the turn budget.
    #[must_use]
    pub const fn max_turns(&self) -> u32 {
        self.max_turns
    }
}

impl Default for TaskSettings {
    fn default() -> Self {
        Self::new()
    }
}
