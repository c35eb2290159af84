/// Model tiers and reasoning budgets shared by the adapter operations.
///
/// Structured calls (chart, compatibility) run on the reasoning tier with a
/// thinking budget; best-effort calls (icebreaker, forecast) run on the fast
/// tier without one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdapterSettings {
    pub reasoning_model: String,
    pub fast_model: String,
    pub chart_thinking_budget: Option<u32>,
    pub compatibility_thinking_budget: Option<u32>,
}

const GEMINI_REASONING_MODEL: &str = "gemini-3-pro-preview";
const GEMINI_FAST_MODEL: &str = "gemini-3-flash-preview";
const ANTHROPIC_REASONING_MODEL: &str = "claude-sonnet-4-5";
const ANTHROPIC_FAST_MODEL: &str = "claude-haiku-4-5";

const CHART_THINKING_BUDGET: u32 = 6000;
const COMPATIBILITY_THINKING_BUDGET: u32 = 4000;

impl AdapterSettings {
    pub fn new(reasoning_model: impl Into<String>, fast_model: impl Into<String>) -> Self {
        Self {
            reasoning_model: reasoning_model.into(),
            fast_model: fast_model.into(),
            chart_thinking_budget: Some(CHART_THINKING_BUDGET),
            compatibility_thinking_budget: Some(COMPATIBILITY_THINKING_BUDGET),
        }
    }

    pub fn gemini() -> Self {
        Self::new(GEMINI_REASONING_MODEL, GEMINI_FAST_MODEL)
    }

    pub fn anthropic() -> Self {
        Self::new(ANTHROPIC_REASONING_MODEL, ANTHROPIC_FAST_MODEL)
    }

    pub fn without_thinking(mut self) -> Self {
        self.chart_thinking_budget = None;
        self.compatibility_thinking_budget = None;
        self
    }

    /// Applies overrides from the environment:
    ///
    /// | Variable                     | Overrides         |
    /// |------------------------------|-------------------|
    /// | `ASTROMATCH_REASONING_MODEL` | `reasoning_model` |
    /// | `ASTROMATCH_FAST_MODEL`      | `fast_model`      |
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(model) = std::env::var("ASTROMATCH_REASONING_MODEL") {
            self.reasoning_model = model;
        }
        if let Ok(model) = std::env::var("ASTROMATCH_FAST_MODEL") {
            self.fast_model = model;
        }
        self
    }
}

impl Default for AdapterSettings {
    fn default() -> Self {
        Self::gemini()
    }
}
