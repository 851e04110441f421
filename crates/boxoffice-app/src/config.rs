//! Runtime configuration.

use boxoffice_core::{Layout, PricingPolicy};

/// What to do when a line cannot be parsed as a number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputPolicy {
    /// Show a message and ask again.
    #[default]
    Reprompt,
    /// End the session with an error.
    Abort,
}

/// Settings for one interactive session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Preconfigured auditorium. `None` asks the user for dimensions.
    pub layout: Option<Layout>,
    /// Ticket prices.
    pub pricing: PricingPolicy,
    /// Handling of non-numeric input.
    pub input_policy: InputPolicy,
}

impl RuntimeConfig {
    /// Skip the dimension prompts and use `layout`.
    #[must_use]
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = Some(layout);
        self
    }

    /// Use custom ticket prices.
    #[must_use]
    pub fn with_pricing(mut self, pricing: PricingPolicy) -> Self {
        self.pricing = pricing;
        self
    }

    /// Set how non-numeric input is handled.
    #[must_use]
    pub fn with_input_policy(mut self, input_policy: InputPolicy) -> Self {
        self.input_policy = input_policy;
        self
    }
}
