//! Screen descriptors: everything that varies between screens, as data.

use serde::{Deserialize, Serialize};
use wireframe_core::{Theme, WireframeError, WireframeResult};

use crate::chrome;
use crate::step::LayoutStep;

/// Where the layout cursor starts on a screen with a nav bar.
pub const CONTENT_TOP: f32 = 108.0;

/// A complete, declarative description of one screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenSpec {
    /// Stable identifier.
    pub id: String,
    /// Navigation bar title.
    pub title: String,
    /// Whether the nav bar shows the back affordance.
    #[serde(default = "default_show_back")]
    pub show_back: bool,
    /// Initial cursor position.
    #[serde(default = "default_start_y")]
    pub start_y: f32,
    /// Content steps in layout order.
    #[serde(default)]
    pub steps: Vec<LayoutStep>,
    /// Label of the bottom call-to-action, if the screen has one.
    #[serde(default)]
    pub action: Option<String>,
}

fn default_show_back() -> bool {
    true
}

fn default_start_y() -> f32 {
    CONTENT_TOP
}

impl ScreenSpec {
    /// A screen with a back affordance, the cursor at [`CONTENT_TOP`] and
    /// no content yet.
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            show_back: true,
            start_y: CONTENT_TOP,
            steps: Vec::new(),
            action: None,
        }
    }

    /// Hide the back affordance (entry screens).
    #[must_use]
    pub fn without_back(mut self) -> Self {
        self.show_back = false;
        self
    }

    /// Seed the cursor somewhere other than [`CONTENT_TOP`].
    #[must_use]
    pub fn starting_at(mut self, y: f32) -> Self {
        self.start_y = y;
        self
    }

    /// Append a step.
    #[must_use]
    pub fn step(mut self, step: LayoutStep) -> Self {
        self.steps.push(step);
        self
    }

    /// Append several steps.
    #[must_use]
    pub fn steps(mut self, steps: impl IntoIterator<Item = LayoutStep>) -> Self {
        self.steps.extend(steps);
        self
    }

    /// Set the bottom call-to-action label.
    #[must_use]
    pub fn action(mut self, label: impl Into<String>) -> Self {
        self.action = Some(label.into());
        self
    }

    /// Lowest y that content may reach: the action button's top edge when
    /// there is one, otherwise the bottom padding line.
    #[must_use]
    pub fn content_limit(&self, theme: &Theme) -> f32 {
        if self.action.is_some() {
            chrome::action_top(theme)
        } else {
            theme.canvas_height - theme.padding
        }
    }

    /// Parse a screen description from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not describe a screen.
    pub fn from_json(json: &str) -> WireframeResult<Self> {
        serde_json::from_str(json).map_err(WireframeError::Serialization)
    }

    /// Serialize the screen description to JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> WireframeResult<String> {
        serde_json::to_string_pretty(self).map_err(WireframeError::Serialization)
    }
}
