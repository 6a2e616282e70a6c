//! Drawings under construction and the frozen wireframes they become.

use serde::{Deserialize, Serialize};

use crate::geometry::ensure_non_negative;
use crate::{Element, WireframeError, WireframeResult};

/// An append-only sequence of elements on a fixed-size canvas.
///
/// Elements are only added through the emitters in [`crate::emit`]; once a
/// screen is complete, [`Drawing::finish`] freezes it into a [`Wireframe`].
#[derive(Debug, Clone)]
pub struct Drawing {
    width: f32,
    height: f32,
    elements: Vec<Element>,
}

impl Drawing {
    /// Create an empty drawing with the given canvas size.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is negative or non-finite.
    pub fn new(width: f32, height: f32) -> WireframeResult<Self> {
        ensure_non_negative("canvas", &[width, height])?;
        Ok(Self {
            width,
            height,
            elements: Vec::new(),
        })
    }

    pub(crate) fn push(&mut self, element: Element) {
        tracing::trace!(kind = element.kind.name(), index = self.elements.len(), "emit");
        self.elements.push(element);
    }

    /// Canvas width in pixels.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Canvas height in pixels.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Elements emitted so far, in paint order.
    #[must_use]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Number of elements emitted so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether nothing has been emitted yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Freeze the drawing.
    #[must_use]
    pub fn finish(self) -> Wireframe {
        Wireframe {
            width: self.width,
            height: self.height,
            elements: self.elements,
        }
    }
}

/// A finished, read-only drawing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wireframe {
    width: f32,
    height: f32,
    elements: Vec<Element>,
}

impl Wireframe {
    /// Canvas width in pixels.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Canvas height in pixels.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Elements in paint order; later elements overlay earlier ones.
    #[must_use]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Number of elements.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Text contents in paint order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.elements.iter().filter_map(Element::text)
    }

    /// Serialize the wireframe to JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> WireframeResult<String> {
        serde_json::to_string(self).map_err(WireframeError::Serialization)
    }

    /// Deserialize a wireframe from JSON.
    ///
    /// The canvas and every element pass the same checks the emitters apply.
    ///
    /// # Errors
    ///
    /// Returns [`WireframeError::Serialization`] if deserialization fails and
    /// the validation error of the first malformed element otherwise.
    pub fn from_json(json: &str) -> WireframeResult<Self> {
        let wireframe: Self = serde_json::from_str(json).map_err(WireframeError::Serialization)?;
        ensure_non_negative("canvas", &[wireframe.width, wireframe.height])?;
        for (index, element) in wireframe.elements.iter().enumerate() {
            element.validate().inspect_err(|err| {
                tracing::debug!(index, kind = element.kind.name(), %err, "rejected element");
            })?;
        }
        Ok(wireframe)
    }
}
