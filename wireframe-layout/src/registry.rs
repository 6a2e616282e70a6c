//! Screen registry: stable ids mapped to screen builders.

use std::sync::OnceLock;

use wireframe_core::{Theme, Wireframe, WireframeError, WireframeResult};

use crate::cursor;
use crate::screen::ScreenSpec;
use crate::screens;

/// Builds the data for one screen.
pub type ScreenBuilder = fn() -> ScreenSpec;

/// Journey order.
const SCREENS: [(&str, ScreenBuilder); 12] = [
    ("welcome", screens::welcome),
    ("league_selection", screens::league),
    ("document_upload", screens::documents),
    ("profile_setup", screens::profile_setup),
    ("verification_status", screens::verification_status),
    ("studio_dashboard", screens::studio_dashboard),
    ("daw", screens::daw),
    ("beat_library", screens::beat_library),
    ("content_management", screens::content_management),
    ("release_management", screens::release_management),
    ("analytics_dashboard", screens::analytics_dashboard),
    ("community_hub", screens::community_hub),
];

/// Immutable table of the designed screens.
#[derive(Debug, Clone)]
pub struct Registry {
    ids: Vec<&'static str>,
    builders: Vec<ScreenBuilder>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Create a registry holding every designed screen in journey order.
    #[must_use]
    pub fn new() -> Self {
        let (ids, builders): (Vec<&'static str>, Vec<ScreenBuilder>) =
            SCREENS.iter().copied().unzip();
        Self { ids, builders }
    }

    /// The process-wide registry, built on first use.
    #[must_use]
    pub fn global() -> &'static Self {
        static REGISTRY: OnceLock<Registry> = OnceLock::new();
        REGISTRY.get_or_init(Self::new)
    }

    /// All screen ids in journey order.
    #[must_use]
    pub fn list_screens(&self) -> &[&'static str] {
        &self.ids
    }

    /// Whether `id` names a registered screen.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(&id)
    }

    fn builder(&self, id: &str) -> WireframeResult<ScreenBuilder> {
        self.ids
            .iter()
            .position(|known| *known == id)
            .map(|index| self.builders[index])
            .ok_or_else(|| WireframeError::UnknownScreen(id.to_string()))
    }

    /// The data describing screen `id`.
    ///
    /// # Errors
    ///
    /// Returns [`WireframeError::UnknownScreen`] if `id` is not registered.
    pub fn spec(&self, id: &str) -> WireframeResult<ScreenSpec> {
        let build = self.builder(id)?;
        Ok(build())
    }

    /// Build screen `id` with `theme`.
    ///
    /// # Errors
    ///
    /// Returns [`WireframeError::UnknownScreen`] if `id` is not registered,
    /// or any error raised while laying the screen out.
    pub fn build_screen(&self, id: &str, theme: &Theme) -> WireframeResult<Wireframe> {
        let spec = self.spec(id)?;
        cursor::render(&spec, theme)
    }

    /// Build every screen in journey order, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Returns the first layout error encountered.
    pub fn build_all(&self, theme: &Theme) -> WireframeResult<Vec<(&'static str, Wireframe)>> {
        self.ids
            .iter()
            .map(|id| Ok((*id, self.build_screen(id, theme)?)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_journey_order() {
        let registry = Registry::new();
        let ids = registry.list_screens();
        assert_eq!(ids.len(), 12);
        assert_eq!(ids[0], "welcome");
        assert_eq!(ids[11], "community_hub");
        assert_eq!(registry.list_screens(), ids);
    }

    #[test]
    fn test_spec_ids_match_registry() {
        let registry = Registry::new();
        for id in registry.list_screens() {
            let spec = registry.spec(id).expect("registered");
            assert_eq!(spec.id, *id);
        }
    }

    #[test]
    fn test_unknown_screen() {
        let registry = Registry::new();
        assert!(!registry.contains("settings"));
        match registry.build_screen("settings", &Theme::default()) {
            Err(WireframeError::UnknownScreen(id)) => assert_eq!(id, "settings"),
            other => panic!("Expected UnknownScreen, got {other:?}"),
        }
    }

    #[test]
    fn test_global_is_shared() {
        assert!(std::ptr::eq(Registry::global(), Registry::global()));
        assert_eq!(Registry::global().list_screens(), Registry::new().list_screens());
    }
}
