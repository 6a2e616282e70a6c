//! Property tests: themes change colors, never structure.

use proptest::prelude::*;
use wireframe_core::{Color, Paint, Theme};
use wireframe_layout::Registry;

fn color() -> impl Strategy<Value = Color> {
    (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Color::rgb(r, g, b))
}

fn theme() -> impl Strategy<Value = Theme> {
    (color(), color(), color(), color(), color(), color()).prop_map(
        |(background, text, primary, secondary, border, surface)| Theme {
            background,
            text,
            primary,
            secondary,
            border,
            surface,
            ..Theme::default()
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_recolored_screens_keep_geometry(theme in theme()) {
        let registry = Registry::global();
        let baseline = registry.build_all(&Theme::default()).expect("default theme");
        let recolored = registry.build_all(&theme).expect("colors never break layout");

        for ((id, a), (_, b)) in baseline.iter().zip(&recolored) {
            prop_assert_eq!(a.element_count(), b.element_count(), "{}", id);
            for (x, y) in a.elements().iter().zip(b.elements()) {
                prop_assert_eq!(&x.kind, &y.kind);
            }
            prop_assert_eq!(b.elements()[0].fill(), Paint::Color(theme.background));
        }
    }

    #[test]
    fn prop_wider_canvas_keeps_screens_valid(width in 360.0f32..800.0) {
        let theme = Theme { canvas_width: width, ..Theme::default() };
        for (id, wireframe) in Registry::global().build_all(&theme).expect("wider canvas fits") {
            for element in wireframe.elements() {
                let bounds = element.bounds();
                prop_assert!(
                    bounds.left >= 0.0 && bounds.right <= width + 0.01 && bounds.bottom <= 640.0,
                    "{} {} escapes the canvas", id, element.kind.name()
                );
            }
        }
    }
}
