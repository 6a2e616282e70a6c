//! The designed screens of the athlete journey, as data.
//!
//! Every function returns a [`ScreenSpec`]; none of them draw. The layout
//! cursor turns them into wireframes.

use wireframe_core::TypeScale;

use crate::screen::ScreenSpec;
use crate::step::{Anchor, Cell, Frame, HPos, Inset, Label, LayoutStep, Panel, Row, Span, TextBlock, Tone};

/// A form field on the league selection screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field<'a> {
    /// Label above the input box.
    pub label: &'a str,
    /// Placeholder inside the box.
    pub placeholder: &'a str,
    /// Dropdowns get a chevron at the right edge.
    pub dropdown: bool,
}

impl<'a> Field<'a> {
    /// A dropdown selector.
    #[must_use]
    pub const fn dropdown(label: &'a str, placeholder: &'a str) -> Self {
        Self {
            label,
            placeholder,
            dropdown: true,
        }
    }

    /// A free text input.
    #[must_use]
    pub const fn input(label: &'a str, placeholder: &'a str) -> Self {
        Self {
            label,
            placeholder,
            dropdown: false,
        }
    }
}

/// Fields of the designed league selection screen.
pub const LEAGUE_FIELDS: [Field<'static>; 3] = [
    Field::dropdown("Select League", "Choose your league"),
    Field::dropdown("Select Team", "Choose your team"),
    Field::input("Player ID", "Enter your ID"),
];

/// Documents of the designed upload screen.
pub const REQUIRED_DOCUMENTS: [&str; 3] = ["League ID", "Team Contract", "Photo ID"];

fn text(text: &str, scale: TypeScale, tone: Tone, x: HPos, advance: f32) -> LayoutStep {
    LayoutStep::Text(TextBlock {
        text: text.to_string(),
        scale,
        tone,
        x,
        dy: 0.0,
        advance,
    })
}

/// Left-aligned heading in the text color.
fn heading(content: &str, scale: TypeScale, advance: f32) -> LayoutStep {
    text(content, scale, Tone::Text, HPos::Left(0.0), advance)
}

fn centered(content: &str, scale: TypeScale, tone: Tone, advance: f32) -> LayoutStep {
    text(content, scale, tone, HPos::Center, advance)
}

fn label(content: &str, scale: TypeScale) -> Option<Label> {
    Some(Label {
        text: content.to_string(),
        scale,
    })
}

fn panel(frame: Frame, offset: f32, height: f32, insets: Vec<Inset>, advance: f32) -> Panel {
    Panel {
        label: None,
        offset,
        height,
        frame,
        radius: 8.0,
        insets,
        advance,
    }
}

/// Unlabelled surface card 20px below the cursor, as used for list rows.
fn card(height: f32, insets: Vec<Inset>, advance: f32) -> LayoutStep {
    LayoutStep::Panel(panel(Frame::Surface, 20.0, height, insets, advance))
}

/// Labelled outlined input box 10px below its label.
fn input_box(title: &str, height: f32, insets: Vec<Inset>, advance: f32) -> LayoutStep {
    LayoutStep::Panel(Panel {
        label: label(title, TypeScale::Body),
        ..panel(Frame::Outline, 10.0, height, insets, advance)
    })
}

/// Entry screen: logo, heading, subheading, start button.
#[must_use]
pub fn welcome() -> ScreenSpec {
    ScreenSpec::new("welcome", "Welcome")
        .without_back()
        .starting_at(130.0)
        .steps([
            LayoutStep::Panel(panel(
                Frame::Bare,
                0.0,
                100.0,
                vec![Inset::dot(Anchor::center(50.0), 50.0, Tone::Primary)],
                150.0,
            )),
            centered("Athlete Verification", TypeScale::Display, Tone::Text, 40.0),
            centered(
                "Verify your professional status",
                TypeScale::Lead,
                Tone::Secondary,
                40.0,
            ),
        ])
        .action("Start Verification")
}

/// League selection with the designed fields.
#[must_use]
pub fn league() -> ScreenSpec {
    league_selection(&LEAGUE_FIELDS)
}

/// League selection with caller-supplied fields.
///
/// Fields keep their designed 80px pitch; too many of them overflow into the
/// action button and fail to render.
#[must_use]
pub fn league_selection(fields: &[Field<'_>]) -> ScreenSpec {
    let inputs = fields.iter().map(|field| {
        let mut insets = vec![Inset::text(
            field.placeholder,
            Anchor::left(15.0, 25.0),
            TypeScale::Body,
            Tone::Secondary,
        )];
        if field.dropdown {
            insets.push(Inset::Chevron {
                at: Anchor::right(25.0, 20.0),
            });
        }
        input_box(field.label, 44.0, insets, 80.0)
    });

    ScreenSpec::new("league_selection", "League Selection")
        .steps(inputs)
        .step(LayoutStep::Text(TextBlock {
            text: "This information will be verified with your league".to_string(),
            scale: TypeScale::Caption,
            tone: Tone::Secondary,
            x: HPos::Left(0.0),
            dy: 10.0,
            advance: 0.0,
        }))
        .action("Continue")
}

/// Document upload with the designed documents.
#[must_use]
pub fn documents() -> ScreenSpec {
    document_upload(&REQUIRED_DOCUMENTS)
}

/// Document upload with one dashed drop zone per document.
///
/// Zones keep their designed 110px pitch, so a fourth document overflows the
/// default canvas.
#[must_use]
pub fn document_upload(documents: &[&str]) -> ScreenSpec {
    let zones = documents.iter().map(|document| {
        LayoutStep::Panel(Panel {
            label: label(document, TypeScale::Body),
            ..panel(
                Frame::Dashed,
                10.0,
                80.0,
                vec![Inset::text(
                    "Tap to Upload",
                    Anchor::center(40.0),
                    TypeScale::Body,
                    Tone::Primary,
                )],
                110.0,
            )
        })
    });

    ScreenSpec::new("document_upload", "Document Upload")
        .step(heading("Upload Required Documents", TypeScale::Title, 40.0))
        .steps(zones)
        .action("Submit Documents")
}

/// Profile photo and free-text profile fields.
#[must_use]
pub fn profile_setup() -> ScreenSpec {
    ScreenSpec::new("profile_setup", "Profile Setup").steps([
        LayoutStep::Panel(panel(
            Frame::Bare,
            0.0,
            110.0,
            vec![
                Inset::Circle {
                    at: Anchor::center(50.0),
                    radius: 40.0,
                    fill: Some(Tone::Surface),
                    stroke: Some(Tone::Border),
                    stroke_width: 1.0,
                },
                Inset::text("Add Photo", Anchor::center(110.0), TypeScale::Body, Tone::Primary),
            ],
            140.0,
        )),
        input_box("Professional Bio", 80.0, Vec::new(), 100.0),
        input_box("Career Highlights", 44.0, Vec::new(), 64.0),
        input_box("Social Media Links", 44.0, Vec::new(), 64.0),
    ])
}

/// Review progress after documents are submitted.
#[must_use]
pub fn verification_status() -> ScreenSpec {
    let review_steps = [
        ("Documents Received", "Done", Inset::dot(Anchor::left(25.0, 25.0), 8.0, Tone::Primary)),
        (
            "League Confirmation",
            "In Progress",
            Inset::ring(Anchor::left(25.0, 25.0), 8.0, Tone::Primary, 2.0),
        ),
        (
            "Profile Approval",
            "Pending",
            Inset::ring(Anchor::left(25.0, 25.0), 8.0, Tone::Border, 2.0),
        ),
    ];
    let rows = review_steps.into_iter().map(|(step, state, marker)| {
        card(
            50.0,
            vec![
                marker,
                Inset::text(step, Anchor::left(45.0, 30.0), TypeScale::Body, Tone::Text),
                Inset::text(state, Anchor::right(15.0, 30.0), TypeScale::Caption, Tone::Secondary),
            ],
            60.0,
        )
    });

    ScreenSpec::new("verification_status", "Verification Status")
        .steps([
            LayoutStep::Panel(panel(
                Frame::Bare,
                0.0,
                110.0,
                vec![
                    Inset::Circle {
                        at: Anchor::center(40.0),
                        radius: 36.0,
                        fill: Some(Tone::Surface),
                        stroke: Some(Tone::Primary),
                        stroke_width: 2.0,
                    },
                    Inset::text("Under Review", Anchor::center(100.0), TypeScale::Title, Tone::Text),
                ],
                130.0,
            )),
            centered(
                "Your documents are being verified",
                TypeScale::Body,
                Tone::Secondary,
                40.0,
            ),
            heading("Review Steps", TypeScale::Title, 0.0),
        ])
        .steps(rows)
        .step(LayoutStep::Text(TextBlock {
            text: "Typical review time is 2-3 business days".to_string(),
            scale: TypeScale::Caption,
            tone: Tone::Secondary,
            x: HPos::Left(0.0),
            dy: 30.0,
            advance: 0.0,
        }))
        .action("Go to Studio")
}

/// Studio home: tab strip and recent projects grid.
#[must_use]
pub fn studio_dashboard() -> ScreenSpec {
    let tabs = ["DAW", "Beats", "Projects"]
        .iter()
        .enumerate()
        .map(|(index, tab)| {
            let (frame, tone) = if index == 0 {
                (Frame::Highlight, Tone::Primary)
            } else {
                (Frame::Outline, Tone::Secondary)
            };
            Cell {
                frame,
                insets: vec![Inset::text(*tab, Anchor::center(28.0), TypeScale::Body, tone)],
            }
        })
        .collect();

    let projects = (1..=4)
        .map(|n| Cell {
            frame: Frame::Surface,
            insets: vec![Inset::text(
                format!("Project {n}"),
                Anchor::left(10.0, 30.0),
                TypeScale::Body,
                Tone::Text,
            )],
        })
        .collect();

    ScreenSpec::new("studio_dashboard", "Studio")
        .starting_at(88.0)
        .steps([
            LayoutStep::Row(Row {
                span: Span::FullBleed,
                columns: 3,
                offset: 0.0,
                cell_height: 44.0,
                row_pitch: 44.0,
                gutter: 0.0,
                radius: 0.0,
                cells: tabs,
                advance: 64.0,
            }),
            heading("Recent Projects", TypeScale::Title, 20.0),
            LayoutStep::Row(Row {
                span: Span::Padded,
                columns: 2,
                offset: 0.0,
                cell_height: 100.0,
                row_pitch: 120.0,
                gutter: 20.0,
                radius: 8.0,
                cells: projects,
                advance: 240.0,
            }),
        ])
        .action("New Recording")
}

/// Recording view: track lanes and transport controls.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn daw() -> ScreenSpec {
    let lanes = (0..4usize).flat_map(|lane| {
        let top = 50.0 * lane as f32;
        [
            Inset::Square {
                at: Anchor::left(0.0, 10.0 + top),
                size: 20.0,
            },
            Inset::text(
                format!("Track {}", lane + 1),
                Anchor::left(5.0, 30.0 + top),
                TypeScale::Micro,
                Tone::Secondary,
            ),
            Inset::Rule {
                from: HPos::Left(50.0),
                to: HPos::Right(10.0),
                dy: 25.0 + top,
            },
        ]
    });

    let controls = ["Record", "Play", "Stop", "Mix"]
        .iter()
        .map(|control| {
            let tone = if *control == "Record" {
                Tone::Primary
            } else {
                Tone::Border
            };
            Cell {
                frame: Frame::Bare,
                insets: vec![
                    Inset::ring(Anchor::center(30.0), 25.0, tone, 2.0),
                    Inset::text(*control, Anchor::center(70.0), TypeScale::Caption, Tone::Text),
                ],
            }
        })
        .collect();

    ScreenSpec::new("daw", "Recording").steps([
        LayoutStep::Panel(Panel {
            radius: 0.0,
            ..panel(Frame::Surface, 0.0, 200.0, lanes.collect(), 220.0)
        }),
        LayoutStep::Row(Row {
            span: Span::Padded,
            columns: 4,
            offset: 0.0,
            cell_height: 80.0,
            row_pitch: 80.0,
            gutter: 0.0,
            radius: 0.0,
            cells: controls,
            advance: 100.0,
        }),
    ])
}

/// Beat browser: search, genre chips, trending list.
#[must_use]
pub fn beat_library() -> ScreenSpec {
    let chips = ["Hip-Hop", "Trap", "R&B", "Lo-Fi"]
        .iter()
        .enumerate()
        .map(|(index, genre)| {
            let (frame, tone) = if index == 0 {
                (Frame::Highlight, Tone::Primary)
            } else {
                (Frame::Outline, Tone::Secondary)
            };
            Cell {
                frame,
                insets: vec![Inset::text(*genre, Anchor::center(21.0), TypeScale::Caption, tone)],
            }
        })
        .collect();

    let beats = [
        ("Midnight Drive", "92 bpm · Kado", "2:45"),
        ("Gold Rush", "140 bpm · Mira", "3:10"),
        ("Overtime", "85 bpm · J. Vale", "2:58"),
    ]
    .into_iter()
    .map(|(name, meta, duration)| {
        card(
            56.0,
            vec![
                Inset::dot(Anchor::left(28.0, 28.0), 16.0, Tone::Primary),
                Inset::text(name, Anchor::left(56.0, 24.0), TypeScale::BodyStrong, Tone::Text),
                Inset::text(meta, Anchor::left(56.0, 42.0), TypeScale::Caption, Tone::Secondary),
                Inset::text(duration, Anchor::right(15.0, 33.0), TypeScale::Caption, Tone::Secondary),
            ],
            68.0,
        )
    });

    ScreenSpec::new("beat_library", "Beat Library")
        .steps([
            LayoutStep::Panel(Panel {
                radius: 20.0,
                ..panel(
                    Frame::Outline,
                    0.0,
                    40.0,
                    vec![Inset::text(
                        "Search beats",
                        Anchor::left(20.0, 25.0),
                        TypeScale::Body,
                        Tone::Secondary,
                    )],
                    60.0,
                )
            }),
            LayoutStep::Row(Row {
                span: Span::Padded,
                columns: 4,
                offset: 0.0,
                cell_height: 32.0,
                row_pitch: 32.0,
                gutter: 8.0,
                radius: 16.0,
                cells: chips,
                advance: 56.0,
            }),
            heading("Trending Beats", TypeScale::Title, 0.0),
        ])
        .steps(beats)
        .action("Import Beat")
}

/// Track uploads and recent upload list.
#[must_use]
pub fn content_management() -> ScreenSpec {
    let uploads = (1..=3).map(|n| {
        card(
            50.0,
            vec![Inset::text(
                format!("Track {n}"),
                Anchor::left(20.0, 30.0),
                TypeScale::Body,
                Tone::Text,
            )],
            60.0,
        )
    });

    ScreenSpec::new("content_management", "Content Management")
        .steps([
            LayoutStep::Panel(Panel {
                label: label("Upload Tracks", TypeScale::Title),
                ..panel(
                    Frame::Dashed,
                    20.0,
                    120.0,
                    vec![Inset::text(
                        "Drag and drop tracks here",
                        Anchor::center(50.0),
                        TypeScale::Body,
                        Tone::Secondary,
                    )],
                    160.0,
                )
            }),
            heading("Recent Uploads", TypeScale::Body, 0.0),
        ])
        .steps(uploads)
        .action("Set Distribution")
}

/// Release calendar and distribution channels.
#[must_use]
pub fn release_management() -> ScreenSpec {
    let channels = ["Streaming Services", "Social Media", "Website"].map(|channel| {
        LayoutStep::Panel(panel(
            Frame::Outline,
            20.0,
            40.0,
            vec![
                Inset::dot(Anchor::left(25.0, 20.0), 15.0, Tone::Surface),
                Inset::text(channel, Anchor::left(50.0, 25.0), TypeScale::Body, Tone::Text),
            ],
            50.0,
        ))
    });

    ScreenSpec::new("release_management", "Release Management")
        .steps([
            LayoutStep::Panel(Panel {
                label: label("Release Schedule", TypeScale::Title),
                ..panel(Frame::Surface, 20.0, 200.0, Vec::new(), 240.0)
            }),
            heading("Distribution Channels", TypeScale::Body, 0.0),
        ])
        .steps(channels)
        .action("Generate Preview")
}

/// Revenue card and metric trend cards.
#[must_use]
pub fn analytics_dashboard() -> ScreenSpec {
    let metrics = ["Streams", "Engagement", "Growth"].map(|metric| {
        card(
            60.0,
            vec![
                Inset::text(metric, Anchor::left(20.0, 30.0), TypeScale::Body, Tone::Text),
                Inset::Curve {
                    from: Anchor::left(30.0, 40.0),
                    c1: Anchor::left(130.0, 20.0),
                    c2: Anchor::left(180.0, 50.0),
                    to: Anchor::right(40.0, 30.0),
                },
            ],
            80.0,
        )
    });

    ScreenSpec::new("analytics_dashboard", "Analytics & Revenue")
        .steps([
            LayoutStep::Panel(Panel {
                label: label("Revenue Overview", TypeScale::Title),
                ..panel(
                    Frame::Surface,
                    20.0,
                    100.0,
                    vec![
                        Inset::text("$1,234", Anchor::left(20.0, 50.0), TypeScale::Figure, Tone::Text),
                        Inset::text(
                            "This Month",
                            Anchor::left(20.0, 70.0),
                            TypeScale::Caption,
                            Tone::Secondary,
                        ),
                    ],
                    140.0,
                )
            }),
            heading("Performance Metrics", TypeScale::Body, 0.0),
        ])
        .steps(metrics)
}

/// Fan messages and community stats.
#[must_use]
pub fn community_hub() -> ScreenSpec {
    let messages = (1..=3).map(|n| {
        card(
            60.0,
            vec![
                Inset::dot(Anchor::left(30.0, 30.0), 20.0, Tone::Avatar),
                Inset::text(
                    format!("Fan {n}"),
                    Anchor::left(60.0, 25.0),
                    TypeScale::BodyStrong,
                    Tone::Text,
                ),
                Inset::text(
                    "Message preview...",
                    Anchor::left(60.0, 45.0),
                    TypeScale::Caption,
                    Tone::Secondary,
                ),
            ],
            70.0,
        )
    });

    let stats = [("1.2K", "Followers"), ("156", "Messages"), ("3", "Events")]
        .into_iter()
        .map(|(value, caption)| Cell {
            frame: Frame::Surface,
            insets: vec![
                Inset::text(value, Anchor::center(40.0), TypeScale::Figure, Tone::Text),
                Inset::text(caption, Anchor::center(60.0), TypeScale::Caption, Tone::Secondary),
            ],
        })
        .collect();

    ScreenSpec::new("community_hub", "Community Hub")
        .step(heading("Recent Messages", TypeScale::Title, 0.0))
        .steps(messages)
        .steps([
            LayoutStep::Gap { by: 30.0 },
            heading("Community Stats", TypeScale::Body, 0.0),
            LayoutStep::Row(Row {
                span: Span::Padded,
                columns: 3,
                offset: 20.0,
                cell_height: 80.0,
                row_pitch: 80.0,
                gutter: 10.0,
                radius: 8.0,
                cells: stats,
                advance: 100.0,
            }),
        ])
        .action("Compose Message")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameterized_counts() {
        assert_eq!(document_upload(&["A"]).steps.len(), 2);
        assert_eq!(document_upload(&[]).steps.len(), 1);
        assert_eq!(documents(), document_upload(&REQUIRED_DOCUMENTS));

        let single = league_selection(&[Field::input("Name", "Your name")]);
        assert_eq!(single.steps.len(), 2);
        assert_eq!(league(), league_selection(&LEAGUE_FIELDS));
    }

    #[test]
    fn test_only_dropdowns_get_chevrons() {
        let chevrons = |field: Field<'_>| match &league_selection(&[field]).steps[0] {
            LayoutStep::Panel(panel) => panel
                .insets
                .iter()
                .filter(|inset| matches!(inset, Inset::Chevron { .. }))
                .count(),
            other => panic!("Expected panel, got {}", other.name()),
        };
        assert_eq!(chevrons(Field::dropdown("League", "Pick")), 1);
        assert_eq!(chevrons(Field::input("ID", "Type")), 0);
    }

    #[test]
    fn test_entry_screen_has_no_back() {
        assert!(!welcome().show_back);
        assert!(studio_dashboard().show_back);
    }

    #[test]
    fn test_actions() {
        assert_eq!(welcome().action.as_deref(), Some("Start Verification"));
        assert!(daw().action.is_none());
        assert!(analytics_dashboard().action.is_none());
        assert!(profile_setup().action.is_none());
    }
}
