//! Subject color assignment.
//!
//! A subject gets the colors of the first keyword it contains, compared
//! case-insensitively. The table is an ordered slice and the first match
//! wins, so "Python LAB" takes the python colors rather than the lab ones.

use shared::{Rgb, SubjectColor};

const BLUE: SubjectColor = SubjectColor {
    background: Rgb(219, 234, 254),
    text: Rgb(29, 78, 216),
    border: Rgb(147, 197, 253),
};

const PURPLE: SubjectColor = SubjectColor {
    background: Rgb(243, 232, 255),
    text: Rgb(126, 34, 206),
    border: Rgb(216, 180, 254),
};

const PINK: SubjectColor = SubjectColor {
    background: Rgb(252, 231, 243),
    text: Rgb(190, 24, 93),
    border: Rgb(249, 168, 212),
};

const GREEN: SubjectColor = SubjectColor {
    background: Rgb(220, 252, 231),
    text: Rgb(21, 128, 61),
    border: Rgb(134, 239, 172),
};

const ORANGE: SubjectColor = SubjectColor {
    background: Rgb(255, 237, 213),
    text: Rgb(194, 65, 12),
    border: Rgb(253, 186, 116),
};

const TEAL: SubjectColor = SubjectColor {
    background: Rgb(204, 251, 241),
    text: Rgb(15, 118, 110),
    border: Rgb(94, 234, 212),
};

const RED: SubjectColor = SubjectColor {
    background: Rgb(254, 226, 226),
    text: Rgb(185, 28, 28),
    border: Rgb(252, 165, 165),
};

const AMBER: SubjectColor = SubjectColor {
    background: Rgb(254, 243, 199),
    text: Rgb(180, 83, 9),
    border: Rgb(252, 211, 77),
};

/// Colors for subjects that match no keyword
pub const DEFAULT_SUBJECT_COLOR: SubjectColor = SubjectColor {
    background: Rgb(241, 245, 249),
    text: Rgb(51, 65, 85),
    border: Rgb(203, 213, 225),
};

/// Lowercase keywords in match order
pub const SUBJECT_COLORS: &[(&str, SubjectColor)] = &[
    ("lunch", AMBER),
    ("python", BLUE),
    ("web", PURPLE),
    ("eng", PINK),
    ("kan", GREEN),
    ("lab", TEAL),
    ("library", ORANGE),
    ("sport", RED),
    ("mentor", TEAL),
    ("seminar", PURPLE),
    ("math", BLUE),
    ("physics", ORANGE),
    ("chem", GREEN),
    ("bio", GREEN),
    ("hist", AMBER),
];

/// Colors for a subject label
pub fn color_for(subject: &str) -> SubjectColor {
    let subject = subject.to_lowercase();
    SUBJECT_COLORS
        .iter()
        .find(|(keyword, _)| subject.contains(keyword))
        .map(|(_, color)| *color)
        .unwrap_or(DEFAULT_SUBJECT_COLOR)
}
