//! Gallows illustrations, one per failure stage.

use crate::types::STAGE_COUNT;

/// Rows in every illustration.
pub const GALLOWS_ROWS: usize = 7;

/// Indexed by failure count: stage 0 is the empty gallows, stage 6 the full figure.
pub const GALLOWS: [[&str; GALLOWS_ROWS]; STAGE_COUNT as usize] = [
    [
        "  +---+",
        "  |   |",
        "      |",
        "      |",
        "      |",
        "      |",
        "=========",
    ],
    [
        "  +---+",
        "  |   |",
        "  O   |",
        "      |",
        "      |",
        "      |",
        "=========",
    ],
    [
        "  +---+",
        "  |   |",
        "  O   |",
        "  |   |",
        "      |",
        "      |",
        "=========",
    ],
    [
        "  +---+",
        "  |   |",
        "  O   |",
        " /|   |",
        "      |",
        "      |",
        "=========",
    ],
    [
        "  +---+",
        "  |   |",
        "  O   |",
        " /|\\  |",
        "      |",
        "      |",
        "=========",
    ],
    [
        "  +---+",
        "  |   |",
        "  O   |",
        " /|\\  |",
        " /    |",
        "      |",
        "=========",
    ],
    [
        "  +---+",
        "  |   |",
        "  O   |",
        " /|\\  |",
        " / \\  |",
        "      |",
        "=========",
    ],
];

/// Illustration for a failure count, clamped to the last stage.
pub fn stage(failures: u8) -> &'static [&'static str; GALLOWS_ROWS] {
    let idx = (failures as usize).min(GALLOWS.len() - 1);
    &GALLOWS[idx]
}

/// Widest row of a stage, in columns.
pub fn stage_width(art: &[&str]) -> usize {
    art.iter().map(|row| row.chars().count()).max().unwrap_or(0)
}
