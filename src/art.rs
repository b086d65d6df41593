//! Gallows figures shown after each guess, one per error count.

use crate::game_state::MAX_ERROR_COUNT;

pub const HANGMAN_STAGES: [&str; MAX_ERROR_COUNT + 1] = [
    "  -----\n  |   |\n      |\n      |\n      |\n      |\n=========",
    "  -----\n  |   |\n  O   |\n      |\n      |\n      |\n=========",
    "  -----\n  |   |\n  O   |\n  |   |\n      |\n      |\n=========",
    "  -----\n  |   |\n  O   |\n /|   |\n      |\n      |\n=========",
    "  -----\n  |   |\n  O   |\n /|\\  |\n      |\n      |\n=========",
    "  -----\n  |   |\n  O   |\n /|\\  |\n /    |\n      |\n=========",
    "  -----\n  |   |\n  O   |\n /|\\  |\n / \\  |\n      |\n=========",
];

/// Figure for the given error count, or `None` past `MAX_ERROR_COUNT`.
pub fn hangman_stage(error_count: usize) -> Option<&'static str> {
    HANGMAN_STAGES.get(error_count).copied()
}
