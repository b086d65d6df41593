// Library interface for hangman
// This allows integration tests to drive the game without a terminal

pub mod art;
pub mod cli;
pub mod error;
pub mod game_state;
pub mod logging;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use error::{RoundError, WordSourceError};
pub use game_state::{
    GameInterface, GuessOutcome, MAX_ERROR_COUNT, MenuState, RoundState, Session, play_round,
    run_menu,
};
pub use wordbank::{load_words_from_file, load_words_from_str, load_words_or_empty};
