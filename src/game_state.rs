//! Menu and round state machines for a hangman session.
//!
//! # State Machine
//! - Menu: `AwaitingMenuChoice` → `Playing` (on `Y`) or `Exiting` (on `N`)
//! - Round: `InProgress` → `Won` | `Lost`, after which the session is reset
//!   and control returns to the menu.

use crate::error::RoundError;
use crate::{debug_log, info_log};
use rand::Rng;
use std::io;

pub const MAX_ERROR_COUNT: usize = 6;
pub const MASK_CHAR: char = '*';

/// Letters only: alphabetic characters that are not letter numbers such as `Ⅻ`.
pub fn is_letter(c: char) -> bool {
    c.is_alphabetic() && !c.is_numeric()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    AwaitingMenuChoice,
    Playing,
    Exiting,
}

impl MenuState {
    /// Case-insensitive: only a line that is exactly `Y` or `N` is recognised.
    pub fn from_input(input: &str) -> Self {
        match input.to_uppercase().as_str() {
            "Y" => Self::Playing,
            "N" => Self::Exiting,
            _ => Self::AwaitingMenuChoice,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    InProgress,
    Won,
    Lost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Letter occurs in the secret word; `revealed` positions were opened.
    Hit { revealed: usize },
    Miss,
    NotALetter,
    AlreadyUsed,
    /// No round is running, or the current one is already decided.
    RoundOver,
}

impl GuessOutcome {
    pub fn is_accepted(self) -> bool {
        matches!(self, Self::Hit { .. } | Self::Miss)
    }
}

/// State of a single round. Reset to `Session::default()` between rounds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    secret_word: Vec<char>,
    masked_word: Vec<char>,
    used_letters: Vec<char>,
    error_count: usize,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick a random word from `words` and start a round with it.
    pub fn prepare<R: Rng>(&mut self, words: &[String], rng: &mut R) -> Result<(), RoundError> {
        if words.is_empty() {
            return Err(RoundError::EmptyWordList);
        }
        let index = rng.gen_range(0..words.len());
        self.start_with(&words[index]);
        Ok(())
    }

    /// Start a round with a known word.
    pub fn start_with(&mut self, word: &str) {
        self.reset();
        self.secret_word = word.to_uppercase().chars().collect();
        self.masked_word = vec![MASK_CHAR; self.secret_word.len()];
    }

    pub fn guess(&mut self, input: char) -> GuessOutcome {
        if self.round_state() != RoundState::InProgress || !self.is_active() {
            return GuessOutcome::RoundOver;
        }

        let letter = input.to_uppercase().next().unwrap_or(input);
        if !is_letter(letter) {
            return GuessOutcome::NotALetter;
        }
        if self.used_letters.contains(&letter) {
            return GuessOutcome::AlreadyUsed;
        }
        self.used_letters.push(letter);

        let mut revealed = 0;
        for (secret, masked) in self.secret_word.iter().zip(self.masked_word.iter_mut()) {
            if *secret == letter {
                *masked = letter;
                revealed += 1;
            }
        }

        if revealed > 0 {
            GuessOutcome::Hit { revealed }
        } else {
            self.error_count += 1;
            GuessOutcome::Miss
        }
    }

    pub fn round_state(&self) -> RoundState {
        if self.is_active() && self.masked_word == self.secret_word {
            RoundState::Won
        } else if self.error_count > MAX_ERROR_COUNT - 1 {
            RoundState::Lost
        } else {
            RoundState::InProgress
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_active(&self) -> bool {
        !self.secret_word.is_empty()
    }

    pub fn secret_word(&self) -> String {
        self.secret_word.iter().collect()
    }

    pub fn masked_word(&self) -> String {
        self.masked_word.iter().collect()
    }

    pub fn used_letters(&self) -> &[char] {
        &self.used_letters
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }
}

/// Console boundary of the game. `read_*` return `Ok(None)` once input is exhausted.
pub trait GameInterface {
    fn read_menu_choice(&mut self) -> io::Result<Option<String>>;
    fn read_letter(&mut self) -> io::Result<Option<String>>;
    fn display_unrecognized_action(&mut self) -> io::Result<()>;
    fn display_game_start(&mut self) -> io::Result<()>;
    fn display_exit_message(&mut self) -> io::Result<()>;
    fn display_empty_word_list(&mut self) -> io::Result<()>;
    fn display_masked_word(&mut self, masked_word: &str) -> io::Result<()>;
    fn display_guess_feedback(&mut self, outcome: GuessOutcome) -> io::Result<()>;
    fn display_round_state(&mut self, session: &Session) -> io::Result<()>;
    fn display_win(&mut self) -> io::Result<()>;
    fn display_loss(&mut self, secret_word: &str) -> io::Result<()>;
}

/// Run the menu until the player exits or input runs out.
pub fn run_menu<I: GameInterface, R: Rng>(
    words: &[String],
    interface: &mut I,
    rng: &mut R,
) -> io::Result<()> {
    let mut session = Session::new();

    loop {
        let Some(input) = interface.read_menu_choice()? else {
            info_log!("Input closed at menu, exiting");
            return Ok(());
        };

        match MenuState::from_input(&input) {
            MenuState::AwaitingMenuChoice => interface.display_unrecognized_action()?,
            MenuState::Playing => {
                interface.display_game_start()?;
                if play_round(words, &mut session, interface, rng)? == Some(RoundState::InProgress)
                {
                    info_log!("Input closed during round, exiting");
                    return Ok(());
                }
            }
            MenuState::Exiting => {
                interface.display_exit_message()?;
                return Ok(());
            }
        }
    }
}

/// Play one round.
///
/// Returns `None` if the round could not start (empty word list), the final
/// state otherwise. `Some(RoundState::InProgress)` means input ran out
/// mid-round. The session is reset before returning in every case.
pub fn play_round<I: GameInterface, R: Rng>(
    words: &[String],
    session: &mut Session,
    interface: &mut I,
    rng: &mut R,
) -> io::Result<Option<RoundState>> {
    if let Err(e) = session.prepare(words, rng) {
        log::warn!("Cannot start round: {e}");
        interface.display_empty_word_list()?;
        return Ok(None);
    }
    info_log!("Round started, word length {}", session.secret_word.len());
    interface.display_masked_word(&session.masked_word())?;

    loop {
        let Some(line) = interface.read_letter()? else {
            session.reset();
            return Ok(Some(RoundState::InProgress));
        };

        let outcome = match line.chars().next() {
            Some(c) => session.guess(c),
            None => GuessOutcome::NotALetter,
        };
        debug_log!("Guess {:?} -> {:?}", line, outcome);
        interface.display_guess_feedback(outcome)?;
        if !outcome.is_accepted() {
            continue;
        }

        let state = session.round_state();
        interface.display_round_state(session)?;
        match state {
            RoundState::InProgress => continue,
            RoundState::Won => interface.display_win()?,
            RoundState::Lost => interface.display_loss(&session.secret_word())?,
        }

        info_log!("Round finished: {:?}", state);
        session.reset();
        return Ok(Some(state));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn session_with(word: &str) -> Session {
        let mut session = Session::new();
        session.start_with(word);
        session
    }

    #[test]
    fn test_menu_state_from_input() {
        assert_eq!(MenuState::from_input("Y"), MenuState::Playing);
        assert_eq!(MenuState::from_input("y"), MenuState::Playing);
        assert_eq!(MenuState::from_input("N"), MenuState::Exiting);
        assert_eq!(MenuState::from_input("n"), MenuState::Exiting);
        assert_eq!(MenuState::from_input(""), MenuState::AwaitingMenuChoice);
        assert_eq!(MenuState::from_input("yes"), MenuState::AwaitingMenuChoice);
        assert_eq!(MenuState::from_input(" Y"), MenuState::AwaitingMenuChoice);
        assert_eq!(MenuState::from_input("X"), MenuState::AwaitingMenuChoice);
    }

    #[test]
    fn test_start_with_builds_mask() {
        let session = session_with("cat");
        assert_eq!(session.secret_word(), "CAT");
        assert_eq!(session.masked_word(), "***");
        assert!(session.used_letters().is_empty());
        assert_eq!(session.error_count(), 0);
        assert_eq!(session.round_state(), RoundState::InProgress);
    }

    #[test]
    fn test_start_with_cyrillic() {
        let session = session_with("кот");
        assert_eq!(session.secret_word(), "КОТ");
        assert_eq!(session.masked_word().chars().count(), 3);
    }

    #[test]
    fn test_cat_progression() {
        let mut session = session_with("CAT");

        assert_eq!(session.guess('c'), GuessOutcome::Hit { revealed: 1 });
        assert_eq!(session.masked_word(), "C**");
        assert_eq!(session.guess('A'), GuessOutcome::Hit { revealed: 1 });
        assert_eq!(session.masked_word(), "CA*");
        assert_eq!(session.guess('Z'), GuessOutcome::Miss);
        assert_eq!(session.masked_word(), "CA*");
        assert_eq!(session.error_count(), 1);
        assert_eq!(session.round_state(), RoundState::InProgress);
        assert_eq!(session.guess('T'), GuessOutcome::Hit { revealed: 1 });
        assert_eq!(session.masked_word(), "CAT");
        assert_eq!(session.round_state(), RoundState::Won);
        assert_eq!(session.used_letters(), &['C', 'A', 'Z', 'T']);
    }

    #[test]
    fn test_hit_reveals_all_positions() {
        let mut session = session_with("banana");
        assert_eq!(session.guess('a'), GuessOutcome::Hit { revealed: 3 });
        assert_eq!(session.masked_word(), "*A*A*A");
        assert_eq!(session.error_count(), 0);
    }

    #[test]
    fn test_rejected_guesses_do_not_mutate() {
        let mut session = session_with("DOG");
        session.guess('Q');
        let before = session.clone();

        assert_eq!(session.guess('7'), GuessOutcome::NotALetter);
        assert_eq!(session.guess('!'), GuessOutcome::NotALetter);
        assert_eq!(session.guess(' '), GuessOutcome::NotALetter);
        assert_eq!(session.guess('q'), GuessOutcome::AlreadyUsed);
        assert_eq!(session, before);
    }

    #[test]
    fn test_letter_numbers_are_not_letters() {
        let mut session = session_with("DOG");
        assert_eq!(session.guess('Ⅻ'), GuessOutcome::NotALetter);
        assert_eq!(session.guess('ⅳ'), GuessOutcome::NotALetter);
        assert_eq!(session.error_count(), 0);
        assert!(session.used_letters().is_empty());

        assert!(is_letter('d'));
        assert!(is_letter('Ж'));
        assert!(!is_letter('7'));
        assert!(!is_letter('\u{30c}'));
    }

    #[test]
    fn test_loss_boundary() {
        let mut session = session_with("DOG");
        for letter in ['Q', 'W', 'X', 'Z', 'J'] {
            assert_eq!(session.guess(letter), GuessOutcome::Miss);
            assert_eq!(session.round_state(), RoundState::InProgress);
        }
        assert_eq!(session.error_count(), 5);

        assert_eq!(session.guess('V'), GuessOutcome::Miss);
        assert_eq!(session.error_count(), MAX_ERROR_COUNT);
        assert_eq!(session.round_state(), RoundState::Lost);
    }

    #[test]
    fn test_guess_after_round_over() {
        let mut session = session_with("A");
        session.guess('A');
        assert_eq!(session.round_state(), RoundState::Won);
        assert_eq!(session.guess('B'), GuessOutcome::RoundOver);
        assert_eq!(session.error_count(), 0);

        let mut idle = Session::new();
        assert_eq!(idle.guess('A'), GuessOutcome::RoundOver);
        assert_eq!(idle.round_state(), RoundState::InProgress);
    }

    #[test]
    fn test_error_count_never_exceeds_max() {
        let mut session = session_with("DOG");
        for letter in "QWXZJVKLMNP".chars() {
            session.guess(letter);
        }
        assert_eq!(session.error_count(), MAX_ERROR_COUNT);
    }

    #[test]
    fn test_mask_length_invariant() {
        let mut session = session_with("hangman");
        for letter in "hxnq1am".chars() {
            session.guess(letter);
            assert_eq!(session.masked_word().len(), session.secret_word().len());
        }
    }

    #[test]
    fn test_prepare_empty_word_list() {
        let mut session = Session::new();
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(session.prepare(&[], &mut rng), Err(RoundError::EmptyWordList));
        assert!(!session.is_active());
    }

    #[test]
    fn test_prepare_selects_from_list() {
        let words = vec!["cat".to_string(), "dog".to_string(), "fox".to_string()];
        let mut rng = StdRng::seed_from_u64(42);
        let mut session = Session::new();
        for _ in 0..20 {
            session.prepare(&words, &mut rng).unwrap();
            assert!(words.contains(&session.secret_word().to_lowercase()));
            assert_eq!(session.masked_word(), "***");
        }
    }

    #[test]
    fn test_prepare_resets_previous_round() {
        let words = vec!["dog".to_string()];
        let mut rng = StdRng::seed_from_u64(1);
        let mut session = session_with("CAT");
        session.guess('Z');
        session.prepare(&words, &mut rng).unwrap();
        assert_eq!(session.error_count(), 0);
        assert!(session.used_letters().is_empty());
    }

    #[test]
    fn test_reset() {
        let mut session = session_with("CAT");
        session.guess('C');
        session.guess('X');
        session.reset();
        assert_eq!(session, Session::default());
    }

    #[test]
    fn test_outcome_is_accepted() {
        assert!(GuessOutcome::Hit { revealed: 1 }.is_accepted());
        assert!(GuessOutcome::Miss.is_accepted());
        assert!(!GuessOutcome::NotALetter.is_accepted());
        assert!(!GuessOutcome::AlreadyUsed.is_accepted());
        assert!(!GuessOutcome::RoundOver.is_accepted());
    }
}
