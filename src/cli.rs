use crate::art::{HANGMAN_STAGES, hangman_stage};
use crate::game_state::{GameInterface, GuessOutcome, MAX_ERROR_COUNT, Session};
use crate::wordbank::DEFAULT_WORDS_PATH;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Console hangman
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited word list
    #[arg(short = 'i', long = "input", default_value = DEFAULT_WORDS_PATH)]
    pub words_path: PathBuf,

    /// Seed for word selection, for reproducible games
    #[arg(short = 's', long = "seed")]
    pub seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

pub mod messages {
    pub const MENU_HEADER: &str = "\nВыберите действие:";
    pub const MENU_START: &str = "Y - начать игру";
    pub const MENU_EXIT: &str = "N - выйти";
    pub const UNRECOGNIZED_ACTION: &str = "\nНе удалось определить действие. Попробуйте снова";
    pub const GAME_START: &str = "\nНачинаем играть";
    pub const EXITING: &str = "\nВыходим из игры";
    pub const EMPTY_WORD_LIST: &str = "Ошибка. Файл пуст.";
    pub const ENTER_LETTER: &str = "\nВведите букву:";
    pub const LETTER_PRESENT: &str = "\nЕсть такая буква";
    pub const LETTER_ABSENT: &str = "\nТакой буквы нет.";
    pub const INVALID_CHARACTER: &str = "\nНеверный символ. Можно вводить только буквы.";
    pub const LETTER_ALREADY_USED: &str = "\nБуква уже была введена ранее.";
    pub const SEPARATOR: &str = "==============================";
    pub const SECRET_WORD_LABEL: &str = "Загаданное слово: ";
    pub const USED_LETTERS_LABEL: &str = "Использованные буквы: ";
    pub const ERRORS_LABEL: &str = "Ошибок: ";
    pub const ERRORS_OF: &str = " из ";
    pub const CURRENT_STATE_LABEL: &str = "Текущее состояние: ";
    pub const WIN: &str = "\nПоздравляем! Вы выиграли!";
    pub const LOSS: &str = "\nИгра закончена. Вы проиграли!";
    pub const REVEALED_WORD_LABEL: &str = "Было загадано слово - ";
    pub const PLAY_AGAIN: &str = "Предлагаем сыграть еще раз";
}

use messages::*;

/// Console implementation of the `GameInterface` trait
/// over any line reader and output writer.
pub struct CliInterface<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> CliInterface<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    /// One line without its terminator; `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut input = String::new();
        if self.reader.read_line(&mut input)? == 0 {
            return Ok(None);
        }
        let line = input.trim_end_matches(|c: char| c == '\n' || c == '\r');
        Ok(Some(line.to_string()))
    }
}

impl<R: BufRead, W: Write> GameInterface for CliInterface<R, W> {
    fn read_menu_choice(&mut self) -> io::Result<Option<String>> {
        writeln!(self.writer, "{MENU_HEADER}")?;
        writeln!(self.writer, "{MENU_START}")?;
        writeln!(self.writer, "{MENU_EXIT}")?;
        self.writer.flush()?;
        self.read_line()
    }

    fn read_letter(&mut self) -> io::Result<Option<String>> {
        writeln!(self.writer, "{ENTER_LETTER}")?;
        self.writer.flush()?;
        self.read_line()
    }

    fn display_unrecognized_action(&mut self) -> io::Result<()> {
        writeln!(self.writer, "{UNRECOGNIZED_ACTION}")
    }

    fn display_game_start(&mut self) -> io::Result<()> {
        writeln!(self.writer, "{GAME_START}")
    }

    fn display_exit_message(&mut self) -> io::Result<()> {
        writeln!(self.writer, "{EXITING}")
    }

    fn display_empty_word_list(&mut self) -> io::Result<()> {
        writeln!(self.writer, "{EMPTY_WORD_LIST}")
    }

    fn display_masked_word(&mut self, masked_word: &str) -> io::Result<()> {
        writeln!(self.writer, "{SECRET_WORD_LABEL}{masked_word}")
    }

    fn display_guess_feedback(&mut self, outcome: GuessOutcome) -> io::Result<()> {
        let message = match outcome {
            GuessOutcome::Hit { .. } => LETTER_PRESENT,
            GuessOutcome::Miss => LETTER_ABSENT,
            GuessOutcome::NotALetter => INVALID_CHARACTER,
            GuessOutcome::AlreadyUsed => LETTER_ALREADY_USED,
            GuessOutcome::RoundOver => return Ok(()),
        };
        writeln!(self.writer, "{message}")
    }

    fn display_round_state(&mut self, session: &Session) -> io::Result<()> {
        let used_letters = session
            .used_letters()
            .iter()
            .map(char::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        let error_count = session.error_count();
        let figure = hangman_stage(error_count).unwrap_or_else(|| {
            log::warn!("Error count {error_count} is past the last gallows stage");
            HANGMAN_STAGES[MAX_ERROR_COUNT]
        });

        writeln!(self.writer, "\n{SEPARATOR}")?;
        writeln!(self.writer, "\n{SECRET_WORD_LABEL}{}", session.masked_word())?;
        writeln!(self.writer, "{USED_LETTERS_LABEL}{used_letters}")?;
        writeln!(self.writer, "{ERRORS_LABEL}{error_count}{ERRORS_OF}{MAX_ERROR_COUNT}")?;
        writeln!(self.writer, "{CURRENT_STATE_LABEL}")?;
        writeln!(self.writer, "\n{figure}")?;
        writeln!(self.writer, "{SEPARATOR}")
    }

    fn display_win(&mut self) -> io::Result<()> {
        writeln!(self.writer, "{WIN}")?;
        writeln!(self.writer, "{PLAY_AGAIN}")
    }

    fn display_loss(&mut self, secret_word: &str) -> io::Result<()> {
        writeln!(self.writer, "{LOSS}")?;
        writeln!(self.writer, "{REVEALED_WORD_LABEL}{secret_word}")?;
        writeln!(self.writer, "{PLAY_AGAIN}")
    }
}
