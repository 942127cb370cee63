//! One-line text commands understood by the driver.
//!
//! ```text
//! began 1.57
//! changed -3.0
//! ended
//! set 150 animated
//! touch off
//! ```

use arcdial::{GesturePhase, GestureSample};
use std::str::FromStr;
use strum::EnumString;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseCommandError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command '{0}'")]
    Unknown(String),
    #[error("Missing {0}")]
    MissingArgument(&'static str),
    #[error("Invalid number '{0}'")]
    InvalidNumber(String),
    #[error("Unexpected argument '{0}'")]
    UnexpectedArgument(String),
}

/// Non-gesture commands; gesture lines start with a [`GesturePhase`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
enum Keyword {
    Set,
    Touch,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SliderCommand {
    Gesture(GestureSample),
    Set { value: f64, animated: bool },
    Touch(bool),
}

fn number(word: Option<&str>, what: &'static str) -> Result<f64, ParseCommandError> {
    let word = word.ok_or(ParseCommandError::MissingArgument(what))?;
    word.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ParseCommandError::InvalidNumber(word.to_string()))
}

impl FromStr for SliderCommand {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let head = words.next().ok_or(ParseCommandError::Empty)?;

        let command = if let Ok(phase) = GesturePhase::from_str(head) {
            let raw_angle = match phase {
                GesturePhase::Began | GesturePhase::Changed => number(words.next(), "angle")?,
                GesturePhase::Ended | GesturePhase::Cancelled => 0.0,
            };
            SliderCommand::Gesture(GestureSample::new(phase, raw_angle))
        } else {
            let keyword = Keyword::from_str(head)
                .map_err(|_| ParseCommandError::Unknown(head.to_string()))?;
            keyword_command(keyword, &mut words)?
        };

        match words.next() {
            Some(extra) => Err(ParseCommandError::UnexpectedArgument(extra.to_string())),
            None => Ok(command),
        }
    }
}

fn keyword_command<'a>(
    keyword: Keyword,
    words: &mut impl Iterator<Item = &'a str>,
) -> Result<SliderCommand, ParseCommandError> {
    match keyword {
        Keyword::Set => {
            let value = number(words.next(), "value")?;
            let animated = match words.next() {
                None => false,
                Some(w) if w.eq_ignore_ascii_case("animated") => true,
                Some(w) if w.eq_ignore_ascii_case("instant") => false,
                Some(w) => return Err(ParseCommandError::UnexpectedArgument(w.to_string())),
            };
            Ok(SliderCommand::Set { value, animated })
        }
        Keyword::Touch => match words.next() {
            Some(w) if w.eq_ignore_ascii_case("on") => Ok(SliderCommand::Touch(true)),
            Some(w) if w.eq_ignore_ascii_case("off") => Ok(SliderCommand::Touch(false)),
            Some(w) => Err(ParseCommandError::UnexpectedArgument(w.to_string())),
            None => Err(ParseCommandError::MissingArgument("on/off")),
        },
    }
}
