use crate::utils::error::{Result, RosterError};
use crate::utils::validation::parse_integer;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddStudent,
    AddSubjectAndMarks,
    ViewAll,
    Exit,
}

pub const CHOICE_PROMPT: &str = "Enter your choice: ";

impl TryFrom<i32> for MenuChoice {
    type Error = RosterError;

    fn try_from(choice: i32) -> Result<Self> {
        match choice {
            1 => Ok(MenuChoice::AddStudent),
            2 => Ok(MenuChoice::AddSubjectAndMarks),
            3 => Ok(MenuChoice::ViewAll),
            4 => Ok(MenuChoice::Exit),
            _ => Err(RosterError::ChoiceOutOfRange { choice }),
        }
    }
}

impl FromStr for MenuChoice {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self> {
        MenuChoice::try_from(parse_integer(s)?)
    }
}

/// The full menu, ending in the choice prompt (no trailing newline).
pub fn render(banner: &str) -> String {
    format!(
        "\n{}\n1. Add Student\n2. Add Subject and Marks for a Student\n3. View All Students\n4. Exit\n{}",
        banner, CHOICE_PROMPT
    )
}
