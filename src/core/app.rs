use crate::config::RosterConfig;
use crate::core::console::Console;
use crate::core::menu::{self, MenuChoice, CHOICE_PROMPT};
use crate::domain::model::Student;
use crate::domain::registry::{names_match, Registry};
use crate::utils::error::{Result, RosterError};
use crate::utils::validation::parse_integer;
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// The command loop. Owns the registry and the console for the whole
/// session; every mutation of the roster happens here.
pub struct App<R, W, E> {
    registry: Registry,
    console: Console<R, W, E>,
    config: RosterConfig,
}

impl<R: BufRead, W: Write, E: Write> App<R, W, E> {
    pub fn new(console: Console<R, W, E>, config: RosterConfig) -> Self {
        Self {
            registry: Registry::new(),
            console,
            config,
        }
    }

    /// Read-only view of the roster, for callers embedding the loop.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Hands back the roster and console once the session is over.
    pub fn into_parts(self) -> (Registry, Console<R, W, E>) {
        (self.registry, self.console)
    }

    /// Runs until the user picks Exit. Closed input surfaces as
    /// `InputClosed`; bad lines of input never end the loop.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.console.print(&menu::render(self.config.banner()))?;
            let choice = self.read_choice()?;
            tracing::debug!("Menu choice: {:?}", choice);
            if self.dispatch(choice)? == Flow::Exit {
                return Ok(());
            }
        }
    }

    /// Re-prompts until a line parses to a menu entry. No retry limit.
    pub fn read_choice(&mut self) -> Result<MenuChoice> {
        loop {
            let line = self.console.read_line()?;
            match line.parse::<MenuChoice>() {
                Ok(choice) => return Ok(choice),
                Err(e) if e.is_recoverable() => {
                    tracing::debug!("Rejected menu input: {}", e);
                    if let RosterError::ChoiceOutOfRange { .. } = e {
                        self.console
                            .say("Invalid input. Please enter a number between 1 and 4.")?;
                        self.console.print(CHOICE_PROMPT)?;
                    } else {
                        self.console.print("Invalid input. Please enter a number: ")?;
                    }
                }
                Err(e) => return Err(e),
            }
        }
    }

    pub fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow> {
        match choice {
            MenuChoice::AddStudent => self.add_student()?,
            MenuChoice::AddSubjectAndMarks => self.add_subject_and_marks()?,
            MenuChoice::ViewAll => self.view_all()?,
            MenuChoice::Exit => {
                self.console.say("Exiting application.")?;
                tracing::info!("Session ended with {} students", self.registry.len());
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }

    pub fn add_student(&mut self) -> Result<()> {
        let name = self.console.prompt("Enter student name: ")?;
        self.registry.add(Student::new(name.as_str()));
        tracing::info!("Added student {:?}", name);
        self.console
            .say(&format!("Student {} added successfully.", name))?;
        Ok(())
    }

    pub fn add_subject_and_marks(&mut self) -> Result<()> {
        let Self {
            registry,
            console,
            config,
        } = self;

        if registry.is_empty() {
            console.say("No students available. Please add a student first.")?;
            return Ok(());
        }

        let name = console.prompt("Enter student name: ")?;
        let Some(student) = registry.find_by_name_mut(&name) else {
            tracing::debug!("No student matches {:?}", name);
            console.say("Student not found.")?;
            return Ok(());
        };

        let subject_prompt = format!(
            "Enter subject (or '{}' to finish): ",
            config.done_keyword()
        );
        loop {
            let subject = console.prompt(&subject_prompt)?;
            if names_match(&subject, config.done_keyword()) {
                return Ok(());
            }

            let raw_mark = console.prompt(&format!("Enter marks for {}: ", subject))?;
            let added = parse_integer(&raw_mark)
                .and_then(|mark| student.add_entry_capped(&subject, mark, config.max_mark()));

            match added {
                Ok(()) => {
                    tracing::debug!("{}: {} = {}", student.name(), subject, raw_mark);
                    console.say(&format!("Subject and marks added for {}", student.name()))?;
                }
                Err(e) if e.is_recoverable() => {
                    if let RosterError::InvalidMark { .. } = e {
                        tracing::warn!("Rejected mark: {}", e);
                        console.report_error(&format!("Error: {}", e))?;
                    } else {
                        console.say("Invalid input for marks. Please enter a valid number.")?;
                    }
                }
                Err(e) => return Err(e),
            }
        }
    }

    pub fn view_all(&mut self) -> Result<()> {
        if self.registry.is_empty() {
            self.console.say("No students available.")?;
            return Ok(());
        }
        self.console.say("\n--- Student Records ---")?;
        for student in self.registry.iter() {
            self.console.say(&student.describe())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    type TestApp = App<Cursor<Vec<u8>>, Vec<u8>, Vec<u8>>;

    fn app(input: &str) -> TestApp {
        let console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), Vec::new());
        App::new(console, RosterConfig::default())
    }

    fn output(app: TestApp) -> (String, String) {
        let (_, console) = app.into_parts();
        let (_, out, err) = console.into_parts();
        (
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_read_choice_retries_until_valid() {
        let mut app = app("abc\n9\n3\n");
        assert_eq!(app.read_choice().unwrap(), MenuChoice::ViewAll);

        let (out, _) = output(app);
        assert_eq!(
            out,
            "Invalid input. Please enter a number: \
             Invalid input. Please enter a number between 1 and 4.\n\
             Enter your choice: "
        );
    }

    #[test]
    fn test_read_choice_stops_retrying_when_input_closes() {
        let mut app = app("abc\n0\n");
        assert!(matches!(app.read_choice(), Err(RosterError::InputClosed)));

        let (out, _) = output(app);
        assert!(out.ends_with("between 1 and 4.\nEnter your choice: "));
    }

    #[test]
    fn test_closed_input_at_mark_prompt_is_not_reported_as_bad_mark() {
        let mut app = app("Bob\nBob\nMath\n");
        app.add_student().unwrap();
        assert!(matches!(
            app.add_subject_and_marks(),
            Err(RosterError::InputClosed)
        ));

        let (out, err) = output(app);
        assert!(!out.contains("Invalid input for marks"));
        assert!(err.is_empty());
    }

    #[test]
    fn test_add_student_keeps_raw_name() {
        let mut app = app("  Bob \n");
        app.add_student().unwrap();
        assert_eq!(app.registry().iter().next().unwrap().name(), "  Bob ");
    }

    #[test]
    fn test_add_marks_on_empty_registry() {
        let mut app = app("");
        app.add_subject_and_marks().unwrap();
        assert!(app.registry().is_empty());

        let (out, _) = output(app);
        assert_eq!(out, "No students available. Please add a student first.\n");
    }

    #[test]
    fn test_add_marks_for_unknown_student() {
        let mut app = app("Bob\nZed\n");
        app.add_student().unwrap();
        app.add_subject_and_marks().unwrap();

        let (out, _) = output(app);
        assert!(out.ends_with("Enter student name: Student not found.\n"));
    }

    #[test]
    fn test_bad_mark_moves_on_to_next_subject() {
        let mut app = app("Bob\nbob\nMath\nninety\nArt\n70\nDONE\n");
        app.add_student().unwrap();
        app.add_subject_and_marks().unwrap();

        let student = app.registry().find_by_name("Bob").unwrap();
        assert_eq!(student.entries().len(), 1);
        assert_eq!(student.entries()[0].subject, "Art");

        let (out, _) = output(app);
        assert!(out.contains("Enter marks for Math: Invalid input for marks. Please enter a valid number.\n"));
        assert!(out.contains("Subject and marks added for Bob\n"));
    }

    #[test]
    fn test_rejected_mark_goes_to_error_stream() {
        let mut app = app("Bob\nBob\nScience\n150\ndone\n");
        app.add_student().unwrap();
        app.add_subject_and_marks().unwrap();

        assert!(app.registry().find_by_name("bob").unwrap().entries().is_empty());
        let (_, err) = output(app);
        assert_eq!(
            err,
            "Error: Mark for Science cannot be greater than 100.  Entered mark was: 150\n"
        );
    }

    #[test]
    fn test_view_all_empty() {
        let mut app = app("");
        app.view_all().unwrap();
        let (out, _) = output(app);
        assert_eq!(out, "No students available.\n");
    }

    #[test]
    fn test_exit_stops_the_loop() {
        let mut app = app("4\n");
        app.run().unwrap();
        let (out, _) = output(app);
        assert!(out.ends_with("Enter your choice: Exiting application.\n"));
    }
}
