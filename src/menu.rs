use crate::actions::{Exit, LoadData, MenuAction, PrintCourse, PrintCourseList};
use crate::session::Session;
use anyhow::{Context, Result};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

/// Source of user input lines.
///
/// `Ok(None)` means the user is gone (end of input or Ctrl-C) and the menu
/// should stop.
pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Line editor backed input with history, used for the real terminal.
struct Terminal {
    editor: DefaultEditor,
}

impl Terminal {
    fn new() -> Result<Self> {
        let editor = DefaultEditor::new().context("cannot initialize line editor")?;
        Ok(Self { editor })
    }
}

impl LineSource for Terminal {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    self.editor.add_history_entry(line.as_str())?;
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(err).context("cannot read from terminal"),
        }
    }
}

/// What the menu does after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flow {
    Continue,
    Exit,
}

/// The numbered menu options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Load,
    PrintList,
    PrintCourse,
    Exit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid choice. Please enter a valid option from the menu.")]
pub struct InvalidChoice;

impl FromStr for MenuChoice {
    type Err = InvalidChoice;

    /// Accepts the option number with optional surrounding whitespace.
    /// Leading zeros are fine (`"01"` is option 1); anything non-numeric is not.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidChoice);
        }
        match input.parse::<u32>() {
            Ok(1) => Ok(MenuChoice::Load),
            Ok(2) => Ok(MenuChoice::PrintList),
            Ok(3) => Ok(MenuChoice::PrintCourse),
            Ok(9) => Ok(MenuChoice::Exit),
            _ => Err(InvalidChoice),
        }
    }
}

const MENU_TEXT: &str = "\nMenu:\n\
    1. Load Data Structure\n\
    2. Print Course List\n\
    3. Print Course\n\
    9. Exit\n";

/// Interactive front end over a [`Session`].
///
/// Example
/// ```
/// use course_catalog::{LineSource, Menu};
///
/// struct Quit;
/// impl LineSource for Quit {
///     fn read_line(&mut self, _prompt: &str) -> anyhow::Result<Option<String>> {
///         Ok(Some("9".to_string()))
///     }
/// }
///
/// let mut out = Vec::new();
/// Menu::default().run(&mut Quit, &mut out).unwrap();
/// assert!(String::from_utf8(out).unwrap().ends_with("Exiting program. Goodbye!\n"));
/// ```
#[derive(Debug, Default)]
pub struct Menu {
    session: Session,
}

impl Menu {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Load `path` without prompting, reporting the result like menu option 1.
    pub fn preload(&mut self, path: &Path, out: &mut dyn Write) -> Result<()> {
        let action = LoadData {
            path: Some(path.to_path_buf()),
        };
        let mut no_input = NoInput;
        action.execute(&mut no_input, out, &mut self.session)?;
        Ok(())
    }

    /// Show the menu and dispatch choices until the user exits or input ends.
    pub fn run(&mut self, input: &mut dyn LineSource, out: &mut dyn Write) -> Result<()> {
        loop {
            out.write_all(MENU_TEXT.as_bytes())?;
            out.flush()?;

            let Some(line) = input.read_line("Enter choice: ")? else {
                debug!("input closed, leaving menu");
                break;
            };

            let flow = match line.parse::<MenuChoice>() {
                Ok(choice) => {
                    debug!(?choice, "menu choice");
                    self.dispatch(choice, input, out)?
                }
                Err(e) => {
                    writeln!(out, "{}\n", e)?;
                    Flow::Continue
                }
            };
            out.flush()?;

            if flow == Flow::Exit {
                break;
            }
        }
        Ok(())
    }

    /// Run the menu on the real terminal.
    pub fn repl(&mut self) -> Result<()> {
        let mut terminal = Terminal::new()?;
        let mut stdout = std::io::stdout();
        self.run(&mut terminal, &mut stdout)
    }

    fn dispatch(
        &mut self,
        choice: MenuChoice,
        input: &mut dyn LineSource,
        out: &mut dyn Write,
    ) -> Result<Flow> {
        let session = &mut self.session;
        match choice {
            MenuChoice::Load => LoadData::default().execute(input, out, session),
            MenuChoice::PrintList => PrintCourseList.execute(input, out, session),
            MenuChoice::PrintCourse => PrintCourse.execute(input, out, session),
            MenuChoice::Exit => Exit.execute(input, out, session),
        }
    }
}

struct NoInput;

impl LineSource for NoInput {
    fn read_line(&mut self, _prompt: &str) -> Result<Option<String>> {
        Ok(None)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::VecDeque;
    use tempfile::NamedTempFile;

    /// Replays canned answers and records the prompts it was asked.
    pub(crate) struct Scripted {
        answers: VecDeque<String>,
        pub prompts: Vec<String>,
    }

    impl Scripted {
        pub(crate) fn new<I, S>(answers: I) -> Self
        where
            I: IntoIterator<Item = S>,
            S: Into<String>,
        {
            Self {
                answers: answers.into_iter().map(Into::into).collect(),
                prompts: Vec::new(),
            }
        }
    }

    impl LineSource for Scripted {
        fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
            self.prompts.push(prompt.to_string());
            Ok(self.answers.pop_front())
        }
    }

    #[test]
    fn test_parse_menu_choices() {
        assert_eq!("1".parse::<MenuChoice>(), Ok(MenuChoice::Load));
        assert_eq!(" 2 ".parse::<MenuChoice>(), Ok(MenuChoice::PrintList));
        assert_eq!("03".parse::<MenuChoice>(), Ok(MenuChoice::PrintCourse));
        assert_eq!("9".parse::<MenuChoice>(), Ok(MenuChoice::Exit));
        for bad in ["", "  ", "4", "-1", "+1", "1a", "one", "99999999999999"] {
            assert_eq!(bad.parse::<MenuChoice>(), Err(InvalidChoice), "{:?}", bad);
        }
    }

    #[test]
    fn test_full_session_transcript() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "CS200,Data Structures,CS101\nCS101,Intro\n").unwrap();
        let path = file.path().to_string_lossy().to_string();

        let mut menu = Menu::default();
        let mut input = Scripted::new(["2", "1", path.as_str(), "2", "3", "cs200", "7", "9"]);
        let mut out = Vec::new();
        menu.run(&mut input, &mut out).unwrap();

        let s = String::from_utf8(out).unwrap();
        let expected = [
            MENU_TEXT,
            "No data loaded. Please load a data structure first.\n\n",
            MENU_TEXT,
            "Data loaded successfully (2 courses).\n\n",
            MENU_TEXT,
            "\nHere is a sample schedule:\n\nCS101, Intro\nCS200, Data Structures\n\n",
            MENU_TEXT,
            "CS200,Data Structures\nPrerequisites: CS101\n",
            MENU_TEXT,
            "Invalid choice. Please enter a valid option from the menu.\n\n",
            MENU_TEXT,
            "Exiting program. Goodbye!\n",
        ]
        .concat();
        assert_eq!(s, expected);
        assert!(menu.session().is_loaded());
        assert_eq!(
            input.prompts,
            vec![
                "Enter choice: ",
                "Enter choice: ",
                "Enter file name to load (e.g., ABCU_Advising_Program_Input.csv): ",
                "Enter choice: ",
                "Enter choice: ",
                "Enter course number: ",
                "Enter choice: ",
                "Enter choice: ",
            ]
        );
    }

    #[test]
    fn test_menu_stops_at_end_of_input() {
        let mut menu = Menu::default();
        let mut input = Scripted::new(["2"]);
        let mut out = Vec::new();
        menu.run(&mut input, &mut out).unwrap();

        let s = String::from_utf8(out).unwrap();
        assert!(s.ends_with(MENU_TEXT));
        assert_eq!(input.prompts.len(), 2);
    }

    #[test]
    fn test_end_of_input_inside_a_prompt_stops_the_menu() {
        let mut menu = Menu::default();
        let mut input = Scripted::new(["1"]);
        let mut out = Vec::new();
        menu.run(&mut input, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), MENU_TEXT);
    }

    #[test]
    fn test_menu_wraps_an_existing_session() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "CS101,Intro\n").unwrap();
        let mut session = Session::new();
        assert!(session.load(file.path()).is_success());

        let mut menu = Menu::new(session);
        let mut input = Scripted::new(["3", "cs101", "9"]);
        let mut out = Vec::new();
        menu.run(&mut input, &mut out).unwrap();

        let s = String::from_utf8(out).unwrap();
        assert!(s.contains("CS101,Intro\nPrerequisites: None\n"));
        assert!(menu.session().is_loaded());
    }

    #[test]
    fn test_preload_loads_without_prompting() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "CS101,Intro\n").unwrap();

        let mut menu = Menu::default();
        let mut out = Vec::new();
        menu.preload(file.path(), &mut out).unwrap();

        assert!(menu.session().is_loaded());
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Data loaded successfully (1 courses).\n\n"
        );
    }
}
