//! The interactive REPL.
//!
//! Each input line is a list of words to run through the loaded ruleset.
//! Lines starting with `:` are commands.

use std::fmt::Write as _;
use std::io::{self, Write};

use wordshift_foundation::{Error, Result};

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::session::Session;

/// What a line of input produced.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Text to print.
    Output(String),
    /// Nothing to print.
    Silent,
    /// Leave the REPL.
    Quit,
}

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Loaded ruleset and corpus.
    session: Session,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL over `session` with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(session: Session) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor, session))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(editor: E, session: Session) -> Self {
        Self {
            editor,
            session,
            show_banner: true,
            prompt: "ws> ".to_string(),
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Runs the REPL loop until EOF or `:quit`.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        loop {
            let line = match self.editor.read_line(&self.prompt)? {
                ReadResult::Line(line) => line,
                ReadResult::Interrupted => continue,
                ReadResult::Eof => break,
            };

            if line.trim().is_empty() {
                continue;
            }
            self.editor.add_history(&line);

            match self.eval(&line) {
                Ok(Outcome::Output(text)) => println!("{text}"),
                Ok(Outcome::Silent) => {}
                Ok(Outcome::Quit) => break,
                Err(e) => print_error(&e),
            }
        }

        Ok(())
    }

    /// Evaluates one line of input.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown command or a command missing its
    /// argument.
    pub fn eval(&self, input: &str) -> Result<Outcome> {
        let input = input.trim();
        let Some(command) = input.strip_prefix(':') else {
            return Ok(Outcome::Output(self.transform(input)));
        };

        let (name, arg) = command
            .split_once(char::is_whitespace)
            .map_or((command, ""), |(n, a)| (n, a.trim()));

        match name {
            "q" | "quit" => Ok(Outcome::Quit),
            "h" | "help" => Ok(Outcome::Output(HELP.to_string())),
            "groups" => Ok(self.groups()),
            "rules" => Ok(self.rules()),
            "expand" => {
                if arg.is_empty() {
                    return Err(Error::command(
                        ":expand requires a template, e.g. :expand VPV",
                    ));
                }
                Ok(Outcome::Output(self.session.engine().expand(arg).join(" ")))
            }
            other => Err(Error::command(format!(
                "unknown command :{other} (try :help)"
            ))),
        }
    }

    fn transform(&self, input: &str) -> String {
        let engine = self.session.engine();
        input
            .split_whitespace()
            .map(|word| engine.transform_word(word))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn groups(&self) -> Outcome {
        let groups = &self.session.engine().ruleset().groups;
        if groups.is_empty() {
            return Outcome::Output("(no groups)".to_string());
        }
        let lines: Vec<String> = groups.iter().map(ToString::to_string).collect();
        Outcome::Output(lines.join("\n"))
    }

    fn rules(&self) -> Outcome {
        let engine = self.session.engine();
        let ruleset = engine.ruleset();
        let mut out = String::new();

        for rule in &ruleset.substitutions {
            let _ = writeln!(out, "SUBST {rule}  ({})", rule.origin);
        }
        for rule in &ruleset.sound_changes {
            let summary = match engine.expansions(rule) {
                Ok(pairs) if pairs.is_balanced() => format!("{} pair(s)", pairs.len()),
                Ok(pairs) => format!(
                    "unbalanced: {} vs {}",
                    pairs.find.len(),
                    pairs.replace.len()
                ),
                Err(kind) => kind.to_string(),
            };
            let _ = writeln!(out, "POST  {rule}  ({}) {summary}", rule.origin);
        }

        if out.is_empty() {
            return Outcome::Output("(no rules)".to_string());
        }
        out.pop();
        Outcome::Output(out)
    }

    /// Prints the welcome banner.
    #[allow(clippy::unused_self)]
    fn print_banner(&self) {
        println!(
            "\x1b[1;36mwordshift\x1b[0m v{}  type words to transform them, :help for commands",
            env!("CARGO_PKG_VERSION")
        );
        let _ = io::stdout().flush();
    }
}

/// Prints an error to stderr.
fn print_error(error: &Error) {
    eprintln!("\x1b[31mError: {error}\x1b[0m");
}

const HELP: &str = "\
<words...>        transform each word with the loaded ruleset
:groups           list the group table
:rules            list rules with their expansion size or problem
:expand TEMPLATE  show every string a template expands to
:help             show this help
:quit             exit (Ctrl+D also works)";
