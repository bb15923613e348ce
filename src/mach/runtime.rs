use super::{Flow, Program, Step, Var};
use crate::error;
use crate::lang::ast::{Command, Ident, Statement};
use crate::lang::{Error, Line, Value};
use std::collections::VecDeque;
use std::ops::Bound;

const PROMPT: &str = " ? ";

const HELP: &str = "\
STATEMENTS
  REM <text>             comment
  LET <var> = <expr>     assign a variable
  PRINT <expr>           print a value
  INPUT <var>            read a value
  GOTO <line>            jump to a line
  IF <expr> <op> <expr> THEN <line>
                         jump when the comparison (<, =, >) holds
  END                    stop the program
COMMANDS
  RUN  LIST  CLEAR  HELP  QUIT
Enter <line> <statement> to store a line, <line> alone to delete it.
";

/// ## Events
///
/// `Runtime::execute` reports everything the terminal needs to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Stopped,
    Running,
    Print(String),
    List(String),
    Input(String),
    Error(Error),
    Quit,
}

#[derive(Debug)]
enum Mode {
    Stopped,
    Running,
    Listing(Bound<u32>),
    Input { name: Ident, resume: bool },
}

impl Default for Mode {
    fn default() -> Mode {
        Mode::Stopped
    }
}

/// ## Runtime
///
/// Owns the program and its variables. Lines of text go in through
/// `enter` and results come out of `execute` as events.
#[derive(Debug, Default)]
pub struct Runtime {
    program: Program,
    var: Var,
    mode: Mode,
    events: VecDeque<Event>,
}

impl Runtime {
    pub fn new() -> Runtime {
        Runtime::default()
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn var(&self) -> &Var {
        &self.var
    }

    /// Accepts a line of text. Returns true when the line is worth
    /// keeping in the terminal history.
    pub fn enter(&mut self, s: &str) -> bool {
        if let Mode::Input { name, resume } = &self.mode {
            let (name, resume) = (name.clone(), *resume);
            match parse_input(s) {
                Some(value) => {
                    self.var.store(&name, value);
                    self.mode = if resume { Mode::Running } else { Mode::Stopped };
                }
                None => {
                    let message = "INVALID NUMBER\n".to_string();
                    self.events.push_back(Event::Print(message))
                }
            }
            return false;
        }
        let line = Line::new(s);
        match line.number() {
            Some(number) => {
                self.enter_indirect(number, line);
                true
            }
            None => {
                if line.is_empty() {
                    return false;
                }
                if let Err(error) = line.ast().and_then(|statement| self.direct(statement)) {
                    self.events.push_back(Event::Error(error));
                }
                true
            }
        }
    }

    fn enter_indirect(&mut self, number: u32, line: Line) {
        if number == 0 {
            let error = error!(SyntaxError; "INVALID LINE NUMBER");
            self.events.push_back(Event::Error(error));
            return;
        }
        if line.is_empty() {
            self.program.remove_source_line(number);
            return;
        }
        match line.ast() {
            Ok(statement) => self.program.add_source_line(number, line.source(), statement),
            Err(error) => self.events.push_back(Event::Error(error)),
        }
    }

    fn direct(&mut self, statement: Statement) -> Result<(), Error> {
        match statement.execute(&mut self.var)? {
            Flow::Next => {}
            Flow::Print(value) => self.print(value),
            Flow::Input(name) => {
                self.mode = Mode::Input {
                    name,
                    resume: false,
                }
            }
            Flow::Jump(_) => return Err(error!(SyntaxError; "ILLEGAL DIRECT")),
            Flow::Command(Command::Run) => {
                self.program.run();
                self.mode = Mode::Running;
            }
            Flow::Command(Command::List) => self.mode = Mode::Listing(Bound::Unbounded),
            Flow::Command(Command::Clear) => self.program.clear(&mut self.var),
            Flow::Command(Command::Help) => {
                self.events.push_back(Event::Print(HELP.to_string()))
            }
            Flow::Command(Command::Quit) => self.events.push_back(Event::Quit),
        }
        Ok(())
    }

    fn print(&mut self, value: Value) {
        self.events.push_back(Event::Print(format!("{}\n", value)));
    }

    /// Runs for at most `cycles` statements and returns the next event.
    pub fn execute(&mut self, cycles: usize) -> Event {
        if let Some(event) = self.events.pop_front() {
            return event;
        }
        match self.mode {
            Mode::Stopped => Event::Stopped,
            Mode::Input { .. } => Event::Input(PROMPT.to_string()),
            Mode::Listing(from) => {
                let next = self
                    .program
                    .list_range((from, Bound::Unbounded))
                    .next()
                    .map(|(number, source)| (number, format!("{} {}", number, source)));
                match next {
                    Some((number, s)) => {
                        self.mode = Mode::Listing(Bound::Excluded(number));
                        Event::List(s)
                    }
                    None => {
                        self.mode = Mode::Stopped;
                        Event::Stopped
                    }
                }
            }
            Mode::Running => self.run(cycles),
        }
    }

    fn run(&mut self, cycles: usize) -> Event {
        for _ in 0..cycles {
            match self.program.step(&mut self.var) {
                Ok(Step::Next) => {}
                Ok(Step::Print(value)) => return Event::Print(format!("{}\n", value)),
                Ok(Step::Input(name)) => {
                    self.mode = Mode::Input { name, resume: true };
                    return Event::Input(PROMPT.to_string());
                }
                Ok(Step::Stopped) => {
                    tracing::debug!("program stopped");
                    self.mode = Mode::Stopped;
                    return Event::Stopped;
                }
                Err(error) => {
                    tracing::debug!(%error, "program halted");
                    self.mode = Mode::Stopped;
                    return Event::Error(error);
                }
            }
        }
        Event::Running
    }
}

/// An optional sign followed by at least one decimal digit.
fn parse_input(s: &str) -> Option<Value> {
    let s = s.trim_end_matches(|c: char| c == '\r' || c == '\n');
    let digits = s.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(s);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
