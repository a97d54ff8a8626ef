use super::{Entry, Environment, Listing, Operation, Val};
use crate::error;
use crate::lang::{ast::*, lex, parse, Error, LineNumber};
use log::{debug, trace};
use std::collections::{BTreeMap, VecDeque};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

type Result<T> = std::result::Result<T, Error>;

/// ## Events for the user interface
///
/// `Runtime::execute` returns one of these every time it hands control
/// back to the host.

#[derive(Debug, PartialEq)]
pub enum Event {
    /// Faults to show the operator, one per line.
    Errors(Arc<Vec<Error>>),
    /// Show the prompt without a newline and send the reply with `enter`.
    Input(String),
    /// One complete line of output.
    Print(String),
    /// Clear the display.
    Cls,
    /// One line of the program listing.
    List(String),
    /// The budget ran out; call `execute` again.
    Running,
    /// Nothing to do until the next `enter`.
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Executing,
    AwaitingInput,
}

#[derive(Debug)]
enum State {
    Idle,
    Executing {
        pc: usize,
    },
    AwaitingInput {
        line: LineNumber,
        var: Variable,
        prompt: String,
        pc: usize,
    },
}

impl Default for State {
    fn default() -> State {
        State::Idle
    }
}

enum Flow {
    Next,
    Jump(LineNumber),
    Suspend(Variable, String),
}

/// ## Interpreter
///
/// Owns the program, the parsed statements of the current run and
/// the variables. The host drives it with `enter` and `execute`.

#[derive(Debug, Default)]
pub struct Runtime {
    listing: Listing,
    parsed: BTreeMap<LineNumber, Statement>,
    lines: Vec<LineNumber>,
    vars: Environment,
    state: State,
    pending: VecDeque<Event>,
    interrupted: Arc<AtomicBool>,
}

impl Runtime {
    pub fn new() -> Runtime {
        Runtime::default()
    }

    pub fn phase(&self) -> Phase {
        match self.state {
            State::Idle => Phase::Idle,
            State::Executing { .. } => Phase::Executing,
            State::AwaitingInput { .. } => Phase::AwaitingInput,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase() != Phase::Idle
    }

    pub fn environment(&self) -> &Environment {
        &self.vars
    }

    pub fn parsed_program(&self) -> &BTreeMap<LineNumber, Statement> {
        &self.parsed
    }

    pub fn listing(&self) -> Listing {
        self.listing.clone()
    }

    /// Replace the program, e.g. with one loaded from a file.
    /// Refused while a program runs.
    pub fn set_listing(&mut self, listing: Listing) -> bool {
        if self.is_running() {
            self.report(error!(IllegalDirect; "CAN'T EDIT WHILE RUNNING"));
            return false;
        }
        self.listing = listing;
        self.parsed.clear();
        true
    }

    /// Ask a running program to stop at the next statement boundary.
    pub fn interrupt(&self) {
        self.interrupted.store(true, Ordering::SeqCst);
    }

    /// The flag behind `interrupt`, for signal handlers on other threads.
    pub fn interrupt_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.interrupted)
    }

    /// One line of text from the operator. Returns true when the
    /// line did something worth keeping in history.
    pub fn enter(&mut self, s: &str) -> bool {
        if let State::AwaitingInput { .. } = self.state {
            self.resolve_input(s);
            return true;
        }
        let entry = match Entry::parse(s) {
            Ok(entry) => entry,
            Err(error) => {
                self.report(error);
                return false;
            }
        };
        match entry {
            Entry::Store(..) | Entry::Delete(_) if self.is_running() => {
                self.report(error!(IllegalDirect; "CAN'T EDIT WHILE RUNNING"));
                false
            }
            Entry::Store(number, code) => {
                self.listing.insert(number, code);
                true
            }
            Entry::Delete(number) => self.listing.remove(number).is_some(),
            Entry::Direct(command) => self.direct(command),
        }
    }

    fn direct(&mut self, command: &str) -> bool {
        match command.to_ascii_uppercase().as_str() {
            "" => false,
            "RUN" => {
                if self.is_running() {
                    return false;
                }
                self.run();
                true
            }
            "LIST" => {
                for line in self.listing.lines() {
                    self.pending.push_back(Event::List(line));
                }
                self.ready();
                true
            }
            "NEW" => {
                if self.is_running() {
                    self.report(error!(IllegalDirect; "CAN'T EDIT WHILE RUNNING"));
                    return false;
                }
                self.listing.clear();
                self.parsed.clear();
                self.lines.clear();
                self.vars.clear();
                self.ready();
                true
            }
            "CLS" => {
                self.pending.push_back(Event::Cls);
                self.ready();
                true
            }
            _ => {
                self.report(error!(SyntaxError));
                false
            }
        }
    }

    /// Parse every line, then start at the first one.
    /// Nothing runs unless the whole program parses.
    fn run(&mut self) {
        self.vars.clear();
        self.parsed.clear();
        self.lines.clear();
        let listing = self.listing.clone();
        debug!("compiling {} lines", listing.len());
        for (&number, code) in listing.iter() {
            match lex(number, code).and_then(|tokens| parse(number, &tokens)) {
                Ok(statement) => {
                    self.parsed.insert(number, statement);
                }
                Err(error) => {
                    debug!("compile failed: {}", error);
                    self.report(error.in_line_number(number));
                    return;
                }
            }
        }
        self.lines = self.parsed.keys().copied().collect();
        self.interrupted.store(false, Ordering::SeqCst);
        self.state = State::Executing { pc: 0 };
        debug!("running {} lines", self.lines.len());
    }

    /// Run at most `iterations` statements. Returns early with the
    /// first event a statement produces.
    pub fn execute(&mut self, iterations: usize) -> Event {
        let mut budget = iterations;
        loop {
            if let Some(event) = self.pending.pop_front() {
                return event;
            }
            let pc = match &self.state {
                State::Idle => {
                    self.interrupted.store(false, Ordering::SeqCst);
                    return Event::Stopped;
                }
                State::AwaitingInput { line, prompt, .. } => {
                    if self.interrupted.swap(false, Ordering::SeqCst) {
                        let line = *line;
                        self.stop(Some(error!(Break, line)));
                        continue;
                    }
                    return Event::Input(prompt.clone());
                }
                State::Executing { pc } => *pc,
            };
            if budget == 0 {
                return Event::Running;
            }
            budget -= 1;
            let line = match self.lines.get(pc) {
                Some(line) => *line,
                None => {
                    self.stop(None);
                    continue;
                }
            };
            if self.interrupted.swap(false, Ordering::SeqCst) {
                self.stop(Some(error!(Break, line)));
                continue;
            }
            if let Err(error) = self.step(pc, line) {
                self.stop(Some(error.in_line_number(line)));
            }
        }
    }

    fn step(&mut self, pc: usize, line: LineNumber) -> Result<()> {
        let statement = match self.parsed.get(&line) {
            Some(statement) => statement,
            None => return Err(error!(InternalError; "LINE NOT COMPILED")),
        };
        trace!("{} {}", line, statement);
        match Runtime::statement(statement, &mut self.vars, &mut self.pending)? {
            Flow::Next => {
                self.state = State::Executing { pc: pc + 1 };
            }
            Flow::Jump(target) => match self.lines.binary_search(&target) {
                Ok(index) => self.state = State::Executing { pc: index },
                Err(_) => return Err(error!(UndefinedLine)),
            },
            Flow::Suspend(var, prompt) => {
                self.state = State::AwaitingInput {
                    line,
                    var,
                    prompt,
                    pc: pc + 1,
                };
            }
        }
        Ok(())
    }

    fn statement(
        statement: &Statement,
        vars: &mut Environment,
        pending: &mut VecDeque<Event>,
    ) -> Result<Flow> {
        use Statement::*;
        match statement {
            Cls => pending.push_back(Event::Cls),
            Goto(line) => return Ok(Flow::Jump(*line)),
            Input(prompt, var) => {
                let prompt = match prompt {
                    Some(expr) => format!("{} ", Runtime::evaluate(expr, vars)?),
                    None => "? ".to_string(),
                };
                return Ok(Flow::Suspend(var.clone(), prompt));
            }
            Let(var, expr) => {
                let val = Runtime::evaluate(expr, vars)?;
                vars.set(var.name(), val);
            }
            Print(expr) => {
                let val = Runtime::evaluate(expr, vars)?;
                pending.push_back(Event::Print(val.to_string()));
            }
            Rem(_) => {}
        }
        Ok(Flow::Next)
    }

    pub fn evaluate(expr: &Expression, vars: &Environment) -> Result<Val> {
        match expr {
            Expression::Literal(val) => Ok(val.clone()),
            Expression::Variable(var) => Ok(vars.get(var.name())),
            Expression::Grouping(expr) => Runtime::evaluate(expr, vars),
            Expression::Binary(lhs, op, rhs) => {
                let lhs = Runtime::evaluate(lhs, vars)?;
                let rhs = Runtime::evaluate(rhs, vars)?;
                Operation::binary(*op, lhs, rhs)
            }
        }
    }

    fn resolve_input(&mut self, text: &str) {
        if let State::AwaitingInput { var, pc, .. } = std::mem::take(&mut self.state) {
            let val = Val::from_input(text, var.is_string());
            self.vars.set(var.name(), val);
            self.state = State::Executing { pc };
        }
    }

    fn stop(&mut self, error: Option<Error>) {
        match &error {
            Some(error) => debug!("stopped: {}", error),
            None => debug!("program ended"),
        }
        self.state = State::Idle;
        if let Some(error) = error {
            self.pending.push_back(Event::Errors(Arc::new(vec![error])));
        }
        self.ready();
    }

    fn report(&mut self, error: Error) {
        self.pending.push_back(Event::Errors(Arc::new(vec![error])));
        self.ready();
    }

    fn ready(&mut self) {
        if let State::Idle = self.state {
            self.pending.push_back(Event::Print("READY.".to_string()));
        }
    }
}
