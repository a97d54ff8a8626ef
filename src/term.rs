extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use ansi_term::Style;
use basic::mach::{Event, Listing, Runtime};
use basic::{
    error,
    lang::{Error, LineNumber},
};
use clap::Parser;
use linefeed::{Completer, Completion, Interface, Prompter, ReadResult, Signal, Terminal};
use log::{debug, warn};
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::{Path, PathBuf};
use std::sync::atomic::Ordering;
use std::sync::Arc;

/// A line-numbered BASIC.
#[derive(Parser, Debug)]
#[command(name = "basic", version, about)]
pub struct Config {
    /// Program to load at startup, one `<line> <code>` per line
    pub program: Option<PathBuf>,

    /// Run the program as soon as it is loaded
    #[arg(long, requires = "program")]
    pub run: bool,

    /// Statements executed before the terminal is checked again
    #[arg(long, default_value_t = 5000)]
    pub budget: usize,
}

pub fn main() {
    env_logger::init();
    let config = Config::parse();
    let runtime = Runtime::default();
    let interrupted = runtime.interrupt_handle();
    if let Err(error) = ctrlc::set_handler(move || {
        interrupted.store(true, Ordering::SeqCst);
    }) {
        warn!("Ctrl-C will not stop programs: {}", error);
    }
    if let Err(error) = main_loop(runtime, &config) {
        eprintln!("{}", error);
    }
}

fn main_loop(mut runtime: Runtime, config: &Config) -> std::io::Result<()> {
    let command = Interface::new("BASIC")?;
    let input = Interface::new("INPUT")?;
    input.set_report_signal(Signal::Interrupt, true);

    command.write_fmt(format_args!("LINE BASIC\n"))?;
    let mut started = false;
    if let Some(path) = &config.program {
        match load(path) {
            Ok(listing) => {
                debug!("loaded {} lines from {}", listing.len(), path.display());
                runtime.set_listing(listing);
                if config.run {
                    started = runtime.enter("RUN");
                }
            }
            Err(error) => print_error(&command, &error)?,
        }
    }
    if !started {
        command.write_fmt(format_args!("READY.\n"))?;
    }

    loop {
        match runtime.execute(config.budget.max(1)) {
            Event::Stopped => {
                let saved_completer = command.completer();
                command.set_completer(Arc::new(LineCompleter::new(runtime.listing())));
                let string = match command.read_line()? {
                    ReadResult::Input(string) => string,
                    ReadResult::Signal(_) | ReadResult::Eof => break,
                };
                command.set_completer(saved_completer);
                if runtime.enter(&string) {
                    command.add_history_unique(string);
                }
            }
            Event::Input(prompt) => {
                input.set_prompt(&prompt)?;
                match input.read_line()? {
                    ReadResult::Input(string) => {
                        if runtime.enter(&string) {
                            input.add_history_unique(string);
                        }
                    }
                    ReadResult::Signal(Signal::Interrupt) => {
                        input.set_buffer("")?;
                        input.lock_reader().cancel_read_line()?;
                        runtime.interrupt();
                    }
                    ReadResult::Signal(_) | ReadResult::Eof => break,
                };
            }
            Event::Errors(errors) => {
                for error in errors.iter() {
                    print_error(&command, error)?;
                }
            }
            Event::Print(s) | Event::List(s) => {
                command.write_fmt(format_args!("{}\n", s))?;
            }
            Event::Cls => {
                command.write_fmt(format_args!("\x1b[2J\x1b[H"))?;
            }
            Event::Running => {}
        }
    }
    Ok(())
}

fn print_error<T: Terminal>(interface: &Interface<T>, error: &Error) -> std::io::Result<()> {
    interface.write_fmt(format_args!(
        "{}\n",
        Style::new().bold().paint(format!("?{}", error))
    ))
}

/// Typing a line number and TAB recalls that line for editing.
struct LineCompleter {
    listing: Listing,
}

impl LineCompleter {
    fn new(listing: Listing) -> LineCompleter {
        LineCompleter { listing }
    }
}

impl<Term: Terminal> Completer<Term> for LineCompleter {
    fn complete(
        &self,
        _word: &str,
        prompter: &Prompter<Term>,
        _start: usize,
        _end: usize,
    ) -> Option<Vec<Completion>> {
        let num = prompter.buffer().trim().parse::<LineNumber>().ok()?;
        let code = self.listing.get(num)?;
        let mut comp = Completion::simple(format!("{} {}", num, code));
        comp.suffix = linefeed::complete::Suffix::None;
        Some(vec![comp])
    }
}

fn load(filename: &Path) -> Result<Listing, Error> {
    let mut listing = Listing::default();
    let reader = match File::open(filename) {
        Ok(file) => BufReader::new(file),
        Err(error) => {
            let msg = error.to_string();
            match error.kind() {
                ErrorKind::NotFound => return Err(error!(FileNotFound; msg.as_str())),
                _ => return Err(error!(InternalError; msg.as_str())),
            }
        }
    };
    for (index, line) in reader.lines().enumerate() {
        match line {
            Err(error) => return Err(error!(InternalError; error.to_string().as_str())),
            Ok(line) => {
                if let Err(error) = listing.load_str(&line) {
                    return Err(error.message(&format!(
                        "IN LINE {} OF THE FILE (NOT BASIC LINE NUMBER)",
                        index + 1
                    )));
                }
            }
        }
    }
    Ok(listing)
}
