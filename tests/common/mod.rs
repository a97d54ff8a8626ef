use basic::mach::{Event, Runtime};

/// Run until the program stops or asks for input and return what
/// the operator would see, minus the final `READY.`.
pub fn exec(runtime: &mut Runtime) -> String {
    exec_n(runtime, 5000)
}

pub fn exec_n(runtime: &mut Runtime, cycles: usize) -> String {
    let mut s = String::new();
    let mut prev_running = false;
    loop {
        let event = runtime.execute(cycles);
        match &event {
            Event::Stopped => break,
            Event::Errors(errors) => {
                for error in errors.iter() {
                    s.push_str(&format!("?{}\n", error));
                }
            }
            Event::Running => {
                if prev_running {
                    s.push_str(&format!("\n{} Execution cycles exceeded.\n", cycles));
                    break;
                }
            }
            Event::Print(line) | Event::List(line) => {
                s.push_str(line);
                s.push('\n');
            }
            Event::Input(prompt) => {
                s.push_str(prompt);
                break;
            }
            Event::Cls => s.push_str("<CLS>\n"),
        }
        prev_running = matches!(event, Event::Running);
    }
    s.trim_end_matches("READY.\n").to_string()
}

/// Store each line, then RUN.
pub fn run_program(runtime: &mut Runtime, lines: &[&str]) -> String {
    for line in lines {
        runtime.enter(line);
    }
    runtime.enter("RUN");
    exec(runtime)
}
