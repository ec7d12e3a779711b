use basic_calc::repl::LineEditor;
use basic_calc::{app, logging};

fn main() {
    logging::init();

    let args: Vec<String> = std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    // Every failure is reported inside `run`; the exit status stays 0.
    app::run(&args, LineEditor::new, &mut std::io::stdout());
}
