use std::env;
use std::io;
use std::process;

use genpass::cli::{Context, prompts};
use genpass::{Error, exits, logging};

fn main() {
    exits::harden();

    let args: Vec<String> = env::args().collect();

    let code = match run(args) {
        Ok(()) => exits::SUCCESS,
        Err(e) => {
            prompts::error(&format!("error: {e}"));
            if let Error::Parse(_) = e {
                prompts::hint("Try 'genpass --help' for usage.");
            }
            e.exit_code()
        }
    };
    process::exit(code);
}

fn run(args: Vec<String>) -> Result<(), Error> {
    let context = Context::new(args)?;
    logging::init(context.flags.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    context.run(&mut out)
}
