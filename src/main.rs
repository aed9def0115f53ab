use std::env;
use std::process;

mod cli;
mod error;
mod exits;
mod pass;
mod rand;
mod settings;

fn main() {
    exits::install_handlers();
    exits::harden();

    process::exit(cli::run(env::args_os()));
}
