mod context;
mod flags;
mod prompts;

use std::ffi::OsString;

use clap::Parser;

pub use context::Context;
pub use flags::CliFlags;

use crate::exits;

/// Log filter variable, e.g. `GOTPASSWD_LOG=debug`.
const LOG_ENV: &str = "GOTPASSWD_LOG";

/// Parse `args`, generate, and return the process exit status.
pub fn run<I, T>(args: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let flags = match CliFlags::try_parse_from(args) {
        Ok(flags) => flags,
        Err(e) => {
            // Help and version land here too, with status 0.
            let _ = e.print();
            return e.exit_code();
        }
    };

    init_logging(flags.debug);
    prompts::set_quiet(flags.quiet);

    match Context::new(flags).run() {
        Ok(()) => exits::SUCCESS,
        Err(e) => {
            log::debug!("{e:?}");
            prompts::error(&e.to_string());
            e.exit_code()
        }
    }
}

fn init_logging(debug: bool) {
    let env = env_logger::Env::default().filter_or(LOG_ENV, "warn");
    let mut builder = env_logger::Builder::from_env(env);
    if debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    let _ = builder.format_timestamp(None).try_init();
}
