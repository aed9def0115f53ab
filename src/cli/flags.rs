use clap::Parser;

/// Generate random passwords from named character classes.
///
/// Classes: alphabet, number, symbol, underscore, space.
#[derive(Debug, Default, Parser)]
#[command(name = "gotpasswd", version, about)]
pub struct CliFlags {
    /// Comma-separated character classes [default: alphabet,number,symbol,underscore,space]
    #[arg(short, long, value_name = "LIST")]
    pub kinds: Option<String>,

    /// Characters per password [default: 8]
    #[arg(short, long, value_name = "N", allow_negative_numbers = true)]
    pub length: Option<i64>,

    /// How many passwords to generate [default: 1]
    #[arg(short, long, value_name = "N", allow_negative_numbers = true)]
    pub number: Option<i64>,

    /// Print each class's character pool to stderr
    #[arg(long)]
    pub debug: bool,

    /// Suppress warnings
    #[arg(short, long)]
    pub quiet: bool,

    /// Save -k/-l/-n as the new defaults
    #[arg(long)]
    pub save: bool,

    /// Ignore saved defaults for this run
    #[arg(short, long)]
    pub defaults: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Result<CliFlags, clap::Error> {
        CliFlags::try_parse_from(std::iter::once("gotpasswd").chain(args.iter().copied()))
    }

    #[test]
    fn command_is_well_formed() {
        CliFlags::command().debug_assert();
    }

    #[test]
    fn no_args() {
        let flags = parse(&[]).unwrap();
        assert!(flags.kinds.is_none() && flags.length.is_none() && flags.number.is_none());
        assert!(!flags.debug && !flags.quiet && !flags.save && !flags.defaults);
    }

    #[test]
    fn short_flags() {
        let flags = parse(&["-k", "number,underscore", "-l", "4", "-n", "3"]).unwrap();
        assert_eq!(flags.kinds.as_deref(), Some("number,underscore"));
        assert_eq!(flags.length, Some(4));
        assert_eq!(flags.number, Some(3));
    }

    #[test]
    fn long_flags() {
        let flags = parse(&["--kinds=alphabet", "--length", "5", "--number", "1", "--debug"]).unwrap();
        assert_eq!(flags.kinds.as_deref(), Some("alphabet"));
        assert_eq!(flags.length, Some(5));
        assert!(flags.debug);
    }

    #[test]
    fn negative_numbers_reach_validation() {
        let flags = parse(&["-l", "-3", "-n", "-1"]).unwrap();
        assert_eq!(flags.length, Some(-3));
        assert_eq!(flags.number, Some(-1));
    }

    #[test]
    fn malformed_numbers_are_usage_errors() {
        let err = parse(&["-l", "eight"]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn unknown_flags_are_usage_errors() {
        assert!(parse(&["--hex"]).is_err());
    }
}
