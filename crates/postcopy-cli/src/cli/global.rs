//! Presentation flags: how loud the run is and whether it uses colour.
//!
//! Nothing here changes what gets rewritten; see [`super::Cli`] for that.

use clap::{ArgAction, Args, builder::FalseyValueParser};

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log level on stderr: `-v` per-file, `-vv` per-rule, `-vvv` per
    /// filesystem call.
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        help = "Log more to stderr (-v files, -vv rules, -vvv filesystem calls)"
    )]
    pub verbose: u8,

    /// Only errors reach the terminal; progress lines are dropped.
    #[arg(
        short = 'q',
        long = "quiet",
        conflicts_with = "verbose",
        help = "Print errors only"
    )]
    pub quiet: bool,

    /// Plain output on stdout and stderr.
    ///
    /// `NO_COLOR` counts when set to anything but an empty, `0`, `false`,
    /// `no` or `off` value, so the usual `NO_COLOR=1` works.
    #[arg(
        long = "no-color",
        env = "NO_COLOR",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new(),
        help = "Disable colored output"
    )]
    pub no_color: bool,
}
