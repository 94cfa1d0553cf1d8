//! CLI helpers.

pub(crate) mod error;
mod output;
mod stdout_logger;

use anyhow::{anyhow, bail, Context, Result};

use self::output::{Output, OutputKind};
use crate::input::IStr;
use crate::puzzle::Puzzle;

static STDOUT_LOGGER: stdout_logger::StdoutLogger = stdout_logger::StdoutLogger;

/// Input options.
#[derive(Default)]
pub struct Opts {
    /// Run in verbose mode.
    verbose: bool,
    /// Output JSON report.
    json: bool,
}

impl Opts {
    /// Parse CLI options.
    pub fn parse() -> Result<Self> {
        let mut opts = Self::default();

        for arg in std::env::args_os().skip(1) {
            let Some(arg) = arg.to_str() else {
                bail!("non-utf8 argument");
            };

            match arg {
                "--verbose" => {
                    opts.verbose = true;
                }
                "--json" => {
                    opts.json = true;
                }
                "--" => {
                    break;
                }
                other => {
                    bail!("unsupported argument: {other}");
                }
            }
        }

        if !opts.json {
            let level = match opts.verbose {
                true => log::LevelFilter::Debug,
                false => log::LevelFilter::Info,
            };

            log::set_max_level(level);
            log::set_logger(&STDOUT_LOGGER)
                .map_err(|error| anyhow!("failed to set log: {error}"))?;
        }

        Ok(opts)
    }
}

/// Solve a puzzle against the input at `read_path`, reporting both parts.
///
/// Each part gets its own outcome line, so one part failing never hides the
/// other. When `expect` is given, both answers are checked against it after
/// they have been reported and a mismatch fails the run.
pub fn run<P>(
    opts: &Opts,
    path: &'static str,
    read_path: &str,
    expect: Option<(P::Part1, P::Part2)>,
) -> Result<()>
where
    P: Puzzle,
{
    let kind = match opts.json {
        true => OutputKind::Json,
        false => OutputKind::Normal,
    };

    let mut out = Output::new(std::io::stdout().lock(), kind);

    let raw = std::fs::read(read_path).with_context(|| anyhow!("{path}"))?;
    log::debug!("{path}: {} bytes", raw.len());

    let mut input = IStr::new(&raw);

    let data = match P::preprocess(&mut input) {
        Ok(data) => data,
        Err(e) => return Err(error::error_context(path, &raw, e)),
    };

    out.path(path)?;

    let p1 = P::part1(&data);
    out.part(1, &p1)?;

    let p2 = P::part2(&data);
    out.part(2, &p2)?;

    let mut ok = p1.is_ok() && p2.is_ok();

    if let Some((e1, e2)) = expect {
        if let Ok(actual) = &p1 {
            if *actual != e1 {
                out.error(format_args!("part 1: expected {e1}, got {actual}"))?;
                ok = false;
            }
        }

        if let Ok(actual) = &p2 {
            if *actual != e2 {
                out.error(format_args!("part 2: expected {e2}, got {actual}"))?;
                ok = false;
            }
        }
    }

    if !ok {
        bail!("{path}: failed");
    }

    Ok(())
}
