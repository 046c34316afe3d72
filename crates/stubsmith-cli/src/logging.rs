//! Tracing subscriber for the `stubsmith` binary.
//!
//! The generators (`stubsmith`, `stubsmith_core`) and the adapters
//! (`stubsmith_adapters`) get separate directives, so `-v` shows what was
//! probed and written without every stub lookup.
//!
//! | Flag(s)   | generators | adapters |
//! |-----------|------------|----------|
//! | `--quiet` | error      | error    |
//! | (none)    | warn       | warn     |
//! | `-v`      | info       | warn     |
//! | `-vv`     | debug      | info     |
//! | `-vvv`    | trace      | trace    |
//!
//! From `-vv` on each line carries its target; `-vvv` also logs when a
//! generator span closes. A valid `RUST_LOG` replaces the directives.

use std::io::{self, IsTerminal};

use anyhow::Context;
use tracing_subscriber::{
    EnvFilter, filter::LevelFilter, fmt::format::FmtSpan, layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::cli::GlobalArgs;

const GENERATOR_TARGETS: [&str; 2] = ["stubsmith", "stubsmith_core"];
const ADAPTER_TARGET: &str = "stubsmith_adapters";

/// Levels chosen by `-q` / `-v`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Verbosity {
    generators: LevelFilter,
    adapters: LevelFilter,
}

impl Verbosity {
    fn from_args(args: &GlobalArgs) -> Self {
        let (generators, adapters) = if args.quiet {
            (LevelFilter::ERROR, LevelFilter::ERROR)
        } else {
            match args.verbose {
                0 => (LevelFilter::WARN, LevelFilter::WARN),
                1 => (LevelFilter::INFO, LevelFilter::WARN),
                2 => (LevelFilter::DEBUG, LevelFilter::INFO),
                _ => (LevelFilter::TRACE, LevelFilter::TRACE),
            }
        };
        Self {
            generators,
            adapters,
        }
    }

    /// `EnvFilter` directives; third-party crates only report errors.
    fn directives(self) -> String {
        let mut directives = vec![LevelFilter::ERROR.to_string()];
        for target in GENERATOR_TARGETS {
            directives.push(format!("{target}={}", self.generators));
        }
        directives.push(format!("{ADAPTER_TARGET}={}", self.adapters));
        directives.join(",").to_lowercase()
    }

    fn shows_targets(self) -> bool {
        self.generators >= LevelFilter::DEBUG
    }

    fn span_events(self) -> FmtSpan {
        if self.generators >= LevelFilter::TRACE {
            FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        }
    }
}

/// Install the global subscriber, writing to stderr.
///
/// Fails if a subscriber is already installed.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let verbosity = Verbosity::from_args(args);

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(verbosity.directives()))
        .context("Invalid log filter directives")?;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(verbosity.shows_targets())
        .with_span_events(verbosity.span_events())
        .with_ansi(!args.no_color && io::stderr().is_terminal())
        .with_writer(io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .context("Failed to initialise tracing")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verbosity(verbose: u8, quiet: bool) -> Verbosity {
        Verbosity::from_args(&GlobalArgs {
            verbose,
            quiet,
            ..GlobalArgs::default()
        })
    }

    #[test]
    fn default_reports_warnings_only() {
        let v = verbosity(0, false);
        assert_eq!(v.generators, LevelFilter::WARN);
        assert_eq!(v.adapters, LevelFilter::WARN);
        assert!(!v.shows_targets());
    }

    #[test]
    fn single_v_keeps_adapters_at_warn() {
        let v = verbosity(1, false);
        assert_eq!(v.generators, LevelFilter::INFO);
        assert_eq!(v.adapters, LevelFilter::WARN);
    }

    #[test]
    fn double_v_debugs_generators_and_shows_targets() {
        let v = verbosity(2, false);
        assert_eq!(v.generators, LevelFilter::DEBUG);
        assert_eq!(v.adapters, LevelFilter::INFO);
        assert!(v.shows_targets());
        assert_eq!(v.span_events(), FmtSpan::NONE);
    }

    #[test]
    fn triple_v_traces_everything_with_span_timing() {
        for count in [3, 10] {
            let v = verbosity(count, false);
            assert_eq!(v.generators, LevelFilter::TRACE);
            assert_eq!(v.adapters, LevelFilter::TRACE);
            assert_eq!(v.span_events(), FmtSpan::CLOSE);
        }
    }

    #[test]
    fn quiet_wins_over_verbose() {
        let v = verbosity(3, true);
        assert_eq!(v.generators, LevelFilter::ERROR);
        assert_eq!(v.adapters, LevelFilter::ERROR);
    }

    #[test]
    fn directives_name_each_crate() {
        assert_eq!(
            verbosity(1, false).directives(),
            "error,stubsmith=info,stubsmith_core=info,stubsmith_adapters=warn"
        );
    }

    #[test]
    fn directives_parse_at_every_level() {
        for (count, quiet) in [(0, true), (0, false), (1, false), (2, false), (3, false)] {
            let directives = verbosity(count, quiet).directives();
            assert!(EnvFilter::try_new(&directives).is_ok(), "{directives}");
        }
    }
}
