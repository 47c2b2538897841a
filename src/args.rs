//! The run configuration and its command-line surface.

use crate::choices::{Distribution, Partitioning};
use crate::error::ArgsError;
use clap::{CommandFactory, Parser};
use std::ffi::OsString;
use std::str::FromStr;
use tracing::trace;

/// Default number of bodies per leaf cell
pub const DEFAULT_NCRIT: u32 = 64;
/// Default interaction cutoff distance
pub const DEFAULT_CUTOFF: f64 = 0.0;
/// Default communication granularity
pub const DEFAULT_GRANULARITY: u32 = 1;
/// Default number of periodic image levels
pub const DEFAULT_IMAGES: u32 = 0;
/// Default problem size
pub const DEFAULT_NUM_BODIES: u64 = 1_000_000;
/// Default multipole expansion order
pub const DEFAULT_EXPANSION_ORDER: u32 = 4;
/// Default number of benchmark iterations
pub const DEFAULT_REPEAT: u32 = 1;
/// Default recursion depth threshold for spawning tasks
pub const DEFAULT_NSPAWN: u32 = 5000;
/// Default multipole acceptance criterion
pub const DEFAULT_THETA: f64 = 0.4;
/// Default worker thread count
pub const DEFAULT_THREADS: u32 = 16;

/// Label width used by the binary when printing the verbose summary.
pub const SUMMARY_WIDTH: usize = 20;

/// Validated configuration for a single solver run.
///
/// Built once from the command line by [`parse_args`] (or [`Args::default`])
/// and read through accessors afterwards.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(about, long_about = None, args_override_self = true)]
pub struct Args {
    /// Number of bodies per leaf cell
    #[arg(short = 'c', long = "ncrit", value_name = "N", allow_hyphen_values = true, default_value_t = DEFAULT_NCRIT,
          value_parser = clap::value_parser!(u32).range(1..))]
    ncrit: u32,

    /// Cutoff distance of interaction
    #[arg(short = 'C', long = "cutoff", value_name = "DIST", allow_hyphen_values = true, default_value_t = DEFAULT_CUTOFF,
          value_parser = parse_cutoff)]
    cutoff: f64,

    /// Initial distribution: lattice, cube, sphere, octant, plummer [l/c/s/o/p]
    #[arg(short = 'd', long = "distribution", value_name = "KIND", allow_hyphen_values = true,
          default_value_t = Distribution::Cube, value_parser = Distribution::from_str)]
    distribution: Distribution,

    /// Use dual tree traversal
    #[arg(short = 'D', long = "dual")]
    dual: bool,

    /// Graft remote trees to global tree
    #[arg(short = 'g', long = "graft")]
    graft: bool,

    /// Granularity of the communication
    #[arg(short = 'G', long = "granularity", value_name = "N", allow_hyphen_values = true, default_value_t = DEFAULT_GRANULARITY,
          value_parser = clap::value_parser!(u32).range(1..))]
    granularity: u32,

    /// Number of periodic image levels
    #[arg(short = 'i', long = "images", value_name = "N", allow_hyphen_values = true, default_value_t = DEFAULT_IMAGES)]
    images: u32,

    /// Use different sources & targets
    #[arg(short = 'j', long = "IneJ")]
    ine_j: bool,

    /// Use mutual interaction
    #[arg(short = 'm', long = "mutual")]
    mutual: bool,

    /// Write G matrix to file
    #[arg(short = 'M', long = "getMatrix")]
    get_matrix: bool,

    /// Number of bodies
    #[arg(short = 'n', long = "numBodies", value_name = "N", allow_hyphen_values = true, default_value_t = DEFAULT_NUM_BODIES,
          value_parser = clap::value_parser!(u64).range(1..))]
    num_bodies: u64,

    /// Use error optimized theta for MAC
    #[arg(short = 'o', long = "useRopt")]
    use_ropt: bool,

    /// Order of expansion
    #[arg(short = 'P', long = "PP", value_name = "ORDER", allow_hyphen_values = true, default_value_t = DEFAULT_EXPANSION_ORDER,
          value_parser = clap::value_parser!(u32).range(1..))]
    expansion_order: u32,

    /// Partitioning method: bisection, hilbert, octsection [b/h/o]
    #[arg(short = 'p', long = "partitioning", value_name = "METHOD", allow_hyphen_values = true,
          default_value_t = Partitioning::Bisection, value_parser = Partitioning::from_str)]
    partitioning: Partitioning,

    /// Number of iteration loops
    #[arg(short = 'r', long = "repeat", value_name = "N", allow_hyphen_values = true, default_value_t = DEFAULT_REPEAT,
          value_parser = clap::value_parser!(u32).range(1..))]
    repeat: u32,

    /// Threshold for stopping task creation during recursion
    #[arg(short = 's', long = "nspawn", value_name = "N", allow_hyphen_values = true, default_value_t = DEFAULT_NSPAWN,
          value_parser = clap::value_parser!(u32).range(1..))]
    nspawn: u32,

    /// Multipole acceptance criterion
    #[arg(short = 't', long = "theta", value_name = "THETA", allow_hyphen_values = true, default_value_t = DEFAULT_THETA,
          value_parser = parse_theta)]
    theta: f64,

    /// Number of threads
    #[arg(short = 'T', long = "threads", value_name = "N", allow_hyphen_values = true, default_value_t = DEFAULT_THREADS,
          value_parser = clap::value_parser!(u32).range(1..))]
    threads: u32,

    /// Print information to screen
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,

    /// Write timings to file
    #[arg(short = 'w', long = "write")]
    write_output: bool,

    /// Use maximum distance for MAC
    #[arg(short = 'x', long = "useRmax")]
    use_rmax: bool,

    /// Everything from the first non-option token onwards
    #[arg(value_name = "ARGS", num_args = 1.., trailing_var_arg = true, hide = true)]
    ignored: Vec<String>,
}

fn parse_cutoff(s: &str) -> Result<f64, String> {
    let cutoff: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if cutoff.is_finite() && cutoff >= 0.0 {
        Ok(cutoff)
    } else {
        Err(format!("{cutoff} is not a non-negative finite number"))
    }
}

fn parse_theta(s: &str) -> Result<f64, String> {
    let theta: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if theta.is_finite() && theta > 0.0 {
        Ok(theta)
    } else {
        Err(format!("{theta} is not a positive finite number"))
    }
}

/// Parse a full argument vector, program name first.
///
/// Options are scanned left to right and the last occurrence of an option wins.
/// Scanning stops at the first token that is not an option; that token and
/// everything after it end up in [`Args::ignored`].
///
/// A value-bearing option always takes the next token as its value, even one
/// starting with `-`, so `-d -x` is reported as an invalid distribution.
///
/// Never exits the process: help and every diagnostic come back as an
/// [`ArgsError`] for the caller to report.
///
/// # Example
///
/// ```
/// use fmm_args::{parse_args, Distribution};
///
/// let args = parse_args(["fmm", "-n", "4096", "--distribution", "plummer", "-D"]).unwrap();
/// assert_eq!(args.num_bodies(), 4096);
/// assert_eq!(args.distribution(), Distribution::Plummer);
/// assert!(args.dual());
/// ```
pub fn parse_args<I, T>(argv: I) -> Result<Args, ArgsError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = Args::try_parse_from(argv)?;
    trace!("{args:?}");
    Ok(args)
}

impl Default for Args {
    fn default() -> Self {
        Self {
            ncrit: DEFAULT_NCRIT,
            cutoff: DEFAULT_CUTOFF,
            distribution: Distribution::Cube,
            dual: false,
            graft: false,
            granularity: DEFAULT_GRANULARITY,
            images: DEFAULT_IMAGES,
            ine_j: false,
            mutual: false,
            get_matrix: false,
            num_bodies: DEFAULT_NUM_BODIES,
            use_ropt: false,
            expansion_order: DEFAULT_EXPANSION_ORDER,
            partitioning: Partitioning::Bisection,
            repeat: DEFAULT_REPEAT,
            nspawn: DEFAULT_NSPAWN,
            theta: DEFAULT_THETA,
            threads: DEFAULT_THREADS,
            verbose: false,
            write_output: false,
            use_rmax: false,
            ignored: Vec::new(),
        }
    }
}

impl Args {
    /// Parse the process arguments, reporting and exiting on help or error.
    ///
    /// Help goes to stderr with exit status 0; every other diagnostic goes to
    /// stderr with status 2. See [`ArgsError::report`] for the text printed.
    pub fn parse_or_exit() -> Self {
        match parse_args(std::env::args_os()) {
            Ok(args) => args,
            Err(e) => {
                eprintln!("{}", e.report());
                std::process::exit(e.exit_code());
            }
        }
    }

    /// Render the usage text, listing each option with its current default.
    pub fn usage() -> String {
        Args::command().render_help().to_string()
    }

    /// Number of bodies per leaf cell.
    pub fn ncrit(&self) -> u32 {
        self.ncrit
    }

    /// Interaction cutoff distance.
    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }

    /// Initial body distribution.
    pub fn distribution(&self) -> Distribution {
        self.distribution
    }

    /// Whether dual tree traversal is used.
    pub fn dual(&self) -> bool {
        self.dual
    }

    /// Whether remote trees are grafted onto the global tree.
    pub fn graft(&self) -> bool {
        self.graft
    }

    /// Communication granularity.
    pub fn granularity(&self) -> u32 {
        self.granularity
    }

    /// Number of periodic image levels.
    pub fn images(&self) -> u32 {
        self.images
    }

    /// Whether sources and targets are distinct sets.
    pub fn ine_j(&self) -> bool {
        self.ine_j
    }

    /// Whether mutual interaction is used.
    pub fn mutual(&self) -> bool {
        self.mutual
    }

    /// Whether the G matrix is written to file.
    pub fn get_matrix(&self) -> bool {
        self.get_matrix
    }

    /// Number of bodies.
    pub fn num_bodies(&self) -> u64 {
        self.num_bodies
    }

    /// Whether the error optimized theta is used for the MAC.
    pub fn use_ropt(&self) -> bool {
        self.use_ropt
    }

    /// Truncation order of the multipole expansion.
    pub fn expansion_order(&self) -> u32 {
        self.expansion_order
    }

    /// Spatial partitioning method.
    pub fn partitioning(&self) -> Partitioning {
        self.partitioning
    }

    /// Number of benchmark iterations.
    pub fn repeat(&self) -> u32 {
        self.repeat
    }

    /// Task-spawn threshold for the tree recursion.
    pub fn nspawn(&self) -> u32 {
        self.nspawn
    }

    /// Multipole acceptance criterion.
    pub fn theta(&self) -> f64 {
        self.theta
    }

    /// Worker thread count.
    pub fn threads(&self) -> u32 {
        self.threads
    }

    /// Whether the resolved configuration is printed.
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// Whether timings are written to file.
    pub fn write_output(&self) -> bool {
        self.write_output
    }

    /// Whether the maximum distance is used for the MAC.
    pub fn use_rmax(&self) -> bool {
        self.use_rmax
    }

    /// Tokens left unparsed after the first non-option argument.
    pub fn ignored(&self) -> &[String] {
        &self.ignored
    }
}
