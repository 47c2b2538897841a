#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # fmm-args
//!
//! Command-line configuration for fast multipole N-body runs. The crate turns
//! an argument vector into an [`Args`] record that the solver reads to pick
//! its body distribution, partitioning scheme and traversal options.
//!
//! Parsing never exits the process; see [`parse_args`] and [`ArgsError`].

mod args;
mod choices;
mod error;
mod summary;
mod utils;

// Re-export key public types
pub use args::{
    parse_args, Args, DEFAULT_CUTOFF, DEFAULT_EXPANSION_ORDER, DEFAULT_GRANULARITY,
    DEFAULT_IMAGES, DEFAULT_NCRIT, DEFAULT_NSPAWN, DEFAULT_NUM_BODIES, DEFAULT_REPEAT,
    DEFAULT_THETA, DEFAULT_THREADS, SUMMARY_WIDTH,
};
pub use choices::{Distribution, ParseChoiceError, Partitioning};
pub use error::ArgsError;
pub use utils::{init_logging, run_with_threads};
