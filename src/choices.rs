//! Closed sets of algorithm choices selectable from the command line.
//!
//! Both enumerations are parsed from the *first character* of the supplied
//! token, so `-d p`, `-d plummer` and `-d pancake` all select
//! [`Distribution::Plummer`]. Matching is case-sensitive.

use std::fmt;
use std::str::FromStr;

/// Initial body distribution generated for the run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Distribution {
    /// Regular lattice
    Lattice,
    /// Uniform random cube
    Cube,
    /// Uniform random sphere surface
    Sphere,
    /// Uniform random octant
    Octant,
    /// Plummer model
    Plummer,
}

impl Distribution {
    /// Every distribution, in the order they are listed in the usage text.
    pub const ALL: [Distribution; 5] = [
        Distribution::Lattice,
        Distribution::Cube,
        Distribution::Sphere,
        Distribution::Octant,
        Distribution::Plummer,
    ];

    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Distribution::Lattice => "lattice",
            Distribution::Cube => "cube",
            Distribution::Sphere => "sphere",
            Distribution::Octant => "octant",
            Distribution::Plummer => "plummer",
        }
    }

    fn from_code(code: char) -> Option<Self> {
        match code {
            'c' => Some(Distribution::Cube),
            'l' => Some(Distribution::Lattice),
            'o' => Some(Distribution::Octant),
            'p' => Some(Distribution::Plummer),
            's' => Some(Distribution::Sphere),
            _ => None,
        }
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Distribution {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .next()
            .and_then(Distribution::from_code)
            .ok_or_else(|| ParseChoiceError::new("distribution", s))
    }
}

/// Spatial partitioning method used to distribute the domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Partitioning {
    /// Recursive orthogonal bisection
    Bisection,
    /// Hilbert space-filling curve ordering
    Hilbert,
    /// Octant-based sectioning
    Octsection,
}

impl Partitioning {
    /// Every partitioning method.
    pub const ALL: [Partitioning; 3] = [
        Partitioning::Bisection,
        Partitioning::Hilbert,
        Partitioning::Octsection,
    ];

    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Partitioning::Bisection => "bisection",
            Partitioning::Hilbert => "hilbert",
            Partitioning::Octsection => "octsection",
        }
    }

    fn from_code(code: char) -> Option<Self> {
        match code {
            'o' => Some(Partitioning::Octsection),
            'h' => Some(Partitioning::Hilbert),
            'b' => Some(Partitioning::Bisection),
            _ => None,
        }
    }
}

impl fmt::Display for Partitioning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Partitioning {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .next()
            .and_then(Partitioning::from_code)
            .ok_or_else(|| ParseChoiceError::new("partitioning", s))
    }
}

/// A token whose first character does not select any known choice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseChoiceError {
    /// Name of the option being parsed, e.g. `distribution`
    pub option: &'static str,
    /// The rejected token, verbatim
    pub token: String,
}

impl ParseChoiceError {
    fn new(option: &'static str, token: &str) -> Self {
        Self {
            option,
            token: token.to_string(),
        }
    }
}

impl fmt::Display for ParseChoiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {} {}", self.option, self.token)
    }
}

impl std::error::Error for ParseChoiceError {}
