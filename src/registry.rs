//! The set of available algorithms, shared by every front end.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::comparison::*;
use crate::distribution::{bucket_sort, counting_sort, radix_sort};
use crate::error::{SortError, SortResult};
use crate::value::Dataset;
use crate::Sorter;

/// Every algorithm the crate provides
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Algorithm {
    Bubble,
    Quick,
    Merge,
    Selection,
    Insertion,
    Heap,
    Shell,
    Counting,
    Radix,
    Bucket,
    Comb,
    Cocktail,
    Gnome,
}

impl Algorithm {
    pub const ALL: [Algorithm; 13] = [
        Algorithm::Bubble,
        Algorithm::Quick,
        Algorithm::Merge,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Heap,
        Algorithm::Shell,
        Algorithm::Counting,
        Algorithm::Radix,
        Algorithm::Bucket,
        Algorithm::Comb,
        Algorithm::Cocktail,
        Algorithm::Gnome,
    ];

    /// Canonical registry key
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble",
            Algorithm::Quick => "Quick",
            Algorithm::Merge => "Merge",
            Algorithm::Selection => "Selection",
            Algorithm::Insertion => "Insertion",
            Algorithm::Heap => "Heap",
            Algorithm::Shell => "Shell",
            Algorithm::Counting => "Counting",
            Algorithm::Radix => "Radix",
            Algorithm::Bucket => "Bucket",
            Algorithm::Comb => "Comb",
            Algorithm::Cocktail => "Cocktail",
            Algorithm::Gnome => "Gnome",
        }
    }

    /// Case-insensitive lookup by name
    pub fn lookup(name: &str) -> Option<Algorithm> {
        let name = name.trim();
        Algorithm::ALL
            .into_iter()
            .find(|alg| alg.name().eq_ignore_ascii_case(name))
    }

    /// Registered names in lexicographic order
    pub fn names() -> Vec<&'static str> {
        let mut names: Vec<&'static str> = Algorithm::ALL.iter().map(|a| a.name()).collect();
        names.sort_unstable();
        names
    }

    /// Element kind this algorithm accepts
    pub fn requirement(self) -> &'static str {
        match self {
            Algorithm::Counting | Algorithm::Radix => "integers",
            Algorithm::Bucket => "floats in [0.0, 1.0)",
            _ => "any comparable values",
        }
    }

    /// Whether `data` meets this algorithm's element precondition
    pub fn accepts(self, data: &Dataset) -> bool {
        match (self, data) {
            (_, data) if data.is_empty() => true,
            (Algorithm::Counting | Algorithm::Radix, Dataset::Integers(_)) => true,
            (Algorithm::Counting | Algorithm::Radix, _) => false,
            (Algorithm::Bucket, Dataset::Floats(v)) => v.iter().all(|x| (0.0..1.0).contains(x)),
            (Algorithm::Bucket, _) => false,
            _ => true,
        }
    }

    fn mismatch(self, data: &Dataset) -> SortError {
        SortError::TypeMismatch {
            algorithm: self.name(),
            expected: self.requirement(),
            found: data.kind(),
        }
    }
}

/// Dispatch a comparison sort over every dataset variant
macro_rules! sort_any {
    ($sort:ident, $data:expr) => {
        match $data {
            Dataset::Integers(v) => Dataset::Integers($sort(v)),
            Dataset::Floats(v) => Dataset::Floats($sort(v)),
            Dataset::Mixed(v) => Dataset::Mixed($sort(v)),
            Dataset::Text(v) => Dataset::Text($sort(v)),
        }
    };
}

impl Sorter for Algorithm {
    fn sort(&self, data: &Dataset) -> SortResult<Dataset> {
        if data.is_empty() {
            return Ok(data.clone());
        }

        let sorted = match (self, data) {
            (Algorithm::Bubble, data) => sort_any!(bubble_sort, data),
            (Algorithm::Quick, data) => sort_any!(quick_sort, data),
            (Algorithm::Merge, data) => sort_any!(merge_sort, data),
            (Algorithm::Selection, data) => sort_any!(selection_sort, data),
            (Algorithm::Insertion, data) => sort_any!(insertion_sort, data),
            (Algorithm::Heap, data) => sort_any!(heap_sort, data),
            (Algorithm::Shell, data) => sort_any!(shell_sort, data),
            (Algorithm::Comb, data) => sort_any!(comb_sort, data),
            (Algorithm::Cocktail, data) => sort_any!(cocktail_sort, data),
            (Algorithm::Gnome, data) => sort_any!(gnome_sort, data),
            (Algorithm::Counting, Dataset::Integers(v)) => Dataset::Integers(counting_sort(v)?),
            (Algorithm::Radix, Dataset::Integers(v)) => Dataset::Integers(radix_sort(v)),
            (Algorithm::Bucket, Dataset::Floats(v)) => Dataset::Floats(bucket_sort(v)?),
            (alg, data) => return Err(alg.mismatch(data)),
        };
        Ok(sorted)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::lookup(s).ok_or_else(|| SortError::UnknownAlgorithm {
            name: s.to_string(),
            available: Algorithm::names()
                .iter()
                .map(|n| n.to_lowercase())
                .collect::<Vec<_>>()
                .join(", "),
        })
    }
}
