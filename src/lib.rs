//! Encodes logical constraints over named propositions as CNF and enumerates every
//! satisfying assignment through a SAT oracle.

pub mod adapter;
pub mod cnf;
pub mod encode;
pub mod enumerate;
mod error;
pub mod formula;
pub mod interner;
mod oracle;

#[cfg(test)]
mod brute_force;

pub use adapter::Model;
pub use cnf::{Clause, Cnf, Literal};
pub use encode::{from_dnf, implies, one_of, ConstraintGroup};
pub use enumerate::{solve_all, solve_all_with, Enumerator};
pub use error::Error;
pub use interner::Interner;
pub use oracle::Varisat;

use formula::Formula;

/// Outcome of one oracle call. A satisfiable result carries a complete model: one signed
/// literal per variable the formula mentions.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum SatResult {
    Satisfiable(Vec<formula::Literal>),
    Unsatisfiable,
}

impl SatResult {
    pub fn is_sat(&self) -> bool {
        matches!(self, SatResult::Satisfiable(_))
    }
}

/// A complete SAT decision procedure, treated as a black box.
///
/// `Err` means the oracle itself broke down (not that the formula is unsatisfiable) and ends
/// the enumeration session.
pub trait Oracle {
    fn solve(&mut self, formula: &Formula) -> Result<SatResult, Error>;
}

impl<F> Oracle for F
where
    F: FnMut(&Formula) -> SatResult,
{
    fn solve(&mut self, formula: &Formula) -> Result<SatResult, Error> {
        Ok(self(formula))
    }
}
