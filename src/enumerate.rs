//! Exhaustive model enumeration with blocking clauses.

use crate::adapter::{self, Model};
use crate::cnf::Cnf;
use crate::formula::{self, Formula};
use crate::interner::Interner;
use crate::oracle::Varisat;
use crate::{Error, Oracle, SatResult};
use log::{debug, trace};
use std::iter::FusedIterator;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum State {
    Searching,
    Exhausted,
}

/// Lazily yields every model of a CNF, each exactly once, in discovery order.
///
/// The enumerator owns its interner for the whole session, so the blocking clause built from
/// one model always names the same variables the oracle saw. After each model the clause
/// `!l1 | ... | !ln` over that model's full assignment is appended to the working formula;
/// no new variables are ever introduced, so the search ends after finitely many calls.
pub struct Enumerator<O> {
    oracle: O,
    interner: Interner,
    working: Formula,
    state: State,
    calls: usize,
}

impl<O: Oracle> Enumerator<O> {
    pub fn new(cnf: &Cnf, oracle: O) -> Self {
        let mut interner = Interner::new();
        let working = adapter::encode(cnf, &mut interner);
        debug!(
            "enumerating models of {} clauses over {} variables",
            working.len(),
            interner.len()
        );
        Self {
            oracle,
            interner,
            working,
            state: State::Searching,
            calls: 0,
        }
    }

    /// Oracle invocations so far.
    pub fn calls(&self) -> usize {
        self.calls
    }

    fn step(&mut self) -> Result<Option<Model>, Error> {
        self.calls += 1;
        let assignment = match self.oracle.solve(&self.working)? {
            SatResult::Satisfiable(assignment) => assignment,
            SatResult::Unsatisfiable => {
                debug!("exhausted after {} oracle calls", self.calls);
                self.state = State::Exhausted;
                return Ok(None);
            }
        };

        // Every id must come from this session's interner, so the blocking clause below only
        // mentions variables of the caller's CNF.
        let model = adapter::decode(&assignment, &self.interner)?;

        if assignment.is_empty() {
            // nothing to block: the empty assignment is the only one
            self.state = State::Exhausted;
        } else {
            let blocking = formula::Clause::new(assignment.iter().map(formula::Literal::negated));
            trace!("blocking clause {}", blocking);
            self.working.push(blocking);
        }
        debug!("model #{} with {} true literals", self.calls, model.len());
        Ok(Some(model))
    }
}

impl<O: Oracle> Iterator for Enumerator<O> {
    type Item = Result<Model, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.state == State::Exhausted {
            return None;
        }
        match self.step() {
            Ok(model) => model.map(Ok),
            Err(e) => {
                self.state = State::Exhausted;
                Some(Err(e))
            }
        }
    }
}

impl<O: Oracle> FusedIterator for Enumerator<O> {}

/// Every model of `cnf`, found with the bundled solver.
pub fn solve_all(cnf: &Cnf) -> Result<Vec<Model>, Error> {
    solve_all_with(cnf, Varisat)
}

/// Every model of `cnf`, found with `oracle`. An unsatisfiable `cnf` gives an empty list.
pub fn solve_all_with<O: Oracle>(cnf: &Cnf, oracle: O) -> Result<Vec<Model>, Error> {
    Enumerator::new(cnf, oracle).collect()
}
