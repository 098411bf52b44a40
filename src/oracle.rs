//! The bundled oracle, backed by the varisat CDCL solver.

use crate::formula::{self, Formula};
use crate::{Error, Oracle, SatResult};
use log::debug;
use varisat::{ExtendFormula, Lit, Solver};

/// [`Oracle`] over a fresh varisat [`Solver`] per call.
#[derive(Clone, Copy, Debug, Default)]
pub struct Varisat;

impl Oracle for Varisat {
    fn solve(&mut self, formula: &Formula) -> Result<SatResult, Error> {
        let mut solver = Solver::new();
        let mut lits = vec![];
        for clause in formula.clauses() {
            lits.clear();
            lits.extend(clause.literals().map(|l| Lit::from_dimacs(l.to_dimacs())));
            solver.add_clause(&lits);
        }

        debug!("solving {} clauses", formula.len());
        let sat = solver.solve().map_err(|e| Error::Oracle(format!("{:?}", e)))?;
        if !sat {
            return Ok(SatResult::Unsatisfiable);
        }

        let model = solver
            .model()
            .ok_or_else(|| Error::Oracle("satisfiable without a model".into()))?;
        Ok(SatResult::Satisfiable(
            model
                .into_iter()
                .filter_map(|lit| formula::Literal::from_dimacs(lit.to_dimacs()))
                .collect(),
        ))
    }
}
