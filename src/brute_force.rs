use crate::formula::{Formula, Literal, Variable};
use crate::SatResult;
use std::collections::{BTreeSet, HashMap};

// Simple brute-force implementations for use as ground truth in tests

fn variables(f: &Formula) -> Vec<Variable> {
    f.clauses()
        .flat_map(|clause| clause.literals().map(|literal| *literal.variable()))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Does `model` make every clause of `f` true? Variables the model has no opinion on count as false.
pub(crate) fn satisfies(f: &Formula, model: &[Literal]) -> bool {
    let values: HashMap<_, _> = model.iter().map(|l| (*l.variable(), l.is_positive())).collect();
    f.clauses().all(|clause| {
        clause
            .literals()
            .any(|literal| values.get(literal.variable()).copied().unwrap_or(false) == literal.is_positive())
    })
}

/// Every total assignment over the variables of `f` that satisfies it, in counting order.
pub(crate) fn all_models(f: &Formula) -> Vec<Vec<Literal>> {
    let variables = variables(f);
    assert!(variables.len() <= 15); // just for safety

    let mut models = vec![];
    for assignment in 0..2u32.pow(variables.len() as u32) {
        let model = variables
            .iter()
            .enumerate()
            .map(|(x, v)| {
                if assignment & (1 << x) == 0 {
                    Literal::Positive(*v)
                } else {
                    Literal::Negative(*v)
                }
            })
            .collect::<Vec<_>>();
        if satisfies(f, &model) {
            models.push(model);
        }
    }
    models
}

pub(crate) fn solve_brute_force(f: &Formula) -> SatResult {
    match all_models(f).into_iter().next() {
        Some(model) => SatResult::Satisfiable(model),
        None => SatResult::Unsatisfiable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::{n, p, Clause};

    #[test]
    fn solve_bcp_sat() {
        let c1 = Clause::new(vec![p(0), p(1)]);
        let c2 = Clause::new(vec![n(0)]);
        let f = Formula::new(vec![c1, c2]);

        assert_eq!(solve_brute_force(&f), SatResult::Satisfiable(vec![n(0), p(1)]));
    }

    #[test]
    fn solve_bcp_unsat() {
        let c1 = Clause::new(vec![p(0), p(1)]);
        let c2 = Clause::new(vec![n(0)]);
        let c3 = Clause::new(vec![n(1)]);
        let f = Formula::new(vec![c1, c2, c3]);

        assert_eq!(solve_brute_force(&f), SatResult::Unsatisfiable);
    }

    #[test]
    fn counts_exactly_one_models() {
        let c1 = Clause::new(vec![p(1), p(2)]);
        let c2 = Clause::new(vec![n(1), n(2)]);
        let f = Formula::new(vec![c1, c2]);

        assert_eq!(all_models(&f), vec![vec![n(1), p(2)], vec![p(1), n(2)]]);
    }
}
