//! Lowering of higher-level constraints to CNF.

use crate::cnf::{Clause, Cnf, Literal};
use crate::Error;
use log::{trace, warn};
use std::collections::HashSet;

/// Exactly-one groups above this size get a warning: the pairwise encoding is quadratic.
pub const ONE_OF_WARN_THRESHOLD: usize = 64;

/// DNF expansions producing more clauses than this get a warning.
pub const DNF_WARN_THRESHOLD: usize = 10_000;

/// `a -> b`, as the clause `!a | b`.
pub fn implies(a: &Literal, b: &Literal) -> Clause {
    Clause::unit(a.negate()).or(b.clone())
}

/// Exactly one of `literals` holds.
///
/// Emits one at-least-one clause over the whole group followed by `!a | !b` for every
/// unordered pair `a` before `b`: `1 + n(n-1)/2` clauses in all.
pub fn one_of<I>(literals: I) -> Result<Cnf, Error>
where
    I: IntoIterator,
    I::Item: Into<Literal>,
{
    let literals = literals.into_iter().map(Into::into).collect::<Vec<Literal>>();
    if literals.is_empty() {
        return Err(Error::EmptyGroup);
    }

    let mut seen = HashSet::new();
    for literal in &literals {
        if !seen.insert(literal.name()) {
            return Err(Error::DuplicateLiteral(literal.name().to_string()));
        }
    }

    let n = literals.len();
    if n > ONE_OF_WARN_THRESHOLD {
        warn!(
            "exactly-one group of {} literals expands to {} clauses",
            n,
            1 + n * (n - 1) / 2
        );
    }

    let mut cnf = Cnf::new();
    cnf.push(Clause::new(literals.iter().cloned())?);
    for (i, a) in literals.iter().enumerate() {
        for b in &literals[i + 1..] {
            cnf.push(Clause::new(vec![a.negate(), b.negate()])?);
        }
    }
    Ok(cnf)
}

/// Converts an OR of AND-terms into an equivalent AND of ORs by distributing.
///
/// Every way of picking one literal from each term becomes a clause, so terms of sizes
/// `s1..sk` produce `s1 * ... * sk` clauses, with the last term varying fastest. An empty
/// term is trivially true and makes the whole formula an empty CNF. Zero terms would
/// mean `false` and are rejected.
pub fn from_dnf<T, L>(terms: T) -> Result<Cnf, Error>
where
    T: IntoIterator,
    T::Item: IntoIterator<Item = L>,
    L: Into<Literal>,
{
    let terms = terms
        .into_iter()
        .map(|term| term.into_iter().map(Into::into).collect::<Vec<Literal>>())
        .collect::<Vec<_>>();
    if terms.is_empty() {
        return Err(Error::EmptyDnf);
    }
    if terms.iter().any(|term| term.is_empty()) {
        trace!("DNF has an empty term, nothing to encode");
        return Ok(Cnf::new());
    }

    let count = terms
        .iter()
        .try_fold(1usize, |acc, term| acc.checked_mul(term.len()))
        .ok_or(Error::DnfTooLarge)?;
    if count > DNF_WARN_THRESHOLD {
        warn!("DNF of {} terms expands to {} clauses", terms.len(), count);
    }

    let mut cnf = Cnf::new();
    let mut picks = vec![0; terms.len()];
    'product: loop {
        cnf.push(Clause::new(
            terms.iter().zip(&picks).map(|(term, &i)| term[i].clone()),
        )?);

        // odometer step, rightmost term first
        for t in (0..terms.len()).rev() {
            picks[t] += 1;
            if picks[t] < terms[t].len() {
                continue 'product;
            }
            picks[t] = 0;
        }
        break;
    }
    debug_assert_eq!(cnf.len(), count);
    Ok(cnf)
}

/// A finite subjects-by-values grid where every subject takes exactly one value and every
/// value belongs to exactly one subject.
pub struct ConstraintGroup<S, V, F> {
    subjects: Vec<S>,
    values: Vec<V>,
    format: F,
}

impl<S, V, F> ConstraintGroup<S, V, F>
where
    F: Fn(&S, &V) -> String,
{
    pub fn new(subjects: impl IntoIterator<Item = S>, values: impl IntoIterator<Item = V>, format: F) -> Self {
        Self {
            subjects: subjects.into_iter().collect(),
            values: values.into_iter().collect(),
            format,
        }
    }

    /// The literal stating that `subject` has `value`.
    pub fn literal(&self, subject: &S, value: &V) -> Literal {
        Literal::pos((self.format)(subject, value))
    }

    pub fn subjects(&self) -> &[S] {
        &self.subjects
    }

    pub fn values(&self) -> &[V] {
        &self.values
    }

    /// Per subject, exactly one value; then per value, exactly one subject.
    pub fn constraints(&self) -> Result<Cnf, Error> {
        let mut cnf = Cnf::new();
        for subject in &self.subjects {
            cnf.add_one_of(self.values.iter().map(|value| self.literal(subject, value)))?;
        }
        for value in &self.values {
            cnf.add_one_of(self.subjects.iter().map(|subject| self.literal(subject, value)))?;
        }
        Ok(cnf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashMap;
    use test_env_log::test;

    fn holds(cnf: &Cnf, truth: &HashMap<String, bool>) -> bool {
        cnf.clauses().all(|clause| {
            clause
                .literals()
                .any(|l| truth.get(l.name()).copied().unwrap_or(false) == l.is_positive())
        })
    }

    fn assignments(names: &[String]) -> impl Iterator<Item = HashMap<String, bool>> + '_ {
        (0..1u32 << names.len()).map(move |bits| {
            names
                .iter()
                .enumerate()
                .map(|(i, name)| (name.clone(), bits & (1 << i) != 0))
                .collect()
        })
    }

    fn names(prefix: &str, n: usize) -> Vec<String> {
        (0..n).map(|i| format!("{}{}", prefix, i)).collect()
    }

    #[test]
    fn implies_is_not_a_or_b() {
        let c = implies(&Literal::pos("a"), &Literal::neg("b"));
        assert_eq!(
            c.literals().cloned().collect::<Vec<_>>(),
            vec![Literal::neg("a"), Literal::neg("b")]
        );
    }

    #[test]
    fn implies_same_literal_is_tautology() {
        let a = Literal::pos("a");
        let c = implies(&a, &a);
        assert_eq!(c.len(), 2);
        assert!(c.contains(&a) && c.contains(&!&a));
    }

    #[test]
    fn one_of_single() {
        let cnf = one_of(vec!["A"]).unwrap();
        assert_eq!(cnf.to_string(), "A");
    }

    #[test]
    fn one_of_three() {
        let cnf = one_of(vec!["A", "B", "C"]).unwrap();
        assert_eq!(cnf.to_string(), "(A | B | C) & (!A | !B) & (!A | !C) & (!B | !C)");
    }

    #[test]
    fn one_of_rejects_duplicates_and_empty() {
        assert_eq!(
            one_of(vec![Literal::pos("A"), Literal::neg("A")]),
            Err(Error::DuplicateLiteral("A".to_string()))
        );
        assert_eq!(one_of(Vec::<Literal>::new()), Err(Error::EmptyGroup));
    }

    #[test]
    fn from_dnf_distributes() {
        // (A & B) | C
        let cnf = from_dnf(vec![vec!["A", "B"], vec!["C"]]).unwrap();
        assert_eq!(cnf.to_string(), "(A | C) & (B | C)");
    }

    #[test]
    fn from_dnf_last_term_varies_fastest() {
        let cnf = from_dnf(vec![vec!["A", "B"], vec!["C", "D"]]).unwrap();
        assert_eq!(cnf.to_string(), "(A | C) & (A | D) & (B | C) & (B | D)");
    }

    #[test]
    fn from_dnf_single_term_is_units() {
        let cnf = from_dnf(vec![vec![Literal::pos("A"), Literal::neg("B")]]).unwrap();
        assert_eq!(cnf.to_string(), "A & !B");
    }

    #[test]
    fn from_dnf_degenerate() {
        assert_eq!(from_dnf(vec![Vec::<Literal>::new()]), Ok(Cnf::new()));
        assert_eq!(from_dnf(vec![vec!["A"], vec![]]), Ok(Cnf::new()));
        assert_eq!(from_dnf(Vec::<Vec<Literal>>::new()), Err(Error::EmptyDnf));
    }

    #[test]
    fn from_dnf_repeated_literal_collapses_within_clause() {
        let cnf = from_dnf(vec![vec!["A"], vec!["A", "B"]]).unwrap();
        assert_eq!(cnf.to_string(), "A & (A | B)");
    }

    #[test]
    fn constraint_group_is_a_bijection() {
        let group = ConstraintGroup::new(vec!["x", "y"], vec![1, 2], |s: &&str, v: &i32| format!("{}={}", s, v));
        let cnf = group.constraints().unwrap();
        // 2 subjects + 2 values, each a 2-literal exactly-one group of 2 clauses
        assert_eq!(cnf.len(), 8);
        assert_eq!(group.literal(&"y", &2), Literal::pos("y=2"));

        let names = vec!["x=1", "x=2", "y=1", "y=2"].into_iter().map(String::from).collect::<Vec<_>>();
        let solutions = assignments(&names).filter(|t| holds(&cnf, t)).count();
        assert_eq!(solutions, 2);
    }

    proptest! {
        #[test]
        fn one_of_means_exactly_one(n in 1usize..7) {
            let group = names("v", n);
            let cnf = one_of(group.iter().map(|s| s.as_str())).unwrap();
            prop_assert_eq!(cnf.len(), 1 + n * (n - 1) / 2);
            for truth in assignments(&group) {
                let trues = truth.values().filter(|&&b| b).count();
                prop_assert_eq!(holds(&cnf, &truth), trues == 1);
            }
        }

        #[test]
        fn from_dnf_is_equivalent(
            terms in prop::collection::vec(
                prop::collection::vec((0..4usize, any::<bool>()), 1..4),
                1..4,
            )
        ) {
            let terms = terms
                .into_iter()
                .map(|term| {
                    term.into_iter()
                        .map(|(v, positive)| {
                            let name = format!("v{}", v);
                            if positive { Literal::pos(name) } else { Literal::neg(name) }
                        })
                        .collect::<Vec<_>>()
                })
                .collect::<Vec<_>>();
            let cnf = from_dnf(terms.clone()).unwrap();
            prop_assert_eq!(cnf.len(), terms.iter().map(Vec::len).product::<usize>());

            for truth in assignments(&names("v", 4)) {
                let dnf_holds = terms.iter().any(|term| {
                    term.iter().all(|l| truth[l.name()] == l.is_positive())
                });
                prop_assert_eq!(holds(&cnf, &truth), dnf_holds);
            }
        }
    }
}
