//! Translation between named CNF and the oracle's integer form.

use crate::cnf::Cnf;
use crate::formula::{self, Formula};
use crate::interner::Interner;
use crate::Error;
use std::collections::BTreeSet;
use std::fmt::{self, Display, Formatter};

/// The names assigned `true` by one oracle call. Names the CNF never mentioned are absent.
#[derive(Clone, PartialEq, Eq, Hash, Default, Debug)]
pub struct Model {
    true_names: BTreeSet<String>,
}

impl Model {
    pub fn contains(&self, name: &str) -> bool {
        self.true_names.contains(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.true_names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.true_names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.true_names.is_empty()
    }
}

impl<S: Into<String>> std::iter::FromIterator<S> for Model {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            true_names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl Display for Model {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        let mut first = true;
        for name in &self.true_names {
            if !first {
                f.write_str("\n")?;
            }
            first = false;
            f.write_str(name)?;
        }
        Ok(())
    }
}

/// Interns every literal of `cnf` and emits the signed-variable formula, clause order kept.
pub fn encode(cnf: &Cnf, interner: &mut Interner) -> Formula {
    Formula::new(cnf.clauses().map(|clause| {
        formula::Clause::new(clause.literals().map(|literal| {
            let id = interner.intern(literal.name());
            if literal.is_positive() {
                formula::Literal::Positive(id)
            } else {
                formula::Literal::Negative(id)
            }
        }))
    }))
}

/// Names of the positive entries in an oracle model. Fails on ids `interner` never produced.
pub fn decode(model: &[formula::Literal], interner: &Interner) -> Result<Model, Error> {
    let mut true_names = BTreeSet::new();
    for literal in model {
        let name = interner.resolve(*literal.variable())?;
        if literal.is_positive() {
            true_names.insert(name.to_string());
        }
    }
    Ok(Model { true_names })
}
