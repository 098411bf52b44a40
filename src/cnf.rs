//! CNF over named literals, as authored by callers.

use crate::encode;
use crate::Error;
use std::fmt::{self, Display, Formatter};
use std::ops::Not;

/// A named proposition plus a polarity. The name is opaque; negation never touches it.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Literal {
    name: String,
    positive: bool,
}

impl Literal {
    pub fn pos(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            positive: true,
        }
    }

    pub fn neg(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            positive: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_positive(&self) -> bool {
        self.positive
    }

    pub fn negate(&self) -> Self {
        Self {
            name: self.name.clone(),
            positive: !self.positive,
        }
    }
}

impl Not for Literal {
    type Output = Literal;

    fn not(mut self) -> Literal {
        self.positive = !self.positive;
        self
    }
}

impl Not for &Literal {
    type Output = Literal;

    fn not(self) -> Literal {
        self.negate()
    }
}

impl From<&str> for Literal {
    fn from(name: &str) -> Self {
        Literal::pos(name)
    }
}

impl From<String> for Literal {
    fn from(name: String) -> Self {
        Literal::pos(name)
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        if !self.positive {
            f.write_str("!")?;
        }
        f.write_str(&self.name)
    }
}

/// A non-empty disjunction of literals. Duplicates are dropped, first occurrence wins.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Clause {
    literals: Vec<Literal>,
}

impl Clause {
    pub fn new(disjuncts: impl IntoIterator<Item = Literal>) -> Result<Self, Error> {
        let mut literals: Vec<Literal> = Vec::new();
        for literal in disjuncts {
            if !literals.contains(&literal) {
                literals.push(literal);
            }
        }
        if literals.is_empty() {
            return Err(Error::EmptyClause);
        }
        Ok(Self { literals })
    }

    pub fn unit(literal: Literal) -> Self {
        Self {
            literals: vec![literal],
        }
    }

    /// Adds `literal` to the disjunction unless already present.
    pub fn or(mut self, literal: Literal) -> Self {
        if !self.literals.contains(&literal) {
            self.literals.push(literal);
        }
        self
    }

    pub fn literals(&self) -> impl Iterator<Item = &Literal> {
        self.literals.iter()
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    /// Always false; a clause is never empty.
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn contains(&self, literal: &Literal) -> bool {
        self.literals.contains(literal)
    }
}

impl Display for Clause {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        let mut first = true;
        for literal in &self.literals {
            if !first {
                f.write_str(" | ")?;
            }
            first = false;
            write!(f, "{}", literal)?;
        }
        Ok(())
    }
}

/// An ordered conjunction of clauses. Order is kept so oracle submissions are reproducible.
///
/// `Cnf` doubles as the builder for a constraint set: start from [`Cnf::new`] and `add` to it.
#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct Cnf {
    clauses: Vec<Clause>,
}

impl Cnf {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clauses(&self) -> impl Iterator<Item = &Clause> {
        self.clauses.iter()
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn push(&mut self, clause: Clause) -> &mut Self {
        self.clauses.push(clause);
        self
    }

    pub fn add(&mut self, clauses: impl IntoIterator<Item = Clause>) -> &mut Self {
        self.clauses.extend(clauses);
        self
    }

    pub fn add_unit(&mut self, literal: impl Into<Literal>) -> &mut Self {
        self.push(Clause::unit(literal.into()))
    }

    pub fn add_implies(&mut self, a: impl Into<Literal>, b: impl Into<Literal>) -> &mut Self {
        self.push(encode::implies(&a.into(), &b.into()))
    }

    pub fn add_one_of<I>(&mut self, literals: I) -> Result<&mut Self, Error>
    where
        I: IntoIterator,
        I::Item: Into<Literal>,
    {
        let cnf = encode::one_of(literals)?;
        Ok(self.add(cnf))
    }

    pub fn add_dnf<T, L>(&mut self, terms: T) -> Result<&mut Self, Error>
    where
        T: IntoIterator,
        T::Item: IntoIterator<Item = L>,
        L: Into<Literal>,
    {
        let cnf = encode::from_dnf(terms)?;
        Ok(self.add(cnf))
    }
}

impl Extend<Clause> for Cnf {
    fn extend<I: IntoIterator<Item = Clause>>(&mut self, iter: I) {
        self.clauses.extend(iter);
    }
}

impl std::iter::FromIterator<Clause> for Cnf {
    fn from_iter<I: IntoIterator<Item = Clause>>(iter: I) -> Self {
        Self {
            clauses: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Cnf {
    type Item = Clause;
    type IntoIter = std::vec::IntoIter<Clause>;

    fn into_iter(self) -> Self::IntoIter {
        self.clauses.into_iter()
    }
}

impl<'a> IntoIterator for &'a Cnf {
    type Item = &'a Clause;
    type IntoIter = std::slice::Iter<'a, Clause>;

    fn into_iter(self) -> Self::IntoIter {
        self.clauses.iter()
    }
}

impl Display for Cnf {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        let mut first = true;
        for clause in &self.clauses {
            if !first {
                f.write_str(" & ")?;
            }
            first = false;
            if clause.len() > 1 {
                write!(f, "({})", clause)?;
            } else {
                write!(f, "{}", clause)?;
            }
        }
        Ok(())
    }
}
