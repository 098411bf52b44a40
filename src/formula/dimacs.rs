use crate::formula::{Clause, Formula, Literal};
use std::io::{self, BufRead, BufReader, Read, Write};
use thiserror::Error;

pub fn parse<R: Read>(reader: R) -> Result<Formula, DimacsParseError> {
    let reader = BufReader::new(reader);

    let mut clauses = vec![];
    let mut num_clauses = None;

    for line in reader.lines() {
        let line = line?;
        let mut line = line.split_whitespace().peekable();

        match line.peek() {
            Some(&"c") | None => continue,
            Some(&"p") => {
                let _ = line.next();

                if line.next() != Some("cnf") {
                    return Err(DimacsParseError::Format("missing 'cnf'".into()));
                }

                let _num_variables = line
                    .next()
                    .and_then(|c| c.parse::<usize>().ok())
                    .ok_or_else(|| DimacsParseError::Format("invalid num_variables".into()))?;

                num_clauses = Some(
                    line.next()
                        .and_then(|c| c.parse::<usize>().ok())
                        .ok_or_else(|| DimacsParseError::Format("invalid num_clauses".into()))?,
                );
            }
            Some(_) => {
                let expected = num_clauses
                    .ok_or_else(|| DimacsParseError::Format("missing 'p' line before clauses".into()))?;

                let mut clause = vec![];
                for x in line {
                    match parse_literal(x)? {
                        Some(l) => clause.push(l),
                        None => break,
                    }
                }
                if clause.is_empty() {
                    return Err(DimacsParseError::Format("empty clause".into()));
                }
                clauses.push(Clause::new(clause));

                if clauses.len() >= expected {
                    break;
                }
            }
        }
    }

    if num_clauses.is_none() {
        return Err(DimacsParseError::Format("missing 'p' line before clauses".into()));
    }

    Ok(Formula::new(clauses))
}

fn parse_literal(s: &str) -> Result<Option<Literal>, DimacsParseError> {
    let l = s
        .parse::<isize>()
        .map_err(|_| DimacsParseError::Format(format!("invalid literal '{}'", s)))?;
    Ok(Literal::from_dimacs(l))
}

/// Writes `formula` in DIMACS CNF, declaring `num_variables` variables.
pub fn write<W: Write>(mut writer: W, formula: &Formula, num_variables: usize) -> io::Result<()> {
    writeln!(writer, "p cnf {} {}", num_variables, formula.len())?;
    for clause in formula.clauses() {
        for literal in clause.literals() {
            write!(writer, "{} ", literal.to_dimacs())?;
        }
        writeln!(writer, "0")?;
    }
    Ok(())
}

#[derive(Debug, Error)]
pub enum DimacsParseError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed DIMACS: {0}")]
    Format(String),
}
