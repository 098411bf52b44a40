use clap::{value_t, App, Arg};
use satenum::formula::dimacs::{self, parse, DimacsParseError};
use satenum::formula::{Formula, Variable};
use satenum::*;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::Write;

fn main() {
    env_logger::init();

    let matches = App::new("satenum")
        .about("Enumerates every model of a DIMACS CNF formula")
        .arg(Arg::with_name("INPUT").help("input file (in CNF)").index(1))
        .arg(
            Arg::with_name("max-models")
                .long("max-models")
                .value_name("N")
                .help("stop after N models")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("dimacs")
                .long("dimacs")
                .help("print the formula as submitted to the oracle instead of solving"),
        )
        .get_matches();

    let max_models = if matches.is_present("max-models") {
        Some(value_t!(matches, "max-models", usize).unwrap_or_else(|e| e.exit()))
    } else {
        None
    };

    let f = if let Some(path) = matches.value_of("INPUT") {
        parse_from_file(path)
    } else {
        parse(std::io::stdin())
    };

    let f = match f {
        Ok(f) => f,
        Err(e) => {
            eprintln!("parse error: {}", e);
            std::process::exit(-1);
        }
    };

    let cnf = match named(&f) {
        Ok(cnf) => cnf,
        Err(e) => {
            eprintln!("invalid formula: {}", e);
            std::process::exit(-1);
        }
    };

    if matches.is_present("dimacs") {
        let mut interner = Interner::new();
        let encoded = adapter::encode(&cnf, &mut interner);
        if let Err(e) = dimacs::write(std::io::stdout(), &encoded, interner.len()) {
            eprintln!("write error: {}", e);
            std::process::exit(-1);
        }
        return;
    }

    let models = Enumerator::new(&cnf, Varisat).take(max_models.unwrap_or(usize::MAX));
    match print_models(std::io::stdout().lock(), models, &variables(&f)) {
        Ok(count) => std::process::exit(if count > 0 { 0 } else { 1 }),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(-1);
        }
    }
}

/// Prints each model as a DIMACS `v` line, then a count. Returns the number of models.
fn print_models<W: Write>(
    mut out: W,
    models: impl Iterator<Item = Result<Model, Error>>,
    variables: &BTreeSet<Variable>,
) -> Result<usize, String> {
    let mut count = 0;
    for model in models {
        let model = model.map_err(|e| format!("solver error: {}", e))?;
        count += 1;
        writeln!(out, "v {} 0", model_line(variables, &model)).map_err(|e| format!("write error: {}", e))?;
    }
    writeln!(out, "c {} models", count).map_err(|e| format!("write error: {}", e))?;
    Ok(count)
}

fn parse_from_file(path: &str) -> Result<Formula, DimacsParseError> {
    let file = File::open(path)?;
    parse(file)
}

/// Names each DIMACS variable by its number.
fn named(f: &Formula) -> Result<Cnf, Error> {
    f.clauses()
        .map(|clause| {
            Clause::new(clause.literals().map(|literal| {
                let name = literal.idx().to_string();
                if literal.is_positive() {
                    Literal::pos(name)
                } else {
                    Literal::neg(name)
                }
            }))
        })
        .collect()
}

fn variables(f: &Formula) -> BTreeSet<Variable> {
    f.clauses()
        .flat_map(|clause| clause.literals().map(|literal| *literal.variable()))
        .collect()
}

fn model_line(variables: &BTreeSet<Variable>, model: &Model) -> String {
    variables
        .iter()
        .map(|v| {
            if model.contains(&v.0.to_string()) {
                format!("{}", v.0)
            } else {
                format!("-{}", v.0)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
