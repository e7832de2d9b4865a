//! A reader for DIMACS CNF formulas.
//!
//! The input begins with comment lines, blank lines, and a problem line
//! `p cnf <variables> <clauses>`; the remainder is a sequence of clauses,
//! each a run of signed nonzero integer tokens terminated by `0`, with
//! arbitrary whitespace throughout. A line beginning `%` ends the formula
//! early, as in the SATLIB collections.
//!
//! Literals beyond the declared variable count and a clause count
//! disagreeing with the problem line are parse errors. Unsatisfiability
//! noticed while reading --- an empty clause, or contradictory units ---
//! surfaces as a build error with the context state set accordingly.

use crate::{
    context::GenericContext,
    misc::log::targets,
    structures::literal::Literal,
    types::err::{self, ParseError},
};

use std::io::BufRead;

/// What a read added to the context.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ParserInfo {
    pub expected_variables: Option<usize>,
    pub expected_clauses: Option<usize>,
    pub added_clauses: usize,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Reads a DIMACS formula into the context.
    ///
    /// ```rust
    /// # use stoat_sat::context::Context;
    /// # use stoat_sat::config::Config;
    /// # use stoat_sat::reports::Report;
    /// # use std::io::Write;
    /// let mut the_context = Context::from_config(Config::default());
    ///
    /// let mut dimacs = vec![];
    /// let _ = dimacs.write(b"
    /// c A pair of implications.
    /// p cnf 2 2
    /// -1  2 0
    /// -2  1 0
    /// ");
    ///
    /// assert!(the_context.read_dimacs(dimacs.as_slice()).is_ok());
    /// assert!(the_context.solve().is_ok());
    /// assert_eq!(the_context.report(), Report::Satisfiable);
    /// ```
    pub fn read_dimacs(&mut self, mut reader: impl BufRead) -> Result<ParserInfo, err::ErrorKind> {
        let mut buffer = String::default();
        let mut clause_buffer: Vec<Literal> = Vec::default();
        let mut info = ParserInfo::default();
        let mut lines = 0;

        // First phase: read until the problem line has been seen.
        'preamble_loop: loop {
            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => return Ok(info),
                Ok(_) => lines += 1,
                Err(_) => return Err(err::ErrorKind::from(ParseError::Line(lines))),
            }

            match buffer.chars().find(|character| !character.is_whitespace()) {
                None => continue 'preamble_loop,
                Some('c') => continue 'preamble_loop,
                Some('p') => {
                    let mut details = buffer.split_whitespace();
                    let variables: usize = match details.nth(2) {
                        None => return Err(err::ErrorKind::from(ParseError::ProblemSpecification)),
                        Some(string) => match string.parse() {
                            Err(_) => {
                                return Err(err::ErrorKind::from(ParseError::ProblemSpecification))
                            }
                            Ok(count) => count,
                        },
                    };
                    let clauses: usize = match details.next() {
                        None => return Err(err::ErrorKind::from(ParseError::ProblemSpecification)),
                        Some(string) => match string.parse() {
                            Err(_) => {
                                return Err(err::ErrorKind::from(ParseError::ProblemSpecification))
                            }
                            Ok(count) => count,
                        },
                    };

                    self.ensure_variables(variables)?;
                    info.expected_variables = Some(variables);
                    info.expected_clauses = Some(clauses);
                    log::info!(target: targets::PARSE, "Expecting {variables} variables over {clauses} clauses");
                    break 'preamble_loop;
                }
                // Any other line before the problem line is a comment.
                Some(_) => continue 'preamble_loop,
            }
        }

        let bound = info.expected_variables.unwrap_or(0) as i64;

        // Second phase: read clauses until the input ends.
        'formula_loop: loop {
            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => break 'formula_loop,
                Ok(_) => lines += 1,
                Err(_) => return Err(err::ErrorKind::from(ParseError::Line(lines))),
            }

            match buffer.chars().next() {
                Some('%') => break 'formula_loop,
                Some('c') => continue 'formula_loop,
                _ => {}
            }

            for item in buffer.split_whitespace() {
                let int: i64 = match item.parse() {
                    Err(_) => return Err(err::ErrorKind::from(ParseError::Line(lines))),
                    Ok(int) => int,
                };
                match int {
                    0 => {
                        let clause = std::mem::take(&mut clause_buffer);
                        self.add_clause(clause)?;
                        info.added_clauses += 1;
                    }
                    _ => {
                        if int.unsigned_abs() as i64 > bound {
                            return Err(err::ErrorKind::from(ParseError::LiteralBound(int)));
                        }
                        clause_buffer.push(Literal::from(int as i32));
                    }
                }
            }
        }

        if !clause_buffer.is_empty() {
            return Err(err::ErrorKind::from(ParseError::MissingDelimiter));
        }

        if let Some(expected) = info.expected_clauses {
            if expected != info.added_clauses {
                return Err(err::ErrorKind::from(ParseError::ClauseCount {
                    expected,
                    found: info.added_clauses,
                }));
            }
        }

        Ok(info)
    }
}
