/*!
Error types used in the library.

- Some of these are internally expected --- a BCP conflict is the normal
  control path of a solve, not a failure.
- Others mark states no solve should reach, and surface as fatal errors
  through the CLI.

Each subsystem has its own enum, unioned in [ErrorKind] through `From`
implementations.
*/

use crate::db::Handle;

/// A union of varied error kinds.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// An error during conflict analysis.
    Analysis(AnalysisError),

    /// An error when building a formula.
    Build(BuildError),

    /// An error in the clause database.
    ClauseDB(ClauseDBError),

    /// An error related to parsing.
    Parse(ParseError),

    /// The attempted action could not be completed given the state of the
    /// context.
    InvalidState,
}

/// An error during conflict analysis.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AnalysisError {
    /// Resolution produced an empty clause without a unique implication
    /// point.
    EmptyResolution,
}

impl From<AnalysisError> for ErrorKind {
    fn from(e: AnalysisError) -> Self {
        ErrorKind::Analysis(e)
    }
}

/// Noted errors during boolean constraint propagation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BCPError {
    /// A conflict was found.
    /// This is expected from time to time, and a learning opportunity.
    Conflict(Handle),
}

/// Noted errors when building a formula.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildError {
    /// An empty clause was added, a clear instance of unsatisfiability.
    EmptyClause,

    /// The clause added contradicts the root-level valuation.
    Unsatisfiable,

    /// More variables were requested than a literal can index.
    VariableBound,
}

impl From<BuildError> for ErrorKind {
    fn from(e: BuildError) -> Self {
        ErrorKind::Build(e)
    }
}

/// Errors in the clause database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClauseDBError {
    /// The arena has grown past the range of a handle.
    StorageExhausted,
}

impl From<ClauseDBError> for ErrorKind {
    fn from(e: ClauseDBError) -> Self {
        ErrorKind::ClauseDB(e)
    }
}

/// Errors during parsing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// Some issue with the problem specification in a DIMACS input.
    ProblemSpecification,

    /// Some unspecific problem at a specific line.
    Line(usize),

    /// A clause was left open at the end of the input.
    MissingDelimiter,

    /// No file was found.
    NoFile,

    /// A literal outside the declared variable range.
    LiteralBound(i64),

    /// The clause count read disagrees with the problem line.
    ClauseCount { expected: usize, found: usize },
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}
