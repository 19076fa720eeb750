//! Cell data structures for the spreadsheet grid.
//!
//! - [`Cell`] - A cell's postfix program plus its evaluation state
//! - [`CellState`] - Where a cell is in its evaluation lifecycle

use super::Token;
use super::token::tokenize;

/// Evaluation lifecycle of a cell.
///
/// `Unevaluated -> Started -> Finished`. A cell seen again while
/// `Started` is part of a reference cycle. `Finished` is terminal and
/// holds the memoized result.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CellState {
    Unevaluated,
    Started,
    Finished(Token),
}

/// A cell in the spreadsheet grid.
#[derive(Clone, Debug)]
pub struct Cell {
    tokens: Vec<Token>,
    state: CellState,
}

impl Cell {
    /// Create a cell from its raw body text.
    pub fn new(body: &str) -> Cell {
        Cell::from_tokens(tokenize(body))
    }

    /// Create a cell from an already-lexed program.
    /// An empty program is treated like an empty body.
    pub fn from_tokens(tokens: Vec<Token>) -> Cell {
        let tokens = if tokens.is_empty() {
            vec![Token::Number(0.0)]
        } else {
            tokens
        };
        Cell {
            tokens,
            state: CellState::Unevaluated,
        }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn state(&self) -> CellState {
        self.state
    }

    /// The cached result, once the cell is finished.
    pub fn value(&self) -> Option<Token> {
        match self.state {
            CellState::Finished(token) => Some(token),
            _ => None,
        }
    }

    pub(crate) fn start(&mut self) {
        self.state = CellState::Started;
    }

    pub(crate) fn finish(&mut self, result: Token) -> Token {
        self.state = CellState::Finished(result);
        result
    }
}
