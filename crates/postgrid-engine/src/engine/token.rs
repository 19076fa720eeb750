//! Lexing of cell bodies into postfix tokens.
//!
//! A cell body is a whitespace-separated list of words. Each word becomes
//! exactly one [`Token`]; anything that is not a cell reference, an
//! operator or a plain decimal number becomes [`Token::Error`]. Lexing
//! never fails, errors are carried as tokens and surface at evaluation.

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

use super::cell_ref::CellRef;

/// One of the four binary arithmetic operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub fn from_char(c: char) -> Option<Operator> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    /// Apply the operator as `lhs OP rhs`.
    ///
    /// Division follows IEEE 754: dividing by zero yields an infinity or
    /// NaN, not an error.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Sub => lhs - rhs,
            Operator::Mul => lhs * rhs,
            Operator::Div => lhs / rhs,
        }
    }
}

/// A single lexed word of a postfix program, or an evaluation result.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Token {
    Number(f64),
    Cell(CellRef),
    Operator(Operator),
    Error,
}

fn number_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]+(\.[0-9]*)?$").expect("number regex must compile"))
}

impl Token {
    /// Classify one trimmed, whitespace-free word.
    ///
    /// Precedence: cell reference, operator, number. Everything else,
    /// including the empty string, is [`Token::Error`].
    pub fn from_word(word: &str) -> Token {
        if word.is_empty() {
            return Token::Error;
        }

        if let Some(cell) = CellRef::parse(word) {
            return Token::Cell(cell);
        }

        let mut chars = word.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(op) = Operator::from_char(c) {
                return Token::Operator(op);
            }
        }

        if number_re().is_match(word) {
            return match word.parse::<f64>() {
                Ok(n) => Token::Number(n),
                Err(_) => Token::Error,
            };
        }

        Token::Error
    }

    /// The numeric payload, if this is a number token.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Token::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", super::format::format_number(*n)),
            Token::Cell(cell) => write!(f, "{}", cell),
            Token::Operator(op) => write!(f, "{}", op.symbol()),
            Token::Error => f.write_str(super::format::ERROR_MARKER),
        }
    }
}

/// Split a cell body on whitespace and lex each word.
///
/// An empty or all-whitespace body is the program `[Number(0.0)]`.
pub fn tokenize(body: &str) -> Vec<Token> {
    let tokens: Vec<Token> = body.split_whitespace().map(Token::from_word).collect();
    if tokens.is_empty() {
        vec![Token::Number(0.0)]
    } else {
        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers() {
        assert_eq!(Token::from_word("0"), Token::Number(0.0));
        assert_eq!(Token::from_word("1"), Token::Number(1.0));
        assert_eq!(Token::from_word("0."), Token::Number(0.0));
        assert_eq!(Token::from_word("0.0"), Token::Number(0.0));
        assert_eq!(Token::from_word("45.0"), Token::Number(45.0));
        assert_eq!(Token::from_word("123.45"), Token::Number(123.45));
    }

    #[test]
    fn test_malformed_words_are_errors() {
        for word in ["-1", "43.0a", "aa", "a1.0", "aa10", "az1c", "", "+1", ".5", "1..2", "1e5"] {
            assert_eq!(Token::from_word(word), Token::Error, "word {:?}", word);
        }
    }

    #[test]
    fn test_cells() {
        assert_eq!(Token::from_word("a13"), Token::Cell(CellRef::new(0, 12)));
        assert_eq!(Token::from_word("A12"), Token::Cell(CellRef::new(0, 11)));
        assert_eq!(Token::from_word("z1"), Token::Cell(CellRef::new(25, 0)));
        assert_eq!(Token::from_word("a0"), Token::Error);
    }

    #[test]
    fn test_operators() {
        assert_eq!(Token::from_word("+"), Token::Operator(Operator::Add));
        assert_eq!(Token::from_word("-"), Token::Operator(Operator::Sub));
        assert_eq!(Token::from_word("*"), Token::Operator(Operator::Mul));
        assert_eq!(Token::from_word("/"), Token::Operator(Operator::Div));
        assert_eq!(Token::from_word("++"), Token::Error);
    }

    #[test]
    fn test_tokenize_splits_on_whitespace_runs() {
        assert_eq!(
            tokenize("  1\t 2   +  "),
            vec![
                Token::Number(1.0),
                Token::Number(2.0),
                Token::Operator(Operator::Add)
            ]
        );
    }

    #[test]
    fn test_tokenize_empty_body_is_zero() {
        assert_eq!(tokenize(""), vec![Token::Number(0.0)]);
        assert_eq!(tokenize(" \t "), vec![Token::Number(0.0)]);
    }

    #[test]
    fn test_division_by_zero_is_not_an_error() {
        assert_eq!(Operator::Div.apply(1.0, 0.0), f64::INFINITY);
        assert!(Operator::Div.apply(0.0, 0.0).is_nan());
    }

    #[test]
    fn test_display_round_trips_source_form() {
        let words: Vec<String> = tokenize("b2 3 * x")
            .iter()
            .map(|t| t.to_string())
            .collect();
        assert_eq!(words, vec!["B2", "3.0", "*", "#ERR"]);
    }
}
