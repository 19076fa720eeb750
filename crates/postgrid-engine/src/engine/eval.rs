//! Stack-machine evaluation of a postfix program.
//!
//! The evaluator knows nothing about the grid: cell references are handed
//! to a resolver callback, which the [`Sheet`](super::Sheet) implements by
//! recursively evaluating the referenced cell.

use super::{CellRef, Token};

/// What a resolver returns for a cell reference.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Resolved {
    /// Push this value (a number or an error) and continue.
    Value(Token),
    /// Resolution could not proceed (depth guard); the program fails.
    Abort,
}

/// Evaluate `tokens` left to right and return the single result.
///
/// `x y OP` computes `x OP y`. The result is [`Token::Error`] if an
/// operator lacks two operands, an operand is an error, the program
/// contains an error token, or the stack does not end with exactly one
/// value.
pub fn eval_postfix<F>(tokens: &[Token], mut resolve: F) -> Token
where
    F: FnMut(CellRef) -> Resolved,
{
    let mut stack: Vec<Token> = Vec::with_capacity(tokens.len());

    for token in tokens {
        match *token {
            Token::Number(_) => stack.push(*token),
            Token::Cell(cell) => match resolve(cell) {
                Resolved::Value(value) => stack.push(value),
                Resolved::Abort => return Token::Error,
            },
            Token::Operator(op) => {
                let (Some(rhs), Some(lhs)) = (stack.pop(), stack.pop()) else {
                    return Token::Error;
                };
                let (Token::Number(lhs), Token::Number(rhs)) = (lhs, rhs) else {
                    return Token::Error;
                };
                stack.push(Token::Number(op.apply(lhs, rhs)));
            }
            Token::Error => return Token::Error,
        }
    }

    match stack.as_slice() {
        [result] => *result,
        _ => Token::Error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::tokenize;

    fn eval_str(body: &str) -> Token {
        eval_postfix(&tokenize(body), |_| Resolved::Value(Token::Error))
    }

    #[test]
    fn test_basic_operators() {
        assert_eq!(eval_str("1 2 +"), Token::Number(3.0));
        assert_eq!(eval_str("1 2 -"), Token::Number(-1.0));
        assert_eq!(eval_str("1 2 *"), Token::Number(2.0));
        assert_eq!(eval_str("1 2 /"), Token::Number(0.5));
    }

    #[test]
    fn test_nested_expression() {
        // (5 - 3) * (4 + 6) / 2
        assert_eq!(eval_str("5 3 - 4 6 + * 2 /"), Token::Number(10.0));
    }

    #[test]
    fn test_missing_operands() {
        for op in ["+", "-", "*", "/"] {
            assert_eq!(eval_str(op), Token::Error);
            assert_eq!(eval_str(&format!("1 {}", op)), Token::Error);
        }
    }

    #[test]
    fn test_leftover_operands() {
        assert_eq!(eval_str("1 1 1 +"), Token::Error);
        assert_eq!(eval_str("1 1 1 1 *"), Token::Error);
    }

    #[test]
    fn test_error_token_aborts() {
        assert_eq!(eval_str("1 x +"), Token::Error);
        assert_eq!(eval_str("1 2 + oops"), Token::Error);
    }

    #[test]
    fn test_error_operand_propagates() {
        let tokens = tokenize("a1 1 +");
        assert_eq!(
            eval_postfix(&tokens, |_| Resolved::Value(Token::Error)),
            Token::Error
        );
    }

    #[test]
    fn test_resolver_receives_address() {
        let tokens = tokenize("b2 c3 -");
        let mut seen = Vec::new();
        let result = eval_postfix(&tokens, |cell| {
            seen.push(cell);
            Resolved::Value(Token::Number((cell.col * 10) as f64))
        });
        assert_eq!(result, Token::Number(-10.0));
        assert_eq!(seen, vec![CellRef::new(1, 1), CellRef::new(2, 2)]);
    }

    #[test]
    fn test_abort_stops_evaluation() {
        let tokens = tokenize("a1 b1 +");
        let mut calls = 0;
        let result = eval_postfix(&tokens, |_| {
            calls += 1;
            Resolved::Abort
        });
        assert_eq!(result, Token::Error);
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_division_by_zero_yields_infinity() {
        assert_eq!(eval_str("1 0 /"), Token::Number(f64::INFINITY));
        assert!(matches!(eval_str("0 0 /"), Token::Number(n) if n.is_nan()));
    }

    #[test]
    fn test_empty_program() {
        assert_eq!(eval_postfix(&[], |_| Resolved::Abort), Token::Error);
    }
}
