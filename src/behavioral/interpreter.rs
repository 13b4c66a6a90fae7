//! Behavioral Pattern: Interpreter
//! Example: evaluating arithmetic expression trees built from postfix text
//!
//! Run with: cargo run --bin interpreter

use std::collections::HashMap;
use std::fmt;

use tracing::debug;

use crate::error::{CatalogError, ParseError};
use crate::transcript::Transcript;

/// Variable bindings visible to [`Variable`] expressions.
#[derive(Debug, Clone, Default)]
pub struct Context {
    variables: HashMap<String, i64>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: i64) {
        self.variables.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<i64> {
        self.variables.get(name).copied()
    }
}

pub trait Expression: fmt::Debug {
    fn interpret(&self, context: &Context) -> i64;
}

// =============================================================================
// Terminal expressions
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Number(pub i64);

impl Expression for Number {
    fn interpret(&self, _context: &Context) -> i64 {
        self.0
    }
}

/// Unbound variables read as zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable(pub String);

impl Expression for Variable {
    fn interpret(&self, context: &Context) -> i64 {
        context.get(&self.0).unwrap_or_default()
    }
}

// =============================================================================
// Non-terminal expressions
// =============================================================================

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Operator {
    Plus,
    Minus,
    Times,
}

impl Operator {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "+" => Some(Operator::Plus),
            "-" => Some(Operator::Minus),
            "*" => Some(Operator::Times),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Operator::Plus => '+',
            Operator::Minus => '-',
            Operator::Times => '*',
        }
    }

    pub fn apply(&self, left: i64, right: i64) -> i64 {
        match self {
            Operator::Plus => left.wrapping_add(right),
            Operator::Minus => left.wrapping_sub(right),
            Operator::Times => left.wrapping_mul(right),
        }
    }
}

#[derive(Debug)]
pub struct Binary {
    operator: Operator,
    left: Box<dyn Expression>,
    right: Box<dyn Expression>,
}

impl Binary {
    pub fn new(operator: Operator, left: Box<dyn Expression>, right: Box<dyn Expression>) -> Self {
        Binary {
            operator,
            left,
            right,
        }
    }
}

impl Expression for Binary {
    fn interpret(&self, context: &Context) -> i64 {
        let left = self.left.interpret(context);
        let right = self.right.interpret(context);
        self.operator.apply(left, right)
    }
}

pub fn number(value: i64) -> Box<dyn Expression> {
    Box::new(Number(value))
}

pub fn variable(name: impl Into<String>) -> Box<dyn Expression> {
    Box::new(Variable(name.into()))
}

pub fn plus(left: Box<dyn Expression>, right: Box<dyn Expression>) -> Box<dyn Expression> {
    Box::new(Binary::new(Operator::Plus, left, right))
}

pub fn minus(left: Box<dyn Expression>, right: Box<dyn Expression>) -> Box<dyn Expression> {
    Box::new(Binary::new(Operator::Minus, left, right))
}

pub fn times(left: Box<dyn Expression>, right: Box<dyn Expression>) -> Box<dyn Expression> {
    Box::new(Binary::new(Operator::Times, left, right))
}

// =============================================================================
// Parser
// =============================================================================

/// Builds an expression tree from whitespace-separated postfix tokens,
/// e.g. `"5 3 + 2 -"`.
pub fn parse(expression: &str) -> Result<Box<dyn Expression>, ParseError> {
    let mut stack: Vec<Box<dyn Expression>> = Vec::new();

    for (position, token) in expression.split_whitespace().enumerate() {
        if let Some(operator) = Operator::from_token(token) {
            let missing = || ParseError::MissingOperand {
                operator: operator.symbol(),
                position,
            };
            let right = stack.pop().ok_or_else(missing)?;
            let left = stack.pop().ok_or_else(missing)?;
            stack.push(Box::new(Binary::new(operator, left, right)));
        } else if let Ok(value) = token.parse::<i64>() {
            stack.push(number(value));
        } else if token.chars().all(|c| c.is_ascii_alphabetic() || c == '_') {
            stack.push(variable(token));
        } else {
            return Err(ParseError::InvalidToken {
                token: token.to_string(),
                position,
            });
        }
        debug!(token, depth = stack.len(), "parsed token");
    }

    match stack.len() {
        0 => Err(ParseError::Empty),
        1 => Ok(stack.remove(0)),
        n => Err(ParseError::Unbalanced(n)),
    }
}

/// Parses then evaluates `expression` against `context`.
pub fn evaluate(expression: &str, context: &Context) -> Result<i64, CatalogError> {
    Ok(parse(expression)?.interpret(context))
}

pub fn demo(out: &Transcript) -> Result<(), CatalogError> {
    let context = Context::new();

    let expression = "5 3 + 2 -";
    let result = evaluate(expression, &context)?;
    out.line(format!("Result of '{expression}' is {result}"));

    // (5 + 3) - (2 + 1), assembled by hand
    let tree = minus(plus(number(5), number(3)), plus(number(2), number(1)));
    out.line(format!(
        "The result of the expression is: {}",
        tree.interpret(&context)
    ));

    // 2 + 3 * 4
    let tree = plus(number(2), times(number(3), number(4)));
    out.line(format!("Result: {}", tree.interpret(&context)));

    let mut context = Context::new();
    context.set("x", 10);
    let expression = "x 4 -";
    out.line(format!(
        "Result of '{expression}' with x = 10 is {}",
        evaluate(expression, &context)?
    ));

    let broken = "5 +";
    if let Err(err) = parse(broken) {
        out.line(format!("Could not interpret '{broken}': {err}"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_postfix_sample() {
        assert_eq!(evaluate("5 3 + 2 -", &Context::new()), Ok(6));
    }

    #[test]
    fn test_hand_built_tree() {
        let tree = minus(plus(number(5), number(3)), plus(number(2), number(1)));
        assert_eq!(tree.interpret(&Context::new()), 5);
    }

    #[test]
    fn test_multiplication() {
        assert_eq!(evaluate("2 3 4 * +", &Context::new()), Ok(14));
    }

    #[test]
    fn test_operand_order_matters() {
        assert_eq!(evaluate("10 4 -", &Context::new()), Ok(6));
        assert_eq!(evaluate("4 10 -", &Context::new()), Ok(-6));
    }

    #[test]
    fn test_variables_resolve_through_context() {
        let mut context = Context::new();
        context.set("x", 7);
        assert_eq!(evaluate("x x *", &context), Ok(49));
        assert_eq!(evaluate("y 1 +", &context), Ok(1));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse("").unwrap_err(), ParseError::Empty);
        assert_eq!(parse("   ").unwrap_err(), ParseError::Empty);
        assert_eq!(
            parse("5 +").unwrap_err(),
            ParseError::MissingOperand {
                operator: '+',
                position: 1
            }
        );
        assert_eq!(parse("1 2 3 +").unwrap_err(), ParseError::Unbalanced(2));
        assert_eq!(
            parse("1 2 %").unwrap_err(),
            ParseError::InvalidToken {
                token: "%".to_string(),
                position: 2
            }
        );
    }

    #[test]
    fn test_evaluate_wraps_parse_error() {
        let err = evaluate("+", &Context::new()).unwrap_err();
        assert!(matches!(err, CatalogError::Parse(ParseError::MissingOperand { .. })));
    }

    #[test]
    fn test_demo_lines() {
        let out = Transcript::new();
        demo(&out).unwrap();
        assert_eq!(
            out.lines(),
            vec![
                "Result of '5 3 + 2 -' is 6",
                "The result of the expression is: 5",
                "Result: 14",
                "Result of 'x 4 -' with x = 10 is 6",
                "Could not interpret '5 +': operator '+' at position 1 needs two operands",
            ]
        );
    }
}
