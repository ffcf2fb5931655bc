//! Parser for the surface sentence syntax.
//!
//! The grammar lives in `sentence.pest`. Operator precedence, from tightest to
//! loosest, is `~`, `&`, `|`, the implications `==>` and `<==`, then `<=>`
//! (also written `%`) and `=/=`. Binary operators associate to the left.
//!
//! | Surface | Connective |
//! |---|---|
//! | `~` | negation |
//! | `&` | conjunction |
//! | `\|` | disjunction |
//! | `==>` | implication (`>>`) |
//! | `<==` | reverse implication (`<<`) |
//! | `<=>`, `%` | biconditional |
//! | `=/=` | exclusive or (`^`) |

use lazy_static::lazy_static;
use pest::Parser;
use pest::error::{Error, LineColLocation};
use pest::iterators::Pairs;
use pest::pratt_parser::{Assoc, Op as PrattOp, PrattParser};
use pest_derive::Parser;

use crate::error::{ReasonerError, Result};
use crate::expr::Expr;

#[derive(Parser)]
#[grammar = "sentence.pest"]
struct SentenceParser;

lazy_static! {
    static ref PRATT: PrattParser<Rule> = PrattParser::new()
        .op(PrattOp::infix(Rule::iff, Assoc::Left) | PrattOp::infix(Rule::xor, Assoc::Left))
        .op(PrattOp::infix(Rule::implies, Assoc::Left)
            | PrattOp::infix(Rule::reverse_implies, Assoc::Left))
        .op(PrattOp::infix(Rule::or, Assoc::Left))
        .op(PrattOp::infix(Rule::and, Assoc::Left))
        .op(PrattOp::prefix(Rule::not));
}

/// Parses a sentence such as `B0_0 <=> (P0_1 | P1_0)` into an expression.
pub fn parse(text: &str) -> Result<Expr> {
    let sentence = SentenceParser::parse(Rule::sentence, text)
        .map_err(syntax_error)?
        .next()
        .map(|sentence| sentence.into_inner());
    match sentence.and_then(|mut inner| inner.next()) {
        Some(expr) if expr.as_rule() == Rule::expr => build(expr.into_inner()),
        _ => Err(ReasonerError::Syntax { message: "expected a sentence".into(), line: None, col: None }),
    }
}

fn build(pairs: Pairs<Rule>) -> Result<Expr> {
    PRATT
        .map_primary(|primary| match primary.as_rule() {
            Rule::symbol | Rule::numeral => Expr::atom(primary.as_str()),
            Rule::expr => build(primary.into_inner()),
            rule => Err(ReasonerError::Invariant(format!("unexpected operand {rule:?}"))),
        })
        .map_prefix(|op, operand| match op.as_rule() {
            Rule::not => Ok(!operand?),
            rule => Err(ReasonerError::Invariant(format!("unexpected prefix {rule:?}"))),
        })
        .map_infix(|lhs, op, rhs| {
            let (lhs, rhs) = (lhs?, rhs?);
            Ok(match op.as_rule() {
                Rule::and => lhs & rhs,
                Rule::or => lhs | rhs,
                Rule::implies => lhs >> rhs,
                Rule::reverse_implies => lhs << rhs,
                Rule::iff => Expr::iff(lhs, rhs),
                Rule::xor => lhs ^ rhs,
                rule => return Err(ReasonerError::Invariant(format!("unexpected infix {rule:?}"))),
            })
        })
        .parse(pairs)
}

fn syntax_error(e: Error<Rule>) -> ReasonerError {
    let (line, col) = match e.line_col {
        LineColLocation::Pos((line, col)) => (line, col),
        LineColLocation::Span((line, col), _) => (line, col),
    };
    ReasonerError::Syntax {
        message: format!("{} at line {}, column {}", e.variant.message(), line, col),
        line: Some(line),
        col: Some(col),
    }
}
