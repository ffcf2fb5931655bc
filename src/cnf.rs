//! Conversion of propositional sentences to conjunctive normal form.
//!
//! `to_cnf` runs three rewrites in order, each returning a new tree that is
//! logically equivalent to its input:
//! 1. [`eliminate_implications`] leaves only `~`, `&` and `|`.
//! 2. [`move_not_inwards`] pushes negation down to the atoms.
//! 3. [`distribute_and_over_or`] distributes `|` over `&`.
//!
//! Argument order is preserved throughout, so the output is deterministic.
//! Distribution can grow the sentence exponentially for some inputs.

use crate::expr::{Expr, Op};

/// The associative connectives that [`associate`] can flatten.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Associative {
    And,
    Or,
}

impl Associative {
    pub fn op(self) -> Op {
        match self {
            Associative::And => Op::And,
            Associative::Or => Op::Or,
        }
    }
    /// `TRUE` for an empty conjunction, `FALSE` for an empty disjunction.
    pub fn identity(self) -> Expr {
        Expr::constant(self == Associative::And)
    }
}

/// Converts a propositional sentence to conjunctive normal form.
pub fn to_cnf(s: &Expr) -> Expr {
    let s = eliminate_implications(s);
    let s = move_not_inwards(&s);
    distribute_and_over_or(&s)
}

/// Rewrites `>>`, `<<`, `<=>` and `^` in terms of `~`, `&` and `|`.
pub fn eliminate_implications(s: &Expr) -> Expr {
    if s.args().is_empty() || s.op().is_symbol() {
        return s.clone();
    }
    let args: Vec<Expr> = s.args().iter().map(eliminate_implications).collect();
    // binary connectives always carry exactly two arguments
    let (Some(a), Some(b)) = (args.first().cloned(), args.last().cloned()) else {
        return s.clone();
    };
    match s.op() {
        Op::Implies => !a | b,
        Op::ReverseImplies => a | !b,
        Op::Iff => (!a.clone() | b.clone()) & (!b | a),
        Op::Xor => (a.clone() & !b.clone()) | (!a & b),
        op => Expr::node(op.clone(), args),
    }
}

/// Moves negation inwards with De Morgan's laws and removes double negation.
pub fn move_not_inwards(s: &Expr) -> Expr {
    match s.op() {
        Op::Not => {
            let a = &s.args()[0];
            let negated = |b: &Expr| move_not_inwards(&!b.clone());
            match a.op() {
                Op::Not => move_not_inwards(&a.args()[0]),
                Op::And => associate(Associative::Or, a.args().iter().map(negated)),
                Op::Or => associate(Associative::And, a.args().iter().map(negated)),
                _ => s.clone(),
            }
        }
        Op::Symbol(_) => s.clone(),
        op => Expr::node(op.clone(), s.args().iter().map(move_not_inwards).collect()),
    }
}

/// Given a sentence of conjunctions and disjunctions over literals, returns an
/// equivalent sentence in CNF.
pub fn distribute_and_over_or(s: &Expr) -> Expr {
    match s.op() {
        Op::Or => {
            let s = associate(Associative::Or, s.args().iter().cloned());
            if *s.op() != Op::Or {
                // the disjunction collapsed to FALSE or to its single member
                return distribute_and_over_or(&s);
            }
            let Some(position) = s.args().iter().position(|d| *d.op() == Op::And) else {
                return s;
            };
            let conjunction = &s.args()[position];
            let others = s
                .args()
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != position)
                .map(|(_, d)| d.clone());
            let rest = associate(Associative::Or, others);
            associate(
                Associative::And,
                conjunction
                    .args()
                    .iter()
                    .map(|c| distribute_and_over_or(&(c.clone() | rest.clone()))),
            )
        }
        Op::And => associate(Associative::And, s.args().iter().map(distribute_and_over_or)),
        _ => s.clone(),
    }
}

/// Builds the flattened equivalent of applying `op` to `args`: nested operands
/// of the same connective are inlined, an empty result becomes the identity
/// element and a single operand stands for itself.
pub fn associate(op: Associative, args: impl IntoIterator<Item = Expr>) -> Expr {
    let mut args = dissociate(op, args);
    match args.len() {
        0 => op.identity(),
        1 => args.remove(0),
        _ => Expr::node(op.op(), args),
    }
}

/// Flattens nested applications of `op` into one list, keeping left to right order.
///
/// For `And` and `[A, B, (C | D), (E & F)]` the result is `[A, B, (C | D), E, F]`.
pub fn dissociate(op: Associative, args: impl IntoIterator<Item = Expr>) -> Vec<Expr> {
    fn collect(op: &Op, args: &[Expr], result: &mut Vec<Expr>) {
        for arg in args {
            if arg.op() == op {
                collect(op, arg.args(), result);
            } else {
                result.push(arg.clone());
            }
        }
    }
    let op = op.op();
    let mut result = Vec::new();
    for arg in args {
        if *arg.op() == op {
            collect(&op, arg.args(), &mut result);
        } else {
            result.push(arg);
        }
    }
    result
}

/// The top level conjuncts of a sentence.
pub fn conjuncts(s: &Expr) -> Vec<Expr> {
    dissociate(Associative::And, [s.clone()])
}

/// The top level disjuncts of a sentence.
pub fn disjuncts(s: &Expr) -> Vec<Expr> {
    dissociate(Associative::Or, [s.clone()])
}

/// True if the sentence is a conjunction of disjunctions of literals.
pub fn is_cnf(s: &Expr) -> bool {
    conjuncts(s)
        .iter()
        .all(|clause| disjuncts(clause).iter().all(Expr::is_literal))
}
