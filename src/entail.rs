//! Truth-table entailment over propositional sentences.
//!
//! `tt_entails(clauses, query)` enumerates every total assignment to the
//! proposition symbols of the clauses and the query, and holds when no model
//! satisfying the clauses falsifies the query. The search is exponential in
//! the number of symbols.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::error::{ReasonerError, Result};
use crate::expr::{Expr, Op, SymbolHasher};

/// A (possibly partial) assignment of truth values to proposition atoms.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Model {
    bindings: HashMap<Expr, bool, SymbolHasher>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn get(&self, atom: &Expr) -> Option<bool> {
        self.bindings.get(atom).copied()
    }
    pub fn bind(&mut self, atom: Expr, value: bool) {
        self.bindings.insert(atom, value);
    }
    pub fn unbind(&mut self, atom: &Expr) {
        self.bindings.remove(atom);
    }
    pub fn len(&self) -> usize {
        self.bindings.len()
    }
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl FromIterator<(Expr, bool)> for Model {
    fn from_iter<I: IntoIterator<Item = (Expr, bool)>>(iter: I) -> Self {
        Self { bindings: iter.into_iter().collect() }
    }
}

/// Evaluates a sentence under a model with three outcomes: `Some(true)`,
/// `Some(false)` or `None` when the model leaves it undecided.
///
/// `&` and `|` stop at the first deciding operand. `<=>` and `^` need both
/// operands known. A symbol applied to arguments is not propositional and is
/// reported as an invalid operator.
pub fn evaluate(exp: &Expr, model: &Model) -> Result<Option<bool>> {
    if let Some(value) = exp.as_constant() {
        return Ok(Some(value));
    }
    if exp.is_atom() {
        return Ok(model.get(exp));
    }
    let args = exp.args();
    match exp.op() {
        Op::Not => Ok(evaluate(&args[0], model)?.map(|p| !p)),
        Op::Or => any(args.iter().map(|arg| evaluate(arg, model))),
        Op::And => all(args.iter().map(|arg| evaluate(arg, model))),
        op => {
            let [p, q] = args else {
                return Err(ReasonerError::InvalidOperator(exp.to_string()));
            };
            match op {
                Op::Implies => any([negate(evaluate(p, model)), evaluate(q, model)].into_iter()),
                Op::ReverseImplies => any([evaluate(p, model), negate(evaluate(q, model))].into_iter()),
                Op::Iff | Op::Xor => {
                    let (pt, qt) = (evaluate(p, model)?, evaluate(q, model)?);
                    Ok(match (pt, qt) {
                        (Some(pt), Some(qt)) if *op == Op::Iff => Some(pt == qt),
                        (Some(pt), Some(qt)) => Some(pt != qt),
                        _ => None,
                    })
                }
                _ => Err(ReasonerError::InvalidOperator(exp.to_string())),
            }
        }
    }
}

fn negate(value: Result<Option<bool>>) -> Result<Option<bool>> {
    value.map(|v| v.map(|p| !p))
}

// Lazy so that a deciding operand stops evaluation of the rest.
fn any(values: impl Iterator<Item = Result<Option<bool>>>) -> Result<Option<bool>> {
    let mut result = Some(false);
    for value in values {
        match value? {
            Some(true) => return Ok(Some(true)),
            None => result = None,
            Some(false) => (),
        }
    }
    Ok(result)
}

fn all(values: impl Iterator<Item = Result<Option<bool>>>) -> Result<Option<bool>> {
    let mut result = Some(true);
    for value in values {
        match value? {
            Some(false) => return Ok(Some(false)),
            None => result = None,
            Some(true) => (),
        }
    }
    Ok(result)
}

/// Does the conjunction of `clauses` entail `query`? The query must be ground.
pub fn tt_entails(clauses: &[Expr], query: &Expr) -> Result<bool> {
    let variables = query.variables();
    if !variables.is_empty() {
        return Err(ReasonerError::InvalidQuery {
            query: query.to_string(),
            variables: variables.into_iter().collect(),
        });
    }
    let kb = Expr::node(Op::And, clauses.to_vec());
    let symbols = Expr::and(kb.clone(), query.clone()).proposition_symbols();
    debug!(clauses = clauses.len(), symbols = symbols.len(), %query, "checking entailment");
    let entailed = check_all(&kb, query, &symbols, &mut Model::new())?;
    debug!(%query, entailed, "entailment checked");
    Ok(entailed)
}

fn check_all(kb: &Expr, query: &Expr, symbols: &[Expr], model: &mut Model) -> Result<bool> {
    let Some((symbol, rest)) = symbols.split_first() else {
        // A knowledge base left undecided (only possible when it mentions
        // variables or numerals) is treated as not satisfied.
        if evaluate(kb, model)? != Some(true) {
            return Ok(true);
        }
        return match evaluate(query, model)? {
            Some(value) => Ok(value),
            None => Err(ReasonerError::Invariant(format!(
                "query {query} undecided under a total model"
            ))),
        };
    };
    model.bind(symbol.clone(), true);
    let when_true = check_all(kb, query, rest, model)?;
    if !when_true {
        trace!(%symbol, "counter model found");
        model.unbind(symbol);
        return Ok(false);
    }
    model.bind(symbol.clone(), false);
    let when_false = check_all(kb, query, rest, model)?;
    model.unbind(symbol);
    Ok(when_false)
}

/// Is the sentence true in every model?
pub fn tt_true(sentence: &Expr) -> Result<bool> {
    tt_entails(&[], sentence)
}

/// Is there a model satisfying every clause?
pub fn satisfiable(clauses: &[Expr]) -> Result<bool> {
    Ok(!tt_entails(clauses, &Expr::constant(false))?)
}
