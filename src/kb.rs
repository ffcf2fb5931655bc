//! The knowledge base: an ordered collection of CNF clauses read as one conjunction.

use tracing::debug;

use crate::cnf::{conjuncts, to_cnf};
use crate::entail::tt_entails;
use crate::error::Result;
use crate::expr::Expr;

/// A sentence given either as surface text or as an already built expression.
#[derive(Debug, Clone)]
pub enum Sentence {
    Text(String),
    Expr(Expr),
}

impl Sentence {
    pub fn into_expr(self) -> Result<Expr> {
        match self {
            Sentence::Text(text) => text.parse(),
            Sentence::Expr(expr) => Ok(expr),
        }
    }
}

impl From<&str> for Sentence {
    fn from(text: &str) -> Self {
        Sentence::Text(text.to_string())
    }
}
impl From<String> for Sentence {
    fn from(text: String) -> Self {
        Sentence::Text(text)
    }
}
impl From<Expr> for Sentence {
    fn from(expr: Expr) -> Self {
        Sentence::Expr(expr)
    }
}
impl From<&Expr> for Sentence {
    fn from(expr: &Expr) -> Self {
        Sentence::Expr(expr.clone())
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct KnowledgeBase {
    clauses: Vec<Expr>,
}

impl KnowledgeBase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the clauses of the sentence's CNF. Duplicates are kept.
    pub fn tell(&mut self, sentence: impl Into<Sentence>) -> Result<()> {
        let sentence = sentence.into().into_expr()?;
        let added = conjuncts(&to_cnf(&sentence));
        debug!(%sentence, added = added.len(), total = self.clauses.len() + added.len(), "tell");
        self.clauses.extend(added);
        Ok(())
    }

    pub fn tell_all<S: Into<Sentence>>(&mut self, sentences: impl IntoIterator<Item = S>) -> Result<()> {
        for sentence in sentences {
            self.tell(sentence)?;
        }
        Ok(())
    }

    /// Does the knowledge base entail the query? Queries must not contain variables.
    pub fn ask(&self, query: impl Into<Sentence>) -> Result<bool> {
        let query = query.into().into_expr()?;
        tt_entails(&self.clauses, &query)
    }

    /// Removes one occurrence of each clause of the sentence's CNF, if present.
    pub fn retract(&mut self, sentence: impl Into<Sentence>) -> Result<()> {
        let sentence = sentence.into().into_expr()?;
        let mut removed = 0;
        for clause in conjuncts(&to_cnf(&sentence)) {
            if let Some(position) = self.clauses.iter().position(|c| *c == clause) {
                self.clauses.remove(position);
                removed += 1;
            }
        }
        debug!(%sentence, removed, total = self.clauses.len(), "retract");
        Ok(())
    }

    pub fn clauses(&self) -> &[Expr] {
        &self.clauses
    }
    pub fn len(&self) -> usize {
        self.clauses.len()
    }
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }
    pub fn clear(&mut self) {
        self.clauses.clear();
    }
}
