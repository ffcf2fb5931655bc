//! Shared access to one knowledge base.
//!
//! A [`KnowledgeBase`] has a single owner. When several callers or threads
//! need the same one, [`SharedKnowledgeBase`] puts the whole knowledge base
//! behind one mutex: every `tell`, `ask` and `retract` holds the lock for its
//! full duration. Cloning the handle shares the same knowledge base.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::{ReasonerError, Result};
use crate::expr::Expr;
use crate::kb::{KnowledgeBase, Sentence};

#[derive(Debug, Clone, Default)]
pub struct SharedKnowledgeBase {
    kb: Arc<Mutex<KnowledgeBase>>,
}

impl SharedKnowledgeBase {
    pub fn new(kb: KnowledgeBase) -> Self {
        Self { kb: Arc::new(Mutex::new(kb)) }
    }

    fn lock(&self) -> Result<MutexGuard<'_, KnowledgeBase>> {
        self.kb.lock().map_err(|e| ReasonerError::Lock(e.to_string()))
    }

    /// Runs `f` with exclusive access to the knowledge base.
    pub fn with<T>(&self, f: impl FnOnce(&mut KnowledgeBase) -> Result<T>) -> Result<T> {
        let mut kb = self.lock()?;
        f(&mut kb)
    }

    pub fn tell(&self, sentence: impl Into<Sentence>) -> Result<()> {
        self.lock()?.tell(sentence)
    }
    pub fn ask(&self, query: impl Into<Sentence>) -> Result<bool> {
        self.lock()?.ask(query)
    }
    pub fn retract(&self, sentence: impl Into<Sentence>) -> Result<()> {
        self.lock()?.retract(sentence)
    }
    /// A copy of the current clauses.
    pub fn clauses(&self) -> Result<Vec<Expr>> {
        Ok(self.lock()?.clauses().to_vec())
    }
    pub fn len(&self) -> Result<usize> {
        Ok(self.lock()?.len())
    }
    pub fn clear(&self) -> Result<()> {
        self.lock()?.clear();
        Ok(())
    }
    /// A copy of the knowledge base as it is now.
    pub fn snapshot(&self) -> Result<KnowledgeBase> {
        Ok(self.lock()?.clone())
    }
}

impl From<KnowledgeBase> for SharedKnowledgeBase {
    fn from(kb: KnowledgeBase) -> Self {
        Self::new(kb)
    }
}
