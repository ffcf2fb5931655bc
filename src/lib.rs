//! propkb – a propositional logic knowledge base with truth-table entailment.
//!
//! Sentences are immutable expression trees ([`expr::Expr`]): an operator
//! (a symbol name or one of the connectives `~ & | >> << <=> ^`) and an ordered
//! list of arguments. A [`kb::KnowledgeBase`] stores what it is told as clauses
//! in conjunctive normal form and answers whether a query is entailed, i.e.
//! true in every model that makes all of its clauses true.
//!
//! ## Modules
//! * [`expr`] – The expression model, structural equality and symbol collection.
//! * [`sentence`] – Parser for the surface syntax (`~`, `&`, `|`, `==>`, `<==`,
//!   `<=>`/`%`, `=/=`). Grammar details live in `sentence.pest`.
//! * [`cnf`] – The three pass conversion to conjunctive normal form.
//! * [`entail`] – Three-valued evaluation and truth-table entailment.
//! * [`kb`] – The knowledge base with `tell`, `ask` and `retract`.
//! * [`interface`] – A knowledge base shared behind a single mutex.
//! * [`script`] – An engine running `;`-separated `tell`/`ask`/`retract` scripts.
//! * [`config`] – Settings for the command line runner.
//!
//! ## Symbols
//! A symbol starts with a letter and continues with letters, digits or `_`.
//! Symbols starting with an upper case letter are propositions, except for the
//! constants `TRUE` and `FALSE`. Symbols starting with a lower case letter are
//! variables, which the entailment engine does not accept in queries. Numerals
//! such as `2` are atoms of neither kind.
//!
//! ## Quick Start
//! ```
//! use propkb::kb::KnowledgeBase;
//! let mut kb = KnowledgeBase::new();
//! kb.tell("A ==> B").unwrap();
//! assert!(!kb.ask("A").unwrap());
//! kb.tell("A").unwrap();
//! assert!(kb.ask("B").unwrap());
//! ```
//!
//! ## Limits
//! Entailment enumerates all `2^n` models over the `n` proposition symbols of
//! the knowledge base and the query. CNF conversion by distribution can grow
//! sentences exponentially. Both are inherent to the method.

pub mod cnf;
pub mod config;
pub mod entail;
pub mod error;
pub mod expr;
pub mod interface;
pub mod kb;
pub mod script;
pub mod sentence;

pub use error::{ReasonerError, Result};
pub use expr::{Expr, Op};
pub use kb::KnowledgeBase;
