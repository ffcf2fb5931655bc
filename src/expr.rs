//! The expression model: immutable symbolic trees of an operator and its arguments.
//!
//! Equality and hashing are structural. Two trees built independently with the
//! same shape are interchangeable, which is what clause retraction and symbol
//! collection rely on.

use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::hash::BuildHasherDefault;
use std::ops;
use std::str::FromStr;
use std::sync::Arc;

use lazy_static::lazy_static;
use regex::Regex;
use seahash::SeaHasher;

use crate::error::{ReasonerError, Result};

// we will use a fast hashing algo for sets and maps keyed by symbols
pub type SymbolHasher = BuildHasherDefault<SeaHasher>;

pub const TRUE: &str = "TRUE";
pub const FALSE: &str = "FALSE";

lazy_static! {
    static ref SYMBOL: Regex = Regex::new(r"^(?:[A-Za-z][A-Za-z0-9_]*|[0-9]+)$").unwrap();
}

/// Returns true if the name is a symbol, i.e. starts with a letter.
pub fn is_symbol(name: &str) -> bool {
    name.starts_with(|c: char| c.is_ascii_alphabetic())
}

/// Variables start with a lower case letter.
pub fn is_variable_symbol(name: &str) -> bool {
    name.starts_with(|c: char| c.is_ascii_lowercase())
}

/// Propositions start with an upper case letter and are not one of the constants.
pub fn is_proposition_symbol(name: &str) -> bool {
    name.starts_with(|c: char| c.is_ascii_uppercase()) && name != TRUE && name != FALSE
}

// ------------- Op -------------
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Op {
    /// A proposition, variable, numeral, constant or function name.
    Symbol(Arc<str>),
    Not,
    And,
    Or,
    Implies,
    ReverseImplies,
    Iff,
    Xor,
}

impl Op {
    pub fn symbol(&self) -> Option<&str> {
        match self {
            Op::Symbol(name) => Some(name),
            _ => None,
        }
    }
    pub fn is_symbol(&self) -> bool {
        matches!(self, Op::Symbol(_))
    }
    /// The internal token of a connective, or the name of a symbol.
    pub fn token(&self) -> &str {
        match self {
            Op::Symbol(name) => name,
            Op::Not => "~",
            Op::And => "&",
            Op::Or => "|",
            Op::Implies => ">>",
            Op::ReverseImplies => "<<",
            Op::Iff => "<=>",
            Op::Xor => "^",
        }
    }
    pub fn from_token(token: &str) -> Option<Op> {
        match token {
            "~" => Some(Op::Not),
            "&" => Some(Op::And),
            "|" => Some(Op::Or),
            ">>" => Some(Op::Implies),
            "<<" => Some(Op::ReverseImplies),
            "<=>" => Some(Op::Iff),
            "^" => Some(Op::Xor),
            _ => None,
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

// ------------- Expr -------------
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Expr {
    op: Op,
    args: Arc<[Expr]>,
}

impl Expr {
    /// Builds a node without checking arity. Only used where the shape is
    /// known to be right.
    pub(crate) fn node(op: Op, args: Vec<Expr>) -> Self {
        Self { op, args: Arc::from(args) }
    }

    /// Builds a node, checking that connectives get the arguments they need:
    /// one for `~`, two for the binary connectives, any number for `&` and `|`.
    pub fn new(op: Op, args: Vec<Expr>) -> Result<Self> {
        let expected = match op {
            Op::Symbol(ref name) if !SYMBOL.is_match(name) => {
                return Err(ReasonerError::InvalidSymbol(name.to_string()));
            }
            Op::Not => Some(1),
            Op::Implies | Op::ReverseImplies | Op::Iff | Op::Xor => Some(2),
            _ => None,
        };
        match expected {
            Some(n) if n != args.len() => Err(ReasonerError::InvalidOperator(format!(
                "{} expects {} argument(s), got {}",
                op,
                n,
                args.len()
            ))),
            _ => Ok(Self::node(op, args)),
        }
    }

    /// An atom: a proposition, variable, numeral or constant name.
    pub fn atom(name: &str) -> Result<Self> {
        Self::new(Op::Symbol(Arc::from(name)), Vec::new())
    }

    /// A symbol applied to arguments, such as `F(A, B)`.
    pub fn apply(name: &str, args: Vec<Expr>) -> Result<Self> {
        if !is_symbol(name) {
            return Err(ReasonerError::InvalidSymbol(name.to_string()));
        }
        Self::new(Op::Symbol(Arc::from(name)), args)
    }

    pub fn constant(value: bool) -> Self {
        let name = if value { TRUE } else { FALSE };
        Self::node(Op::Symbol(Arc::from(name)), Vec::new())
    }

    pub fn not(a: Expr) -> Self {
        Self::node(Op::Not, vec![a])
    }
    pub fn and(a: Expr, b: Expr) -> Self {
        Self::node(Op::And, vec![a, b])
    }
    pub fn or(a: Expr, b: Expr) -> Self {
        Self::node(Op::Or, vec![a, b])
    }
    pub fn implies(a: Expr, b: Expr) -> Self {
        Self::node(Op::Implies, vec![a, b])
    }
    pub fn reverse_implies(a: Expr, b: Expr) -> Self {
        Self::node(Op::ReverseImplies, vec![a, b])
    }
    pub fn iff(a: Expr, b: Expr) -> Self {
        Self::node(Op::Iff, vec![a, b])
    }
    pub fn xor(a: Expr, b: Expr) -> Self {
        Self::node(Op::Xor, vec![a, b])
    }

    pub fn op(&self) -> &Op {
        &self.op
    }
    pub fn args(&self) -> &[Expr] {
        &self.args
    }
    /// The name of an atom, `None` for compound expressions.
    pub fn as_atom(&self) -> Option<&str> {
        if self.args.is_empty() { self.op.symbol() } else { None }
    }
    pub fn is_atom(&self) -> bool {
        self.as_atom().is_some()
    }
    pub fn as_constant(&self) -> Option<bool> {
        match self.as_atom() {
            Some(TRUE) => Some(true),
            Some(FALSE) => Some(false),
            _ => None,
        }
    }
    /// An atom or a negated atom.
    pub fn is_literal(&self) -> bool {
        match self.op {
            Op::Not => self.args.first().is_some_and(Expr::is_atom),
            _ => self.is_atom(),
        }
    }

    /// Visits every node of the tree, parents before children.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Expr)) {
        visit(self);
        for arg in self.args.iter() {
            arg.walk(visit);
        }
    }

    /// The variable symbols (lower case initial) anywhere in the tree.
    pub fn variables(&self) -> BTreeSet<String> {
        let mut variables = BTreeSet::new();
        self.walk(&mut |e| {
            if let Some(name) = e.op.symbol() {
                if is_variable_symbol(name) {
                    variables.insert(name.to_string());
                }
            }
        });
        variables
    }

    pub fn is_ground(&self) -> bool {
        self.variables().is_empty()
    }

    /// The distinct proposition atoms in the tree, in order of first appearance.
    pub fn proposition_symbols(&self) -> Vec<Expr> {
        let mut seen = HashSet::<&Expr, SymbolHasher>::default();
        let mut symbols = Vec::new();
        self.walk(&mut |e| {
            if e.as_atom().is_some_and(is_proposition_symbol) && seen.insert(e) {
                symbols.push(e.clone());
            }
        });
        symbols
    }

    /// Number of nodes in the tree.
    pub fn size(&self) -> usize {
        1 + self.args.iter().map(Expr::size).sum::<usize>()
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.args.is_empty() {
            return write!(f, "{}", self.op);
        }
        let args = self.args.iter().map(Expr::to_string).collect::<Vec<_>>();
        match self.op {
            Op::Symbol(ref name) => write!(f, "{}({})", name, args.join(", ")),
            _ if args.len() == 1 => write!(f, "{}{}", self.op, args[0]),
            _ => write!(f, "({})", args.join(format!(" {} ", self.op).as_str())),
        }
    }
}

impl FromStr for Expr {
    type Err = ReasonerError;
    fn from_str(s: &str) -> Result<Self> {
        crate::sentence::parse(s)
    }
}

impl From<bool> for Expr {
    fn from(value: bool) -> Self {
        Self::constant(value)
    }
}

// Operator overloads so that sentences can be composed in code: `!a`, `a & b`,
// `a | b`, `a ^ b`, `a >> b` (implies) and `a << b` (reverse implies).
impl ops::Not for Expr {
    type Output = Expr;
    fn not(self) -> Expr {
        Expr::not(self)
    }
}
impl ops::BitAnd for Expr {
    type Output = Expr;
    fn bitand(self, rhs: Expr) -> Expr {
        Expr::and(self, rhs)
    }
}
impl ops::BitOr for Expr {
    type Output = Expr;
    fn bitor(self, rhs: Expr) -> Expr {
        Expr::or(self, rhs)
    }
}
impl ops::BitXor for Expr {
    type Output = Expr;
    fn bitxor(self, rhs: Expr) -> Expr {
        Expr::xor(self, rhs)
    }
}
impl ops::Shr for Expr {
    type Output = Expr;
    fn shr(self, rhs: Expr) -> Expr {
        Expr::implies(self, rhs)
    }
}
impl ops::Shl for Expr {
    type Output = Expr;
    fn shl(self, rhs: Expr) -> Expr {
        Expr::reverse_implies(self, rhs)
    }
}
