use std::collections::HashSet;

use propkb::expr::SymbolHasher;
use propkb::sentence::parse;
use propkb::{Expr, Op, ReasonerError};

fn atom(name: &str) -> Expr {
    Expr::atom(name).unwrap()
}

#[test]
fn precedence_from_tightest_to_loosest() {
    let (a, b, c) = (atom("A"), atom("B"), atom("C"));
    assert_eq!(parse("~A & B").unwrap(), !a.clone() & b.clone());
    assert_eq!(parse("A | B & C").unwrap(), a.clone() | (b.clone() & c.clone()));
    assert_eq!(parse("A & B | C").unwrap(), (a.clone() & b.clone()) | c.clone());
    assert_eq!(parse("A ==> B | C").unwrap(), a.clone() >> (b.clone() | c.clone()));
    assert_eq!(parse("A <== B & C").unwrap(), a.clone() << (b.clone() & c.clone()));
    assert_eq!(parse("A <=> B ==> C").unwrap(), Expr::iff(a.clone(), b.clone() >> c.clone()));
    assert_eq!(parse("A =/= B | C").unwrap(), a.clone() ^ (b.clone() | c.clone()));
    assert_eq!(parse("~(A | B)").unwrap(), !(a | b));
}

#[test]
fn binary_operators_associate_left() {
    let (a, b, c) = (atom("A"), atom("B"), atom("C"));
    assert_eq!(parse("A & B & C").unwrap(), (a.clone() & b.clone()) & c.clone());
    assert_eq!(parse("A ==> B ==> C").unwrap(), (a.clone() >> b.clone()) >> c.clone());
    assert_eq!(parse("A <=> B =/= C").unwrap(), Expr::iff(a, b) ^ c);
}

#[test]
fn both_biconditional_spellings() {
    assert_eq!(parse("A % B").unwrap(), parse("A <=> B").unwrap());
    assert_eq!(*parse("A%B").unwrap().op(), Op::Iff);
}

#[test]
fn whitespace_is_insignificant() {
    assert_eq!(parse(" ( P0_1|P1_0 )\n").unwrap(), parse("P0_1 | P1_0").unwrap());
    assert_eq!(parse("~~A").unwrap(), !!atom("A"));
}

#[test]
fn atoms_and_numerals() {
    let parsed = parse("TRUE & 42 & x_1").unwrap();
    assert_eq!(parsed, (Expr::constant(true) & atom("42")) & atom("x_1"));
    assert_eq!(parsed.args()[0].args()[0].as_constant(), Some(true));
    assert_eq!(parse("FALSE").unwrap().as_constant(), Some(false));
}

#[test]
fn syntax_errors_report_their_position() {
    match parse("A &\n(B | ") {
        Err(ReasonerError::Syntax { line, col, .. }) => {
            assert_eq!(line, Some(2));
            assert!(col.is_some());
        }
        other => panic!("expected a syntax error, got {other:?}"),
    }
    for text in ["", "   ", "()", "A | | B", "A ==>", "1A", "A => B", "A ^ B"] {
        assert!(matches!(parse(text), Err(ReasonerError::Syntax { .. })), "{text:?}");
    }
}

#[test]
fn display_uses_internal_tokens() {
    assert_eq!(parse("A ==> B").unwrap().to_string(), "(A >> B)");
    assert_eq!(parse("A <== B").unwrap().to_string(), "(A << B)");
    assert_eq!(parse("A % ~B").unwrap().to_string(), "(A <=> ~B)");
    assert_eq!(parse("A =/= B").unwrap().to_string(), "(A ^ B)");
    let f = Expr::apply("F", vec![atom("A"), atom("x")]).unwrap();
    assert_eq!(f.to_string(), "F(A, x)");
}

#[test]
fn equality_and_hashing_are_structural() {
    let parsed = parse("A & (B | ~C)").unwrap();
    let built = atom("A") & (atom("B") | !atom("C"));
    assert_eq!(parsed, built);
    let mut set = HashSet::<Expr, SymbolHasher>::default();
    set.insert(parsed);
    assert!(!set.insert(built));
    assert_ne!(parse("A & B").unwrap(), parse("B & A").unwrap());
}

#[test]
fn symbol_classification() {
    let sentence = parse("x | A & y ==> (B & A) | TRUE & 3").unwrap();
    let variables: Vec<String> = sentence.variables().into_iter().collect();
    assert_eq!(variables, vec!["x", "y"]);
    assert_eq!(sentence.proposition_symbols(), vec![atom("A"), atom("B")]);
    assert!(!sentence.is_ground());
    assert!(parse("A & TRUE").unwrap().is_ground());
}

#[test]
fn constructors_validate_their_input() {
    assert!(matches!(Expr::atom("1A"), Err(ReasonerError::InvalidSymbol(_))));
    assert!(matches!(Expr::atom(""), Err(ReasonerError::InvalidSymbol(_))));
    assert!(matches!(Expr::apply("7", vec![atom("A")]), Err(ReasonerError::InvalidSymbol(_))));
    assert!(matches!(Expr::new(Op::Not, vec![]), Err(ReasonerError::InvalidOperator(_))));
    assert!(matches!(Expr::new(Op::Implies, vec![atom("A")]), Err(ReasonerError::InvalidOperator(_))));
    assert_eq!(Expr::new(Op::And, vec![atom("A"), atom("B"), atom("C")]).unwrap().args().len(), 3);
    assert!(atom("P1_0").is_literal());
    assert!((!atom("P1_0")).is_literal());
    assert!(!(atom("A") | atom("B")).is_literal());
}
