use propkb::cnf::{
    associate, conjuncts, disjuncts, dissociate, distribute_and_over_or, eliminate_implications,
    is_cnf, move_not_inwards, to_cnf, Associative,
};
use propkb::Expr;

fn e(text: &str) -> Expr {
    text.parse().unwrap()
}

fn cnf(text: &str) -> String {
    to_cnf(&e(text)).to_string()
}

#[test]
fn eliminates_each_connective() {
    assert_eq!(eliminate_implications(&e("A ==> B")).to_string(), "(~A | B)");
    assert_eq!(eliminate_implications(&e("A <== B")).to_string(), "(A | ~B)");
    assert_eq!(eliminate_implications(&e("A <=> B")).to_string(), "((~A | B) & (~B | A))");
    assert_eq!(eliminate_implications(&e("A =/= B")).to_string(), "((A & ~B) | (~A & B))");
    // rewrites children before their parents
    assert_eq!(eliminate_implications(&e("~(A ==> B)")).to_string(), "~(~A | B)");
    assert_eq!(eliminate_implications(&e("A & B | C")), e("A & B | C"));
}

#[test]
fn moves_negation_to_the_atoms() {
    assert_eq!(move_not_inwards(&e("~~A")), e("A"));
    assert_eq!(move_not_inwards(&e("~~~A")), e("~A"));
    assert_eq!(move_not_inwards(&e("~(A & B)")).to_string(), "(~A | ~B)");
    assert_eq!(move_not_inwards(&e("~(A | ~B)")).to_string(), "(~A & B)");
    assert_eq!(move_not_inwards(&e("~(A & B & C)")).to_string(), "(~A | ~B | ~C)");
    assert_eq!(move_not_inwards(&e("C | ~(A | B)")).to_string(), "(C | (~A & ~B))");
}

#[test]
fn distributes_from_the_first_conjunction() {
    assert_eq!(distribute_and_over_or(&e("A | B & C")).to_string(), "((B | A) & (C | A))");
    assert_eq!(
        distribute_and_over_or(&e("(A & B) | (C & D)")).to_string(),
        "((C | A) & (D | A) & (C | B) & (D | B))"
    );
    // already a clause
    assert_eq!(distribute_and_over_or(&e("A | (B | ~C)")).to_string(), "(A | B | ~C)");
    assert_eq!(distribute_and_over_or(&e("~A")), e("~A"));
}

#[test]
fn converts_to_cnf() {
    assert_eq!(cnf("A"), "A");
    assert_eq!(cnf("~~A"), "A");
    assert_eq!(cnf("A ==> B"), "(~A | B)");
    assert_eq!(cnf("A <=> B"), "((~A | B) & (~B | A))");
    assert_eq!(cnf("A =/= B"), "((~A | A) & (B | A) & (~A | ~B) & (B | ~B))");
    assert_eq!(cnf("~(A ==> B)"), "(A & ~B)");
    assert_eq!(
        cnf("B0_0 <=> (P0_1 | P1_0)"),
        "((~B0_0 | P0_1 | P1_0) & (~P0_1 | B0_0) & (~P1_0 | B0_0))"
    );
}

#[test]
fn cnf_output_has_cnf_shape() {
    for text in ["A =/= (B <=> C)", "~(A & (B ==> ~C)) | D", "(A <== B) & ~(C | D & E)"] {
        let converted = to_cnf(&e(text));
        assert!(is_cnf(&converted), "{text} gave {converted}");
    }
    assert!(!is_cnf(&e("A | B & C")));
    assert!(!is_cnf(&e("~~A")));
}

#[test]
fn associate_flattens_and_collapses() {
    assert_eq!(associate(Associative::And, Vec::new()), Expr::constant(true));
    assert_eq!(associate(Associative::Or, Vec::new()), Expr::constant(false));
    assert_eq!(associate(Associative::Or, vec![e("A")]), e("A"));
    assert_eq!(
        associate(Associative::And, vec![e("A & B"), e("C | D"), e("(E & F) & G")]).to_string(),
        "(A & B & (C | D) & E & F & G)"
    );
    assert_eq!(
        dissociate(Associative::And, vec![e("A"), e("B"), e("C | D"), e("E & F")]),
        vec![e("A"), e("B"), e("C | D"), e("E"), e("F")]
    );
}

#[test]
fn distributing_an_empty_disjunction_gives_false() {
    let empty_or = Expr::new(propkb::Op::Or, Vec::new()).unwrap();
    assert_eq!(distribute_and_over_or(&empty_or), Expr::constant(false));
    let single = Expr::new(propkb::Op::Or, vec![e("A & B")]).unwrap();
    assert_eq!(distribute_and_over_or(&single).to_string(), "(A & B)");
}

#[test]
fn conjuncts_and_disjuncts() {
    assert_eq!(conjuncts(&e("A & B & (C | D)")), vec![e("A"), e("B"), e("C | D")]);
    assert_eq!(conjuncts(&e("A | B")), vec![e("A | B")]);
    assert_eq!(disjuncts(&e("A | (B | C) | D & E")), vec![e("A"), e("B"), e("C"), e("D & E")]);
}

#[test]
fn conversion_is_idempotent_on_samples() {
    for text in [
        "A <=> B",
        "A =/= B =/= C",
        "(A ==> B) & (B ==> C) ==> (A ==> C)",
        "~(A | B) <=> (~A & ~B)",
        "TRUE | A & FALSE",
    ] {
        let once = to_cnf(&e(text));
        assert_eq!(to_cnf(&once), once, "{text}");
    }
}
