//! History ledger contract: ordering, copy isolation, clear semantics.

use tally::{Calculator, Number, Op};

#[test]
fn records_land_in_insertion_order() {
    let mut calc = Calculator::new();
    calc.add(2, 3);
    calc.add(4, 5);

    assert_eq!(calc.get_history(), vec!["2 + 3 = 5", "4 + 5 = 9"]);
}

#[test]
fn each_add_appends_exactly_one_record() {
    let mut calc = Calculator::new();
    for i in 0..10 {
        calc.add(i, i);
        assert_eq!(calc.get_history().len(), (i + 1) as usize);
    }
}

#[test]
fn returned_history_is_isolated_from_the_calculator() {
    let mut calc = Calculator::new();
    calc.add(1, 1);

    let mut copy = calc.get_history();
    copy.push("fake".to_string());
    copy[0] = "tampered".to_string();

    let fresh = calc.get_history();
    assert_eq!(fresh.len(), 1);
    assert_eq!(fresh[0], "1 + 1 = 2");
}

#[test]
fn calculator_mutation_does_not_reach_old_copies() {
    let mut calc = Calculator::new();
    calc.add(1, 1);

    let before = calc.get_history();
    calc.add(2, 2);
    calc.clear_history();

    assert_eq!(before, vec!["1 + 1 = 2"]);
}

#[test]
fn get_history_is_idempotent_between_mutations() {
    let mut calc = Calculator::new();
    calc.add(3, 4);
    calc.add(5, 6);

    let first = calc.get_history();
    let second = calc.get_history();
    let third = calc.get_history();
    assert_eq!(first, second);
    assert_eq!(second, third);
}

#[test]
fn clear_history_always_yields_empty() {
    let mut calc = Calculator::new();
    calc.clear_history(); // clearing an empty ledger is fine
    assert!(calc.get_history().is_empty());

    calc.add(1, 2);
    calc.add(3, 4);
    calc.clear_history();
    assert!(calc.get_history().is_empty());
}

#[test]
fn ledger_is_usable_after_clear() {
    let mut calc = Calculator::new();
    calc.add(1, 2);
    calc.clear_history();

    calc.add(4, 5);
    assert_eq!(calc.get_history(), vec!["4 + 5 = 9"]);

    // Sequence numbering restarted with the new ledger.
    assert_eq!(calc.history().records()[0].seq, 1);
}

#[test]
fn structured_records_match_rendered_text() {
    let mut calc = Calculator::new();
    calc.add(2, 3);
    calc.add(1.5, 2.5);

    let records = calc.history().records();
    assert_eq!(records.len(), 2);

    assert_eq!(records[0].seq, 1);
    assert_eq!(records[0].op, Op::Add);
    assert_eq!(records[0].lhs, Number::Int(2));
    assert_eq!(records[0].rhs, Number::Int(3));
    assert_eq!(records[0].result, Number::Int(5));

    let rendered: Vec<String> = records.iter().map(|r| r.render()).collect();
    assert_eq!(rendered, calc.get_history());
}

#[test]
fn sequences_increase_monotonically_between_clears() {
    let mut calc = Calculator::new();
    calc.add(1, 1);
    calc.add(2, 2);
    calc.add(3, 3);

    let seqs: Vec<u64> = calc.history().records().iter().map(|r| r.seq).collect();
    assert_eq!(seqs, vec![1, 2, 3]);
}
