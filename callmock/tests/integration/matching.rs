use callmock::{Mock, Value, Values};

#[test]
fn first_registered_expectation_wins() {
    let mock = Mock::new();
    mock.on("f", (1, "a")).returns(("first",));
    mock.on("f", (1, "a")).returns(("second",));
    mock.on("f", (1, "a")).returns(("third",));

    assert_eq!(mock.method_called("f", (1, "a")), Values::from(("first",)));
}

#[test]
fn later_expectation_matches_when_earlier_differs() {
    let mock = Mock::new();
    mock.on("f", (1,)).returns(("one",));
    mock.on("f", (2,)).returns(("two",));

    assert_eq!(mock.method_called("f", (2,)), Values::from(("two",)));
}

#[test]
fn method_names_are_compared_exactly() {
    let mock = Mock::new();
    mock.on("f", (1,)).returns(("lower",));
    mock.on("F", (1,)).returns(("upper",));

    assert_eq!(mock.method_called("F", (1,)), Values::from(("upper",)));
}

#[test]
#[should_panic(expected = "unexpected method call: f(1)")]
fn fewer_arguments_do_not_match() {
    let mock = Mock::new();
    mock.on("f", (1, 2));

    mock.method_called("f", (1,));
}

#[test]
#[should_panic(expected = "unexpected method call: f(1, 2, 3)")]
fn more_arguments_do_not_match() {
    let mock = Mock::new();
    mock.on("f", (1, 2));

    mock.method_called("f", (1, 2, 3));
}

#[test]
#[should_panic(expected = "unexpected method call")]
fn nil_argument_is_not_a_missing_argument() {
    let mock = Mock::new();
    mock.on("f", (Value::Nil,));

    mock.method_called("f", ());
}

#[test]
fn byte_sequences_match_by_content() {
    let mock = Mock::new();
    let expected = vec![0x01u8, 0x02];
    mock.on("write", (expected,)).returns((2usize,));

    let actual: &[u8] = &[0x01, 0x02];
    assert_eq!(mock.method_called("write", (actual,)), Values::from((2usize,)));
}

#[test]
#[should_panic(expected = "unexpected method call: write(0x0103)")]
fn byte_sequences_with_other_content_do_not_match() {
    let mock = Mock::new();
    mock.on("write", (vec![0x01u8, 0x02],));

    mock.method_called("write", ([0x01u8, 0x03],));
}

#[test]
fn nil_byte_sequences_match_each_other() {
    let mock = Mock::new();
    mock.on("write", (Value::nil_bytes(),)).returns((0usize,));

    assert_eq!(
        mock.method_called("write", (Value::nil_bytes(),)),
        Values::from((0usize,))
    );
}

#[test]
#[should_panic(expected = "unexpected method call: write(0x)")]
fn nil_byte_sequence_is_not_empty() {
    let mock = Mock::new();
    mock.on("write", (Value::nil_bytes(),));

    mock.method_called("write", (Vec::<u8>::new(),));
}

#[test]
fn nil_matches_nil() {
    let mock = Mock::new();
    mock.on("lookup", ("id", None::<i32>)).returns((true,));

    assert_eq!(
        mock.method_called("lookup", ("id", Value::Nil)),
        Values::from((true,))
    );
}

#[test]
#[should_panic(expected = "unexpected method call: lookup(\"id\", 0)")]
fn nil_does_not_match_a_value() {
    let mock = Mock::new();
    mock.on("lookup", ("id", None::<i32>));

    mock.method_called("lookup", ("id", Some(0)));
}

#[test]
fn nested_values_match_structurally() {
    let mock = Mock::new();
    let query = || {
        Value::list([
            Value::from("users"),
            Value::reference(Value::list([1, 2, 3])),
        ])
    };
    mock.on("query", (query(),)).returns((3usize,));

    assert_eq!(mock.method_called("query", (query(),)), Values::from((3usize,)));
}

#[test]
fn returns_keep_count_and_order() {
    let mock = Mock::new();
    mock.on("split", ("a,b",)).returns(("a", "b", Value::Nil));

    let returns = mock.method_called("split", ("a,b",));
    assert_eq!(
        returns.into_vec(),
        vec![Value::from("a"), Value::from("b"), Value::Nil]
    );
}

#[test]
fn second_returns_call_overrides_first() {
    let mock = Mock::new();
    let handle = mock.on("f", ()).returns((1, 2));
    handle.returns((3,));

    assert_eq!(mock.method_called("f", ()), Values::from((3,)));
    assert_eq!(mock.method_called("f", ()), Values::from((3,)));
}

#[test]
fn registering_after_dispatch_keeps_first_match() {
    let mock = Mock::new();
    mock.on("f", (1,)).returns(("early",));
    assert_eq!(mock.method_called("f", (1,)), Values::from(("early",)));

    mock.on("f", (1,)).returns(("late",));
    assert_eq!(mock.method_called("f", (1,)), Values::from(("early",)));
}

#[test]
#[should_panic(expected = "unexpected method call: f(1i64)")]
fn integer_widths_do_not_match() {
    let mock = Mock::new();
    mock.on("f", (1i32,)).returns(("matched",));

    mock.method_called("f", (1i64,));
}

#[test]
fn numbers_of_the_same_width_match() {
    let mock = Mock::new();
    mock.on("f", (7u8, 0.5f32)).returns(("matched",));

    assert_eq!(
        mock.method_called("f", (7u8, 0.5f32)),
        Values::from(("matched",))
    );
}

#[test]
#[should_panic(expected = "unexpected method call: f(0.5)")]
fn float_widths_do_not_match() {
    let mock = Mock::new();
    mock.on("f", (0.5f32,));

    mock.method_called("f", (0.5f64,));
}
