use callmock::{Mock, Value};
use serde_json::json;

#[test]
fn expected_calls_serialize() {
    let mock = Mock::new();
    mock.on("Put", ("key", vec![1u8, 2], Value::Nil))
        .returns((Value::list([1, 2]), 3u8));

    let call = mock.expected_calls().remove(0);
    assert_eq!(
        serde_json::to_value(&call.arguments).unwrap(),
        json!(["key", [1, 2], null])
    );
    assert_eq!(
        serde_json::to_value(&call.returns).unwrap(),
        json!([[1, 2], 3])
    );
}

#[test]
fn opaque_values_serialize_as_debug() {
    #[derive(Debug, PartialEq)]
    struct Token(u8);

    assert_eq!(
        serde_json::to_value(Value::opaque(Token(4))).unwrap(),
        json!("Token(4)")
    );
}
