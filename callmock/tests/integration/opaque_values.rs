use callmock::{Mock, Opaque, Value};

#[derive(Debug, Clone, PartialEq)]
struct User {
    id: u32,
    name: String,
}

#[derive(Debug, Clone, PartialEq)]
struct Admin {
    id: u32,
    name: String,
}

trait Repository {
    fn save(&self, user: User) -> Result<User, String>;
}

#[derive(Default)]
struct MockRepository {
    mock: Mock,
}

impl Repository for MockRepository {
    fn save(&self, user: User) -> Result<User, String> {
        let (saved, error): (Option<Opaque>, Option<String>) = self
            .mock
            .method_called("Save", (Value::opaque(user),))
            .extract()
            .unwrap();
        match (saved, error) {
            (_, Some(error)) => Err(error),
            (Some(saved), None) => Ok(saved.downcast_ref::<User>().unwrap().clone()),
            (None, None) => panic!("Save returned neither a user nor an error"),
        }
    }
}

fn tama() -> User {
    User {
        id: 1,
        name: "Tama".into(),
    }
}

#[test]
fn user_types_match_by_their_eq() {
    let repository = MockRepository::default();
    let saved = User {
        id: 1,
        name: "Tama (saved)".into(),
    };
    repository
        .mock
        .on("Save", (Value::opaque(tama()),))
        .returns((Value::opaque(saved.clone()), Value::Nil));

    assert_eq!(repository.save(tama()), Ok(saved));
}

#[test]
fn configured_error_is_returned() {
    let repository = MockRepository::default();
    repository
        .mock
        .on("Save", (Value::opaque(tama()),))
        .returns((Value::Nil, "duplicate id"));

    assert_eq!(repository.save(tama()), Err("duplicate id".to_string()));
}

#[test]
#[should_panic(expected = "unexpected method call")]
fn other_type_with_same_fields_does_not_match() {
    let mock = Mock::new();
    mock.on("Save", (Value::opaque(tama()),));

    mock.method_called(
        "Save",
        (Value::opaque(Admin {
            id: 1,
            name: "Tama".into(),
        }),),
    );
}

mod glob_import {
    use callmock::*;

    #[derive(Debug, PartialEq)]
    struct Point(i32);

    #[test]
    fn plain_eq_stays_unambiguous() {
        assert!(Point(1).eq(&Point(1)));
        assert!(Value::opaque(Point(1)).eq(&Value::opaque(Point(1))));
        assert!(!Opaque::new(Point(1)).eq(&Opaque::new(Point(2))));
    }
}
