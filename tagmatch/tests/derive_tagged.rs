//! Integration tests for `#[derive(Tagged)]`.

#![cfg(feature = "macros")]

use tagmatch::{BuildError, Cases, Discriminant, Discriminated, Key, TagSet, Tagged};

#[derive(Debug, Clone, PartialEq, Tagged)]
enum Message {
    ChangeColor { r: u8, g: u8, b: u8 },
    Move { x: i32, y: i32 },
    Write(String),
    Quit,
}

#[derive(Debug, Clone, PartialEq, Tagged)]
#[tag(field = "code")]
enum Response {
    #[tag(200)]
    Success { body: Vec<String> },
    #[tag(404)]
    NotFound,
    #[tag(500)]
    ServerError { detail: String },
}

#[derive(Debug, Tagged)]
enum Renamed<T> {
    #[tag("some")]
    Some(T),
    #[tag("none")]
    None,
}

fn describe_message(m: Message) -> String {
    match m {
        Message::ChangeColor { r, g, b } => {
            format!("Change the color to Red: {} | Green: {} | Blue: {}", r, g, b)
        }
        Message::Move { x, y } => {
            format!("Move in the x direction: {} and in the y direction: {}", x, y)
        }
        Message::Write(text) => format!("Text message: {}", text),
        Message::Quit => "Quit".to_string(),
    }
}

#[test]
fn test_variant_names_are_tags() {
    assert_eq!(
        Message::Write("hi".into()).discriminant("_tag"),
        Some(Discriminant::Str("Write"))
    );
    assert_eq!(Message::Quit.discriminant("_tag"), Some(Discriminant::Str("Quit")));
    assert_eq!(Message::Quit.discriminant("kind"), None);
    assert_eq!(<Message as TagSet>::FIELD, "_tag");
    assert_eq!(<Message as TagSet>::TAGS.len(), 4);
}

#[test]
fn test_custom_field_and_int_tags() {
    assert_eq!(<Response as TagSet>::FIELD, "code");
    assert_eq!(
        <Response as TagSet>::TAGS,
        &[
            Discriminant::Int(200),
            Discriminant::Int(404),
            Discriminant::Int(500),
        ]
    );
    assert_eq!(Response::NotFound.discriminant("code"), Some(Discriminant::Int(404)));
    assert_eq!(Response::NotFound.discriminant("_tag"), None);
}

#[test]
fn test_renamed_generic_enum() {
    assert_eq!(Renamed::Some(1).discriminant("_tag"), Some(Discriminant::Str("some")));
    assert_eq!(
        Renamed::<u8>::None.discriminant("_tag"),
        Some(Discriminant::Str("none"))
    );
}

#[test]
fn test_exhaustive_message_matcher() {
    let matcher = Cases::new()
        .case("ChangeColor", describe_message as fn(Message) -> String)
        .case("Move", describe_message)
        .case("Write", describe_message)
        .case("Quit", describe_message)
        .build_exhaustive::<Message>()
        .unwrap();

    assert_eq!(
        matcher.call(Message::ChangeColor { r: 12, g: 20, b: 30 }),
        Ok("Change the color to Red: 12 | Green: 20 | Blue: 30".to_string())
    );
    assert_eq!(
        matcher.call(Message::Move { x: 500, y: 100 }),
        Ok("Move in the x direction: 500 and in the y direction: 100".to_string())
    );
    assert_eq!(
        matcher.call(Message::Write("my message".into())),
        Ok("Text message: my message".to_string())
    );
}

#[test]
fn test_non_exhaustive_is_rejected_at_build() {
    let err = Cases::new()
        .case("Move", describe_message as fn(Message) -> String)
        .case("Quit", describe_message)
        .build_exhaustive::<Message>()
        .unwrap_err();

    assert_eq!(
        err,
        BuildError::NonExhaustive {
            field: "_tag".to_string(),
            missing: vec![Key::from("ChangeColor"), Key::from("Write")],
        }
    );
}

#[test]
fn test_default_case_satisfies_exhaustiveness() {
    let matcher = Cases::new()
        .case(200, (|_| "ok") as fn(Response) -> &'static str)
        .otherwise(|_| "not ok")
        .build_exhaustive::<Response>()
        .unwrap();

    assert_eq!(matcher.field(), "code");
    assert_eq!(matcher.call(Response::Success { body: vec![] }), Ok("ok"));
    assert_eq!(
        matcher.call(Response::ServerError {
            detail: "db".to_string()
        }),
        Ok("not ok")
    );
}

#[test]
fn test_absent_enum_value_uses_default() {
    let matcher = Cases::new()
        .case("Quit", (|_| 1) as fn(Option<Message>) -> i32)
        .otherwise(|_| 0)
        .build()
        .unwrap();

    assert_eq!(matcher.call(Some(Message::Quit)), Ok(1));
    assert_eq!(matcher.call(None), Ok(0));
}

#[test]
fn test_prelude_exports() {
    use tagmatch::prelude::*;

    fn assert_tagset<T: TagSet>() {}
    assert_tagset::<Message>();

    let matcher: Matcher<fn(Message) -> bool> = match_tag(
        Cases::new()
            .case("Quit", (|_| true) as fn(Message) -> bool)
            .otherwise(|_| false),
    )
    .unwrap();
    assert_eq!(matcher.call(Message::Quit), Ok(true));
    assert_eq!(TAG_FIELD, "_tag");
    assert_eq!(DEFAULT_KEY, "_");
}
