#![cfg(feature = "serde")]

//! JSON round trips for the serializable data types.

use lawful::control::Either;
use lawful::typeclass::{Identity, Sum};
use lawful::types::{Dictionary, List, Maybe};
use rstest::rstest;

#[rstest]
#[case(Maybe::Just(7))]
#[case(Maybe::Nothing)]
fn test_maybe_json_roundtrip(#[case] value: Maybe<i32>) {
    let json = serde_json::to_string(&value).unwrap();
    let restored: Maybe<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(value, restored);
}

#[rstest]
fn test_either_json_roundtrip() {
    let left: Either<String, i32> = Either::Left("error".to_string());
    let right: Either<String, i32> = Either::Right(42);

    let left_json = serde_json::to_string(&left).unwrap();
    let right_json = serde_json::to_string(&right).unwrap();

    let restored_left: Either<String, i32> = serde_json::from_str(&left_json).unwrap();
    let restored_right: Either<String, i32> = serde_json::from_str(&right_json).unwrap();

    assert_eq!(left, restored_left);
    assert_eq!(right, restored_right);
}

#[rstest]
fn test_list_is_a_plain_json_array() {
    let list: List<i32> = (1..=4).collect();
    let json = serde_json::to_string(&list).unwrap();
    assert_eq!(json, "[1,2,3,4]");
    let restored: List<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(list, restored);
}

#[rstest]
fn test_dictionary_is_a_plain_json_object() {
    let mut dictionary = Dictionary::new();
    for index in 0..20 {
        dictionary = dictionary.insert(format!("key{index}"), index);
    }
    let json = serde_json::to_string(&dictionary).unwrap();
    assert!(json.starts_with('{'));
    let restored: Dictionary<String, i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(dictionary, restored);
}

#[rstest]
fn test_wrappers_json_roundtrip() {
    let sum = Sum(-12);
    let restored: Sum = serde_json::from_str(&serde_json::to_string(&sum).unwrap()).unwrap();
    assert_eq!(sum, restored);

    let identity = Identity("kept".to_string());
    let json = serde_json::to_string(&identity).unwrap();
    let restored: Identity<String> = serde_json::from_str(&json).unwrap();
    assert_eq!(identity, restored);
}
