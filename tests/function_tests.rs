//! End-to-end tests for curried functions and the function instances.

use lawful::control::Either;
use lawful::curry;
use lawful::function::{
    Applied, Curried, Dynamic, Function, FunctionArrow, FunctionKind, Signature,
};
use lawful::typeclass::{
    Applicative, Apply, Bind, Cartesian, Cocartesian, Functor, Monoid, Profunctor, Semigroup,
};
use rstest::{fixture, rstest};

#[fixture]
fn concat() -> Curried {
    let signature = Signature::new("concat", ["a", "b", "c"])
        .in_module("text")
        .with_doc("Concatenates three strings.");
    Curried::new(signature, |arguments| {
        Ok(Dynamic::Text(arguments.iter().filter_map(Dynamic::as_text).collect()))
    })
    .unwrap()
}

// =============================================================================
// Curried
// =============================================================================

#[rstest]
fn curried_arguments_accumulate_one_at_a_time(concat: Curried) {
    let result = concat
        .call([Dynamic::from("a")])
        .and_then(|f| f.call([Dynamic::from("b")]))
        .and_then(|f| f.call([Dynamic::from("c")]));
    assert_eq!(result, Ok(Dynamic::from("abc")));
}

#[rstest]
fn wrapping_a_partial_application_nests_the_currying(concat: Curried) {
    let Ok(Applied::Partial(with_a)) = concat.apply([Dynamic::from("a")]) else {
        panic!("one argument of three is a partial application");
    };
    let result = Curried::wrap(with_a)
        .call([Dynamic::from("b")])
        .and_then(|f| f.call([Dynamic::from("c")]));
    assert_eq!(result, Ok(Dynamic::from("abc")));
}

#[rstest]
fn metadata_survives_partial_application(concat: Curried) {
    let Ok(Applied::Partial(partial)) = concat.apply([Dynamic::from("a"), Dynamic::from("b")]) else {
        panic!("two arguments of three is a partial application");
    };
    assert_eq!(partial.name(), "concat");
    assert_eq!(partial.qualified_name(), "text::concat");
    assert_eq!(partial.module(), "text");
    assert_eq!(partial.doc(), Some("Concatenates three strings."));
    assert_eq!(partial.arity(), 3);
    assert_eq!(partial.remaining(), 1);
}

#[rstest]
fn zero_arity_callables_are_rejected() {
    let result = Curried::new(Signature::new("constant", Vec::<String>::new()), |_| {
        Ok(Dynamic::Unit)
    });
    assert_eq!(result.err(), Some(lawful::Error::InvalidArity { arity: 0 }));
}

#[rstest]
fn bound_receiver_is_the_first_argument(concat: Curried) {
    let result = concat
        .bind_receiver(Dynamic::from("self."))
        .and_then(|f| f.call(["b", "c"].map(Dynamic::from)));
    assert_eq!(result, Ok(Dynamic::from("self.bc")));
}

#[rstest]
fn the_curry_macro_nests_statically() {
    let concat = curry!(|a: String, b: String, c: String| a + &b + &c);
    assert_eq!(
        concat.call("a".into()).call("b".into()).call("c".into()),
        "abc"
    );
}

// =============================================================================
// Function instances
// =============================================================================

#[rstest]
fn reader_instance_threads_the_input() {
    let length = Function::new(|text: String| text.len());
    let pair = FunctionKind::apply(
        length.clone(),
        FunctionKind::map(Function::new(|text: String| text.to_uppercase()), |upper| {
            Function::new(move |n: usize| format!("{upper}:{n}"))
        }),
    );
    assert_eq!(pair.call(String::from("abc")), "ABC:3");

    let doubled = FunctionKind::bind(length, |n| Function::new(move |text: String| text.repeat(n)));
    assert_eq!(doubled.call(String::from("ab")), "abab");
    assert_eq!(FunctionKind::<i32>::pure('x').call(5), 'x');
}

#[rstest]
fn arrow_instance_lifts_through_pairs_and_sums() {
    let increment = Function::new(|x: i32| x + 1);

    let successor = Function::new(|n: usize| n + 1);
    let shown = FunctionArrow::dimap(successor, |text: String| text.len(), |n: usize| n.to_string());
    assert_eq!(shown.call(String::from("four")), "5");

    assert_eq!(FunctionArrow::first::<i32, i32, char>(increment.clone()).call((1, 'c')), (2, 'c'));
    assert_eq!(FunctionArrow::second::<i32, i32, char>(increment.clone()).call(('c', 1)), ('c', 2));

    let left = FunctionArrow::left::<i32, i32, char>(increment.clone());
    assert_eq!(left.call(Either::Left(1)), Either::Left(2));
    assert_eq!(left.call(Either::Right('c')), Either::Right('c'));
    let right = FunctionArrow::right::<i32, i32, char>(increment);
    assert_eq!(right.call(Either::Right(1)), Either::Right(2));
}

#[rstest]
fn functions_into_a_monoid_combine_pointwise() {
    let greeting = Function::new(|name: &'static str| format!("hello {name}"));
    let exclaim = Function::new(|_: &'static str| String::from("!"));
    assert_eq!(greeting.append(exclaim).call("world"), "hello world!");
    assert_eq!(Function::<i32, String>::empty().call(3), "");
}
