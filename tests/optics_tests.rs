//! End-to-end tests for profunctor optics and the optic derives.

use lawful::control::Either;
use lawful::optics::{Optic, PrismOptic, lens, over, prism, set, to_lens, view};
use lawful::typeclass::{Handlers, PatternMatchable, Value};
use lawful::{Lenses, PatternMatchable, Prisms};
use rstest::rstest;

#[derive(Debug, Clone, PartialEq, Lenses)]
struct Person {
    name: String,
    age: u32,
}

fn person(name: &str, age: u32) -> Person {
    Person {
        name: name.to_owned(),
        age,
    }
}

fn people() -> Vec<Person> {
    vec![person("Alice", 42), person("Bob", 7)]
}

// =============================================================================
// Lenses
// =============================================================================

#[rstest]
fn composed_lens_updates_only_the_first_age() {
    let first = lens(
        |people: Vec<Person>| people[0].clone(),
        |person: Person, people: Vec<Person>| vec![person, people[1].clone()],
    );
    let age = lens(
        |person: Person| person.age,
        |age: u32, person: Person| Person { age, ..person },
    );

    let older = over(&first.then(age), |age| age + 1).call(people());

    assert_eq!(older, vec![person("Alice", 43), person("Bob", 7)]);
}

#[rstest]
fn derived_lenses_compose_with_hand_written_ones() {
    let first = lens(
        |people: Vec<Person>| people[0].clone(),
        |person: Person, people: Vec<Person>| vec![person, people[1].clone()],
    );

    let renamed = set(&first.clone().then(Person::name_lens()), String::from("Carol"), people());
    assert_eq!(renamed[0], person("Carol", 42));
    assert_eq!(view(&first.then(Person::age_lens()), people()), 42);
}

#[rstest]
fn concrete_lens_is_extracted_from_an_optic() {
    let age = to_lens(&Person::age_lens());
    assert_eq!(age.view(person("Bob", 7)), 7);
    assert_eq!(age.update(8, person("Bob", 7)), person("Bob", 8));
}

#[rstest]
#[case(0)]
#[case(99)]
fn set_then_view_returns_the_new_focus(#[case] age: u32) {
    let optic = Person::age_lens();
    let updated = set(&optic, age, person("Alice", 42));
    assert_eq!(view(&optic, updated), age);
}

// =============================================================================
// Prisms
// =============================================================================

fn none<A: Value>() -> PrismOptic<Option<A>, Option<A>, A, A> {
    prism(
        |value: Option<A>| match value {
            Some(present) => Either::Right(present),
            None => Either::Left(None),
        },
        Some,
    )
}

fn maybe_singleton<A: Value>() -> PrismOptic<Vec<A>, Vec<A>, A, A> {
    prism(
        |values: Vec<A>| match values.first() {
            Some(head) => Either::Right(head.clone()),
            None => Either::Left(values),
        },
        |value: A| vec![value],
    )
}

#[rstest]
#[case(Some(vec![Some(42)]), Some(vec![Some(420)]))]
#[case(Some(vec![]), Some(vec![]))]
#[case(Some(vec![None]), Some(vec![None]))]
#[case(None, None)]
fn composed_prisms_reach_through_optional_layers(
    #[case] input: Option<Vec<Option<i32>>>,
    #[case] expected: Option<Vec<Option<i32>>>,
) {
    let optic = none::<Vec<Option<i32>>>()
        .then(maybe_singleton::<Option<i32>>())
        .then(none::<i32>());
    assert_eq!(over(&optic, |x| x * 10).call(input), expected);
}

#[derive(Debug, Clone, PartialEq, Prisms, PatternMatchable)]
enum Shape {
    Circle(f64),
    Rectangle(f64, f64),
    Point,
}

#[rstest]
fn derived_prisms_touch_only_their_variant() {
    let grow = over(&Shape::circle_prism(), |radius| radius * 2.0);
    assert_eq!(grow.call(Shape::Circle(1.5)), Shape::Circle(3.0));
    assert_eq!(grow.call(Shape::Rectangle(1.0, 2.0)), Shape::Rectangle(1.0, 2.0));

    let swap = over(&Shape::rectangle_prism(), |(width, height)| (height, width));
    assert_eq!(swap.call(Shape::Rectangle(1.0, 2.0)), Shape::Rectangle(2.0, 1.0));
    assert_eq!(set(&Shape::point_prism(), (), Shape::Point), Shape::Point);
}

// =============================================================================
// Pattern matching
// =============================================================================

#[rstest]
fn derived_constructors_follow_declaration_order() {
    assert_eq!(Shape::CONSTRUCTORS, &["Circle", "Rectangle", "Point"]);
    assert_eq!(Shape::Rectangle(1.0, 1.0).constructor(), "Rectangle");
}

#[rstest]
fn derived_match_dispatches_on_the_constructor() {
    let area = |shape: Shape| {
        shape.match_with(
            Handlers::new()
                .on("Circle", |shape: Shape| match shape {
                    Shape::Circle(radius) => 3.0 * radius * radius,
                    _ => f64::NAN,
                })
                .on("Rectangle", |shape: Shape| match shape {
                    Shape::Rectangle(width, height) => width * height,
                    _ => f64::NAN,
                })
                .on("Point", |_| 0.0),
        )
    };
    assert_eq!(area(Shape::Rectangle(2.0, 3.0)), Ok(6.0));
    assert_eq!(area(Shape::Point), Ok(0.0));
}

#[rstest]
fn partial_match_is_an_error() {
    let result = Shape::Point.match_with(Handlers::new().on("Point", |_| 0));
    assert_eq!(
        result,
        Err(lawful::Error::MissingHandler {
            constructor: "Circle"
        })
    );
}
