//! Derive macros for lawful optics and pattern matching.
//!
//! # Available Derive Macros
//!
//! - [`Lenses`]: Generates lens optic constructors for struct fields
//! - [`Prisms`]: Generates prism optic constructors for enum variants
//! - [`PatternMatchable`]: Implements constructor introspection for enums
//!
//! # Example: Lenses
//!
//! ```rust,ignore
//! use lawful::Lenses;
//! use lawful::optics::{over, view};
//!
//! #[derive(Clone, Debug, PartialEq, Lenses)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! // Generated methods:
//! // - Point::x_lens() -> LensOptic<Point, Point, i32, i32>
//! // - Point::y_lens() -> LensOptic<Point, Point, i32, i32>
//!
//! let point = Point { x: 10, y: 20 };
//! assert_eq!(view(&Point::x_lens(), point.clone()), 10);
//! assert_eq!(over(&Point::y_lens(), |y| y + 1).call(point).y, 21);
//! ```
//!
//! # Example: Prisms
//!
//! ```rust,ignore
//! use lawful::Prisms;
//! use lawful::optics::over;
//!
//! #[derive(Clone, Debug, PartialEq, Prisms)]
//! enum Shape {
//!     Circle(f64),
//!     Rectangle(f64, f64),
//! }
//!
//! // Generated methods:
//! // - Shape::circle_prism() -> PrismOptic<Shape, Shape, f64, f64>
//! // - Shape::rectangle_prism() -> PrismOptic<Shape, Shape, (f64, f64), (f64, f64)>
//!
//! let grow = over(&Shape::circle_prism(), |radius| radius * 2.0);
//! assert_eq!(grow.call(Shape::Circle(1.0)), Shape::Circle(2.0));
//! assert_eq!(grow.call(Shape::Rectangle(1.0, 2.0)), Shape::Rectangle(1.0, 2.0));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod lenses;
mod pattern;
mod prisms;

use proc_macro::TokenStream;

/// Derive macro generating a lens optic per named struct field.
///
/// For each field `foo` of type `T` the macro generates
/// `StructName::foo_lens() -> LensOptic<StructName, StructName, T, T>`.
/// The lens reads the field by value and replaces it in place, so the struct
/// does not need `Default`, only `Clone + Debug + 'static` to be a `Value`.
///
/// Tuple structs and unit structs are rejected at compile time.
///
/// # Example
///
/// ```rust,ignore
/// use lawful::Lenses;
/// use lawful::optics::{Optic, set, view};
///
/// #[derive(Clone, Debug, PartialEq, Lenses)]
/// struct Person {
///     name: String,
///     age: u32,
/// }
///
/// let alice = Person { name: "Alice".to_string(), age: 42 };
/// assert_eq!(view(&Person::age_lens(), alice.clone()), 42);
///
/// let renamed = set(&Person::name_lens(), "Bob".to_string(), alice);
/// assert_eq!(renamed.name, "Bob");
/// ```
#[proc_macro_derive(Lenses)]
pub fn derive_lenses(input: TokenStream) -> TokenStream {
    lenses::derive_lenses_impl(input)
}

/// Derive macro generating a prism optic per enum variant.
///
/// The method name is the variant name in `snake_case` followed by
/// `_prism`. The focus type depends on the variant:
///
/// - **Unit variants**: `()`
/// - **Single-field tuple variants**: the field type
/// - **Multi-field tuple variants**: a tuple of the field types
/// - **Struct variants**: a tuple of the field types in declaration order
///
/// Running the prism on any other variant leaves the value untouched.
///
/// # Example
///
/// ```rust,ignore
/// use lawful::Prisms;
/// use lawful::optics::set;
///
/// #[derive(Clone, Debug, PartialEq, Prisms)]
/// enum Event {
///     KeyPress(char),
///     Click { x: i32, y: i32 },
///     Quit,
/// }
///
/// let moved = set(&Event::click_prism(), (1, 2), Event::Click { x: 0, y: 0 });
/// assert_eq!(moved, Event::Click { x: 1, y: 2 });
///
/// let untouched = set(&Event::click_prism(), (1, 2), Event::Quit);
/// assert_eq!(untouched, Event::Quit);
/// ```
#[proc_macro_derive(Prisms)]
pub fn derive_prisms(input: TokenStream) -> TokenStream {
    prisms::derive_prisms_impl(input)
}

/// Derive macro implementing `PatternMatchable` for an enum.
///
/// `CONSTRUCTORS` lists the variant names in declaration order and
/// `constructor()` reports which one a value was built with.
///
/// # Example
///
/// ```rust,ignore
/// use lawful::PatternMatchable;
/// use lawful::typeclass::PatternMatchable as _;
///
/// #[derive(Clone, Debug, PatternMatchable)]
/// enum Light {
///     Red,
///     Amber,
///     Green,
/// }
///
/// assert_eq!(Light::CONSTRUCTORS, &["Red", "Amber", "Green"]);
/// assert_eq!(Light::Amber.constructor(), "Amber");
/// ```
#[proc_macro_derive(PatternMatchable)]
pub fn derive_pattern_matchable(input: TokenStream) -> TokenStream {
    pattern::derive_pattern_matchable_impl(input)
}
