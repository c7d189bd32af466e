//! The `curry!` macro: statically-typed currying into nested [`Function`]s.
//!
//! Every argument except the last is cloned on each call, so partial
//! applications can be reused.
//!
//! [`Function`]: crate::function::Function

/// Converts an n-ary closure into nested unary [`Function`]s.
///
/// Parameters must be annotated with their types; every parameter type must
/// be `Clone + 'static`.
///
/// # Examples
///
/// ```rust
/// use lawful::curry;
///
/// let concat = curry!(|a: String, b: String, c: String| a + &b + &c);
/// let with_a = concat.call(String::from("a"));
/// assert_eq!(with_a.call(String::from("b")).call(String::from("c")), "abc");
/// assert_eq!(with_a.call(String::from("x")).call(String::from("y")), "axy");
/// ```
///
/// [`Function`]: crate::function::Function
#[macro_export]
macro_rules! curry {
    (|$($name:ident : $type:ty),+ $(,)?| $body:expr) => {
        $crate::curry!(@nest [] $($name : $type),+ => $body)
    };
    (@nest [$($bound:ident)*] $name:ident : $type:ty => $body:expr) => {
        $crate::function::Function::new(move |$name: $type| {
            $(let $bound = ::std::clone::Clone::clone(&$bound);)*
            $body
        })
    };
    (@nest [$($bound:ident)*] $name:ident : $type:ty, $($rest:ident : $rest_type:ty),+ => $body:expr) => {
        $crate::function::Function::new(move |$name: $type| {
            $(let $bound = ::std::clone::Clone::clone(&$bound);)*
            $crate::curry!(@nest [$($bound)* $name] $($rest : $rest_type),+ => $body)
        })
    };
}
