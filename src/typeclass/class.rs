//! Class descriptors: the kernel behind the trait hierarchy.
//!
//! Each trait in [`crate::typeclass`] is paired with a static [`Class`]
//! descriptor recording what the trait means algebraically: its superclasses,
//! its minimal complete definitions (MCDs), the default bodies it provides and
//! the laws it promises. Each data type declares an [`Instance`] per class it
//! joins, listing the operations it supplies directly.
//!
//! The descriptors drive three things:
//!
//! - [`Instance::validate`] checks that an instance covers an MCD of its class
//!   and of every ancestor, directly or through defaults, and otherwise fails
//!   with [`Error::NotImplemented`];
//! - [`Instance::resolve`] explains which body an operation ends up with;
//! - the `Display` rendering is the input of the documentation front-end.
//!
//! # Default-method resolution
//!
//! An operation supplied by the instance always wins. Otherwise the class
//! chain is walked depth-first, left-to-right over each class's superclass
//! list, starting from the class itself, and the first default found is used.
//! A class is always visited before its own superclasses, so a subclass
//! default overrides the one it refines: `Bind`'s `apply` via `bind` shadows
//! `Apply`'s `apply` via `apply_to`. `Monad` declares a default `map` via
//! `bind` and `pure`; since `Monad` is visited before `Applicative`, its
//! default shadows `map` via `apply`.
//!
//! ```rust
//! use lawful::typeclass::{Resolution, MONAD};
//!
//! match MONAD.default_for("map") {
//!     Some(Resolution::Default { class, via }) => {
//!         assert_eq!(class.name, "Monad");
//!         assert_eq!(via, &["bind", "pure"]);
//!     }
//!     other => panic!("unexpected resolution {other:?}"),
//! }
//! ```

use std::collections::BTreeSet;
use std::fmt;

use crate::error::{Error, Result};

/// An operation defined in terms of others.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Derivation {
    /// The operation receiving the default body.
    pub operation: &'static str,
    /// Operations the default body calls.
    pub via: &'static [&'static str],
}

impl Derivation {
    /// Declares that `operation` has a default body calling `via`.
    pub const fn new(operation: &'static str, via: &'static [&'static str]) -> Self {
        Self { operation, via }
    }
}

/// A named equation in a class's vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Law {
    /// Short name, used to label property tests.
    pub name: &'static str,
    /// The equation, in the notation of the class.
    pub statement: &'static str,
}

impl Law {
    /// Declares a law.
    pub const fn new(name: &'static str, statement: &'static str) -> Self {
        Self { name, statement }
    }
}

/// A type-class descriptor.
#[derive(Debug)]
pub struct Class {
    /// Class name.
    pub name: &'static str,
    /// Direct superclasses, in resolution order.
    pub superclasses: &'static [&'static Class],
    /// Alternative minimal complete definitions. Supplying every operation of
    /// any one alternative is enough.
    pub minimal: &'static [&'static [&'static str]],
    /// Default bodies this class provides.
    pub defaults: &'static [Derivation],
    /// Laws every instance must satisfy.
    pub laws: &'static [Law],
}

/// Where the body of an operation comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The instance supplies the operation itself.
    Provided,
    /// A default body declared by `class`.
    Default {
        /// The class declaring the default.
        class: &'static Class,
        /// Operations the default calls.
        via: &'static [&'static str],
    },
}

impl PartialEq for Class {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

impl Eq for Class {}

impl Class {
    /// The class followed by all its ancestors in resolution order:
    /// depth-first and left-to-right, with every class placed before its own
    /// superclasses (the C3 merge).
    pub fn linearization(&'static self) -> Vec<&'static Self> {
        let mut sequences: Vec<Vec<&'static Self>> = self
            .superclasses
            .iter()
            .map(|class| class.linearization())
            .collect();
        sequences.push(self.superclasses.to_vec());

        let mut order = vec![self];
        loop {
            sequences.retain(|sequence| !sequence.is_empty());
            if sequences.is_empty() {
                return order;
            }

            let next = sequences.iter().map(|sequence| sequence[0]).find(|head| {
                !sequences
                    .iter()
                    .any(|sequence| sequence[1..].iter().any(|class| std::ptr::eq(*class, *head)))
            });
            // An inconsistent hierarchy stops at the conflict.
            let Some(next) = next else {
                return order;
            };

            order.push(next);
            for sequence in &mut sequences {
                if std::ptr::eq(sequence[0], next) {
                    sequence.remove(0);
                }
            }
        }
    }

    /// Whether `other` appears in this class's chain (a class refines itself).
    pub fn refines(&'static self, other: &'static Self) -> bool {
        self.linearization()
            .iter()
            .any(|class| std::ptr::eq(*class, other))
    }

    /// Every operation named by the class or an ancestor, in chain order.
    pub fn operations(&'static self) -> Vec<&'static str> {
        let mut operations: Vec<&'static str> = Vec::new();

        for class in self.linearization() {
            let named = class
                .minimal
                .iter()
                .flat_map(|alternative| alternative.iter().copied())
                .chain(class.defaults.iter().map(|default| default.operation));
            for operation in named {
                if !operations.contains(&operation) {
                    operations.push(operation);
                }
            }
        }

        operations
    }

    /// The default body an instance of this class receives for `operation`
    /// when it does not supply one.
    pub fn default_for(&'static self, operation: &str) -> Option<Resolution> {
        self.linearization().into_iter().find_map(|class| {
            class
                .defaults
                .iter()
                .find(|default| default.operation == operation)
                .map(|default| Resolution::Default {
                    class,
                    via: default.via,
                })
        })
    }

    /// Operations available to an instance supplying `provided`: the supplied
    /// ones plus everything their resolved defaults reach.
    pub fn available(&'static self, provided: &[&'static str]) -> BTreeSet<&'static str> {
        let mut available: BTreeSet<&'static str> = provided.iter().copied().collect();
        let operations = self.operations();

        loop {
            let before = available.len();
            for operation in &operations {
                if available.contains(operation) {
                    continue;
                }
                if let Some(Resolution::Default { via, .. }) = self.default_for(operation)
                    && via.iter().all(|dependency| available.contains(dependency))
                {
                    available.insert(operation);
                }
            }
            if available.len() == before {
                return available;
            }
        }
    }

    /// The first operation that keeps `provided` from covering a minimal
    /// complete definition of this class or one of its ancestors.
    pub fn missing(&'static self, provided: &[&'static str]) -> Option<&'static str> {
        let available = self.available(provided);

        self.linearization().into_iter().find_map(|class| {
            let satisfied = class.minimal.is_empty()
                || class.minimal.iter().any(|alternative| {
                    alternative
                        .iter()
                        .all(|operation| available.contains(operation))
                });
            if satisfied {
                None
            } else {
                class.minimal.first().and_then(|alternative| {
                    alternative
                        .iter()
                        .copied()
                        .find(|operation| !available.contains(operation))
                })
            }
        })
    }
}

impl fmt::Display for Class {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "class {}", self.name)?;
        if !self.superclasses.is_empty() {
            let parents: Vec<&str> = self.superclasses.iter().map(|class| class.name).collect();
            write!(formatter, "({})", parents.join(", "))?;
        }
        writeln!(formatter)?;

        let alternatives: Vec<String> = self
            .minimal
            .iter()
            .map(|alternative| alternative.join(" & "))
            .collect();
        writeln!(formatter, "  minimal: {}", alternatives.join(" | "))?;

        for default in self.defaults {
            writeln!(
                formatter,
                "  default {} via {}",
                default.operation,
                default.via.join(", ")
            )?;
        }
        for law in self.laws {
            writeln!(formatter, "  law {}: {}", law.name, law.statement)?;
        }

        Ok(())
    }
}

/// A data type's membership in a class.
#[derive(Debug, Clone, Copy)]
pub struct Instance {
    /// Name of the data type.
    pub type_name: &'static str,
    /// The class joined.
    pub class: &'static Class,
    /// Operations the data type supplies directly.
    pub provided: &'static [&'static str],
}

impl Instance {
    /// Declares an instance.
    pub const fn new(
        type_name: &'static str,
        class: &'static Class,
        provided: &'static [&'static str],
    ) -> Self {
        Self {
            type_name,
            class,
            provided,
        }
    }

    /// Checks that every minimal complete definition along the class chain is
    /// covered.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotImplemented`] naming the first operation that is
    /// neither supplied nor derivable.
    pub fn validate(&self) -> Result<()> {
        match self.class.missing(self.provided) {
            Some(operation) => Err(Error::NotImplemented {
                operation,
                type_name: self.type_name,
            }),
            None => Ok(()),
        }
    }

    /// Where `operation` gets its body for this instance.
    pub fn resolve(&self, operation: &str) -> Option<Resolution> {
        if self.provided.contains(&operation) {
            Some(Resolution::Provided)
        } else {
            self.class.default_for(operation)
        }
    }
}
