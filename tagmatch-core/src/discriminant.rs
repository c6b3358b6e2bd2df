//! # Discriminants
//!
//! A discriminant is the value of the field that selects which case of a
//! tagged union a value is. Discriminants are either strings (`"Some"`,
//! `"Left"`) or integers (`200`, `404`).
//!
//! Two forms exist:
//!
//! - [`Discriminant`]: a borrowed, `Copy` view read off an input value.
//! - [`Key`]: the owned form stored in a handler mapping.

use std::{fmt, sync::Arc};

/// The conventional name of the discriminant field.
pub const TAG_FIELD: &str = "_tag";

/// The reserved key standing for "no other case matched".
///
/// It is also the effective discriminant of an input that has none.
pub const DEFAULT_KEY: &str = "_";

/// A discriminant read off an input value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Discriminant<'a> {
    /// A string tag, e.g. `"Some"`.
    Str(&'a str),
    /// An integer tag, e.g. `404`.
    Int(i64),
}

impl Discriminant<'_> {
    /// Returns true if this is the reserved [`DEFAULT_KEY`].
    pub fn is_default(&self) -> bool {
        matches!(self, Discriminant::Str(DEFAULT_KEY))
    }

    /// Convert into an owned [`Key`].
    pub fn to_key(&self) -> Key {
        match *self {
            Discriminant::Str(s) => Key::Str(s.to_owned()),
            Discriminant::Int(i) => Key::Int(i),
        }
    }
}

impl fmt::Display for Discriminant<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Discriminant::Str(s) => write!(f, "{:?}", s),
            Discriminant::Int(i) => write!(f, "{}", i),
        }
    }
}

/// An owned discriminant, used as a key in a handler mapping.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    /// A string key.
    Str(String),
    /// An integer key.
    Int(i64),
}

impl Key {
    /// The reserved default key as an owned [`Key`].
    pub fn default_key() -> Self {
        Key::Str(DEFAULT_KEY.to_owned())
    }

    /// Returns true if this is the reserved [`DEFAULT_KEY`].
    pub fn is_default(&self) -> bool {
        self.as_discriminant().is_default()
    }

    /// Borrow as a [`Discriminant`].
    pub fn as_discriminant(&self) -> Discriminant<'_> {
        match self {
            Key::Str(s) => Discriminant::Str(s),
            Key::Int(i) => Discriminant::Int(*i),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.as_discriminant(), f)
    }
}

impl From<Discriminant<'_>> for Key {
    fn from(d: Discriminant<'_>) -> Self {
        d.to_key()
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::Str(s.to_owned())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::Str(s)
    }
}

macro_rules! key_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Key {
                fn from(i: $t) -> Self {
                    Key::Int(i64::from(i))
                }
            }
        )*
    };
}

key_from_int!(i8, i16, i32, i64, u8, u16, u32);

/// A value that exposes a discriminant under a named field.
///
/// Returning `None` means the value has no usable discriminant for `field`:
/// the field is missing, null, or of a type that cannot be a tag. The matcher
/// treats that as the [`DEFAULT_KEY`].
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no discriminant field",
    label = "missing `Discriminated` implementation",
    note = "Derive `Tagged` on an enum, or implement `Discriminated` by hand."
)]
pub trait Discriminated {
    /// Read the discriminant stored under `field`.
    fn discriminant(&self, field: &str) -> Option<Discriminant<'_>>;
}

/// A tagged union whose full set of tags is known statically.
///
/// Derived by `#[derive(Tagged)]`. Used to check at construction time that a
/// mapping covers every case.
pub trait TagSet: Discriminated {
    /// The field the tags live under.
    const FIELD: &'static str;

    /// Every tag a value of this type can carry.
    const TAGS: &'static [Discriminant<'static>];
}

impl<T: Discriminated + ?Sized> Discriminated for &T {
    fn discriminant(&self, field: &str) -> Option<Discriminant<'_>> {
        (**self).discriminant(field)
    }
}

impl<T: Discriminated + ?Sized> Discriminated for Box<T> {
    fn discriminant(&self, field: &str) -> Option<Discriminant<'_>> {
        (**self).discriminant(field)
    }
}

impl<T: Discriminated + ?Sized> Discriminated for Arc<T> {
    fn discriminant(&self, field: &str) -> Option<Discriminant<'_>> {
        (**self).discriminant(field)
    }
}

// An absent input has no discriminant.
impl<T: Discriminated> Discriminated for Option<T> {
    fn discriminant(&self, field: &str) -> Option<Discriminant<'_>> {
        self.as_ref()?.discriminant(field)
    }
}
