//! Runtime view of the values handed to equality checks.
//!
//! An [`Operand`] reports a runtime type label and a [`View`] telling the
//! comparator whether it is looking at a null, a piece of text, a float, an
//! opaque scalar or an array. `Option::None` is the null value.
//!
//! Labels are normalised through [`Label`]: every sequence is `[T]` whatever
//! its container, at any depth, and all text is `str`. So `vec![vec![1]]` and
//! `[[1]]` share the label `[[i32]]`, and `vec![String::new()]` and `[""]`
//! share `[str]`.
//!
//! User types join in through [`scalar_operand!`](crate::scalar_operand), which
//! compares them with their own `PartialEq`.

use std::any::{type_name, Any};
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt::Debug;
use std::rc::Rc;
use std::sync::Arc;

/// What an operand looks like to the comparator.
#[derive(Debug)]
pub enum View<'a> {
    /// The null value.
    Null,
    /// Text, compared by content regardless of owning type.
    Text(&'a str),
    /// A single precision float.
    F32(f32),
    /// A double precision float.
    F64(f64),
    /// Any other value compared with `PartialEq`.
    Scalar(&'a dyn Scalar),
    /// An ordered sequence of operands.
    Array(Vec<&'a dyn Operand>),
}

/// Type-erased `PartialEq`.
pub trait Scalar: Debug {
    /// Upcasts to [`Any`] for downcasting in [`Scalar::scalar_eq`].
    fn as_any(&self) -> &dyn Any;

    /// Equal when `other` has the same concrete type and compares equal.
    fn scalar_eq(&self, other: &dyn Scalar) -> bool;
}

impl<T: PartialEq + Debug + 'static> Scalar for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn scalar_eq(&self, other: &dyn Scalar) -> bool {
        Scalar::as_any(other)
            .downcast_ref::<T>()
            .map_or(false, |other| self == other)
    }
}

/// A value that can take part in `eq` / `ne`.
pub trait Operand: Debug {
    /// Runtime type label reported when array types differ, e.g. `[i32]`.
    fn type_label(&self) -> Cow<'static, str>;

    /// Returns the comparator view of the value.
    fn view(&self) -> View<'_>;
}

/// Normalised type label, available without a value so that empty arrays
/// still carry their element type.
pub trait Label {
    /// Returns the label, e.g. `i32`, `str` or `[[f64]]`.
    fn label() -> Cow<'static, str>;
}

/// Implements [`Operand`] for types compared with their own `PartialEq`.
///
/// ```
/// #[derive(Debug, PartialEq)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// ut_core::scalar_operand!(Point);
///
/// let a = Point { x: 1, y: 2 };
/// let b = Point { x: 1, y: 2 };
/// assert!(ut_core::check::eq(&a, &b, "").is_ok());
/// assert!(ut_core::check::eq(&vec![a], &[b], "").is_ok());
/// ```
#[macro_export]
macro_rules! scalar_operand {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::operand::Label for $ty {
                fn label() -> ::std::borrow::Cow<'static, str> {
                    ::std::borrow::Cow::Borrowed(::std::any::type_name::<$ty>())
                }
            }

            impl $crate::operand::Operand for $ty {
                fn type_label(&self) -> ::std::borrow::Cow<'static, str> {
                    <$ty as $crate::operand::Label>::label()
                }

                fn view(&self) -> $crate::operand::View<'_> {
                    $crate::operand::View::Scalar(self)
                }
            }
        )+
    };
}

scalar_operand!(
    bool, char, (), i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize,
);

macro_rules! fixed_label {
    ($($ty:ty => $label:literal),+ $(,)?) => {
        $(
            impl Label for $ty {
                fn label() -> Cow<'static, str> {
                    Cow::Borrowed($label)
                }
            }
        )+
    };
}

fixed_label!(f32 => "f32", f64 => "f64", str => "str", String => "str");

impl Operand for f32 {
    fn type_label(&self) -> Cow<'static, str> {
        Self::label()
    }

    fn view(&self) -> View<'_> {
        View::F32(*self)
    }
}

impl Operand for f64 {
    fn type_label(&self) -> Cow<'static, str> {
        Self::label()
    }

    fn view(&self) -> View<'_> {
        View::F64(*self)
    }
}

impl Operand for str {
    fn type_label(&self) -> Cow<'static, str> {
        Self::label()
    }

    fn view(&self) -> View<'_> {
        View::Text(self)
    }
}

impl Operand for String {
    fn type_label(&self) -> Cow<'static, str> {
        Self::label()
    }

    fn view(&self) -> View<'_> {
        View::Text(self.as_str())
    }
}

impl<T: Label> Label for Option<T> {
    fn label() -> Cow<'static, str> {
        T::label()
    }
}

impl<T: Operand + Label> Operand for Option<T> {
    fn type_label(&self) -> Cow<'static, str> {
        Self::label()
    }

    fn view(&self) -> View<'_> {
        match self {
            Some(value) => value.view(),
            None => View::Null,
        }
    }
}

macro_rules! delegate_operand {
    ($($wrapper:ident),+) => {
        $(
            impl<T: Label + ?Sized> Label for $wrapper<T> {
                fn label() -> Cow<'static, str> {
                    T::label()
                }
            }

            impl<T: Operand + ?Sized> Operand for $wrapper<T> {
                fn type_label(&self) -> Cow<'static, str> {
                    (**self).type_label()
                }

                fn view(&self) -> View<'_> {
                    (**self).view()
                }
            }
        )+
    };
}

delegate_operand!(Box, Rc, Arc);

impl<T: Label + ?Sized> Label for &T {
    fn label() -> Cow<'static, str> {
        T::label()
    }
}

impl<T: Operand + ?Sized> Operand for &T {
    fn type_label(&self) -> Cow<'static, str> {
        (**self).type_label()
    }

    fn view(&self) -> View<'_> {
        (**self).view()
    }
}

fn elements<'a, T: Operand + 'a>(items: impl Iterator<Item = &'a T>) -> View<'a> {
    View::Array(items.map(|item| item as &dyn Operand).collect())
}

fn sequence_label<T: Label>() -> Cow<'static, str> {
    Cow::Owned(format!("[{}]", T::label()))
}

impl<T: Label> Label for [T] {
    fn label() -> Cow<'static, str> {
        sequence_label::<T>()
    }
}

impl<T: Operand + Label> Operand for [T] {
    fn type_label(&self) -> Cow<'static, str> {
        Self::label()
    }

    fn view(&self) -> View<'_> {
        elements(self.iter())
    }
}

impl<T: Label, const N: usize> Label for [T; N] {
    fn label() -> Cow<'static, str> {
        sequence_label::<T>()
    }
}

impl<T: Operand + Label, const N: usize> Operand for [T; N] {
    fn type_label(&self) -> Cow<'static, str> {
        Self::label()
    }

    fn view(&self) -> View<'_> {
        elements(self.iter())
    }
}

impl<T: Label> Label for Vec<T> {
    fn label() -> Cow<'static, str> {
        sequence_label::<T>()
    }
}

impl<T: Operand + Label> Operand for Vec<T> {
    fn type_label(&self) -> Cow<'static, str> {
        Self::label()
    }

    fn view(&self) -> View<'_> {
        elements(self.iter())
    }
}

impl<T: Label> Label for VecDeque<T> {
    fn label() -> Cow<'static, str> {
        sequence_label::<T>()
    }
}

impl<T: Operand + Label> Operand for VecDeque<T> {
    fn type_label(&self) -> Cow<'static, str> {
        Self::label()
    }

    fn view(&self) -> View<'_> {
        elements(self.iter())
    }
}

// Maps, sets and tuples compare with their own `PartialEq`.
macro_rules! structural_operand {
    ($($ty:ty => [$($param:ident),+]),+ $(,)?) => {
        $(
            impl<$($param),+> Label for $ty {
                fn label() -> Cow<'static, str> {
                    Cow::Borrowed(type_name::<Self>())
                }
            }

            impl<$($param),+> Operand for $ty
            where
                Self: PartialEq + Debug + 'static,
            {
                fn type_label(&self) -> Cow<'static, str> {
                    Self::label()
                }

                fn view(&self) -> View<'_> {
                    View::Scalar(self)
                }
            }
        )+
    };
}

structural_operand!(
    BTreeMap<K, V> => [K, V],
    BTreeSet<T> => [T],
    HashMap<K, V, S> => [K, V, S],
    HashSet<T, S> => [T, S],
    (A,) => [A],
    (A, B) => [A, B],
    (A, B, C) => [A, B, C],
    (A, B, C, D) => [A, B, C, D],
    (A, B, C, D, E) => [A, B, C, D, E],
    (A, B, C, D, E, F) => [A, B, C, D, E, F],
);
