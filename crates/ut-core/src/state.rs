//! Emptiness and blankness predicates.
//!
//! An absent string counts as empty and blank. An absent collection is a
//! caller bug: [`Emptiness::emptiness`] reports it as a precondition
//! violation instead of answering.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

use crate::errors::{codes, AssertError};

/// Values whose emptiness can be asked about.
pub trait Emptiness {
    /// Returns whether the value is empty.
    fn emptiness(&self) -> Result<bool, AssertError>;

    /// Answer for an absent (`None`) value of this type.
    fn absent() -> Result<bool, AssertError> {
        Err(AssertError::precondition(
            codes::ABSENT_COLLECTION,
            "emptiness of an absent collection is undefined",
        ))
    }
}

impl Emptiness for str {
    fn emptiness(&self) -> Result<bool, AssertError> {
        Ok(self.is_empty())
    }

    fn absent() -> Result<bool, AssertError> {
        Ok(true)
    }
}

impl Emptiness for String {
    fn emptiness(&self) -> Result<bool, AssertError> {
        Ok(self.is_empty())
    }

    fn absent() -> Result<bool, AssertError> {
        Ok(true)
    }
}

impl<T: Emptiness + ?Sized> Emptiness for &T {
    fn emptiness(&self) -> Result<bool, AssertError> {
        (**self).emptiness()
    }

    fn absent() -> Result<bool, AssertError> {
        T::absent()
    }
}

impl<T: Emptiness + ?Sized> Emptiness for Box<T> {
    fn emptiness(&self) -> Result<bool, AssertError> {
        (**self).emptiness()
    }

    fn absent() -> Result<bool, AssertError> {
        T::absent()
    }
}

impl<T: Emptiness> Emptiness for Option<T> {
    fn emptiness(&self) -> Result<bool, AssertError> {
        match self {
            Some(value) => value.emptiness(),
            None => T::absent(),
        }
    }

    fn absent() -> Result<bool, AssertError> {
        T::absent()
    }
}

impl<T> Emptiness for [T] {
    fn emptiness(&self) -> Result<bool, AssertError> {
        Ok(self.is_empty())
    }
}

impl<T, const N: usize> Emptiness for [T; N] {
    fn emptiness(&self) -> Result<bool, AssertError> {
        Ok(N == 0)
    }
}

macro_rules! collection_emptiness {
    ($($ty:ident < $($param:ident),+ >),+ $(,)?) => {
        $(
            impl<$($param),+> Emptiness for $ty<$($param),+> {
                fn emptiness(&self) -> Result<bool, AssertError> {
                    Ok(self.is_empty())
                }
            }
        )+
    };
}

collection_emptiness!(
    Vec<T>,
    VecDeque<T>,
    BTreeSet<T>,
    BTreeMap<K, V>,
    HashSet<T, S>,
    HashMap<K, V, S>,
);

/// Values that may carry text, used by the blankness checks.
pub trait Text {
    /// The text, or `None` when absent.
    fn text(&self) -> Option<&str>;

    /// Absent, empty or made only of whitespace.
    fn is_blank(&self) -> bool {
        self.text()
            .map_or(true, |text| text.chars().all(char::is_whitespace))
    }
}

impl Text for str {
    fn text(&self) -> Option<&str> {
        Some(self)
    }
}

impl Text for String {
    fn text(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl<T: Text + ?Sized> Text for &T {
    fn text(&self) -> Option<&str> {
        (**self).text()
    }
}

impl<T: Text + ?Sized> Text for Box<T> {
    fn text(&self) -> Option<&str> {
        (**self).text()
    }
}

impl<T: Text> Text for Option<T> {
    fn text(&self) -> Option<&str> {
        self.as_ref().and_then(|value| value.text())
    }
}
