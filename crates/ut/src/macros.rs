//! Formatting macros. Each takes the same operands as the function of the
//! same name, optionally followed by a format string and its arguments.

#[doc(hidden)]
#[macro_export]
macro_rules! __ut_message {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::message::resolve(::core::option::Option::Some(::core::format_args!(
            $fmt $(, $arg)*
        )))
    };
}

/// Requires a condition to hold, or a value to satisfy a matcher.
///
/// ```
/// use hamcrest2::prelude::equal_to;
///
/// ut::yes!(true);
/// ut::yes!(1 < 2, "{} should be below {}", 1, 2);
/// ut::yes!(1, equal_to(1));
/// ut::yes!(1, equal_to(1), "Help! Integers don't work");
/// ```
#[macro_export]
macro_rules! yes {
    ($cond:expr $(,)?) => {
        $crate::yes($cond)
    };
    ($cond:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::yes_msg($cond, &$crate::__ut_message!($fmt $(, $arg)*))
    };
    ($actual:expr, $matcher:expr $(,)?) => {
        $crate::yes_that($actual, $matcher)
    };
    ($actual:expr, $matcher:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::yes_that_msg($actual, $matcher, &$crate::__ut_message!($fmt $(, $arg)*))
    };
}

/// Requires a condition not to hold, or a value not to satisfy a matcher.
#[macro_export]
macro_rules! no {
    ($cond:expr $(,)?) => {
        $crate::no($cond)
    };
    ($cond:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::no_msg($cond, &$crate::__ut_message!($fmt $(, $arg)*))
    };
    ($actual:expr, $matcher:expr $(,)?) => {
        $crate::no_that($actual, $matcher)
    };
    ($actual:expr, $matcher:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::no_that_msg($actual, $matcher, &$crate::__ut_message!($fmt $(, $arg)*))
    };
}

/// Fails with a formatted message.
///
/// ```should_panic
/// ut::fail!("Hello {}", "junit");
/// ```
#[macro_export]
macro_rules! fail {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::fail(&$crate::__ut_message!($fmt $(, $arg)*))
    };
}

/// Requires two values to be structurally equal. Operands are borrowed.
#[macro_export]
macro_rules! eq {
    ($expected:expr, $actual:expr $(,)?) => {
        $crate::eq(&$expected, &$actual)
    };
    ($expected:expr, $actual:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::eq_msg(&$expected, &$actual, &$crate::__ut_message!($fmt $(, $arg)*))
    };
}

/// Requires two values to differ. Operands are borrowed.
#[macro_export]
macro_rules! ne {
    ($unexpected:expr, $actual:expr $(,)?) => {
        $crate::ne(&$unexpected, &$actual)
    };
    ($unexpected:expr, $actual:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::ne_msg(&$unexpected, &$actual, &$crate::__ut_message!($fmt $(, $arg)*))
    };
}

/// Requires floats or float slices to agree within a delta.
#[macro_export]
macro_rules! eq_within {
    ($expected:expr, $actual:expr, $delta:expr $(,)?) => {
        $crate::eq_within($expected, $actual, $delta)
    };
    ($expected:expr, $actual:expr, $delta:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::eq_within_msg($expected, $actual, $delta, &$crate::__ut_message!($fmt $(, $arg)*))
    };
}

/// Requires floats or float slices to differ by more than a delta.
#[macro_export]
macro_rules! ne_within {
    ($unexpected:expr, $actual:expr, $delta:expr $(,)?) => {
        $crate::ne_within($unexpected, $actual, $delta)
    };
    ($unexpected:expr, $actual:expr, $delta:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::ne_within_msg($unexpected, $actual, $delta, &$crate::__ut_message!($fmt $(, $arg)*))
    };
}

/// Requires a value to be present. The operand is borrowed.
#[macro_export]
macro_rules! not_null {
    ($value:expr $(,)?) => {
        $crate::not_null(&$value)
    };
    ($value:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::not_null_msg(&$value, &$crate::__ut_message!($fmt $(, $arg)*))
    };
}

/// Requires a value to be `None`. The operand is borrowed.
#[macro_export]
macro_rules! be_null {
    ($value:expr $(,)?) => {
        $crate::be_null(&$value)
    };
    ($value:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::be_null_msg(&$value, &$crate::__ut_message!($fmt $(, $arg)*))
    };
}

/// Requires two references to point at the same value.
///
/// Unlike [`eq!`], operands are passed as given, so write `same!(&a, &b)`.
#[macro_export]
macro_rules! same {
    ($expected:expr, $actual:expr $(,)?) => {
        $crate::same($expected, $actual)
    };
    ($expected:expr, $actual:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::same_msg($expected, $actual, &$crate::__ut_message!($fmt $(, $arg)*))
    };
}

/// Requires two references to point at different values. Operands are passed as given.
#[macro_export]
macro_rules! not_same {
    ($unexpected:expr, $actual:expr $(,)?) => {
        $crate::not_same($unexpected, $actual)
    };
    ($unexpected:expr, $actual:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::not_same_msg($unexpected, $actual, &$crate::__ut_message!($fmt $(, $arg)*))
    };
}

/// Requires a string or collection to be non-empty. The operand is borrowed.
#[macro_export]
macro_rules! not_empty {
    ($value:expr $(,)?) => {
        $crate::not_empty(&$value)
    };
    ($value:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::not_empty_msg(&$value, &$crate::__ut_message!($fmt $(, $arg)*))
    };
}

/// Requires a string or collection to be empty. The operand is borrowed.
#[macro_export]
macro_rules! is_empty {
    ($value:expr $(,)?) => {
        $crate::is_empty(&$value)
    };
    ($value:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::is_empty_msg(&$value, &$crate::__ut_message!($fmt $(, $arg)*))
    };
}

/// Requires a string with a non-whitespace character. The operand is borrowed.
#[macro_export]
macro_rules! not_blank {
    ($value:expr $(,)?) => {
        $crate::not_blank(&$value)
    };
    ($value:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::not_blank_msg(&$value, &$crate::__ut_message!($fmt $(, $arg)*))
    };
}

/// Requires an absent, empty or whitespace-only string. The operand is borrowed.
#[macro_export]
macro_rules! is_blank {
    ($value:expr $(,)?) => {
        $crate::is_blank(&$value)
    };
    ($value:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::is_blank_msg(&$value, &$crate::__ut_message!($fmt $(, $arg)*))
    };
}
