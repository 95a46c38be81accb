// Copyright (c) Sienna Satterwhite, LexiSkip Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

//! Ordering policies for [`OrderedSkipList`].
//!
//! The list never looks at its items directly, it only asks a [`Comparator`]
//! how two of them relate. Any `Fn(&T, &T) -> Ordering` closure is a valid
//! comparator, and a few common policies are provided here.
//!
//! [`OrderedSkipList`]: crate::skiplist::OrderedSkipList

use std::cmp::Ordering;

/// A total order over `T`.
pub trait Comparator<T: ?Sized> {
    fn compare(&self, left: &T, right: &T) -> Ordering;
}

impl<T, F> Comparator<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self(left, right)
    }
}

/// Orders items by their [`Ord`] implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Comparator<T> for NaturalOrder {
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        left.cmp(right)
    }
}

/// Orders floats numerically. Unordered pairs (anything involving `NaN`)
/// compare as equal.
#[derive(Debug, Default, Clone, Copy)]
pub struct FloatOrder;

macro_rules! float_order {
    ($($t:ty),*) => {
        $(
            impl Comparator<$t> for FloatOrder {
                #[inline]
                fn compare(&self, left: &$t, right: &$t) -> Ordering {
                    if left > right {
                        Ordering::Greater
                    } else if left < right {
                        Ordering::Less
                    } else {
                        Ordering::Equal
                    }
                }
            }
        )*
    };
}

float_order!(f32, f64);

/// Orders strings byte-wise after ASCII lower-casing, so `"Hello"` and
/// `"hello"` are the same word. Non-ASCII bytes are compared as-is.
#[derive(Debug, Default, Clone, Copy)]
pub struct CaseInsensitive;

impl Comparator<str> for CaseInsensitive {
    #[inline]
    fn compare(&self, left: &str, right: &str) -> Ordering {
        left.bytes()
            .map(|b| b.to_ascii_lowercase())
            .cmp(right.bytes().map(|b| b.to_ascii_lowercase()))
    }
}

impl Comparator<String> for CaseInsensitive {
    #[inline]
    fn compare(&self, left: &String, right: &String) -> Ordering {
        Comparator::<str>::compare(self, left.as_str(), right.as_str())
    }
}
