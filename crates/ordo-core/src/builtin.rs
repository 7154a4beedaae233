// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Bindings for the non-numeric built-in types.
//!
//! `bool`, `char`, `()` and `String` bind every dispatch point. `str` binds
//! all but `Swap`, which has no sized fallback to use. `String` and `str`
//! compare against each other through member impls, since std only provides
//! equality between them. [`Ordering`] stringifies to its token.

use crate::dispatch::member::{CompareTo, Describe};
use crate::ordering::Ordering;

crate::resolve! {
    AreEqual(bool);
    AreEquivalent(bool);
    Compare(bool);
    Stringify(bool);
    Swap(bool);

    AreEqual(char);
    AreEquivalent(char);
    Compare(char);
    Stringify(char);
    Swap(char);

    AreEqual(());
    AreEquivalent(());
    Compare(());
    Stringify(());
    Swap(());

    AreEqual(String);
    AreEquivalent(String);
    Compare(String);
    Stringify(String);
    Swap(String);

    AreEqual(str);
    AreEquivalent(str);
    Compare(str);
    Stringify(str);
}

impl CompareTo<str> for String {
    #[inline]
    fn compare_to(&self, other: &str) -> Ordering {
        self.as_str().cmp(other).into()
    }
}

impl CompareTo<String> for str {
    #[inline]
    fn compare_to(&self, other: &String) -> Ordering {
        self.cmp(other.as_str()).into()
    }
}

crate::resolve! {
    AreEqual(String, str);
    AreEqual(str, String);
    AreEquivalent(String, str);
    AreEquivalent(str, String);
    Compare(String, str);
    Compare(str, String);
}

impl Describe for Ordering {
    #[inline]
    fn describe(&self) -> String {
        self.as_str().to_owned()
    }
}

crate::resolve! {
    AreEqual(Ordering);
    AreEquivalent(Ordering);
    Stringify(Ordering);
    Swap(Ordering);
}

#[cfg(test)]
mod tests {
    use crate::ops::{are_equal, are_equivalent, compare, stringify, swap};
    use crate::ordering::Ordering;
    use crate::priority::{rank_of, Fallback, IllFormed, MemberFunction, MemberOperator, Priority};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_scalars() {
        assert_eq!(compare(&false, &true), Ordering::Less);
        assert_eq!(compare(&'b', &'a'), Ordering::Greater);
        assert_eq!(compare(&(), &()), Ordering::Equivalent);
        assert!(are_equal(&'z', &'z'));
        assert!(are_equivalent(&true, &true));
    }

    #[test]
    fn test_strings() {
        let owned = String::from("berth");
        assert!(are_equal(&owned, "berth"));
        assert!(are_equal("berth", &owned));
        assert_eq!(compare("apron", &owned), Ordering::Less);
        assert_eq!(compare(&owned, "apron"), Ordering::Greater);
        assert_eq!(compare("quay", "quay"), Ordering::Equivalent);
        assert_eq!(
            rank_of(crate::strategy!(Compare(String, str))),
            MemberFunction::RANK
        );
        assert_eq!(rank_of(crate::strategy!(Compare(str))), MemberOperator::RANK);
        assert_eq!(rank_of(crate::strategy!(AreEqual(str, String))), Fallback::RANK);
    }

    #[test]
    fn test_stringify() {
        assert_eq!(stringify(&true), "true");
        assert_eq!(stringify(&'q'), "'q'");
        assert_eq!(stringify(&()), "()");
        assert_eq!(stringify("pier"), "\"pier\"");
        assert_eq!(stringify(&String::from("pier")), "\"pier\"");
        assert_eq!(stringify(&Ordering::Incomparable), "incomparable");
        assert_eq!(
            rank_of(crate::strategy!(Stringify(Ordering))),
            MemberFunction::RANK
        );
    }

    #[test]
    fn test_swap() {
        let mut a = String::from("left");
        let mut b = String::from("right");
        swap(&mut a, &mut b);
        assert_eq!((a.as_str(), b.as_str()), ("right", "left"));

        let mut x = Ordering::Less;
        let mut y = Ordering::Incomparable;
        swap(&mut x, &mut y);
        assert_eq!((x, y), (Ordering::Incomparable, Ordering::Less));

        assert_eq!(rank_of(crate::strategy!(Swap(str))), IllFormed::RANK);
    }
}
