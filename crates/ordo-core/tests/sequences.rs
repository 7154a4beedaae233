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

use ordo_core::dispatch::member::CompareTo;
use ordo_core::ops;
use ordo_core::ordering::Ordering;
use ordo_core::seq;
use pretty_assertions::assert_eq;

#[test]
fn test_lexicographic_basics() {
    assert_eq!(seq::compare([1_i32, 2, 3], [1_i32, 2, 4]), Ordering::Less);
    assert_eq!(seq::compare([1_i32, 2], [1_i32, 2, 3]), Ordering::Less);
    assert_eq!(seq::compare([1_i32, 2, 3], [1_i32, 2, 3]), Ordering::Equivalent);
    assert_eq!(seq::compare([1_i32, 2, 4], [1_i32, 2, 3]), Ordering::Greater);
}

#[test]
fn test_mixed_element_types() {
    let ints = [1_i64, 2, 3];
    let floats = [1.0_f64, 2.0, 3.5];
    assert_eq!(seq::compare(&ints, &floats), Ordering::Less);
    assert_eq!(seq::compare(&floats, &ints), Ordering::Greater);
    assert_eq!(ops::compare(&ints, &floats), Ordering::Less);
    assert!(seq::are_equal(&ints, &[1.0_f32, 2.0, 3.0]));
}

#[test]
fn test_empty_sequences() {
    let empty: [u8; 0] = [];
    assert_eq!(seq::compare(&empty, &empty), Ordering::Equivalent);
    assert_eq!(seq::compare(&empty, &[0_u8]), Ordering::Less);
    assert!(seq::are_equal(&empty, &empty));
    assert_eq!(seq::describe(&empty), "[]");
}

#[test]
fn test_nested_sequences() {
    let a = vec![vec![1_u8, 2], vec![3]];
    let b = vec![vec![1_u8, 2], vec![3, 0]];
    assert_eq!(ops::compare(&a, &b), Ordering::Less);
    assert_eq!(ops::stringify(&a), "[[1, 2], [3]]");
    assert!(!ops::are_equal(&a, &b));
}

#[test]
fn test_strings_against_string_slices() {
    let owned = vec![String::from("bollard"), String::from("quay")];
    let borrowed = ["bollard", "quay"];
    assert!(seq::are_equal(owned.iter().map(String::as_str), borrowed));
    assert_eq!(
        seq::compare(borrowed.iter().copied(), owned.iter()),
        Ordering::Equivalent
    );
    assert_eq!(seq::describe(borrowed), "[\"bollard\", \"quay\"]");
}

/// Orders by length only.
#[derive(Debug)]
struct Label(&'static str);

impl CompareTo for Label {
    fn compare_to(&self, other: &Self) -> Ordering {
        self.0.len().cmp(&other.0.len()).into()
    }
}

ordo_core::resolve! {
    Compare(Label);
    Stringify(Label);
}

#[test]
fn test_user_types_in_sequences() {
    let a = [Label("ab"), Label("xyz")];
    let b = [Label("cd"), Label("uvw")];
    assert_eq!(ops::compare(&a, &b), Ordering::Equivalent);
    assert_eq!(ops::compare(&a[..1], &b[..]), Ordering::Less);
    assert_eq!(ops::stringify(&a), "[Label(\"ab\"), Label(\"xyz\")]");
}

#[test]
fn test_options() {
    assert_eq!(ops::compare(&None::<u8>, &Some(0_u8)), Ordering::Less);
    assert_eq!(ops::compare(&Some(1_i32), &Some(1.0_f64)), Ordering::Equivalent);
    assert_eq!(ops::compare(&Some(f64::NAN), &Some(1.0_f64)), Ordering::Incomparable);
    assert_eq!(ops::stringify(&Some("x")), "Some(\"x\")");
    assert_eq!(ops::stringify(&None::<u8>), "None");
}
