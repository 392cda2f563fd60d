//! Value object trait: equality by value, not identity.
//!
//! Categories, risk levels, analysis verdicts and marketing suggestions have
//! no identity of their own. Two of them with the same fields are
//! interchangeable, and they are never mutated in place: recomputing a
//! verdict produces a new value.

/// Marker trait for value objects.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Margin { percent: f64 }
///
/// impl ValueObject for Margin {}
///
/// assert_eq!(Margin { percent: 12.5 }, Margin { percent: 12.5 });
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
