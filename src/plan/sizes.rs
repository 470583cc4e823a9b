//! Planner implementations.

use crate::error::GroupingError;

/// How [`by_size`] places students left over after filling whole groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RemainderPolicy {
    /// Spread the remainder across the existing groups, one student at a
    /// time from the front. Never produces a separate leftover group.
    Distribute,

    /// Keep the remainder as its own group when it is at least 2 and
    /// within one of the target size; otherwise distribute as above.
    ///
    /// A single leftover student, or a leftover group that would be more
    /// than one smaller than the target, is considered too lopsided to
    /// stand alone.
    SplitOff,
}

/// Plans `count` groups over `class_size` students.
///
/// Group sizes differ by at most one; the first `class_size % count`
/// groups are one larger.
///
/// # Errors
///
/// Returns [`GroupingError::TargetOutOfRange`] when `count` is zero or
/// exceeds the class size.
///
/// # Examples
///
/// ```
/// assert_eq!(groupwise::plan::by_count(8, 3).unwrap(), vec![3, 3, 2]);
/// ```
pub fn by_count(class_size: usize, count: usize) -> Result<Vec<usize>, GroupingError> {
    if count == 0 || count > class_size {
        return Err(GroupingError::TargetOutOfRange {
            target: count,
            class_size,
        });
    }
    let base = class_size / count;
    let remainder = class_size % count;
    let mut sizes = vec![base; count];
    for slot in sizes.iter_mut().take(remainder) {
        *slot += 1;
    }
    Ok(sizes)
}

/// Plans groups of roughly `size` students over `class_size`, handling
/// any remainder according to `policy`.
///
/// # Errors
///
/// Returns [`GroupingError::TargetOutOfRange`] when `size` is zero or
/// exceeds the class size.
///
/// # Examples
///
/// ```
/// use groupwise::plan::{by_size, RemainderPolicy};
///
/// assert_eq!(by_size(8, 3, RemainderPolicy::Distribute).unwrap(), vec![4, 4]);
/// assert_eq!(by_size(8, 3, RemainderPolicy::SplitOff).unwrap(), vec![3, 3, 2]);
/// ```
pub fn by_size(
    class_size: usize,
    size: usize,
    policy: RemainderPolicy,
) -> Result<Vec<usize>, GroupingError> {
    if size == 0 || size > class_size {
        return Err(GroupingError::TargetOutOfRange {
            target: size,
            class_size,
        });
    }
    let count = class_size / size;
    let remainder = class_size % size;
    let mut sizes = vec![size; count];
    match policy {
        RemainderPolicy::SplitOff if remainder >= 2 && size - remainder <= 1 => {
            sizes.push(remainder);
        }
        _ => {
            // The remainder can exceed the group count only when a single
            // group was planned; wrap so the plan still sums to class_size.
            for i in 0..remainder {
                sizes[i % count] += 1;
            }
        }
    }
    Ok(sizes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_by_count_even_split() {
        assert_eq!(by_count(9, 3).unwrap(), vec![3, 3, 3]);
    }

    #[test]
    fn test_by_count_remainder_enlarges_leading_groups() {
        assert_eq!(by_count(8, 3).unwrap(), vec![3, 3, 2]);
        assert_eq!(by_count(10, 4).unwrap(), vec![3, 3, 2, 2]);
    }

    #[test]
    fn test_by_count_singleton_groups() {
        assert_eq!(by_count(3, 3).unwrap(), vec![1, 1, 1]);
    }

    #[test]
    fn test_by_count_rejects_zero() {
        assert_eq!(
            by_count(5, 0).unwrap_err(),
            GroupingError::TargetOutOfRange {
                target: 0,
                class_size: 5
            }
        );
    }

    #[test]
    fn test_by_count_rejects_more_groups_than_students() {
        assert!(by_count(5, 6).is_err());
    }

    #[test]
    fn test_by_size_exact_fit_ignores_policy() {
        assert_eq!(by_size(6, 3, RemainderPolicy::Distribute).unwrap(), vec![3, 3]);
        assert_eq!(by_size(6, 3, RemainderPolicy::SplitOff).unwrap(), vec![3, 3]);
    }

    #[test]
    fn test_by_size_distribute() {
        assert_eq!(by_size(8, 3, RemainderPolicy::Distribute).unwrap(), vec![4, 4]);
    }

    #[test]
    fn test_by_size_split_off_keeps_near_full_group() {
        // Remainder 2 is within one of the target, so it stands alone.
        assert_eq!(by_size(8, 3, RemainderPolicy::SplitOff).unwrap(), vec![3, 3, 2]);
    }

    #[test]
    fn test_by_size_single_leftover_always_distributed() {
        assert_eq!(by_size(7, 3, RemainderPolicy::Distribute).unwrap(), vec![4, 3]);
        assert_eq!(by_size(7, 3, RemainderPolicy::SplitOff).unwrap(), vec![4, 3]);
    }

    #[test]
    fn test_by_size_small_leftover_distributed_under_split_off() {
        // Remainder 2 against target 5 would be 3 short — distribute.
        assert_eq!(
            by_size(12, 5, RemainderPolicy::SplitOff).unwrap(),
            vec![6, 6]
        );
    }

    #[test]
    fn test_by_size_single_group_absorbs_remainder() {
        assert_eq!(by_size(15, 10, RemainderPolicy::Distribute).unwrap(), vec![15]);
    }

    #[test]
    fn test_by_size_rejects_zero() {
        assert!(by_size(5, 0, RemainderPolicy::Distribute).is_err());
    }

    #[test]
    fn test_by_size_rejects_oversize_target() {
        assert_eq!(
            by_size(5, 6, RemainderPolicy::SplitOff).unwrap_err(),
            GroupingError::TargetOutOfRange {
                target: 6,
                class_size: 5
            }
        );
    }

    proptest! {
        #[test]
        fn prop_by_count_sums_to_class_size(n in 1usize..40, k in 1usize..40) {
            prop_assume!(k <= n);
            let sizes = by_count(n, k).unwrap();
            prop_assert_eq!(sizes.len(), k);
            prop_assert_eq!(sizes.iter().sum::<usize>(), n);
            prop_assert!(sizes.iter().all(|&s| s > 0));
        }

        #[test]
        fn prop_by_size_sums_to_class_size(
            n in 1usize..40,
            s in 1usize..40,
            split in proptest::bool::ANY,
        ) {
            prop_assume!(s <= n);
            let policy = if split {
                RemainderPolicy::SplitOff
            } else {
                RemainderPolicy::Distribute
            };
            let sizes = by_size(n, s, policy).unwrap();
            prop_assert_eq!(sizes.iter().sum::<usize>(), n);
            prop_assert!(sizes.iter().all(|&x| x > 0));
        }
    }
}
