//! Runs the suite against the stdlib sorts, which checks the harness itself. The unstable variant
//! makes sure the stability tests are skipped for sorts that do not promise stability.

use std::cmp::Ordering;

use sort_test_tools::Sort;

macro_rules! std_sort_impl {
    ($module:ident, $name:expr, $is_stable:expr, $sort:ident, $sort_by:ident) => {
        mod $module {
            use super::*;

            struct SortImpl {}

            impl Sort for SortImpl {
                const IS_STABLE: bool = $is_stable;

                fn name() -> String {
                    $name.into()
                }

                fn sort<T>(arr: &mut [T])
                where
                    T: Ord,
                {
                    arr.$sort();
                }

                fn sort_by<T, F>(arr: &mut [T], compare: F)
                where
                    F: FnMut(&T, &T) -> Ordering,
                {
                    arr.$sort_by(compare);
                }
            }

            sort_test_tools::instantiate_sort_tests!(SortImpl);
        }
    };
}

std_sort_impl!(std_stable, "rust_std_stable", true, sort, sort_by);
std_sort_impl!(std_unstable, "rust_std_unstable", false, sort_unstable, sort_unstable_by);
