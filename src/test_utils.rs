//! Test utilities for property-based testing
//!
//! This module provides generators and helpers for proptest.

#[cfg(test)]
pub mod generators {
    use proptest::prelude::*;

    use crate::core::catalog::{BuildPolicy, Dessert, Drink, Main, Starter, Step};
    use crate::core::director::CustomMealOptions;
    use crate::core::menu::Menu;

    /// Generate a single step
    pub fn step() -> impl Strategy<Value = Step> {
        prop::sample::select(Step::FULL_COURSE.to_vec())
    }

    /// Generate a permutation of all four steps
    pub fn full_course_permutation() -> impl Strategy<Value = Vec<Step>> {
        Just(Step::FULL_COURSE.to_vec()).prop_shuffle()
    }

    /// Generate any subset of the steps in any order
    pub fn step_subset() -> impl Strategy<Value = Vec<Step>> {
        prop::sample::subsequence(Step::FULL_COURSE.to_vec(), 0..=4).prop_shuffle()
    }

    /// Generate a step sequence that may repeat steps
    pub fn step_sequence() -> impl Strategy<Value = Vec<Step>> {
        prop::collection::vec(step(), 0..12)
    }

    /// Generate custom meal options
    pub fn custom_options() -> impl Strategy<Value = CustomMealOptions> {
        (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
            |(with_starter, with_dessert, with_drink)| CustomMealOptions {
                with_starter,
                with_dessert,
                with_drink,
            },
        )
    }

    /// Generate a valid, non-reserved menu name
    pub fn menu_name() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9-]{2,15}".prop_filter("Name must not be a built-in", |s| {
            s != "vegan" && s != "healthy"
        })
    }

    /// Generate a menu with arbitrary catalog values
    pub fn menu() -> impl Strategy<Value = Menu> {
        (
            menu_name(),
            prop::sample::select(vec![BuildPolicy::Strict, BuildPolicy::Permissive]),
            prop::sample::select(Starter::ALL.to_vec()),
            prop::sample::select(Main::ALL.to_vec()),
            prop::sample::select(Dessert::ALL.to_vec()),
            prop::sample::select(Drink::ALL.to_vec()),
        )
            .prop_map(|(name, policy, starter, main, dessert, drink)| Menu {
                name,
                policy,
                starter,
                main,
                dessert,
                drink,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::generators::*;
    use crate::core::catalog::Step;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_full_course_permutation_generator(steps in full_course_permutation()) {
            prop_assert_eq!(steps.len(), 4);
            for step in Step::FULL_COURSE {
                prop_assert!(steps.contains(&step));
            }
        }

        #[test]
        fn test_step_subset_generator_has_no_repeats(steps in step_subset()) {
            prop_assert!(steps.len() <= 4);
            for (i, step) in steps.iter().enumerate() {
                prop_assert!(!steps[i + 1..].contains(step));
            }
        }

        #[test]
        fn test_menu_name_generator(name in menu_name()) {
            prop_assert!(name != "vegan" && name != "healthy");
            prop_assert!(name
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        }
    }
}
