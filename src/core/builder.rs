//! Meal builders
//!
//! Each builder variant owns one in-progress [`Meal`] and fixes the value
//! every step assigns. Steps return the builder so calls chain in any order
//! and any subset; each step writes its own slot, so the order never changes
//! the result.
//!
//! Variants differ in what `build` accepts:
//!
//! | Variant | Policy | `build` returns |
//! |---------|--------|-----------------|
//! | [`VeganMealBuilder`] | strict | `Result<Meal, MealError>` |
//! | [`HealthyMealBuilder`] | permissive | `Meal` |
//! | [`MenuBuilder`] | from its [`Menu`] | `Result<Meal, MealError>` |
//!
//! # After `build`
//!
//! `build` hands out a handle to the builder's own meal. Steps invoked after
//! `build` keep writing to that meal, and the change is visible through the
//! handle the caller already holds. Start a new session with a new builder.

use tracing::{debug, warn};

use crate::core::catalog::{BuildPolicy, Dessert, Drink, Main, Starter, Step};
use crate::core::meal::Meal;
use crate::core::menu::Menu;
use crate::error::MealError;

/// Result shapes a builder's `build` may produce
pub trait BuildOutcome {
    /// Normalize into a fallible result
    fn into_result(self) -> Result<Meal, MealError>;
}

impl BuildOutcome for Meal {
    fn into_result(self) -> Result<Meal, MealError> {
        Ok(self)
    }
}

impl BuildOutcome for Result<Meal, MealError> {
    fn into_result(self) -> Result<Meal, MealError> {
        self
    }
}

/// Capability set shared by every builder variant
pub trait MealBuilder {
    /// What `build` returns: `Meal` when it cannot fail, a `Result` otherwise
    type Output: BuildOutcome;

    /// Name the builder is ordered by
    fn name(&self) -> &str;

    /// Validation applied by `build`
    fn policy(&self) -> BuildPolicy;

    /// The meal under construction
    fn meal(&self) -> &Meal;

    fn add_starter(&mut self) -> &mut Self;

    fn add_main_course(&mut self) -> &mut Self;

    fn add_dessert(&mut self) -> &mut Self;

    fn add_drink(&mut self) -> &mut Self;

    /// Finish the session and hand out the meal
    fn build(&self) -> Self::Output;

    /// Run a single step by name
    fn add_step(&mut self, step: Step) -> &mut Self {
        match step {
            Step::Starter => self.add_starter(),
            Step::Main => self.add_main_course(),
            Step::Dessert => self.add_dessert(),
            Step::Drink => self.add_drink(),
        }
    }
}

/// Strict validation: starter and main must be present
pub fn require_starter_and_main(meal: &Meal) -> Result<(), MealError> {
    let mut missing = Vec::new();
    if meal.starter().is_none() {
        missing.push("starter");
    }
    if meal.main().is_none() {
        missing.push("main");
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(MealError::Incomplete { missing })
    }
}

fn build_with_policy(name: &str, policy: BuildPolicy, meal: &Meal) -> Result<Meal, MealError> {
    if policy == BuildPolicy::Strict {
        if let Err(e) = require_starter_and_main(meal) {
            warn!(builder = name, error = %e, "Rejected incomplete meal");
            return Err(e);
        }
    }
    debug!(builder = name, %policy, "Meal built");
    Ok(meal.clone())
}

/// Vegan meal: salad, veggie stir fry, vegan pudding, vegan shake
///
/// Strict: `build` fails unless starter and main were added.
#[derive(Debug, Default)]
pub struct VeganMealBuilder {
    meal: Meal,
}

impl VeganMealBuilder {
    pub const NAME: &'static str = "vegan";
    pub const STARTER: Starter = Starter::Salad;
    pub const MAIN: Main = Main::VeggieStirFry;
    pub const DESSERT: Dessert = Dessert::VeganPudding;
    pub const DRINK: Drink = Drink::VeganShake;

    pub fn new() -> Self {
        Self::default()
    }
}

impl MealBuilder for VeganMealBuilder {
    type Output = Result<Meal, MealError>;

    fn name(&self) -> &str {
        Self::NAME
    }

    fn policy(&self) -> BuildPolicy {
        BuildPolicy::Strict
    }

    fn meal(&self) -> &Meal {
        &self.meal
    }

    fn add_starter(&mut self) -> &mut Self {
        debug!(builder = Self::NAME, value = %Self::STARTER, "Adding starter");
        self.meal.set_starter(Self::STARTER);
        self
    }

    fn add_main_course(&mut self) -> &mut Self {
        debug!(builder = Self::NAME, value = %Self::MAIN, "Adding main course");
        self.meal.set_main(Self::MAIN);
        self
    }

    fn add_dessert(&mut self) -> &mut Self {
        debug!(builder = Self::NAME, value = %Self::DESSERT, "Adding dessert");
        self.meal.set_dessert(Self::DESSERT);
        self
    }

    fn add_drink(&mut self) -> &mut Self {
        debug!(builder = Self::NAME, value = %Self::DRINK, "Adding drink");
        self.meal.set_drink(Self::DRINK);
        self
    }

    fn build(&self) -> Self::Output {
        build_with_policy(Self::NAME, BuildPolicy::Strict, &self.meal)
    }
}

/// Healthy meal: salad, grilled chicken, fruit salad, water
///
/// Permissive: `build` always succeeds, even with no steps taken.
#[derive(Debug, Default)]
pub struct HealthyMealBuilder {
    meal: Meal,
}

impl HealthyMealBuilder {
    pub const NAME: &'static str = "healthy";
    pub const STARTER: Starter = Starter::Salad;
    pub const MAIN: Main = Main::GrilledChicken;
    pub const DESSERT: Dessert = Dessert::FruitSalad;
    pub const DRINK: Drink = Drink::Water;

    pub fn new() -> Self {
        Self::default()
    }
}

impl MealBuilder for HealthyMealBuilder {
    type Output = Meal;

    fn name(&self) -> &str {
        Self::NAME
    }

    fn policy(&self) -> BuildPolicy {
        BuildPolicy::Permissive
    }

    fn meal(&self) -> &Meal {
        &self.meal
    }

    fn add_starter(&mut self) -> &mut Self {
        debug!(builder = Self::NAME, value = %Self::STARTER, "Adding starter");
        self.meal.set_starter(Self::STARTER);
        self
    }

    fn add_main_course(&mut self) -> &mut Self {
        debug!(builder = Self::NAME, value = %Self::MAIN, "Adding main course");
        self.meal.set_main(Self::MAIN);
        self
    }

    fn add_dessert(&mut self) -> &mut Self {
        debug!(builder = Self::NAME, value = %Self::DESSERT, "Adding dessert");
        self.meal.set_dessert(Self::DESSERT);
        self
    }

    fn add_drink(&mut self) -> &mut Self {
        debug!(builder = Self::NAME, value = %Self::DRINK, "Adding drink");
        self.meal.set_drink(Self::DRINK);
        self
    }

    fn build(&self) -> Self::Output {
        debug!(builder = Self::NAME, policy = "permissive", "Meal built");
        self.meal.clone()
    }
}

/// Builder whose values and policy come from a configured [`Menu`]
///
/// The policy is only known at runtime, so `build` is always fallible; it
/// fails only for strict menus.
#[derive(Debug)]
pub struct MenuBuilder {
    menu: Menu,
    meal: Meal,
}

impl MenuBuilder {
    pub fn new(menu: Menu) -> Self {
        Self {
            menu,
            meal: Meal::new(),
        }
    }
}

impl MealBuilder for MenuBuilder {
    type Output = Result<Meal, MealError>;

    fn name(&self) -> &str {
        &self.menu.name
    }

    fn policy(&self) -> BuildPolicy {
        self.menu.policy
    }

    fn meal(&self) -> &Meal {
        &self.meal
    }

    fn add_starter(&mut self) -> &mut Self {
        debug!(builder = %self.menu.name, value = %self.menu.starter, "Adding starter");
        self.meal.set_starter(self.menu.starter);
        self
    }

    fn add_main_course(&mut self) -> &mut Self {
        debug!(builder = %self.menu.name, value = %self.menu.main, "Adding main course");
        self.meal.set_main(self.menu.main);
        self
    }

    fn add_dessert(&mut self) -> &mut Self {
        debug!(builder = %self.menu.name, value = %self.menu.dessert, "Adding dessert");
        self.meal.set_dessert(self.menu.dessert);
        self
    }

    fn add_drink(&mut self) -> &mut Self {
        debug!(builder = %self.menu.name, value = %self.menu.drink, "Adding drink");
        self.meal.set_drink(self.menu.drink);
        self
    }

    fn build(&self) -> Self::Output {
        build_with_policy(&self.menu.name, self.menu.policy, &self.meal)
    }
}
