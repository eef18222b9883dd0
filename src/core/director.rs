//! Director
//!
//! Drives any [`MealBuilder`] through a fixed or configurable sequence of
//! steps. The director holds no state, never inspects the meal and never
//! handles errors from `build`; whatever `build` returns is returned as is.

use std::fmt;
use std::str::FromStr;

use tracing::info;

use crate::core::builder::MealBuilder;
use crate::core::catalog::Step;
use crate::error::KitchenError;

/// Fixed full-course recipes the director knows by name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recipe {
    Vegan,
    Healthy,
}

impl Recipe {
    pub const ALL: [Recipe; 2] = [Recipe::Vegan, Recipe::Healthy];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Vegan => "vegan",
            Self::Healthy => "healthy",
        }
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Recipe {
    type Err = KitchenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| KitchenError::UnknownBuilder {
                name: s.to_string(),
                available: Self::ALL.iter().map(ToString::to_string).collect(),
            })
    }
}

/// Which optional steps a custom meal includes
///
/// The main course is always added.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CustomMealOptions {
    pub with_starter: bool,
    pub with_dessert: bool,
    pub with_drink: bool,
}

impl CustomMealOptions {
    /// Steps to run, main course first
    pub fn steps(&self) -> Vec<Step> {
        let mut steps = vec![Step::Main];
        if self.with_starter {
            steps.push(Step::Starter);
        }
        if self.with_dessert {
            steps.push(Step::Dessert);
        }
        if self.with_drink {
            steps.push(Step::Drink);
        }
        steps
    }
}

/// Stateless step sequencer
#[derive(Debug, Clone, Copy, Default)]
pub struct Director;

impl Director {
    pub fn new() -> Self {
        Self
    }

    /// Run starter, main, dessert and drink in order without building
    ///
    /// `build` is left to the caller.
    pub fn prepare_full_course<'b, B: MealBuilder>(&self, builder: &'b mut B) -> &'b mut B {
        info!(builder = builder.name(), "Preparing full course");
        builder
            .add_starter()
            .add_main_course()
            .add_dessert()
            .add_drink()
    }

    /// Full course, then `build`
    pub fn construct_full_course<B: MealBuilder>(&self, builder: &mut B) -> B::Output {
        self.prepare_full_course(builder).build()
    }

    pub fn construct_vegan_meal<B: MealBuilder>(&self, builder: &mut B) -> B::Output {
        self.construct_full_course(builder)
    }

    pub fn construct_healthy_meal<B: MealBuilder>(&self, builder: &mut B) -> B::Output {
        self.construct_full_course(builder)
    }

    /// Construct a named recipe with the given builder
    pub fn construct<B: MealBuilder>(&self, recipe: Recipe, builder: &mut B) -> B::Output {
        match recipe {
            Recipe::Vegan => self.construct_vegan_meal(builder),
            Recipe::Healthy => self.construct_healthy_meal(builder),
        }
    }

    /// Main course plus whichever optional steps are enabled, then `build`
    pub fn construct_custom_meal<B: MealBuilder>(
        &self,
        builder: &mut B,
        options: CustomMealOptions,
    ) -> B::Output {
        info!(builder = builder.name(), ?options, "Preparing custom meal");
        for step in options.steps() {
            builder.add_step(step);
        }
        builder.build()
    }

    /// Run an explicit step sequence, then `build`
    pub fn construct_from_steps<B: MealBuilder>(
        &self,
        builder: &mut B,
        steps: &[Step],
    ) -> B::Output {
        info!(builder = builder.name(), steps = steps.len(), "Running step sequence");
        for step in steps {
            builder.add_step(*step);
        }
        builder.build()
    }
}
