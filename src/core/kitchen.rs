//! Kitchen
//!
//! Turns a builder name into a fresh builder and places orders against it
//! through the [`Director`]. Built-in names map to their dedicated variants;
//! any other name is looked up among the configured menus.

use serde::Serialize;
use tracing::info;

use crate::core::builder::{
    BuildOutcome, HealthyMealBuilder, MealBuilder, MenuBuilder, VeganMealBuilder,
};
use crate::core::catalog::{BuildPolicy, Step};
use crate::core::director::{CustomMealOptions, Director, Recipe};
use crate::core::meal::{Meal, MealSnapshot};
use crate::core::menu::Menu;
use crate::error::{KitchenError, MealError, MealprepError};

/// Any builder the kitchen can hand out
#[derive(Debug)]
pub enum AnyBuilder {
    Vegan(VeganMealBuilder),
    Healthy(HealthyMealBuilder),
    Menu(MenuBuilder),
}

impl From<Recipe> for AnyBuilder {
    fn from(recipe: Recipe) -> Self {
        match recipe {
            Recipe::Vegan => Self::Vegan(VeganMealBuilder::new()),
            Recipe::Healthy => Self::Healthy(HealthyMealBuilder::new()),
        }
    }
}

impl MealBuilder for AnyBuilder {
    type Output = Result<Meal, MealError>;

    fn name(&self) -> &str {
        match self {
            Self::Vegan(b) => b.name(),
            Self::Healthy(b) => b.name(),
            Self::Menu(b) => b.name(),
        }
    }

    fn policy(&self) -> BuildPolicy {
        match self {
            Self::Vegan(b) => b.policy(),
            Self::Healthy(b) => b.policy(),
            Self::Menu(b) => b.policy(),
        }
    }

    fn meal(&self) -> &Meal {
        match self {
            Self::Vegan(b) => b.meal(),
            Self::Healthy(b) => b.meal(),
            Self::Menu(b) => b.meal(),
        }
    }

    fn add_starter(&mut self) -> &mut Self {
        match self {
            Self::Vegan(b) => {
                b.add_starter();
            }
            Self::Healthy(b) => {
                b.add_starter();
            }
            Self::Menu(b) => {
                b.add_starter();
            }
        }
        self
    }

    fn add_main_course(&mut self) -> &mut Self {
        match self {
            Self::Vegan(b) => {
                b.add_main_course();
            }
            Self::Healthy(b) => {
                b.add_main_course();
            }
            Self::Menu(b) => {
                b.add_main_course();
            }
        }
        self
    }

    fn add_dessert(&mut self) -> &mut Self {
        match self {
            Self::Vegan(b) => {
                b.add_dessert();
            }
            Self::Healthy(b) => {
                b.add_dessert();
            }
            Self::Menu(b) => {
                b.add_dessert();
            }
        }
        self
    }

    fn add_drink(&mut self) -> &mut Self {
        match self {
            Self::Vegan(b) => {
                b.add_drink();
            }
            Self::Healthy(b) => {
                b.add_drink();
            }
            Self::Menu(b) => {
                b.add_drink();
            }
        }
        self
    }

    fn build(&self) -> Self::Output {
        match self {
            Self::Vegan(b) => b.build(),
            Self::Healthy(b) => b.build().into_result(),
            Self::Menu(b) => b.build(),
        }
    }
}

/// A finished order
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    /// Builder that produced the meal
    pub builder: String,
    /// Policy that builder applied
    pub policy: BuildPolicy,
    /// Slot values at the time the order was served
    #[serde(flatten)]
    pub meal: MealSnapshot,
}

/// Summary of a builder the kitchen offers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuilderInfo {
    pub name: String,
    pub policy: BuildPolicy,
    pub builtin: bool,
}

/// Builder factory and order desk
#[derive(Debug, Clone, Default)]
pub struct Kitchen {
    menus: Vec<Menu>,
    director: Director,
}

impl Kitchen {
    /// Kitchen with the built-in builders only
    pub fn new() -> Self {
        Self::default()
    }

    /// Kitchen that also serves the given menus
    #[must_use]
    pub fn with_menus(mut self, menus: Vec<Menu>) -> Self {
        self.menus = menus;
        self
    }

    /// Every builder name the kitchen accepts
    pub fn available(&self) -> Vec<BuilderInfo> {
        Recipe::ALL
            .into_iter()
            .map(|recipe| {
                let builder = AnyBuilder::from(recipe);
                BuilderInfo {
                    name: recipe.to_string(),
                    policy: builder.policy(),
                    builtin: true,
                }
            })
            .chain(self.menus.iter().map(|menu| BuilderInfo {
                name: menu.name.clone(),
                policy: menu.policy,
                builtin: false,
            }))
            .collect()
    }

    /// Fresh builder for a name
    pub fn builder(&self, name: &str) -> Result<AnyBuilder, KitchenError> {
        if let Ok(recipe) = name.parse::<Recipe>() {
            return Ok(AnyBuilder::from(recipe));
        }

        self.menus
            .iter()
            .find(|menu| menu.name.eq_ignore_ascii_case(name.trim()))
            .map(|menu| AnyBuilder::Menu(MenuBuilder::new(menu.clone())))
            .ok_or_else(|| KitchenError::UnknownBuilder {
                name: name.to_string(),
                available: self.available().into_iter().map(|info| info.name).collect(),
            })
    }

    /// Full-course order
    pub fn order_recipe(&self, name: &str) -> Result<Order, MealprepError> {
        let mut builder = self.builder(name)?;
        let meal = self.director.construct_full_course(&mut builder);
        Self::serve(&builder, meal)
    }

    /// Main course plus the selected optional steps
    pub fn order_custom(
        &self,
        name: &str,
        options: CustomMealOptions,
    ) -> Result<Order, MealprepError> {
        let mut builder = self.builder(name)?;
        let meal = self.director.construct_custom_meal(&mut builder, options);
        Self::serve(&builder, meal)
    }

    /// Exactly the given steps, in the given order
    pub fn order_steps(&self, name: &str, steps: &[Step]) -> Result<Order, MealprepError> {
        let mut builder = self.builder(name)?;
        let meal = self.director.construct_from_steps(&mut builder, steps);
        Self::serve(&builder, meal)
    }

    fn serve(builder: &AnyBuilder, meal: Result<Meal, MealError>) -> Result<Order, MealprepError> {
        let meal = meal?;
        info!(builder = builder.name(), "Order served");
        Ok(Order {
            builder: builder.name().to_string(),
            policy: builder.policy(),
            meal: meal.snapshot(),
        })
    }
}
