//! Step catalog
//!
//! Closed enumerations of the values each meal slot can hold. The catalog is
//! used for validation and display only; builders decide which value a step
//! assigns.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Declares one closed slot enumeration with its canonical names.
macro_rules! slot_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($(#[$vmeta:meta])* $variant:ident => $text:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
        }

        impl $name {
            /// Every value in declaration order
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

            /// Human-readable name of this enumeration
            pub const KIND: &'static str = $kind;

            /// Canonical name of the value
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }

            /// Canonical names of every value
            pub fn names() -> Vec<&'static str> {
                Self::ALL.iter().map(|v| v.as_str()).collect()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = CatalogError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim().to_ascii_uppercase().replace('-', "_");
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == wanted)
                    .ok_or_else(|| CatalogError::UnknownValue {
                        kind: $kind,
                        value: s.to_string(),
                        choices: Self::names(),
                    })
            }
        }
    };
}

slot_enum! {
    /// Values for the starter slot
    Starter, "starter" {
        Salad => "SALAD",
        Soup => "SOUP",
        Bruschetta => "BRUSCHETTA",
        VeggieSticks => "VEGGIE_STICKS",
        ChickenWings => "CHICKEN_WINGS",
    }
}

slot_enum! {
    /// Values for the main-course slot
    Main, "main" {
        GrilledChicken => "GRILLED_CHICKEN",
        Pasta => "PASTA",
        VeggieStirFry => "VEGGIE_STIR_FRY",
        Fish => "FISH",
        Pizza => "PIZZA",
    }
}

slot_enum! {
    /// Values for the dessert slot
    Dessert, "dessert" {
        FruitSalad => "FRUIT_SALAD",
        IceCream => "ICE_CREAM",
        ChocolateCake => "CHOCOLATE_CAKE",
        VeganPudding => "VEGAN_PUDDING",
        Cheesecake => "CHEESECAKE",
    }
}

slot_enum! {
    /// Values for the drink slot
    Drink, "drink" {
        Water => "WATER",
        VeganShake => "VEGAN_SHAKE",
        Soda => "SODA",
        FruitJuice => "FRUIT_JUICE",
    }
}

/// One of the four construction steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Starter,
    Main,
    Dessert,
    Drink,
}

impl Step {
    /// The steps in the order a director runs a full course
    pub const FULL_COURSE: [Step; 4] = [Step::Starter, Step::Main, Step::Dessert, Step::Drink];

    /// Slot name the step writes
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Starter => "starter",
            Self::Main => "main",
            Self::Dessert => "dessert",
            Self::Drink => "drink",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Step {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "starter" => Ok(Self::Starter),
            "main" | "main-course" | "main_course" => Ok(Self::Main),
            "dessert" => Ok(Self::Dessert),
            "drink" => Ok(Self::Drink),
            _ => Err(CatalogError::UnknownStep {
                name: s.to_string(),
            }),
        }
    }
}

/// Validation applied by a builder's `build`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildPolicy {
    /// Starter and main are required
    Strict,
    /// Any combination of slots, including none
    Permissive,
}

impl BuildPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Permissive => "permissive",
        }
    }
}

impl fmt::Display for BuildPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuildPolicy {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "permissive" => Ok(Self::Permissive),
            _ => Err(CatalogError::UnknownPolicy {
                name: s.to_string(),
            }),
        }
    }
}
