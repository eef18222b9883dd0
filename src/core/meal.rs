//! The meal product
//!
//! A [`Meal`] is a handle to four optional slots. Cloning the handle shares
//! the slots: a builder keeps its handle after `build`, so steps invoked
//! after `build` still change the meal the caller already received.
//!
//! The handle is reference counted without atomics, which makes it (and
//! every builder holding one) `!Send` and `!Sync`. One builder instance
//! serves exactly one construction session on one thread.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use serde::{Serialize, Serializer};

use crate::core::catalog::{Dessert, Drink, Main, Starter};

/// Slot values of a meal at one point in time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct MealSnapshot {
    pub starter: Option<Starter>,
    pub main: Option<Main>,
    pub dessert: Option<Dessert>,
    pub drink: Option<Drink>,
}

impl MealSnapshot {
    /// True when no slot is set
    pub fn is_empty(&self) -> bool {
        self.starter.is_none()
            && self.main.is_none()
            && self.dessert.is_none()
            && self.drink.is_none()
    }
}

impl fmt::Display for MealSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn slot(value: Option<impl fmt::Display>) -> String {
            value.map_or_else(|| "None".to_string(), |v| v.to_string())
        }

        writeln!(f, "Starter: {}", slot(self.starter))?;
        writeln!(f, "Main: {}", slot(self.main))?;
        writeln!(f, "Dessert: {}", slot(self.dessert))?;
        write!(f, "Drink: {}", slot(self.drink))
    }
}

/// A meal under construction or already built
#[derive(Clone, Default)]
pub struct Meal {
    slots: Rc<RefCell<MealSnapshot>>,
}

impl Meal {
    /// Create an empty meal
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starter(&self) -> Option<Starter> {
        self.slots.borrow().starter
    }

    pub fn main(&self) -> Option<Main> {
        self.slots.borrow().main
    }

    pub fn dessert(&self) -> Option<Dessert> {
        self.slots.borrow().dessert
    }

    pub fn drink(&self) -> Option<Drink> {
        self.slots.borrow().drink
    }

    /// Overwrite the starter slot
    pub fn set_starter(&self, starter: Starter) {
        self.slots.borrow_mut().starter = Some(starter);
    }

    /// Overwrite the main-course slot
    pub fn set_main(&self, main: Main) {
        self.slots.borrow_mut().main = Some(main);
    }

    /// Overwrite the dessert slot
    pub fn set_dessert(&self, dessert: Dessert) {
        self.slots.borrow_mut().dessert = Some(dessert);
    }

    /// Overwrite the drink slot
    pub fn set_drink(&self, drink: Drink) {
        self.slots.borrow_mut().drink = Some(drink);
    }

    /// Copy out the current slot values
    pub fn snapshot(&self) -> MealSnapshot {
        *self.slots.borrow()
    }

    /// True when no slot is set
    pub fn is_empty(&self) -> bool {
        self.slots.borrow().is_empty()
    }

    /// True when both handles point at the same meal
    pub fn same_meal(&self, other: &Meal) -> bool {
        Rc::ptr_eq(&self.slots, &other.slots)
    }
}

impl PartialEq for Meal {
    fn eq(&self, other: &Self) -> bool {
        self.snapshot() == other.snapshot()
    }
}

impl Eq for Meal {}

impl fmt::Debug for Meal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let snapshot = self.snapshot();
        f.debug_struct("Meal")
            .field("starter", &snapshot.starter)
            .field("main", &snapshot.main)
            .field("dessert", &snapshot.dessert)
            .field("drink", &snapshot.drink)
            .finish()
    }
}

impl fmt::Display for Meal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.snapshot(), f)
    }
}

impl Serialize for Meal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.snapshot().serialize(serializer)
    }
}
