//! Decorator pattern: toppings wrapping a base pizza.
//!
//! Every topping is itself a `Pizza` and owns the pizza it wraps, so toppings
//! stack in any order without a type per combination.

pub trait Pizza {
    fn cost(&self) -> u32;
    fn description(&self) -> String;
}

pub struct Margherita;

impl Pizza for Margherita {
    fn cost(&self) -> u32 {
        100
    }

    fn description(&self) -> String {
        "Margherita".to_string()
    }
}

pub struct VegDelight;

impl Pizza for VegDelight {
    fn cost(&self) -> u32 {
        120
    }

    fn description(&self) -> String {
        "Veg Delight".to_string()
    }
}

pub struct Farmhouse;

impl Pizza for Farmhouse {
    fn cost(&self) -> u32 {
        200
    }

    fn description(&self) -> String {
        "Farmhouse".to_string()
    }
}

pub struct ExtraCheese {
    base: Box<dyn Pizza>,
}

impl ExtraCheese {
    pub const PRICE: u32 = 10;

    pub fn new(base: Box<dyn Pizza>) -> Self {
        Self { base }
    }
}

impl Pizza for ExtraCheese {
    fn cost(&self) -> u32 {
        self.base.cost() + Self::PRICE
    }

    fn description(&self) -> String {
        format!("{} + Extra Cheese", self.base.description())
    }
}

pub struct Mushroom {
    base: Box<dyn Pizza>,
}

impl Mushroom {
    pub const PRICE: u32 = 15;

    pub fn new(base: Box<dyn Pizza>) -> Self {
        Self { base }
    }
}

impl Pizza for Mushroom {
    fn cost(&self) -> u32 {
        self.base.cost() + Self::PRICE
    }

    fn description(&self) -> String {
        format!("{} + Mushroom", self.base.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_prices() {
        assert_eq!(Margherita.cost(), 100);
        assert_eq!(VegDelight.cost(), 120);
        assert_eq!(Farmhouse.cost(), 200);
    }

    #[test]
    fn test_stacked_toppings() {
        let pizza = Mushroom::new(Box::new(ExtraCheese::new(Box::new(Margherita))));
        assert_eq!(pizza.cost(), 125);
        assert_eq!(pizza.description(), "Margherita + Extra Cheese + Mushroom");
    }

    #[test]
    fn test_repeated_topping() {
        let pizza = ExtraCheese::new(Box::new(ExtraCheese::new(Box::new(Farmhouse))));
        assert_eq!(pizza.cost(), 220);
    }

    #[test]
    fn test_order_does_not_change_cost() {
        let a = Mushroom::new(Box::new(ExtraCheese::new(Box::new(VegDelight))));
        let b = ExtraCheese::new(Box::new(Mushroom::new(Box::new(VegDelight))));
        assert_eq!(a.cost(), b.cost());
    }
}
