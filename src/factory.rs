//! Factory and Abstract Factory patterns.
//!
//! Unknown keys are reported as [`FactoryError`] variants rather than an
//! absent value.

use std::str::FromStr;

use crate::error::FactoryError;

// ============================================================================
// Factory: shapes by key
// ============================================================================

pub trait Shape {
    fn draw(&self) -> &str;
}

pub struct Circle;

impl Shape for Circle {
    fn draw(&self) -> &str {
        "Circle"
    }
}

pub struct Rectangle;

impl Shape for Rectangle {
    fn draw(&self) -> &str {
        "Rectangle"
    }
}

pub struct Square;

impl Shape for Square {
    fn draw(&self) -> &str {
        "Square"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Circle,
    Rectangle,
    Square,
}

impl FromStr for ShapeKind {
    type Err = FactoryError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        match key {
            "circle" => Ok(ShapeKind::Circle),
            "rectangle" => Ok(ShapeKind::Rectangle),
            "square" => Ok(ShapeKind::Square),
            other => Err(FactoryError::UnknownShape(other.to_string())),
        }
    }
}

impl ShapeKind {
    pub fn draw(self) -> &'static str {
        match self {
            ShapeKind::Circle => "Circle",
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Square => "Square",
        }
    }
}

pub struct ShapeFactory;

impl ShapeFactory {
    pub fn create(key: &str) -> Result<Box<dyn Shape>, FactoryError> {
        let shape: Box<dyn Shape> = match key.parse::<ShapeKind>()? {
            ShapeKind::Circle => Box::new(Circle),
            ShapeKind::Rectangle => Box::new(Rectangle),
            ShapeKind::Square => Box::new(Square),
        };
        Ok(shape)
    }
}

// ============================================================================
// Abstract Factory: cars by segment, then by price
// ============================================================================

pub trait Car {
    fn model(&self) -> &str;
    fn top_speed(&self) -> u32;
}

pub struct EconomicCar1;

impl Car for EconomicCar1 {
    fn model(&self) -> &str {
        "EconomicCar1"
    }

    fn top_speed(&self) -> u32 {
        100
    }
}

pub struct EconomicCar2;

impl Car for EconomicCar2 {
    fn model(&self) -> &str {
        "EconomicCar2"
    }

    fn top_speed(&self) -> u32 {
        150
    }
}

pub struct LuxuryCar1;

impl Car for LuxuryCar1 {
    fn model(&self) -> &str {
        "LuxuryCar1"
    }

    fn top_speed(&self) -> u32 {
        250
    }
}

pub struct LuxuryCar2;

impl Car for LuxuryCar2 {
    fn model(&self) -> &str {
        "LuxuryCar2"
    }

    fn top_speed(&self) -> u32 {
        300
    }
}

pub trait CarFactory {
    fn segment(&self) -> &str;
    fn create(&self, price: u64) -> Result<Box<dyn Car>, FactoryError>;
}

pub struct EconomicCarFactory;

impl EconomicCarFactory {
    pub const ENTRY_PRICE_LIMIT: u64 = 300_000;
}

impl CarFactory for EconomicCarFactory {
    fn segment(&self) -> &str {
        "Economic"
    }

    fn create(&self, price: u64) -> Result<Box<dyn Car>, FactoryError> {
        if price <= Self::ENTRY_PRICE_LIMIT {
            Ok(Box::new(EconomicCar1))
        } else {
            Ok(Box::new(EconomicCar2))
        }
    }
}

pub struct LuxuryCarFactory;

impl LuxuryCarFactory {
    pub const MIN_PRICE: u64 = 1_000_000;
    pub const TOP_TIER_PRICE: u64 = 2_000_000;
}

impl CarFactory for LuxuryCarFactory {
    fn segment(&self) -> &str {
        "Luxury"
    }

    fn create(&self, price: u64) -> Result<Box<dyn Car>, FactoryError> {
        match price {
            p if p > Self::TOP_TIER_PRICE => Ok(Box::new(LuxuryCar2)),
            p if p >= Self::MIN_PRICE => Ok(Box::new(LuxuryCar1)),
            _ => Err(FactoryError::NoModelForPrice {
                segment: self.segment().to_string(),
                price,
            }),
        }
    }
}

/// Factory of factories.
pub struct CarFactoryProducer;

impl CarFactoryProducer {
    pub fn factory(segment: &str) -> Result<Box<dyn CarFactory>, FactoryError> {
        match segment {
            "Economic" => Ok(Box::new(EconomicCarFactory)),
            "Luxury" | "Premium" => Ok(Box::new(LuxuryCarFactory)),
            other => Err(FactoryError::UnknownSegment(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_factory() {
        assert_eq!(ShapeFactory::create("circle").unwrap().draw(), "Circle");
        assert_eq!(ShapeFactory::create("rectangle").unwrap().draw(), "Rectangle");
        assert_eq!(ShapeFactory::create("square").unwrap().draw(), "Square");
    }

    #[test]
    fn test_unknown_shape() {
        let result = ShapeFactory::create("triangle");
        assert!(matches!(result, Err(FactoryError::UnknownShape(key)) if key == "triangle"));
    }

    #[test]
    fn test_shape_keys_are_case_sensitive() {
        assert!("Circle".parse::<ShapeKind>().is_err());
    }

    #[test]
    fn test_shape_kind_draw() {
        let kind: ShapeKind = "square".parse().unwrap();
        assert_eq!(kind, ShapeKind::Square);
        assert_eq!(kind.draw(), "Square");
    }

    #[test]
    fn test_economic_price_boundary() {
        let factory = EconomicCarFactory;
        assert_eq!(factory.create(300_000).unwrap().top_speed(), 100);
        assert_eq!(factory.create(300_001).unwrap().top_speed(), 150);
        assert_eq!(factory.create(0).unwrap().top_speed(), 100);
    }

    #[test]
    fn test_luxury_price_bands() {
        let factory = LuxuryCarFactory;
        assert_eq!(factory.create(1_000_000).unwrap().top_speed(), 250);
        assert_eq!(factory.create(2_000_000).unwrap().top_speed(), 250);
        assert_eq!(factory.create(2_000_001).unwrap().top_speed(), 300);
    }

    #[test]
    fn test_luxury_below_range() {
        let result = LuxuryCarFactory.create(999_999);
        assert!(matches!(
            result,
            Err(FactoryError::NoModelForPrice { price: 999_999, .. })
        ));
    }

    #[test]
    fn test_producer_segments() {
        let car = CarFactoryProducer::factory("Economic")
            .unwrap()
            .create(500_000)
            .unwrap();
        assert_eq!(car.top_speed(), 150);
        assert_eq!(car.model(), "EconomicCar2");

        let premium = CarFactoryProducer::factory("Premium").unwrap();
        assert_eq!(premium.segment(), "Luxury");
    }

    #[test]
    fn test_unknown_segment() {
        let result = CarFactoryProducer::factory("Budget");
        assert!(matches!(result, Err(FactoryError::UnknownSegment(s)) if s == "Budget"));
    }
}
