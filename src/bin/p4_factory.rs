// Pattern 4: Factory and Abstract Factory - shapes by key, cars by segment and price.
//
// Run with: cargo run --bin p4_factory

use colored::Colorize;
use design_patterns::factory::{CarFactoryProducer, ShapeFactory};
use design_patterns::logging;

fn main() -> anyhow::Result<()> {
    logging::init();

    println!("{}", "Pattern 4: Factory and Abstract Factory".bold());
    println!("=======================================\n");

    println!("{}", "=== Shape Factory ===".cyan());
    let shape = ShapeFactory::create("circle")?;
    println!("{}", shape.draw());

    match ShapeFactory::create("hexagon") {
        Ok(shape) => println!("{}", shape.draw()),
        Err(err) => println!("{} {}", "lookup failed:".red(), err),
    }
    println!();

    println!("{}", "=== Abstract Car Factory ===".cyan());
    let factory = CarFactoryProducer::factory("Economic")?;
    let car = factory.create(500_000)?;
    println!("{} at 500000: {} ({})", factory.segment(), car.top_speed(), car.model());

    let premium = CarFactoryProducer::factory("Premium")?;
    for price in [1_500_000, 2_500_000, 500_000] {
        match premium.create(price) {
            Ok(car) => println!("{} at {}: {} ({})", premium.segment(), price, car.top_speed(), car.model()),
            Err(err) => println!("{} {}", "lookup failed:".red(), err),
        }
    }

    Ok(())
}
