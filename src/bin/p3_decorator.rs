// Pattern 3: Decorator - pizza toppings stacked over a base pizza.
//
// Run with: cargo run --bin p3_decorator

use colored::Colorize;
use design_patterns::decorator::{ExtraCheese, Farmhouse, Margherita, Mushroom, Pizza, VegDelight};
use design_patterns::logging;

fn main() {
    logging::init();

    println!("{}", "Pattern 3: Decorator".bold());
    println!("====================\n");

    let orders: Vec<Box<dyn Pizza>> = vec![
        Box::new(Mushroom::new(Box::new(ExtraCheese::new(Box::new(Margherita))))),
        Box::new(ExtraCheese::new(Box::new(VegDelight))),
        Box::new(Mushroom::new(Box::new(Mushroom::new(Box::new(Farmhouse))))),
    ];

    for pizza in &orders {
        println!("{}: {}", pizza.description(), pizza.cost().to_string().green());
    }
}
