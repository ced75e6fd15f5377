// Pattern 1: Strategy - drive and display behaviors injected into vehicles.
//
// Run with: cargo run --bin p1_strategy

use colored::Colorize;
use design_patterns::logging;
use design_patterns::strategy::{FnDrive, NormalDisplay, SportsDrive, Vehicle};

fn print_vehicle(vehicle: &Vehicle) {
    println!("{}:", vehicle.name());
    println!("  drive: {}", vehicle.drive());
    println!("  display: {}", vehicle.display());
}

fn main() {
    logging::init();

    println!("{}", "Pattern 1: Strategy".bold());
    println!("===================\n");

    println!("{}", "=== Preset Vehicles ===".cyan());
    for vehicle in [Vehicle::passenger(), Vehicle::sports(), Vehicle::off_road()] {
        print_vehicle(&vehicle);
    }
    println!();

    println!("{}", "=== Switching Strategy at Runtime ===".cyan());
    let mut vehicle = Vehicle::passenger();
    vehicle.set_drive_strategy(Box::new(SportsDrive));
    print_vehicle(&vehicle);
    println!();

    println!("{}", "=== Closure Strategy ===".cyan());
    let hybrid = Vehicle::new(
        "Hybrid",
        Box::new(FnDrive::new(|| "Eco Drive Strategy")),
        Box::new(NormalDisplay),
    );
    print_vehicle(&hybrid);
}
