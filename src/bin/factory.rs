// Factory demo: a car store that builds cars from a model key.

use colored::Colorize;

use design_patterns::config::DemoConfig;
use design_patterns::factory::{get_car, try_get_car, Car};
use design_patterns::{logging, PatternError};

fn print_car(car: &dyn Car) {
    println!("Name: {} - Plate: {}", car.name().bold(), car.plate());
}

fn main() -> Result<(), PatternError> {
    logging::init();
    let config = DemoConfig::embedded()?;

    println!("{}", "Factory: Car Store".bold());
    println!("==================\n");

    println!("[CarStore] Hi!! Let's build you a nice car!! Please, choose a type:");
    for (index, model) in config.car_store.models.iter().enumerate() {
        println!("[CarStore] {} - {}", index + 1, model);
    }
    println!();

    let mut garage: Vec<Box<dyn Car>> = Vec::new();
    for model in &config.car_store.models {
        garage.push(try_get_car(model.as_str())?);
    }

    println!("{}", "=== The following cars were created ===".green());
    for car in &garage {
        print_car(car.as_ref());
    }
    println!();

    println!("{}", "=== Personalised plate ===".green());
    if let Some(car) = garage.first_mut() {
        car.set_plate("RUST-01");
        print_car(car.as_ref());
    }
    println!();

    println!("{}", "=== Unknown model ===".green());
    match get_car("suv") {
        Some(car) => print_car(car.as_ref()),
        None => println!("{} no car for model 'suv'", "absent:".red()),
    }

    Ok(())
}
