// Abstract Factory demo: a furniture store that switches product families.

use colored::Colorize;

use design_patterns::abstract_factory::{Chair, FurnitureFactory, FurnitureFamily, Piece, Sofa};
use design_patterns::config::DemoConfig;
use design_patterns::{logging, PatternError};

fn describe<P: Piece + ?Sized>(label: &str, product: &P) {
    println!("[{}] Describing {}", label, product.name().bold());
    println!("[{}] launched in {}", label, product.launch_year());
    println!("[{}] has legs? {}", label, product.has_legs());
    println!("[{}] number of legs: {}", label, product.number_of_legs());
    println!("[{}] let's sit down:", label);
    println!("  {}", product.sit_down());
}

fn describe_chair(chair: &dyn Chair) {
    describe("chair", chair);
}

fn describe_sofa(sofa: &dyn Sofa) {
    describe("sofa", sofa);
}

// Client code only sees the abstract factory and the product traits.
fn showroom(factory: &dyn FurnitureFactory) {
    let sofa = factory.make_sofa();
    let chair = factory.make_chair();

    describe_sofa(sofa.as_ref());
    describe_chair(chair.as_ref());
}

fn main() -> Result<(), PatternError> {
    logging::init();
    let config = DemoConfig::embedded()?;

    println!("{}", "Abstract Factory: Furniture Store".bold());
    println!("==================================\n");

    for family in &config.furniture_store.families {
        println!("{}", format!("=== {} products ===", family).green());
        showroom(family.factory());
        println!();
    }

    println!("{}", "=== Unknown family ===".green());
    let requested = "baroque";
    match requested.parse::<FurnitureFamily>() {
        Ok(family) => showroom(family.factory()),
        Err(err) => println!("{} {}", "rejected:".red(), err),
    }

    Ok(())
}
