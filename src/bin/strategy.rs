// Strategy demo: one Navigator, three interchangeable routers.

use colored::Colorize;

use design_patterns::config::DemoConfig;
use design_patterns::strategy::{Navigator, Route};
use design_patterns::{logging, PatternError};

fn display_route(route: &Route) {
    for milestone in route.milestones() {
        println!("- {}", milestone);
    }
}

fn main() -> Result<(), PatternError> {
    logging::init();
    let config = DemoConfig::embedded()?;

    println!("{}", "Strategy: Navigator".bold());
    println!("===================\n");

    let trips = &config.navigator.trips;
    let Some(first) = trips.first() else {
        return Ok(());
    };

    let mut navigator = Navigator::new(first.router.into_router());
    let mut routes = Vec::with_capacity(trips.len());

    for (index, trip) in trips.iter().enumerate() {
        if index > 0 {
            navigator.set_router(trip.router.into_router());
        }
        println!(
            "{}",
            format!(
                "=== {} from {} to {} ===",
                navigator.router_name(),
                trip.origin,
                trip.destination
            )
            .green()
        );
        let route = navigator.build_route(&trip.origin, &trip.destination);
        display_route(&route);
        println!();
        routes.push(route);
    }

    println!("{}", "=== Summary ===".green());
    for route in &routes {
        println!("{} stops: {}", route.len(), route);
    }

    Ok(())
}
