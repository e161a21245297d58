//! Coverage Catalog Demo
//! Run: ./target/release/demo_coverage

use delivery_coverage::coverage;
use delivery_coverage::models::ServiceDay;
use delivery_coverage::schedule;

fn main() {
    println!("\n{}", "=".repeat(60));
    println!("         CAPE TOWN DELIVERY COVERAGE BY DAY");
    println!("{}\n", "=".repeat(60));

    // Entity counts
    let places = coverage::all_places();
    let scheduled_stops: usize = ServiceDay::ALL
        .iter()
        .map(|&day| schedule::schedule_for(day).len())
        .sum();
    let multi_day = places.iter().filter(|p| p.days.len() > 1).count();

    println!("ENTITY COUNTS");
    println!("{}", "-".repeat(40));
    println!("  Places:          {:>6}", places.len());
    println!("  Scheduled stops: {:>6}", scheduled_stops);
    println!("  Multi-day:       {:>6}", multi_day);
    println!("  Distinct (All):  {:>6}", coverage::count_for_day("All"));

    // Day-of-week coverage
    println!("\nCOVERAGE BY DAY");
    println!("{}", "-".repeat(40));
    for day in ServiceDay::ALL {
        let count = coverage::count_for_day(day.name());
        let bar: String = "#".repeat(count / 2);
        println!("  {:10} {:>3}  {}", day, count, bar);
    }

    // Dataset integrity: scheduled names without coordinates are
    // counted on the selector but never plotted
    let unmapped: Vec<(&str, ServiceDay)> = ServiceDay::ALL
        .iter()
        .flat_map(|&day| {
            schedule::schedule_for(day)
                .iter()
                .filter(|name| schedule::coordinates_for(name).is_none())
                .map(move |&name| (name, day))
        })
        .collect();

    println!("\nDATASET INTEGRITY");
    println!("{}", "-".repeat(40));
    if unmapped.is_empty() {
        println!("  All scheduled names have coordinates");
    } else {
        println!("  {} scheduled names missing coordinates:", unmapped.len());
        for (name, day) in &unmapped {
            println!("    {:10} {}", day, name);
        }
    }

    // Full schedule listing
    println!("\nSCHEDULE");
    println!("{}", "-".repeat(60));
    for day in ServiceDay::ALL {
        let names = schedule::schedule_for(day);
        println!(
            "\n  {} ({} locations, {})",
            day,
            names.len(),
            schedule::color_for_day(day)
        );
        for chunk in names.chunks(4) {
            println!("    {}", chunk.join(", "));
        }
    }

    println!("\n{}", "=".repeat(60));
    println!();
}
