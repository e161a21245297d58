use delivery_coverage::api::CoverageService;
use tracing::info;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .init();

    let service = CoverageService::new();

    info!("=== Coverage Catalog Summary ===");

    let stats = service.stats();
    info!("Places: {}", stats.total_places);
    info!("Scheduled stops: {}", stats.scheduled_stops);
    info!("Serviced on multiple days: {}", stats.multi_day_places);

    for option in service.day_options() {
        info!("{}: {} locations ({})", option.label, option.count, option.color);
    }
}
