use anyhow::Context;
use repmap::{
    core::config::{AnimationConfig, API_URL_ENV},
    views::dashboard::DashboardEvent,
    Dashboard, DashboardConfig, HttpSalesApi, ListView, SalesApi,
};
use std::sync::Arc;

/// Loads the roster once, prints the map and list, then flies to the first
/// region and back.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    repmap::init_logging();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config {}", path))?;
            DashboardConfig::from_json_str(&json)?
        }
        None => DashboardConfig::default(),
    }
    .with_env_overrides();
    log::info!("using API at {} (override with {})", config.api_base_url, API_URL_ENV);

    let api: Arc<dyn SalesApi> = Arc::new(HttpSalesApi::new(&config)?);
    let mut dashboard = Dashboard::new(config);

    dashboard.roster_task(api).await;
    dashboard.process_pending(instant::Instant::now());

    if let Some(banner) = dashboard.error_banner() {
        println!("{}", banner);
        return Ok(());
    }

    println!("Markers:");
    for marker in dashboard.markers() {
        println!(
            "  {:<14} ({:>6.1}, {:>5.1})  {} rep(s)",
            marker.label(),
            marker.coordinate.lng(),
            marker.coordinate.lat(),
            marker.rep_count
        );
    }
    print_list(&dashboard);

    let board = dashboard.deal_board();
    for (status, value) in board.status_totals().entries() {
        println!("{:<12} {:>12.2}", status, value);
    }
    println!("{:<12} {:>12.2}", "Total", board.grand_total());

    let Some(region) = dashboard.region_options().first().map(|r| r.to_string()) else {
        println!("No sales reps found.");
        return Ok(());
    };

    let animation = dashboard.config().animation.clone();
    dashboard.push(DashboardEvent::SelectRegion(Some(region)));
    dashboard.process_pending(instant::Instant::now());
    animate(&mut dashboard, &animation).await;
    print_list(&dashboard);

    dashboard.push(DashboardEvent::Reset);
    dashboard.process_pending(instant::Instant::now());
    animate(&mut dashboard, &animation).await;

    Ok(())
}

/// Ticks until the transition settles, at most one frame budget long
async fn animate(dashboard: &mut Dashboard, animation: &AnimationConfig) {
    let budget = animation.frames_per_transition();
    let mut frames = 0;
    while dashboard.is_animating() && frames < budget {
        tokio::time::sleep(animation.frame_interval()).await;
        dashboard.tick(instant::Instant::now());
        frames += 1;
    }
    if dashboard.is_animating() {
        log::warn!("transition still running after {} frame(s), forcing the last frame", frames);
        dashboard.tick(instant::Instant::now() + animation.duration());
    }
    let viewport = dashboard.viewport();
    log::info!(
        "viewport settled at ({:.1}, {:.1}) zoom {} after {} frame(s)",
        viewport.center.lng(),
        viewport.center.lat(),
        viewport.zoom(),
        frames
    );
}

fn print_list(dashboard: &Dashboard) {
    match dashboard.list_view() {
        ListView::Grouped(groups) => {
            for group in groups {
                println!("{}", group.region);
                for rep in group.reps {
                    println!("  {} - {}", rep.name, rep.role);
                }
            }
        }
        ListView::Carousel(carousel) => {
            let rep = carousel.current();
            println!(
                "{} [{}/{}]: {} - {}",
                carousel.region(),
                carousel.index() + 1,
                carousel.len(),
                rep.name,
                rep.role
            );
        }
        ListView::Empty { region } => match region {
            Some(region) => println!("No sales reps found in {}.", region),
            None => println!("No sales reps found."),
        },
    }
}
