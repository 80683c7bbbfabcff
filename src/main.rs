//! Trailer Loading - demo planner CLI

use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("trailer_loading=info".parse().unwrap()),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let as_json = args.iter().any(|a| a == "--json");
    let board = args
        .iter()
        .find(|a| !a.starts_with("--"))
        .map(String::as_str)
        .unwrap_or("CHICAGO");

    let Some(loads) = trailer_loading::demo_data::generate_by_name(board) else {
        eprintln!(
            "Unknown board {:?}. Available: {}",
            board,
            trailer_loading::demo_data::available_boards().join(", ")
        );
        std::process::exit(2);
    };

    let plans = trailer_loading::planner::build_suggested_plans(&loads, None);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&plans).unwrap());
        return;
    }

    trailer_loading::console::print_banner();
    trailer_loading::console::print_board(board, &loads);
    trailer_loading::console::print_plans(&plans);
}
