//! Ricochet Routes entry point
//!
//! On the web everything runs through the library's `WebSession`. Natively
//! this replays a route on a practice board and prints the traces:
//!
//! ```text
//! ricochet-routes [seed] [route]
//! ricochet-routes 42 "0R 0D 2U"
//! ```

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use ricochet_routes::consts::DEFAULT_MAP_SIZE;
    use ricochet_routes::practice::practice_game;
    use ricochet_routes::sim::{Route, check_success, piece_summaries, route_display, simulate};
    use ricochet_routes::{piece_name, piece_symbol};

    env_logger::init();
    log::info!("Ricochet Routes (native) starting...");

    let mut args = std::env::args().skip(1);
    let seed = match args.next().map(|s| s.parse::<u64>()) {
        Some(Ok(seed)) => seed,
        Some(Err(e)) => {
            eprintln!("invalid seed: {e}");
            std::process::exit(2);
        }
        None => 1,
    };
    let route = match args.next().map(|s| s.parse::<Route>()) {
        Some(Ok(route)) => route,
        Some(Err(e)) => {
            eprintln!("invalid route: {e}");
            std::process::exit(2);
        }
        None => Route::new(),
    };

    let game = match practice_game(seed, DEFAULT_MAP_SIZE) {
        Ok(game) => game,
        Err(e) => {
            eprintln!("cannot build practice board: {e}");
            std::process::exit(1);
        }
    };
    let pieces = &game.pieces;

    println!("Practice board {seed}");
    println!(
        "Target: {} {} to cell {}",
        piece_symbol(pieces.target_piece),
        piece_name(pieces.target_piece),
        pieces.target_cell
    );
    println!("Route: {}", route_display(&route));

    let result = simulate(&game.board, &pieces.positions, &route);
    for trace in &result.traces {
        if trace.is_stationary() {
            println!(
                "  {}{} blocked at {}",
                piece_symbol(trace.piece),
                trace.direction.symbol(),
                trace.start
            );
            continue;
        }
        println!(
            "  {}{} {} -> {} via {:?}",
            piece_symbol(trace.piece),
            trace.direction.symbol(),
            trace.start,
            trace.end,
            trace.visited
        );
    }
    for summary in piece_summaries(&pieces.positions, &result) {
        println!(
            "{} {}: {} -> {} ({} moves)",
            piece_symbol(summary.piece),
            piece_name(summary.piece),
            summary.start,
            summary.end,
            summary.moves
        );
    }

    match check_success(Some(&game), &route) {
        Some(success) => println!("Solved in {} moves", success.moves),
        None => println!("Target not reached"),
    }
    println!("Ledger payload: {:?}", route.to_bytes());
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is `web::start`, this is just to satisfy the compiler
}
