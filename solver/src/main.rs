use std::num::NonZero;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::info;

use pipeflow::builder::PuzzleBuilder;
use pipeflow::parse::read_tiles;
use pipeflow::{Color, Position, SearchEvent, SearchOptions, Tile};

#[derive(Parser)]
#[command(name = "solver", version, about = "Route liquid from a source to a load by placing inventory tiles")]
struct Cli {
    /// Inventory file to place tiles from, one copy per line; the two built-in elbows are used if omitted
    #[arg(value_name = "INVENTORY")]
    inventory: Option<PathBuf>,

    /// Print each cell with its open edges instead of a single letter
    #[arg(short, long)]
    detailed: bool,

    /// Skip orientations that clash with tiles already placed next to them
    #[arg(short, long)]
    prune: bool,

    /// Print the board after every placement and undo
    #[arg(short, long)]
    trace: bool,
}

fn demo_puzzle(inventory: Vec<Tile>) -> PuzzleBuilder {
    // 2x3 board, green source top left open east, green load bottom right open west
    let mut builder = PuzzleBuilder::with_dims((NonZero::new(2).unwrap(), NonZero::new(3).unwrap()));
    builder
        .add_source(Color::Green, Position(0, 0), "EE".parse().unwrap())
        .add_load(Color::Green, Position(1, 2), "WW".parse().unwrap());

    for tile in inventory {
        builder.add_inventory(tile, 1);
    }

    builder
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let inventory = match &cli.inventory {
        Some(path) => match read_tiles(path) {
            Ok(tiles) => tiles,
            Err(err) => {
                eprintln!("{}: {}", path.display(), err);
                return ExitCode::FAILURE;
            }
        },
        None => vec![
            Tile::pipe("WN".parse().unwrap()),
            Tile::pipe("WN".parse().unwrap()),
        ],
    };
    info!("placing from an inventory of {} tiles", inventory.len());

    let mut puzzle = match demo_puzzle(inventory).build() {
        Ok(puzzle) => puzzle,
        Err(reasons) => {
            eprintln!("invalid puzzle: {:?}", reasons);
            return ExitCode::FAILURE;
        }
    };

    println!("{}", puzzle.display(cli.detailed));

    let detailed = cli.detailed;
    let mut search = puzzle.search().with_options(SearchOptions { prune_with_adjacency: cli.prune });
    if cli.trace {
        search = search.with_observer(move |event, board, tiles| {
            if !matches!(event, SearchEvent::Solved { .. }) {
                println!("{:?}\n{}", event, board.display(tiles, detailed));
            }
        });
    }

    let solved = match search.run() {
        Ok(solved) => solved,
        Err(err) => {
            eprintln!("search failed: {}", err);
            return ExitCode::FAILURE;
        }
    };
    let attempts = search.attempts();
    drop(search);

    if solved {
        println!("Solution found!");
        println!("{}", puzzle.display(cli.detailed));
    } else {
        println!("No solution exists.");
    }
    info!("{} placements tried", attempts);

    ExitCode::SUCCESS
}
