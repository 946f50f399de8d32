//! Timing for the three grid engines

use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gridkit::domain::{
    BoardSearch, Cell, CubeSet, Grid, LifeStepper, MazeBuilder, MergeStrategy, NullObserver, RandomSource,
    WordList,
};

/// Milliseconds per call, averaged over `iterations`
fn time_ms(iterations: u32, mut f: impl FnMut()) -> f64 {
    let start = Instant::now();
    for _ in 0..iterations {
        f();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn random_board(size: usize, rng: &mut StdRng) -> Grid<Cell> {
    let mut board = Grid::new(size, size);
    for at in board.coords() {
        if rng.uniform_int(0, 3) == 0 {
            board[at] = Cell::NEWBORN;
        }
    }
    board
}

fn benchmark_life(size: usize, iterations: u32) -> f64 {
    let mut rng = StdRng::seed_from_u64(7);
    let stepper = LifeStepper::default();
    let mut board = random_board(size, &mut rng);

    time_ms(iterations, || {
        stepper.step_in_place(&mut board);
    })
}

fn benchmark_maze(size: usize, strategy: MergeStrategy, iterations: u32) -> f64 {
    let mut rng = StdRng::seed_from_u64(7);
    let builder = MazeBuilder::new(strategy);

    time_ms(iterations, || {
        if let Err(err) = builder.generate(size, size, &mut rng, &mut NullObserver) {
            eprintln!("maze build failed: {}", err);
        }
    })
}

fn benchmark_search(dictionary: &WordList, big: bool, iterations: u32) -> (f64, usize) {
    let mut rng = StdRng::seed_from_u64(7);
    let boards: Vec<Grid<char>> = (0..iterations).map(|_| CubeSet::for_board(big).roll(&mut rng)).collect();
    let mut found = 0;

    let ms = time_ms(1, || {
        found = boards
            .iter()
            .map(|board| BoardSearch::new(board, 4).find_all_words(dictionary).len())
            .sum();
    }) / iterations as f64;

    (ms, found / iterations as usize)
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gridkit=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Life generation ===\n");
    println!("{:>10} {:>12}", "Size", "ms/gen");
    println!("{:-<24}", "");
    for size in [50, 100, 200, 500] {
        println!("{:>10} {:>12.3}", format!("{}x{}", size, size), benchmark_life(size, 20));
    }

    println!("\n=== Maze build ===\n");
    println!("{:>10} {:>12} {:>12}", "Size", "Sets", "UnionFind");
    println!("{:-<36}", "");
    for size in [7, 15, 30, 50, 100] {
        println!(
            "{:>10} {:>12.3} {:>12.3}",
            format!("{}x{}", size, size),
            benchmark_maze(size, MergeStrategy::ComponentSets, 10),
            benchmark_maze(size, MergeStrategy::DisjointSet, 10)
        );
    }

    println!("\n=== Exhaustive word search ===\n");
    let path = std::env::args().nth(1).unwrap_or_else(|| "data/words.txt".to_string());
    let dictionary = match WordList::load(&path) {
        Ok(list) => list,
        Err(err) => {
            eprintln!("could not load {}: {}", path, err);
            return;
        }
    };
    println!("Dictionary: {} words from {}\n", dictionary.len(), path);
    println!("{:>10} {:>12} {:>12}", "Board", "ms/board", "words/board");
    println!("{:-<36}", "");
    for (big, label) in [(false, "4x4"), (true, "5x5")] {
        let (ms, words) = benchmark_search(&dictionary, big, 200);
        println!("{:>10} {:>12.3} {:>12}", label, ms, words);
    }
}
