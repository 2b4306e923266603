use bitsearch::engine::{Engine, EngineOptions};
use bitsearch::tools::eval::EvalKind;

use clap::Parser;
use log::{error, warn};

use std::io;
use std::process;

#[derive(Parser, Debug)]
#[command(
    name = "bitsearch",
    version,
    about = "Reads one FEN per line and prints the best move found by a fixed-depth alpha-beta search"
)]
struct Cli {
    /// Plies to search for every position.
    #[arg(short, long, env = "CHESS_DEPTH", default_value_t = 4, value_parser = clap::value_parser!(u16).range(1..))]
    depth: u16,

    /// Threads used by the parallel search. Defaults to the number of logical CPUs.
    #[arg(short, long, env = "CHESS_THREADS")]
    threads: Option<usize>,

    /// Search root moves in parallel.
    #[arg(short, long, env = "CHESS_PARALLEL")]
    parallel: bool,

    /// Do not print a prompt before each line.
    #[arg(long, env = "CHESS_NO_PROMPT")]
    no_prompt: bool,

    /// Position evaluator: "material" or "psqt".
    #[arg(short, long, env = "CHESS_EVAL", default_value_t = EvalKind::Psqt)]
    eval: EvalKind,

    /// Search this single position, print the answer, and exit.
    #[arg(long)]
    fen: Option<String>,
}

impl Cli {
    fn options(&self) -> EngineOptions {
        let defaults = EngineOptions::default();
        EngineOptions {
            depth: self.depth,
            threads: self.threads.unwrap_or(defaults.threads).max(1),
            parallel: self.parallel,
            prompt: !self.no_prompt && self.fen.is_none(),
            evaluator: self.eval,
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let options = cli.options();

    if let Err(e) = rayon::ThreadPoolBuilder::new()
        .num_threads(options.threads)
        .build_global()
    {
        warn!("could not size the thread pool: {}", e);
    }

    let engine = Engine::new(options);
    if let Some(fen) = cli.fen.as_deref() {
        println!("{}", engine.respond(fen));
        return;
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = engine.run(stdin.lock(), stdout.lock()) {
        error!("i/o failure: {}", e);
        process::exit(1);
    }
}
