use anyhow::Result;
use clap::Parser;
use princesses::board::BOARD_SIZE;
use princesses::solver::{search_parallel, write_report, Searcher};
use std::io::{self, Write};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(author, version, about = "Find the maximum number of non-attacking princesses on a chessboard", long_about = None)]
struct Args {
    /// Also print one optimal placement after the count
    #[arg(long)]
    solution: bool,

    /// Split the root decision across two worker threads
    #[arg(long)]
    parallel: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    let result = if args.parallel {
        search_parallel::<BOARD_SIZE>(args.solution)
    } else {
        Searcher::<BOARD_SIZE>::new(args.solution).search()
    };
    log::info!("visited {} nodes in {:.2?}", result.nodes, start.elapsed());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, &result)?;
    out.flush()?;

    Ok(())
}
