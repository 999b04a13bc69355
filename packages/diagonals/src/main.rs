#[macro_use]
extern crate tracing;

use sparse_data::SparseMatrix;
use std::env::{
    self,
    args,
};
use tracing_subscriber::{
    fmt::{
        self,
        time::uptime,
    },
    prelude::*,
    Registry,
    EnvFilter,
};


const CLI_HELP: &'static str = r#"
Fills a sparse matrix with the two main diagonals of an N x N block, then
prints its inner sub-block, its occupied-cell count, and every occupied
cell as "row col value".

Examples:

    [this command]
    Run with the standard 10 x 10 pattern over a matrix of default value 0.

    [this command] --size=14 --default=9
    Run a 14 x 14 pattern over a matrix of default value 9.

Env var examples:
    RUST_LOG=diagonals=trace
    Changes logging levels"#;

/// Default logging environment filter. Logs go to stderr so the printed
/// pattern on stdout stays clean.
const DEFAULT_FILTER: &'static str = "warn,diagonals=info";

fn main() {
    init_logging();

    let args = args().collect::<Vec<_>>();
    if args.get(1).map(String::as_str) == Some("--help") {
        println!("{}", CLI_HELP);
        return;
    }
    let size = args.iter()
        .filter_map(|arg| arg.strip_prefix("--size="))
        .next()
        .map(|raw| raw.parse::<i64>().expect("--size must be an integer"))
        .unwrap_or(10);
    let default = args.iter()
        .filter_map(|arg| arg.strip_prefix("--default="))
        .next()
        .map(|raw| raw.parse::<i64>().expect("--default must be an integer"))
        .unwrap_or(0);
    assert!(size >= 2, "--size must be at least 2");

    info!(size, default, "filling diagonals");
    let mut matrix = SparseMatrix::new(default);
    fill_diagonals(&mut matrix, size);
    info!(cells = matrix.len(), rows = matrix.nrows(), "matrix filled");

    print!("{}", render_block(&matrix, 1, size - 2));
    println!("{}", matrix.len());
    for (pos, val) in &matrix {
        println!("{} {} {}", pos.x, pos.y, val);
    }
}

// install a tracing backend printing to stderr, RUST_LOG-filterable
fn init_logging() {
    let format = fmt::format()
        .compact()
        .with_timer(uptime())
        .with_line_number(true);
    let stderr_log = fmt::layer()
        .event_format(format)
        .with_writer(std::io::stderr);

    let mut filter = DEFAULT_FILTER.to_owned();
    if let Ok(env_filter) = env::var(EnvFilter::DEFAULT_ENV) {
        filter.push(',');
        filter.push_str(&env_filter);
    }

    let subscriber = Registry::default()
        .with(EnvFilter::new(filter))
        .with(stderr_log);
    tracing::subscriber::set_global_default(subscriber)
        .expect("unable to install log subscriber");
}

/// Write the two main diagonals of the `size` x `size` block at the origin:
/// `i` at `[i, i]`, and mirrored, `size - 1 - i` at `[i, size - 1 - i]`.
fn fill_diagonals(matrix: &mut SparseMatrix<i64>, size: i64) {
    for i in 0..size {
        matrix.set([i, i], i);
        matrix.set([i, size - 1 - i], size - 1 - i);
    }
}

/// Render the square sub-block from `[lo, lo]` to `[hi, hi]` inclusive,
/// columns space-separated, one row per line.
fn render_block(matrix: &SparseMatrix<i64>, lo: i64, hi: i64) -> String {
    let mut out = String::new();
    for i in lo..=hi {
        for j in lo..=hi {
            if j > lo {
                out.push(' ');
            }
            out.push_str(&matrix[[i, j]].to_string());
        }
        out.push('\n');
    }
    out
}


#[test]
fn test_fill_diagonals_occupancy() {
    // the two corner writes of value 0 are default writes and store
    // nothing, so 20 writes come out to 18 occupied cells across 10 rows
    let mut matrix = SparseMatrix::new(0);
    fill_diagonals(&mut matrix, 10);
    assert_eq!(matrix.len(), 18);
    assert_eq!(matrix.nrows(), 10);
}

#[test]
fn test_render_block() {
    let mut matrix = SparseMatrix::new(0);
    fill_diagonals(&mut matrix, 10);
    assert_eq!(
        render_block(&matrix, 1, 8),
        "1 0 0 0 0 0 0 8\n\
         0 2 0 0 0 0 7 0\n\
         0 0 3 0 0 6 0 0\n\
         0 0 0 4 5 0 0 0\n\
         0 0 0 4 5 0 0 0\n\
         0 0 3 0 0 6 0 0\n\
         0 2 0 0 0 0 7 0\n\
         1 0 0 0 0 0 0 8\n",
    );
}

#[test]
fn test_render_block_nonzero_default() {
    // the default value shows through every unoccupied cell
    let mut matrix = SparseMatrix::new(9);
    fill_diagonals(&mut matrix, 10);
    assert!(render_block(&matrix, 1, 8).starts_with("1 9 9 9 9 9 9 8\n"));
}
