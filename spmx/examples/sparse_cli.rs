//! Command-line demo: fill both diagonals of a square span and report the
//! resulting occupancy.

use clap::Parser;
use spmx::{render_window, Matrix2d, SparseMatrix, WindowConfig};

#[derive(Parser, Debug)]
#[command(version, about = "Sparse matrix diagonal-fill demo")]
struct Args {
    /// Side length of the filled square
    #[arg(long, default_value_t = 10)]
    span: i64,

    /// Value that reads as empty
    #[arg(long, default_value_t = 0)]
    empty: i32,

    /// Also print the dense window over the filled square
    #[arg(long)]
    window: bool,
}

fn main() -> spmx::Result<()> {
    let args = Args::parse();

    let mut matrix = Matrix2d::new(args.empty);
    for i in 0..args.span {
        matrix.set(i, i, i as i32)?;
        matrix.set(i, args.span - 1 - i, (args.span - 1 - i) as i32)?;
    }

    println!("span {span}, empty value {empty}", span = args.span, empty = args.empty);
    println!("occupied cells: {}", matrix.nnz());

    if args.window {
        print!(
            "{}",
            render_window(&matrix, &WindowConfig::new(0..args.span, 0..args.span))
        );
    }

    Ok(())
}
