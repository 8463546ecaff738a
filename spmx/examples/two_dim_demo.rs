//! Walkthrough of the fixed-rank 2-D engine: diagonal fills, a dense
//! window over the sparse plane, the occupied-cell listing and chained
//! assignment.

use spmx::{render_occupied, render_window, Matrix2d, SparseMatrix, WindowConfig};

fn main() -> spmx::Result<()> {
    let mut matrix: Matrix2d<i32> = Matrix2d::new(0);

    // main diagonal [0,0]..[9,9] gets 0..9
    for i in 0..10 {
        matrix.set(i, i, i as i32)?;
    }
    // secondary diagonal [0,9]..[9,0] gets 9..0
    for i in 0..10 {
        matrix.set(i, 9 - i, (9 - i) as i32)?;
    }

    // dense view of the fragment [1,1]..[8,8]
    print!(
        "{}",
        render_window(&matrix, &WindowConfig::new(1..9, 1..9))
    );

    println!("size = {}", matrix.nnz());

    // every occupied cell with its position
    print!("{}", render_occupied(&matrix));

    // repeated writes through one cell leave only the last value
    matrix.cell_mut(100, 100)?.set(314).set(0).set(217);
    println!(
        "chained assignment through [100][100] leaves {}",
        matrix.get(100, 100)
    );

    Ok(())
}
