//! Walkthrough of the generalized engine at ranks one, two and three.

use spmx::{MatrixNd, SparseMatrix};

fn rank_one() -> spmx::Result<()> {
    println!("*** rank 1 ***");
    let mut m: MatrixNd<i32, 1> = MatrixNd::zeroed();
    m.index(3)?.set(3)?;
    m.index(3)?.set(0)?;
    for i in 3..6 {
        m.index(i)?.set(i as i32)?;
    }
    for i in 0..10 {
        print!("{} ", m.get_at(&[i]).unwrap_or(0));
    }
    println!();
    println!("size = {}", m.nnz());
    Ok(())
}

fn rank_two() -> spmx::Result<()> {
    println!("*** rank 2 ***");
    let mut m: MatrixNd<i32, 2> = MatrixNd::zeroed();
    for i in 0..10 {
        m.set_at(&[i, i], i as i32)?;
    }
    for i in 0..10 {
        m.set_at(&[i, 9 - i], (9 - i) as i32)?;
    }
    for row in 1..9 {
        for col in 1..9 {
            print!("{} ", m.get_at(&[row, col]).unwrap_or(0));
        }
        println!();
    }
    println!("size = {}", m.nnz());

    m.entry_at(&[100, 100])?.set(314)?.set(0)?.set(217)?;
    println!(
        "chained assignment through [100][100] leaves {}",
        m.get_at(&[100, 100]).unwrap_or(0)
    );
    Ok(())
}

fn rank_three() -> spmx::Result<()> {
    println!("*** rank 3 ***");
    let mut m: MatrixNd<i32, 3> = MatrixNd::zeroed();
    for i in 0..10 {
        m.index(i)?.index(i)?.index(i)?.set(i as i32)?;
    }
    for layer in 0..3 {
        println!("layer {layer}:");
        for row in 0..3 {
            for col in 0..3 {
                print!("{} ", m.get_at(&[layer, row, col]).unwrap_or(0));
            }
            println!();
        }
    }
    println!("size = {}", m.nnz());
    Ok(())
}

fn main() -> spmx::Result<()> {
    rank_one()?;
    rank_two()?;
    rank_three()?;
    Ok(())
}
