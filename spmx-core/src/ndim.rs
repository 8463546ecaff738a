//! Generalized N-dimensional sparse engine
//!
//! Rank is a compile-time parameter of `MatrixNd`; storage is a recursive
//! tree of nodes tracking the remaining depth at runtime. A `Branch` node
//! maps a coordinate to a rank-one-lower node, a `Leaf` node maps a
//! coordinate to a value cell.
//!
//! Children sit behind `Rc<RefCell<_>>`: inserting a sibling coordinate
//! never relocates existing substructure, and every handle reaching a
//! coordinate observes the same backing storage. Sharing is structural
//! only; the engine assumes a single thread of control.

use alloc::rc::Rc;
use core::cell::RefCell;

use crate::axis::AxisMap;
use crate::cell::Cell;
use crate::error::{Result, SparseError};
use crate::traits::{MatrixElement, Occupancy, SparseMatrix};
use crate::Coord;

type SharedCell<T> = Rc<RefCell<Cell<T>>>;
type SharedNode<T> = Rc<RefCell<Node<T>>>;

/// One level of the recursive storage tree
#[derive(Debug, PartialEq)]
enum Node<T: MatrixElement> {
    /// Final dimension: cells live here
    Leaf(AxisMap<SharedCell<T>>),
    /// Any higher dimension: children are rank-one-lower nodes
    Branch(AxisMap<SharedNode<T>>),
}

impl<T: MatrixElement> Node<T> {
    fn new(remaining: usize) -> Self {
        if remaining > 1 {
            Node::Branch(AxisMap::new())
        } else {
            Node::Leaf(AxisMap::new())
        }
    }

    fn occupied(&self) -> usize {
        match self {
            Node::Leaf(cells) => Occupancy::occupied(cells),
            Node::Branch(children) => Occupancy::occupied(children),
        }
    }
}

impl<T: MatrixElement> Occupancy for Rc<RefCell<Cell<T>>> {
    fn occupied(&self) -> usize {
        self.borrow().occupied()
    }
}

impl<T: MatrixElement> Occupancy for Rc<RefCell<Node<T>>> {
    fn occupied(&self) -> usize {
        self.borrow().occupied()
    }
}

/// Sparse matrix of compile-time rank `RANK`, unbounded in every dimension
///
/// Cloning is deliberately not provided: the node tree is held through
/// shared references, so a derived copy would alias the original instead
/// of duplicating it.
#[derive(Debug)]
pub struct MatrixNd<T: MatrixElement, const RANK: usize> {
    default: T,
    root: SharedNode<T>,
}

impl<T: MatrixElement, const RANK: usize> MatrixNd<T, RANK> {
    /// Create an empty matrix reading as `default` at every coordinate
    pub fn new(default: T) -> Self {
        const { assert!(RANK > 0, "matrix rank must be at least 1") };
        Self {
            default,
            root: Rc::new(RefCell::new(Node::new(RANK))),
        }
    }

    /// Create an empty matrix with the element type's zero as the default
    pub fn zeroed() -> Self {
        Self::new(T::zero())
    }

    /// Handle covering the whole matrix, before any index is applied
    fn root_entry(&self) -> Entry<T> {
        Entry::submatrix(Rc::clone(&self.root), RANK, self.default)
    }

    /// Index one step into the outermost dimension
    ///
    /// Creates a placeholder entry for a never-touched coordinate; the
    /// returned handle supports further indexing down to the value cell.
    pub fn index(&mut self, index: Coord) -> Result<Entry<T>> {
        self.root_entry().index(index)
    }

    /// Handle at the end of a partial or full coordinate path
    ///
    /// An empty path yields the whole-matrix handle; a path of `RANK`
    /// coordinates yields the value cell; anything longer fails the same
    /// way a malformed chain does.
    pub fn entry_at(&mut self, coords: &[Coord]) -> Result<Entry<T>> {
        let mut entry = self.root_entry();
        for &index in coords {
            entry = entry.index(index)?;
        }
        Ok(entry)
    }

    /// Assign at a full coordinate tuple; the default value clears the cell
    pub fn set_at(&mut self, coords: &[Coord], value: T) -> Result<()> {
        if coords.len() != RANK {
            return Err(SparseError::RankMismatch);
        }
        self.entry_at(coords)?.set(value)?;
        Ok(())
    }

    fn probe(&self, coords: &[Coord]) -> Option<T> {
        if coords.len() != RANK {
            return None;
        }
        let (last, path) = coords.split_last()?;
        let mut node = Rc::clone(&self.root);
        for &index in path {
            let child = match &*node.borrow() {
                Node::Branch(children) => children.get(index).map(Rc::clone),
                Node::Leaf(_) => None,
            }?;
            node = child;
        }
        let value = match &*node.borrow() {
            Node::Leaf(cells) => cells.get(*last).and_then(|cell| cell.borrow().value()),
            Node::Branch(_) => None,
        };
        value
    }
}

impl<T: MatrixElement, const RANK: usize> SparseMatrix for MatrixNd<T, RANK> {
    type Element = T;

    fn rank(&self) -> usize {
        RANK
    }

    fn default_value(&self) -> T {
        self.default
    }

    fn get_at(&self, coords: &[Coord]) -> Option<T> {
        self.probe(coords)
    }

    fn nnz(&self) -> usize {
        self.root.borrow().occupied()
    }
}

/// Uniform handle produced by indexing: a leaf value cell or a sub-matrix
///
/// Chained indexing type-checks without the caller knowing how many
/// coordinates remain. The scalar operations are only valid on a leaf
/// handle; reaching them through an interior handle means the chain
/// supplied fewer indices than the rank and is rejected with a contract
/// error. Handles share the backing storage, so a write through one is
/// visible through every other handle of the same coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry<T: MatrixElement> {
    kind: EntryKind<T>,
    default: T,
}

#[derive(Debug, Clone, PartialEq)]
enum EntryKind<T: MatrixElement> {
    Cell(SharedCell<T>),
    Submatrix {
        node: SharedNode<T>,
        remaining: usize,
    },
}

impl<T: MatrixElement> Entry<T> {
    fn cell(cell: SharedCell<T>, default: T) -> Self {
        Self {
            kind: EntryKind::Cell(cell),
            default,
        }
    }

    fn submatrix(node: SharedNode<T>, remaining: usize, default: T) -> Self {
        Self {
            kind: EntryKind::Submatrix { node, remaining },
            default,
        }
    }

    /// True when this handle is a terminal value cell
    pub fn is_cell(&self) -> bool {
        matches!(self.kind, EntryKind::Cell(_))
    }

    /// Dimensions still to be indexed before reaching a value cell
    pub fn remaining_rank(&self) -> usize {
        match &self.kind {
            EntryKind::Cell(_) => 0,
            EntryKind::Submatrix { remaining, .. } => *remaining,
        }
    }

    /// Materialized cells reachable through this handle
    pub fn occupied(&self) -> usize {
        match &self.kind {
            EntryKind::Cell(cell) => cell.occupied(),
            EntryKind::Submatrix { node, .. } => node.borrow().occupied(),
        }
    }

    /// Index one step deeper, creating a placeholder entry when absent
    pub fn index(&self, index: Coord) -> Result<Entry<T>> {
        let default = self.default;
        match &self.kind {
            EntryKind::Cell(_) => Err(SparseError::IndexIntoValue),
            EntryKind::Submatrix { node, remaining } => {
                let remaining = *remaining;
                match &mut *node.borrow_mut() {
                    Node::Leaf(cells) => {
                        let cell = cells.get_or_create_with(index, || {
                            Rc::new(RefCell::new(Cell::new(default)))
                        })?;
                        Ok(Entry::cell(Rc::clone(cell), default))
                    }
                    Node::Branch(children) => {
                        let child = children.get_or_create_with(index, || {
                            Rc::new(RefCell::new(Node::new(remaining - 1)))
                        })?;
                        Ok(Entry::submatrix(Rc::clone(child), remaining - 1, default))
                    }
                }
            }
        }
    }

    /// Scalar read of a leaf handle
    pub fn get(&self) -> Result<T> {
        match &self.kind {
            EntryKind::Cell(cell) => Ok(cell.borrow().get()),
            EntryKind::Submatrix { .. } => Err(SparseError::ScalarReadOfSubmatrix),
        }
    }

    /// Scalar write to a leaf handle; the default value clears the cell
    ///
    /// Returns the handle itself so writes chain left to right, with only
    /// the last one observable.
    pub fn set(&self, value: T) -> Result<&Self> {
        match &self.kind {
            EntryKind::Cell(cell) => {
                cell.borrow_mut().set(value);
                Ok(self)
            }
            EntryKind::Submatrix { .. } => Err(SparseError::ScalarWriteToSubmatrix),
        }
    }
}
