//! The binary interpretation.
//!
//! # Construction
//!
//! - `add(a, b)`: a branch whose children are `a` and `b`.
//! - `mul(a, b)`: the product is pushed one level down into whichever operand
//!   already branches, left preferred: `(l1, l2) * b = (l1 * b, l2 * b)`,
//!   otherwise `a * (r1, r2) = (a * r1, a * r2)`. Two leaves concatenate.
//!
//! Product children are deferred, so building the full grammar allocates
//! only the nodes of the expression itself; the billion leaves exist only
//! as the paths a search walks.

use std::rc::Rc;

use verba_algebra::{Additive, Character, Lazy, Semiring};

/// A node of the lazy binary tree, measured by `M`.
#[derive(Debug)]
pub struct Binary<M>(Rc<Node<M>>);

#[derive(Debug)]
struct Node<M> {
    measure: M,
    shape: Shape<M>,
}

/// What is below a node.
#[derive(Debug)]
pub enum Shape<M> {
    /// No strings at all (`zero`, or any product with it).
    Empty,
    /// Exactly one generated string.
    Leaf(String),
    Branch(Lazy<Binary<M>>, Lazy<Binary<M>>),
}

impl<M> Binary<M> {
    fn new(measure: M, shape: Shape<M>) -> Self {
        Binary(Rc::new(Node { measure, shape }))
    }

    /// Measure of every string below this node.
    pub fn measure(&self) -> &M {
        &self.0.measure
    }

    pub fn shape(&self) -> &Shape<M> {
        &self.0.shape
    }

    /// Every leaf in generation order, forcing the whole tree.
    ///
    /// Only meaningful for small grammars.
    pub fn words(&self) -> Vec<String> {
        let mut words = Vec::new();
        let mut stack = vec![self.clone()];
        while let Some(node) = stack.pop() {
            match node.shape() {
                Shape::Empty => {}
                Shape::Leaf(word) => words.push(word.clone()),
                Shape::Branch(left, right) => {
                    stack.push(right.force().clone());
                    stack.push(left.force().clone());
                }
            }
        }
        words
    }
}

impl<M> Clone for Binary<M> {
    fn clone(&self) -> Self {
        Binary(Rc::clone(&self.0))
    }
}

impl<M: Semiring + 'static> Additive for Binary<M> {
    fn zero() -> Self {
        Binary::new(M::zero(), Shape::Empty)
    }

    fn add(&self, rhs: &Self) -> Self {
        let measure = self.measure().add(rhs.measure());
        let shape = Shape::Branch(Lazy::ready(self.clone()), Lazy::ready(rhs.clone()));
        Binary::new(measure, shape)
    }

    fn is_zero(&self) -> bool {
        self.measure().is_zero()
    }
}

impl<M: Semiring + 'static> Semiring for Binary<M> {
    fn one() -> Self {
        Binary::new(M::one(), Shape::Leaf(String::new()))
    }

    fn mul(&self, rhs: &Self) -> Self {
        let measure = self.measure().mul(rhs.measure());
        let shape = match (self.shape(), rhs.shape()) {
            (Shape::Branch(l1, l2), _) => {
                Shape::Branch(times_right(l1, rhs), times_right(l2, rhs))
            }
            (_, Shape::Branch(r1, r2)) => {
                Shape::Branch(times_left(self, r1), times_left(self, r2))
            }
            (Shape::Leaf(left), Shape::Leaf(right)) => Shape::Leaf(format!("{left}{right}")),
            _ => Shape::Empty,
        };
        Binary::new(measure, shape)
    }
}

/// `child * rhs`, deferred.
fn times_right<M: Semiring + 'static>(child: &Lazy<Binary<M>>, rhs: &Binary<M>) -> Lazy<Binary<M>> {
    let (child, rhs) = (child.clone(), rhs.clone());
    Lazy::new(move || child.force().mul(&rhs))
}

/// `lhs * child`, deferred.
fn times_left<M: Semiring + 'static>(lhs: &Binary<M>, child: &Lazy<Binary<M>>) -> Lazy<Binary<M>> {
    let (lhs, child) = (lhs.clone(), child.clone());
    Lazy::new(move || lhs.mul(child.force()))
}

impl<M: Semiring + Character + 'static> Character for Binary<M> {
    fn char(c: char) -> Self {
        Binary::new(M::char(c), Shape::Leaf(c.to_string()))
    }
}

#[cfg(test)]
mod tests;
