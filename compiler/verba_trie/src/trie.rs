//! The trie interpretation and its semiring.

use std::collections::hash_map::Entry;
use std::rc::Rc;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use verba_algebra::{Additive, Character, Lazy, Semiring};

/// Deferred children keyed by their first character.
///
/// An additive monoid only: `zero` is the empty map and `add` is key union,
/// adding the two tries wherever a key is shared. There is no `one`; trie
/// multiplication never needs one for its children, so none is defined.
#[derive(Debug)]
pub struct Branches<M>(FxHashMap<char, Lazy<Trie<M>>>);

/// Sorted view of a node's children.
pub type SortedBranches<'a, M> = SmallVec<[(char, &'a Lazy<Trie<M>>); 32]>;

impl<M> Branches<M> {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: char) -> Option<&Lazy<Trie<M>>> {
        self.0.get(&key)
    }

    /// Children in ascending key order.
    pub fn sorted(&self) -> SortedBranches<'_, M> {
        let mut sorted: SortedBranches<'_, M> = self.0.iter().map(|(&key, child)| (key, child)).collect();
        sorted.sort_unstable_by_key(|&(key, _)| key);
        sorted
    }

    fn single(key: char, child: Lazy<Trie<M>>) -> Self {
        let mut map = FxHashMap::default();
        map.insert(key, child);
        Branches(map)
    }

    fn map(&self, f: impl Fn(&Lazy<Trie<M>>) -> Lazy<Trie<M>>) -> Self {
        Branches(self.0.iter().map(|(&key, child)| (key, f(child))).collect())
    }
}

impl<M> Clone for Branches<M> {
    fn clone(&self) -> Self {
        Branches(self.0.clone())
    }
}

impl<M: Additive + 'static> Additive for Branches<M> {
    fn zero() -> Self {
        Branches(FxHashMap::default())
    }

    fn add(&self, rhs: &Self) -> Self {
        let mut merged = self.0.clone();
        for (&key, theirs) in &rhs.0 {
            match merged.entry(key) {
                Entry::Occupied(mut entry) => {
                    let ours = entry.get().clone();
                    let theirs = theirs.clone();
                    entry.insert(Lazy::new(move || ours.force().add(theirs.force())));
                }
                Entry::Vacant(entry) => {
                    entry.insert(theirs.clone());
                }
            }
        }
        Branches(merged)
    }

    fn is_zero(&self) -> bool {
        self.0.is_empty()
    }
}

/// A trie node measured by `M`. Cloning shares the node.
#[derive(Debug)]
pub struct Trie<M>(Rc<Node<M>>);

#[derive(Debug)]
struct Node<M> {
    total: M,
    label: M,
    children: Branches<M>,
}

impl<M> Trie<M> {
    fn new(total: M, label: M, children: Branches<M>) -> Self {
        Trie(Rc::new(Node {
            total,
            label,
            children,
        }))
    }

    /// Measure of every string at or below this node.
    pub fn total(&self) -> &M {
        &self.0.total
    }

    /// Measure of the strings ending exactly at this node.
    pub fn label(&self) -> &M {
        &self.0.label
    }

    pub fn children(&self) -> &Branches<M> {
        &self.0.children
    }

    /// The subtree under `key`, forcing it.
    pub fn child(&self, key: char) -> Option<&Trie<M>> {
        self.children().get(key).map(Lazy::force)
    }
}

impl<M: Clone + 'static> Trie<M> {
    /// Rewrite every `total` and `label` with `f`, lazily below the root.
    #[must_use]
    pub fn map_measures(&self, f: Rc<dyn Fn(&M) -> M>) -> Trie<M> {
        let children = self.children().map(|child| {
            let (child, f) = (child.clone(), Rc::clone(&f));
            Lazy::new(move || child.force().map_measures(f))
        });
        Trie::new(f(self.total()), f(self.label()), children)
    }
}

impl<M: Additive + 'static> Trie<M> {
    /// Every string ending in this trie with its label, alphabetically.
    ///
    /// Forces the whole trie; only meaningful for small grammars.
    pub fn entries(&self) -> Vec<(String, M)> {
        let mut entries = Vec::new();
        let mut stack = vec![(String::new(), self.clone())];
        while let Some((prefix, node)) = stack.pop() {
            if !node.label().is_zero() {
                entries.push((prefix.clone(), node.label().clone()));
            }
            for (key, child) in node.children().sorted().into_iter().rev() {
                let mut word = prefix.clone();
                word.push(key);
                stack.push((word, child.force().clone()));
            }
        }
        entries
    }
}

impl<M: Semiring + 'static> Trie<M> {
    /// `scalar * t` applied to every node: appends the strings `scalar`
    /// measures in front of every string of the trie, measure-wise.
    #[must_use]
    pub fn scale(&self, scalar: &M) -> Trie<M> {
        let scalar = scalar.clone();
        self.map_measures(Rc::new(move |m: &M| scalar.mul(m)))
    }
}

impl<M> Clone for Trie<M> {
    fn clone(&self) -> Self {
        Trie(Rc::clone(&self.0))
    }
}

impl<M: Additive + 'static> Additive for Trie<M> {
    fn zero() -> Self {
        Trie::new(M::zero(), M::zero(), Branches::zero())
    }

    fn add(&self, rhs: &Self) -> Self {
        Trie::new(
            self.total().add(rhs.total()),
            self.label().add(rhs.label()),
            self.children().add(rhs.children()),
        )
    }

    fn is_zero(&self) -> bool {
        self.total().is_zero()
    }
}

impl<M: Semiring + 'static> Semiring for Trie<M> {
    fn one() -> Self {
        Trie::new(M::one(), M::one(), Branches::zero())
    }

    fn mul(&self, rhs: &Self) -> Self {
        let mut children = self.children().map(|child| {
            let (child, rhs) = (child.clone(), rhs.clone());
            Lazy::new(move || child.force().mul(&rhs))
        });
        // strings ending at our root continue straight into rhs's children
        if !self.label().is_zero() {
            let tails = rhs.children().map(|child| {
                let (child, scalar) = (child.clone(), self.label().clone());
                Lazy::new(move || child.force().scale(&scalar))
            });
            children = children.add(&tails);
        }
        Trie::new(
            self.total().mul(rhs.total()),
            self.label().mul(rhs.label()),
            children,
        )
    }
}

impl<M: Semiring + Character + 'static> Character for Trie<M> {
    fn char(c: char) -> Self {
        let measure = M::char(c);
        let leaf = Trie::new(measure.clone(), measure.clone(), Branches::zero());
        Trie::new(measure, M::zero(), Branches::single(c, Lazy::ready(leaf)))
    }
}
