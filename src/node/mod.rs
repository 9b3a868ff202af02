mod iter;


use compare::Compare;
use std::cmp::Ordering::{self, *};
use std::collections::TryReserveError;
use std::ops::{Index, IndexMut};

pub use self::iter::{Cursor, IntoIter, Iter, Range};

/// A link to a slot in a tree's node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Link(usize);

/// The sentinel slot. It terminates every branch and is the root's parent.
pub const NIL: Link = Link(0);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

#[derive(Clone, Copy, Debug)]
pub struct Node {
    pub left: Link,
    pub right: Link,
    pub parent: Link,
    pub color: Color,
}

impl Node {
    const SENTINEL: Node = Node { left: NIL, right: NIL, parent: NIL, color: Color::Black };

    fn new(parent: Link) -> Self {
        Node { left: NIL, right: NIL, parent: parent, color: Color::Red }
    }
}

/// Where a key belongs in a tree.
pub enum Slot {
    /// The node already holding an equal key.
    Occupied(Link),
    /// The parent a new node would hang from, and the side it would go on.
    Vacant(Link, Ordering),
}

/// A red-black tree stored in an index arena.
///
/// `nodes[0]` is the sentinel and real nodes occupy `nodes[1..]` with no holes. The key of
/// node `i` is `keys[i - 1]`.
#[derive(Clone)]
pub struct Tree<T> {
    nodes: Vec<Node>,
    keys: Vec<T>,
    root: Link,
}

impl<T> Tree<T> {
    pub fn new() -> Self { Tree::with_capacity(0) }

    pub fn with_capacity(capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity + 1);
        nodes.push(Node::SENTINEL);
        Tree { nodes: nodes, keys: Vec::with_capacity(capacity), root: NIL }
    }

    /// Copies the tree, failing instead of aborting if the copy cannot be allocated.
    pub fn try_clone(&self) -> Result<Self, TryReserveError> where T: Clone {
        let mut nodes = Vec::new();
        nodes.try_reserve_exact(self.nodes.len())?;
        nodes.extend_from_slice(&self.nodes);

        let mut keys = Vec::new();
        keys.try_reserve_exact(self.keys.len())?;
        keys.extend(self.keys.iter().cloned());

        Ok(Tree { nodes: nodes, keys: keys, root: self.root })
    }

    pub fn len(&self) -> usize { self.keys.len() }

    pub fn root(&self) -> Link { self.root }

    pub fn key(&self, x: Link) -> &T { &self.keys[x.0 - 1] }

    pub fn clear(&mut self) {
        self.nodes.truncate(1);
        self.nodes[0] = Node::SENTINEL;
        self.keys.clear();
        self.root = NIL;
    }

    pub fn reserve(&mut self, additional: usize) {
        self.nodes.reserve(additional);
        self.keys.reserve(additional);
    }

    pub fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        self.nodes.try_reserve(additional)?;
        self.keys.try_reserve(additional)
    }

    pub fn search<C, Q: ?Sized>(&self, cmp: &C, key: &Q) -> Slot where C: Compare<Q, T> {
        let mut parent = NIL;
        let mut order = Less;
        let mut cur = self.root;

        while cur != NIL {
            order = cmp.compare(key, self.key(cur));
            if order == Equal { return Slot::Occupied(cur); }
            parent = cur;
            cur = if order == Less { self[cur].left } else { self[cur].right };
        }

        Slot::Vacant(parent, order)
    }

    pub fn find<C, Q: ?Sized>(&self, cmp: &C, key: &Q) -> Link where C: Compare<Q, T> {
        match self.search(cmp, key) {
            Slot::Occupied(x) => x,
            Slot::Vacant(..) => NIL,
        }
    }

    /// Returns the node nearest to `key` in direction `D`, or the sentinel if there is none.
    ///
    /// `closest::<Right>` finds the smallest key greater than `key` and `closest::<Left>` the
    /// greatest key less than it. With `inclusive`, a node equal to `key` is returned itself.
    pub fn closest<D, C, Q: ?Sized>(&self, cmp: &C, key: &Q, inclusive: bool) -> Link
        where D: Dir, C: Compare<Q, T> {

        // the ordering of `key` against a node lying strictly on the `D` side of it
        let beyond = if D::left() { Greater } else { Less };
        let mut closest = NIL;
        let mut cur = self.root;

        while cur != NIL {
            let order = cmp.compare(key, self.key(cur));
            if order == Equal && inclusive { return cur; }

            if order == beyond {
                closest = cur;
                cur = D::Opposite::forward(&self[cur]);
            } else {
                cur = D::forward(&self[cur]);
            }
        }

        closest
    }

    /// Links a new red node holding `key` below `parent` and rebalances.
    ///
    /// `parent` and `order` must come from a `Slot::Vacant` for the same key.
    pub fn attach(&mut self, key: T, parent: Link, order: Ordering) -> Link {
        let z = Link(self.nodes.len());
        self.nodes.push(Node::new(parent));
        self.keys.push(key);

        if parent == NIL {
            self.root = z;
        } else if order == Less {
            self[parent].left = z;
        } else {
            self[parent].right = z;
        }

        self.insert_fixup(z);
        z
    }

    /// Unlinks the node `z`, rebalances, and returns its key.
    pub fn remove(&mut self, z: Link) -> T {
        // a node with two children trades keys with its successor, which has at most one
        let y = if self[z].left == NIL || self[z].right == NIL {
            z
        } else {
            let y = self.extremum::<Left>(self[z].right);
            self.keys.swap(z.0 - 1, y.0 - 1);
            y
        };

        let x = if self[y].left != NIL { self[y].left } else { self[y].right };
        let parent = self[y].parent;

        // written even when `x` is the sentinel: the fixup climbs from it
        self[x].parent = parent;
        self.replace_child(parent, y, x);

        if self[y].color == Color::Black { self.remove_fixup(x); }

        self.nodes[0] = Node::SENTINEL;
        self.release(y)
    }

    /// Frees the detached slot `y` by moving the last slot into it.
    fn release(&mut self, y: Link) -> T {
        let last = Link(self.nodes.len() - 1);

        if y != last {
            trace!("relocating {:?} into {:?}", last, y);
            let moved = self[last];
            self.replace_child(moved.parent, last, y);
            if moved.left != NIL { self[moved.left].parent = y; }
            if moved.right != NIL { self[moved.right].parent = y; }
        }

        self.nodes.swap_remove(y.0);
        self.keys.swap_remove(y.0 - 1)
    }

    fn replace_child(&mut self, parent: Link, old: Link, new: Link) {
        if parent == NIL {
            self.root = new;
        } else if self[parent].left == old {
            self[parent].left = new;
        } else {
            self[parent].right = new;
        }
    }

    /// Rotates `x` down towards `D`, promoting its child on the opposite side.
    ///
    /// `rotate::<Left>` is a left rotation and `rotate::<Right>` a right rotation. Colors are
    /// left untouched.
    pub fn rotate<D>(&mut self, x: Link) where D: Dir {
        let y = D::Opposite::forward(&self[x]);
        debug_assert!(y != NIL, "rotating {:?} without a child to promote", x);

        let inner = D::forward(&self[y]);
        *D::Opposite::forward_mut(&mut self[x]) = inner;
        if inner != NIL { self[inner].parent = x; }

        let parent = self[x].parent;
        self[y].parent = parent;
        self.replace_child(parent, x, y);

        *D::forward_mut(&mut self[y]) = x;
        self[x].parent = y;
    }

    /// Returns the last node reached by following `D` links from `x`.
    pub fn extremum<D>(&self, mut x: Link) -> Link where D: Dir {
        if x == NIL { return NIL; }
        while D::forward(&self[x]) != NIL { x = D::forward(&self[x]); }
        x
    }

    pub fn first(&self) -> Link { self.extremum::<Left>(self.root) }

    pub fn last(&self) -> Link { self.extremum::<Right>(self.root) }

    /// Returns the in-order neighbor of the real node `x` in direction `D`, or the sentinel.
    pub fn neighbor<D>(&self, mut x: Link) -> Link where D: Dir {
        let child = D::forward(&self[x]);
        if child != NIL { return self.extremum::<D::Opposite>(child); }

        let mut parent = self[x].parent;
        while parent != NIL && x == D::forward(&self[parent]) {
            x = parent;
            parent = self[parent].parent;
        }

        parent
    }

    /// Consumes the tree, returning its keys in ascending order.
    pub fn into_sorted(self) -> Vec<T> {
        let mut order = Vec::with_capacity(self.len());
        let mut x = self.first();

        while x != NIL {
            order.push(x);
            x = self.neighbor::<Right>(x);
        }

        let mut keys: Vec<Option<T>> = self.keys.into_iter().map(Some).collect();
        order.into_iter().filter_map(|x| keys[x.0 - 1].take()).collect()
    }
}

impl<T> Index<Link> for Tree<T> {
    type Output = Node;
    fn index(&self, x: Link) -> &Node { &self.nodes[x.0] }
}

impl<T> IndexMut<Link> for Tree<T> {
    fn index_mut(&mut self, x: Link) -> &mut Node { &mut self.nodes[x.0] }
}

pub trait Dir: Sized {
    type Opposite: Dir<Opposite=Self>;

    fn left() -> bool;

    fn forward(node: &Node) -> Link;
    fn forward_mut(node: &mut Node) -> &mut Link;
}

pub enum Left {}

impl Dir for Left {
    type Opposite = Right;

    fn left() -> bool { true }

    fn forward(node: &Node) -> Link { node.left }
    fn forward_mut(node: &mut Node) -> &mut Link { &mut node.left }
}

pub enum Right {}

impl Dir for Right {
    type Opposite = Left;

    fn left() -> bool { false }

    fn forward(node: &Node) -> Link { node.right }
    fn forward_mut(node: &mut Node) -> &mut Link { &mut node.right }
}
