//! Red-black rebalancing.
//!
//! Both fixups are written once against a direction `D`: the side of the violating node's
//! parent (insertion) or of the violating node itself (removal). The mirrored cases come from
//! instantiating `D` with `Left` and `Right`.

use crate::node::{Color, Dir, Left, Link, Right, Tree, NIL};

/// The outcome of one removal fixup step.
enum Fixup {
    /// The missing black moved up to the given node.
    Ascend(Link),
    /// Black-heights are restored.
    Balanced,
}

impl<T> Tree<T> {
    /// Restores the red-black invariants after the red node `x` was linked into the tree.
    pub fn insert_fixup(&mut self, mut x: Link) {
        while self[self[x].parent].color == Color::Red {
            let parent = self[x].parent;
            let grandparent = self[parent].parent;

            x = if self[grandparent].left == parent {
                self.insert_step::<Left>(x)
            } else {
                self.insert_step::<Right>(x)
            };
        }

        let root = self.root();
        self[root].color = Color::Black;
    }

    // `x` and its parent are both red, and the parent is the `D` child of the grandparent.
    fn insert_step<D>(&mut self, mut x: Link) -> Link where D: Dir {
        let parent = self[x].parent;
        let grandparent = self[parent].parent;
        let uncle = D::Opposite::forward(&self[grandparent]);

        if self[uncle].color == Color::Red {
            trace!("insert fixup at {:?}: recoloring below {:?}", x, grandparent);
            self[parent].color = Color::Black;
            self[uncle].color = Color::Black;
            self[grandparent].color = Color::Red;
            return grandparent;
        }

        if x == D::Opposite::forward(&self[parent]) {
            trace!("insert fixup at {:?}: straightening at {:?}", x, parent);
            x = parent;
            self.rotate::<D>(x);
        }

        let parent = self[x].parent;
        let grandparent = self[parent].parent;
        trace!("insert fixup at {:?}: rotating at {:?}", x, grandparent);
        self[parent].color = Color::Black;
        self[grandparent].color = Color::Red;
        self.rotate::<D::Opposite>(grandparent);
        x
    }

    /// Restores the red-black invariants after a black node was spliced out from above `x`.
    ///
    /// `x` may be the sentinel, in which case its parent link must point at the spliced node's
    /// former parent.
    pub fn remove_fixup(&mut self, mut x: Link) {
        while x != self.root() && self[x].color == Color::Black {
            let parent = self[x].parent;

            let step = if self[parent].left == x {
                self.remove_step::<Left>(x)
            } else {
                self.remove_step::<Right>(x)
            };

            match step {
                Fixup::Ascend(next) => x = next,
                Fixup::Balanced => return,
            }
        }

        self[x].color = Color::Black;
    }

    // `x` carries an extra black and is the `D` child of its parent.
    fn remove_step<D>(&mut self, x: Link) -> Fixup where D: Dir {
        let parent = self[x].parent;
        let mut sibling = D::Opposite::forward(&self[parent]);

        if self[sibling].color == Color::Red {
            trace!("remove fixup at {:?}: red sibling {:?}", x, sibling);
            self[sibling].color = Color::Black;
            self[parent].color = Color::Red;
            self.rotate::<D>(parent);
            sibling = D::Opposite::forward(&self[parent]);
        }

        let near = D::forward(&self[sibling]);
        let far = D::Opposite::forward(&self[sibling]);

        if self[near].color == Color::Black && self[far].color == Color::Black {
            trace!("remove fixup at {:?}: ascending to {:?}", x, parent);
            self[sibling].color = Color::Red;
            return Fixup::Ascend(parent);
        }

        if self[far].color == Color::Black {
            trace!("remove fixup at {:?}: turning near nephew {:?} outward", x, near);
            self[near].color = Color::Black;
            self[sibling].color = Color::Red;
            self.rotate::<D::Opposite>(sibling);
            sibling = D::Opposite::forward(&self[parent]);
        }

        trace!("remove fixup at {:?}: rotating at {:?}", x, parent);
        self[sibling].color = self[parent].color;
        self[parent].color = Color::Black;
        let far = D::Opposite::forward(&self[sibling]);
        self[far].color = Color::Black;
        self.rotate::<D>(parent);
        Fixup::Balanced
    }
}
