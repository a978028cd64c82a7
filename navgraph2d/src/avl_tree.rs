//! Height balanced binary search tree ordered by a caller supplied comparator.
//!
//! The rotational visibility sweep keeps its active edges in an [AvlTree] keyed by a per-sweep
//! distance that only exists for the duration of that sweep, so the order is given as a closure
//! rather than requiring the element type to implement [Ord].
use std::cmp::Ordering;
use std::fmt;

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    item: T,
    height: u32,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn leaf(item: T) -> Box<Self> {
        Box::new(Node {
            item,
            height: 1,
            left: None,
            right: None,
        })
    }

    fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    fn balance_factor(&self) -> i64 {
        height(&self.left) as i64 - height(&self.right) as i64
    }
}

#[inline]
fn height<T>(link: &Link<T>) -> u32 {
    link.as_ref().map_or(0, |n| n.height)
}

fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let Some(mut pivot) = node.left.take() else {
        return node;
    };
    node.left = pivot.right.take();
    node.update_height();
    pivot.right = Some(node);
    pivot.update_height();
    pivot
}

fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let Some(mut pivot) = node.right.take() else {
        return node;
    };
    node.right = pivot.left.take();
    node.update_height();
    pivot.left = Some(node);
    pivot.update_height();
    pivot
}

fn rebalance<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    node.update_height();
    let bf = node.balance_factor();
    if bf > 1 {
        if let Some(left) = node.left.take() {
            node.left = Some(if left.balance_factor() < 0 {
                rotate_left(left)
            } else {
                left
            });
        }
        rotate_right(node)
    } else if bf < -1 {
        if let Some(right) = node.right.take() {
            node.right = Some(if right.balance_factor() > 0 {
                rotate_right(right)
            } else {
                right
            });
        }
        rotate_left(node)
    } else {
        node
    }
}

fn insert_node<T, C>(link: Link<T>, item: T, cmp: &C) -> Box<Node<T>>
where
    C: Fn(&T, &T) -> Ordering,
{
    match link {
        None => Node::leaf(item),
        Some(mut node) => {
            // equal items go right so duplicates keep insertion order
            if cmp(&item, &node.item) == Ordering::Less {
                node.left = Some(insert_node(node.left.take(), item, cmp));
            } else {
                node.right = Some(insert_node(node.right.take(), item, cmp));
            }
            rebalance(node)
        }
    }
}

/// Detach the minimum of the subtree, returning it and the rebalanced remainder.
fn take_min<T>(mut node: Box<Node<T>>) -> (T, Link<T>) {
    match node.left.take() {
        None => {
            let Node { item, right, .. } = *node;
            (item, right)
        }
        Some(left) => {
            let (min, rest) = take_min(left);
            node.left = rest;
            (min, Some(rebalance(node)))
        }
    }
}

fn remove_node<T, C>(link: &mut Link<T>, item: &T, cmp: &C) -> Option<T>
where
    C: Fn(&T, &T) -> Ordering,
{
    let mut node = link.take()?;
    let removed = match cmp(item, &node.item) {
        Ordering::Less => remove_node(&mut node.left, item, cmp),
        Ordering::Greater => remove_node(&mut node.right, item, cmp),
        Ordering::Equal => {
            let Node {
                item: found,
                left,
                right,
                ..
            } = *node;
            *link = match (left, right) {
                (None, None) => None,
                (Some(child), None) | (None, Some(child)) => Some(child),
                (Some(left), Some(right)) => {
                    let (successor, rest) = take_min(right);
                    let mut replacement = Node::leaf(successor);
                    replacement.left = Some(left);
                    replacement.right = rest;
                    Some(rebalance(replacement))
                }
            };
            return Some(found);
        }
    };

    *link = Some(rebalance(node));
    removed
}

/// AVL tree ordered by the comparator `C`.
///
/// Items comparing equal may coexist as distinct nodes. [AvlTree::remove] and
/// [AvlTree::contains] locate items through the comparator, so for removal "by identity" the
/// comparator must only return [Ordering::Equal] for the same item (e.g. break distance ties by
/// an id).
///
/// # Examples
///
/// ```
/// # use navgraph2d::avl_tree::AvlTree;
/// let mut tree = AvlTree::with_comparator(|a: &(f64, u32), b: &(f64, u32)| {
///     a.0.partial_cmp(&b.0).unwrap().then(a.1.cmp(&b.1))
/// });
/// tree.insert((2.5, 0));
/// tree.insert((0.5, 1));
/// tree.insert((0.5, 2));
/// assert_eq!(tree.min(), Some(&(0.5, 1)));
/// assert_eq!(tree.max(), Some(&(2.5, 0)));
/// assert_eq!(tree.remove(&(0.5, 1)), Some((0.5, 1)));
/// // removing an absent item is a no-op
/// assert_eq!(tree.remove(&(9.0, 9)), None);
/// assert_eq!(tree.len(), 2);
/// ```
pub struct AvlTree<T, C = fn(&T, &T) -> Ordering> {
    root: Link<T>,
    len: usize,
    cmp: C,
}

impl<T> AvlTree<T>
where
    T: Ord,
{
    /// Create an empty tree ordered by the item's [Ord] implementation.
    pub fn new() -> Self {
        AvlTree::with_comparator(T::cmp as fn(&T, &T) -> Ordering)
    }
}

impl<T> Default for AvlTree<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> AvlTree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    pub fn with_comparator(cmp: C) -> Self {
        AvlTree {
            root: None,
            len: 0,
            cmp,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Height of the tree, 0 when empty.
    #[inline]
    pub fn height(&self) -> u32 {
        height(&self.root)
    }

    pub fn insert(&mut self, item: T) {
        self.root = Some(insert_node(self.root.take(), item, &self.cmp));
        self.len += 1;
    }

    /// Remove one item comparing equal to `item`, returning it. Absent items are ignored.
    pub fn remove(&mut self, item: &T) -> Option<T> {
        let removed = remove_node(&mut self.root, item, &self.cmp);
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    pub fn contains(&self, item: &T) -> bool {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match (self.cmp)(item, &node.item) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return true,
            };
        }
        false
    }

    pub fn min(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.item)
    }

    pub fn max(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.item)
    }

    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// In order (ascending) iteration.
    pub fn iter(&self) -> Iter<'_, T> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left(self.root.as_deref());
        iter
    }
}

impl<T, C> fmt::Debug for AvlTree<T, C>
where
    T: fmt::Debug,
    C: Fn(&T, &T) -> Ordering,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// In order iterator over an [AvlTree].
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    fn push_left(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left(node.right.as_deref());
        Some(&node.item)
    }
}
