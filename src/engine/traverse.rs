//! Traversals - breadth- and depth-first walks driven by [`Traverse`].
//!
//! DFS pushes children in reverse so that pops follow child-list order.
//! The `_mut` variants hand the visitor the whole tree; children are read
//! after the visitor returns, and ids that went stale meanwhile are skipped.

use std::collections::VecDeque;

use super::node::{Node, NodeId};
use super::tree::Tree;
use crate::types::Traverse;

impl Tree {
    /// Breadth-first walk from `start`.
    pub fn bfs(&self, start: NodeId, mut visit: impl FnMut(NodeId, &Node) -> Traverse) {
        self.bfs_with_level(start, |id, node, _| visit(id, node));
    }

    /// Pre-order depth-first walk from `start`.
    pub fn dfs(&self, start: NodeId, mut visit: impl FnMut(NodeId, &Node) -> Traverse) {
        self.dfs_with_level(start, |id, node, _| visit(id, node));
    }

    /// Breadth-first walk; `level` is the depth below `start`.
    pub fn bfs_with_level(
        &self,
        start: NodeId,
        mut visit: impl FnMut(NodeId, &Node, usize) -> Traverse,
    ) {
        let mut queue = VecDeque::from([(start, 0usize)]);
        while let Some((id, level)) = queue.pop_front() {
            let Some(node) = self.get(id) else {
                continue;
            };
            match visit(id, node, level) {
                Traverse::Break => return,
                Traverse::SkipChildren => {}
                Traverse::Continue => queue.extend(node.children.iter().map(|&c| (c, level + 1))),
            }
        }
    }

    /// Pre-order depth-first walk; `level` is the depth below `start`.
    pub fn dfs_with_level(
        &self,
        start: NodeId,
        mut visit: impl FnMut(NodeId, &Node, usize) -> Traverse,
    ) {
        let mut stack = vec![(start, 0usize)];
        while let Some((id, level)) = stack.pop() {
            let Some(node) = self.get(id) else {
                continue;
            };
            match visit(id, node, level) {
                Traverse::Break => return,
                Traverse::SkipChildren => {}
                Traverse::Continue => {
                    stack.extend(node.children.iter().rev().map(|&c| (c, level + 1)))
                }
            }
        }
    }

    /// Pre-order depth-first walk with mutable access.
    pub fn dfs_mut(&mut self, start: NodeId, mut visit: impl FnMut(&mut Tree, NodeId) -> Traverse) {
        let mut stack = vec![start];
        while let Some(id) = stack.pop() {
            if !self.contains(id) {
                continue;
            }
            match visit(self, id) {
                Traverse::Break => return,
                Traverse::SkipChildren => {}
                Traverse::Continue => stack.extend(self.children(id).iter().rev().copied()),
            }
        }
    }

    /// Breadth-first walk with mutable access.
    pub fn bfs_mut(&mut self, start: NodeId, mut visit: impl FnMut(&mut Tree, NodeId) -> Traverse) {
        let mut queue = VecDeque::from([start]);
        while let Some(id) = queue.pop_front() {
            if !self.contains(id) {
                continue;
            }
            match visit(self, id) {
                Traverse::Break => return,
                Traverse::SkipChildren => {}
                Traverse::Continue => queue.extend(self.children(id).iter().copied()),
            }
        }
    }
}
