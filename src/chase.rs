// src/chase.rs
//! Plain singly linked list traversal. Links are arena indices; the tail has none.

use crate::harness::{bracket, Harness, DEFAULT_ROI_FLAG, DEFAULT_ROI_ID};

pub const DEFAULT_NODES: u64 = 1024;
pub const DEFAULT_TRAVERSALS: u64 = 4;
pub const MIN_NODES: u64 = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListNode { pub next: Option<usize>, pub data: u64 }

#[derive(Clone, Debug)]
pub struct LinkedList { nodes: Vec<ListNode> }

impl LinkedList {
    /// `i -> i + 1`, payload `i`. Fewer than two nodes are raised to two.
    pub fn sequential(n: u64) -> Self {
        let n = n.max(MIN_NODES) as usize;
        let nodes = (0..n)
            .map(|i| ListNode { next: if i + 1 < n { Some(i + 1) } else { None }, data: i as u64 })
            .collect();
        Self { nodes }
    }

    pub fn len(&self) -> usize { self.nodes.len() }

    pub fn is_empty(&self) -> bool { self.nodes.is_empty() }

    /// Follows links from the head until the tail, summing payloads.
    pub fn walk(&self) -> u64 {
        let mut sum = 0u64;
        let mut at = Some(0usize);
        while let Some(i) = at {
            let node = &self.nodes[i];
            sum = sum.wrapping_add(node.data);
            at = node.next;
        }
        sum
    }
}

pub fn run_chase<H: Harness + ?Sized>(harness: &mut H, nodes: u64, traversals: u64) -> u64 {
    let list = LinkedList::sequential(nodes);
    bracket(harness, DEFAULT_ROI_ID, DEFAULT_ROI_FLAG, || {
        let mut sum = 0u64;
        for _ in 0..traversals { sum = sum.wrapping_add(list.walk()); }
        sum
    })
}
