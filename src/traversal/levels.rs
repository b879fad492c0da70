//! Breadth-first layering used by the editor to place nodes left to right.

use super::outgoing;
use crate::core::ProcessGraph;
use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};

type FlowPair<'g> = (&'g str, &'g str);

struct DfsFrame<'g> {
    node: &'g str,
    targets: Vec<&'g str>,
    next: usize,
}

fn successors<'g>(graph: &'g ProcessGraph, node_id: &str) -> Vec<&'g str> {
    outgoing(graph, node_id)
        .into_iter()
        .map(|e| e.target.as_str())
        .collect()
}

/// Edges that close a loop: their target is still open on the depth-first
/// path from a start. Also returns every node the starts reach.
fn loop_back_edges<'g>(
    graph: &'g ProcessGraph,
    start_ids: &[&str],
) -> (HashSet<FlowPair<'g>>, HashSet<&'g str>) {
    let mut back = HashSet::new();
    let mut finished: HashSet<&'g str> = HashSet::new();
    let mut on_path: HashSet<&'g str> = HashSet::new();

    for &start in start_ids {
        let Some(root) = graph.node(start).map(|n| n.id.as_str()) else {
            continue;
        };
        if finished.contains(root) {
            continue;
        }
        on_path.insert(root);
        let mut stack = vec![DfsFrame {
            node: root,
            targets: successors(graph, root),
            next: 0,
        }];

        while let Some(frame) = stack.last_mut() {
            let node = frame.node;
            let Some(target) = frame.targets.get(frame.next).copied() else {
                stack.pop();
                on_path.remove(node);
                finished.insert(node);
                continue;
            };
            frame.next += 1;

            if on_path.contains(target) {
                back.insert((node, target));
            } else if !finished.contains(target) {
                on_path.insert(target);
                stack.push(DfsFrame {
                    node: target,
                    targets: successors(graph, target),
                    next: 0,
                });
            }
        }
    }

    (back, finished)
}

/// Assign every node a level reachable from `start_ids`.
///
/// A node's level is the longest predecessor chain from a start, so it
/// never sits before any of its inputs. Loop-back edges are ignored, which
/// keeps a rework loop from dragging its entry node to the right. Nodes no
/// start reaches all share the level after the current maximum.
pub fn compute_levels(graph: &ProcessGraph, start_ids: &[&str]) -> BTreeMap<String, usize> {
    let (back, reachable) = loop_back_edges(graph, start_ids);
    let is_forward = |pair: &FlowPair<'_>| !back.contains(pair);

    let mut in_degree: HashMap<&str, usize> = reachable.iter().map(|&id| (id, 0)).collect();
    for &source in &reachable {
        for target in successors(graph, source) {
            if is_forward(&(source, target)) {
                *in_degree.entry(target).or_insert(0) += 1;
            }
        }
    }

    let mut levels: BTreeMap<String, usize> = BTreeMap::new();
    let mut queue: VecDeque<&str> = VecDeque::new();
    for &start in start_ids {
        let Some(id) = graph.node(start).map(|n| n.id.as_str()) else {
            continue;
        };
        if in_degree.get(id) == Some(&0) && !levels.contains_key(id) {
            levels.insert(id.to_string(), 0);
            queue.push_back(id);
        }
    }

    while let Some(current) = queue.pop_front() {
        let candidate = levels.get(current).copied().unwrap_or(0) + 1;
        for target in successors(graph, current) {
            if !is_forward(&(current, target)) {
                continue;
            }
            let level = levels.entry(target.to_string()).or_insert(candidate);
            *level = (*level).max(candidate);
            if let Some(remaining) = in_degree.get_mut(target) {
                *remaining = remaining.saturating_sub(1);
                if *remaining == 0 {
                    queue.push_back(target);
                }
            }
        }
    }

    let trailing = levels.values().max().map_or(0, |max| max + 1);
    for node in graph.nodes() {
        levels.entry(node.id.clone()).or_insert(trailing);
    }

    log::debug!(
        "computed levels for {} nodes from {} starts, {} loop-back edges ignored",
        levels.len(),
        start_ids.len(),
        back.len()
    );
    levels
}
