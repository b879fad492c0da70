//! Gateway nesting depth via branch-scope simulation.
//!
//! Each frontier item carries its own persistent stack of open splits, so
//! two branches that meet at a merge never see each other's scopes.

use super::{gateway_role, outgoing, GatewayRole};
use crate::core::{CfcType, ProcessGraph};
use im::Vector;
use std::collections::{BTreeMap, HashSet, VecDeque};

/// Depth per gateway id. Only gateways appear in the map.
pub type NestingDepths = BTreeMap<String, usize>;

/// Depth assigned to gateways the traversal never reaches.
pub const FALLBACK_DEPTH: usize = 1;

struct Frontier<'g> {
    node_id: &'g str,
    open_splits: Vector<CfcType>,
}

/// Compute how many open branch scopes enclose each gateway.
///
/// Pure splits open a scope and record the depth including it. Pure joins
/// record the depth they were entered with, then close the most recent
/// open split of the same type if there is one; an unmatched join leaves
/// the depth alone. Mixed gateways count as a new split. Gateways missed by
/// the traversal, or every gateway when there is no start event, get
/// [`FALLBACK_DEPTH`].
pub fn compute_nesting_depths(graph: &ProcessGraph) -> NestingDepths {
    let mut depths = NestingDepths::new();

    let mut queue: VecDeque<Frontier<'_>> = graph
        .start_nodes()
        .map(|n| Frontier {
            node_id: n.id.as_str(),
            open_splits: Vector::new(),
        })
        .collect();

    if queue.is_empty() {
        for gateway in graph.gateways() {
            depths.insert(gateway.id.clone(), FALLBACK_DEPTH);
        }
        return depths;
    }

    let mut visited: HashSet<&str> = HashSet::new();

    while let Some(Frontier {
        node_id,
        mut open_splits,
    }) = queue.pop_front()
    {
        if !visited.insert(node_id) {
            continue;
        }
        let Some(node) = graph.node(node_id) else {
            continue;
        };

        if let (Some(profile), Some(role)) =
            (node.kind.gateway_profile(), gateway_role(graph, node_id))
        {
            let cfc_type = profile.cfc_type;
            match role {
                GatewayRole::Split | GatewayRole::Mixed => {
                    open_splits.push_back(cfc_type);
                    record(&mut depths, node_id, open_splits.len());
                }
                GatewayRole::Join => {
                    record(&mut depths, node_id, open_splits.len());
                    let matching = open_splits
                        .iter()
                        .enumerate()
                        .filter(|(_, open)| **open == cfc_type)
                        .map(|(position, _)| position)
                        .last();
                    if let Some(position) = matching {
                        open_splits.remove(position);
                    }
                }
                GatewayRole::Passthrough => {
                    record(&mut depths, node_id, open_splits.len());
                }
            }
        }

        for edge in outgoing(graph, node_id) {
            queue.push_back(Frontier {
                node_id: edge.target.as_str(),
                open_splits: open_splits.clone(),
            });
        }
    }

    for gateway in graph.gateways() {
        depths.entry(gateway.id.clone()).or_insert(FALLBACK_DEPTH);
    }

    log::debug!(
        "nesting depths for {} gateways, max {}",
        depths.len(),
        depths.values().max().copied().unwrap_or(0)
    );
    depths
}

fn record(depths: &mut NestingDepths, node_id: &str, depth: usize) {
    let entry = depths.entry(node_id.to_string()).or_insert(depth);
    *entry = (*entry).max(depth);
}
