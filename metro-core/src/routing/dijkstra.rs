use std::{cmp::Ordering, collections::BinaryHeap};

use hashbrown::HashMap;
use petgraph::{
    graph::{EdgeIndex, NodeIndex},
    visit::EdgeRef,
};

use crate::{Distance, model::MetroNetwork};

#[derive(Copy, Clone, PartialEq)]
struct State {
    cost: Distance,
    node: NodeIndex,
}

impl Eq for State {}

// Implement Ord for State to use in BinaryHeap
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap by cost (reversed from standard Rust BinaryHeap),
        // equal costs settle the lower node index first
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Shortest path between two vertices
#[derive(Debug, Clone)]
pub(crate) struct TracedPath {
    pub(crate) cost: Distance,
    /// Vertices from start to target inclusive
    pub(crate) nodes: Vec<NodeIndex>,
    /// `edges[i]` joins `nodes[i]` and `nodes[i + 1]`
    pub(crate) edges: Vec<EdgeIndex>,
}

/// Dijkstra's algorithm over connection distances.
/// Returns `None` when `target` is unreachable from `start`.
pub(crate) fn shortest_path(
    network: &MetroNetwork,
    start: NodeIndex,
    target: NodeIndex,
) -> Option<TracedPath> {
    let graph = &network.graph;
    let mut distances: HashMap<NodeIndex, Distance> = HashMap::with_capacity(graph.node_count());
    let mut predecessors: HashMap<NodeIndex, (NodeIndex, EdgeIndex)> =
        HashMap::with_capacity(graph.node_count());
    let mut heap = BinaryHeap::new();

    // Start node has distance 0
    heap.push(State {
        cost: 0.0,
        node: start,
    });
    distances.insert(start, 0.0);

    while let Some(State { cost, node }) = heap.pop() {
        if node == target {
            break;
        }

        // Skip if we've found a better path
        if let Some(&best) = distances.get(&node)
            && cost > best
        {
            continue;
        }

        for edge in graph.edges(node) {
            let next = edge.target();
            let next_cost = cost + edge.weight().distance_km;

            match distances.entry(next) {
                hashbrown::hash_map::Entry::Vacant(entry) => {
                    entry.insert(next_cost);
                    heap.push(State {
                        cost: next_cost,
                        node: next,
                    });
                    predecessors.insert(next, (node, edge.id()));
                }
                hashbrown::hash_map::Entry::Occupied(mut entry) => {
                    if next_cost < *entry.get() {
                        *entry.get_mut() = next_cost;
                        heap.push(State {
                            cost: next_cost,
                            node: next,
                        });
                        predecessors.insert(next, (node, edge.id()));
                    }
                }
            }
        }
    }

    let cost = *distances.get(&target)?;

    // Follow predecessors backward from target to start
    let mut nodes = vec![target];
    let mut edges = Vec::new();
    let mut current = target;
    while current != start {
        let &(prev, edge) = predecessors.get(&current)?;
        nodes.push(prev);
        edges.push(edge);
        current = prev;
    }
    nodes.reverse();
    edges.reverse();

    Some(TracedPath { cost, nodes, edges })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Connection, Station};

    fn network(connections: &[Connection]) -> MetroNetwork {
        let stations: Vec<Station> = ["A", "B", "C", "D"]
            .iter()
            .zip(1..)
            .map(|(name, id)| Station::new(id, *name, "Red Line", 0.0, 0.0))
            .collect();
        MetroNetwork::new(&stations, connections).unwrap()
    }

    fn node(network: &MetroNetwork, name: &str) -> NodeIndex {
        network.node_index(name).unwrap()
    }

    #[test]
    fn test_prefers_shorter_detour() {
        let network = network(&[
            Connection::new(1, 4, "Red Line", 5.0),
            Connection::new(1, 2, "Red Line", 1.0),
            Connection::new(2, 3, "Red Line", 1.0),
            Connection::new(3, 4, "Red Line", 1.0),
        ]);

        let path = shortest_path(&network, node(&network, "A"), node(&network, "D")).unwrap();
        assert_eq!(path.cost, 3.0);
        assert_eq!(path.nodes.len(), 4);
        assert_eq!(path.edges.len(), 3);
    }

    #[test]
    fn test_start_equals_target() {
        let network = network(&[Connection::new(1, 2, "Red Line", 1.0)]);
        let a = node(&network, "A");

        let path = shortest_path(&network, a, a).unwrap();
        assert_eq!(path.cost, 0.0);
        assert_eq!(path.nodes, vec![a]);
        assert!(path.edges.is_empty());
    }

    #[test]
    fn test_unreachable_target() {
        let network = network(&[Connection::new(1, 2, "Red Line", 1.0)]);

        assert!(shortest_path(&network, node(&network, "A"), node(&network, "D")).is_none());
    }

    #[test]
    fn test_ties_are_deterministic() {
        let network = network(&[
            Connection::new(1, 2, "Red Line", 1.0),
            Connection::new(2, 4, "Red Line", 1.0),
            Connection::new(1, 3, "Red Line", 1.0),
            Connection::new(3, 4, "Red Line", 1.0),
        ]);
        let (a, d) = (node(&network, "A"), node(&network, "D"));

        let first = shortest_path(&network, a, d).unwrap();
        for _ in 0..10 {
            assert_eq!(shortest_path(&network, a, d).unwrap().nodes, first.nodes);
        }
    }
}
