use crate::{NetworkCandidate, NodeId, StateSet};
use fxhash::FxHashSet;
use log::debug;

impl NetworkCandidate {
    /// Create a candidate from one on-set per node, in canonical node order.
    pub fn new(domains: Vec<StateSet>) -> NetworkCandidate {
        NetworkCandidate { domains }
    }

    /// The number of nodes of this network.
    pub fn num_nodes(&self) -> usize {
        self.domains.len()
    }

    /// The on-set of the given node.
    pub fn get_domain(&self, node: NodeId) -> &StateSet {
        &self.domains[node.to_index()]
    }

    /// The canonical signature of this candidate: per node in canonical
    /// order, the sorted state indices of its on-set. Two candidates are the
    /// same Boolean network exactly when their signatures are equal.
    ///
    /// A structural representation is used instead of a joined string so that
    /// no separator can ever collide with regulator names.
    pub fn signature(&self) -> Vec<Vec<usize>> {
        self.domains.iter().map(|domain| domain.ones()).collect()
    }
}

/// Assemble every full network candidate from per-node on-set collections by
/// taking one on-set per node, i.e. the cross product across nodes.
///
/// `per_node_domains` holds, for every node in canonical order, the on-sets
/// produced by that node's layer structures within one pathway group. A node
/// with no on-sets yields no candidates at all.
pub fn assemble_networks(per_node_domains: &[Vec<StateSet>]) -> Vec<NetworkCandidate> {
    if per_node_domains.iter().any(|domains| domains.is_empty()) {
        return Vec::new();
    }
    let mut candidates = Vec::new();
    // Odometer over per-node choices; the last node varies fastest.
    let mut choice = vec![0usize; per_node_domains.len()];
    loop {
        let domains: Vec<StateSet> = per_node_domains
            .iter()
            .zip(choice.iter())
            .map(|(domains, i)| domains[*i].clone())
            .collect();
        candidates.push(NetworkCandidate::new(domains));
        let mut position = per_node_domains.len();
        loop {
            if position == 0 {
                return candidates;
            }
            position -= 1;
            choice[position] += 1;
            if choice[position] < per_node_domains[position].len() {
                break;
            }
            choice[position] = 0;
        }
    }
}

/// Remove duplicate networks, keeping the first candidate seen for every
/// canonical signature. Running deduplication on its own output is a no-op.
pub fn deduplicate_networks(candidates: Vec<NetworkCandidate>) -> Vec<NetworkCandidate> {
    let total = candidates.len();
    let mut seen: FxHashSet<Vec<Vec<usize>>> = FxHashSet::default();
    let mut retained = Vec::new();
    for candidate in candidates {
        if seen.insert(candidate.signature()) {
            retained.push(candidate);
        }
    }
    debug!("Deduplicated {} candidates down to {}.", total, retained.len());
    retained
}
