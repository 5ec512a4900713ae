use crate::{NetworkCandidate, NodeId, State, StateSpace};
use log::debug;

/// Keep only the networks which admit every declared attractor state.
///
/// A network admits an attractor state when, for every node, the node's bit of
/// the state matches the on-set membership test: bit `1` requires the state in
/// the node's on-set, bit `0` requires it absent. With no attractors declared,
/// the filter is a no-op returning all present candidates.
///
/// `None` candidates are placeholders for entries discarded by earlier stages
/// and are always skipped, never matched.
pub fn prefilter_by_attractors(
    candidates: Vec<Option<NetworkCandidate>>,
    attractors: &[State],
    space: &StateSpace,
) -> Vec<NetworkCandidate> {
    let retained: Vec<NetworkCandidate> = candidates
        .into_iter()
        .flatten()
        .filter(|candidate| admits_all(candidate, attractors, space))
        .collect();
    if !attractors.is_empty() {
        debug!("Prefilter retained {} candidates.", retained.len());
    }
    retained
}

/// **(internal)** Check a single candidate against every attractor state.
fn admits_all(candidate: &NetworkCandidate, attractors: &[State], space: &StateSpace) -> bool {
    attractors.iter().all(|attractor| {
        (0..candidate.num_nodes()).all(|index| {
            let node = NodeId::from(index);
            let required = space.get_bit(*attractor, node);
            candidate.get_domain(node).contains(*attractor) == required
        })
    })
}
