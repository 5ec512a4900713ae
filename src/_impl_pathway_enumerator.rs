use crate::{
    NodeId, NodePathways, Pathway, PathwayGroup, Polarity, RegulatoryTopology, StateSpace,
};
use log::debug;

/// The two canalizing/canalized variants of one regulation edge, in the fixed
/// enumeration order.
///
/// For activators, the canalized value always equals the canalizing value;
/// for inhibitors it is the opposite. This wires activator pathways to
/// output `1` and inhibitor pathways to output `0`.
fn edge_variants(polarity: Polarity) -> [(bool, bool); 2] {
    match polarity {
        Polarity::Activation => [(false, false), (true, true)],
        Polarity::Inhibition => [(false, true), (true, false)],
    }
}

impl RegulatoryTopology {
    /// The number of pathway groups that `enumerate_pathway_groups` would
    /// produce, i.e. `2^(#activations) * 2^(#inhibitions)` over all regulated
    /// nodes.
    ///
    /// Computed without enumerating anything so that callers can check the
    /// count against a budget first.
    pub fn count_pathway_groups(&self) -> u128 {
        let edges = self.regulations().count();
        if edges >= 127 {
            // Saturate instead of overflowing; such inputs can never fit any
            // realistic budget anyway.
            u128::MAX
        } else {
            1u128 << edges
        }
    }

    /// Enumerate every global assignment of canalizing/canalized polarity
    /// choices over all regulations of this topology.
    ///
    /// Every regulation contributes exactly two pathway variants; the groups
    /// are the full cross product of activator-edge choices with
    /// inhibitor-edge choices. Within a group, a pathway lands in its target's
    /// activator pool if and only if it canalizes the target to `1`,
    /// regardless of the declared sign of the edge it came from. An activator
    /// edge taking its `(0,0)` variant therefore contributes an *inhibitor*
    /// pathway. Input nodes always receive the same synthetic self-loop
    /// activator/inhibitor pair. This never fails: a node with an empty
    /// activator (or inhibitor) pool simply contributes nothing from that
    /// side.
    pub fn enumerate_pathway_groups(&self, space: &StateSpace) -> Vec<PathwayGroup> {
        // Flatten regulations into the canonical edge order: per target node,
        // activators first, then inhibitors, regulators sorted within each.
        let mut activator_edges: Vec<(NodeId, NodeId)> = Vec::new();
        let mut inhibitor_edges: Vec<(NodeId, NodeId)> = Vec::new();
        for target in self.nodes() {
            for regulator in self.activators(target) {
                activator_edges.push((regulator, target));
            }
            for regulator in self.inhibitors(target) {
                inhibitor_edges.push((regulator, target));
            }
        }

        // Pre-build both variants of every edge.
        let activator_variants: Vec<[Pathway; 2]> = activator_edges
            .iter()
            .map(|(regulator, target)| self.build_variants(space, *regulator, *target, Polarity::Activation))
            .collect();
        let inhibitor_variants: Vec<[Pathway; 2]> = inhibitor_edges
            .iter()
            .map(|(regulator, target)| self.build_variants(space, *regulator, *target, Polarity::Inhibition))
            .collect();

        // The synthetic input-node pathways are identical in every group.
        let input_pathways: Vec<Option<NodePathways>> = self
            .nodes()
            .map(|node| {
                if self.is_input_node(node) {
                    Some(NodePathways {
                        activators: vec![Pathway::new(self, space, node, node, true, true)],
                        inhibitors: vec![Pathway::new(self, space, node, node, false, false)],
                    })
                } else {
                    None
                }
            })
            .collect();

        // Cross product over all variant choices, activator choices in the
        // outer loop, inhibitor choices in the inner one. The first edge of
        // each side is the most significant digit of the choice counter.
        let activator_choices = 1usize << activator_variants.len();
        let inhibitor_choices = 1usize << inhibitor_variants.len();
        let mut groups = Vec::with_capacity(activator_choices * inhibitor_choices);
        for activator_choice in 0..activator_choices {
            for inhibitor_choice in 0..inhibitor_choices {
                let mut node_pathways: Vec<NodePathways> = self
                    .nodes()
                    .map(|node| match &input_pathways[node.to_index()] {
                        Some(pathways) => pathways.clone(),
                        None => NodePathways {
                            activators: Vec::new(),
                            inhibitors: Vec::new(),
                        },
                    })
                    .collect();
                for (edge, variants) in activator_variants.iter().enumerate() {
                    let bit = (activator_choice >> (activator_variants.len() - 1 - edge)) & 1;
                    Self::push_pathway(&mut node_pathways, variants[bit].clone());
                }
                for (edge, variants) in inhibitor_variants.iter().enumerate() {
                    let bit = (inhibitor_choice >> (inhibitor_variants.len() - 1 - edge)) & 1;
                    Self::push_pathway(&mut node_pathways, variants[bit].clone());
                }
                groups.push(PathwayGroup { node_pathways });
            }
        }
        debug!("Enumerated {} pathway groups.", groups.len());
        groups
    }

    /// **(internal)** File one pathway under its target, pooled by canalized
    /// value rather than by the sign of the originating edge.
    fn push_pathway(node_pathways: &mut [NodePathways], pathway: Pathway) {
        let pools = &mut node_pathways[pathway.get_consequent().to_index()];
        if pathway.is_activator() {
            pools.activators.push(pathway);
        } else {
            pools.inhibitors.push(pathway);
        }
    }

    /// **(internal)** Both canalizing variants of one regulation edge.
    fn build_variants(
        &self,
        space: &StateSpace,
        regulator: NodeId,
        target: NodeId,
        polarity: Polarity,
    ) -> [Pathway; 2] {
        let [first, second] = edge_variants(polarity);
        [
            Pathway::new(self, space, regulator, target, first.0, first.1),
            Pathway::new(self, space, regulator, target, second.0, second.1),
        ]
    }
}
