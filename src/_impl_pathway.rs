use crate::{NodeId, NodePathways, Pathway, PathwayGroup, RegulatoryTopology, StateSet, StateSpace};

impl Pathway {
    /// Create a pathway for the regulation `antecedent` towards `consequent`
    /// with the given canalizing input value and canalized output value.
    ///
    /// The pathway domain is the set of all states in which the antecedent bit
    /// equals `canalizing`. Whether the pathway acts as an activator is fully
    /// determined by the canalized value.
    pub fn new(
        topology: &RegulatoryTopology,
        space: &StateSpace,
        antecedent: NodeId,
        consequent: NodeId,
        canalizing: bool,
        canalized: bool,
    ) -> Pathway {
        let mut domain = space.empty_set();
        for state in space.states() {
            if space.get_bit(state, antecedent) == canalizing {
                domain.insert(state);
            }
        }
        Pathway {
            antecedent: topology.get_node_name(antecedent).clone(),
            consequent,
            activator: canalized,
            domain,
        }
    }

    /// The symbol currently naming the regulator of this pathway.
    ///
    /// This is the regulator's node name unless symbol disambiguation replaced
    /// it with a fresh synthetic symbol.
    pub fn get_antecedent(&self) -> &String {
        &self.antecedent
    }

    /// The node targeted by this pathway.
    pub fn get_consequent(&self) -> NodeId {
        self.consequent
    }

    /// True if this pathway canalizes its target to `1`.
    pub fn is_activator(&self) -> bool {
        self.activator
    }

    /// The set of states in which this pathway canalizes.
    pub fn get_domain(&self) -> &StateSet {
        &self.domain
    }

    /// **(internal)** A copy of this pathway with the antecedent symbol
    /// replaced. The domain is intentionally left untouched.
    pub(crate) fn with_antecedent(&self, symbol: &str) -> Pathway {
        Pathway {
            antecedent: symbol.to_string(),
            consequent: self.consequent,
            activator: self.activator,
            domain: self.domain.clone(),
        }
    }
}

impl NodePathways {
    /// The activator pathways targeting this node.
    pub fn get_activators(&self) -> &[Pathway] {
        &self.activators
    }

    /// The inhibitor pathways targeting this node.
    pub fn get_inhibitors(&self) -> &[Pathway] {
        &self.inhibitors
    }
}

impl PathwayGroup {
    /// The pathways targeting the given node within this group.
    pub fn get_node_pathways(&self, node: NodeId) -> &NodePathways {
        &self.node_pathways[node.to_index()]
    }
}
