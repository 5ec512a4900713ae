use crate::_impl_domain_evaluator::{evaluate_domain, SymbolTable};
use crate::_impl_layer_partitioner::enumerate_layerings;
use crate::_impl_network_assembler::{assemble_networks, deduplicate_networks};
use crate::_impl_attractor_prefilter::prefilter_by_attractors;
use crate::{
    Disambiguation, InferenceConfig, InferenceError, NcbfInference, NetworkCandidate,
    RegulatoryTopology, State, StateSet, StateSpace,
};
use log::info;

impl NcbfInference {
    /// Create the inference driver for the given topology.
    pub fn new(topology: RegulatoryTopology) -> NcbfInference {
        let space = StateSpace::new(topology.num_nodes());
        NcbfInference { topology, space }
    }

    /// The topology this inference runs over.
    pub fn get_topology(&self) -> &RegulatoryTopology {
        &self.topology
    }

    /// The state space of the topology.
    pub fn get_space(&self) -> &StateSpace {
        &self.space
    }

    /// Run the whole pipeline as configured: enumerate pathway groups, build
    /// every nested canalizing network they admit, deduplicate and filter by
    /// the configured attractor states.
    pub fn run(&self, config: &InferenceConfig) -> Result<Vec<NetworkCandidate>, String> {
        let attractors = self.parse_attractors(&config.attractors)?;
        self.infer(&attractors, config.max_candidates)
            .map_err(|error| error.to_string())
    }

    /// Parse and validate attractor state strings against the state space.
    pub fn parse_attractors(&self, attractors: &[String]) -> Result<Vec<State>, String> {
        attractors
            .iter()
            .map(|value| self.space.parse_state(value))
            .collect()
    }

    /// The typed core of `run`: takes already-validated attractor states.
    ///
    /// Fails fast with `InferenceError::CandidateBudgetExceeded` *before*
    /// materializing anything beyond `max_candidates`; results are never
    /// silently truncated.
    pub fn infer(
        &self,
        attractors: &[State],
        max_candidates: Option<usize>,
    ) -> Result<Vec<NetworkCandidate>, InferenceError> {
        let budget = max_candidates.unwrap_or(usize::MAX);

        let group_count = self.topology.count_pathway_groups();
        if group_count > budget as u128 {
            return Err(InferenceError::CandidateBudgetExceeded {
                budget,
                required: group_count,
            });
        }
        let groups = self.topology.enumerate_pathway_groups(&self.space);
        info!("Pathway groups: {}.", groups.len());

        let names = self.topology.node_names();
        let mut candidates: Vec<NetworkCandidate> = Vec::new();
        for group in &groups {
            let mut per_node_domains: Vec<Vec<StateSet>> = Vec::new();
            for node in self.topology.nodes() {
                let pathways = group.get_node_pathways(node);
                let resolved = Disambiguation::resolve(
                    pathways.get_activators(),
                    pathways.get_inhibitors(),
                    &names,
                )?;
                let layerings = enumerate_layerings(
                    &resolved.activator_symbols(),
                    &resolved.inhibitor_symbols(),
                );
                let table = SymbolTable::new(&resolved);
                let domains: Vec<StateSet> = layerings
                    .iter()
                    .map(|layering| evaluate_domain(layering, &table, &self.space))
                    .collect();
                per_node_domains.push(domains);
            }
            let assembled: u128 = per_node_domains
                .iter()
                .map(|domains| domains.len() as u128)
                .product();
            let required = candidates.len() as u128 + assembled;
            if required > budget as u128 {
                return Err(InferenceError::CandidateBudgetExceeded { budget, required });
            }
            candidates.extend(assemble_networks(&per_node_domains));
        }
        info!("Assembled candidates: {}.", candidates.len());

        let deduplicated = deduplicate_networks(candidates);
        info!("Distinct networks: {}.", deduplicated.len());

        let retained = prefilter_by_attractors(
            deduplicated.into_iter().map(Some).collect(),
            attractors,
            &self.space,
        );
        if !attractors.is_empty() {
            info!("Networks admitting all attractors: {}.", retained.len());
        }
        Ok(retained)
    }
}

#[cfg(test)]
mod tests {
    use crate::{InferenceConfig, InferenceError, NcbfInference, RegulatoryTopology};
    use pretty_assertions::assert_eq;
    use std::convert::TryFrom;

    fn two_node_inference() -> NcbfInference {
        let topology = RegulatoryTopology::try_from("A -> B \n B -| A").unwrap();
        NcbfInference::new(topology)
    }

    #[test]
    fn test_two_node_example() {
        let inference = two_node_inference();
        let networks = inference.run(&InferenceConfig::default()).unwrap();
        // With a single regulator, both variants of an edge encode the same
        // function: B = A from the activation, A = !B from the inhibition.
        // All four polarity assignments therefore collapse into one network.
        assert_eq!(1, networks.len());
        // A's on-set is B=0, B's on-set is A=1.
        assert_eq!(vec![vec![0, 2], vec![2, 3]], networks[0].signature());
    }

    #[test]
    fn test_two_node_example_with_attractors() {
        let inference = two_node_inference();
        let config = InferenceConfig {
            attractors: vec!["00".to_string(), "11".to_string()],
            max_candidates: None,
        };
        // A = !B, B = A is a pure oscillator with no fixed point, so no
        // network survives any fixed-point requirement.
        let networks = inference.run(&config).unwrap();
        assert!(networks.is_empty());
    }

    #[test]
    fn test_unreachable_attractor_yields_nothing() {
        let inference = two_node_inference();
        let config = InferenceConfig {
            attractors: vec!["10".to_string(), "01".to_string(), "11".to_string()],
            max_candidates: None,
        };
        // No inferred network admits all three patterns at once.
        let networks = inference.run(&config).unwrap();
        assert!(networks.is_empty());
    }

    #[test]
    fn test_two_activators() {
        // Two activators of one node: the enumerated functions are exactly
        // A | B and A & B. In particular, every function is monotone
        // *increasing* in both declared activators; shapes like A | !B must
        // never appear.
        let topology = RegulatoryTopology::try_from("A -> C \n B -> C").unwrap();
        let inference = NcbfInference::new(topology);
        let networks = inference.run(&InferenceConfig::default()).unwrap();
        assert_eq!(2, networks.len());
        let signatures: Vec<Vec<Vec<usize>>> =
            networks.iter().map(|n| n.signature()).collect();
        // A and B are inputs (identity functions); C is A | B or A & B.
        let identities = vec![vec![4, 5, 6, 7], vec![2, 3, 6, 7]];
        let or_network = [identities.clone(), vec![vec![2, 3, 4, 5, 6, 7]]].concat();
        let and_network = [identities, vec![vec![6, 7]]].concat();
        assert!(signatures.contains(&or_network));
        assert!(signatures.contains(&and_network));
    }

    #[test]
    fn test_input_node_identity() {
        let topology = RegulatoryTopology::try_from("C -> B").unwrap();
        let inference = NcbfInference::new(topology);
        let networks = inference.run(&InferenceConfig::default()).unwrap();
        // C is an input node, its update function is always the identity,
        // and the single-regulator activation forces B = C.
        assert_eq!(1, networks.len());
        let b = inference.get_topology().find_node("B").unwrap();
        let c = inference.get_topology().find_node("C").unwrap();
        // On-sets of B and C (node index 1 of 2): states with C=1.
        assert_eq!(vec![1, 3], networks[0].get_domain(b).ones());
        assert_eq!(vec![1, 3], networks[0].get_domain(c).ones());

        // B = C, C = C has exactly the fixed points 00 and 11.
        let config = InferenceConfig {
            attractors: vec!["00".to_string(), "11".to_string()],
            max_candidates: None,
        };
        assert_eq!(1, inference.run(&config).unwrap().len());
    }

    #[test]
    fn test_contradictory_regulation() {
        // D both activates and inhibits C; the contradiction is resolved by a
        // synthetic symbol internally, but the emitted networks are keyed by
        // the true node identities. Two contradictory pathways over the same
        // regulator always cancel out into a constant function.
        let topology = RegulatoryTopology::try_from("D -> C \n D -| C").unwrap();
        let inference = NcbfInference::new(topology);
        let networks = inference.run(&InferenceConfig::default()).unwrap();
        assert_eq!(2, networks.len());
        let signatures: Vec<Vec<Vec<usize>>> =
            networks.iter().map(|n| n.signature()).collect();
        // C is constant true or constant false; D stays the identity.
        assert!(signatures.contains(&vec![vec![0, 1, 2, 3], vec![1, 3]]));
        assert!(signatures.contains(&vec![vec![], vec![1, 3]]));
        // Every network still has exactly the two real nodes.
        for network in &networks {
            assert_eq!(2, network.num_nodes());
        }
    }

    #[test]
    fn test_budget_exceeded() {
        let inference = two_node_inference();
        let result = inference.infer(&[], Some(1));
        match result {
            Err(InferenceError::CandidateBudgetExceeded { budget, required }) => {
                assert_eq!(1, budget);
                assert_eq!(4, required);
            }
            other => panic!("Expected budget error, got {:?}.", other),
        }
    }

    #[test]
    fn test_invalid_attractor_string() {
        let inference = two_node_inference();
        let config = InferenceConfig {
            attractors: vec!["0".to_string()],
            max_candidates: None,
        };
        assert!(inference.run(&config).is_err());
    }
}
