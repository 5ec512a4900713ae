use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;
use std::iter::Map;
use std::ops::Range;
use thiserror::Error;

/// **(internal)** Prefiltering of inferred networks by declared attractor states.
mod _impl_attractor_prefilter;
/// **(internal)** Rendering of inferred networks into `.bnet`-style sum-of-products strings.
mod _impl_bnet_export;
/// **(internal)** Recursive computation of the on-set of one layer structure.
mod _impl_domain_evaluator;
/// **(internal)** The `NcbfInference` pipeline driver.
mod _impl_inference;
/// **(internal)** Recursive enumeration of nested canalizing layer structures.
mod _impl_layer_partitioner;
/// **(internal)** Assembly and deduplication of full network candidates.
mod _impl_network_assembler;
/// **(internal)** Utility methods for `NodeId`.
mod _impl_node_id;
/// **(internal)** Utility methods for `Pathway` and `PathwayGroup`.
mod _impl_pathway;
/// **(internal)** Exhaustive enumeration of pathway groups from a topology.
mod _impl_pathway_enumerator;
/// **(internal)** Utility methods for `RegulatoryTopology`, including the
/// arrow-format parser.
mod _impl_regulatory_topology;
/// **(internal)** Utility methods for `StateSet`.
mod _impl_state_set;
/// **(internal)** Utility methods for `State` and `StateSpace`.
mod _impl_state_space;
/// **(internal)** Pure renaming of clashing regulator symbols.
mod _impl_symbol_disambiguation;

pub use _impl_attractor_prefilter::prefilter_by_attractors;
pub use _impl_bnet_export::on_set_to_expression;
pub use _impl_domain_evaluator::{evaluate_domain, SymbolTable};
pub use _impl_layer_partitioner::enumerate_layerings;
pub use _impl_network_assembler::{assemble_networks, deduplicate_networks};

lazy_static! {
    /// A regex which matches all valid node identifiers.
    static ref ID_REGEX: Regex = Regex::new(r"^[a-zA-Z0-9_]+$").unwrap();
}

/// A type-safe index of a node inside a `RegulatoryTopology`.
///
/// The index is the rank of the node in the canonical (alphabetical) node order
/// and therefore also determines the bit position of the node in every `State`.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct NodeId(usize);

/// A node of a `RegulatoryTopology`.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Node {
    name: String,
}

/// Possible monotonous effects of a regulation: activation or inhibition.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Polarity {
    Activation,
    Inhibition,
}

/// A signed regulation between two nodes of a `RegulatoryTopology`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Regulation {
    regulator: NodeId,
    target: NodeId,
    polarity: Polarity,
}

/// A signed regulatory topology: nodes in a fixed canonical (alphabetical) order
/// together with the declared activations and inhibitions between them.
///
/// The topology is the *input* of the inference. It fixes which node regulates
/// which, but not the concrete update functions — those are enumerated by
/// `NcbfInference` within the class of nested canalizing Boolean functions.
///
/// A topology can be parsed from a simple string format where each line is
/// either a comment (starting with `#`) or a regulation using the arrows
/// `->` (activation) and `-|` (inhibition):
///
/// ```rg
///  # Regulators of b
///  a -> b
///  b -| a
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegulatoryTopology {
    nodes: Vec<Node>,
    regulations: Vec<Regulation>,
    node_to_index: HashMap<String, NodeId>,
}

/// One Boolean state over all nodes of a topology, stored as the integer value
/// of its binary string rendering.
///
/// The bit of node `i` (out of `n`) sits at position `n - 1 - i`, so the node
/// with canonical index zero is the *leftmost* character of the rendered
/// string, matching the convention used by attractor state strings.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct State(usize);

/// The universe of all `2^n` Boolean states over `n` nodes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct StateSpace {
    num_nodes: usize,
}

/// A subset of the states of one `StateSpace`, backed by an explicit bit vector.
///
/// On-sets of inferred update functions are represented as `StateSet`s: the set
/// of states in which the function evaluates to `1`.
#[derive(Clone, PartialEq)]
pub struct StateSet {
    capacity: usize,
    values: bitvector::BitVector,
}

/// One hypothesized regulatory pathway: a regulator (`antecedent`) together
/// with a concrete canalizing/canalized polarity choice towards its target
/// (`consequent`).
///
/// By convention, an *activator* pathway canalizes the output to `1` and an
/// *inhibitor* pathway to `0`. The `domain` is the set of states in which the
/// antecedent bit equals the canalizing value of the pathway.
///
/// The `antecedent` is a *symbol*, not a `NodeId`: it starts out as the
/// regulator's name, but symbol disambiguation may replace it with a fresh
/// synthetic symbol while the pathway participates in layer enumeration.
#[derive(Clone, Debug, PartialEq)]
pub struct Pathway {
    antecedent: String,
    consequent: NodeId,
    activator: bool,
    domain: StateSet,
}

/// The activator and inhibitor pathways targeting one node within one
/// `PathwayGroup`.
#[derive(Clone, Debug, PartialEq)]
pub struct NodePathways {
    activators: Vec<Pathway>,
    inhibitors: Vec<Pathway>,
}

/// One global assignment of a canalizing/canalized polarity choice to every
/// regulation of the topology, organized per target node.
///
/// Input nodes (nodes with no regulators) carry a fixed synthetic self-loop
/// activator/inhibitor pathway pair which is identical in every group.
#[derive(Clone, Debug, PartialEq)]
pub struct PathwayGroup {
    node_pathways: Vec<NodePathways>,
}

/// An ordered nesting of canalizing layers, outermost first. Every layer is a
/// set of regulator symbols drawn from one polarity pool, and consecutive
/// layers alternate pools.
pub type LayerStructure = Vec<Vec<String>>;

/// One fully assembled Boolean network: an on-set per node, in canonical node
/// order.
#[derive(Clone, Debug, PartialEq)]
pub struct NetworkCandidate {
    domains: Vec<StateSet>,
}

/// The result of disambiguating the regulator symbols of one node: renamed
/// pathway copies plus the mapping needed to restore original names.
#[derive(Clone, Debug)]
pub struct Disambiguation {
    activators: Vec<Pathway>,
    inhibitors: Vec<Pathway>,
    /// Maps every freshly minted symbol back to the original node name.
    renames: HashMap<String, String>,
}

/// Configuration of one `NcbfInference` run.
#[derive(Clone, Debug, Default)]
pub struct InferenceConfig {
    /// Attractor states (binary strings in canonical node order) that every
    /// retained network must admit. An empty list disables prefiltering.
    pub attractors: Vec<String>,
    /// Fail-fast budget on the number of enumerated pathway groups and
    /// assembled network candidates. `None` means unbounded.
    pub max_candidates: Option<usize>,
}

/// The driver of the inference pipeline: enumerates every nested canalizing
/// Boolean network consistent with a `RegulatoryTopology` and filters the
/// results by declared attractor states.
#[derive(Clone, Debug)]
pub struct NcbfInference {
    topology: RegulatoryTopology,
    space: StateSpace,
}

/// Failures of the inference pipeline that a caller has to plan capacity for.
///
/// Errors caused by malformed *inputs* (unknown node names, invalid attractor
/// strings, ...) are reported as `Result<_, String>` by the respective
/// constructors instead.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum InferenceError {
    /// The pool of fresh single-character symbols ran out while renaming
    /// clashing regulators. Can only happen for pathological numbers of
    /// repeated or contradictory regulations.
    #[error("fresh symbol pool exhausted while disambiguating regulators")]
    SymbolPoolExhausted,
    /// The enumeration would exceed the configured candidate budget. The
    /// pipeline aborts before materializing anything beyond the budget.
    #[error("candidate budget exceeded: budget {budget}, required at least {required}")]
    CandidateBudgetExceeded { budget: usize, required: u128 },
}

/// An iterator over all `NodeId`s of a `RegulatoryTopology`.
pub type NodeIdIterator = Map<Range<usize>, fn(usize) -> NodeId>;

/// An iterator over all `State`s of a `StateSpace`.
pub type StateIterator = Map<Range<usize>, fn(usize) -> State>;

/// An iterator over the `Regulation`s of a `RegulatoryTopology`.
pub type RegulationIterator<'a> = std::slice::Iter<'a, Regulation>;
