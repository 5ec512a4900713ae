use crate::{
    Node, NodeId, NodeIdIterator, Polarity, Regulation, RegulationIterator, RegulatoryTopology,
    ID_REGEX,
};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;
use std::collections::HashSet;
use std::convert::TryFrom;
use std::ops::Index;

lazy_static! {
    /// Matches one regulation line, e.g. `A -> B` or `A -| B`.
    static ref REGULATION_REGEX: Regex =
        Regex::new(r"^(?P<regulator>[a-zA-Z0-9_]+)\s*-(?P<arrow>[>|])\s*(?P<target>[a-zA-Z0-9_]+)$")
            .unwrap();
}

/// Methods for safely constructing new instances of `RegulatoryTopology`.
impl RegulatoryTopology {
    /// Create a new `RegulatoryTopology` over the given node names with no
    /// regulations.
    ///
    /// The names are sorted into the canonical alphabetical order, which fixes
    /// the `NodeId` and state-bit position of every node.
    pub fn new(mut names: Vec<String>) -> RegulatoryTopology {
        names.sort();
        let mut node_to_index = HashMap::new();
        for (index, name) in names.iter().enumerate() {
            node_to_index.insert(name.clone(), NodeId::from_index(index));
        }
        RegulatoryTopology {
            regulations: Vec::new(),
            node_to_index,
            nodes: names.into_iter().map(|name| Node { name }).collect(),
        }
    }

    /// Add a new `Regulation` to this `RegulatoryTopology`.
    ///
    /// Returns `Err` if `regulator` or `target` are not valid nodes, or when
    /// the same signed regulation is already present. The same node pair *can*
    /// regulate with both polarities at once — such contradictions are later
    /// resolved by symbol disambiguation.
    pub fn add_regulation(
        &mut self,
        regulator: &str,
        target: &str,
        polarity: Polarity,
    ) -> Result<(), String> {
        let regulator = self.get_regulator(regulator)?;
        let target = self.get_target(target)?;
        self.assert_no_regulation(regulator, target, polarity)?;
        self.regulations.push(Regulation {
            regulator,
            target,
            polarity,
        });
        Ok(())
    }

    /// **(internal)** Utility method to safely obtain a regulator node (using an appropriate error message).
    fn get_regulator(&self, name: &str) -> Result<NodeId, String> {
        self.find_node(name)
            .ok_or(format!("Invalid regulation: Unknown regulator {}.", name))
    }

    /// **(internal)** Utility method to safely obtain a target node (using an appropriate error message).
    fn get_target(&self, name: &str) -> Result<NodeId, String> {
        self.find_node(name)
            .ok_or(format!("Invalid regulation: Unknown target {}.", name))
    }

    /// **(internal)** Utility method to ensure the same signed regulation is not present yet.
    fn assert_no_regulation(
        &self,
        regulator: NodeId,
        target: NodeId,
        polarity: Polarity,
    ) -> Result<(), String> {
        let duplicate = self
            .regulations
            .iter()
            .any(|r| r.regulator == regulator && r.target == target && r.polarity == polarity);
        if duplicate {
            Err(format!(
                "Invalid regulation: {} already regulates {} with the same polarity.",
                self.get_node(regulator),
                self.get_node(target)
            ))
        } else {
            Ok(())
        }
    }
}

/// Some basic utility methods for inspecting the `RegulatoryTopology`.
impl RegulatoryTopology {
    /// The number of nodes in this `RegulatoryTopology`.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Find a `NodeId` for the given name, or `None` if the node does not exist.
    pub fn find_node(&self, name: &str) -> Option<NodeId> {
        self.node_to_index.get(name).cloned()
    }

    /// Return a `Node` corresponding to the given `NodeId`.
    pub fn get_node(&self, id: NodeId) -> &Node {
        &self.nodes[id.to_index()]
    }

    /// Shorthand for `self.get_node(id).get_name()`.
    pub fn get_node_name(&self, id: NodeId) -> &String {
        &self.nodes[id.to_index()].name
    }

    /// Return a sorted list of nodes that activate the given `target` node.
    pub fn activators(&self, target: NodeId) -> Vec<NodeId> {
        self.regulators_with_polarity(target, Polarity::Activation)
    }

    /// Return a sorted list of nodes that inhibit the given `target` node.
    pub fn inhibitors(&self, target: NodeId) -> Vec<NodeId> {
        self.regulators_with_polarity(target, Polarity::Inhibition)
    }

    /// **(internal)** Sorted regulators of `target` with the given polarity.
    fn regulators_with_polarity(&self, target: NodeId, polarity: Polarity) -> Vec<NodeId> {
        let mut regulators: Vec<NodeId> = self
            .regulations
            .iter()
            .filter(|r| r.target == target && r.polarity == polarity)
            .map(|r| r.regulator)
            .collect();
        regulators.sort();
        regulators
    }

    /// True if the given node has no regulators at all.
    ///
    /// Input nodes are treated specially by pathway enumeration: they receive
    /// a fixed synthetic self-loop pathway pair.
    pub fn is_input_node(&self, node: NodeId) -> bool {
        !self.regulations.iter().any(|r| r.target == node)
    }

    /// Return an iterator over all node ids of this topology.
    pub fn nodes(&self) -> NodeIdIterator {
        (0..self.nodes.len()).map(NodeId::from_index)
    }

    /// The names of all nodes in canonical order.
    pub fn node_names(&self) -> Vec<String> {
        self.nodes.iter().map(|node| node.name.clone()).collect()
    }

    pub fn regulations(&self) -> RegulationIterator {
        self.regulations.iter()
    }

    /// A static check that allows to verify validity of a node name.
    pub fn is_valid_name(name: &str) -> bool {
        ID_REGEX.is_match(name)
    }
}

impl Regulation {
    pub fn get_regulator(&self) -> NodeId {
        self.regulator
    }

    pub fn get_target(&self) -> NodeId {
        self.target
    }

    pub fn get_polarity(&self) -> Polarity {
        self.polarity
    }
}

/// Allow indexing `RegulatoryTopology` using `NodeId` objects.
impl Index<NodeId> for RegulatoryTopology {
    type Output = Node;

    fn index(&self, index: NodeId) -> &Self::Output {
        self.get_node(index)
    }
}

impl TryFrom<&str> for RegulatoryTopology {
    type Error = String;

    /// Parse a topology from the arrow format: one regulation per line,
    /// `->` for activation and `-|` for inhibition, `#` starts a comment.
    ///
    /// The node set is the set of all names mentioned by some regulation.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        // Trim lines and remove comments.
        let lines = value.lines().filter_map(|l| {
            let line = l.trim();
            if line.is_empty() || line.starts_with('#') {
                None
            } else {
                Some(line)
            }
        });

        let mut regulations = Vec::new();
        for line in lines {
            let captures = REGULATION_REGEX
                .captures(line)
                .ok_or(format!("String \"{}\" is not a valid regulation.", line))?;
            let polarity = match &captures["arrow"] {
                ">" => Polarity::Activation,
                _ => Polarity::Inhibition,
            };
            regulations.push((
                captures["regulator"].to_string(),
                captures["target"].to_string(),
                polarity,
            ));
        }

        let mut names = HashSet::new();
        for (regulator, target, _) in &regulations {
            names.insert(regulator.clone());
            names.insert(target.clone());
        }
        let names: Vec<String> = names.into_iter().collect();

        let mut topology = RegulatoryTopology::new(names);
        for (regulator, target, polarity) in regulations {
            topology.add_regulation(&regulator, &target, polarity)?;
        }
        Ok(topology)
    }
}
