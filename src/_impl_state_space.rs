use crate::{NodeId, State, StateIterator, StateSet, StateSpace};
use std::fmt::{Display, Error, Formatter};

impl From<usize> for State {
    fn from(val: usize) -> Self {
        State(val)
    }
}

impl From<State> for usize {
    fn from(value: State) -> Self {
        value.0
    }
}

impl State {
    /// The raw index of this state within its `StateSpace`.
    pub fn to_index(self) -> usize {
        self.0
    }
}

impl StateSpace {
    /// Create the state space of a network with `num_nodes` nodes.
    ///
    /// The space has `2^num_nodes` states, so `num_nodes` has to stay well
    /// below the pointer width. Combinatorial explosion of the inference makes
    /// anything beyond a few dozen nodes intractable anyway.
    pub fn new(num_nodes: usize) -> StateSpace {
        assert!(
            num_nodes < usize::BITS as usize,
            "State space of {} nodes cannot be represented explicitly.",
            num_nodes
        );
        StateSpace { num_nodes }
    }

    /// The number of nodes this space is defined over.
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// The number of states in this space, i.e. `2^num_nodes`.
    pub fn num_states(&self) -> usize {
        1 << self.num_nodes
    }

    /// An iterator over all states of this space in ascending index order.
    pub fn states(&self) -> StateIterator {
        (0..self.num_states()).map(State)
    }

    /// The value of the bit of `node` in the given `state`.
    ///
    /// Node with canonical index zero is the *most significant* bit, i.e. the
    /// leftmost character of the binary string rendering.
    pub fn get_bit(&self, state: State, node: NodeId) -> bool {
        let position = self.num_nodes - 1 - node.to_index();
        (state.to_index() >> position) & 1 == 1
    }

    /// Parse a state from its binary string rendering.
    ///
    /// Returns an error if the string has the wrong length or contains
    /// anything except `0` and `1`.
    pub fn parse_state(&self, value: &str) -> Result<State, String> {
        if value.len() != self.num_nodes {
            return Err(format!(
                "Invalid state \"{}\": expected {} binary digits.",
                value, self.num_nodes
            ));
        }
        // `from_str_radix` also accepts sign prefixes, so check the characters
        // explicitly.
        if !value.chars().all(|c| c == '0' || c == '1') {
            return Err(format!("Invalid state \"{}\": not a binary string.", value));
        }
        usize::from_str_radix(value, 2)
            .map(State)
            .map_err(|_| format!("Invalid state \"{}\": not a binary string.", value))
    }

    /// Render a state as a binary string in canonical node order.
    pub fn display_state(&self, state: State) -> String {
        format!("{:0width$b}", state.to_index(), width = self.num_nodes)
    }

    /// Create an empty subset of this space.
    pub fn empty_set(&self) -> StateSet {
        StateSet::empty(self.num_states())
    }

    /// Create the subset containing every state of this space.
    pub fn full_set(&self) -> StateSet {
        let mut set = StateSet::empty(self.num_states());
        for state in self.states() {
            set.insert(state);
        }
        set
    }
}

impl Display for StateSpace {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "StateSpace({} nodes, {} states)", self.num_nodes, self.num_states())
    }
}
