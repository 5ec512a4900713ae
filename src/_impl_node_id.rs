use crate::{Node, NodeId};
use std::fmt::{Display, Error, Formatter};

impl NodeId {
    /// The canonical rank of this node, which is also its bit position index.
    pub fn to_index(self) -> usize {
        self.0
    }

    /// **(internal)** Construct a `NodeId` from a raw index. Only used by code
    /// which already verified the index is valid.
    pub(crate) fn from_index(index: usize) -> NodeId {
        NodeId(index)
    }
}

impl From<usize> for NodeId {
    fn from(val: usize) -> Self {
        NodeId(val)
    }
}

impl From<NodeId> for usize {
    fn from(value: NodeId) -> Self {
        value.0
    }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "NcbfNode({})", self.0)
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "{}", self.name)
    }
}

impl Node {
    /// Human-readable name of this node.
    pub fn get_name(&self) -> &String {
        &self.name
    }
}
