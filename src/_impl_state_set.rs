use crate::{State, StateSet};
use std::fmt::{Debug, Display, Formatter};

/* The underlying bitvector::BitVector does not implement Eq, but we want to. */
impl Eq for StateSet {}

impl StateSet {
    /// Create an empty `StateSet` with the given fixed capacity.
    pub fn empty(capacity: usize) -> StateSet {
        StateSet {
            capacity,
            values: bitvector::BitVector::new(capacity),
        }
    }

    /// The number of states this set can hold, i.e. the size of its space.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The number of states actually present in this set.
    pub fn count_states(&self) -> usize {
        self.values.iter().count()
    }

    /// True if this set contains no states.
    pub fn is_empty(&self) -> bool {
        self.count_states() == 0
    }

    /// True if this set contains every state of its space.
    pub fn is_full(&self) -> bool {
        self.count_states() == self.capacity
    }

    /// Add the given state to this set.
    pub fn insert(&mut self, state: State) {
        self.values.insert(state.to_index());
    }

    /// Remove the given state from this set.
    pub fn remove(&mut self, state: State) {
        self.values.remove(state.to_index());
    }

    /// Test whether the given state belongs to this set.
    pub fn contains(&self, state: State) -> bool {
        self.values.contains(state.to_index())
    }

    /// The states of this set in ascending index order.
    pub fn states(&self) -> Vec<State> {
        self.ones().into_iter().map(State::from).collect()
    }

    /// The raw state indices of this set in ascending order. This is the
    /// canonical serialization used when computing network signatures.
    pub fn ones(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = self.values.iter().collect();
        indices.sort_unstable();
        indices
    }

    /// The intersection of this set with `other`.
    pub fn intersect(&self, other: &StateSet) -> StateSet {
        let mut result = StateSet::empty(self.capacity);
        for index in 0..self.capacity {
            if self.values.contains(index) && other.values.contains(index) {
                result.values.insert(index);
            }
        }
        result
    }

    /// The union of this set with `other`.
    pub fn union(&self, other: &StateSet) -> StateSet {
        let mut result = StateSet::empty(self.capacity);
        for index in 0..self.capacity {
            if self.values.contains(index) || other.values.contains(index) {
                result.values.insert(index);
            }
        }
        result
    }

    /// The states of this set that are not in `other`.
    pub fn minus(&self, other: &StateSet) -> StateSet {
        let mut result = StateSet::empty(self.capacity);
        for index in 0..self.capacity {
            if self.values.contains(index) && !other.values.contains(index) {
                result.values.insert(index);
            }
        }
        result
    }

    /// The complement of this set within its space.
    pub fn complement(&self) -> StateSet {
        let mut result = StateSet::empty(self.capacity);
        for index in 0..self.capacity {
            if !self.values.contains(index) {
                result.values.insert(index);
            }
        }
        result
    }
}

impl Display for StateSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "StateSet({})[", self.capacity)?;
        let mut first = true;
        for index in self.ones() {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{}", index)?;
            first = false;
        }
        write!(f, "]")
    }
}

impl Debug for StateSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use crate::{State, StateSet};

    #[test]
    fn test_state_set_operations() {
        let mut a = StateSet::empty(4);
        a.insert(State::from(0));
        a.insert(State::from(2));
        let mut b = StateSet::empty(4);
        b.insert(State::from(2));
        b.insert(State::from(3));

        assert_eq!(vec![0, 2], a.ones());
        assert_eq!(vec![2], a.intersect(&b).ones());
        assert_eq!(vec![0, 2, 3], a.union(&b).ones());
        assert_eq!(vec![0], a.minus(&b).ones());
        assert_eq!(vec![1, 3], a.complement().ones());
        assert!(a.contains(State::from(2)));
        assert!(!a.contains(State::from(1)));

        a.remove(State::from(2));
        assert_eq!(vec![0], a.ones());
        assert_eq!(1, a.count_states());
        assert!(!a.is_empty());
        assert!(!a.is_full());
    }

    #[test]
    fn test_state_set_complement_involution() {
        let mut set = StateSet::empty(8);
        set.insert(State::from(1));
        set.insert(State::from(5));
        assert_eq!(set, set.complement().complement());
    }
}
