use crate::nfa::StateId;

/// An insertion-ordered set of state IDs with constant time `insert`,
/// `contains` and `clear`.
///
/// The capacity is the number of states in the NFA being simulated, so every
/// valid `StateId` fits. Duplicates are rejected by ID, which is what keeps a
/// simulation step from expanding the same state twice when branches of the
/// automaton reconverge.
#[derive(Debug, Clone)]
pub struct StateSet {
    dense: Vec<StateId>,
    sparse: Vec<usize>,
}

impl StateSet {
    pub fn new(capacity: usize) -> StateSet {
        StateSet { dense: Vec::with_capacity(capacity), sparse: vec![0; capacity] }
    }

    pub fn len(&self) -> usize {
        self.dense.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dense.is_empty()
    }

    /// Returns `true` if `id` was not already present.
    pub fn insert(&mut self, id: StateId) -> bool {
        if self.contains(id) {
            return false;
        }
        self.sparse[id] = self.dense.len();
        self.dense.push(id);
        true
    }

    pub fn contains(&self, id: StateId) -> bool {
        match self.sparse.get(id) {
            Some(&i) => self.dense.get(i) == Some(&id),
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.dense.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StateId> {
        self.dense.iter()
    }
}

impl<'a> IntoIterator for &'a StateSet {
    type Item = &'a StateId;
    type IntoIter = std::slice::Iter<'a, StateId>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_dedups_by_id() {
        let mut set = StateSet::new(4);
        assert!(set.insert(2));
        assert!(set.insert(0));
        assert!(!set.insert(2));
        assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![2, 0]);
        assert!(set.contains(0));
        assert!(!set.contains(1));
        assert!(!set.contains(10));
    }

    #[test]
    fn clear_forgets_stale_entries() {
        let mut set = StateSet::new(3);
        set.insert(1);
        set.insert(2);
        set.clear();
        assert!(set.is_empty());
        assert!(!set.contains(1));
        assert!(set.insert(2));
        assert!(!set.contains(1));
        assert_eq!(set.len(), 1);
    }
}
