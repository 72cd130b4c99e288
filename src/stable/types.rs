//! Per-slot-type working state.

/// A held proposal: candidate position in the input slice plus merit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Holding {
    pub candidate: usize,
    pub merit: f64,
}

/// Proposals currently held by one slot type, weakest first.
///
/// Equal merits keep arrival order, so the earliest of the weakest is
/// evicted first.
#[derive(Debug, Clone)]
pub(crate) struct AcceptedSet {
    capacity: usize,
    members: Vec<Holding>,
}

impl AcceptedSet {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            capacity,
            members: Vec::with_capacity(capacity.min(64)),
        }
    }

    pub(crate) fn has_room(&self) -> bool {
        self.members.len() < self.capacity
    }

    pub(crate) fn len(&self) -> usize {
        self.members.len()
    }

    pub(crate) fn weakest(&self) -> Option<&Holding> {
        self.members.first()
    }

    /// Inserts after every member with merit less than or equal to the new one.
    pub(crate) fn admit(&mut self, holding: Holding) {
        let at = self.members.partition_point(|m| m.merit <= holding.merit);
        self.members.insert(at, holding);
    }

    /// Evicts the weakest member and admits `holding`.
    pub(crate) fn replace_weakest(&mut self, holding: Holding) -> Option<Holding> {
        if self.members.is_empty() {
            return None;
        }
        let evicted = self.members.remove(0);
        self.admit(holding);
        Some(evicted)
    }

    pub(crate) fn members(&self) -> &[Holding] {
        &self.members
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn h(candidate: usize, merit: f64) -> Holding {
        Holding { candidate, merit }
    }

    #[test]
    fn test_admit_keeps_ascending_merit() {
        let mut set = AcceptedSet::new(4);
        set.admit(h(0, 8.0));
        set.admit(h(1, 6.0));
        set.admit(h(2, 9.5));
        set.admit(h(3, 7.0));

        let order: Vec<usize> = set.members().iter().map(|m| m.candidate).collect();
        assert_eq!(order, vec![1, 3, 0, 2]);
        assert!(!set.has_room());
    }

    #[test]
    fn test_equal_merit_keeps_arrival_order() {
        let mut set = AcceptedSet::new(3);
        set.admit(h(0, 7.0));
        set.admit(h(1, 7.0));
        set.admit(h(2, 6.0));

        let order: Vec<usize> = set.members().iter().map(|m| m.candidate).collect();
        assert_eq!(order, vec![2, 0, 1]);
    }

    #[test]
    fn test_replace_weakest() {
        let mut set = AcceptedSet::new(2);
        set.admit(h(0, 7.0));
        set.admit(h(1, 7.0));

        let evicted = set.replace_weakest(h(2, 8.0));

        assert_eq!(evicted, Some(h(0, 7.0)));
        assert_eq!(set.weakest(), Some(&h(1, 7.0)));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_replace_weakest_on_empty() {
        let mut set = AcceptedSet::new(0);
        assert_eq!(set.replace_weakest(h(0, 1.0)), None);
        assert!(!set.has_room());
    }
}
