use std::collections::VecDeque;

/// Selection list bounded by an optional cap
///
/// Picking beyond the cap evicts the oldest pick rather than rejecting the
/// new one. Re-selecting an already-selected id has no effect.
#[derive(Debug, Clone)]
pub struct BoundedSelection {
    cap: Option<usize>,
    picks: VecDeque<String>,
}

impl BoundedSelection {
    pub fn new(cap: Option<usize>) -> BoundedSelection {
        BoundedSelection {
            cap,
            picks: VecDeque::new(),
        }
    }

    /// Add an id to the selection, evicting the oldest pick past the cap
    pub fn select(&mut self, id: impl Into<String>) {
        let id = id.into();
        if self.picks.contains(&id) {
            return;
        }

        self.picks.push_back(id);
        if let Some(cap) = self.cap {
            while self.picks.len() > cap {
                self.picks.pop_front();
            }
        }
    }

    /// Remove an id from the selection
    pub fn deselect(&mut self, id: &str) {
        self.picks.retain(|pick| pick != id);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.picks.iter().any(|pick| pick == id)
    }

    pub fn len(&self) -> usize {
        self.picks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.picks.into_iter().collect()
    }

    /// Run a batch of picks through the cap in one go
    pub fn apply(ids: Vec<String>, cap: Option<usize>) -> Vec<String> {
        let mut selection = BoundedSelection::new(cap);
        for id in ids {
            selection.select(id);
        }
        selection.into_vec()
    }
}
