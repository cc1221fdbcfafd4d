use std::collections::HashMap;

/// The planet each ship last committed to, by id. Entries for ships that
/// have since died are never looked up again and are left in place.
#[derive(Debug, Default, Clone)]
pub struct TargetMemory {
    targets: HashMap<i32, i32>,
}

impl TargetMemory {
    pub fn new() -> TargetMemory {
        TargetMemory::default()
    }

    pub fn recall(&self, ship_id: i32) -> Option<i32> {
        self.targets.get(&ship_id).copied()
    }

    pub fn remember(&mut self, ship_id: i32, planet_id: i32) {
        self.targets.insert(ship_id, planet_id);
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}
