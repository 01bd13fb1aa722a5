// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Settings store interface.
//!
//! A locker persists boolean and integer options between sessions. The
//! solving core only reads from it once, when a [`SolverConfig`](super::SolverConfig)
//! snapshot is built, and writes to it when an option is changed explicitly.

use std::collections::HashMap;

pub trait Locker {
    /// Stored value for `key`, or `default` if the key was never set.
    fn get_bool(&self, key: &str, default: bool) -> bool;

    /// Store `value` under `key`, returning the stored value.
    fn set_bool(&mut self, key: &str, value: bool) -> bool;

    fn get_int(&self, key: &str, default: i64) -> i64;

    fn set_int(&mut self, key: &str, value: i64) -> i64;
}

/// Locker backed by in-memory maps. Nothing survives the process.
#[derive(Debug, Default, Clone)]
pub struct MemoryLocker {
    bools: HashMap<String, bool>,
    ints: HashMap<String, i64>,
}

impl MemoryLocker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys that have been set.
    pub fn len(&self) -> usize {
        self.bools.len() + self.ints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Locker for MemoryLocker {
    fn get_bool(&self, key: &str, default: bool) -> bool {
        self.bools.get(key).copied().unwrap_or(default)
    }

    fn set_bool(&mut self, key: &str, value: bool) -> bool {
        self.bools.insert(key.to_string(), value);
        value
    }

    fn get_int(&self, key: &str, default: i64) -> i64 {
        self.ints.get(key).copied().unwrap_or(default)
    }

    fn set_int(&mut self, key: &str, value: i64) -> i64 {
        self.ints.insert(key.to_string(), value);
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_until_set() {
        let mut locker = MemoryLocker::new();
        assert!(locker.get_bool("okRules", true));
        assert_eq!(locker.get_int("speed", 3), 3);

        assert!(!locker.set_bool("okRules", false));
        locker.set_int("speed", 7);
        assert!(!locker.get_bool("okRules", true));
        assert_eq!(locker.get_int("speed", 3), 7);
        assert_eq!(locker.len(), 2);
    }
}
