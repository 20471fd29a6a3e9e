// Copyright (C) 2020-2026 Andy Kurnia.

// FNV-1a. Canonical keys are short lowercase strings, SipHash is overkill.

pub struct KeyHasher(u64);

impl std::hash::Hasher for KeyHasher {
    #[inline(always)]
    fn finish(&self) -> u64 {
        self.0
    }

    #[inline(always)]
    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.0 = (self.0 ^ b as u64).wrapping_mul(0x100000001b3);
        }
    }
}

impl Default for KeyHasher {
    #[inline(always)]
    fn default() -> KeyHasher {
        KeyHasher(0xcbf29ce484222325)
    }
}

pub type MyHasherDefault = std::hash::BuildHasherDefault<KeyHasher>;
pub type MyHashMap<K, V> = std::collections::HashMap<K, V, MyHasherDefault>;
pub type MyHashSet<T> = std::collections::HashSet<T, MyHasherDefault>;
