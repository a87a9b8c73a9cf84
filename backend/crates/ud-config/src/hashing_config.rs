use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_HASHING_ITERATIONS, DEFAULT_HASHING_MEMORY_KIB,
    DEFAULT_HASHING_PARALLELISM, MAX_HASHING_MEMORY_KIB, MAX_HASHING_PARALLELISM,
};

use serde::Deserialize;

/// Argon2id work factor for credential hashing
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HashingConfig {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for HashingConfig {
    fn default() -> Self {
        Self {
            memory_kib: DEFAULT_HASHING_MEMORY_KIB,
            iterations: DEFAULT_HASHING_ITERATIONS,
            parallelism: DEFAULT_HASHING_PARALLELISM,
        }
    }
}

impl HashingConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.iterations == 0 {
            return Err(ConfigError::hashing("hashing.iterations must be >= 1"));
        }

        if self.parallelism == 0 || self.parallelism > MAX_HASHING_PARALLELISM {
            return Err(ConfigError::hashing(format!(
                "hashing.parallelism must be 1-{}, got {}",
                MAX_HASHING_PARALLELISM, self.parallelism
            )));
        }

        // Argon2 needs at least 8 KiB per lane
        let min_memory = 8 * self.parallelism;
        if self.memory_kib < min_memory || self.memory_kib > MAX_HASHING_MEMORY_KIB {
            return Err(ConfigError::hashing(format!(
                "hashing.memory_kib must be {}-{}, got {}",
                min_memory, MAX_HASHING_MEMORY_KIB, self.memory_kib
            )));
        }

        Ok(())
    }
}
