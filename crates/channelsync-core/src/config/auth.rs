//! Credential hashing configuration.

use serde::{Deserialize, Serialize};

/// Argon2id parameters used when hashing new passwords.
///
/// Existing credentials carry their own parameters in the PHC string, so
/// changing these only affects passwords set afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Memory cost in KiB.
    #[serde(default = "default_memory_kib")]
    pub argon2_memory_kib: u32,
    /// Number of passes.
    #[serde(default = "default_iterations")]
    pub argon2_iterations: u32,
    /// Degree of parallelism.
    #[serde(default = "default_parallelism")]
    pub argon2_parallelism: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            argon2_memory_kib: default_memory_kib(),
            argon2_iterations: default_iterations(),
            argon2_parallelism: default_parallelism(),
        }
    }
}

fn default_memory_kib() -> u32 {
    19 * 1024
}

fn default_iterations() -> u32 {
    2
}

fn default_parallelism() -> u32 {
    1
}
