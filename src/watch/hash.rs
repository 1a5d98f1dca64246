// src/watch/hash.rs

use blake3::Hasher;
use tracing::trace;

use crate::types::Task;

/// Hex blake3 digest of raw snapshot bytes.
pub fn digest_bytes(bytes: &[u8]) -> String {
    let hash = blake3::hash(bytes).to_hex().to_string();
    trace!(hash = %hash, len = bytes.len(), "computed snapshot digest");
    hash
}

/// Digest of a task list's layout-relevant content.
///
/// Used for sources that hand over tasks rather than bytes. Fields are
/// length-prefixed so `["ab"]` and `["a", "b"]` hash differently.
pub fn digest_tasks(tasks: &[Task]) -> String {
    let mut hasher = Hasher::new();

    let mut field = |s: &str| {
        hasher.update(&(s.len() as u64).to_le_bytes());
        hasher.update(s.as_bytes());
    };

    for task in tasks {
        field(&task.id);
        field(&task.title);
        field(&task.dependencies.len().to_string());
        for dep in &task.dependencies {
            field(dep);
        }
    }

    hasher.finalize().to_hex().to_string()
}
