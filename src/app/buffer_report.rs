use crate::config::BufferConfig;
use crate::core::resource::{Element, ScopedResource};
use crate::utils::error::Result;
use serde::Serialize;

pub const DUPLICATE_MARKER: Element = 99;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BufferReport {
    pub capacity: usize,
    pub original_id: u64,
    pub original: Vec<Element>,
    pub duplicate_id: u64,
    pub duplicate: Vec<Element>,
}

impl BufferReport {
    pub fn summary(&self) -> String {
        format!(
            "Buffer #{} {:?}\nDuplicate #{} {:?}",
            self.original_id, self.original, self.duplicate_id, self.duplicate
        )
    }
}

/// 建立緩衝區、填值、深拷貝，並改寫拷貝的第一個元素
///
/// Both buffers are released when this returns, on success and on error.
pub fn run(config: &BufferConfig) -> Result<BufferReport> {
    let mut original = ScopedResource::create(config.capacity)?;
    original.fill_from(&config.values)?;

    let mut duplicate = original.duplicate()?;
    if duplicate.capacity() > 0 {
        duplicate.set_element_at(0, DUPLICATE_MARKER)?;
    }

    tracing::info!(
        "🧱 Buffer #{} duplicated into #{} (capacity {})",
        original.id(),
        duplicate.id(),
        config.capacity
    );

    Ok(BufferReport {
        capacity: config.capacity,
        original_id: original.id(),
        original: original.as_slice()?.to_vec(),
        duplicate_id: duplicate.id(),
        duplicate: duplicate.as_slice()?.to_vec(),
    })
}
