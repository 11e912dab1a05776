//! Fixed-capacity buffer that owns its storage exclusively.
//!
//! Storage is acquired in [`ScopedResource::create`] and released exactly once,
//! either by an explicit [`Release::release`] or when the value is dropped.
//! Copies are always deep: [`ScopedResource::duplicate`] allocates new storage.

use crate::core::counter::{self, RESOURCE_IDS};
use crate::domain::ports::Release;
use crate::utils::error::{KitError, Result};

pub type Element = i32;

#[derive(Debug)]
pub struct ScopedResource {
    id: u64,
    capacity: usize,
    // Some(..) 等同於 isValid
    contents: Option<Vec<Element>>,
}

impl ScopedResource {
    /// 配置 `capacity` 個歸零的元素
    pub fn create(capacity: usize) -> Result<Self> {
        let contents = allocate(capacity)?;
        Ok(Self::adopt(capacity, contents))
    }

    /// Deep copy with new backing storage and a fresh id.
    pub fn duplicate(&self) -> Result<Self> {
        let source = self.contents("duplicate")?;
        let mut contents = allocate(self.capacity)?;
        contents.copy_from_slice(source);

        let copy = Self::adopt(self.capacity, contents);
        tracing::debug!("Duplicated resource #{} into #{}", self.id, copy.id);
        Ok(copy)
    }

    pub fn element_at(&self, index: usize) -> Result<Element> {
        let contents = self.contents("element_at")?;
        contents
            .get(index)
            .copied()
            .ok_or(KitError::IndexOutOfRangeError {
                index,
                capacity: self.capacity,
            })
    }

    pub fn set_element_at(&mut self, index: usize, value: Element) -> Result<()> {
        let capacity = self.capacity;
        let contents = self.contents_mut("set_element_at")?;
        let slot = contents
            .get_mut(index)
            .ok_or(KitError::IndexOutOfRangeError { index, capacity })?;
        *slot = value;
        Ok(())
    }

    /// Writes `values[i]` to index `i`; nothing is written if `values` does not fit.
    pub fn fill_from(&mut self, values: &[Element]) -> Result<()> {
        let capacity = self.capacity;
        let contents = self.contents_mut("fill_from")?;
        if values.len() > capacity {
            return Err(KitError::IndexOutOfRangeError {
                index: values.len() - 1,
                capacity,
            });
        }
        contents[..values.len()].copy_from_slice(values);
        Ok(())
    }

    pub fn as_slice(&self) -> Result<&[Element]> {
        self.contents("as_slice")
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_valid(&self) -> bool {
        self.contents.is_some()
    }

    fn adopt(capacity: usize, contents: Vec<Element>) -> Self {
        let id = RESOURCE_IDS.next();
        counter::resource_acquired();
        tracing::debug!("Acquired resource #{} with capacity {}", id, capacity);
        Self {
            id,
            capacity,
            contents: Some(contents),
        }
    }

    fn contents(&self, operation: &str) -> Result<&[Element]> {
        let id = self.id;
        self.contents
            .as_deref()
            .ok_or_else(|| use_after_release(id, operation))
    }

    fn contents_mut(&mut self, operation: &str) -> Result<&mut [Element]> {
        let id = self.id;
        self.contents
            .as_deref_mut()
            .ok_or_else(|| use_after_release(id, operation))
    }
}

impl Release for ScopedResource {
    fn release(&mut self) -> bool {
        match self.contents.take() {
            Some(_) => {
                counter::resource_released();
                tracing::debug!("Released resource #{}", self.id);
                true
            }
            None => false,
        }
    }

    fn is_released(&self) -> bool {
        self.contents.is_none()
    }
}

impl Drop for ScopedResource {
    fn drop(&mut self) {
        self.release();
    }
}

fn use_after_release(id: u64, operation: &str) -> KitError {
    tracing::warn!("{} on released resource #{}", operation, id);
    KitError::invalid_state(operation)
}

fn allocate(capacity: usize) -> Result<Vec<Element>> {
    let mut contents = Vec::new();
    contents
        .try_reserve_exact(capacity)
        .map_err(|e| KitError::AllocationError {
            capacity,
            reason: e.to_string(),
        })?;
    contents.resize(capacity, 0);
    Ok(contents)
}
