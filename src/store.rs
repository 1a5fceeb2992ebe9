//! In-memory saved query store / 内存中的已保存查询存储
//!
//! Entries live until deleted or the process exits. Ids start at 1, only ever
//! increase and are never handed out twice.

use parking_lot::RwLock;

use crate::models::{NewSavedDork, SavedDork};

struct StoreInner {
    dorks: Vec<SavedDork>,
    next_id: u64,
}

/// Saved query store / 已保存查询存储
pub struct DorkStore {
    inner: RwLock<StoreInner>,
}

impl DorkStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                dorks: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Assign the next id and append / 分配ID并追加
    pub fn add(&self, entry: NewSavedDork) -> SavedDork {
        let mut inner = self.inner.write();
        let dork = SavedDork {
            id: inner.next_id,
            name: entry.name,
            query: entry.query,
            description: entry.description,
        };
        inner.next_id += 1;
        inner.dorks.push(dork.clone());
        dork
    }

    /// Snapshot of all entries in insertion order / 按插入顺序返回快照
    pub fn list(&self) -> Vec<SavedDork> {
        self.inner.read().dorks.clone()
    }

    /// Remove by id, returns false when nothing matched / 按ID删除
    pub fn delete_by_id(&self, id: u64) -> bool {
        let mut inner = self.inner.write();
        match inner.dorks.iter().position(|d| d.id == id) {
            Some(index) => {
                inner.dorks.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.inner.read().dorks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for DorkStore {
    fn default() -> Self {
        Self::new()
    }
}
