//! 内容存储 - 基础设施层
//!
//! 键值形式的字符串存储，值是不透明的 HTML 或 JSON 文本

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{AppError, AppResult};

/// 键值存储
pub trait ContentStore {
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;

    /// 删除键，键不存在时不报错
    fn remove(&mut self, key: &str) -> AppResult<()>;

    /// 批量删除，失败时已有内容保持不变
    fn remove_many(&mut self, keys: &[&str]) -> AppResult<()> {
        for key in keys {
            self.remove(key)?;
        }
        Ok(())
    }
}

/// 内存存储
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ContentStore for MemoryStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// 文件存储
///
/// 整个存储是一个 JSON 对象文件，每次修改后整体写回
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// 打开存储文件，文件不存在时视为空存储
    pub fn open(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = match fs::read_to_string(&path) {
            Ok(content) if content.trim().is_empty() => BTreeMap::new(),
            Ok(content) => serde_json::from_str(&content)?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("存储文件不存在，将新建: {}", path.display());
                BTreeMap::new()
            }
            Err(e) => return Err(AppError::file_read_failed(path.display().to_string(), e)),
        };

        debug!("已打开存储 {} ({} 个键)", path.display(), entries.len());
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> AppResult<()> {
        Self::write_entries(&self.path, &self.entries)
    }

    fn write_entries(path: &Path, entries: &BTreeMap<String, String>) -> AppResult<()> {
        let json = serde_json::to_string_pretty(entries)?;
        fs::write(path, json).map_err(|e| AppError::file_write_failed(path.display().to_string(), e))
    }
}

impl ContentStore for FileStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }

    /// 只写一次文件；写入失败时内存里的键也不删除
    fn remove_many(&mut self, keys: &[&str]) -> AppResult<()> {
        if !keys.iter().any(|key| self.entries.contains_key(*key)) {
            return Ok(());
        }

        let mut remaining = self.entries.clone();
        for key in keys {
            remaining.remove(*key);
        }
        Self::write_entries(&self.path, &remaining)?;

        debug!("已删除 {} 个键", self.entries.len() - remaining.len());
        self.entries = remaining;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_store_persists_across_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");

        let mut store = FileStore::open(&path).unwrap();
        store.set("headerContent", "<b>标题</b>").unwrap();
        store.set("mainContent", "正文").unwrap();
        store.remove("mainContent").unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(
            reopened.get("headerContent").unwrap().as_deref(),
            Some("<b>标题</b>")
        );
        assert_eq!(reopened.get("mainContent").unwrap(), None);
    }

    #[test]
    fn test_file_store_rejects_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "[1, 2").unwrap();

        let err = FileStore::open(&path).unwrap_err();
        assert!(matches!(err, AppError::Storage(_)));
    }

    #[test]
    fn test_file_store_remove_many_writes_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");

        let mut store = FileStore::open(&path).unwrap();
        store.set("headerContent", "抬头").unwrap();
        store.set("footerContent", "页脚").unwrap();
        store.set("layoutSettings", "{}").unwrap();

        store
            .remove_many(&["headerContent", "footerContent", "mainContent"])
            .unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("headerContent").unwrap(), None);
        assert_eq!(reopened.get("footerContent").unwrap(), None);
        assert_eq!(reopened.get("layoutSettings").unwrap().as_deref(), Some("{}"));
    }

    #[test]
    fn test_file_store_remove_many_keeps_entries_on_write_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");

        let mut store = FileStore::open(&path).unwrap();
        store.set("headerContent", "抬头").unwrap();

        // 路径被目录占用后写入必然失败
        fs::remove_file(&path).unwrap();
        fs::create_dir(&path).unwrap();

        let err = store.remove_many(&["headerContent"]).unwrap_err();
        assert!(matches!(err, AppError::Storage(_)));
        assert_eq!(store.get("headerContent").unwrap().as_deref(), Some("抬头"));
    }

    #[test]
    fn test_memory_store_remove_missing_key() {
        let mut store = MemoryStore::new();
        store.remove("nothing").unwrap();
        assert!(store.is_empty());
    }
}
