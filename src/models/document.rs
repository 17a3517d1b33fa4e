use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::layout::{DocumentType, FirstPageLayout, LastPageLayout};
use crate::models::region::RegionName;

/// 保存时的文档快照
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedDocument {
    pub saved_at: DateTime<Local>,
    pub document_type: DocumentType,
    pub first_page_layout: FirstPageLayout,
    pub last_page_layout: LastPageLayout,
    /// 每个区域的 HTML 内容，空区域为空串
    pub contents: BTreeMap<RegionName, String>,
}

impl SavedDocument {
    pub fn content(&self, region: RegionName) -> &str {
        self.contents.get(&region).map(String::as_str).unwrap_or("")
    }
}
