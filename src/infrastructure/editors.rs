//! 区域编辑器 - 基础设施层
//!
//! 持有各区域的富文本内容，只暴露"清空 / 聚焦 / 是否有内容"的能力

use std::collections::BTreeMap;
use tracing::trace;

use crate::models::region::RegionName;

/// 版式控制器对编辑器的全部要求
pub trait RegionEditors {
    /// 清空区域内容
    fn clear(&mut self, region: RegionName);

    /// 把输入焦点交给区域
    fn focus(&mut self, region: RegionName);

    /// 区域是否有内容（不参与控制流，仅供展示）
    fn has_content(&self, region: RegionName) -> bool;
}

/// 内存中的编辑器集合
///
/// 每个区域保存一段 HTML 字符串
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorSet {
    contents: BTreeMap<RegionName, String>,
    focused: Option<RegionName>,
}

impl EditorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 写入区域内容，覆盖原有内容
    pub fn set_content(&mut self, region: RegionName, html: impl Into<String>) {
        let html = html.into();
        if html.is_empty() {
            self.contents.remove(&region);
        } else {
            self.contents.insert(region, html);
        }
    }

    /// 区域内容，未写入过的区域返回空串
    pub fn content(&self, region: RegionName) -> &str {
        self.contents.get(&region).map(String::as_str).unwrap_or("")
    }

    /// 当前获得焦点的区域
    pub fn focused(&self) -> Option<RegionName> {
        self.focused
    }

    /// 所有区域的内容快照，空区域也包含在内
    pub fn snapshot(&self) -> BTreeMap<RegionName, String> {
        RegionName::ALL
            .iter()
            .map(|&region| (region, self.content(region).to_string()))
            .collect()
    }
}

impl RegionEditors for EditorSet {
    fn clear(&mut self, region: RegionName) {
        trace!("清空区域: {}", region);
        self.contents.remove(&region);
    }

    fn focus(&mut self, region: RegionName) {
        trace!("聚焦区域: {}", region);
        self.focused = Some(region);
    }

    fn has_content(&self, region: RegionName) -> bool {
        self.contents.contains_key(&region)
    }
}
