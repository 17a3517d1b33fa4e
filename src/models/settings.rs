//! 版式尺寸设置
//!
//! 以 JSON 形式保存在 `layoutSettings` 键下，字段名与编辑器前端保持一致

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::AppResult;
use crate::infrastructure::ContentStore;
use crate::models::region::RegionName;

/// 设置在存储中的键名
pub const LAYOUT_SETTINGS_KEY: &str = "layoutSettings";

/// 各区域的最小高度
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutSettings {
    pub header_height: String,
    pub footer_height: String,
    pub report_header_height: String,
    pub page_header_height: String,
    pub report_footer_height: String,
    pub page_footer_height: String,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            header_height: "30mm".to_string(),
            footer_height: "30mm".to_string(),
            report_header_height: "30mm".to_string(),
            page_header_height: "30mm".to_string(),
            report_footer_height: "30mm".to_string(),
            page_footer_height: "30mm".to_string(),
        }
    }
}

impl LayoutSettings {
    /// 区域的最小高度；正文区域不受约束
    pub fn min_height(&self, region: RegionName) -> Option<&str> {
        match region {
            RegionName::Header => Some(&self.header_height),
            RegionName::Footer => Some(&self.footer_height),
            RegionName::ReportHeader => Some(&self.report_header_height),
            RegionName::PageHeader => Some(&self.page_header_height),
            RegionName::ReportFooter => Some(&self.report_footer_height),
            RegionName::PageFooter => Some(&self.page_footer_height),
            RegionName::MainBody | RegionName::LastPageMainBody => None,
        }
    }

    /// 从存储加载设置
    ///
    /// 缺失的字段使用默认值；内容损坏时记录警告并回退到默认设置
    pub fn load(store: &impl ContentStore) -> AppResult<Self> {
        let Some(raw) = store.get(LAYOUT_SETTINGS_KEY)? else {
            return Ok(Self::default());
        };

        match serde_json::from_str(&raw) {
            Ok(settings) => Ok(settings),
            Err(e) => {
                warn!("⚠️ 版式设置解析失败，使用默认设置: {}", e);
                Ok(Self::default())
            }
        }
    }

    pub fn save(&self, store: &mut impl ContentStore) -> AppResult<()> {
        let json = serde_json::to_string(self)?;
        store.set(LAYOUT_SETTINGS_KEY, &json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::MemoryStore;

    #[test]
    fn test_partial_settings_merge_with_defaults() {
        let mut store = MemoryStore::new();
        store
            .set(LAYOUT_SETTINGS_KEY, r#"{"headerHeight":"45mm"}"#)
            .unwrap();

        let settings = LayoutSettings::load(&store).unwrap();
        assert_eq!(settings.header_height, "45mm");
        assert_eq!(settings.footer_height, "30mm");
    }

    #[test]
    fn test_corrupt_settings_fall_back_to_default() {
        let mut store = MemoryStore::new();
        store.set(LAYOUT_SETTINGS_KEY, "{not json").unwrap();

        assert_eq!(LayoutSettings::load(&store).unwrap(), LayoutSettings::default());
    }

    #[test]
    fn test_save_then_load() {
        let mut store = MemoryStore::new();
        let settings = LayoutSettings {
            page_footer_height: "12mm".to_string(),
            ..Default::default()
        };
        settings.save(&mut store).unwrap();

        let raw = store.get(LAYOUT_SETTINGS_KEY).unwrap().unwrap();
        assert!(raw.contains("\"pageFooterHeight\":\"12mm\""));
        assert_eq!(LayoutSettings::load(&store).unwrap(), settings);
    }

    #[test]
    fn test_main_body_has_no_min_height() {
        let settings = LayoutSettings::default();
        assert_eq!(settings.min_height(RegionName::MainBody), None);
        assert_eq!(settings.min_height(RegionName::ReportFooter), Some("30mm"));
    }
}
