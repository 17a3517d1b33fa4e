//! 区域定义
//!
//! 区域是页面上可以独立显示、编辑的内容块

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// 区域名称
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RegionName {
    Header,
    Footer,
    ReportHeader,
    PageHeader,
    ReportFooter,
    PageFooter,
    MainBody,
    LastPageMainBody,
}

impl RegionName {
    pub const ALL: [RegionName; 8] = [
        RegionName::Header,
        RegionName::Footer,
        RegionName::ReportHeader,
        RegionName::PageHeader,
        RegionName::ReportFooter,
        RegionName::PageFooter,
        RegionName::MainBody,
        RegionName::LastPageMainBody,
    ];

    /// 切换末页版式时被清空的区域（页脚与首页共用，不在其中）
    pub const LAST_PAGE_OWNED: [RegionName; 3] = [
        RegionName::ReportFooter,
        RegionName::PageFooter,
        RegionName::LastPageMainBody,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RegionName::Header => "header",
            RegionName::Footer => "footer",
            RegionName::ReportHeader => "reportHeader",
            RegionName::PageHeader => "pageHeader",
            RegionName::ReportFooter => "reportFooter",
            RegionName::PageFooter => "pageFooter",
            RegionName::MainBody => "mainBody",
            RegionName::LastPageMainBody => "lastPageMainBody",
        }
    }

    /// 内容在存储中的键名
    pub fn storage_key(self) -> &'static str {
        match self {
            RegionName::Header => "headerContent",
            RegionName::Footer => "footerContent",
            RegionName::ReportHeader => "reportHeaderContent",
            RegionName::PageHeader => "pageHeaderContent",
            RegionName::ReportFooter => "reportFooterContent",
            RegionName::PageFooter => "pageFooterContent",
            RegionName::MainBody => "mainContent",
            RegionName::LastPageMainBody => "lastPageMainContent",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|region| region.as_str() == s)
    }
}

impl fmt::Display for RegionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 区域在页面中的摆放方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Placement {
    #[default]
    Hidden,
    /// 普通页眉/页脚/正文，按内容排布
    Flow,
    /// 独占整页
    FullPage,
    /// 与另一区域分屏，位于上半页
    SplitTop,
    /// 与另一区域分屏，位于下半页
    SplitBottom,
}

impl Placement {
    /// 占页面高度的比例；普通排布返回 None
    pub fn height_fraction(self) -> Option<f32> {
        match self {
            Placement::FullPage => Some(1.0),
            Placement::SplitTop | Placement::SplitBottom => Some(0.5),
            Placement::Hidden | Placement::Flow => None,
        }
    }

    pub fn is_split(self) -> bool {
        matches!(self, Placement::SplitTop | Placement::SplitBottom)
    }
}

/// 区域状态
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub name: RegionName,
    pub visible: bool,
    pub editable: bool,
    pub split_mode: bool,
    pub placement: Placement,
}

impl Region {
    pub fn hidden(name: RegionName) -> Self {
        Self::placed(name, Placement::Hidden)
    }

    pub fn placed(name: RegionName, placement: Placement) -> Self {
        let visible = placement != Placement::Hidden;
        Self {
            name,
            visible,
            editable: visible,
            split_mode: placement.is_split(),
            placement,
        }
    }
}

/// 单个页面上的区域集合
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PageRegions {
    regions: BTreeMap<RegionName, Region>,
}

impl PageRegions {
    /// 以给定区域全部隐藏作为初始状态
    pub fn all_hidden(names: &[RegionName]) -> Self {
        Self {
            regions: names.iter().map(|&name| (name, Region::hidden(name))).collect(),
        }
    }

    pub fn get(&self, name: RegionName) -> Option<&Region> {
        self.regions.get(&name)
    }

    pub fn contains(&self, name: RegionName) -> bool {
        self.regions.contains_key(&name)
    }

    /// 放置区域；区域不属于本页时返回 false
    pub(crate) fn place(&mut self, name: RegionName, placement: Placement) -> bool {
        match self.regions.get_mut(&name) {
            Some(region) => {
                *region = Region::placed(name, placement);
                true
            }
            None => false,
        }
    }

    pub fn is_visible(&self, name: RegionName) -> bool {
        self.get(name).map(|r| r.visible).unwrap_or(false)
    }

    pub fn is_editable(&self, name: RegionName) -> bool {
        self.get(name).map(|r| r.visible && r.editable).unwrap_or(false)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Region> {
        self.regions.values()
    }

    pub fn visible(&self) -> Vec<RegionName> {
        self.iter().filter(|r| r.visible).map(|r| r.name).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_keys_are_unique() {
        let mut keys: Vec<_> = RegionName::ALL.iter().map(|r| r.storage_key()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), RegionName::ALL.len());
        assert_eq!(RegionName::MainBody.storage_key(), "mainContent");
    }

    #[test]
    fn test_region_name_lookup() {
        assert_eq!(RegionName::from_name("reportHeader"), Some(RegionName::ReportHeader));
        assert_eq!(RegionName::from_name("sidebar"), None);
    }

    #[test]
    fn test_split_placement_marks_split_mode() {
        let region = Region::placed(RegionName::PageHeader, Placement::SplitBottom);
        assert!(region.visible && region.editable && region.split_mode);
        assert_eq!(region.placement.height_fraction(), Some(0.5));

        let full = Region::placed(RegionName::ReportHeader, Placement::FullPage);
        assert!(!full.split_mode);
        assert_eq!(full.placement.height_fraction(), Some(1.0));
    }

    #[test]
    fn test_place_rejects_foreign_region() {
        let mut page = PageRegions::all_hidden(&[RegionName::Header, RegionName::MainBody]);
        assert!(page.place(RegionName::MainBody, Placement::Flow));
        assert!(!page.place(RegionName::ReportHeader, Placement::FullPage));
        assert_eq!(page.visible(), vec![RegionName::MainBody]);
    }
}
