//! 版式状态 - 业务能力层
//!
//! `LayoutState` 是不可变的整体快照，所有转换都返回一个新值，
//! 失败时原状态不受影响

use serde::Serialize;

use crate::error::LayoutError;
use crate::models::layout::{DocumentType, FirstPageLayout, LastPageLayout, PageSide};
use crate::models::region::{PageRegions, Region, RegionName};
use crate::services::layout_table::{build_page, first_page_entry, last_page_entry};

/// 首页/末页跳转按钮是否可用
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationControls {
    pub first_page_enabled: bool,
    pub last_page_enabled: bool,
}

/// 版式状态
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutState {
    document_type: DocumentType,
    first_page_layout: FirstPageLayout,
    last_page_layout: LastPageLayout,
    first_page: PageRegions,
    /// 末页版式为 `none` 时不存在末页
    last_page: Option<PageRegions>,
    active_region: RegionName,
    on_last_page: bool,
    /// 离开首页时记住的焦点
    first_page_focus: RegionName,
    /// 离开末页时记住的焦点
    last_page_focus: Option<RegionName>,
    controls: NavigationControls,
}

impl LayoutState {
    /// 按文档类型和两页版式重新计算完整状态
    pub fn compute(
        doc_type: DocumentType,
        first_layout: FirstPageLayout,
        last_layout: LastPageLayout,
    ) -> Result<Self, LayoutError> {
        if !first_layout.allowed_for(doc_type) {
            return Err(LayoutError::invalid_layout(first_layout.as_str(), doc_type));
        }
        if !last_layout.allowed_for(doc_type) {
            return Err(LayoutError::invalid_layout(last_layout.as_str(), doc_type));
        }

        let first_entry = first_page_entry(first_layout);
        let first_page = build_page(doc_type, PageSide::First, &first_entry)?;

        let (last_page, last_page_focus) = if last_layout == LastPageLayout::None {
            (None, None)
        } else {
            let entry = last_page_entry(last_layout);
            let page = build_page(doc_type, PageSide::Last, &entry)?;
            (Some(page), Some(entry.focus))
        };

        let mut state = Self {
            document_type: doc_type,
            first_page_layout: first_layout,
            last_page_layout: last_layout,
            first_page,
            last_page,
            active_region: first_entry.focus,
            on_last_page: false,
            first_page_focus: first_entry.focus,
            last_page_focus,
            controls: NavigationControls::default(),
        };
        state.settle();
        Ok(state)
    }

    pub fn document_type(&self) -> DocumentType {
        self.document_type
    }

    pub fn first_page_layout(&self) -> FirstPageLayout {
        self.first_page_layout
    }

    pub fn last_page_layout(&self) -> LastPageLayout {
        self.last_page_layout
    }

    pub fn active_region(&self) -> RegionName {
        self.active_region
    }

    /// 是否通过跳转停留在末页
    pub fn on_last_page(&self) -> bool {
        self.on_last_page
    }

    pub fn controls(&self) -> NavigationControls {
        self.controls
    }

    pub fn first_page(&self) -> &PageRegions {
        &self.first_page
    }

    pub fn last_page(&self) -> Option<&PageRegions> {
        self.last_page.as_ref()
    }

    pub fn has_last_page(&self) -> bool {
        self.last_page.is_some()
    }

    /// 首页版式为 `none` 而末页存在时，首页不单独显示
    pub fn last_page_only(&self) -> bool {
        self.first_page_layout == FirstPageLayout::None && self.last_page.is_some()
    }

    /// 当前显示的页面
    pub fn shown_page(&self) -> PageSide {
        if self.last_page.is_some() && (self.on_last_page || self.last_page_only()) {
            PageSide::Last
        } else {
            PageSide::First
        }
    }

    /// 当前显示页面的区域
    pub fn regions(&self) -> &PageRegions {
        match (self.shown_page(), &self.last_page) {
            (PageSide::Last, Some(page)) => page,
            _ => &self.first_page,
        }
    }

    pub fn region(&self, name: RegionName) -> Option<&Region> {
        self.regions().get(name)
    }

    /// 首页版式切换后的新状态，末页版式沿用（普通页面没有末页）
    pub fn with_first_page_layout(
        &self,
        layout: FirstPageLayout,
        doc_type: DocumentType,
    ) -> Result<Self, LayoutError> {
        let last_layout = match doc_type {
            DocumentType::Report if self.document_type == DocumentType::Report => {
                self.last_page_layout
            }
            _ => LastPageLayout::None,
        };
        Self::compute(doc_type, layout, last_layout)
    }

    /// 普通页面由页眉/页脚两个开关决定版式
    pub fn with_page_sections(header_enabled: bool, footer_enabled: bool) -> Result<Self, LayoutError> {
        Self::compute(
            DocumentType::Page,
            FirstPageLayout::from_sections(header_enabled, footer_enabled),
            LastPageLayout::None,
        )
    }

    /// 末页版式切换后的新状态
    ///
    /// 首页区域按原版式重建并保留其焦点；若正停留在末页且末页仍存在，继续停留
    pub fn with_last_page_layout(&self, layout: LastPageLayout) -> Result<Self, LayoutError> {
        let mut next = Self::compute(self.document_type, self.first_page_layout, layout)?;
        next.first_page_focus = match self.shown_page() {
            PageSide::First => self.active_region,
            PageSide::Last => self.first_page_focus,
        };
        next.on_last_page = self.on_last_page;
        next.settle();
        Ok(next)
    }

    /// 跳转到末页后的新状态
    pub fn navigated_to_last_page(&self) -> Result<Self, LayoutError> {
        if !self.has_last_page() || self.last_page_only() {
            return Err(LayoutError::NoLastPage {
                first: self.first_page_layout,
                last: self.last_page_layout,
            });
        }

        let mut next = self.clone();
        if !self.on_last_page {
            next.first_page_focus = self.active_region;
            next.on_last_page = true;
            next.settle();
        }
        Ok(next)
    }

    /// 返回首页后的新状态
    pub fn navigated_to_first_page(&self) -> Result<Self, LayoutError> {
        if !self.has_last_page() || self.last_page_only() {
            return Err(LayoutError::NoFirstPage {
                first: self.first_page_layout,
                last: self.last_page_layout,
            });
        }

        let mut next = self.clone();
        if self.on_last_page {
            next.last_page_focus = Some(self.active_region);
            next.on_last_page = false;
            next.settle();
        }
        Ok(next)
    }

    /// 用户点击某个区域后的新状态
    pub fn with_focus(&self, region: RegionName) -> Result<Self, LayoutError> {
        let regions = self.regions();
        if !regions.contains(region) {
            return Err(LayoutError::RegionNotFound {
                region,
                doc_type: self.document_type,
            });
        }
        if !regions.is_editable(region) {
            return Err(LayoutError::RegionHidden { region });
        }

        let mut next = self.clone();
        next.active_region = region;
        match next.shown_page() {
            PageSide::First => next.first_page_focus = region,
            PageSide::Last => next.last_page_focus = Some(region),
        }
        Ok(next)
    }

    /// 根据当前页面重新确定焦点和按钮状态
    fn settle(&mut self) {
        if self.last_page.is_none() {
            self.on_last_page = false;
        }

        self.active_region = match (self.shown_page(), self.last_page_focus) {
            (PageSide::Last, Some(focus)) => focus,
            _ => self.first_page_focus,
        };

        let navigable = self.document_type == DocumentType::Report
            && self.first_page_layout != FirstPageLayout::None
            && self.last_page_layout != LastPageLayout::None;

        self.controls = NavigationControls {
            first_page_enabled: navigable && self.on_last_page,
            last_page_enabled: navigable && !self.on_last_page,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::region::Placement;

    fn report(first: FirstPageLayout, last: LastPageLayout) -> LayoutState {
        LayoutState::compute(DocumentType::Report, first, last).unwrap()
    }

    #[test]
    fn test_active_region_is_always_visible() {
        for first in FirstPageLayout::ALL {
            for last in LastPageLayout::ALL {
                let state = report(first, last);
                assert!(
                    state.regions().is_visible(state.active_region()),
                    "{} / {}",
                    first,
                    last
                );

                if let Ok(on_last) = state.navigated_to_last_page() {
                    assert!(on_last.regions().is_visible(on_last.active_region()));
                }
            }
        }
    }

    #[test]
    fn test_last_page_only_shows_last_page() {
        let state = report(FirstPageLayout::None, LastPageLayout::PageFooter);
        assert_eq!(state.shown_page(), PageSide::Last);
        assert!(!state.on_last_page());
        assert_eq!(state.active_region(), RegionName::PageFooter);
        assert_eq!(state.controls(), NavigationControls::default());
    }

    #[test]
    fn test_controls_follow_current_page() {
        let state = report(FirstPageLayout::HeaderOnly, LastPageLayout::ReportFooter);
        assert!(state.controls().last_page_enabled);
        assert!(!state.controls().first_page_enabled);

        let on_last = state.navigated_to_last_page().unwrap();
        assert!(on_last.controls().first_page_enabled);
        assert!(!on_last.controls().last_page_enabled);
    }

    #[test]
    fn test_changing_last_layout_on_last_page_keeps_position() {
        let state = report(FirstPageLayout::ReportHeader, LastPageLayout::ReportFooter)
            .navigated_to_last_page()
            .unwrap();

        let next = state.with_last_page_layout(LastPageLayout::ReportPageFooter).unwrap();
        assert!(next.on_last_page());
        assert_eq!(next.active_region(), RegionName::ReportFooter);
        assert_eq!(
            next.region(RegionName::PageFooter).unwrap().placement,
            Placement::SplitBottom
        );

        let gone = next.with_last_page_layout(LastPageLayout::None).unwrap();
        assert!(!gone.on_last_page());
        assert_eq!(gone.shown_page(), PageSide::First);
        assert_eq!(gone.active_region(), RegionName::ReportHeader);
    }

    #[test]
    fn test_changing_last_layout_keeps_first_page_focus() {
        let state = report(FirstPageLayout::HeaderFooter, LastPageLayout::ReportFooter)
            .with_focus(RegionName::MainBody)
            .unwrap();

        let next = state.with_last_page_layout(LastPageLayout::PageFooter).unwrap();
        assert_eq!(next.active_region(), RegionName::MainBody);
        assert_eq!(
            next.navigated_to_last_page().unwrap().active_region(),
            RegionName::PageFooter
        );
    }

    #[test]
    fn test_focus_rejects_hidden_region() {
        let state = report(FirstPageLayout::ReportHeader, LastPageLayout::None);
        assert_eq!(
            state.with_focus(RegionName::PageHeader).unwrap_err(),
            LayoutError::RegionHidden {
                region: RegionName::PageHeader
            }
        );
        assert!(matches!(
            state.with_focus(RegionName::ReportFooter),
            Err(LayoutError::RegionNotFound { .. })
        ));
    }

    #[test]
    fn test_switching_to_page_document_drops_last_page() {
        let state = report(FirstPageLayout::HeaderFooter, LastPageLayout::ReportFooter);
        let page = state
            .with_first_page_layout(FirstPageLayout::FooterOnly, DocumentType::Page)
            .unwrap();
        assert_eq!(page.document_type(), DocumentType::Page);
        assert!(!page.has_last_page());
        assert_eq!(page.active_region(), RegionName::Footer);
    }
}
