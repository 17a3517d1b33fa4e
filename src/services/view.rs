//! 展示投影
//!
//! 从 `LayoutState` 单向推导出各区块的显示方式，展示层只读这个结果

use serde::Serialize;

use crate::models::layout::PageSide;
use crate::models::region::{Placement, RegionName};
use crate::models::settings::LayoutSettings;
use crate::services::layout_state::{LayoutState, NavigationControls};

/// 单个区块的显示方式
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionView {
    pub region: RegionName,
    pub page: PageSide,
    /// `block` 或 `none`
    pub display: &'static str,
    /// `full-page` / `split-page`
    pub class: Option<&'static str>,
    pub active: bool,
    pub min_height: Option<String>,
    pub height_fraction: Option<f32>,
}

/// 整个编辑器的显示方式
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorView {
    pub first_page_visible: bool,
    pub last_page_visible: bool,
    pub sections: Vec<SectionView>,
    pub navigation: NavigationControls,
}

impl EditorView {
    pub fn section(&self, page: PageSide, region: RegionName) -> Option<&SectionView> {
        self.sections
            .iter()
            .find(|s| s.page == page && s.region == region)
    }
}

pub fn render(state: &LayoutState, settings: &LayoutSettings) -> EditorView {
    let shown = state.shown_page();
    let mut sections = Vec::new();

    let pages = std::iter::once((PageSide::First, state.first_page()))
        .chain(state.last_page().map(|page| (PageSide::Last, page)));

    for (side, page) in pages {
        for region in page.iter() {
            let class = match region.placement {
                Placement::FullPage => Some("full-page"),
                Placement::SplitTop | Placement::SplitBottom => Some("split-page"),
                Placement::Hidden | Placement::Flow => None,
            };
            sections.push(SectionView {
                region: region.name,
                page: side,
                display: if region.visible { "block" } else { "none" },
                class,
                active: side == shown && region.name == state.active_region(),
                min_height: settings.min_height(region.name).map(str::to_string),
                height_fraction: region.placement.height_fraction(),
            });
        }
    }

    EditorView {
        first_page_visible: shown == PageSide::First,
        last_page_visible: shown == PageSide::Last,
        sections,
        navigation: state.controls(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::layout::{DocumentType, FirstPageLayout, LastPageLayout};

    #[test]
    fn test_split_header_renders_two_half_pages() {
        let state = LayoutState::compute(
            DocumentType::Report,
            FirstPageLayout::ReportPageHeader,
            LastPageLayout::None,
        )
        .unwrap();
        let view = render(&state, &LayoutSettings::default());

        let top = view.section(PageSide::First, RegionName::ReportHeader).unwrap();
        let bottom = view.section(PageSide::First, RegionName::PageHeader).unwrap();
        assert_eq!(top.class, Some("split-page"));
        assert_eq!(bottom.height_fraction, Some(0.5));
        assert!(top.active && !bottom.active);
        assert_eq!(
            view.section(PageSide::First, RegionName::MainBody).unwrap().display,
            "none"
        );
        assert!(view.first_page_visible && !view.last_page_visible);
    }

    #[test]
    fn test_last_page_only_hides_first_root() {
        let state = LayoutState::compute(
            DocumentType::Report,
            FirstPageLayout::None,
            LastPageLayout::ReportFooter,
        )
        .unwrap();
        let view = render(&state, &LayoutSettings::default());

        assert!(!view.first_page_visible);
        assert!(view.last_page_visible);
        let footer = view.section(PageSide::Last, RegionName::ReportFooter).unwrap();
        assert_eq!(footer.class, Some("full-page"));
        assert!(footer.active);
        assert_eq!(footer.min_height.as_deref(), Some("30mm"));
    }
}
