//! 版式表 - 业务能力层
//!
//! 每个版式名称对应一组区域摆放和一个获得焦点的主区域。
//! 分屏版式中，名称里排在前面的区域位于上半页并获得焦点：
//! `report-page-header` 为报表头在上、页头在下，
//! `report-page-footer` 为报表尾在上、页尾在下。

use crate::error::LayoutError;
use crate::models::layout::{DocumentType, FirstPageLayout, LastPageLayout, PageSide};
use crate::models::region::{PageRegions, Placement, RegionName};

/// 版式表中的一行
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutEntry {
    /// 可见区域及其摆放方式，未列出的区域隐藏
    pub placements: &'static [(RegionName, Placement)],
    /// 切换到该版式后获得焦点的区域
    pub focus: RegionName,
}

const REPORT_FIRST_PAGE: &[RegionName] = &[
    RegionName::Header,
    RegionName::Footer,
    RegionName::ReportHeader,
    RegionName::PageHeader,
    RegionName::MainBody,
];

const PAGE_FIRST_PAGE: &[RegionName] = &[RegionName::Header, RegionName::Footer, RegionName::MainBody];

const REPORT_LAST_PAGE: &[RegionName] = &[
    RegionName::Footer,
    RegionName::ReportFooter,
    RegionName::PageFooter,
    RegionName::LastPageMainBody,
];

/// 某文档类型在某页上拥有的区域
pub fn page_region_set(doc_type: DocumentType, side: PageSide) -> &'static [RegionName] {
    match (doc_type, side) {
        (DocumentType::Report, PageSide::First) => REPORT_FIRST_PAGE,
        (DocumentType::Page, PageSide::First) => PAGE_FIRST_PAGE,
        (DocumentType::Report, PageSide::Last) => REPORT_LAST_PAGE,
        (DocumentType::Page, PageSide::Last) => &[],
    }
}

pub fn first_page_entry(layout: FirstPageLayout) -> LayoutEntry {
    use Placement::*;
    use RegionName::*;

    match layout {
        FirstPageLayout::None => LayoutEntry {
            placements: &[(MainBody, Flow)],
            focus: MainBody,
        },
        FirstPageLayout::HeaderFooter => LayoutEntry {
            placements: &[(Header, Flow), (Footer, Flow), (MainBody, Flow)],
            focus: Header,
        },
        FirstPageLayout::HeaderOnly => LayoutEntry {
            placements: &[(Header, Flow), (MainBody, Flow)],
            focus: Header,
        },
        FirstPageLayout::FooterOnly => LayoutEntry {
            placements: &[(Footer, Flow), (MainBody, Flow)],
            focus: Footer,
        },
        FirstPageLayout::ReportHeader => LayoutEntry {
            placements: &[(ReportHeader, FullPage)],
            focus: ReportHeader,
        },
        FirstPageLayout::PageHeader => LayoutEntry {
            placements: &[(PageHeader, FullPage)],
            focus: PageHeader,
        },
        FirstPageLayout::ReportPageHeader => LayoutEntry {
            placements: &[(ReportHeader, SplitTop), (PageHeader, SplitBottom)],
            focus: ReportHeader,
        },
    }
}

pub fn last_page_entry(layout: LastPageLayout) -> LayoutEntry {
    use Placement::*;
    use RegionName::*;

    match layout {
        LastPageLayout::None => LayoutEntry {
            placements: &[(LastPageMainBody, Flow)],
            focus: LastPageMainBody,
        },
        LastPageLayout::FooterOnly => LayoutEntry {
            placements: &[(Footer, Flow), (LastPageMainBody, Flow)],
            focus: Footer,
        },
        LastPageLayout::ReportFooter => LayoutEntry {
            placements: &[(ReportFooter, FullPage)],
            focus: ReportFooter,
        },
        LastPageLayout::PageFooter => LayoutEntry {
            placements: &[(PageFooter, FullPage)],
            focus: PageFooter,
        },
        LastPageLayout::ReportPageFooter => LayoutEntry {
            placements: &[(ReportFooter, SplitTop), (PageFooter, SplitBottom)],
            focus: ReportFooter,
        },
    }
}

/// 按版式表构造一页的区域集合
///
/// 表项引用了本页不存在的区域时返回 `RegionNotFound`
pub fn build_page(
    doc_type: DocumentType,
    side: PageSide,
    entry: &LayoutEntry,
) -> Result<PageRegions, LayoutError> {
    let mut page = PageRegions::all_hidden(page_region_set(doc_type, side));

    for &(region, placement) in entry.placements {
        if !page.place(region, placement) {
            return Err(LayoutError::RegionNotFound { region, doc_type });
        }
    }

    if !page.is_editable(entry.focus) {
        return Err(LayoutError::RegionNotFound {
            region: entry.focus,
            doc_type,
        });
    }

    Ok(page)
}

/// 版式激活时获得输入焦点的区域
///
/// 名称按报表的版式范围解析，因为两页的全部版式都只在报表中出现
pub fn focus_resolution(layout: &str, page: PageSide) -> Result<RegionName, LayoutError> {
    match page {
        PageSide::First => {
            FirstPageLayout::parse(layout, DocumentType::Report).map(|l| first_page_entry(l).focus)
        }
        PageSide::Last => {
            LastPageLayout::parse(layout, DocumentType::Report).map(|l| last_page_entry(l).focus)
        }
    }
}
