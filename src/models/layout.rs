//! 版式名称与文档类型
//!
//! 首页版式、末页版式都是固定的枚举，字符串名称与 URL 参数、下拉框取值一致

use phf::phf_map;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::LayoutError;

/// 文档类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    /// 报表：支持首页/末页的报表头、页头、报表尾、页尾
    #[default]
    Report,
    /// 普通页面：只有页眉、页脚和正文
    Page,
}

impl DocumentType {
    pub fn as_str(self) -> &'static str {
        match self {
            DocumentType::Report => "report",
            DocumentType::Page => "page",
        }
    }

    /// 摘要中显示的名称
    pub fn label(self) -> &'static str {
        match self {
            DocumentType::Report => "Report",
            DocumentType::Page => "Page",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "report" => Some(DocumentType::Report),
            "page" => Some(DocumentType::Page),
            _ => None,
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 页面位置：首页或末页
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageSide {
    First,
    Last,
}

impl fmt::Display for PageSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageSide::First => write!(f, "first"),
            PageSide::Last => write!(f, "last"),
        }
    }
}

/// 首页版式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FirstPageLayout {
    #[default]
    None,
    HeaderFooter,
    HeaderOnly,
    FooterOnly,
    /// 整页报表头
    ReportHeader,
    /// 整页页头
    PageHeader,
    /// 报表头 + 页头各占半页
    ReportPageHeader,
}

static FIRST_PAGE_LAYOUTS: phf::Map<&'static str, FirstPageLayout> = phf_map! {
    "none" => FirstPageLayout::None,
    "header-footer" => FirstPageLayout::HeaderFooter,
    "header-only" => FirstPageLayout::HeaderOnly,
    "footer-only" => FirstPageLayout::FooterOnly,
    "report-header" => FirstPageLayout::ReportHeader,
    "page-header" => FirstPageLayout::PageHeader,
    "report-page-header" => FirstPageLayout::ReportPageHeader,
};

impl FirstPageLayout {
    pub const ALL: [FirstPageLayout; 7] = [
        FirstPageLayout::None,
        FirstPageLayout::HeaderFooter,
        FirstPageLayout::HeaderOnly,
        FirstPageLayout::FooterOnly,
        FirstPageLayout::ReportHeader,
        FirstPageLayout::PageHeader,
        FirstPageLayout::ReportPageHeader,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FirstPageLayout::None => "none",
            FirstPageLayout::HeaderFooter => "header-footer",
            FirstPageLayout::HeaderOnly => "header-only",
            FirstPageLayout::FooterOnly => "footer-only",
            FirstPageLayout::ReportHeader => "report-header",
            FirstPageLayout::PageHeader => "page-header",
            FirstPageLayout::ReportPageHeader => "report-page-header",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FirstPageLayout::None => "None",
            FirstPageLayout::HeaderFooter => "Header & Footer",
            FirstPageLayout::HeaderOnly => "Header Only",
            FirstPageLayout::FooterOnly => "Footer Only",
            FirstPageLayout::ReportHeader => "Report Header",
            FirstPageLayout::PageHeader => "Page Header",
            FirstPageLayout::ReportPageHeader => "Report & Page Header",
        }
    }

    /// 按名称查找，不校验文档类型
    pub fn from_name(s: &str) -> Option<Self> {
        FIRST_PAGE_LAYOUTS.get(s).copied()
    }

    /// 该版式是否属于给定文档类型的可选范围
    pub fn allowed_for(self, doc_type: DocumentType) -> bool {
        match doc_type {
            DocumentType::Report => true,
            DocumentType::Page => matches!(
                self,
                FirstPageLayout::None
                    | FirstPageLayout::HeaderFooter
                    | FirstPageLayout::HeaderOnly
                    | FirstPageLayout::FooterOnly
            ),
        }
    }

    /// 解析并校验版式名称
    pub fn parse(name: &str, doc_type: DocumentType) -> Result<Self, LayoutError> {
        match Self::from_name(name) {
            Some(layout) if layout.allowed_for(doc_type) => Ok(layout),
            _ => Err(LayoutError::invalid_layout(name, doc_type)),
        }
    }

    /// 普通页面用两个开关描述页眉/页脚，这里换算成等价的版式
    pub fn from_sections(header_enabled: bool, footer_enabled: bool) -> Self {
        match (header_enabled, footer_enabled) {
            (true, true) => FirstPageLayout::HeaderFooter,
            (true, false) => FirstPageLayout::HeaderOnly,
            (false, true) => FirstPageLayout::FooterOnly,
            (false, false) => FirstPageLayout::None,
        }
    }
}

impl fmt::Display for FirstPageLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 末页版式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LastPageLayout {
    #[default]
    None,
    FooterOnly,
    /// 整页报表尾
    ReportFooter,
    /// 整页页尾
    PageFooter,
    /// 报表尾 + 页尾各占半页
    ReportPageFooter,
}

static LAST_PAGE_LAYOUTS: phf::Map<&'static str, LastPageLayout> = phf_map! {
    "none" => LastPageLayout::None,
    "footer-only" => LastPageLayout::FooterOnly,
    "report-footer" => LastPageLayout::ReportFooter,
    "page-footer" => LastPageLayout::PageFooter,
    "report-page-footer" => LastPageLayout::ReportPageFooter,
};

impl LastPageLayout {
    pub const ALL: [LastPageLayout; 5] = [
        LastPageLayout::None,
        LastPageLayout::FooterOnly,
        LastPageLayout::ReportFooter,
        LastPageLayout::PageFooter,
        LastPageLayout::ReportPageFooter,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LastPageLayout::None => "none",
            LastPageLayout::FooterOnly => "footer-only",
            LastPageLayout::ReportFooter => "report-footer",
            LastPageLayout::PageFooter => "page-footer",
            LastPageLayout::ReportPageFooter => "report-page-footer",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LastPageLayout::None => "None",
            LastPageLayout::FooterOnly => "Footer Only",
            LastPageLayout::ReportFooter => "Report Footer",
            LastPageLayout::PageFooter => "Page Footer",
            LastPageLayout::ReportPageFooter => "Report & Page Footer",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        LAST_PAGE_LAYOUTS.get(s).copied()
    }

    /// 普通页面没有末页，只接受 `none`
    pub fn allowed_for(self, doc_type: DocumentType) -> bool {
        match doc_type {
            DocumentType::Report => true,
            DocumentType::Page => self == LastPageLayout::None,
        }
    }

    pub fn parse(name: &str, doc_type: DocumentType) -> Result<Self, LayoutError> {
        match Self::from_name(name) {
            Some(layout) if layout.allowed_for(doc_type) => Ok(layout),
            _ => Err(LayoutError::invalid_layout(name, doc_type)),
        }
    }
}

impl fmt::Display for LastPageLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page_names_match_table() {
        for layout in FirstPageLayout::ALL {
            assert_eq!(FirstPageLayout::from_name(layout.as_str()), Some(layout));
        }
        assert_eq!(FirstPageLayout::from_name("report-footer"), None);
    }

    #[test]
    fn test_page_document_rejects_report_layouts() {
        let err = FirstPageLayout::parse("report-header", DocumentType::Page).unwrap_err();
        assert_eq!(
            err,
            LayoutError::InvalidLayout {
                name: "report-header".to_string(),
                doc_type: DocumentType::Page,
            }
        );
        assert_eq!(
            FirstPageLayout::parse("header-only", DocumentType::Page).unwrap(),
            FirstPageLayout::HeaderOnly
        );
    }

    #[test]
    fn test_last_page_parse() {
        assert_eq!(
            LastPageLayout::parse("report-page-footer", DocumentType::Report).unwrap(),
            LastPageLayout::ReportPageFooter
        );
        assert!(LastPageLayout::parse("page-footer", DocumentType::Page).is_err());
        assert!(LastPageLayout::parse("header-only", DocumentType::Report).is_err());
    }

    #[test]
    fn test_from_sections() {
        assert_eq!(FirstPageLayout::from_sections(true, true), FirstPageLayout::HeaderFooter);
        assert_eq!(FirstPageLayout::from_sections(false, true), FirstPageLayout::FooterOnly);
        assert_eq!(FirstPageLayout::from_sections(false, false), FirstPageLayout::None);
    }

    #[test]
    fn test_serde_uses_kebab_case() {
        let json = serde_json::to_string(&FirstPageLayout::ReportPageHeader).unwrap();
        assert_eq!(json, "\"report-page-header\"");
        let doc: DocumentType = serde_json::from_str("\"page\"").unwrap();
        assert_eq!(doc, DocumentType::Page);
    }
}
