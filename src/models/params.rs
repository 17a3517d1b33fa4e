//! 启动参数
//!
//! 编辑器从选择页跳转过来时，版式选择通过 URL 查询串传入，只在启动时读取一次

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use url::form_urlencoded;

use crate::models::layout::{DocumentType, FirstPageLayout, LastPageLayout};

/// 启动参数
///
/// 无法识别的取值一律回退到 `none` / 关闭
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartupParams {
    /// 查询串中是否出现过 docType
    pub doc_type_given: bool,
    pub doc_type: DocumentType,
    pub first_page: FirstPageLayout,
    pub last_page: LastPageLayout,
    /// 普通页面是否启用页眉
    pub header: bool,
    /// 普通页面是否启用页脚
    pub footer: bool,
    // 以下字段只用于选择摘要展示
    pub regions: Option<String>,
    pub companies: Option<String>,
    pub branches: Option<String>,
    pub sub_branches: Option<String>,
    pub languages: Option<String>,
}

impl StartupParams {
    /// 解析查询串，允许带或不带前导 `?`
    pub fn from_query(query: &str) -> Self {
        let mut params = Self::default();
        let query = query.strip_prefix('?').unwrap_or(query);

        let mut first_page_raw = None;
        let mut last_page_raw = None;

        for (key, value) in form_urlencoded::parse(query.as_bytes()).into_owned() {
            match key.as_str() {
                "docType" => {
                    params.doc_type_given = true;
                    match DocumentType::from_name(&value) {
                        Some(doc_type) => params.doc_type = doc_type,
                        None => warn!("⚠️ 无法识别的文档类型 '{}'，按报表处理", value),
                    }
                }
                "firstPage" => first_page_raw = Some(value),
                "lastPage" => last_page_raw = Some(value),
                "header" => params.header = value == "true",
                "footer" => params.footer = value == "true",
                "regions" => params.regions = Some(value),
                "companies" => params.companies = Some(value),
                "branches" => params.branches = Some(value),
                "subBranches" => params.sub_branches = Some(value),
                "languages" => params.languages = Some(value),
                other => debug!("忽略未知参数: {}", other),
            }
        }

        // 版式要在文档类型确定之后再校验
        if let Some(raw) = first_page_raw {
            params.first_page = FirstPageLayout::parse(&raw, params.doc_type).unwrap_or_else(|e| {
                warn!("⚠️ {}，首页版式回退为 none", e);
                FirstPageLayout::None
            });
        }
        if let Some(raw) = last_page_raw {
            params.last_page = LastPageLayout::parse(&raw, params.doc_type).unwrap_or_else(|e| {
                warn!("⚠️ {}，末页版式回退为 none", e);
                LastPageLayout::None
            });
        }

        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_query() {
        let params =
            StartupParams::from_query("?docType=report&firstPage=report-page-header&lastPage=report-footer");
        assert!(params.doc_type_given);
        assert_eq!(params.doc_type, DocumentType::Report);
        assert_eq!(params.first_page, FirstPageLayout::ReportPageHeader);
        assert_eq!(params.last_page, LastPageLayout::ReportFooter);
    }

    #[test]
    fn test_page_query_flags() {
        let params = StartupParams::from_query("docType=page&header=true&footer=false");
        assert_eq!(params.doc_type, DocumentType::Page);
        assert!(params.header);
        assert!(!params.footer);
        assert_eq!(params.last_page, LastPageLayout::None);
    }

    #[test]
    fn test_unknown_values_fall_back_to_none() {
        let params = StartupParams::from_query("docType=report&firstPage=sidebar&lastPage=everything");
        assert_eq!(params.first_page, FirstPageLayout::None);
        assert_eq!(params.last_page, LastPageLayout::None);
    }

    #[test]
    fn test_unknown_doc_type_keeps_report() {
        let params = StartupParams::from_query("docType=letter&lastPage=page-footer");
        assert!(params.doc_type_given);
        assert_eq!(params.doc_type, DocumentType::Report);
        assert_eq!(params.last_page, LastPageLayout::PageFooter);
    }

    #[test]
    fn test_report_layout_on_page_document_falls_back() {
        let params = StartupParams::from_query("firstPage=report-header&docType=page");
        assert_eq!(params.first_page, FirstPageLayout::None);
    }

    #[test]
    fn test_summary_fields_are_decoded() {
        let params = StartupParams::from_query(
            "companies=Acme%20Ltd&languages=en+fr&branches&regions=North%2DEast&&subBranches=100%",
        );
        assert_eq!(params.companies.as_deref(), Some("Acme Ltd"));
        assert_eq!(params.regions.as_deref(), Some("North-East"));
        assert_eq!(params.sub_branches.as_deref(), Some("100%"));
        assert_eq!(params.languages.as_deref(), Some("en fr"));
        assert_eq!(params.branches.as_deref(), Some(""));
        assert!(!params.doc_type_given);
    }
}
