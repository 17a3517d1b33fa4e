//! 选择摘要
//!
//! 编辑器顶部列出启动时选择的选项

use crate::models::layout::DocumentType;
use crate::models::params::StartupParams;

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

/// 生成摘要行，没有选项时返回空列表
pub fn selection_summary(params: &StartupParams) -> Vec<String> {
    let mut lines = Vec::new();

    if params.doc_type_given {
        lines.push(format!("Document Type: {}", params.doc_type.label()));
    }

    let labelled = [
        ("Regions", &params.regions),
        ("Companies", &params.companies),
        ("Branches", &params.branches),
        ("Sub-Branches", &params.sub_branches),
        ("Languages", &params.languages),
    ];
    for (label, value) in labelled {
        if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
            lines.push(format!("{}: {}", label, value));
        }
    }

    if !params.doc_type_given {
        return lines;
    }

    match params.doc_type {
        DocumentType::Report => {
            lines.push(format!("First Page: {}", params.first_page.label()));
            lines.push(format!("Last Page: {}", params.last_page.label()));
        }
        DocumentType::Page => {
            lines.push(format!("Header: {}", yes_no(params.header)));
            lines.push(format!("Footer: {}", yes_no(params.footer)));
        }
    }

    lines
}
