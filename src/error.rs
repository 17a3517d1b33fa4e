use thiserror::Error;

use crate::models::layout::{DocumentType, FirstPageLayout, LastPageLayout};
use crate::models::region::RegionName;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 版式切换被拒绝
    #[error("版式错误: {0}")]
    Layout(#[from] LayoutError),
    /// 内容存储错误
    #[error("存储错误: {0}")]
    Storage(#[from] StorageError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    /// 其他错误
    #[error("错误: {0}")]
    Other(String),
}

/// 版式控制器错误
///
/// 都是本地、同步的失败，出现时状态保持不变
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// 版式名称不属于当前文档类型的可选范围
    #[error("无法识别的版式 '{name}' (文档类型: {doc_type})")]
    InvalidLayout { name: String, doc_type: DocumentType },
    /// 当前没有可跳转的末页
    #[error("无法跳转到末页 (首页: {first}, 末页: {last})")]
    NoLastPage {
        first: FirstPageLayout,
        last: LastPageLayout,
    },
    /// 当前没有可跳转的首页
    #[error("无法跳转到首页 (首页: {first}, 末页: {last})")]
    NoFirstPage {
        first: FirstPageLayout,
        last: LastPageLayout,
    },
    /// 版式表引用了当前文档类型中不存在的区域
    #[error("区域 {region} 不存在 (文档类型: {doc_type})")]
    RegionNotFound {
        region: RegionName,
        doc_type: DocumentType,
    },
    /// 区域存在但当前不可见，无法获得焦点
    #[error("区域 {region} 当前不可编辑")]
    RegionHidden { region: RegionName },
}

impl LayoutError {
    pub fn invalid_layout(name: impl Into<String>, doc_type: DocumentType) -> Self {
        LayoutError::InvalidLayout {
            name: name.into(),
            doc_type,
        }
    }
}

/// 内容存储错误
#[derive(Debug, Error)]
pub enum StorageError {
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 写入文件失败
    #[error("写入文件失败 ({path}): {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// JSON 解析或序列化失败
    #[error("JSON处理失败: {0}")]
    Json(#[from] serde_json::Error),
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
    /// 配置文件读取失败
    #[error("读取配置文件失败 ({path}): {source}")]
    FileReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

// ========== 从常见错误类型转换 ==========

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Storage(StorageError::Json(err))
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建文件读取错误
    pub fn file_read_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::Storage(StorageError::ReadFailed {
            path: path.into(),
            source,
        })
    }

    /// 创建文件写入错误
    pub fn file_write_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::Storage(StorageError::WriteFailed {
            path: path.into(),
            source,
        })
    }

    /// 版式错误的引用，便于调用方区分可提示给用户的失败
    pub fn as_layout(&self) -> Option<&LayoutError> {
        match self {
            AppError::Layout(e) => Some(e),
            _ => None,
        }
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
