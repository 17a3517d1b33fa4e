//! # Page Layout Editor
//!
//! 页眉/页脚文档编辑器的版式控制核心
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有区域内容和键值存储，只暴露能力
//! - `EditorSet` - 各区域的 HTML 内容、当前焦点
//! - `FileStore` / `MemoryStore` - 内容与版式设置的持久化
//!
//! ### ② 业务能力层（Services）
//! - `layout_table` - 版式名称 → 区域摆放 + 焦点区域
//! - `LayoutState` - 不可变状态及其纯转换函数
//! - `LayoutController` - 唯一持有状态，负责清空、聚焦、通知订阅者
//! - `view` / `selection_summary` - 给展示层的单向投影
//!
//! ### ③ 流程层（Workflow）
//! - `EditorSession` - 启动参数 → 初始版式 → 编辑 → 保存
//! - `Command` - 用户操作
//!
//! ### ④ 编排层（Orchestration）
//! - `App` - 配置、日志、命令列表

pub mod config;
pub mod error;
pub mod infrastructure;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult, LayoutError};
pub use infrastructure::{ContentStore, EditorSet, FileStore, MemoryStore, RegionEditors};
pub use models::{DocumentType, FirstPageLayout, LastPageLayout, PageSide, RegionName, StartupParams};
pub use orchestrator::App;
pub use services::{focus_resolution, LayoutController, LayoutObserver, LayoutState};
pub use workflow::{Command, EditorSession};
