//! 编排层（Orchestration Layer）
//!
//! 负责会话的生命周期：加载配置、打开存储、按顺序执行命令、输出结果。
//!
//! ```text
//! orchestrator::App (处理命令列表)
//!     ↓
//! workflow::EditorSession (单个编辑会话)
//!     ↓
//! services (版式表 / 状态转换 / 控制器 / 展示投影)
//!     ↓
//! infrastructure (编辑器内容、键值存储)
//! ```

pub mod app;

pub use app::App;
