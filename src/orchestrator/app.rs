use anyhow::{Context, Result};
use tracing::{error, warn};

use crate::config::Config;
use crate::infrastructure::FileStore;
use crate::models::StartupParams;
use crate::utils::logging::{append_log_line, init_log_file, log_startup, print_final_state};
use crate::workflow::{Command, EditorSession};

/// 应用主结构
pub struct App {
    config: Config,
    session: EditorSession<FileStore>,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        init_log_file(&config.output_log_file)
            .with_context(|| format!("无法创建日志文件: {}", config.output_log_file))?;

        log_startup(&config);

        let store = FileStore::open(&config.storage_file)
            .with_context(|| format!("无法打开存储文件: {}", config.storage_file))?;
        let params = StartupParams::from_query(&config.startup_query);
        let session = EditorSession::start(params, store).context("无法按启动参数初始化版式")?;

        Ok(Self { config, session })
    }

    pub fn session(&self) -> &EditorSession<FileStore> {
        &self.session
    }

    /// 依次执行命令
    ///
    /// 版式类错误只拒绝当前命令，其余错误终止运行。返回被拒绝的命令数
    pub fn run<I, S>(&mut self, commands: I) -> Result<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut rejected = 0;

        for raw in commands {
            let raw = raw.as_ref();
            let command = match Command::parse(raw) {
                Ok(command) => command,
                Err(e) => {
                    warn!("⚠️ {}", e);
                    rejected += 1;
                    continue;
                }
            };

            match command.apply(&mut self.session) {
                Ok(()) => append_log_line(&self.config.output_log_file, raw)?,
                Err(e) if e.as_layout().is_some() => {
                    warn!("⚠️ 命令被拒绝 [{}]: {}", raw, e);
                    append_log_line(&self.config.output_log_file, &format!("拒绝 {}: {}", raw, e))?;
                    rejected += 1;
                }
                Err(e) => {
                    error!("❌ 命令执行失败 [{}]: {}", raw, e);
                    return Err(e).with_context(|| format!("命令执行失败: {}", raw));
                }
            }
        }

        print_final_state(self.session.state(), rejected);

        if self.config.print_view {
            let view = self.session.view();
            println!("{}", serde_json::to_string_pretty(&view)?);
        }

        Ok(rejected)
    }
}
