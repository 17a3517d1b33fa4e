use anyhow::Result;
use page_layout_editor::utils::logging;
use page_layout_editor::{App, Config};

fn main() -> Result<()> {
    // 加载配置
    let config = Config::load()?;

    // 初始化日志
    logging::init(config.verbose_logging);

    // 命令行参数即命令列表
    let commands: Vec<String> = std::env::args().skip(1).collect();

    let mut app = App::initialize(config)?;
    app.run(&commands)?;

    Ok(())
}
