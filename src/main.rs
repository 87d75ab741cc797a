use anyhow::Result;
use quiz_sorter::utils::logging;
use quiz_sorter::{App, Config};

fn main() -> Result<()> {
    // 加载配置
    let config = Config::from_env()?;

    // 初始化日志
    logging::init(config.verbose_logging);

    // 单个测验失败不影响退出码
    App::new(config).run()?;

    Ok(())
}
