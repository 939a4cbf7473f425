use anyhow::Result;
use quiz_form_import::utils::logging;
use quiz_form_import::{App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置：环境变量，命令行参数优先
    let config = Config::from_env().with_args(std::env::args().skip(1));

    // 初始化日志
    logging::init(config.verbose_logging);

    // 初始化并运行应用
    let report = App::initialize(config)?.run().await?;

    println!("{}", serde_json::to_string_pretty(&report.questions)?);

    Ok(())
}
