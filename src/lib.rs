//! # Quiz Form Import
//!
//! 把拍照或截图得到的选择题转换成结构化题目，并写入在线表单
//!
//! ## 处理流程
//!
//! 1. `clients::ocr_client` - 调用 OCR 引擎，得到逐行文本
//! 2. `segmenter` - 把逐行文本切分为"题干 + 选项"
//! 3. `export` - 把结果导出为 TOML
//! 4. `clients::form_client` - 提交给远程表单脚本
//!
//! `app::App` 负责串联以上步骤。
//!
//! ## 模块结构

pub mod app;
pub mod clients;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod segmenter;
pub mod utils;

// 重新导出常用类型
pub use app::{App, ImportReport};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::question::{Question, QuestionSet};
pub use segmenter::segment;
