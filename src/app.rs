use crate::clients::{FormClient, FormUpdateResult, TesseractClient, TextRecognizer};
use crate::config::Config;
use crate::error::{AppResult, ConfigError};
use crate::export;
use crate::models::question::{Question, QuestionSet};
use crate::segmenter;
use crate::utils::logging;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// 一次导入的结果
#[derive(Debug)]
pub struct ImportReport {
    pub questions: Vec<Question>,
    pub export_path: PathBuf,
    /// 未更新表单（dry run 或没有题目）时为 None
    pub update_result: Option<FormUpdateResult>,
}

/// 应用主结构
pub struct App<R = TesseractClient> {
    config: Config,
    image_path: String,
    recognizer: R,
    form_client: FormClient,
}

impl App<TesseractClient> {
    /// 初始化应用
    pub fn initialize(config: Config) -> AppResult<Self> {
        let recognizer = TesseractClient::new(&config);
        Self::with_recognizer(config, recognizer)
    }
}

impl<R: TextRecognizer> App<R> {
    /// 使用自定义识别器初始化应用
    pub fn with_recognizer(config: Config, recognizer: R) -> AppResult<Self> {
        let image_path = config
            .image_path
            .clone()
            .ok_or(ConfigError::MissingImagePath)?;
        if config.form_id.is_none() && !config.dry_run {
            return Err(ConfigError::MissingFormId.into());
        }

        // 初始化日志文件
        logging::init_log_file(&config.output_log_file)?;
        logging::log_startup(&image_path, config.form_id.as_deref());

        let form_client = FormClient::new(&config)?;

        Ok(Self {
            config,
            image_path,
            recognizer,
            form_client,
        })
    }

    /// 运行应用主逻辑：识别 → 切分 → 导出 → 更新表单
    pub async fn run(&self) -> AppResult<ImportReport> {
        // 1. 识别图片文字
        info!("🔍 正在识别图片文字...");
        let raw_text = self.recognizer.recognize(Path::new(&self.image_path)).await?;
        info!("✓ 识别完成，共 {} 个字符", raw_text.chars().count());

        // 2. 切分题目
        let questions = segmenter::segment(&raw_text);
        if questions.is_empty() {
            warn!("⚠️ 未识别出任何完整题目（需要题干和至少一个选项）");
        } else {
            logging::log_questions(&questions, self.config.verbose_logging);
        }

        // 3. 导出
        let mut set = QuestionSet::new(self.image_path.as_str(), questions);
        if let Some(form_id) = &self.config.form_id {
            set = set.with_form_id(form_id.as_str());
        }
        let export_path = export::save_question_set(Path::new(&self.config.output_folder), &set).await?;

        // 4. 更新表单
        let update_result = self.update_form(&set.questions).await?;

        info!("\n{}", "=".repeat(60));
        info!("✅ 导入完成: {} 道题目", set.questions.len());
        info!("{}", "=".repeat(60));

        Ok(ImportReport {
            questions: set.questions,
            export_path,
            update_result,
        })
    }

    async fn update_form(&self, questions: &[Question]) -> AppResult<Option<FormUpdateResult>> {
        if self.config.dry_run {
            info!("💡 DRY_RUN 模式，跳过表单更新");
            return Ok(None);
        }
        if questions.is_empty() {
            info!("💡 没有题目需要提交，跳过表单更新");
            return Ok(None);
        }
        let Some(form_id) = self.config.form_id.as_deref() else {
            return Err(ConfigError::MissingFormId.into());
        };

        info!("📤 正在更新表单 {}...", form_id);
        let result = self.form_client.update_form(form_id, questions).await?;
        match result.error_message() {
            None => info!("✓ 表单更新成功"),
            Some(message) => warn!("⚠️ 表单脚本返回错误: {}", message),
        }

        Ok(Some(result))
    }
}
