//! 表单客户端
//!
//! 把识别出的题目提交给远程表单脚本，由脚本写入目标表单
use crate::config::Config;
use crate::error::{AppError, AppResult, FormError};
use crate::models::question::Question;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

/// 提交给表单脚本的请求体
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FormUpdateRequest<'a> {
    form_id: &'a str,
    questions: &'a [Question],
}

/// 表单脚本的响应，内容对本程序不透明
#[derive(Debug, Clone, PartialEq)]
pub struct FormUpdateResult {
    pub body: Value,
}

impl FormUpdateResult {
    /// 响应中带有 `error` 字段即视为失败
    pub fn error_message(&self) -> Option<&str> {
        self.body.get("error").and_then(Value::as_str)
    }

    pub fn is_success(&self) -> bool {
        self.error_message().is_none()
    }
}

/// 表单客户端
pub struct FormClient {
    http: reqwest::Client,
    script_url: String,
}

impl FormClient {
    /// 创建新的表单客户端
    pub fn new(config: &Config) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| AppError::form_request_failed(&config.form_script_url, e))?;

        Ok(Self {
            http,
            script_url: config.form_script_url.clone(),
        })
    }

    /// 更新表单
    ///
    /// # 参数
    /// - `form_id`: 目标表单ID
    /// - `questions`: 题目列表
    ///
    /// # 返回
    /// 返回表单脚本的响应
    pub async fn update_form(&self, form_id: &str, questions: &[Question]) -> AppResult<FormUpdateResult> {
        let form_id = validate_form_id(form_id)?;

        debug!("正在提交 {} 道题目到表单 {}", questions.len(), form_id);

        let response = self
            .http
            .post(&self.script_url)
            .json(&FormUpdateRequest { form_id, questions })
            .send()
            .await
            .map_err(|e| AppError::form_request_failed(&self.script_url, e))?;

        let status = response.status();
        // 先按文本读取，便于在解析失败时记录原始内容
        let text = response
            .text()
            .await
            .map_err(|e| AppError::form_request_failed(&self.script_url, e))?;
        debug!("表单脚本原始响应: {}", text);

        if !status.is_success() {
            warn!("表单脚本返回错误状态: {}", status);
            return Err(FormError::BadStatus {
                endpoint: self.script_url.clone(),
                status: status.as_u16(),
            }
            .into());
        }

        Ok(parse_response(&text)?)
    }
}

/// 检查表单ID，返回去掉首尾空白后的值
pub fn validate_form_id(form_id: &str) -> Result<&str, FormError> {
    let trimmed = form_id.trim();
    if trimmed.is_empty() || trimmed.chars().any(char::is_whitespace) {
        return Err(FormError::InvalidFormId {
            form_id: form_id.to_string(),
        });
    }
    Ok(trimmed)
}

/// 解析表单脚本响应
pub fn parse_response(text: &str) -> Result<FormUpdateResult, FormError> {
    match serde_json::from_str::<Value>(text) {
        Ok(body) => Ok(FormUpdateResult { body }),
        Err(e) => {
            warn!("无法解析表单脚本响应: {}", e);
            Err(FormError::InvalidResponse {
                body: text.to_string(),
            })
        }
    }
}
