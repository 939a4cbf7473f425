use serde::{Deserialize, Serialize};

/// 一道选择题：题干 + 按出现顺序排列的选项
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub text: String,
    #[serde(default)]
    pub options: Vec<String>,
}

impl Question {
    /// 题干非空且至少有一个选项
    pub fn is_complete(&self) -> bool {
        !self.text.is_empty() && !self.options.is_empty()
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // 截断题干以便显示（最多80个字符）
        let preview = if self.text.chars().count() > 80 {
            self.text.chars().take(80).collect::<String>() + "..."
        } else {
            self.text.clone()
        };
        write!(f, "{} [选项: {}]", preview, self.options.len())
    }
}

/// 一次识别结果的导出记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_id: Option<String>,
    pub source_image: String,
    pub extracted_at: String,
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl QuestionSet {
    pub fn new(source_image: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            form_id: None,
            source_image: source_image.into(),
            extracted_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            questions,
        }
    }

    pub fn with_form_id(mut self, form_id: impl Into<String>) -> Self {
        self.form_id = Some(form_id.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_complete() {
        let mut q = Question::default();
        assert!(!q.is_complete());
        q.text = "Q?".to_string();
        assert!(!q.is_complete());
        q.options.push("A) yes".to_string());
        assert!(q.is_complete());
    }

    #[test]
    fn test_serializes_text_and_options() {
        let q = Question {
            text: "Q?".to_string(),
            options: vec!["A) yes".to_string()],
        };
        let value = serde_json::to_value(&q).unwrap();
        assert_eq!(value, serde_json::json!({"text": "Q?", "options": ["A) yes"]}));
    }

    #[test]
    fn test_display_truncates_long_text() {
        let q = Question {
            text: "x".repeat(100),
            options: vec!["A) y".to_string(), "B) z".to_string()],
        };
        let shown = q.to_string();
        assert!(shown.starts_with(&"x".repeat(80)));
        assert!(shown.ends_with("... [选项: 2]"));
    }
}
