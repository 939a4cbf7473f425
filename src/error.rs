use thiserror::Error;

/// 应用程序错误类型
///
/// 题目切分本身不会失败，这里只覆盖边界上的 OCR、表单、文件和配置错误。
#[derive(Debug, Error)]
pub enum AppError {
    /// OCR 识别错误
    #[error("OCR错误: {0}")]
    Ocr(#[from] OcrError),
    /// 表单更新错误
    #[error("表单错误: {0}")]
    Form(#[from] FormError),
    /// 文件操作错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
}

/// OCR 识别错误
#[derive(Debug, Error)]
pub enum OcrError {
    /// 图片不存在
    #[error("图片不存在: {path}")]
    ImageNotFound { path: String },
    /// 不支持的图片格式
    #[error("不支持的图片格式 ({path})，仅支持 png/jpg/jpeg")]
    UnsupportedImage { path: String },
    /// 启动识别程序失败
    #[error("无法启动识别程序 {program}: {source}")]
    SpawnFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },
    /// 识别程序返回非零状态
    #[error("识别程序执行失败 (状态: {status:?}): {stderr}")]
    RecognitionFailed { status: Option<i32>, stderr: String },
}

/// 表单更新错误
#[derive(Debug, Error)]
pub enum FormError {
    /// 表单ID无效
    #[error("表单ID无效: '{form_id}'")]
    InvalidFormId { form_id: String },
    /// 网络请求失败
    #[error("表单请求失败 ({endpoint}): {source}")]
    RequestFailed {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    /// 表单服务返回错误状态码
    #[error("表单服务返回错误状态 ({endpoint}): {status}")]
    BadStatus { endpoint: String, status: u16 },
    /// 响应不是合法 JSON
    #[error("表单服务返回的不是合法JSON: {body}")]
    InvalidResponse { body: String },
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 写入文件失败
    #[error("写入文件失败 ({path}): {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// TOML 序列化失败
    #[error("TOML序列化失败: {0}")]
    TomlSerializeFailed(#[from] toml::ser::Error),
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 未指定图片路径
    #[error("未指定图片路径 (IMAGE_PATH 或第一个命令行参数)")]
    MissingImagePath,
    /// 未指定表单ID
    #[error("未指定表单ID (FORM_ID 或第二个命令行参数)")]
    MissingFormId,
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建文件读取错误
    pub fn file_read_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.into(),
            source,
        })
    }

    /// 创建文件写入错误
    pub fn file_write_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::WriteFailed {
            path: path.into(),
            source,
        })
    }

    /// 创建表单请求失败错误
    pub fn form_request_failed(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        AppError::Form(FormError::RequestFailed {
            endpoint: endpoint.into(),
            source,
        })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
