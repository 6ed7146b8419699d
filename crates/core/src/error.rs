use thiserror::Error;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// JSON 解析失败
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// 类名模式不合法（空串、含空白、`*` 不在末尾）
    #[error("Invalid class pattern '{pattern}' in group '{group}'")]
    InvalidPattern { group: String, pattern: String },

    /// 冲突声明引用了不存在的组
    #[error("Class group '{0}' is not defined")]
    UnknownGroup(String),
}
