use crate::merger::Merger;
use tailcn_core::{ConfigError, MergeConfig};
use tracing::debug;

/// 从 JSON 字符串加载合并器配置
///
/// JSON 格式示例：
/// ```json
/// {
///   "prefix": "tw",
///   "extend": {
///     "classGroups": { "glow": ["glow-*"] },
///     "conflictingClassGroups": { "glow": ["shadow"] }
///   }
/// }
/// ```
pub fn load_from_json(json_str: &str) -> Result<Merger, ConfigError> {
    let config: MergeConfig = serde_json::from_str(json_str)?;

    debug!(
        class_groups = config.extend.class_groups.len(),
        conflicts = config.extend.conflicting_class_groups.len(),
        "loaded merge config"
    );

    Merger::with_config(&config)
}
