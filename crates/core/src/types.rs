use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// 合并配置
///
/// JSON 格式示例：
/// ```json
/// {
///   "prefix": "tw",
///   "extend": {
///     "classGroups": { "glow": ["glow", "glow-*"] },
///     "conflictingClassGroups": { "glow": ["shadow"] },
///     "conflictingClassGroupModifiers": { "glow": ["shadow-color"] }
///   }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MergeConfig {
    /// Tailwind 前缀（v4 写作 `tw:p-4`），不带前缀的类视为外部类原样保留
    pub prefix: Option<String>,
    /// 在内置冲突组之上追加的配置
    pub extend: ExtendConfig,
}

/// 追加的冲突组配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExtendConfig {
    /// 组 ID → 类名模式列表
    ///
    /// 模式是完整类名（`shadow-glow`），或以 `-*` 结尾的前缀（`glow-*`），
    /// 后者匹配前缀之后的任意值。自定义组优先于内置组。
    pub class_groups: IndexMap<String, Vec<String>>,
    /// 组 ID → 被它覆盖的组 ID 列表
    pub conflicting_class_groups: IndexMap<String, Vec<String>>,
    /// 组 ID → 带后缀修饰符时额外覆盖的组 ID 列表
    pub conflicting_class_group_modifiers: IndexMap<String, Vec<String>>,
}

impl MergeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置前缀
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// 追加一个冲突组
    pub fn with_class_group<I, S>(mut self, group: impl Into<String>, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extend
            .class_groups
            .entry(group.into())
            .or_default()
            .extend(patterns.into_iter().map(Into::into));
        self
    }

    /// 声明 `group` 覆盖 `others`
    pub fn with_conflict<I, S>(mut self, group: impl Into<String>, others: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extend
            .conflicting_class_groups
            .entry(group.into())
            .or_default()
            .extend(others.into_iter().map(Into::into));
        self
    }

    /// 声明 `group` 带后缀修饰符时覆盖 `others`
    pub fn with_postfix_conflict<I, S>(mut self, group: impl Into<String>, others: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extend
            .conflicting_class_group_modifiers
            .entry(group.into())
            .or_default()
            .extend(others.into_iter().map(Into::into));
        self
    }
}
