use crate::class_groups::{is_builtin_group, lookup_class_group};
use crate::conflicts::builtin_conflicts;
use indexmap::IndexMap;
use std::collections::HashMap;
use tailcn_core::{ClassGroupLookup, ConfigError, ExtendConfig};
use tracing::debug;

/// Tailwind 冲突组索引
///
/// 内置冲突组表之上叠加用户追加的组和冲突声明，查询时自定义组优先。
#[derive(Debug, Clone, Default)]
pub struct TailwindIndex {
    /// 完整类名 → 组
    exact: HashMap<String, String>,
    /// 前缀（`glow-`）→ 组，按前缀长度降序
    prefixes: Vec<(String, String)>,
    /// 追加的冲突
    conflicts: HashMap<String, Vec<String>>,
    /// 追加的后缀冲突
    postfix_conflicts: HashMap<String, Vec<String>>,
}

impl TailwindIndex {
    /// 只包含内置冲突组的索引
    pub fn new() -> Self {
        Self::default()
    }

    /// 从追加配置构建索引
    ///
    /// 模式不合法或冲突声明引用了未定义的组时返回错误。
    pub fn from_config(extend: &ExtendConfig) -> Result<Self, ConfigError> {
        let mut index = Self::new();

        for (group, patterns) in &extend.class_groups {
            for pattern in patterns {
                index.insert_pattern(group, pattern)?;
            }
        }
        index
            .prefixes
            .sort_by(|(a, _), (b, _)| b.len().cmp(&a.len()));

        index.conflicts = index.resolve_conflict_map(&extend.conflicting_class_groups)?;
        index.postfix_conflicts =
            index.resolve_conflict_map(&extend.conflicting_class_group_modifiers)?;

        debug!(
            exact = index.exact.len(),
            prefixes = index.prefixes.len(),
            conflicts = index.conflicts.len(),
            postfix_conflicts = index.postfix_conflicts.len(),
            "built class group index"
        );

        Ok(index)
    }

    /// 追加的组数量（不含内置组）
    pub fn custom_len(&self) -> usize {
        self.exact.len() + self.prefixes.len()
    }

    fn insert_pattern(&mut self, group: &str, pattern: &str) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidPattern {
            group: group.to_string(),
            pattern: pattern.to_string(),
        };

        if pattern.is_empty() || pattern.chars().any(char::is_whitespace) {
            return Err(invalid());
        }

        match pattern.strip_suffix('*') {
            // `glow-*` 记为前缀 `glow-`
            Some(prefix) => {
                let valid = prefix.len() > 1 && prefix.ends_with('-') && !prefix.contains('*');
                if !valid {
                    return Err(invalid());
                }
                self.prefixes.push((prefix.to_string(), group.to_string()));
            }
            None if pattern.contains('*') => return Err(invalid()),
            None => {
                self.exact.insert(pattern.to_string(), group.to_string());
            }
        }

        Ok(())
    }

    fn is_known_group(&self, group: &str) -> bool {
        is_builtin_group(group)
            || self.exact.values().any(|g| g == group)
            || self.prefixes.iter().any(|(_, g)| g == group)
    }

    fn resolve_conflict_map(
        &self,
        declared: &IndexMap<String, Vec<String>>,
    ) -> Result<HashMap<String, Vec<String>>, ConfigError> {
        let mut resolved = HashMap::with_capacity(declared.len());

        for (group, others) in declared {
            if let Some(unknown) = std::iter::once(group)
                .chain(others)
                .find(|g| !self.is_known_group(g))
            {
                return Err(ConfigError::UnknownGroup(unknown.clone()));
            }
            resolved.insert(group.clone(), others.clone());
        }

        Ok(resolved)
    }
}

impl ClassGroupLookup for TailwindIndex {
    fn class_group(&self, base: &str) -> Option<String> {
        if let Some(group) = self.exact.get(base) {
            return Some(group.clone());
        }

        let custom = self.prefixes.iter().find(|(prefix, _)| {
            base.strip_prefix(prefix.as_str())
                .is_some_and(|value| !value.is_empty())
        });
        if let Some((_, group)) = custom {
            return Some(group.clone());
        }

        lookup_class_group(base).map(str::to_string)
    }

    fn conflicting_groups(&self, group: &str, has_postfix: bool) -> Vec<&str> {
        let mut groups: Vec<&str> = builtin_conflicts(group, has_postfix);

        let extra = self.conflicts.get(group).into_iter().flatten();
        let postfix_extra = self
            .postfix_conflicts
            .get(group)
            .filter(|_| has_postfix)
            .into_iter()
            .flatten();

        for other in extra.chain(postfix_extra) {
            if !groups.contains(&other.as_str()) {
                groups.push(other.as_str());
            }
        }

        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tailcn_core::MergeConfig;

    fn index_of(config: MergeConfig) -> TailwindIndex {
        TailwindIndex::from_config(&config.extend).unwrap()
    }

    #[test]
    fn test_builtin_lookup() {
        let index = TailwindIndex::new();
        assert_eq!(index.class_group("p-4"), Some("p".to_string()));
        assert_eq!(index.class_group("text-lg"), Some("font-size".to_string()));
        assert_eq!(index.class_group("foo"), None);
        assert_eq!(index.custom_len(), 0);
    }

    #[test]
    fn test_custom_groups() {
        let index = index_of(
            MergeConfig::new().with_class_group("glow", ["glow", "glow-*"]),
        );

        assert_eq!(index.custom_len(), 2);
        assert_eq!(index.class_group("glow"), Some("glow".to_string()));
        assert_eq!(index.class_group("glow-lg"), Some("glow".to_string()));
        // 自定义前缀之外的类仍走内置表
        assert_eq!(index.class_group("text-lg"), Some("font-size".to_string()));
    }

    #[test]
    fn test_custom_group_wins_over_builtin() {
        let index = index_of(MergeConfig::new().with_class_group("brand", ["p-brand", "bg-brand-*"]));
        assert_eq!(index.class_group("p-brand"), Some("brand".to_string()));
        assert_eq!(index.class_group("bg-brand-500"), Some("brand".to_string()));
        assert_eq!(index.class_group("bg-red-500"), Some("bg-color".to_string()));
    }

    #[test]
    fn test_longest_prefix_first() {
        let index = index_of(
            MergeConfig::new()
                .with_class_group("glow", ["glow-*"])
                .with_class_group("glow-color", ["glow-color-*"]),
        );
        assert_eq!(index.class_group("glow-lg"), Some("glow".to_string()));
        assert_eq!(index.class_group("glow-color-red"), Some("glow-color".to_string()));
        // 前缀本身不匹配
        assert_eq!(index.class_group("glow-"), None);
    }

    #[test]
    fn test_custom_conflicts() {
        let index = index_of(
            MergeConfig::new()
                .with_class_group("glow", ["glow-*"])
                .with_conflict("glow", ["shadow"])
                .with_postfix_conflict("glow", ["shadow-color"]),
        );

        assert_eq!(index.conflicting_groups("glow", false), vec!["shadow"]);
        assert_eq!(
            index.conflicting_groups("glow", true),
            vec!["shadow", "shadow-color"]
        );
    }

    #[test]
    fn test_custom_conflicts_extend_builtin() {
        let index = index_of(MergeConfig::new().with_conflict("p", ["gap"]));
        let groups = index.conflicting_groups("p", false);
        assert!(groups.contains(&"px"));
        assert!(groups.contains(&"gap"));
    }

    #[test]
    fn test_conflicts_between_builtin_groups() {
        let index = index_of(MergeConfig::new().with_conflict("text-shadow", ["shadow"]));
        assert_eq!(index.custom_len(), 0);
        assert_eq!(index.conflicting_groups("text-shadow", false), vec!["shadow"]);
    }

    #[test]
    fn test_invalid_patterns() {
        for pattern in ["", "text shadow", "*", "-*", "glow*", "gl*ow", "a-*-*"] {
            let config = MergeConfig::new().with_class_group("glow", [pattern]);
            let result = TailwindIndex::from_config(&config.extend);
            assert!(
                matches!(result, Err(ConfigError::InvalidPattern { .. })),
                "pattern should be rejected: {:?}",
                pattern
            );
        }
    }

    #[test]
    fn test_unknown_conflict_group() {
        let config = MergeConfig::new().with_conflict("p", ["glow"]);
        let result = TailwindIndex::from_config(&config.extend);
        assert!(matches!(result, Err(ConfigError::UnknownGroup(g)) if g == "glow"));

        let config = MergeConfig::new().with_postfix_conflict("glow", ["shadow"]);
        let result = TailwindIndex::from_config(&config.extend);
        assert!(matches!(result, Err(ConfigError::UnknownGroup(g)) if g == "glow"));
    }
}
