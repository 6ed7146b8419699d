use crate::index::TailwindIndex;
use tailcn_core::{
    resolve_conflicts, split_classes, Claim, ClassGroupLookup, ConfigError, MergeConfig,
    MergeToken,
};
use tailcn_tw_parse::{parse_class, ParsedClass};
use tracing::{debug, trace};

/// Tailwind 类冲突合并器
///
/// 对同一修饰符组合下属于同一冲突组的类，只保留最后一个：
///
/// ```
/// use tailcn_tw_index::Merger;
///
/// let merger = Merger::new();
/// assert_eq!(merger.merge("px-2 py-1 bg-red-500 p-3 bg-[#B91C1C]"), "p-3 bg-[#B91C1C]");
/// assert_eq!(merger.merge("hover:p-2 p-4"), "hover:p-2 p-4");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Merger {
    index: TailwindIndex,
    prefix: Option<String>,
}

impl Merger {
    /// 使用内置冲突组表
    pub fn new() -> Self {
        Self::default()
    }

    /// 使用自定义配置（前缀、追加的组和冲突）
    pub fn with_config(config: &MergeConfig) -> Result<Self, ConfigError> {
        let index = TailwindIndex::from_config(&config.extend)?;
        debug!(prefix = ?config.prefix, "created merger");

        Ok(Self {
            index,
            prefix: config.prefix.clone(),
        })
    }

    pub fn index(&self) -> &TailwindIndex {
        &self.index
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// 合并类名字符串，后出现的类覆盖前面同组的类
    ///
    /// 未识别的类原样保留（包括重复项），输出用单个空格连接。
    pub fn merge(&self, classes: &str) -> String {
        let tokens = split_classes(classes)
            .into_iter()
            .map(|raw| self.tokenize(raw))
            .collect();

        resolve_conflicts(tokens).join(" ")
    }

    fn tokenize<'a>(&self, raw: &'a str) -> MergeToken<'a> {
        // 配置了前缀时，不带前缀的类不归 Tailwind 管
        let class = match &self.prefix {
            Some(prefix) => match raw
                .strip_prefix(prefix.as_str())
                .and_then(|rest| rest.strip_prefix(':'))
            {
                Some(rest) => rest,
                None => return MergeToken::unknown(raw),
            },
            None => raw,
        };

        let parsed = match parse_class(class) {
            Ok(parsed) => parsed,
            Err(err) => {
                trace!(class = raw, %err, "kept unparsable class");
                return MergeToken::unknown(raw);
            }
        };

        match self.claim(&parsed) {
            Some(claim) => MergeToken::claiming(raw, claim),
            None => MergeToken::unknown(raw),
        }
    }

    fn claim(&self, parsed: &ParsedClass) -> Option<Claim> {
        let (group, has_postfix) = match parsed.arbitrary_property_name() {
            Some(property) => (format!("arbitrary..{property}"), false),
            None => self.group_of(parsed)?,
        };

        let conflicts = self
            .index
            .conflicting_groups(&group, has_postfix)
            .into_iter()
            .map(str::to_string)
            .collect();

        Some(Claim {
            modifier_id: parsed.modifier_id(),
            group,
            conflicts,
        })
    }

    /// 先去掉后缀查找（`bg-red-500/50`），找不到再用完整主体（`w-1/2` 这类分数值）
    fn group_of(&self, parsed: &ParsedClass) -> Option<(String, bool)> {
        if parsed.postfix().is_some() {
            if let Some(group) = self.index.class_group(parsed.base_without_postfix()) {
                return Some((group, true));
            }
        }

        self.index
            .class_group(&parsed.base)
            .map(|group| (group, false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_merge_basic() {
        let merger = Merger::new();
        assert_eq!(merger.merge("p-2 p-4"), "p-4");
        assert_eq!(merger.merge("p-2 m-4"), "p-2 m-4");
        assert_eq!(merger.merge(""), "");
        assert_eq!(merger.merge("  p-2 \n p-4 "), "p-4");
    }

    #[test]
    fn test_merge_conflicting_groups() {
        let merger = Merger::new();
        assert_eq!(merger.merge("px-2 py-1 p-3"), "p-3");
        assert_eq!(merger.merge("p-3 px-2"), "p-3 px-2");
        assert_eq!(merger.merge("inset-x-2 left-1 inset-0"), "inset-0");
    }

    #[test]
    fn test_merge_modifiers() {
        let merger = Merger::new();
        assert_eq!(merger.merge("hover:p-2 p-4"), "hover:p-2 p-4");
        assert_eq!(merger.merge("hover:p-2 hover:p-4"), "hover:p-4");
        assert_eq!(merger.merge("hover:focus:p-2 focus:hover:p-4"), "focus:hover:p-4");
        assert_eq!(merger.merge("md:p-2 md:hover:p-4"), "md:p-2 md:hover:p-4");
    }

    #[test]
    fn test_merge_important() {
        let merger = Merger::new();
        assert_eq!(merger.merge("p-4! p-2"), "p-4! p-2");
        assert_eq!(merger.merge("!p-4 !p-2"), "!p-2");
        assert_eq!(merger.merge("!p-4 p-2!"), "p-2!");
    }

    #[test]
    fn test_merge_negative() {
        let merger = Merger::new();
        assert_eq!(merger.merge("-m-2 m-4"), "m-4");
        assert_eq!(merger.merge("m-4 -m-2"), "-m-2");
    }

    #[test]
    fn test_merge_postfix() {
        let merger = Merger::new();
        assert_eq!(merger.merge("bg-red-500/50 bg-blue-500"), "bg-blue-500");
        assert_eq!(merger.merge("text-lg/7 leading-9"), "text-lg/7 leading-9");
        assert_eq!(merger.merge("leading-9 text-lg/7"), "text-lg/7");
        assert_eq!(merger.merge("w-1/2 w-full"), "w-full");
    }

    #[test]
    fn test_merge_same_plugin_different_groups() {
        let merger = Merger::new();
        assert_eq!(merger.merge("text-red-500 text-lg"), "text-red-500 text-lg");
        assert_eq!(merger.merge("text-red-500 text-blue-500"), "text-blue-500");
        assert_eq!(merger.merge("bg-[#fff] bg-red-500"), "bg-red-500");
        assert_eq!(merger.merge("border-2 border-red-500"), "border-2 border-red-500");
    }

    #[test]
    fn test_merge_arbitrary_property() {
        let merger = Merger::new();
        assert_eq!(
            merger.merge("[mask-type:luminance] [mask-type:alpha]"),
            "[mask-type:alpha]"
        );
        assert_eq!(
            merger.merge("[mask-type:luminance] [color:red]"),
            "[mask-type:luminance] [color:red]"
        );
    }

    #[test]
    fn test_merge_unknown_kept() {
        let merger = Merger::new();
        assert_eq!(merger.merge("foo foo"), "foo foo");
        assert_eq!(merger.merge("foo p-2 bar p-4"), "foo bar p-4");
        // 无法解析的类也原样保留
        assert_eq!(merger.merge("hover: w-[ p-2"), "hover: w-[ p-2");
    }

    #[test]
    fn test_merge_with_prefix() {
        let merger = Merger::with_config(&MergeConfig::new().with_prefix("tw")).unwrap();
        assert_eq!(merger.prefix(), Some("tw"));
        assert_eq!(merger.merge("tw:p-2 tw:p-4 p-2 p-4"), "tw:p-4 p-2 p-4");
        assert_eq!(merger.merge("tw:hover:p-2 tw:hover:p-4"), "tw:hover:p-4");
    }

    #[test]
    fn test_merge_with_custom_groups() {
        let config = MergeConfig::new()
            .with_class_group("glow", ["glow-*"])
            .with_conflict("glow", ["text-color"]);
        let merger = Merger::with_config(&config).unwrap();

        assert_eq!(merger.merge("glow-sm glow-lg"), "glow-lg");
        assert_eq!(merger.merge("text-red-500 glow-lg"), "glow-lg");
        assert_eq!(merger.merge("glow-lg text-red-500"), "glow-lg text-red-500");
        assert_eq!(merger.index().custom_len(), 1);
    }
}
