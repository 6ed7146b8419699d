//! 条件拼接类名，并合并互相冲突的 Tailwind 类
//!
//! ```
//! use tailcn::cn;
//!
//! let active = true;
//! assert_eq!(
//!     cn!("px-2 py-1 bg-red-500", ("bg-blue-500", active), "p-3"),
//!     "bg-blue-500 p-3"
//! );
//! ```

pub use tailcn_core::{ClassValue, ConfigError, ExtendConfig, MergeConfig};
pub use tailcn_tw_index::{load_from_json, tw_merge, Merger};

use tailcn_core::join_classes;

/// 拼接并合并类名（`join` + `tw_merge`）
///
/// 没有输入时返回空串；未识别的类原样保留。
pub fn cn<I, V>(inputs: I) -> String
where
    I: IntoIterator<Item = V>,
    V: Into<ClassValue>,
{
    tw_merge(&join(inputs))
}

/// 用自定义合并器拼接并合并类名
pub fn cn_with<I, V>(merger: &Merger, inputs: I) -> String
where
    I: IntoIterator<Item = V>,
    V: Into<ClassValue>,
{
    merger.merge(&join(inputs))
}

/// 只拼接不合并（clsx）
///
/// 按出现顺序收集为真的字符串和值为 true 的键，空格连接。
pub fn join<I, V>(inputs: I) -> String
where
    I: IntoIterator<Item = V>,
    V: Into<ClassValue>,
{
    let values: Vec<ClassValue> = inputs.into_iter().map(Into::into).collect();
    join_classes(&values)
}

/// 可变参数版 [`cn`]，参数可以是不同类型
#[macro_export]
macro_rules! cn {
    ($($arg:expr),* $(,)?) => {
        $crate::cn::<::std::vec::Vec<$crate::ClassValue>, $crate::ClassValue>(
            ::std::vec![$($crate::ClassValue::from($arg)),*]
        )
    };
}

/// 可变参数版 [`join`]
#[macro_export]
macro_rules! join {
    ($($arg:expr),* $(,)?) => {
        $crate::join::<::std::vec::Vec<$crate::ClassValue>, $crate::ClassValue>(
            ::std::vec![$($crate::ClassValue::from($arg)),*]
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cn_no_args() {
        assert_eq!(cn!(), "");
        assert_eq!(cn(Vec::<ClassValue>::new()), "");
    }

    #[test]
    fn test_cn_iterator() {
        assert_eq!(cn(["p-2", "p-4"]), "p-4");
        assert_eq!(cn(vec!["a".to_string(), "b".to_string()]), "a b");
    }

    #[test]
    fn test_join_does_not_merge() {
        assert_eq!(join!("p-2", "p-4"), "p-2 p-4");
        assert_eq!(join(["p-2", "", "p-4"]), "p-2 p-4");
    }

    #[test]
    fn test_cn_with_custom_merger() {
        let merger = Merger::with_config(&MergeConfig::new().with_prefix("tw")).unwrap();
        assert_eq!(cn_with(&merger, ["tw:p-2", "tw:p-4", "p-2"]), "tw:p-4 p-2");
    }
}
