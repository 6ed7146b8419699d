/// 按空白拆分类名字符串
///
/// 保留原始顺序和重复项：冲突合并依赖书写顺序，
/// 未知类也要原样透传。
pub fn split_classes(input: &str) -> Vec<&str> {
    input.split_whitespace().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_preserves_order() {
        assert_eq!(split_classes("p-4 m-2"), vec!["p-4", "m-2"]);
    }

    #[test]
    fn test_split_keeps_duplicates() {
        assert_eq!(split_classes("foo foo"), vec!["foo", "foo"]);
    }

    #[test]
    fn test_split_mixed_whitespace() {
        assert_eq!(split_classes("  p-4\n\tm-2  "), vec!["p-4", "m-2"]);
    }

    #[test]
    fn test_split_empty() {
        assert!(split_classes("").is_empty());
        assert!(split_classes("   ").is_empty());
    }
}
