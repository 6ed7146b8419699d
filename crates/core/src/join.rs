use crate::class_value::ClassValue;

impl ClassValue {
    /// 把当前值展开写入 `out`，类名之间用单个空格分隔
    pub fn write_to(&self, out: &mut String) {
        match self {
            ClassValue::Empty => {}
            ClassValue::Str(s) => push_class(out, s),
            ClassValue::List(items) => {
                for item in items {
                    item.write_to(out);
                }
            }
            ClassValue::Conditional(map) => {
                for (class, &on) in map {
                    if on {
                        push_class(out, class);
                    }
                }
            }
        }
    }
}

fn push_class(out: &mut String, class: &str) {
    if class.is_empty() {
        return;
    }
    if !out.is_empty() {
        out.push(' ');
    }
    out.push_str(class);
}

/// 条件拼接类名（flatten 步骤）
///
/// 递归展开每个输入，按出现顺序收集字符串和值为 true 的映射键，
/// 忽略假值与空串。字符串原样拼接，内部空白留给 merge 步骤处理。
///
/// # 示例
///
/// ```
/// use tailcn_core::{join_classes, ClassValue};
///
/// let inputs = vec![
///     ClassValue::from(["a", "b"]),
///     ClassValue::from(("c", true)),
///     ClassValue::from(("d", false)),
/// ];
/// assert_eq!(join_classes(&inputs), "a b c");
/// ```
pub fn join_classes(inputs: &[ClassValue]) -> String {
    let mut out = String::new();
    for input in inputs {
        input.write_to(&mut out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_join_empty() {
        assert_eq!(join_classes(&[]), "");
    }

    #[test]
    fn test_join_strings() {
        let inputs = vec![ClassValue::from("a"), ClassValue::from("b")];
        assert_eq!(join_classes(&inputs), "a b");
    }

    #[test]
    fn test_join_skips_falsy() {
        let inputs = vec![
            ClassValue::from("a"),
            ClassValue::from(None::<&str>),
            ClassValue::Empty,
            ClassValue::from(false),
            ClassValue::from(""),
        ];
        assert_eq!(join_classes(&inputs), "a");
    }

    #[test]
    fn test_join_nested_lists() {
        let inputs = vec![ClassValue::List(vec![
            ClassValue::from("a"),
            ClassValue::List(vec![ClassValue::Empty, ClassValue::from("b")]),
            ClassValue::List(vec![]),
        ])];
        assert_eq!(join_classes(&inputs), "a b");
    }

    #[test]
    fn test_join_conditional_keeps_insertion_order() {
        let mut map = IndexMap::new();
        map.insert("z", true);
        map.insert("y", false);
        map.insert("x", true);

        let inputs = vec![ClassValue::from(map)];
        assert_eq!(join_classes(&inputs), "z x");
    }

    #[test]
    fn test_join_keeps_inner_whitespace() {
        let inputs = vec![ClassValue::from("a  b"), ClassValue::from("c")];
        assert_eq!(join_classes(&inputs), "a  b c");
    }
}
