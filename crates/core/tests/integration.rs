use std::collections::HashMap;
use tailcn_core::{
    join_classes, resolve_conflicts, split_classes, Claim, ClassGroupLookup, ClassValue,
    MergeToken,
};

/// 只认识 `p-*` / `px-*` / `m-*` 的查询表
struct SpacingLookup {
    conflicts: HashMap<&'static str, Vec<&'static str>>,
}

impl SpacingLookup {
    fn new() -> Self {
        Self {
            conflicts: HashMap::from([("p", vec!["px"])]),
        }
    }
}

impl ClassGroupLookup for SpacingLookup {
    fn class_group(&self, base: &str) -> Option<String> {
        let (plugin, _) = base.split_once('-')?;
        matches!(plugin, "p" | "px" | "m").then(|| plugin.to_string())
    }

    fn conflicting_groups(&self, group: &str, _has_postfix: bool) -> Vec<&str> {
        self.conflicts.get(group).cloned().unwrap_or_default()
    }
}

fn merge_with(lookup: &impl ClassGroupLookup, inputs: &[ClassValue]) -> String {
    let joined = join_classes(inputs);
    let tokens = split_classes(&joined)
        .into_iter()
        .map(|raw| match lookup.class_group(raw) {
            Some(group) => {
                let conflicts = lookup
                    .conflicting_groups(&group, false)
                    .into_iter()
                    .map(str::to_string)
                    .collect();
                MergeToken::claiming(
                    raw,
                    Claim {
                        modifier_id: String::new(),
                        group,
                        conflicts,
                    },
                )
            }
            None => MergeToken::unknown(raw),
        })
        .collect();

    resolve_conflicts(tokens).join(" ")
}

#[test]
fn test_end_to_end_flatten_then_resolve() {
    let lookup = SpacingLookup::new();

    // 1. 混合输入：字符串、条件、列表
    let inputs = vec![
        ClassValue::from("px-2 foo"),
        ClassValue::from(("m-1", true)),
        ClassValue::from(vec![ClassValue::from("p-4"), ClassValue::from(None::<&str>)]),
        ClassValue::from(("m-2", false)),
    ];

    // 2. 拼接结果保留全部为真的类
    assert_eq!(join_classes(&inputs), "px-2 foo m-1 p-4");

    // 3. p-4 覆盖 px-2，未知类保留
    assert_eq!(merge_with(&lookup, &inputs), "foo m-1 p-4");
}

#[test]
fn test_end_to_end_one_way_override() {
    let lookup = SpacingLookup::new();
    let inputs = [ClassValue::from("p-4"), ClassValue::from("px-2")];
    assert_eq!(merge_with(&lookup, &inputs), "p-4 px-2");
}

#[test]
fn test_end_to_end_empty_input() {
    let lookup = SpacingLookup::new();
    assert_eq!(merge_with(&lookup, &[]), "");
    assert_eq!(merge_with(&lookup, &[ClassValue::Empty, ClassValue::from("")]), "");
}
