use phf::phf_map;

/// 冲突组 → 被它覆盖的组
///
/// 覆盖是单向的：`p-3 px-2` 中 px 仍然生效，`px-2 p-3` 中 px 被丢弃。
static CONFLICTING_CLASS_GROUPS: phf::Map<&'static str, &'static [&'static str]> = phf_map! {
    "overflow" => &["overflow-x", "overflow-y"],
    "overscroll" => &["overscroll-x", "overscroll-y"],
    "inset" => &["inset-x", "inset-y", "start", "end", "top", "right", "bottom", "left"],
    "inset-x" => &["right", "left"],
    "inset-y" => &["top", "bottom"],
    "flex" => &["basis", "grow", "shrink"],
    "gap" => &["gap-x", "gap-y"],
    "p" => &["px", "py", "ps", "pe", "pt", "pr", "pb", "pl"],
    "px" => &["pr", "pl"],
    "py" => &["pt", "pb"],
    "m" => &["mx", "my", "ms", "me", "mt", "mr", "mb", "ml"],
    "mx" => &["mr", "ml"],
    "my" => &["mt", "mb"],
    "size" => &["w", "h"],
    "font-size" => &["leading"],
    "fvn-normal" => &["fvn-ordinal", "fvn-slashed-zero", "fvn-figure", "fvn-spacing", "fvn-fraction"],
    "fvn-ordinal" => &["fvn-normal"],
    "fvn-slashed-zero" => &["fvn-normal"],
    "fvn-figure" => &["fvn-normal"],
    "fvn-spacing" => &["fvn-normal"],
    "fvn-fraction" => &["fvn-normal"],
    "line-clamp" => &["display", "overflow"],
    "rounded" => &[
        "rounded-s", "rounded-e", "rounded-t", "rounded-r", "rounded-b", "rounded-l",
        "rounded-ss", "rounded-se", "rounded-ee", "rounded-es",
        "rounded-tl", "rounded-tr", "rounded-br", "rounded-bl",
    ],
    "rounded-s" => &["rounded-ss", "rounded-es"],
    "rounded-e" => &["rounded-se", "rounded-ee"],
    "rounded-t" => &["rounded-tl", "rounded-tr"],
    "rounded-r" => &["rounded-tr", "rounded-br"],
    "rounded-b" => &["rounded-br", "rounded-bl"],
    "rounded-l" => &["rounded-tl", "rounded-bl"],
    "border-spacing" => &["border-spacing-x", "border-spacing-y"],
    "border-w" => &[
        "border-w-x", "border-w-y", "border-w-s", "border-w-e",
        "border-w-t", "border-w-r", "border-w-b", "border-w-l",
    ],
    "border-w-x" => &["border-w-r", "border-w-l"],
    "border-w-y" => &["border-w-t", "border-w-b"],
    "border-color" => &[
        "border-color-x", "border-color-y", "border-color-s", "border-color-e",
        "border-color-t", "border-color-r", "border-color-b", "border-color-l",
    ],
    "border-color-x" => &["border-color-r", "border-color-l"],
    "border-color-y" => &["border-color-t", "border-color-b"],
    // translate 不覆盖 translate-z
    "translate" => &["translate-x", "translate-y", "translate-none"],
    "translate-none" => &["translate", "translate-x", "translate-y", "translate-z"],
    "scroll-m" => &[
        "scroll-mx", "scroll-my", "scroll-ms", "scroll-me",
        "scroll-mt", "scroll-mr", "scroll-mb", "scroll-ml",
    ],
    "scroll-mx" => &["scroll-mr", "scroll-ml"],
    "scroll-my" => &["scroll-mt", "scroll-mb"],
    "scroll-p" => &[
        "scroll-px", "scroll-py", "scroll-ps", "scroll-pe",
        "scroll-pt", "scroll-pr", "scroll-pb", "scroll-pl",
    ],
    "scroll-px" => &["scroll-pr", "scroll-pl"],
    "scroll-py" => &["scroll-pt", "scroll-pb"],
    "touch" => &["touch-x", "touch-y", "touch-pz"],
    "touch-x" => &["touch"],
    "touch-y" => &["touch"],
    "touch-pz" => &["touch"],
};

/// 带后缀修饰符时额外覆盖的组（`text-lg/7` 显式设置行高）
static POSTFIX_CONFLICTS: phf::Map<&'static str, &'static [&'static str]> = phf_map! {
    "font-size" => &["leading"],
};

/// 查询内置冲突组会覆盖的其他组
pub fn builtin_conflicts(group: &str, has_postfix: bool) -> Vec<&'static str> {
    let mut conflicts: Vec<&'static str> = CONFLICTING_CLASS_GROUPS
        .get(group)
        .map(|groups| groups.to_vec())
        .unwrap_or_default();

    if has_postfix {
        if let Some(groups) = POSTFIX_CONFLICTS.get(group) {
            for &other in groups.iter() {
                if !conflicts.contains(&other) {
                    conflicts.push(other);
                }
            }
        }
    }

    conflicts
}
