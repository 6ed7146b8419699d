use serde::Serialize;

/// 解析后的 Tailwind class 表示
///
/// 只拆出冲突判定需要的部分，值本身不做解释（由 tw_index 的校验器负责）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ParsedClass {
    /// 修饰符列表，保持书写顺序（如 ["md", "hover"]）
    pub modifiers: Vec<String>,

    /// 重要性标记（`!p-4` 或 `p-4!`）
    pub important: bool,

    /// 是否为负值（如 -m-4）
    pub negative: bool,

    /// 去掉修饰符、`!` 和负号之后的主体（如 "bg-red-500/50"）
    pub base: String,

    /// base 中后缀修饰符 `/` 的位置
    #[serde(skip)]
    pub(crate) postfix_at: Option<usize>,
}

/// 位置会改变生成的选择器的修饰符：伪元素和 `*` / `**` 子代选择器
const ORDER_SENSITIVE_MODIFIERS: &[&str] = &[
    "*",
    "**",
    "after",
    "backdrop",
    "before",
    "details-content",
    "file",
    "first-letter",
    "first-line",
    "marker",
    "placeholder",
    "selection",
];

impl ParsedClass {
    /// 创建一个没有修饰符的 ParsedClass
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            modifiers: Vec::new(),
            important: false,
            negative: false,
            base: base.into(),
            postfix_at: None,
        }
    }

    /// 添加修饰符
    pub fn with_modifier(mut self, modifier: impl Into<String>) -> Self {
        self.modifiers.push(modifier.into());
        self
    }

    /// 设置重要性
    pub fn with_important(mut self, important: bool) -> Self {
        self.important = important;
        self
    }

    /// 去掉后缀修饰符的主体（`text-lg/7` → `text-lg`）
    pub fn base_without_postfix(&self) -> &str {
        match self.postfix_at {
            Some(pos) => &self.base[..pos],
            None => &self.base,
        }
    }

    /// 后缀修饰符内容（`bg-red-500/50` → `50`）
    pub fn postfix(&self) -> Option<&str> {
        self.postfix_at.map(|pos| &self.base[pos + 1..])
    }

    /// 是否为任意属性（如 `[mask-type:luminance]`）
    pub fn is_arbitrary_property(&self) -> bool {
        self.base.len() > 2
            && self.base.starts_with('[')
            && self.base.ends_with(']')
            && self.base.contains(':')
    }

    /// 任意属性的属性名（`[mask-type:luminance]` → `mask-type`）
    pub fn arbitrary_property_name(&self) -> Option<&str> {
        if !self.is_arbitrary_property() {
            return None;
        }
        let inner = &self.base[1..self.base.len() - 1];
        inner.split_once(':').map(|(name, _)| name)
    }

    /// 冲突判定用的修饰符 ID
    ///
    /// 修饰符按 `sort_modifiers` 规整后用 `:` 连接，重要性追加 `!`。
    /// 只有 ID 相同的类才可能互相覆盖。
    pub fn modifier_id(&self) -> String {
        let mut id = sort_modifiers(&self.modifiers).join(":");
        if self.important {
            id.push('!');
        }
        id
    }
}

/// 顺序敏感的修饰符不能参与排序
///
/// 任意变体（`[&>*]`、`[@supports(display:grid)]`）也算在内。
pub fn is_order_sensitive(modifier: &str) -> bool {
    modifier.starts_with('[') || ORDER_SENSITIVE_MODIFIERS.contains(&modifier)
}

/// 规整修饰符顺序
///
/// 普通修饰符之间的顺序不影响生成的 CSS，按字典序排序；
/// 顺序敏感的修饰符（任意变体、伪元素、`*`）保持原位，
/// 并把两侧的修饰符分隔成独立的排序段。
///
/// # 示例
///
/// ```
/// use tailcn_tw_parse::sort_modifiers;
///
/// let mods = vec!["hover".to_string(), "focus".to_string()];
/// assert_eq!(sort_modifiers(&mods), vec!["focus", "hover"]);
/// ```
pub fn sort_modifiers(modifiers: &[String]) -> Vec<String> {
    if modifiers.len() <= 1 {
        return modifiers.to_vec();
    }

    let mut sorted = Vec::with_capacity(modifiers.len());
    let mut run: Vec<&str> = Vec::new();

    for modifier in modifiers {
        if is_order_sensitive(modifier) {
            run.sort_unstable();
            sorted.extend(run.drain(..).map(str::to_string));
            sorted.push(modifier.clone());
        } else {
            run.push(modifier);
        }
    }

    run.sort_unstable();
    sorted.extend(run.into_iter().map(str::to_string));
    sorted
}
