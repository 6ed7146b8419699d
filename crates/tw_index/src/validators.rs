//! 冲突组规则的值校验器
//!
//! 同一个插件（如 `text`、`bg`）会被多个冲突组共用，插件之后的值决定类属于哪个组。
//! 规则按顺序尝试，第一个通过的校验器胜出。
//!
//! 任意值分两种写法：`[...]` 是任意值，`(...)` 是 CSS 变量简写。
//! `Arbitrary*` 校验 `[...]`，可按标签或内容判断；`Variable*` 校验 `(...)`，只能按标签判断。

/// 值校验器
#[derive(Debug, Clone, Copy)]
pub enum Validator {
    /// 没有值（`border`、`rounded`、`shadow`）
    Empty,
    /// 固定关键字
    Keywords(&'static [&'static str]),
    /// 任一校验器通过即可
    OneOf(&'static [Validator]),
    /// 非负数字（`4`、`0.5`）
    Number,
    /// 非负整数（`z-10`、`order-2`、`grid-cols-3`）
    Integer,
    /// 分数（`1/2`）
    Fraction,
    /// 百分比（`50%`）
    Percent,
    /// T-shirt 尺寸（`xs`、`lg`、`2xl`）
    TshirtSize,
    /// 任意非空值（颜色等开放取值）
    Any,
    /// 不是 `[...]` 也不是 `(...)` 的非空值（字体族名）
    AnyNonArbitrary,
    /// 任意值 `[...]`，不限类型
    ArbitraryValue,
    /// CSS 变量简写 `(...)`，不限类型
    ArbitraryVariable,
    /// 长度（`[13px]`、`[calc(100%-1rem)]`、`[length:var(--x)]`）
    ArbitraryLength,
    /// 数字（`[500]`、`[number:var(--x)]`）
    ArbitraryNumber,
    /// 位置，只认标签（`[position:center_top]`、`[percentage:...]`）
    ArbitraryPosition,
    /// 尺寸，只认标签（`[size:200px_100px]`、`[length:...]`）
    ArbitrarySize,
    /// 图片（`[url(/a.png)]`、`[linear-gradient(...)]`）
    ArbitraryImage,
    /// 阴影（`[0_35px_60px_-15px_rgba(0,0,0,0.3)]`）
    ArbitraryShadow,
    /// `(length:--x)`
    VariableLength,
    /// `(position:--x)`、`(percentage:--x)`
    VariablePosition,
    /// `(size:--x)`、`(length:--x)`、`(bg-size:--x)`
    VariableSize,
    /// `(image:--x)`、`(url:--x)`
    VariableImage,
    /// `(shadow:--x)`，不带标签的 `(--x)` 也算阴影
    VariableShadow,
    /// `(family-name:--x)`
    VariableFamilyName,
}

impl Validator {
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            Validator::Empty => value.is_empty(),
            Validator::Keywords(words) => words.contains(&value),
            Validator::OneOf(validators) => validators.iter().any(|v| v.accepts(value)),
            Validator::Number => is_number(value),
            Validator::Integer => is_integer(value),
            Validator::Fraction => is_fraction(value),
            Validator::Percent => is_percent(value),
            Validator::TshirtSize => is_tshirt_size(value),
            Validator::Any => !value.is_empty(),
            Validator::AnyNonArbitrary => {
                !value.is_empty()
                    && arbitrary_value(value).is_none()
                    && arbitrary_variable(value).is_none()
            }
            Validator::ArbitraryValue => arbitrary_value(value).is_some(),
            Validator::ArbitraryVariable => arbitrary_variable(value).is_some(),
            Validator::ArbitraryLength => value_matches(value, &["length"], is_length),
            Validator::ArbitraryNumber => value_matches(value, &["number"], is_number),
            Validator::ArbitraryPosition => {
                value_matches(value, &["position", "percentage"], |_| false)
            }
            Validator::ArbitrarySize => {
                value_matches(value, &["length", "size", "bg-size"], |_| false)
            }
            Validator::ArbitraryImage => value_matches(value, &["image", "url"], is_image),
            Validator::ArbitraryShadow => value_matches(value, &["shadow"], is_shadow),
            Validator::VariableLength => variable_matches(value, &["length"], false),
            Validator::VariablePosition => {
                variable_matches(value, &["position", "percentage"], false)
            }
            Validator::VariableSize => {
                variable_matches(value, &["length", "size", "bg-size"], false)
            }
            Validator::VariableImage => variable_matches(value, &["image", "url"], false),
            Validator::VariableShadow => variable_matches(value, &["shadow"], true),
            Validator::VariableFamilyName => variable_matches(value, &["family-name"], false),
        }
    }
}

/// 拆开 `[...]`：返回 (标签, 内容)
///
/// `[length:10px]` → (Some("length"), "10px")，`[#fff]` → (None, "#fff")
fn arbitrary_value(value: &str) -> Option<(Option<&str>, &str)> {
    split_label(value.strip_prefix('[')?.strip_suffix(']')?)
}

/// 拆开 `(...)`：`(--my-gap)` → (None, "--my-gap")
fn arbitrary_variable(value: &str) -> Option<(Option<&str>, &str)> {
    split_label(value.strip_prefix('(')?.strip_suffix(')')?)
}

fn split_label(inner: &str) -> Option<(Option<&str>, &str)> {
    if inner.is_empty() {
        return None;
    }

    match inner.split_once(':') {
        Some((label, content)) if is_label(label) && !content.is_empty() => {
            Some((Some(label), content))
        }
        _ => Some((None, inner)),
    }
}

/// 标签只能由字母、数字、`_`、`-` 组成，且不以 `-` 开头
fn is_label(label: &str) -> bool {
    let mut chars = label.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphanumeric() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// `[...]` 带标签时只看标签，否则按内容判断
fn value_matches(value: &str, labels: &[&str], test: impl Fn(&str) -> bool) -> bool {
    match arbitrary_value(value) {
        Some((Some(label), _)) => labels.contains(&label),
        Some((None, content)) => test(content),
        None => false,
    }
}

/// `(...)` 的内容是变量名，看不出类型，只能靠标签
fn variable_matches(value: &str, labels: &[&str], match_unlabelled: bool) -> bool {
    match arbitrary_variable(value) {
        Some((Some(label), _)) => labels.contains(&label),
        Some((None, _)) => match_unlabelled,
        None => false,
    }
}

fn is_number(value: &str) -> bool {
    !value.is_empty()
        && value.chars().all(|c| c.is_ascii_digit() || c == '.')
        && value.matches('.').count() <= 1
        && value != "."
}

fn is_integer(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}

fn is_fraction(value: &str) -> bool {
    matches!(value.split_once('/'), Some((a, b)) if is_integer(a) && is_integer(b))
}

fn is_percent(value: &str) -> bool {
    value.strip_suffix('%').is_some_and(is_number)
}

fn is_tshirt_size(value: &str) -> bool {
    let size = value.trim_start_matches(|c: char| c.is_ascii_digit() || c == '.');
    matches!(size, "xs" | "sm" | "md" | "lg" | "xl")
}

const LENGTH_UNITS: &[&str] = &[
    "%", "px", "rem", "em", "vh", "vw", "vi", "vb", "vmin", "vmax", "svh", "svw", "svi", "svb",
    "svmin", "svmax", "dvh", "dvw", "dvi", "dvb", "dvmin", "dvmax", "lvh", "lvw", "lvi", "lvb",
    "lvmin", "lvmax", "pt", "pc", "in", "cm", "mm", "cap", "ch", "ex", "lh", "rlh", "cqw", "cqh",
    "cqi", "cqb", "cqmin", "cqmax",
];

const COLOR_FUNCTIONS: &[&str] = &[
    "rgb(", "rgba(", "hsl(", "hsla(", "hwb(", "lab(", "lch(", "oklab(", "oklch(", "color-mix(",
];

/// 内容是否像长度值（`0`、`13px`、`calc(...)`），颜色函数除外
fn is_length(content: &str) -> bool {
    let looks_like_length = content == "0"
        || has_length_unit(content)
        || ["calc(", "min(", "max(", "clamp("]
            .iter()
            .any(|f| content.contains(f));

    looks_like_length && !is_color_function(content)
}

/// 任一处数字后紧跟长度单位（`100%-1rem` 中的 `1rem`）
fn has_length_unit(content: &str) -> bool {
    let bytes = content.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        if !bytes[i].is_ascii_digit() {
            i += 1;
            continue;
        }
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        let rest = &content[i..];
        if LENGTH_UNITS.iter().any(|unit| rest.starts_with(unit)) {
            return true;
        }
    }

    false
}

fn is_color_function(content: &str) -> bool {
    content.ends_with(')') && COLOR_FUNCTIONS.iter().any(|f| content.starts_with(f))
}

fn is_image(content: &str) -> bool {
    let Some((name, _)) = content.split_once('(') else {
        return false;
    };
    content.ends_with(')')
        && (matches!(name, "url" | "image" | "image-set" | "cross-fade" | "element")
            || name.ends_with("-gradient"))
}

/// 阴影：可选 `inset_`，再跟两个偏移量
fn is_shadow(content: &str) -> bool {
    let content = content.strip_prefix("inset_").unwrap_or(content);
    let Some(first) = shadow_offset(content) else {
        return false;
    };
    content[first..]
        .strip_prefix('_')
        .is_some_and(|rest| shadow_offset(rest).is_some())
}

/// 开头的偏移量（`-15px`、`.5rem`、`0`）的长度
fn shadow_offset(s: &str) -> Option<usize> {
    let sign = usize::from(s.starts_with('-'));
    let body = &s[sign..];

    let number_end = body
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(body.len());
    let unit_end = body[number_end..]
        .find(|c: char| !c.is_ascii_lowercase())
        .map_or(body.len(), |i| number_end + i);

    if is_number(&body[..number_end]) && unit_end > number_end {
        Some(sign + unit_end)
    } else if body.starts_with('0') {
        Some(sign + 1)
    } else {
        None
    }
}
