use indexmap::IndexMap;
use serde::de::{self, Deserialize, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// `cn` / `join` 的输入值
///
/// 对应动态语言里 "字符串 | 假值 | 数组 | 条件对象" 的开放联合，
/// 在这里收窄成封闭的枚举，可以递归嵌套。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ClassValue {
    /// 假值或缺省值，直接忽略
    #[default]
    Empty,
    /// 类名字符串，可以包含多个空格分隔的类
    Str(String),
    /// 有序列表
    List(Vec<ClassValue>),
    /// 条件映射：值为 true 时包含对应的类名
    Conditional(IndexMap<String, bool>),
}

impl From<&str> for ClassValue {
    fn from(s: &str) -> Self {
        ClassValue::Str(s.to_string())
    }
}

impl From<String> for ClassValue {
    fn from(s: String) -> Self {
        ClassValue::Str(s)
    }
}

impl From<&String> for ClassValue {
    fn from(s: &String) -> Self {
        ClassValue::Str(s.clone())
    }
}

/// 布尔值永远不是类名（`cond && "x"` 为 false 时的情形）
impl From<bool> for ClassValue {
    fn from(_: bool) -> Self {
        ClassValue::Empty
    }
}

impl From<()> for ClassValue {
    fn from(_: ()) -> Self {
        ClassValue::Empty
    }
}

impl<T: Into<ClassValue>> From<Option<T>> for ClassValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(ClassValue::Empty, Into::into)
    }
}

/// 单个条件项：`("active", is_active)`
impl<S: Into<String>> From<(S, bool)> for ClassValue {
    fn from((class, on): (S, bool)) -> Self {
        let mut map = IndexMap::with_capacity(1);
        map.insert(class.into(), on);
        ClassValue::Conditional(map)
    }
}

impl<T: Into<ClassValue>> From<Vec<T>> for ClassValue {
    fn from(items: Vec<T>) -> Self {
        ClassValue::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ClassValue>, const N: usize> From<[T; N]> for ClassValue {
    fn from(items: [T; N]) -> Self {
        ClassValue::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ClassValue> + Clone> From<&[T]> for ClassValue {
    fn from(items: &[T]) -> Self {
        ClassValue::List(items.iter().cloned().map(Into::into).collect())
    }
}

impl<K: Into<String>> From<IndexMap<K, bool>> for ClassValue {
    fn from(map: IndexMap<K, bool>) -> Self {
        ClassValue::Conditional(map.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl<K: Into<String>> From<BTreeMap<K, bool>> for ClassValue {
    fn from(map: BTreeMap<K, bool>) -> Self {
        ClassValue::Conditional(map.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// HashMap 没有稳定顺序，按键排序后再转换
impl<K: Into<String>, S> From<HashMap<K, bool, S>> for ClassValue {
    fn from(map: HashMap<K, bool, S>) -> Self {
        let mut entries: Vec<(String, bool)> =
            map.into_iter().map(|(k, v)| (k.into(), v)).collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        ClassValue::Conditional(entries.into_iter().collect())
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            /// 0 视为假值，其余数字按十进制文本处理
            impl From<$ty> for ClassValue {
                fn from(n: $ty) -> Self {
                    if n == 0 {
                        ClassValue::Empty
                    } else {
                        ClassValue::Str(n.to_string())
                    }
                }
            }
        )*
    };
}

impl_from_integer!(i32, i64, u32, u64, usize);

// ── 反序列化 ──────────────────────────────────────────────────
//
// 按 JS 的真值规则处理任意 JSON / JS 值：
// 字符串和非零数字是类名，布尔与 null 忽略，
// 对象的键在值为真时保留。

impl<'de> Deserialize<'de> for ClassValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ClassValueVisitor)
    }
}

struct ClassValueVisitor;

impl<'de> Visitor<'de> for ClassValueVisitor {
    type Value = ClassValue;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a string, number, boolean, null, array or object")
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<ClassValue, E> {
        Ok(ClassValue::Empty)
    }

    fn visit_i64<E: de::Error>(self, n: i64) -> Result<ClassValue, E> {
        Ok(ClassValue::from(n))
    }

    fn visit_u64<E: de::Error>(self, n: u64) -> Result<ClassValue, E> {
        Ok(ClassValue::from(n))
    }

    fn visit_f64<E: de::Error>(self, n: f64) -> Result<ClassValue, E> {
        if n == 0.0 || n.is_nan() {
            Ok(ClassValue::Empty)
        } else {
            Ok(ClassValue::Str(n.to_string()))
        }
    }

    fn visit_str<E: de::Error>(self, s: &str) -> Result<ClassValue, E> {
        Ok(ClassValue::from(s))
    }

    fn visit_string<E: de::Error>(self, s: String) -> Result<ClassValue, E> {
        Ok(ClassValue::Str(s))
    }

    fn visit_none<E: de::Error>(self) -> Result<ClassValue, E> {
        Ok(ClassValue::Empty)
    }

    fn visit_unit<E: de::Error>(self) -> Result<ClassValue, E> {
        Ok(ClassValue::Empty)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<ClassValue, D::Error>
    where
        D: Deserializer<'de>,
    {
        ClassValue::deserialize(deserializer)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<ClassValue, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element::<ClassValue>()? {
            items.push(item);
        }
        Ok(ClassValue::List(items))
    }

    fn visit_map<A>(self, mut map: A) -> Result<ClassValue, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries = IndexMap::new();
        while let Some((key, Truthy(on))) = map.next_entry::<String, Truthy>()? {
            entries.insert(key, on);
        }
        Ok(ClassValue::Conditional(entries))
    }
}

/// 条件对象里的值，只关心真假
struct Truthy(bool);

impl<'de> Deserialize<'de> for Truthy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(TruthyVisitor)
    }
}

struct TruthyVisitor;

impl<'de> Visitor<'de> for TruthyVisitor {
    type Value = Truthy;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("any value")
    }

    fn visit_bool<E: de::Error>(self, b: bool) -> Result<Truthy, E> {
        Ok(Truthy(b))
    }

    fn visit_i64<E: de::Error>(self, n: i64) -> Result<Truthy, E> {
        Ok(Truthy(n != 0))
    }

    fn visit_u64<E: de::Error>(self, n: u64) -> Result<Truthy, E> {
        Ok(Truthy(n != 0))
    }

    fn visit_f64<E: de::Error>(self, n: f64) -> Result<Truthy, E> {
        Ok(Truthy(n != 0.0 && !n.is_nan()))
    }

    fn visit_str<E: de::Error>(self, s: &str) -> Result<Truthy, E> {
        Ok(Truthy(!s.is_empty()))
    }

    fn visit_none<E: de::Error>(self) -> Result<Truthy, E> {
        Ok(Truthy(false))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Truthy, E> {
        Ok(Truthy(false))
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Truthy, D::Error>
    where
        D: Deserializer<'de>,
    {
        Truthy::deserialize(deserializer)
    }

    // 数组和对象在 JS 里总是真值，内容本身不需要
    fn visit_seq<A>(self, mut seq: A) -> Result<Truthy, A::Error>
    where
        A: SeqAccess<'de>,
    {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(Truthy(true))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Truthy, A::Error>
    where
        A: MapAccess<'de>,
    {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(Truthy(true))
    }
}
