use serde::Deserialize;
use wasm_bindgen::prelude::*;

use tailcn::{ClassValue, MergeConfig, Merger};

// ── JS 侧 serde 镜像类型 ──────────────────────────────────────

/// `cn([...])` 的参数数组，每一项按 JS 真值规则解析
#[derive(Deserialize)]
#[serde(transparent)]
struct JsClassArgs(Vec<ClassValue>);

fn parse_args(args: JsValue) -> Result<Vec<ClassValue>, JsError> {
    if args.is_undefined() || args.is_null() {
        return Ok(Vec::new());
    }
    serde_wasm_bindgen::from_value::<JsClassArgs>(args)
        .map(|JsClassArgs(values)| values)
        .map_err(|e| JsError::new(&format!("Invalid class value: {}", e)))
}

fn parse_config(config: JsValue) -> Result<MergeConfig, JsError> {
    if config.is_undefined() || config.is_null() {
        Ok(MergeConfig::default())
    } else {
        serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsError::new(&format!("Invalid config: {}", e)))
    }
}

// ── WASM 导出函数 ─────────────────────────────────────────────

/// 初始化 panic hook（自动调用）
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// 拼接并合并类名
///
/// 导出函数不支持剩余参数，JS 侧用 `(...args) => cn(args)` 包一层即可
///
/// @param args - 字符串、数组、`{ class: boolean }` 对象组成的数组，假值被忽略
/// @returns 合并后的类名字符串
#[wasm_bindgen(js_name = "cn")]
pub fn cn(args: JsValue) -> Result<String, JsError> {
    Ok(tailcn::cn(parse_args(args)?))
}

/// 只拼接不合并（clsx）
#[wasm_bindgen(js_name = "clsx")]
pub fn clsx(args: JsValue) -> Result<String, JsError> {
    Ok(tailcn::join(parse_args(args)?))
}

/// 合并一个类名字符串
#[wasm_bindgen(js_name = "twMerge")]
pub fn tw_merge(classes: &str) -> String {
    tailcn::tw_merge(classes)
}

/// 使用自定义配置的合并器
///
/// ```js
/// const merger = new TwMerger({ prefix: "tw", extend: { classGroups: { glow: ["glow-*"] } } });
/// merger.cn(["tw:glow-sm", ["tw:glow-lg"]]);
/// ```
#[wasm_bindgen(js_name = "TwMerger")]
pub struct JsMerger {
    inner: Merger,
}

#[wasm_bindgen(js_class = "TwMerger")]
impl JsMerger {
    /// @param config - `{ prefix?, extend?: { classGroups?, conflictingClassGroups?, conflictingClassGroupModifiers? } }`
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<JsMerger, JsError> {
        let config = parse_config(config)?;
        let inner = Merger::with_config(&config).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(JsMerger { inner })
    }

    pub fn cn(&self, args: JsValue) -> Result<String, JsError> {
        Ok(tailcn::cn_with(&self.inner, parse_args(args)?))
    }

    #[wasm_bindgen(js_name = "merge")]
    pub fn merge(&self, classes: &str) -> String {
        self.inner.merge(classes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_mirror_js_rest_array() {
        let JsClassArgs(values) =
            serde_json::from_str(r#"["a", null, false, ["p-2"], {"p-4": true}]"#).unwrap();
        assert_eq!(tailcn::cn(values), "a p-4");
    }

    #[test]
    fn test_tw_merge_export() {
        assert_eq!(tw_merge("p-2 p-4"), "p-4");
    }
}
