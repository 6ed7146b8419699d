use crate::types::ParsedClass;
use thiserror::Error;

/// 解析单个 Tailwind class
///
/// 支持的格式：
/// - 简单类：`p-4`, `m-2`, `bg-red-500`
/// - 修饰符：`hover:bg-blue-500`, `md:p-4`, `[&>*]:p-4`
/// - 负值：`-m-4`, `md:-top-1`
/// - 任意值 / 任意属性：`w-[13px]`, `[mask-type:luminance]`
/// - 后缀修饰符：`bg-blue-500/50`, `text-lg/7`
/// - 重要性：`p-4!`（v4）和 `!p-4`（v3）
///
/// # 示例
///
/// ```
/// use tailcn_tw_parse::parse_class;
///
/// let parsed = parse_class("md:hover:bg-blue-500/50!").unwrap();
/// assert_eq!(parsed.modifiers, vec!["md", "hover"]);
/// assert_eq!(parsed.base_without_postfix(), "bg-blue-500");
/// assert_eq!(parsed.postfix(), Some("50"));
/// assert!(parsed.important);
/// ```
pub fn parse_class(input: &str) -> Result<ParsedClass, ParseError> {
    if input.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let mut parser = Parser::new(input);
    parser.parse()
}

/// 解析错误类型
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Empty input")]
    EmptyInput,
    #[error("Unmatched bracket in '{0}'")]
    UnmatchedBracket(String),
    #[error("Missing base class in '{0}'")]
    MissingBase(String),
}

/// 内部解析器
struct Parser<'a> {
    input: &'a str,
    /// 方括号深度
    brackets: i32,
    /// 圆括号深度
    parens: i32,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            brackets: 0,
            parens: 0,
        }
    }

    fn parse(&mut self) -> Result<ParsedClass, ParseError> {
        // 1. 在括号外的 `:` 处切分修饰符
        let (modifiers, rest) = self.split_modifiers()?;

        // 2. 重要性标记，v4 后缀优先
        let (important, rest) = if let Some(stripped) = rest.strip_suffix('!') {
            (true, stripped)
        } else if let Some(stripped) = rest.strip_prefix('!') {
            (true, stripped)
        } else {
            (false, rest)
        };

        // 3. 负值标记（单独的 "-" 不算）
        let (negative, base) = match rest.strip_prefix('-') {
            Some(stripped) if !stripped.is_empty() => (true, stripped),
            _ => (false, rest),
        };

        if base.is_empty() {
            return Err(ParseError::MissingBase(self.input.to_string()));
        }

        // 4. 后缀修饰符位置（括号外最后一个 `/`）
        let postfix_at = find_postfix(base);

        Ok(ParsedClass {
            modifiers,
            important,
            negative,
            base: base.to_string(),
            postfix_at,
        })
    }

    /// 切分修饰符，返回 (修饰符列表, 剩余主体)
    fn split_modifiers(&mut self) -> Result<(Vec<String>, &'a str), ParseError> {
        let input = self.input;
        let mut modifiers = Vec::new();
        let mut start = 0;

        for (pos, ch) in input.char_indices() {
            match ch {
                '[' => self.brackets += 1,
                ']' => self.brackets -= 1,
                '(' => self.parens += 1,
                ')' => self.parens -= 1,
                ':' if self.at_top_level() => {
                    modifiers.push(input[start..pos].to_string());
                    start = pos + 1;
                }
                _ => {}
            }
        }

        if !self.at_top_level() {
            return Err(ParseError::UnmatchedBracket(input.to_string()));
        }

        if modifiers.iter().any(|m| m.is_empty()) {
            return Err(ParseError::MissingBase(input.to_string()));
        }

        Ok((modifiers, &input[start..]))
    }

    fn at_top_level(&self) -> bool {
        self.brackets == 0 && self.parens == 0
    }
}

/// 查找括号外最后一个 `/` 的位置
fn find_postfix(base: &str) -> Option<usize> {
    let mut depth = 0i32;
    let mut found = None;

    for (pos, ch) in base.char_indices() {
        match ch {
            '[' | '(' => depth += 1,
            ']' | ')' => depth -= 1,
            // 开头的 `/` 不是后缀
            '/' if depth == 0 && pos > 0 => found = Some(pos),
            _ => {}
        }
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_simple_class() {
        let parsed = parse_class("p-4").unwrap();
        assert_eq!(parsed.base, "p-4");
        assert!(parsed.modifiers.is_empty());
        assert!(!parsed.negative);
        assert!(!parsed.important);
        assert_eq!(parsed.postfix(), None);
    }

    #[test]
    fn test_class_without_value() {
        let parsed = parse_class("flex").unwrap();
        assert_eq!(parsed.base, "flex");
    }

    #[test]
    fn test_multiple_modifiers() {
        let parsed = parse_class("md:hover:bg-blue-500").unwrap();
        assert_eq!(parsed.modifiers, vec!["md", "hover"]);
        assert_eq!(parsed.base, "bg-blue-500");
    }

    #[test]
    fn test_negative_value() {
        let parsed = parse_class("-m-4").unwrap();
        assert!(parsed.negative);
        assert_eq!(parsed.base, "m-4");
    }

    #[test]
    fn test_negative_with_modifier() {
        let parsed = parse_class("md:-top-1").unwrap();
        assert_eq!(parsed.modifiers, vec!["md"]);
        assert!(parsed.negative);
        assert_eq!(parsed.base, "top-1");
    }

    #[test]
    fn test_important_suffix_and_prefix() {
        let suffix = parse_class("p-4!").unwrap();
        assert!(suffix.important);
        assert_eq!(suffix.base, "p-4");

        let prefix = parse_class("hover:!p-4").unwrap();
        assert!(prefix.important);
        assert_eq!(prefix.modifiers, vec!["hover"]);
        assert_eq!(prefix.base, "p-4");

        let negative = parse_class("!-m-2").unwrap();
        assert!(negative.important);
        assert!(negative.negative);
        assert_eq!(negative.base, "m-2");
    }

    #[test]
    fn test_postfix_modifier() {
        let parsed = parse_class("bg-blue-500/50").unwrap();
        assert_eq!(parsed.base_without_postfix(), "bg-blue-500");
        assert_eq!(parsed.postfix(), Some("50"));

        let parsed = parse_class("text-lg/[18px]").unwrap();
        assert_eq!(parsed.base_without_postfix(), "text-lg");
        assert_eq!(parsed.postfix(), Some("[18px]"));
    }

    #[test]
    fn test_slash_inside_arbitrary_is_not_postfix() {
        let parsed = parse_class("bg-[url(/img/a.png)]").unwrap();
        assert_eq!(parsed.postfix(), None);
        assert_eq!(parsed.base_without_postfix(), "bg-[url(/img/a.png)]");
    }

    #[test]
    fn test_colon_inside_arbitrary_variant() {
        let parsed = parse_class("[&:nth-child(3)]:underline").unwrap();
        assert_eq!(parsed.modifiers, vec!["[&:nth-child(3)]"]);
        assert_eq!(parsed.base, "underline");

        let parsed = parse_class("supports-[display:grid]:grid").unwrap();
        assert_eq!(parsed.modifiers, vec!["supports-[display:grid]"]);
        assert_eq!(parsed.base, "grid");
    }

    #[test]
    fn test_arbitrary_property() {
        let parsed = parse_class("hover:[mask-type:luminance]").unwrap();
        assert_eq!(parsed.modifiers, vec!["hover"]);
        assert!(parsed.is_arbitrary_property());
        assert_eq!(parsed.arbitrary_property_name(), Some("mask-type"));
    }

    #[test]
    fn test_nested_brackets() {
        let parsed = parse_class("grid-cols-[repeat(3,minmax(0,1fr))]").unwrap();
        assert_eq!(parsed.base, "grid-cols-[repeat(3,minmax(0,1fr))]");
        assert_eq!(parsed.postfix(), None);
    }

    #[test]
    fn test_empty_input() {
        let result = parse_class("");
        assert_eq!(result.unwrap_err(), ParseError::EmptyInput);
    }

    #[test]
    fn test_unmatched_bracket() {
        let result = parse_class("w-[13px");
        assert!(matches!(result, Err(ParseError::UnmatchedBracket(_))));
    }

    #[test]
    fn test_missing_base() {
        assert!(matches!(
            parse_class("hover:"),
            Err(ParseError::MissingBase(_))
        ));
        assert!(matches!(parse_class("!"), Err(ParseError::MissingBase(_))));
        assert!(matches!(
            parse_class("md::p-4"),
            Err(ParseError::MissingBase(_))
        ));
    }
}
