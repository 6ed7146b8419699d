use std::collections::HashSet;
use tracing::trace;

/// 一个类对冲突组的占用声明
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Claim {
    /// 规整后的修饰符 ID（含重要性标记）
    pub modifier_id: String,
    /// 自身所属的冲突组
    pub group: String,
    /// 被它覆盖的其他冲突组
    pub conflicts: Vec<String>,
}

/// 待合并的类
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeToken<'a> {
    /// 原始类名，保留时原样输出
    pub raw: &'a str,
    /// 未识别的类没有占用声明，总是保留
    pub claim: Option<Claim>,
}

impl<'a> MergeToken<'a> {
    pub fn unknown(raw: &'a str) -> Self {
        Self { raw, claim: None }
    }

    pub fn claiming(raw: &'a str, claim: Claim) -> Self {
        Self {
            raw,
            claim: Some(claim),
        }
    }
}

/// 解决冲突（后者覆盖前者）
///
/// 从后往前扫描，记录已被占用的 (修饰符 ID, 冲突组)：
/// - 组已被占用的类被丢弃
/// - 否则保留，并占用自身组及其覆盖的组
///
/// 保留下来的类按原始顺序返回。
pub fn resolve_conflicts<'a>(tokens: Vec<MergeToken<'a>>) -> Vec<&'a str> {
    let mut claimed: HashSet<(String, String)> = HashSet::new();
    let mut kept = Vec::with_capacity(tokens.len());

    for token in tokens.into_iter().rev() {
        let Some(claim) = token.claim else {
            kept.push(token.raw);
            continue;
        };

        let key = (claim.modifier_id, claim.group);
        if claimed.contains(&key) {
            trace!(class = token.raw, group = %key.1, "dropped by a later class");
            continue;
        }

        for conflict in claim.conflicts {
            claimed.insert((key.0.clone(), conflict));
        }
        claimed.insert(key);
        kept.push(token.raw);
    }

    kept.reverse();
    kept
}
