/// 冲突组查询接口
///
/// 使用 trait 而不是具体类型，以便于测试和解耦：
/// 冲突组表由 tw_index 提供，core 只负责合并流程。
pub trait ClassGroupLookup {
    /// 查询类主体（已去掉修饰符、`!`、负号）所属的冲突组
    fn class_group(&self, base: &str) -> Option<String>;

    /// 查询某个冲突组会覆盖的其他组
    ///
    /// `has_postfix` 为 true 时额外包含后缀修饰符带来的冲突
    /// （如 `text-lg/7` 同时设置了行高，会覆盖 `leading-*`）。
    fn conflicting_groups(&self, group: &str, has_postfix: bool) -> Vec<&str>;
}
