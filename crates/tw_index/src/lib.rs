pub mod class_groups;
pub mod conflicts;
pub mod index;
pub mod loader;
pub mod merger;
pub mod validators;

use std::sync::LazyLock;

// Re-export main types
pub use class_groups::lookup_class_group;
pub use index::TailwindIndex;
pub use loader::load_from_json;
pub use merger::Merger;

/// 使用内置冲突组表的全局合并器，只读
static DEFAULT_MERGER: LazyLock<Merger> = LazyLock::new(Merger::new);

/// 用内置冲突组表合并类名
///
/// ```
/// assert_eq!(tailcn_tw_index::tw_merge("p-2 p-4"), "p-4");
/// ```
pub fn tw_merge(classes: &str) -> String {
    DEFAULT_MERGER.merge(classes)
}
