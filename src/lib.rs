//! JSON树可视化核心库
//!
//! 提供JSON值到可探索节点树的转换，以及按路径表达式定位节点的能力
//! 渲染、展开折叠、高亮等UI行为由外部协作方基于本库实现
//!
//! 已知限制：属性名原样写入路径，不做转义；含 `.`、`[`、`]` 或空白的键
//! 会产生无法手工输入的歧义路径（与路径匹配的整串比较规则自洽）

pub mod model;
pub mod utils;
pub mod vm;

// 重新导出主要类型
pub use model::data_core::{AppError, AppState};
pub use model::path::{ancestor_paths, find_node, list_all_paths, normalize_query};
pub use model::tree::{build_tree, NodeKind, TreeNode};
