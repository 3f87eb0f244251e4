//! VM桥接层：核心与展示壳之间共享的状态文案
//!
//! 注意：展示逻辑本身在main.rs中，这里只提供公共常量

// === 常量定义（消除魔法值） ===
pub const STATUS_TREE_BUILT: &str = "节点树已生成";
pub const STATUS_MATCH_PREFIX: &str = "✓ 命中: ";
pub const STATUS_NO_MATCH: &str = "✗ 未找到匹配节点";
pub const STATUS_MISSING_QUERY: &str = "请输入查询路径";
pub const STATUS_COPIED: &str = "路径已复制到剪贴板";
pub const STATUS_ERROR_PREFIX: &str = "错误: ";
