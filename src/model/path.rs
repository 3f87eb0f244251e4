//! 路径定位：规范化用户输入的路径表达式并在节点树中深度优先查找

use crate::model::tree::TreeNode;

/// 剥离路径的根标记：先去掉一个前导'$'，再去掉一个前导'.'
///
/// 查询规范化与节点路径比较两侧共用同一剥离规则，保证两边始终一致
pub fn strip_root_marker(path: &str) -> &str {
    let rest = path.strip_prefix('$').unwrap_or(path);
    rest.strip_prefix('.').unwrap_or(rest)
}

/// 规范化用户输入：去除首尾空白后剥离根标记
///
/// 结果只用于整串比较，不会被拆分成段
pub fn normalize_query(query: &str) -> &str {
    strip_root_marker(query.trim())
}

/// 深度优先前序查找路径匹配的节点，第一个命中立即返回
///
/// 命中条件：剥离根标记后逐字符一致，或原始查询与节点规范路径完全相同。
/// 接受 `$.user.name`、`.user.name`、`user.name`、`posts[0].title`、`$[0]` 等形式。
pub fn find_node<'a>(node: &'a TreeNode, query: &str) -> Option<&'a TreeNode> {
    let normalized = normalize_query(query);
    find_in_subtree(node, query, normalized)
}

fn find_in_subtree<'a>(node: &'a TreeNode, raw: &str, normalized: &str) -> Option<&'a TreeNode> {
    if strip_root_marker(&node.path) == normalized || node.path == raw {
        return Some(node);
    }
    node.children
        .iter()
        .find_map(|child| find_in_subtree(child, raw, normalized))
}

/// 前序收集整棵树的全部规范路径（根在最前），供诊断与自动补全使用
pub fn list_all_paths(root: &TreeNode) -> Vec<String> {
    let mut paths = Vec::new();
    collect_paths(root, &mut paths);
    paths
}

fn collect_paths(node: &TreeNode, paths: &mut Vec<String>) {
    paths.push(node.path.clone());
    for child in &node.children {
        collect_paths(child, paths);
    }
}

/// 推导命中路径的全部祖先路径（根`$`在最前，不含路径自身），供UI逐级展开
///
/// 纯文本重建：数字段按数组索引拼回 `[i]`，其余按属性拼回 `.name`，
/// 与路径生成同样不处理含特殊字符的属性名
pub fn ancestor_paths(path: &str) -> Vec<String> {
    let segments: Vec<&str> = path
        .split(['.', '[', ']'])
        .filter(|part| !part.is_empty() && *part != "$")
        .collect();
    if segments.is_empty() {
        return Vec::new();
    }

    let mut ancestors = vec!["$".to_string()];
    let mut current = String::from("$");
    for segment in &segments[..segments.len() - 1] {
        if segment.chars().all(|c| c.is_ascii_digit()) {
            current.push_str(&format!("[{}]", segment));
        } else {
            current.push('.');
            current.push_str(segment);
        }
        ancestors.push(current.clone());
    }
    ancestors
}
