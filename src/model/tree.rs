//! 节点树构建：将JSON值递归转换为带规范路径的可探索树

use serde::Serialize;
use serde_json::Value;

use crate::model::data_core::AppError;

/// 节点结构分类（与UI展示解耦）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Object,
    Array,
    Primitive,
}

/// 树节点：对应源JSON中一个确定位置的值
///
/// 树构建完成后不可变，所有消费方只读遍历
#[derive(Debug, Clone, Serialize)]
pub struct TreeNode {
    /// 父级中的键名、数组索引标签（`[i]`）或根节点的 "root"
    pub key: String,
    /// 节点类型
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// 展示值：复合类型为合成标签（"Object" / "Array(n)"），标量原样保留
    pub value: Value,
    /// 从根到该节点的规范路径（`$`、`$.foo`、`$.foo[2]`）
    pub path: String,
    /// 子节点，保持源对象键插入顺序 / 数组索引顺序
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// 叶子节点判定：标量与null不再下钻（空对象/空数组虽无子节点但仍是复合类型）
    pub fn is_leaf(&self) -> bool {
        self.kind == NodeKind::Primitive
    }
}

/// 从根值构建完整节点树
///
/// 根必须是对象或数组；null与标量根会被拒绝
pub fn build_tree(root: &Value) -> Result<TreeNode, AppError> {
    if !matches!(root, Value::Object(_) | Value::Array(_)) {
        return Err(AppError::InvalidRoot);
    }
    Ok(process_value(root, "root".to_string(), "$".to_string()))
}

/// 递归处理任意位置的值（深度优先，子节点按源顺序）
fn process_value(value: &Value, key: String, path: String) -> TreeNode {
    match value {
        Value::Object(map) => {
            let children = map
                .iter()
                .map(|(obj_key, obj_value)| {
                    // 属性名原样拼接，不做转义；含 '.' 或 '[' 的键会产生歧义路径（已知限制）
                    let obj_path = format!("{}.{}", path, obj_key);
                    process_value(obj_value, obj_key.clone(), obj_path)
                })
                .collect();
            TreeNode {
                key,
                kind: NodeKind::Object,
                value: Value::String("Object".to_string()),
                path,
                children,
            }
        }
        Value::Array(items) => {
            let children = items
                .iter()
                .enumerate()
                .map(|(index, item)| {
                    let item_path = format!("{}[{}]", path, index);
                    process_value(item, format!("[{}]", index), item_path)
                })
                .collect();
            TreeNode {
                key,
                kind: NodeKind::Array,
                value: Value::String(format!("Array({})", items.len())),
                path,
                children,
            }
        }
        // null与标量都是叶子，值不做任何转换
        scalar => TreeNode {
            key,
            kind: NodeKind::Primitive,
            value: scalar.clone(),
            path,
            children: Vec::new(),
        },
    }
}
