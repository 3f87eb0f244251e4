//! AppState：应用核心状态，持有当前DOM与节点树并提供路径定位入口

use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

use crate::model::path::{find_node, list_all_paths};
use crate::model::tree::{build_tree, TreeNode};
use crate::utils::fs::read_json_file;

#[derive(Debug, Default)]
pub struct AppState {
    pub source_path: Option<PathBuf>,
    pub dom: Option<Value>,
    pub tree: Option<TreeNode>,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO失败: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON解析失败: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("根节点必须是对象或数组")]
    InvalidRoot,
    #[error("查询路径为空")]
    EmptyQuery,
    #[error("状态错误: {0}")]
    State(String),
}

impl AppState {
    /// 加载JSON文件并构建节点树
    pub fn load_file(&mut self, p: &Path) -> Result<(), AppError> {
        let dom = read_json_file(p)?;
        self.load_value(dom)?;
        self.source_path = Some(p.to_path_buf());
        Ok(())
    }

    /// 解析用户提交的JSON文本并构建节点树
    ///
    /// 语法错误由serde_json检出并原样向上传递
    pub fn load_str(&mut self, text: &str) -> Result<(), AppError> {
        let dom: Value = serde_json::from_str(text)?;
        self.load_value(dom)
    }

    /// 从已解码的JSON值构建节点树
    ///
    /// 先构建后提交：失败时上一棵树保持原样，成功时整树替换（无局部更新）
    pub fn load_value(&mut self, dom: Value) -> Result<(), AppError> {
        let tree = build_tree(&dom)?;
        tracing::info!("节点树已生成，共 {} 个路径", list_all_paths(&tree).len());
        self.dom = Some(dom);
        self.tree = Some(tree);
        self.source_path = None;
        Ok(())
    }

    /// 清空当前DOM、节点树与来源信息
    pub fn clear(&mut self) {
        self.source_path = None;
        self.dom = None;
        self.tree = None;
    }

    /// 当前节点树的根引用
    pub fn tree(&self) -> Result<&TreeNode, AppError> {
        self.tree
            .as_ref()
            .ok_or_else(|| AppError::State("节点树尚未生成".into()))
    }

    /// 按路径表达式定位节点
    ///
    /// 空白查询在遍历前被拒绝；未命中不是错误，返回 `Ok(None)`
    pub fn locate(&self, query: &str) -> Result<Option<&TreeNode>, AppError> {
        if query.trim().is_empty() {
            return Err(AppError::EmptyQuery);
        }
        let tree = self.tree()?;
        let found = find_node(tree, query);
        match &found {
            Some(node) => tracing::info!("路径命中: {}", node.path),
            None => tracing::warn!("未命中任何节点，查询: {}", query),
        }
        Ok(found)
    }

    /// 枚举当前树的全部规范路径（前序，根在最前）
    pub fn all_paths(&self) -> Result<Vec<String>, AppError> {
        Ok(list_all_paths(self.tree()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// 创建临时JSON文件用于测试
    fn create_test_json_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("创建临时文件失败");
        file.write_all(content.as_bytes()).expect("写入临时文件失败");
        file
    }

    #[test]
    fn test_load_simple_json_file() {
        let temp_file = create_test_json_file(r#"{"name": "test", "value": 42}"#);

        let mut app_state = AppState::default();
        let result = app_state.load_file(temp_file.path());

        assert!(result.is_ok(), "加载简单JSON应该成功");
        assert!(app_state.dom.is_some(), "DOM应该被加载");
        assert!(app_state.source_path.is_some(), "来源路径应该被记录");
        let tree = app_state.tree().expect("节点树应该被构建");
        assert_eq!(tree.children.len(), 2, "应该有name与value两个子节点");
    }

    #[test]
    fn test_load_str_submission() {
        let mut app_state = AppState::default();
        let result = app_state.load_str(r#"{"user": {"name": "张三", "age": 30}}"#);

        assert!(result.is_ok(), "文本提交应该成功");
        assert!(app_state.source_path.is_none(), "文本提交没有来源文件");
        let paths = app_state.all_paths().unwrap();
        assert!(paths.contains(&"$.user.name".to_string()));
        assert!(paths.contains(&"$.user.age".to_string()));
    }

    #[test]
    fn test_invalid_json_text_rejected() {
        let mut app_state = AppState::default();
        let result = app_state.load_str(r#"{"invalid": json content}"#);

        assert!(matches!(result, Err(AppError::Parse(_))), "无效JSON应该返回解析错误");
        assert!(app_state.tree.is_none(), "失败后不应该留下半成品树");
    }

    #[test]
    fn test_scalar_root_rejected() {
        let temp_file = create_test_json_file("42");

        let mut app_state = AppState::default();
        let result = app_state.load_file(temp_file.path());

        assert!(matches!(result, Err(AppError::InvalidRoot)), "标量根应该被拒绝");
    }

    #[test]
    fn test_failed_submission_keeps_previous_tree() {
        let mut app_state = AppState::default();
        app_state.load_str(r#"{"keep": true}"#).unwrap();

        let result = app_state.load_str("null");
        assert!(matches!(result, Err(AppError::InvalidRoot)));

        // 上一棵树保持原样
        let tree = app_state.tree().unwrap();
        assert_eq!(tree.children[0].key, "keep");
    }

    #[test]
    fn test_resubmission_replaces_tree_wholesale() {
        let mut app_state = AppState::default();
        app_state.load_str(r#"{"first": 1}"#).unwrap();
        app_state.load_str(r#"{"second": 2, "third": 3}"#).unwrap();

        let paths = app_state.all_paths().unwrap();
        assert_eq!(paths, vec!["$", "$.second", "$.third"]);
    }

    #[test]
    fn test_locate_accepted_forms() {
        let mut app_state = AppState::default();
        app_state
            .load_str(r#"{"user": {"address": {"city": "Pune"}}, "posts": [{"title": "First Post"}]}"#)
            .unwrap();

        for query in ["$.user.address.city", "user.address.city", ".user.address.city"] {
            let found = app_state.locate(query).unwrap().expect("应该命中");
            assert_eq!(found.path, "$.user.address.city");
        }

        let title = app_state.locate("posts[0].title").unwrap().expect("应该命中");
        assert_eq!(title.path, "$.posts[0].title");
    }

    #[test]
    fn test_locate_no_match_is_not_error() {
        let mut app_state = AppState::default();
        app_state.load_str(r#"{"a": 1}"#).unwrap();

        let result = app_state.locate("does.not.exist");
        assert!(matches!(result, Ok(None)), "未命中应该是正常的否定结果");
    }

    #[test]
    fn test_empty_query_rejected_before_search() {
        let mut app_state = AppState::default();
        app_state.load_str(r#"{"a": 1}"#).unwrap();

        assert!(matches!(app_state.locate(""), Err(AppError::EmptyQuery)));
        assert!(matches!(app_state.locate("   "), Err(AppError::EmptyQuery)));
    }

    #[test]
    fn test_locate_without_tree() {
        let app_state = AppState::default();

        let result = app_state.locate("$.a");
        assert!(matches!(result, Err(AppError::State(_))), "无树时定位应该报状态错误");
    }

    #[test]
    fn test_clear_resets_state() {
        let mut app_state = AppState::default();
        app_state.load_str(r#"{"a": 1}"#).unwrap();

        app_state.clear();

        assert!(app_state.dom.is_none());
        assert!(app_state.tree.is_none());
        assert!(app_state.source_path.is_none());
    }
}
