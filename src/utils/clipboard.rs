//! Clipboard  cross-platform clipboard helpers

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("clipboard error: {0}")]
    Clip(String),
}

/// 将命中节点的规范路径复制到系统剪贴板，供用户粘贴到查询框或外部工具
pub fn copy_path(path: &str) -> Result<(), ClipboardError> {
    use copypasta::{ClipboardContext, ClipboardProvider};
    let mut ctx = ClipboardContext::new().map_err(|e| ClipboardError::Clip(e.to_string()))?;
    ctx.set_contents(path.to_string())
        .map_err(|e| ClipboardError::Clip(e.to_string()))
}
