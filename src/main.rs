//! 程序入口：初始化日志，加载JSON后在终端中展示节点树或按路径定位节点

use std::path::Path;

use anyhow::Context;
use serde_json::{json, Value};
use tracing_subscriber::fmt::SubscriberBuilder;

use json_keshihua::utils::clipboard::copy_path;
use json_keshihua::vm::bridge::{
    STATUS_COPIED, STATUS_ERROR_PREFIX, STATUS_MATCH_PREFIX, STATUS_MISSING_QUERY,
    STATUS_NO_MATCH, STATUS_TREE_BUILT,
};
use json_keshihua::{AppError, AppState, NodeKind, TreeNode};

const USAGE: &str = "用法: json_keshihua <文件.json|--sample> [路径查询] [--copy]";

fn main() {
    // 初始化日志输出（可观测性）
    let _ = SubscriberBuilder::default()
        .with_max_level(tracing::Level::INFO)
        .try_init();

    if let Err(e) = run() {
        eprintln!("{}{:#}", STATUS_ERROR_PREFIX, e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let copy_requested = args.iter().any(|a| a == "--copy");
    let positional: Vec<&String> = args.iter().filter(|a| a.as_str() != "--copy").collect();

    let Some(source) = positional.first() else {
        eprintln!("{}", USAGE);
        std::process::exit(2);
    };

    let mut state = AppState::default();
    if source.as_str() == "--sample" {
        state.load_value(sample_json())?;
    } else {
        state
            .load_file(Path::new(source.as_str()))
            .with_context(|| format!("无法加载 {}", source))?;
    }
    println!("{}", STATUS_TREE_BUILT);

    match positional.get(1) {
        Some(query) => match state.locate(query.as_str()) {
            Ok(Some(node)) => {
                println!("{}{}", STATUS_MATCH_PREFIX, node.path);
                println!("{}", serde_json::to_string_pretty(node)?);
                if copy_requested {
                    copy_path(&node.path)?;
                    println!("{}", STATUS_COPIED);
                }
            }
            Ok(None) => println!("{}", STATUS_NO_MATCH),
            Err(AppError::EmptyQuery) => {
                eprintln!("{}", STATUS_MISSING_QUERY);
                std::process::exit(2);
            }
            Err(e) => return Err(e.into()),
        },
        None => print_tree(state.tree()?, 0),
    }
    Ok(())
}

/// 内置示例文档（对应界面的“加载示例”），覆盖对象、数组与各类标量
fn sample_json() -> Value {
    json!({
        "user": {
            "id": 1,
            "name": "张三",
            "email": "zhangsan@example.com",
            "address": {
                "street": "建国路88号",
                "city": "北京",
                "zipCode": "100025"
            },
            "hobbies": ["reading", "gaming", "coding"]
        },
        "posts": [
            {"id": 1, "title": "First Post", "content": "Hello World", "likes": 42},
            {"id": 2, "title": "Second Post", "content": "Rust is awesome", "likes": 128}
        ],
        "isActive": true,
        "score": 95.5
    })
}

/// 按缩进层级前序打印节点树
fn print_tree(node: &TreeNode, depth: usize) {
    println!(
        "{}{}: {}  ({})",
        "  ".repeat(depth),
        node.key,
        display_value(node),
        node.path
    );
    for child in &node.children {
        print_tree(child, depth + 1);
    }
}

/// 展示值：复合类型显示合成标签，标量按JSON字面量显示
fn display_value(node: &TreeNode) -> String {
    match &node.value {
        Value::String(label) if node.kind != NodeKind::Primitive => label.clone(),
        other => other.to_string(),
    }
}
