//! IO helper: buffered JSON file reading

use std::{fs::File, io::BufReader, path::Path};

use crate::model::data_core::AppError;
use serde_json::Value;

/// 从文件读取JSON数据
pub fn read_json_file(p: &Path) -> Result<Value, AppError> {
    let f = File::open(p)?;
    let rdr = BufReader::new(f);
    let v: Value = serde_json::from_reader(rdr)?;
    Ok(v)
}
