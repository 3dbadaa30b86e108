use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tokio::fs;
use tracing::info;

use crate::models::{Category, NewQuestion};
use crate::store::{MemoryStore, TriviaStore};

/// 种子数据文件结构
#[derive(Debug, Deserialize)]
struct SeedFile {
    #[serde(default)]
    categories: Vec<SeedCategory>,
    #[serde(default)]
    questions: Vec<NewQuestion>,
}

#[derive(Debug, Deserialize)]
struct SeedCategory {
    id: u64,
    #[serde(rename = "type")]
    kind: String,
}

/// 从 TOML 种子文件构建内存题库
///
/// 题目按文件中的出现顺序插入，标识由存储分配，
/// 因此文件顺序即存储顺序。
pub async fn load_seed_file(path: &Path) -> Result<MemoryStore> {
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("无法读取种子文件: {}", path.display()))?;

    let seed: SeedFile = toml::from_str(&content)
        .with_context(|| format!("无法解析种子文件: {}", path.display()))?;

    let categories: Vec<Category> = seed
        .categories
        .into_iter()
        .map(|c| Category {
            id: c.id,
            kind: c.kind,
        })
        .collect();

    let store = MemoryStore::new(categories);
    let question_count = seed.questions.len();
    for question in seed.questions {
        store
            .insert_question(question)
            .context("写入种子题目失败")?;
    }

    info!(
        "成功加载种子数据: {} 个分类, {} 个题目",
        store.scan_categories().map(|c| c.len()).unwrap_or(0),
        question_count
    );

    Ok(store)
}
