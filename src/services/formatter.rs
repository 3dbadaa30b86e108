use std::collections::BTreeMap;

use crate::models::Category;

/// 将分类列表投影为 id → 名称 的映射
///
/// 纯投影，无校验无副作用；键的迭代顺序对调用方没有意义。
pub fn format_categories(categories: &[Category]) -> BTreeMap<u64, String> {
    categories
        .iter()
        .map(|c| (c.id, c.kind.clone()))
        .collect()
}
