use crate::models::Question;

/// "全部分类" 哨兵值，来自前端约定
pub const ALL_CATEGORIES: u64 = 0;

/// 从候选池中选出下一道未出过的题
///
/// 按存储顺序做首个未命中排除集的扫描，这是有意的确定性选择
/// 而非随机抽取；排除集中不存在于候选池的标识会被无害地忽略。
///
/// # 返回
/// 候选耗尽时返回 None —— 这是答题回合的合法终态，不是错误
pub fn next_question<'a>(candidates: &'a [Question], excluded_ids: &[u64]) -> Option<&'a Question> {
    candidates.iter().find(|q| !excluded_ids.contains(&q.id))
}
