use crate::models::Question;
use crate::store::{StoreResult, TriviaStore};

/// 候选池过滤条件
///
/// 每个请求只应用一种过滤：全量、按分类、或按题干搜索，
/// 不做组合。未知分类得到空候选池，由编排层决定如何处置。
#[derive(Debug, Clone)]
pub enum QuestionFilter {
    /// 不过滤，全量有序扫描
    All,
    /// 分类标识相等
    Category(u64),
    /// 题干大小写不敏感子串匹配
    Search(String),
}

/// 按过滤条件产出候选题目序列（存储顺序）
pub fn candidate_questions(
    store: &dyn TriviaStore,
    filter: &QuestionFilter,
) -> StoreResult<Vec<Question>> {
    match filter {
        QuestionFilter::All => store.scan_questions(),
        QuestionFilter::Category(id) => store.questions_by_category(*id),
        QuestionFilter::Search(term) => store.search_questions(term),
    }
}
