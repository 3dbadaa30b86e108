use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::models::question::Question;

/// 分类列表响应
#[derive(Debug, Serialize)]
pub struct CategoriesPayload {
    pub success: bool,
    /// id → 分类名称（JSON 对象的键会序列化为字符串）
    pub categories: BTreeMap<u64, String>,
}

/// 题目列表响应（全量 / 按分类 / 搜索共用）
#[derive(Debug, Serialize)]
pub struct QuestionListPayload {
    pub success: bool,
    pub questions: Vec<Question>,
    /// 过滤后的总数，而非当前页长度
    pub total_questions: usize,
    pub categories: BTreeMap<u64, String>,
    /// 按分类列出时为分类 id，否则为 null
    pub current_category: Option<u64>,
}

/// 删除题目响应
#[derive(Debug, Serialize)]
pub struct DeletePayload {
    pub success: bool,
    pub deleted: u64,
}

/// 创建题目响应
#[derive(Debug, Serialize)]
pub struct CreatePayload {
    pub success: bool,
    pub item: Question,
}

/// 答题响应
///
/// 候选耗尽不是错误：question 序列化为空对象 {}，success 仍为 true。
#[derive(Debug, Serialize)]
pub struct QuizPayload {
    pub success: bool,
    #[serde(serialize_with = "question_or_empty")]
    pub question: Option<Question>,
}

/// 将 None 序列化为空对象而不是 null
fn question_or_empty<S>(value: &Option<Question>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(q) => q.serialize(serializer),
        None => serializer.serialize_map(Some(0))?.end(),
    }
}
