use std::sync::Arc;

use tracing::{debug, info};

use crate::error::{ApiError, ApiResult};
use crate::models::{
    CategoriesPayload, CreatePayload, DeletePayload, QuestionDraft, QuestionListPayload,
    QuizDraft, QuizPayload,
};
use crate::services::filter::{candidate_questions, QuestionFilter};
use crate::services::formatter::format_categories;
use crate::services::{next_question, paginate, ALL_CATEGORIES};
use crate::store::TriviaStore;

/// 请求编排器
///
/// 持有注入的存储句柄，按接口契约组合过滤、分页、选题与投影。
/// 自身不含可变状态，可在并发请求间共享。
pub struct Orchestrator {
    store: Arc<dyn TriviaStore>,
}

impl Orchestrator {
    /// 创建编排器
    pub fn new(store: Arc<dyn TriviaStore>) -> Self {
        Self { store }
    }

    /// 列出全部分类
    ///
    /// # 返回
    /// 分类映射；题库中没有任何分类时返回 NotFound
    pub fn list_categories(&self) -> ApiResult<CategoriesPayload> {
        let categories = self.store.scan_categories()?;
        if categories.is_empty() {
            return Err(ApiError::NotFound);
        }

        Ok(CategoriesPayload {
            success: true,
            categories: format_categories(&categories),
        })
    }

    /// 分页列出全部题目
    pub fn list_questions(&self, page: usize) -> ApiResult<QuestionListPayload> {
        self.paged_listing(QuestionFilter::All, page, None)
    }

    /// 分页列出指定分类下的题目
    ///
    /// 未知分类得到空候选池，触发与越界页相同的空页规则
    pub fn questions_by_category(
        &self,
        category_id: u64,
        page: usize,
    ) -> ApiResult<QuestionListPayload> {
        self.paged_listing(
            QuestionFilter::Category(category_id),
            page,
            Some(category_id),
        )
    }

    /// 按题干搜索题目
    ///
    /// # 参数
    /// - `term`: 搜索词；缺失或空白属于调用方错误，返回 BadRequest
    pub fn search_questions(
        &self,
        term: Option<&str>,
        page: usize,
    ) -> ApiResult<QuestionListPayload> {
        let term = match term {
            Some(t) if !t.trim().is_empty() => t,
            _ => return Err(ApiError::bad_request("缺少 search_term 字段")),
        };

        debug!(term, "执行题目搜索");
        self.paged_listing(QuestionFilter::Search(term.to_string()), page, None)
    }

    /// 创建新题目
    pub fn create_question(&self, draft: QuestionDraft) -> ApiResult<CreatePayload> {
        let new = draft.validate()?;
        let item = self.store.insert_question(new)?;
        info!(id = item.id, "新题目已创建");

        Ok(CreatePayload {
            success: true,
            item,
        })
    }

    /// 删除题目（永久，不可恢复）
    ///
    /// # 返回
    /// 未知标识返回 NotFound；存储在删除过程中出错返回 Unprocessable，
    /// 二者语义不同：前者是"从未存在"，后者是"尝试过但没能完成"
    pub fn delete_question(&self, id: u64) -> ApiResult<DeletePayload> {
        match self.store.delete_question(id) {
            Ok(true) => {
                info!(id, "题目已删除");
                Ok(DeletePayload {
                    success: true,
                    deleted: id,
                })
            }
            Ok(false) => Err(ApiError::NotFound),
            Err(e) => Err(ApiError::Unprocessable {
                detail: e.to_string(),
            }),
        }
    }

    /// 答题：选出下一道未出过的题
    ///
    /// 候选池按 quiz_category.id 过滤（0 表示全部分类），
    /// 排除集由调用方每轮原样回传，服务端不保存会话状态。
    /// 候选耗尽返回 success=true 且 question 为空对象。
    pub fn play_quiz(&self, draft: QuizDraft) -> ApiResult<QuizPayload> {
        let (previous, category_id) = draft.validate()?;

        let filter = if category_id == ALL_CATEGORIES {
            QuestionFilter::All
        } else {
            QuestionFilter::Category(category_id)
        };
        let candidates = candidate_questions(self.store.as_ref(), &filter)?;

        let question = next_question(&candidates, &previous).cloned();
        if question.is_none() {
            debug!(category_id, "候选题目已耗尽");
        }

        Ok(QuizPayload {
            success: true,
            question,
        })
    }

    /// 列表类接口的公共流程：过滤 → 分页 → 投影
    ///
    /// 空页在数学上是合法切片，这里按既定策略统一映射为 NotFound
    fn paged_listing(
        &self,
        filter: QuestionFilter,
        page: usize,
        current_category: Option<u64>,
    ) -> ApiResult<QuestionListPayload> {
        let candidates = candidate_questions(self.store.as_ref(), &filter)?;
        let total_questions = candidates.len();

        let page_items = paginate(&candidates, page);
        if page_items.is_empty() {
            return Err(ApiError::NotFound);
        }

        let categories = self.store.scan_categories()?;

        Ok(QuestionListPayload {
            success: true,
            questions: page_items.to_vec(),
            total_questions,
            categories: format_categories(&categories),
            current_category,
        })
    }
}
