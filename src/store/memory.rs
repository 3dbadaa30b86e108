use std::sync::RwLock;

use tracing::debug;

use crate::models::{Category, NewQuestion, Question};
use crate::store::{StoreError, StoreResult, TriviaStore};

/// 内存题库存储
///
/// 用 RwLock 保护的向量保存题目和分类，向量顺序即存储顺序。
/// 分类在构造时给定，之后只读；题目标识单调递增，删除后不复用。
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

struct Inner {
    questions: Vec<Question>,
    categories: Vec<Category>,
    next_id: u64,
}

impl MemoryStore {
    /// 创建空题库，仅含给定的分类
    pub fn new(categories: Vec<Category>) -> Self {
        Self {
            inner: RwLock::new(Inner {
                questions: Vec::new(),
                categories,
                next_id: 1,
            }),
        }
    }

    fn read(&self) -> StoreResult<std::sync::RwLockReadGuard<'_, Inner>> {
        self.inner.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write(&self) -> StoreResult<std::sync::RwLockWriteGuard<'_, Inner>> {
        self.inner.write().map_err(|_| StoreError::LockPoisoned)
    }
}

impl TriviaStore for MemoryStore {
    fn scan_questions(&self) -> StoreResult<Vec<Question>> {
        Ok(self.read()?.questions.clone())
    }

    fn questions_by_category(&self, category_id: u64) -> StoreResult<Vec<Question>> {
        let inner = self.read()?;
        Ok(inner
            .questions
            .iter()
            .filter(|q| q.category == category_id)
            .cloned()
            .collect())
    }

    fn search_questions(&self, term: &str) -> StoreResult<Vec<Question>> {
        let needle = term.to_lowercase();
        let inner = self.read()?;
        Ok(inner
            .questions
            .iter()
            .filter(|q| q.question.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    fn insert_question(&self, new: NewQuestion) -> StoreResult<Question> {
        let mut inner = self.write()?;
        let question = Question {
            id: inner.next_id,
            question: new.question,
            answer: new.answer,
            difficulty: new.difficulty,
            category: new.category,
        };
        inner.next_id += 1;
        inner.questions.push(question.clone());
        debug!(id = question.id, "已插入题目");
        Ok(question)
    }

    fn delete_question(&self, id: u64) -> StoreResult<bool> {
        let mut inner = self.write()?;
        let before = inner.questions.len();
        inner.questions.retain(|q| q.id != id);
        let removed = inner.questions.len() < before;
        if removed {
            debug!(id, "已删除题目");
        }
        Ok(removed)
    }

    fn scan_categories(&self) -> StoreResult<Vec<Category>> {
        Ok(self.read()?.categories.clone())
    }
}
