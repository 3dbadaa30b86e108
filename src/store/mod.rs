//! 存储适配层
//!
//! 定义题库存储的统一契约，并提供内存实现。存储是唯一的共享可变资源，
//! 排序（即插入顺序）和标识分配均以存储为准。编排层在构造时注入一个
//! 存储句柄，测试可以用同一套契约替换实现。

pub mod memory;
pub mod seed;

use thiserror::Error;

use crate::models::{Category, NewQuestion, Question};

/// 存储层错误
#[derive(Debug, Error)]
pub enum StoreError {
    /// 共享状态的锁被毒化，存储不再可信
    #[error("存储内部锁已毒化")]
    LockPoisoned,
    /// 后端故障（由具体实现描述）
    #[error("存储后端故障: {0}")]
    Backend(String),
}

/// 存储层结果类型
pub type StoreResult<T> = Result<T, StoreError>;

/// 题库存储契约
///
/// 所有扫描操作按存储顺序返回；该顺序在无变更时保持稳定，
/// 分页和答题选择的确定性都依赖这一点。方法都是同步阻塞调用，
/// 并发控制由实现自行负责。
pub trait TriviaStore: Send + Sync {
    /// 按存储顺序返回全部题目
    fn scan_questions(&self) -> StoreResult<Vec<Question>>;

    /// 返回指定分类下的题目；未知分类得到空列表而非错误
    fn questions_by_category(&self, category_id: u64) -> StoreResult<Vec<Question>>;

    /// 在题干文本中做大小写不敏感的子串匹配（不匹配答案文本）
    fn search_questions(&self, term: &str) -> StoreResult<Vec<Question>>;

    /// 插入新题目，返回已分配标识的完整实体
    fn insert_question(&self, new: NewQuestion) -> StoreResult<Question>;

    /// 按标识删除题目
    ///
    /// # 返回
    /// Ok(true) 表示删除成功，Ok(false) 表示题目不存在；
    /// Err 表示操作已尝试但存储无法完成（编排层映射为 422）
    fn delete_question(&self, id: u64) -> StoreResult<bool>;

    /// 按存储顺序返回全部分类
    fn scan_categories(&self) -> StoreResult<Vec<Category>>;
}

pub use memory::MemoryStore;
pub use seed::load_seed_file;
