//! 能力层
//!
//! 无状态的纯函数集合：候选池过滤、分页切片、答题选择、响应投影。
//! 不持有任何跨请求状态，所有输入显式传参。

pub mod filter;
pub mod formatter;
pub mod pagination;
pub mod quiz;

pub use filter::QuestionFilter;
pub use pagination::{paginate, QUESTIONS_PER_PAGE};
pub use quiz::{next_question, ALL_CATEGORIES};
