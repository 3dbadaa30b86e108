//! # Trivia API
//!
//! 一个提供问答题目检索与答题选择的 HTTP 服务
//!
//! ## 架构设计
//!
//! 本系统采用分层架构：
//!
//! ### ① 存储适配层（Store）
//! - `store/` - 题库存储契约与内存实现
//! - `TriviaStore` - 有序扫描 / 按分类过滤 / 题干搜索 / 插入 / 删除
//! - 种子数据由 TOML 文件在启动时载入
//!
//! ### ② 能力层（Services）
//! - `services/` - 无状态纯函数，只处理显式传入的序列
//! - `pagination` - 固定页长的半开区间切片
//! - `filter` - 候选池过滤（全量 / 分类 / 搜索，三选一）
//! - `quiz` - 确定性的"首个未出过的题"选择
//! - `formatter` - 实体到传输记录的投影
//!
//! ### ③ 编排层（Orchestrator）
//! - `orchestrator/` - 按接口契约组合能力层，映射成功与错误结果
//! - 校验 → 取数 → 过滤 → (分页 | 选题) → 投影 → 响应
//!
//! ### ④ 传输层（Api）
//! - `api/` - axum 路由与参数提取，CORS
//! - 错误统一为 {success, error, message} 三字段响应
//!
//! ## 模块结构

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod store;

// 重新导出常用类型
pub use app::App;
pub use config::Config;
pub use error::{ApiError, ApiResult};
pub use models::{Category, NewQuestion, Question};
pub use orchestrator::Orchestrator;
pub use store::{MemoryStore, TriviaStore};
