//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 每个接口契约对应一个编排操作，按固定流程推进：
//!
//! ```text
//! 校验 → 取数 → 过滤 → (分页 | 选题) → 投影 → 响应
//! ```
//!
//! 任一环节失败立即短路到错误分类（见 `error::ApiError`）。
//!
//! ## 设计原则
//!
//! 1. **请求间无状态**：每个请求独立处理，不保留任何跨请求记忆
//! 2. **依赖注入**：存储句柄在构造时传入，测试可替换为内存实现
//! 3. **显式校验**：字段存在性检查先于任何存储访问，不靠异常兜底
//! 4. **策略外置**：空页映射为 NotFound 是本层的决定，分页原语不感知

pub mod requests;

// 重新导出主要类型
pub use requests::Orchestrator;
