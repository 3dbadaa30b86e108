//! API 模块
//!
//! 传输层：路由注册、参数提取与 CORS，业务判断全部交给编排层

pub mod routes;

// 重新导出常用函数
pub use routes::router;
