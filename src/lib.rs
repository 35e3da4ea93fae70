//! Campus Connect - 学术门户客户端核心
//!
//! 基于 Tokio 构建的角色门控学术门户核心：作业生命周期与访问控制。
//! 持久化存储、页面渲染与令牌签发均由外部数据服务承担。
//!
//! # 架构
//! - `api`: 外部数据服务的 HTTP 客户端（`PortalApi` trait + reqwest 实现）
//! - `config`: 配置管理
//! - `directory`: 作业目录（按角色划分的快照缓存）
//! - `errors`: 统一错误处理
//! - `guard`: 访问守卫（角色门控）
//! - `models`: 数据模型定义
//! - `session`: 会话上下文（单写者会话对象）
//! - `status`: 作业状态引擎（纯函数）
//! - `utils`: 工具函数
//! - `workflows`: 提交 / 评分 / 作业管理工作流

pub mod api;
pub mod config;
pub mod directory;
pub mod errors;
pub mod guard;
pub mod models;
pub mod session;
pub mod status;
pub mod utils;
pub mod workflows;
