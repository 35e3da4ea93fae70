use serde::{Deserialize, Serialize};

// 创建 / 更新公告请求
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoticePayload {
    pub title: String,
    pub content: String,
}
