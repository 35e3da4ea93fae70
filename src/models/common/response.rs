use serde::{Deserialize, Serialize};

// 数据服务的通用消息响应体（错误响应与部分成功响应均为此形状）
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ServiceMessage {
    #[serde(default)]
    pub message: Option<String>,
}

impl ServiceMessage {
    /// 取出服务端消息，缺失时回退到给定默认值
    pub fn message_or(self, fallback: &str) -> String {
        match self.message {
            Some(msg) if !msg.is_empty() => msg,
            _ => fallback.to_string(),
        }
    }
}
