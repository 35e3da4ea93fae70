// 待上传的提交文件（传输层按不透明字节流处理）
#[derive(Debug, Clone)]
pub struct SubmissionFile {
    // 原始文件名（含扩展名，用于服务端校验与回显）
    pub file_name: String,
    // 文件内容
    pub content: Vec<u8>,
}

impl SubmissionFile {
    pub fn new(file_name: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content,
        }
    }

    pub fn size(&self) -> usize {
        self.content.len()
    }

    /// 提取小写扩展名（不含点）
    pub fn extension(&self) -> Option<String> {
        let (_, ext) = self.file_name.rsplit_once('.')?;
        if ext.is_empty() {
            None
        } else {
            Some(ext.to_ascii_lowercase())
        }
    }
}

// 已下载的提交文件
#[derive(Debug, Clone)]
pub struct DownloadedFile {
    pub file_name: String,
    pub content: Vec<u8>,
}
