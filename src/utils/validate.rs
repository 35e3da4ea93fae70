use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::UploadConfig;
use crate::errors::{PortalError, Result};
use crate::models::files::entities::SubmissionFile;

static FILE_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^/\\]+\.[A-Za-z0-9]+$").expect("Invalid file name regex"));

/// 校验提交文件（在产生任何网络效果之前执行）
///
/// 规则：
/// - 文件名含扩展名，不得携带路径分隔符
/// - 扩展名在允许列表内（默认 pdf / doc / docx）
/// - 内容非空且不超过大小上限（默认 10MB）
pub fn validate_submission_file(file: &SubmissionFile, upload: &UploadConfig) -> Result<()> {
    if !FILE_NAME_RE.is_match(&file.file_name) {
        return Err(PortalError::validation(format!(
            "Invalid file name: {}",
            file.file_name
        )));
    }

    let extension = file
        .extension()
        .ok_or_else(|| PortalError::validation("File has no extension"))?;
    if !upload
        .allowed_extensions
        .iter()
        .any(|allowed| allowed.eq_ignore_ascii_case(&extension))
    {
        return Err(PortalError::validation(format!(
            "Unsupported file type .{extension}, accepted formats: {}",
            upload.allowed_extensions.join(", ")
        )));
    }

    if file.content.is_empty() {
        return Err(PortalError::validation("File is empty"));
    }
    if file.size() > upload.max_size {
        return Err(PortalError::validation(format!(
            "File exceeds the {} byte limit",
            upload.max_size
        )));
    }

    Ok(())
}

/// 校验分数：必须是 [0, 100] 内的整数
pub fn validate_grade(grade: i32) -> Result<()> {
    if !(0..=100).contains(&grade) {
        return Err(PortalError::validation(format!(
            "Grade must be between 0 and 100, got {grade}"
        )));
    }
    Ok(())
}

/// 校验作业字段：标题与描述去除首尾空白后非空
pub fn validate_assignment_fields(title: &str, description: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(PortalError::validation("Title must not be empty"));
    }
    if description.trim().is_empty() {
        return Err(PortalError::validation("Description must not be empty"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload_config() -> UploadConfig {
        UploadConfig {
            max_size: 10 * 1024 * 1024,
            allowed_extensions: vec!["pdf".to_string(), "doc".to_string(), "docx".to_string()],
        }
    }

    #[test]
    fn test_accepted_extensions() {
        let config = upload_config();
        for name in ["essay.pdf", "essay.doc", "essay.docx", "Essay.PDF"] {
            let file = SubmissionFile::new(name, vec![0u8; 16]);
            assert!(validate_submission_file(&file, &config).is_ok(), "{name}");
        }
    }

    #[test]
    fn test_rejected_extensions() {
        let config = upload_config();
        for name in ["essay.exe", "essay.txt", "essay", "essay."] {
            let file = SubmissionFile::new(name, vec![0u8; 16]);
            assert!(validate_submission_file(&file, &config).is_err(), "{name}");
        }
    }

    #[test]
    fn test_path_separators_rejected() {
        let config = upload_config();
        let file = SubmissionFile::new("../sneaky.pdf", vec![0u8; 16]);
        assert!(validate_submission_file(&file, &config).is_err());
    }

    #[test]
    fn test_empty_file_rejected() {
        let config = upload_config();
        let file = SubmissionFile::new("essay.pdf", Vec::new());
        assert!(validate_submission_file(&file, &config).is_err());
    }

    #[test]
    fn test_size_ceiling() {
        let config = UploadConfig {
            max_size: 8,
            allowed_extensions: vec!["pdf".to_string()],
        };
        let within = SubmissionFile::new("essay.pdf", vec![0u8; 8]);
        assert!(validate_submission_file(&within, &config).is_ok());
        let over = SubmissionFile::new("essay.pdf", vec![0u8; 9]);
        assert!(validate_submission_file(&over, &config).is_err());
    }

    #[test]
    fn test_grade_range() {
        assert!(validate_grade(0).is_ok());
        assert!(validate_grade(100).is_ok());
        assert!(validate_grade(85).is_ok());
        assert!(validate_grade(-1).is_err());
        assert!(validate_grade(101).is_err());
    }

    #[test]
    fn test_assignment_fields() {
        assert!(validate_assignment_fields("Essay", "Write one").is_ok());
        assert!(validate_assignment_fields("   ", "Write one").is_err());
        assert!(validate_assignment_fields("Essay", "").is_err());
    }
}
