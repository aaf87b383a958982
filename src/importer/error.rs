// ==========================================
// 心愿单 CSV 导入 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use crate::repository::RepositoryError;
use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误 =====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件类型不受支持: {detected}（允许: {allowed}）")]
    InvalidFileType { detected: String, allowed: String },

    #[error("文件读取失败: {0}")]
    FileReadError(String),

    #[error("CSV 解析失败: {0}")]
    CsvParseError(String),

    // ===== 协作方错误 =====
    #[error("商品变体查询失败 (行 {row}): {source}")]
    VariantLookupError {
        row: usize,
        #[source]
        source: RepositoryError,
    },

    #[error("心愿单写入动作执行失败: {0}")]
    DownstreamFailure(String),
}

impl ImportError {
    /// 是否为文件类型校验失败
    pub fn is_invalid_file_type(&self) -> bool {
        matches!(self, ImportError::InvalidFileType { .. })
    }
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

// 实现 From<csv::Error>
impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_file_type_message() {
        let err = ImportError::InvalidFileType {
            detected: "application/pdf".to_string(),
            allowed: "text/csv, text/plain".to_string(),
        };
        assert!(err.is_invalid_file_type());
        assert!(err.to_string().contains("application/pdf"));
        assert!(err.to_string().contains("text/csv, text/plain"));
    }

    #[test]
    fn test_io_error_maps_to_file_read_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: ImportError = io_err.into();
        assert!(matches!(err, ImportError::FileReadError(_)));
        assert!(!err.is_invalid_file_type());
    }
}
