// ==========================================
// 心愿单 CSV 导入 - 文件内容类型识别
// ==========================================
// 职责: 根据文件内容（而非扩展名）判定 MIME 类型
// 规则:
// - 已知二进制签名 → infer 识别结果
// - 空文件 → application/x-empty
// - 文本（UTF-8 或 Windows-1252）且首个非空行含 ',' 或 ';' → text/csv
// - 其他文本 → text/plain
// - 其余 → application/octet-stream
// ==========================================

use crate::importer::encoding::decode_text;
use crate::importer::wishlist_importer_trait::MimeDetector;

pub const MIME_EMPTY: &str = "application/x-empty";
pub const MIME_CSV: &str = "text/csv";
pub const MIME_PLAIN_TEXT: &str = "text/plain";
pub const MIME_OCTET_STREAM: &str = "application/octet-stream";

// ==========================================
// ContentMimeDetector - 内容嗅探实现
// ==========================================
#[derive(Debug, Default, Clone, Copy)]
pub struct ContentMimeDetector;

impl MimeDetector for ContentMimeDetector {
    fn detect(&self, content: &[u8]) -> String {
        if content.is_empty() {
            return MIME_EMPTY.to_string();
        }

        if let Some(kind) = infer::get(content) {
            return kind.mime_type().to_string();
        }

        let text = decode_text(content);
        if !is_text(&text) {
            MIME_OCTET_STREAM.to_string()
        } else if looks_like_csv(&text) {
            MIME_CSV.to_string()
        } else {
            MIME_PLAIN_TEXT.to_string()
        }
    }
}

/// 不含 NUL 及除 \t \r \n 以外的控制字符
fn is_text(text: &str) -> bool {
    !text
        .chars()
        .any(|c| c.is_control() && !matches!(c, '\t' | '\r' | '\n'))
}

fn looks_like_csv(text: &str) -> bool {
    text.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(|line| line.contains(',') || line.contains(';'))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_csv() {
        let content = b"variantId,productId,variantCode\n1,10,A\n";
        assert_eq!(ContentMimeDetector.detect(content), MIME_CSV);
    }

    #[test]
    fn test_detect_csv_with_bom() {
        let mut content = vec![0xEF, 0xBB, 0xBF];
        content.extend_from_slice(b"variantId;productId;variantCode\n");
        assert_eq!(ContentMimeDetector.detect(&content), MIME_CSV);
    }

    #[test]
    fn test_detect_latin1_csv_as_text() {
        let content = b"variantId,productId,variantCode,name\n1,10,MUG_BLUE,Caf\xe9 mug\n";
        assert_eq!(ContentMimeDetector.detect(content), MIME_CSV);
    }

    #[test]
    fn test_detect_plain_text() {
        assert_eq!(ContentMimeDetector.detect(b"hello world\n"), MIME_PLAIN_TEXT);
    }

    #[test]
    fn test_detect_empty() {
        assert_eq!(ContentMimeDetector.detect(b""), MIME_EMPTY);
    }

    #[test]
    fn test_detect_png_by_signature() {
        let png = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0x0D];
        assert_eq!(ContentMimeDetector.detect(&png), "image/png");
    }

    #[test]
    fn test_detect_pdf_named_like_csv_content() {
        let pdf = b"%PDF-1.7\n1 0 obj\n";
        assert_eq!(ContentMimeDetector.detect(pdf), "application/pdf");
    }

    #[test]
    fn test_detect_binary_garbage() {
        let content = [0x00, 0x01, 0x02, 0xFF, 0xFE];
        assert_eq!(ContentMimeDetector.detect(&content), MIME_OCTET_STREAM);
    }
}
