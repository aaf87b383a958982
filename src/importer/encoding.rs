// ==========================================
// 心愿单 CSV 导入 - 文本编码识别
// ==========================================
// 规则: 去除 UTF-8 BOM；合法 UTF-8 原样使用，
//       否则按 Windows-1252（Excel 默认导出编码）解码
// ==========================================

use encoding_rs::WINDOWS_1252;
use std::borrow::Cow;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// 文件内容解码为文本（不会失败）
pub fn decode_text(content: &[u8]) -> Cow<'_, str> {
    let body = content.strip_prefix(UTF8_BOM).unwrap_or(content);
    match std::str::from_utf8(body) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => WINDOWS_1252.decode_without_bom_handling(body).0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_utf8_with_bom() {
        let content = b"\xEF\xBB\xBFvariantId\n";
        assert_eq!(decode_text(content), "variantId\n");
    }

    #[test]
    fn test_decode_latin1_fallback() {
        assert_eq!(decode_text(b"Caf\xe9"), "Café");
    }
}
