// ==========================================
// 心愿单 CSV 导入 - CSV 解析器实现
// ==========================================
// 职责: 内存中的 CSV 内容 → CsvWishlistRecord 列表
// 规则: 必须有表头；字段去除首尾空白；允许行长度不一致；
//       多余列忽略；非 UTF-8 内容按 Windows-1252 解码；
//       字段全空的行保留（交由变体校验判为无效）
// ==========================================

use crate::domain::CsvWishlistRecord;
use crate::importer::encoding::decode_text;
use crate::importer::error::ImportResult;
use crate::importer::wishlist_importer_trait::FileParser;
use csv::{ReaderBuilder, Trim};

// ==========================================
// CsvParser 实现
// ==========================================
#[derive(Debug, Default, Clone, Copy)]
pub struct CsvParser;

impl CsvParser {
    /// 表头仅含 ';' 时按分号分隔，否则按逗号
    fn detect_delimiter(text: &str) -> u8 {
        let header = text.lines().next().unwrap_or("");
        if !header.contains(',') && header.contains(';') {
            b';'
        } else {
            b','
        }
    }
}

impl FileParser for CsvParser {
    fn parse_records(&self, content: &[u8]) -> ImportResult<Vec<CsvWishlistRecord>> {
        let text = decode_text(content);

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致
            .trim(Trim::All)
            .delimiter(Self::detect_delimiter(&text))
            .from_reader(text.as_bytes());

        let records = reader
            .deserialize::<CsvWishlistRecord>()
            .collect::<Result<Vec<_>, _>>()?;

        Ok(records)
    }
}
