// ==========================================
// 心愿单 CSV 导入 - 心愿单领域模型
// ==========================================
// 职责: CSV 行记录 / 导入命令 / 请求上下文 / 导入汇总
// ==========================================

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

/// 请求上下文中存放已校验变体 ID 的属性键
pub const VARIANT_ID_ATTRIBUTE: &str = "variantId";

// ==========================================
// WishlistId - 心愿单标识
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WishlistId(pub String);

impl WishlistId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WishlistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ==========================================
// CsvWishlistRecord - CSV 行记录
// ==========================================
// 宽松反序列化: 所有字段按字符串读取并去除首尾空白，
// 缺失列视为空字符串，多余列忽略
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CsvWishlistRecord {
    #[serde(
        default,
        alias = "variantId",
        deserialize_with = "loose_string"
    )]
    pub variant_id: String,

    #[serde(
        default,
        alias = "productId",
        deserialize_with = "loose_string"
    )]
    pub product_id: String,

    #[serde(
        default,
        alias = "variantCode",
        deserialize_with = "loose_string"
    )]
    pub variant_code: String,
}

impl CsvWishlistRecord {
    pub fn new(
        variant_id: impl Into<String>,
        product_id: impl Into<String>,
        variant_code: impl Into<String>,
    ) -> Self {
        Self {
            variant_id: variant_id.into(),
            product_id: product_id.into(),
            variant_code: variant_code.into(),
        }
    }
}

/// 任意标量按字符串接收（不做类型强校验）
fn loose_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.map(|v| v.trim().to_string()).unwrap_or_default())
}

// ==========================================
// ProductVariant - 商品变体（查询结果）
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductVariant {
    pub id: String,
    pub product_id: String,
    pub code: String,
}

// ==========================================
// ImportWishlistFromCsv - 导入命令
// ==========================================
#[derive(Debug, Clone)]
pub struct ImportWishlistFromCsv {
    pub file_path: PathBuf,
    pub wishlist_id: WishlistId,
}

impl ImportWishlistFromCsv {
    pub fn new(file_path: impl Into<PathBuf>, wishlist_id: WishlistId) -> Self {
        Self {
            file_path: file_path.into(),
            wishlist_id,
        }
    }
}

// ==========================================
// ImportRequestContext - 请求上下文
// ==========================================
// 请求级别的属性容器，由调用方持有；导入器只写入 VARIANT_ID_ATTRIBUTE
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportRequestContext {
    attributes: HashMap<String, Vec<String>>,
}

impl ImportRequestContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.attributes.get(key).map(Vec::as_slice)
    }

    pub fn set(&mut self, key: impl Into<String>, values: Vec<String>) {
        self.attributes.insert(key.into(), values);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.attributes.contains_key(key)
    }

    /// 已校验的变体 ID（按输入顺序）
    pub fn variant_ids(&self) -> &[String] {
        self.get(VARIANT_ID_ATTRIBUTE).unwrap_or(&[])
    }

    /// 覆盖写入变体 ID 列表
    ///
    /// 同一文件重复导入时结果保持一致（不累加）
    pub fn set_variant_ids(&mut self, variant_ids: Vec<String>) {
        self.set(VARIANT_ID_ATTRIBUTE, variant_ids);
    }
}

// ==========================================
// ImportSummary - 导入汇总
// ==========================================
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub total_rows: usize,
    pub accepted: usize,
    pub rejected: usize,
}

impl ImportSummary {
    pub fn has_rejections(&self) -> bool {
        self.rejected > 0
    }
}
