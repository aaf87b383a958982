// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 临时数据库初始化、商品目录种子数据、测试替身
// ==========================================

#![allow(dead_code)]

use rusqlite::Connection;
use std::error::Error;
use std::sync::Mutex;
use tempfile::NamedTempFile;
use wishlist_csv_import::db::init_catalog_schema;
use wishlist_csv_import::{AddVariantsToWishlistAction, ImportRequestContext, WishlistId};

/// 创建临时测试数据库并初始化 schema + 商品目录
///
/// # 返回
/// - NamedTempFile: 临时数据库文件（需要保持存活）
/// - String: 数据库文件路径
pub fn create_test_db() -> Result<(NamedTempFile, String), Box<dyn Error>> {
    let temp_file = NamedTempFile::new()?;
    let db_path = temp_file.path().to_str().ok_or("非法路径")?.to_string();

    let conn = Connection::open(&db_path)?;
    init_catalog_schema(&conn)?;
    insert_test_variants(&conn)?;

    Ok((temp_file, db_path))
}

/// 商品目录种子数据
///
/// | id | product_id | code     |
/// |----|------------|----------|
/// | 1  | 10         | MUG_BLUE |
/// | 2  | 10         | MUG_RED  |
/// | 3  | 20         | CAP_S    |
pub fn insert_test_variants(conn: &Connection) -> Result<(), Box<dyn Error>> {
    conn.execute_batch(
        r#"
        INSERT INTO product_variant (id, product_id, code) VALUES (1, 10, 'MUG_BLUE');
        INSERT INTO product_variant (id, product_id, code) VALUES (2, 10, 'MUG_RED');
        INSERT INTO product_variant (id, product_id, code) VALUES (3, 20, 'CAP_S');
        "#,
    )?;
    Ok(())
}

/// 写入 MIME 白名单配置
pub fn insert_allowed_mime_types(conn: &Connection, json: &str) -> Result<(), Box<dyn Error>> {
    conn.execute(
        "INSERT OR REPLACE INTO config_kv (scope_id, key, value) VALUES ('global', ?1, ?2)",
        rusqlite::params![wishlist_csv_import::config::config_keys::ALLOWED_MIME_TYPES, json],
    )?;
    Ok(())
}

/// 写入动作的测试响应
#[derive(Debug, Clone, PartialEq)]
pub struct WishlistResponse {
    pub status: u16,
    pub wishlist_id: String,
    pub variant_ids: Vec<String>,
}

/// 记录调用参数的心愿单写入动作
#[derive(Default)]
pub struct RecordingAddVariantsAction {
    calls: Mutex<Vec<(WishlistId, Vec<String>)>>,
}

impl RecordingAddVariantsAction {
    pub fn calls(&self) -> Vec<(WishlistId, Vec<String>)> {
        self.calls.lock().unwrap().clone()
    }
}

impl AddVariantsToWishlistAction for RecordingAddVariantsAction {
    type Response = WishlistResponse;

    fn add_variants_to_wishlist(
        &self,
        wishlist_id: &WishlistId,
        context: &ImportRequestContext,
    ) -> anyhow::Result<WishlistResponse> {
        let variant_ids = context.variant_ids().to_vec();
        self.calls
            .lock()
            .unwrap()
            .push((wishlist_id.clone(), variant_ids.clone()));

        Ok(WishlistResponse {
            status: 302,
            wishlist_id: wishlist_id.to_string(),
            variant_ids,
        })
    }
}

/// 把内容写入临时文件（保留扩展名 .csv，验证类型判定不依赖扩展名）
pub fn write_temp_csv(content: &[u8]) -> Result<NamedTempFile, Box<dyn Error>> {
    use std::io::Write;

    let mut temp_file = tempfile::Builder::new().suffix(".csv").tempfile()?;
    temp_file.write_all(content)?;
    temp_file.flush()?;
    Ok(temp_file)
}
