// ==========================================
// 心愿单 CSV 导入 - 商品变体 Repository
// ==========================================
// 职责: 按 (变体 ID, 商品 ID, 变体编码) 三元组查询商品变体
// 红线: 只读查询，不含业务规则
// ==========================================

use crate::db::open_sqlite_connection;
use crate::domain::ProductVariant;
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection};
use std::sync::{Arc, Mutex};

// ==========================================
// ProductVariantRepository Trait
// ==========================================
// 用途: 导入时校验 CSV 行是否对应真实存在的商品变体
// 实现者: SqliteProductVariantRepository
pub trait ProductVariantRepository: Send + Sync {
    /// 按三元组查询商品变体
    ///
    /// # 返回
    /// - Ok(Some(ProductVariant)): 三个字段同时匹配且唯一
    /// - Ok(None): 无匹配
    /// - Err: 数据访问失败
    fn find_variant(
        &self,
        variant_id: &str,
        product_id: &str,
        variant_code: &str,
    ) -> RepositoryResult<Option<ProductVariant>>;
}

// ==========================================
// SqliteProductVariantRepository
// ==========================================
/// 基于 product_variant 表的商品变体仓储
pub struct SqliteProductVariantRepository {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteProductVariantRepository {
    /// 创建新的仓储实例
    ///
    /// # 参数
    /// - db_path: 数据库文件路径
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = open_sqlite_connection(db_path)
            .map_err(|e| RepositoryError::DatabaseConnectionError(e.to_string()))?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// 从已有连接创建仓储实例
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    /// 获取数据库连接
    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }
}

impl ProductVariantRepository for SqliteProductVariantRepository {
    fn find_variant(
        &self,
        variant_id: &str,
        product_id: &str,
        variant_code: &str,
    ) -> RepositoryResult<Option<ProductVariant>> {
        let conn = self.get_conn()?;

        // LIMIT 2: 只需区分“唯一匹配”与“多条匹配”
        let mut stmt = conn.prepare(
            r#"
            SELECT CAST(id AS TEXT), CAST(product_id AS TEXT), code
            FROM product_variant
            WHERE id = ?1 AND product_id = ?2 AND code = ?3
            LIMIT 2
            "#,
        )?;

        let variants = stmt
            .query_map(params![variant_id, product_id, variant_code], |row| {
                Ok(ProductVariant {
                    id: row.get(0)?,
                    product_id: row.get(1)?,
                    code: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        match variants.len() {
            1 => Ok(variants.into_iter().next()),
            0 => Ok(None),
            n => {
                tracing::warn!(
                    variant_id,
                    product_id,
                    variant_code,
                    matches = n,
                    "商品变体匹配不唯一，视为无效"
                );
                Ok(None)
            }
        }
    }
}
