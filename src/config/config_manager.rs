// ==========================================
// 心愿单 CSV 导入 - 配置管理器
// ==========================================
// 职责: 配置加载、查询、覆写
// 存储: config_kv 表 (key-value + scope)
// ==========================================

use crate::config::allowed_mime_types::AllowedMimeTypes;
use crate::config::import_config_trait::ImportConfigReader;
use crate::db::open_sqlite_connection;
use rusqlite::{params, Connection};
use std::error::Error;
use std::sync::{Arc, Mutex};

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
pub struct ConfigManager {
    conn: Arc<Mutex<Connection>>,
}

impl ConfigManager {
    /// 创建新的 ConfigManager 实例
    ///
    /// # 参数
    /// - db_path: 数据库文件路径
    pub fn new(db_path: &str) -> Result<Self, Box<dyn Error>> {
        let conn = open_sqlite_connection(db_path)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// 从已有连接创建 ConfigManager
    ///
    /// 说明：为保证连接行为一致，会对传入连接再次应用统一 PRAGMA（幂等）。
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Result<Self, Box<dyn Error>> {
        {
            let conn_guard = conn.lock().map_err(|e| format!("锁获取失败: {}", e))?;
            crate::db::configure_sqlite_connection(&conn_guard)?;
        }

        Ok(Self { conn })
    }

    /// 从 config_kv 表读取配置值（scope_id='global'）
    fn get_config_value(&self, key: &str) -> Result<Option<String>, Box<dyn Error>> {
        let conn = self.conn.lock().map_err(|e| format!("锁获取失败: {}", e))?;

        let result = conn.query_row(
            "SELECT value FROM config_kv WHERE scope_id = 'global' AND key = ?1",
            params![key],
            |row| row.get::<_, String>(0),
        );

        match result {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(Box::new(e)),
        }
    }

    /// 读取 global scope 的配置值（公开方法，供其他模块复用）
    pub fn get_global_config_value(&self, key: &str) -> Result<Option<String>, Box<dyn Error>> {
        self.get_config_value(key)
    }

    /// 写入 global scope 的配置值（UPSERT）
    pub fn set_global_config_value(&self, key: &str, value: &str) -> Result<(), Box<dyn Error>> {
        let conn = self.conn.lock().map_err(|e| format!("锁获取失败: {}", e))?;

        conn.execute(
            "INSERT INTO config_kv (scope_id, key, value) VALUES ('global', ?1, ?2)
             ON CONFLICT(scope_id, key) DO UPDATE SET value = ?2, updated_at = datetime('now')",
            params![key, value],
        )?;
        Ok(())
    }
}

// ==========================================
// ImportConfigReader Trait 实现
// ==========================================
impl ImportConfigReader for ConfigManager {
    fn get_allowed_mime_types(&self) -> Result<AllowedMimeTypes, Box<dyn Error>> {
        let value = match self.get_config_value(config_keys::ALLOWED_MIME_TYPES)? {
            Some(v) => v,
            None => return Ok(AllowedMimeTypes::default()),
        };

        let mime_types: Vec<String> = match serde_json::from_str(&value) {
            Ok(list) => list,
            Err(e) => {
                tracing::warn!(
                    config_key = config_keys::ALLOWED_MIME_TYPES,
                    raw_value = %value,
                    error = %e,
                    "MIME 白名单配置格式错误，使用默认配置"
                );
                return Ok(AllowedMimeTypes::default());
            }
        };

        let allowed = AllowedMimeTypes::new(mime_types);
        if allowed.is_empty() {
            tracing::warn!(
                config_key = config_keys::ALLOWED_MIME_TYPES,
                "MIME 白名单为空，使用默认配置"
            );
            return Ok(AllowedMimeTypes::default());
        }

        Ok(allowed)
    }
}

// ==========================================
// 配置键常量
// ==========================================
pub mod config_keys {
    // 导入文件类型白名单 (JSON 字符串数组)
    pub const ALLOWED_MIME_TYPES: &str = "wishlist_import/allowed_mime_types";
}
