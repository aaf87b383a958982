// ==========================================
// 心愿单 CSV 导入 - 导入配置读取 Trait
// ==========================================
// 职责: 定义导入模块所需的配置读取接口（不包含实现）
// 红线: 不包含配置写入、不包含业务逻辑
// ==========================================

use crate::config::allowed_mime_types::AllowedMimeTypes;
use std::error::Error;

// ==========================================
// ImportConfigReader Trait
// ==========================================
// 用途: 导入模块所需的配置读取接口
// 实现者: ConfigManager（从 config_kv 表读取）
pub trait ImportConfigReader: Send + Sync {
    /// 获取允许导入的 MIME 类型白名单
    ///
    /// # 默认值
    /// - ["text/csv", "text/plain"]
    fn get_allowed_mime_types(&self) -> Result<AllowedMimeTypes, Box<dyn Error>>;
}
