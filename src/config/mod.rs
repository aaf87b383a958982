// ==========================================
// 心愿单 CSV 导入 - 配置层
// ==========================================
// 职责: 导入允许的文件类型等配置的读取
// 存储: config_kv 表（可选），或构造时直接注入
// ==========================================

pub mod allowed_mime_types;
pub mod config_manager;
pub mod import_config_trait;

// 重导出核心配置类型
pub use allowed_mime_types::{AllowedMimeTypes, DEFAULT_ALLOWED_MIME_TYPES};
pub use config_manager::{config_keys, ConfigManager};
pub use import_config_trait::ImportConfigReader;
