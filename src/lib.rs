// ==========================================
// 心愿单 CSV 导入 - 核心库
// ==========================================
// 职责: 上传的 CSV → 商品变体校验 → 请求上下文 → 心愿单写入动作
// 技术栈: Rust + SQLite
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 行记录、请求上下文
pub mod domain;

// 数据仓储层 - 商品变体查询
pub mod repository;

// 导入层 - 文件校验与解析
pub mod importer;

// 配置层 - 文件类型白名单
pub mod config;

// 用户反馈 - flash 消息
pub mod feedback;

// 数据库基础设施（连接初始化/PRAGMA 统一）
pub mod db;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// ==========================================
// 重导出核心类型
// ==========================================

pub use config::{AllowedMimeTypes, ConfigManager, ImportConfigReader};
pub use domain::{
    CsvWishlistRecord, ImportRequestContext, ImportSummary, ImportWishlistFromCsv,
    ProductVariant, WishlistId, VARIANT_ID_ATTRIBUTE,
};
pub use feedback::{FlashBag, FlashKind, RequestFlashBag};
pub use importer::{
    AddVariantsToWishlistAction, ImportError, ImportResult, WishlistCsvImporter, WishlistImporter,
};
pub use repository::{ProductVariantRepository, SqliteProductVariantRepository};

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
