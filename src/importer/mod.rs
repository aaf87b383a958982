// ==========================================
// 心愿单 CSV 导入 - 导入层
// ==========================================
// 职责: 上传文件 → 校验 → 有效变体 ID → 心愿单写入动作
// 支持: CSV
// ==========================================

// 模块声明
pub mod encoding;
pub mod error;
pub mod file_parser;
pub mod mime_detector;
pub mod wishlist_importer_impl;
pub mod wishlist_importer_trait;

// 重导出核心类型
pub use error::{ImportError, ImportResult};
pub use file_parser::CsvParser;
pub use mime_detector::ContentMimeDetector;
pub use wishlist_importer_impl::{WishlistCsvImporter, INCORRECT_PRODUCTS_MESSAGE_KEY};

// 重导出 Trait 接口
pub use wishlist_importer_trait::{
    AddVariantsToWishlistAction, FileParser, MimeDetector, WishlistImporter,
};
