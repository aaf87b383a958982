// ==========================================
// 心愿单 CSV 导入 - 数据仓储层
// ==========================================
// 职责: 商品变体只读查询
// 红线: Repository 不含业务规则，只做数据访问
// ==========================================

pub mod error;
pub mod product_variant_repo;

// 重导出核心类型
pub use error::{RepositoryError, RepositoryResult};
pub use product_variant_repo::{ProductVariantRepository, SqliteProductVariantRepository};
