// ==========================================
// 心愿单 CSV 导入 - 领域模型层
// ==========================================
// 职责: 定义导入行记录、请求上下文、商品变体等领域对象
// 红线: 不含数据访问逻辑,不含导入流程逻辑
// ==========================================

pub mod wishlist;

// 重导出核心类型
pub use wishlist::{
    CsvWishlistRecord, ImportRequestContext, ImportSummary, ImportWishlistFromCsv,
    ProductVariant, WishlistId, VARIANT_ID_ATTRIBUTE,
};
