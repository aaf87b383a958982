// ==========================================
// 心愿单 CSV 导入 - 导入 Trait
// ==========================================
// 职责: 定义导入流程及其协作方接口（不包含实现）
// ==========================================

use crate::domain::{
    CsvWishlistRecord, ImportRequestContext, ImportWishlistFromCsv, WishlistId,
};
use crate::importer::error::ImportResult;

// ==========================================
// WishlistImporter Trait
// ==========================================
// 用途: 导入命令处理主接口
// 实现者: WishlistCsvImporter
pub trait WishlistImporter {
    /// 心愿单写入动作的响应类型
    type Response;

    /// 处理导入命令
    ///
    /// # 参数
    /// - command: 文件路径 + 目标心愿单
    /// - context: 当前请求上下文（写入已校验的变体 ID）
    ///
    /// # 返回
    /// - Ok(Response): 心愿单写入动作的原样响应
    /// - Err(InvalidFileType): 文件类型不在白名单内（写入动作不会被调用）
    /// - Err: 文件读取 / CSV 解析 / 变体查询 / 写入动作失败
    fn handle(
        &self,
        command: &ImportWishlistFromCsv,
        context: &mut ImportRequestContext,
    ) -> ImportResult<Self::Response>;
}

// ==========================================
// MimeDetector Trait
// ==========================================
// 用途: 按文件内容判定 MIME 类型
// 实现者: ContentMimeDetector
pub trait MimeDetector: Send + Sync {
    fn detect(&self, content: &[u8]) -> String;
}

// ==========================================
// FileParser Trait
// ==========================================
// 用途: 文件内容解析为行记录
// 实现者: CsvParser
pub trait FileParser: Send + Sync {
    /// 解析文件内容
    ///
    /// # 返回
    /// - Ok(Vec<CsvWishlistRecord>): 行记录（按输入顺序，已跳过空白行）
    /// - Err: 格式错误
    fn parse_records(&self, content: &[u8]) -> ImportResult<Vec<CsvWishlistRecord>>;
}

// ==========================================
// AddVariantsToWishlistAction Trait
// ==========================================
// 用途: 将请求上下文中的变体 ID 加入心愿单（由宿主应用实现）
pub trait AddVariantsToWishlistAction: Send + Sync {
    type Response;

    /// # 参数
    /// - wishlist_id: 目标心愿单
    /// - context: 已写入 VARIANT_ID_ATTRIBUTE 的请求上下文
    fn add_variants_to_wishlist(
        &self,
        wishlist_id: &WishlistId,
        context: &ImportRequestContext,
    ) -> anyhow::Result<Self::Response>;
}
