// ==========================================
// 心愿单 CSV 导入 - 导入器实现
// ==========================================
// 职责: 整合导入流程，从上传文件到心愿单写入动作
// 流程: 读取 → 类型校验 → 解析 → 变体校验 → 写入上下文 → 提示 → 转交写入动作
// ==========================================

use crate::config::AllowedMimeTypes;
use crate::domain::{ImportRequestContext, ImportSummary, ImportWishlistFromCsv, WishlistId};
use crate::feedback::{FlashBag, FlashKind};
use crate::i18n;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::file_parser::CsvParser;
use crate::importer::mime_detector::ContentMimeDetector;
use crate::importer::wishlist_importer_trait::{
    AddVariantsToWishlistAction, FileParser, MimeDetector, WishlistImporter,
};
use crate::repository::ProductVariantRepository;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

/// CSV 中存在无效商品时的提示消息键
pub const INCORRECT_PRODUCTS_MESSAGE_KEY: &str =
    "wishlist.ui.csv_file_contains_incorrect_products";

// ==========================================
// WishlistCsvImporter - 心愿单 CSV 导入器
// ==========================================
pub struct WishlistCsvImporter<R, A>
where
    R: ProductVariantRepository,
    A: AddVariantsToWishlistAction,
{
    // 商品变体查询
    variant_repo: R,

    // 心愿单写入动作
    add_variants_action: A,

    // 文件类型白名单
    allowed_mime_types: AllowedMimeTypes,

    // 导入组件
    mime_detector: Box<dyn MimeDetector>,
    file_parser: Box<dyn FileParser>,

    // 用户提示
    flash_bag: Arc<dyn FlashBag>,
}

impl<R, A> WishlistCsvImporter<R, A>
where
    R: ProductVariantRepository,
    A: AddVariantsToWishlistAction,
{
    /// 创建新的导入器实例
    ///
    /// # 参数
    /// - variant_repo: 商品变体仓储
    /// - add_variants_action: 心愿单写入动作
    /// - allowed_mime_types: 文件类型白名单
    /// - mime_detector: 内容类型识别器
    /// - file_parser: 文件解析器
    /// - flash_bag: 用户提示通道
    pub fn new(
        variant_repo: R,
        add_variants_action: A,
        allowed_mime_types: AllowedMimeTypes,
        mime_detector: Box<dyn MimeDetector>,
        file_parser: Box<dyn FileParser>,
        flash_bag: Arc<dyn FlashBag>,
    ) -> Self {
        Self {
            variant_repo,
            add_variants_action,
            allowed_mime_types,
            mime_detector,
            file_parser,
            flash_bag,
        }
    }

    /// 使用默认的内容嗅探与 CSV 解析组件创建导入器
    pub fn with_default_components(
        variant_repo: R,
        add_variants_action: A,
        allowed_mime_types: AllowedMimeTypes,
        flash_bag: Arc<dyn FlashBag>,
    ) -> Self {
        Self::new(
            variant_repo,
            add_variants_action,
            allowed_mime_types,
            Box::new(ContentMimeDetector),
            Box::new(CsvParser),
            flash_bag,
        )
    }

    pub fn allowed_mime_types(&self) -> &AllowedMimeTypes {
        &self.allowed_mime_types
    }

    /// 导入 CSV 并转交心愿单写入动作
    ///
    /// # 返回
    /// - Ok(Response): 写入动作的原样响应
    /// - Err: 见 `WishlistImporter::handle`
    #[instrument(skip(self, file_path, context), fields(import_id, wishlist_id = %wishlist_id))]
    pub fn import(
        &self,
        file_path: &Path,
        wishlist_id: &WishlistId,
        context: &mut ImportRequestContext,
    ) -> ImportResult<A::Response> {
        let import_id = Uuid::new_v4().to_string();
        tracing::Span::current().record("import_id", import_id.as_str());
        info!(file_path = %file_path.display(), "开始导入心愿单 CSV");

        let summary = self.collect_variant_ids(file_path, context)?;
        info!(
            total_rows = summary.total_rows,
            accepted = summary.accepted,
            rejected = summary.rejected,
            "CSV 校验完成，转交心愿单写入动作"
        );

        self.add_variants_action
            .add_variants_to_wishlist(wishlist_id, context)
            .map_err(|e| {
                error!(error = %e, "心愿单写入动作失败");
                ImportError::DownstreamFailure(format!("{:#}", e))
            })
    }

    /// 读取并校验文件，把有效变体 ID 写入请求上下文
    ///
    /// 只要有任一行无效，就追加一条汇总提示（不逐行提示）。
    pub fn collect_variant_ids(
        &self,
        file_path: &Path,
        context: &mut ImportRequestContext,
    ) -> ImportResult<ImportSummary> {
        // === 步骤 1: 读取文件 + 类型校验 ===
        let content = read_file(file_path)?;
        self.ensure_allowed_mime_type(&content)?;

        // === 步骤 2: 解析 ===
        debug!("解析 CSV 内容");
        let records = self.file_parser.parse_records(&content).map_err(|e| {
            error!(error = %e, "CSV 解析失败");
            e
        })?;

        // === 步骤 3: 逐行校验 ===
        let mut summary = ImportSummary {
            total_rows: records.len(),
            ..ImportSummary::default()
        };
        let mut variant_ids = Vec::with_capacity(records.len());

        for (idx, record) in records.into_iter().enumerate() {
            let row = idx + 1;
            let found = self
                .variant_repo
                .find_variant(&record.variant_id, &record.product_id, &record.variant_code)
                .map_err(|source| ImportError::VariantLookupError { row, source })?;

            if found.is_some() {
                summary.accepted += 1;
                variant_ids.push(record.variant_id);
            } else {
                summary.rejected += 1;
                warn!(
                    row_number = row,
                    variant_id = %record.variant_id,
                    product_id = %record.product_id,
                    variant_code = %record.variant_code,
                    "CSV 行未匹配到商品变体，已忽略"
                );
            }
        }

        // === 步骤 4: 写入请求上下文 ===
        context.set_variant_ids(variant_ids);

        // === 步骤 5: 汇总提示 ===
        if summary.has_rejections() {
            self.flash_bag
                .add(FlashKind::Error, i18n::t(INCORRECT_PRODUCTS_MESSAGE_KEY));
        }

        Ok(summary)
    }

    fn ensure_allowed_mime_type(&self, content: &[u8]) -> ImportResult<()> {
        let detected = self.mime_detector.detect(content);
        if self.allowed_mime_types.allows(&detected) {
            debug!(mime_type = %detected, "文件类型校验通过");
            return Ok(());
        }

        warn!(mime_type = %detected, "文件类型不在白名单内");
        Err(ImportError::InvalidFileType {
            detected,
            allowed: self.allowed_mime_types.as_slice().join(", "),
        })
    }
}

impl<R, A> WishlistImporter for WishlistCsvImporter<R, A>
where
    R: ProductVariantRepository,
    A: AddVariantsToWishlistAction,
{
    type Response = A::Response;

    fn handle(
        &self,
        command: &ImportWishlistFromCsv,
        context: &mut ImportRequestContext,
    ) -> ImportResult<Self::Response> {
        self.import(&command.file_path, &command.wishlist_id, context)
    }
}

/// 整个文件读入内存
fn read_file(file_path: &Path) -> ImportResult<Vec<u8>> {
    if !file_path.exists() {
        return Err(ImportError::FileNotFound(file_path.display().to_string()));
    }
    Ok(std::fs::read(file_path)?)
}
