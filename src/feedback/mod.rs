// ==========================================
// 心愿单 CSV 导入 - 用户反馈层
// ==========================================
// 职责: 请求级别的一次性提示消息（flash）
// ==========================================

pub mod flash_bag;

pub use flash_bag::{FlashBag, FlashKind, FlashMessage, RequestFlashBag};
