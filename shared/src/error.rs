//! 统一响应信封
//!
//! 所有失败响应使用同一结构：`{ "code": "Exxxx", "message": "..." }`。
//! 成功响应直接返回载荷 JSON，不包一层信封。
//!
//! # 错误码规范
//!
//! | 码 | 分类 | HTTP |
//! |------|------|------|
//! | E0002 | 输入验证失败 | 400 |
//! | E0003 | 资源不存在 | 404 |
//! | E0004 | 资源冲突 | 409 |
//! | E0005 | 业务规则违反 | 422 |
//! | E9001 | 内部错误 | 500 |
//! | E9002 | 数据库错误 | 500 |
//! | E9003 | 上游服务错误 | 502 |

use serde::{Deserialize, Serialize};

/// Failure envelope body as it appears on the wire.
///
/// The client deserializes error responses into this before mapping them to
/// `ClientError` variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// 机器可读错误码 (Exxxx)
    pub code: String,
    /// 人类可读消息
    pub message: String,
}

