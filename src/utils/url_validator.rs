//! URL 验证模块
//!
//! 在生成短链接之前确认输入是一个合法的绝对 URL

use url::Url;

/// URL 验证错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlValidationError {
    EmptyUrl,
    DangerousProtocol(String),
    InvalidFormat(String),
}

impl std::fmt::Display for UrlValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyUrl => write!(f, "URL cannot be empty"),
            Self::DangerousProtocol(proto) => {
                write!(f, "Dangerous protocol blocked: {}", proto)
            }
            Self::InvalidFormat(msg) => write!(f, "Invalid URL format: {}", msg),
        }
    }
}

impl std::error::Error for UrlValidationError {}

/// 危险协议列表
const DANGEROUS_PROTOCOLS: &[&str] = &["javascript:", "data:", "vbscript:"];

/// 验证 URL
///
/// 检查项目：
/// 1. URL 不为空
/// 2. 不是脚本类伪协议（javascript:, data:, vbscript:）
/// 3. 能被解析为绝对 URL
pub fn validate_url(url: &str) -> Result<(), UrlValidationError> {
    let url = url.trim();

    if url.is_empty() {
        return Err(UrlValidationError::EmptyUrl);
    }

    let url_lower = url.to_lowercase();
    for proto in DANGEROUS_PROTOCOLS {
        if url_lower.starts_with(proto) {
            return Err(UrlValidationError::DangerousProtocol(proto.to_string()));
        }
    }

    Url::parse(url).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    Ok(())
}

/// 获取 URL 验证错误的用户友好消息
pub fn validation_error_message(error: &UrlValidationError) -> &'static str {
    match error {
        UrlValidationError::EmptyUrl => "Please enter a URL",
        UrlValidationError::DangerousProtocol(_) => "This URL protocol is not allowed",
        UrlValidationError::InvalidFormat(_) => {
            "Please enter a valid URL (e.g., https://example.com)"
        }
    }
}

/// Capability the link service needs before minting an entry.
pub trait UrlValidator: Send + Sync {
    fn validate(&self, url: &str) -> Result<(), UrlValidationError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultUrlValidator;

impl UrlValidator for DefaultUrlValidator {
    fn validate(&self, url: &str) -> Result<(), UrlValidationError> {
        validate_url(url)
    }
}
