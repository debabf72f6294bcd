use std::fmt;

use crate::utils::url_validator::{UrlValidationError, validation_error_message};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkshelfError {
    EmptyInput(String),
    InvalidUrl(String),
    NotFound(String),
    PersistenceUnavailable(String),
    Serialization(String),
    Config(String),
}

impl LinkshelfError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            LinkshelfError::EmptyInput(_) => "E001",
            LinkshelfError::InvalidUrl(_) => "E002",
            LinkshelfError::NotFound(_) => "E003",
            LinkshelfError::PersistenceUnavailable(_) => "E004",
            LinkshelfError::Serialization(_) => "E005",
            LinkshelfError::Config(_) => "E006",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            LinkshelfError::EmptyInput(_) => "Empty Input",
            LinkshelfError::InvalidUrl(_) => "Invalid URL",
            LinkshelfError::NotFound(_) => "Link Not Found",
            LinkshelfError::PersistenceUnavailable(_) => "Persistence Unavailable",
            LinkshelfError::Serialization(_) => "Serialization Error",
            LinkshelfError::Config(_) => "Configuration Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            LinkshelfError::EmptyInput(msg) => msg,
            LinkshelfError::InvalidUrl(msg) => msg,
            LinkshelfError::NotFound(msg) => msg,
            LinkshelfError::PersistenceUnavailable(msg) => msg,
            LinkshelfError::Serialization(msg) => msg,
            LinkshelfError::Config(msg) => msg,
        }
    }

    /// Validation failures are resolved at the presentation boundary and
    /// never reach the store or the resolver.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            LinkshelfError::EmptyInput(_) | LinkshelfError::InvalidUrl(_)
        )
    }

    /// 格式化为彩色输出
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for LinkshelfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for LinkshelfError {}

// 便捷的构造函数
impl LinkshelfError {
    pub fn empty_input<T: Into<String>>(msg: T) -> Self {
        LinkshelfError::EmptyInput(msg.into())
    }

    pub fn invalid_url<T: Into<String>>(msg: T) -> Self {
        LinkshelfError::InvalidUrl(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        LinkshelfError::NotFound(msg.into())
    }

    pub fn persistence_unavailable<T: Into<String>>(msg: T) -> Self {
        LinkshelfError::PersistenceUnavailable(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        LinkshelfError::Serialization(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        LinkshelfError::Config(msg.into())
    }
}

impl From<std::io::Error> for LinkshelfError {
    fn from(err: std::io::Error) -> Self {
        LinkshelfError::PersistenceUnavailable(err.to_string())
    }
}

impl From<serde_json::Error> for LinkshelfError {
    fn from(err: serde_json::Error) -> Self {
        LinkshelfError::Serialization(err.to_string())
    }
}

impl From<UrlValidationError> for LinkshelfError {
    fn from(err: UrlValidationError) -> Self {
        let hint = validation_error_message(&err);
        match err {
            UrlValidationError::EmptyUrl => LinkshelfError::EmptyInput(hint.into()),
            other => LinkshelfError::InvalidUrl(format!("{}: {}", hint, other)),
        }
    }
}

impl From<config::ConfigError> for LinkshelfError {
    fn from(err: config::ConfigError) -> Self {
        LinkshelfError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LinkshelfError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_distinct() {
        let errors = [
            LinkshelfError::empty_input("a"),
            LinkshelfError::invalid_url("a"),
            LinkshelfError::not_found("a"),
            LinkshelfError::persistence_unavailable("a"),
            LinkshelfError::serialization("a"),
            LinkshelfError::config("a"),
        ];
        let codes: std::collections::HashSet<_> = errors.iter().map(|e| e.code()).collect();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_from_url_validation_error() {
        let err: LinkshelfError = UrlValidationError::EmptyUrl.into();
        assert_eq!(err, LinkshelfError::EmptyInput("Please enter a URL".into()));

        let err: LinkshelfError = UrlValidationError::InvalidFormat("bad".into()).into();
        assert!(matches!(err, LinkshelfError::InvalidUrl(_)));
        assert!(err.is_validation());

        let err: LinkshelfError =
            UrlValidationError::DangerousProtocol("javascript:".into()).into();
        assert!(err.message().starts_with("This URL protocol is not allowed"));
    }

    #[test]
    fn test_from_serde_json_error() {
        let err: LinkshelfError = serde_json::from_str::<Vec<u8>>("nope").unwrap_err().into();
        assert_eq!(err.code(), "E005");
    }

    #[test]
    fn test_format_simple() {
        let err = LinkshelfError::not_found("my-link");
        assert_eq!(err.to_string(), "Link Not Found: my-link");
    }
}
