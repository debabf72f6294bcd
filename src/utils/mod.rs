pub mod url_validator;

/// 随机短码字符集（小写 base-36）
const CODE_CHARSET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// 默认随机短码长度
pub const DEFAULT_CODE_LENGTH: usize = 6;

pub fn generate_random_code(length: usize) -> String {
    use std::iter;

    iter::repeat_with(|| CODE_CHARSET[rand::random_range(0..CODE_CHARSET.len())] as char)
        .take(length)
        .collect()
}

/// Mints the code portion of a short URL.
#[derive(Debug, Clone)]
pub struct ShortCodeGenerator {
    length: usize,
}

impl Default for ShortCodeGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_CODE_LENGTH)
    }
}

impl ShortCodeGenerator {
    pub fn new(length: usize) -> Self {
        Self { length }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// A non-empty alias is taken verbatim: no format validation and no
    /// collision check against existing history.
    pub fn generate(&self, alias: Option<&str>) -> String {
        match alias {
            Some(alias) if !alias.is_empty() => alias.to_string(),
            _ => generate_random_code(self.length),
        }
    }
}

/// `origin + "/" + code`
pub fn build_short_url(origin: &str, code: &str) -> String {
    format!("{}/{}", origin.trim_end_matches('/'), code)
}
