use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use url::Url;

use crate::error::{AppError, AppResult};

/// Characters left as-is by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_uri_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// 构建访问链接
///
/// # 示例
/// ```ignore
/// let link = build_visit_link("Dr. Smith", "Ab3dEf9hIjK1");
/// // 返回: "/visit/Dr.%20Smith?ref=Ab3dEf9hIjK1"
/// ```
pub fn build_visit_link(doctor_name: &str, referral_code: &str) -> String {
    format!(
        "/visit/{}?ref={}",
        encode_uri_component(doctor_name),
        referral_code
    )
}

/// Resolves a server-relative link against the server's base URL.
/// Absolute links are returned unchanged.
pub fn resolve_link(base_url: &str, link: &str) -> AppResult<String> {
    let base = Url::parse(base_url)
        .map_err(|e| AppError::validation(format!("Invalid base URL {}: {}", base_url, e)))?;
    let resolved = base
        .join(link)
        .map_err(|e| AppError::validation(format!("Invalid link {}: {}", link, e)))?;
    Ok(resolved.to_string())
}
