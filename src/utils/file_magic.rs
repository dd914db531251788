/// 根据文件内容的魔术字节推断 MIME 类型
///
/// # Arguments
/// * `data` - 文件内容的前几个字节
/// * `file_name` - 文件名（用于无魔术字节格式的扩展名回退）
///
/// # Returns
/// 推断出的 MIME 类型，无法识别时为 `application/octet-stream`
pub fn detect_mime(data: &[u8], file_name: &str) -> &'static str {
    // 图片格式
    if data.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]) {
        return "image/png";
    }
    if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
        return "image/jpeg";
    }
    if data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a") {
        return "image/gif";
    }
    if data.len() >= 12 && &data[0..4] == b"RIFF" && &data[8..12] == b"WEBP" {
        return "image/webp";
    }

    // 文档格式
    if data.starts_with(b"%PDF") {
        return "application/pdf";
    }
    // MS Office 新格式与 zip 同魔术字节，按扩展名细分
    if data.starts_with(&[0x50, 0x4B, 0x03, 0x04]) {
        return match extension(file_name) {
            "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            "xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            "pptx" => "application/vnd.openxmlformats-officedocument.presentationml.presentation",
            _ => "application/zip",
        };
    }
    if data.starts_with(&[0x1F, 0x8B]) {
        return "application/gzip";
    }

    // 文本格式没有魔术字节，按扩展名回退
    match extension(file_name) {
        "txt" => "text/plain",
        "md" => "text/markdown",
        "csv" => "text/csv",
        "html" => "text/html",
        "css" => "text/css",
        "json" => "application/json",
        "xml" => "application/xml",
        "js" | "ts" => "text/javascript",
        _ => "application/octet-stream",
    }
}

fn extension(file_name: &str) -> &str {
    file_name.rsplit_once('.').map(|(_, ext)| ext).unwrap_or("")
}
