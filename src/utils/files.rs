//! 文件读取协作方
//!
//! 把本地文件读成 data URL 编码的附件实体。批量读取并发进行，
//! 任一文件失败则整批拒绝，不产生部分挂接；已读出的中间结果直接丢弃。

use std::path::{Path, PathBuf};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::errors::Result;
use crate::models::files::entities::SubmissionFile;
use crate::utils::file_magic::detect_mime;

/// 读取单个文件为附件实体
pub async fn read_submission_file(path: impl AsRef<Path>) -> Result<SubmissionFile> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path).await?;

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mime = detect_mime(&bytes, &name);
    let data = format!("data:{mime};base64,{}", STANDARD.encode(&bytes));

    Ok(SubmissionFile {
        name,
        mime_type: mime.to_string(),
        data,
    })
}

/// 并发读取一批文件；任一失败则整批返回错误
pub async fn read_submission_files(paths: &[PathBuf]) -> Result<Vec<SubmissionFile>> {
    let results = futures_util::future::join_all(paths.iter().map(read_submission_file)).await;
    results.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("stride-files-test-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[tokio::test]
    async fn test_read_single_file_as_data_url() {
        let dir = temp_dir();
        let path = dir.join("notes.txt");
        std::fs::write(&path, b"hello stride").unwrap();

        let file = read_submission_file(&path).await.unwrap();
        assert_eq!(file.name, "notes.txt");
        assert_eq!(file.mime_type, "text/plain");
        assert_eq!(file.data, "data:text/plain;base64,aGVsbG8gc3RyaWRl");

        let _ = std::fs::remove_dir_all(dir);
    }

    #[tokio::test]
    async fn test_batch_read_keeps_input_order() {
        let dir = temp_dir();
        let a = dir.join("a.txt");
        let b = dir.join("b.txt");
        std::fs::write(&a, b"first").unwrap();
        std::fs::write(&b, b"second").unwrap();

        let files = read_submission_files(&[a, b]).await.unwrap();
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].name, "a.txt");
        assert_eq!(files[1].name, "b.txt");

        let _ = std::fs::remove_dir_all(dir);
    }

    #[tokio::test]
    async fn test_one_failed_read_rejects_whole_batch() {
        let dir = temp_dir();
        let good = dir.join("good.txt");
        std::fs::write(&good, b"fine").unwrap();
        let missing = dir.join("missing.txt");

        let result = read_submission_files(&[good, missing]).await;
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().error_type(), "File Operation Error");

        let _ = std::fs::remove_dir_all(dir);
    }
}
