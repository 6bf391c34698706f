//! 파일 변환 모듈
//!
//! 개별 파일의 읽기, 라인별 변환, 원자적 덮어쓰기를 담당합니다.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ConvertError, Result};
use crate::stats::Statistics;
use crate::transform::convert_line;

/// 파일 처리 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    /// 처리된 파일 경로
    pub path: PathBuf,
    /// 변환된 레코드 수
    pub records: usize,
    /// 원본 파일 크기
    pub bytes_read: u64,
    /// 새로 쓴 크기 (검사 모드에서는 0)
    pub bytes_written: u64,
}

/// 변환 처리 옵션
#[derive(Debug, Clone, Default)]
pub struct ProcessOptions {
    /// 변환 결과를 쓰지 않고 검사만 수행
    pub check_only: bool,
}

impl ProcessOptions {
    /// 기본 옵션 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 검사 모드 설정
    pub fn with_check_only(mut self, check_only: bool) -> Self {
        self.check_only = check_only;
        self
    }
}

/// 파일 내용 전체를 라인 단위로 변환
///
/// 빈 라인은 건너뛰며, 첫 번째 실패에서 파일 경로와 라인 번호(1부터)를 붙여 중단합니다.
pub fn convert_contents(file: &Path, contents: &str) -> Result<Vec<String>> {
    split_lines(contents)
        .enumerate()
        .filter_map(|(index, line)| {
            convert_line(line)
                .map_err(|e| e.at_line(file.to_path_buf(), index + 1))
                .transpose()
        })
        .collect()
}

/// `\r\n`, `\n`, `\r` 을 모두 줄 끝으로 인식하여 분리
pub fn split_lines(contents: &str) -> impl Iterator<Item = &str> {
    let mut rest = contents;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }

        let line = match rest.find(|c: char| c == '\r' || c == '\n') {
            Some(end) => {
                let line = &rest[..end];
                let skip = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[end + skip..];
                line
            }
            None => std::mem::take(&mut rest),
        };
        Some(line)
    })
}

/// 변환된 레코드를 파일 내용으로 조합 (마지막 줄바꿈 포함)
///
/// 레코드가 하나도 없으면 빈 줄 하나(`"\n"`)가 된다.
pub fn render_output(records: &[String]) -> String {
    let mut output = records.join("\n");
    output.push('\n');
    output
}

/// 같은 폴더의 임시 파일에 쓴 뒤 rename 으로 원본을 교체
///
/// 심볼릭 링크는 실제 파일 위치에서 교체되므로 링크 자체는 유지됩니다.
/// 기존 파일의 권한도 유지됩니다.
pub fn write_atomically(path: &Path, contents: &str) -> Result<()> {
    let write_err = |e: std::io::Error| ConvertError::FileWriteError {
        file: path.to_path_buf(),
        reason: e.to_string(),
    };

    let target = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());

    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::Builder::new()
        .prefix(".anubis-convert-")
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(write_err)?;

    tmp.write_all(contents.as_bytes()).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;

    if let Ok(metadata) = fs::metadata(&target) {
        fs::set_permissions(tmp.path(), metadata.permissions()).map_err(write_err)?;
    }

    tmp.persist(&target).map_err(|e| write_err(e.error))?;

    Ok(())
}

/// 단일 파일 변환
///
/// # Arguments
/// * `path` - anubis 형식 파일 경로
/// * `options` - 처리 옵션
///
/// # Returns
/// 레코드 수와 입출력 크기를 담은 `FileReport`
pub fn convert_file(path: &Path, options: &ProcessOptions) -> Result<FileReport> {
    let contents = fs::read_to_string(path).map_err(|e| ConvertError::FileReadError {
        file: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let records = convert_contents(path, &contents)?;
    debug!("{}: {} 개 레코드 변환", path.display(), records.len());

    let bytes_written = if options.check_only {
        0
    } else {
        let output = render_output(&records);
        write_atomically(path, &output)?;
        debug!("{}: {} 바이트 기록", path.display(), output.len());
        output.len() as u64
    };

    Ok(FileReport {
        path: path.to_path_buf(),
        records: records.len(),
        bytes_read: contents.len() as u64,
        bytes_written,
    })
}

/// 파일 목록을 순서대로 하나씩 변환
///
/// 첫 번째 실패에서 즉시 중단합니다. 이미 변환된 파일은 변환된 상태로 남고,
/// 실패한 파일과 그 이후 파일은 손대지 않습니다.
pub fn convert_all<F>(
    files: &[PathBuf],
    options: &ProcessOptions,
    stats: &mut Statistics,
    mut on_file: F,
) -> Result<()>
where
    F: FnMut(&FileReport),
{
    for path in files {
        let report = convert_file(path, options)?;
        stats.record_file(&report);
        on_file(&report);
    }

    Ok(())
}
