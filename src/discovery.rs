//! 입력 파일 탐색 모듈
//!
//! 데이터 폴더에서 변환 대상 파일을 찾고 처리 순서를 결정합니다.

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::{ConvertError, Result};
use crate::pattern::PatternMatcher;

/// 실행 파일 옆에 위치하는 기본 데이터 폴더 이름
pub const DATA_DIR_NAME: &str = "anubis";

/// 기본 데이터 폴더: `<실행 파일 폴더>/anubis`
pub fn default_data_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().map_err(|e| ConvertError::ExecutableLocation {
        reason: e.to_string(),
    })?;

    let dir = exe.parent().ok_or_else(|| ConvertError::ExecutableLocation {
        reason: format!("상위 폴더가 없습니다: {}", exe.display()),
    })?;

    Ok(dir.join(DATA_DIR_NAME))
}

/// 파일 처리 순서 키
///
/// 확장자를 뺀 이름이 ASCII 숫자로만 이루어진 파일이 먼저 오며 숫자 크기 순으로 정렬된다.
/// 나머지 파일은 그 뒤에 파일 이름 사전순으로 정렬된다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOrder {
    /// 앞자리 0을 제거한 숫자 문자열과 전체 파일 이름
    Numeric { digits: String, name: String },
    /// 숫자가 아닌 파일 이름
    Named(String),
}

impl FileOrder {
    pub fn for_path(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        if !stem.is_empty() && stem.bytes().all(|b| b.is_ascii_digit()) {
            let digits = stem.trim_start_matches('0').to_string();
            FileOrder::Numeric { digits, name }
        } else {
            FileOrder::Named(name)
        }
    }
}

impl Ord for FileOrder {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (
                FileOrder::Numeric { digits: a, name: an },
                FileOrder::Numeric { digits: b, name: bn },
            ) => a
                .len()
                .cmp(&b.len())
                .then_with(|| a.cmp(b))
                .then_with(|| an.cmp(bn)),
            (FileOrder::Numeric { .. }, FileOrder::Named(_)) => Ordering::Less,
            (FileOrder::Named(_), FileOrder::Numeric { .. }) => Ordering::Greater,
            (FileOrder::Named(a), FileOrder::Named(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for FileOrder {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// 처리 순서대로 파일 정렬
pub fn sort_files(files: &mut [PathBuf]) {
    files.sort_by_cached_key(|path| FileOrder::for_path(path));
}

/// 데이터 폴더 바로 아래에서 패턴과 일치하는 파일을 처리 순서대로 수집
///
/// 하위 폴더는 탐색하지 않습니다. 폴더가 없으면 빈 목록을 반환합니다.
pub fn discover_files(dir: &Path, pattern_matcher: &PatternMatcher) -> Vec<PathBuf> {
    if !dir.is_dir() {
        warn!("데이터 폴더가 없습니다: {}", dir.display());
        return Vec::new();
    }

    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .filter(|e| {
            e.file_name()
                .to_str()
                .map(|s| pattern_matcher.matches(s))
                .unwrap_or(false)
        })
        .map(|e| e.into_path())
        .collect();

    sort_files(&mut files);
    debug!("{} 개 파일 발견: {}", files.len(), dir.display());

    files
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(files: &[PathBuf]) -> Vec<String> {
        files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    fn sorted(input: &[&str]) -> Vec<String> {
        let mut files: Vec<PathBuf> = input.iter().map(PathBuf::from).collect();
        sort_files(&mut files);
        names(&files)
    }

    #[test]
    fn test_numeric_order() {
        assert_eq!(sorted(&["10.txt", "2.txt", "1.txt"]), ["1.txt", "2.txt", "10.txt"]);
    }

    #[test]
    fn test_numeric_before_named() {
        assert_eq!(
            sorted(&["b.txt", "3.txt", "a.txt", "12.txt"]),
            ["3.txt", "12.txt", "a.txt", "b.txt"]
        );
    }

    #[test]
    fn test_leading_zeros_and_large_numbers() {
        assert_eq!(
            sorted(&[
                "99999999999999999999999.txt",
                "007.txt",
                "7.txt",
                "100.txt"
            ]),
            ["007.txt", "7.txt", "100.txt", "99999999999999999999999.txt"]
        );
    }

    #[test]
    fn test_mixed_stems_are_named() {
        assert_eq!(
            FileOrder::for_path(Path::new("1a.txt")),
            FileOrder::Named("1a.txt".to_string())
        );
        assert_eq!(
            FileOrder::for_path(Path::new("-1.txt")),
            FileOrder::Named("-1.txt".to_string())
        );
        assert!(matches!(
            FileOrder::for_path(Path::new("/data/42.txt")),
            FileOrder::Numeric { .. }
        ));
    }

    #[test]
    fn test_default_data_dir_name() {
        let dir = default_data_dir().unwrap();
        assert!(dir.ends_with(DATA_DIR_NAME));
    }
}
