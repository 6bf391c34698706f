//! 에러 타입 정의 모듈
//!
//! anubis-convert에서 발생할 수 있는 모든 에러 타입을 정의합니다.

use std::path::PathBuf;
use thiserror::Error;

/// anubis-convert에서 발생할 수 있는 에러 타입
#[derive(Error, Debug)]
pub enum ConvertError {
    /// JSON 파싱 실패 또는 `dt.si` 구조 누락
    #[error("JSON 파싱 실패: {reason}")]
    ParseError { reason: String },

    /// 파생 필드 계산에 필요한 원본 키가 없음
    #[error("필수 필드가 없습니다: {field}")]
    MissingField { field: String },

    /// JSON 직렬화 실패
    #[error("JSON 직렬화 실패: {reason}")]
    SerializeError { reason: String },

    /// 필드 값의 타입을 변환할 수 없음
    #[error("필드 `{field}` 값을 {expected}(으)로 변환할 수 없습니다: {value}")]
    InvalidField {
        field: String,
        expected: &'static str,
        value: String,
    },

    /// 특정 파일의 특정 라인에서 발생한 레코드 에러
    #[error("{file}:{line}: {source}")]
    LineError {
        file: PathBuf,
        line: usize,
        #[source]
        source: Box<ConvertError>,
    },

    /// 파일 읽기 실패
    #[error("파일을 읽을 수 없습니다 ({file}): {reason}")]
    FileReadError { file: PathBuf, reason: String },

    /// 파일 쓰기 실패
    #[error("파일 쓰기 실패 ({file}): {reason}")]
    FileWriteError { file: PathBuf, reason: String },

    /// 유효하지 않은 패턴
    #[error("유효하지 않은 패턴: {pattern}")]
    InvalidPattern { pattern: String },

    /// 실행 파일 위치를 알 수 없음
    #[error("실행 파일 위치를 확인할 수 없습니다: {reason}")]
    ExecutableLocation { reason: String },

    /// 처리할 파일 없음
    #[error("{dir} 에서 변환할 파일을 찾지 못했습니다")]
    NoFilesFound { dir: PathBuf },
}

impl ConvertError {
    /// 라인 위치 정보를 붙여 감싼다
    pub fn at_line(self, file: PathBuf, line: usize) -> Self {
        ConvertError::LineError {
            file,
            line,
            source: Box::new(self),
        }
    }
}

/// anubis-convert 결과 타입 별칭
pub type Result<T> = std::result::Result<T, ConvertError>;
