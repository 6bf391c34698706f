//! anubis-convert - ANUBIS TO ANUBISTEST1 CONVERTER
//!
//! anubis 스핀 로그(한 줄에 JSON 하나)를 Anubistest1 레코드 형식으로 변환하여
//! 원본 파일을 제자리에서 교체하는 CLI 도구입니다.
//!
//! # 주요 기능
//!
//! - 💰 **금액 필드 정규화**: 정수 금액을 float로 변환
//! - 🧮 **파생 필드**: `result`, `spinId`, `singleBet` 등 선언적 테이블 기반 계산
//! - 🔢 **숫자 순 처리**: `1.txt`, `2.txt`, `10.txt` 순서 보장
//! - 🛡️ **원자적 교체**: 임시 파일에 쓴 뒤 rename
//! - 🧪 **검사/드라이런 모드**: 파일을 건드리지 않고 미리 확인
//!
//! # 예제
//!
//! ```bash
//! # 실행 파일 옆 anubis/ 폴더 변환
//! anubis-convert
//!
//! # 다른 폴더, 검사만
//! anubis-convert --dir ./anubis --check
//! ```

pub mod cli;
pub mod discovery;
pub mod error;
pub mod logging;
pub mod pattern;
pub mod processor;
pub mod stats;
pub mod transform;

// Re-exports for convenient access
pub use cli::Args;
pub use discovery::{default_data_dir, discover_files, sort_files, FileOrder};
pub use error::{ConvertError, Result};
pub use pattern::PatternMatcher;
pub use processor::{convert_all, convert_file, FileReport, ProcessOptions};
pub use stats::{format_bytes, Statistics};
pub use transform::{convert_line, transform_spin_info, DERIVED_FIELDS, MONETARY_FIELDS};
