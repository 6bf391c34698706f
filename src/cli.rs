//! CLI 인자 파싱 모듈
//!
//! clap을 사용한 명령줄 인자 정의 및 파싱을 담당합니다.
//! 인자 없이 실행하면 실행 파일 옆의 `anubis/*.txt` 를 변환합니다.

use clap::Parser;
use std::path::PathBuf;

use crate::discovery::default_data_dir;
use crate::error::Result;
use crate::pattern::DEFAULT_PATTERN;

/// anubis-convert CLI 인자 구조체
#[derive(Parser, Debug)]
#[command(
    name = "anubis-convert",
    author = "YourName <your@email.com>",
    version,
    about = "ANUBIS TO ANUBISTEST1 CONVERTER - anubis 스핀 로그를 Anubistest1 형식으로 제자리 변환",
    long_about = r#"
ANUBIS TO ANUBISTEST1 CONVERTER
===============================

anubis 폴더의 각 txt 파일(한 줄에 JSON 하나)을 읽어
{"dt": {"si": {...}}, "err": ...} 의 si 객체를 Anubistest1 레코드로 변환하고
원본 파일을 덮어씁니다.

  • 금액 필드(ssaw, crtw, twbm, cs, ctw, aw, blb, blab, bl, tb, tbb, tw, np)는 float로 변환
  • result, spinId, singleBet, size, level, symbol, preBetMoney,
    postBetMoney, postWinMoney, allgetmoney, iswin 필드 추가
  • 파일은 숫자 이름 순(1, 2, 10 ...)으로 처리, 그 외 이름은 뒤에 사전순
  • 한 줄이라도 실패하면 즉시 중단 (이미 변환된 파일은 변환된 상태로 유지)

예제:
  anubis-convert
  anubis-convert --dir ./anubis
  anubis-convert --dry-run
  anubis-convert --check --verbose
"#
)]
pub struct Args {
    /// 변환할 파일들이 있는 폴더 (기본값: 실행 파일 옆의 anubis 폴더)
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// 파일 이름 패턴 (glob 형식)
    #[arg(short, long, default_value = DEFAULT_PATTERN)]
    pub pattern: String,

    /// 상세 로그 출력
    #[arg(short, long)]
    pub verbose: bool,

    /// 처리 순서대로 파일 목록만 표시
    #[arg(long)]
    pub dry_run: bool,

    /// 변환 결과를 쓰지 않고 모든 라인이 변환 가능한지만 검사
    #[arg(long)]
    pub check: bool,
}

impl Args {
    /// 대상 폴더 결정 (`--dir` 가 없으면 기본 폴더)
    pub fn data_dir(&self) -> Result<PathBuf> {
        match &self.dir {
            Some(dir) => Ok(dir.clone()),
            None => default_data_dir(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        let args = Args::parse_from(["anubis-convert"]);

        assert!(args.dir.is_none());
        assert_eq!(args.pattern, DEFAULT_PATTERN);
        assert!(!args.verbose);
        assert!(!args.dry_run);
        assert!(!args.check);
        assert!(args.data_dir().unwrap().ends_with("anubis"));
    }

    #[test]
    fn test_dir_override() {
        let args = Args::parse_from(["anubis-convert", "--dir", "/tmp/logs", "-p", "*.log"]);

        assert_eq!(args.data_dir().unwrap(), PathBuf::from("/tmp/logs"));
        assert_eq!(args.pattern, "*.log");
    }
}
