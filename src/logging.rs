//! 로깅 초기화 모듈
//!
//! tracing 진단 로그는 stderr 로 보내고, stdout 은 변환 결과 보고에만 사용합니다.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// CLI 로거 초기화 (`RUST_LOG` 가 설정되어 있으면 우선 적용)
pub fn init_logger(verbose: bool) {
    let default_filter = if verbose {
        "anubis_convert=debug,info"
    } else {
        "anubis_convert=warn"
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}
