//! anubis-convert - ANUBIS TO ANUBISTEST1 CONVERTER
//!
//! 메인 엔트리포인트

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use tracing::info;

use anubis_convert::{
    cli::Args,
    discovery::discover_files,
    error::ConvertError,
    logging::init_logger,
    pattern::PatternMatcher,
    processor::{convert_all, ProcessOptions},
    stats::Statistics,
};

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.verbose);

    let data_dir = args.data_dir().context("데이터 폴더를 결정할 수 없습니다")?;
    let pattern_matcher = PatternMatcher::new(Some(args.pattern.clone()))?;

    print_header(&args, &data_dir);

    let files = discover_files(&data_dir, &pattern_matcher);

    if files.is_empty() {
        let message = ConvertError::NoFilesFound { dir: data_dir }.to_string();
        println!("{} {}", "⚠️".bright_yellow(), message.yellow());
        return Ok(());
    }

    println!(
        "  {} 발견된 파일 수: {}",
        "📋".bright_white(),
        files.len().to_string().bright_green()
    );

    if args.dry_run {
        print_dry_run(&files);
        return Ok(());
    }

    run_conversion(&args, &files)
}

/// 헤더 출력
fn print_header(args: &Args, data_dir: &Path) {
    println!("\n{}", "═".repeat(50).bright_blue());
    println!(
        "{}",
        " 🚀 ANUBIS TO ANUBISTEST1 CONVERTER".bright_white().bold()
    );
    println!("{}", "═".repeat(50).bright_blue());
    println!("  {} 데이터 폴더: {:?}", "📂".bright_cyan(), data_dir);
    println!("  {} 패턴: {}", "🔍".bright_magenta(), args.pattern);

    if args.dry_run {
        println!(
            "  {} {}",
            "⚠️".bright_yellow(),
            "드라이런 모드 (파일 변경 없음)".yellow()
        );
    }

    if args.check {
        println!(
            "  {} {}",
            "🔍".bright_cyan(),
            "검사 모드 (파일 변경 없음)".cyan()
        );
    }

    println!("{}", "═".repeat(50).bright_blue());
}

/// 드라이런 출력
fn print_dry_run(files: &[PathBuf]) {
    println!("\n{}", "📋 처리 예정 파일 목록 (처리 순서):".bright_cyan());
    for (i, path) in files.iter().enumerate() {
        println!("  {}. {}", i + 1, display_name(path));
    }
}

/// 변환 실행
fn run_conversion(args: &Args, files: &[PathBuf]) -> Result<()> {
    let options = ProcessOptions::new().with_check_only(args.check);
    let mut stats = Statistics::new(files.len());
    let pb = create_progress_bar(files.len())?;

    info!("{} 개 파일 변환 시작", files.len());
    println!();

    let result = convert_all(files, &options, &mut stats, |report| {
        pb.suspend(|| {
            println!(
                "  {}: {} 개 레코드",
                display_name(&report.path),
                report.records
            )
        });
        pb.inc(1);
    });

    if let Err(e) = result {
        pb.abandon_with_message("중단");
        return Err(e).with_context(|| {
            format!(
                "변환 중단: {}/{} 개 파일이 변환된 상태로 남았습니다",
                stats.files_done, stats.total_files
            )
        });
    }

    pb.finish_and_clear();
    info!("{} 개 레코드 변환 완료", stats.total_records);

    if options.check_only {
        println!(
            "\n{} 검사 완료! 총 {} 개 레코드가 변환 가능합니다 (파일 변경 없음)",
            "✅".bright_green(),
            stats.total_records.to_string().bright_green()
        );
    } else {
        println!(
            "\n{} 변환 완료! 총 {} 개 레코드로 원본 파일을 덮어썼습니다",
            "✅".bright_green(),
            stats.total_records.to_string().bright_green()
        );
    }

    stats.print_summary();

    Ok(())
}

/// 진행률 바 생성
fn create_progress_bar(total: usize) -> Result<ProgressBar> {
    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
            .context("진행률 바 템플릿 오류")?
            .progress_chars("█▓▒░"),
    );
    Ok(pb)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .into_owned()
}
