//! 패턴 매칭 모듈
//!
//! glob 패턴을 사용한 입력 파일 이름 필터링을 담당합니다.

use glob::{MatchOptions, Pattern};

use crate::error::{ConvertError, Result};

/// 기본 입력 파일 패턴
pub const DEFAULT_PATTERN: &str = "*.txt";

/// 셸 glob 과 같이 와일드카드가 숨김 파일(`.`으로 시작)을 매칭하지 않는다
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// 컴파일된 패턴 매처
#[derive(Default)]
pub struct PatternMatcher {
    pattern: Option<Pattern>,
}

impl PatternMatcher {
    /// 새 패턴 매처 생성
    ///
    /// # Arguments
    /// * `pattern` - 글로브 패턴 문자열 (None이면 모든 파일 매칭)
    ///
    /// # Examples
    /// ```
    /// use anubis_convert::pattern::PatternMatcher;
    ///
    /// let matcher = PatternMatcher::new(Some("*.txt".to_string())).unwrap();
    /// assert!(matcher.matches("10.txt"));
    /// assert!(!matcher.matches("10.json"));
    /// ```
    pub fn new(pattern: Option<String>) -> Result<Self> {
        let compiled = match pattern {
            Some(ref p) => Some(
                Pattern::new(p)
                    .map_err(|_| ConvertError::InvalidPattern { pattern: p.clone() })?,
            ),
            None => None,
        };

        Ok(Self { pattern: compiled })
    }

    /// 파일 이름이 패턴과 일치하는지 확인 (패턴이 없으면 항상 true)
    pub fn matches(&self, file_name: &str) -> bool {
        match &self.pattern {
            Some(p) => p.matches_with(file_name, MATCH_OPTIONS),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pattern() {
        let matcher = PatternMatcher::new(Some(DEFAULT_PATTERN.to_string())).unwrap();
        assert!(matcher.matches("1.txt"));
        assert!(matcher.matches("spin_log.txt"));
        assert!(!matcher.matches("1.txt.bak"));
        assert!(!matcher.matches("1.TXT"));
        assert!(!matcher.matches("notes.md"));
    }

    #[test]
    fn test_hidden_files_not_matched() {
        let matcher = PatternMatcher::new(Some(DEFAULT_PATTERN.to_string())).unwrap();
        assert!(!matcher.matches(".1.txt"));

        let explicit = PatternMatcher::new(Some(".*.txt".to_string())).unwrap();
        assert!(explicit.matches(".1.txt"));
    }

    #[test]
    fn test_pattern_matcher_with_brackets() {
        let matcher = PatternMatcher::new(Some("[0-9].txt".to_string())).unwrap();
        assert!(matcher.matches("1.txt"));
        assert!(!matcher.matches("10.txt"));
    }

    #[test]
    fn test_pattern_matcher_none() {
        let matcher = PatternMatcher::new(None).unwrap();
        assert!(matcher.matches("anything.json"));
    }

    #[test]
    fn test_pattern_matcher_invalid() {
        let result = PatternMatcher::new(Some("[invalid".to_string()));
        assert!(matches!(result, Err(ConvertError::InvalidPattern { .. })));
    }
}
