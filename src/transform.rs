//! 레코드 변환 모듈
//!
//! anubis 한 줄(`{"dt": {"si": {...}}, "err": ...}`)을 Anubistest1 레코드로 변환합니다.
//! 금액 필드 목록과 파생 필드 규칙은 선언적 테이블로 정의되어 있어
//! 제어 흐름을 건드리지 않고 매핑만 확장할 수 있습니다.

use serde::{Deserialize, Serialize};
use serde_json::ser::{Formatter, Serializer};
use serde_json::{Map, Number, Value};
use std::io;

use crate::error::{ConvertError, Result};

/// float 표현이 보장되어야 하는 금액 필드
pub const MONETARY_FIELDS: [&str; 13] = [
    "ssaw", "crtw", "twbm", "cs", "ctw", "aw", "blb", "blab", "bl", "tb", "tbb", "tw", "np",
];

/// 파생 필드 계산 규칙
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// 원본 값을 그대로 복사 (원본 키 필수)
    Copy,
    /// 원본 값을 그대로 복사, 키가 없으면 null
    Optional,
    /// float로 강제 변환 (원본 키 필수)
    Float,
    /// 원소 개수 (원본 키 필수)
    Length,
    /// 값이 존재하고 null이 아니면 1, 아니면 0
    IsPresent,
}

/// 파생 필드 정의: `target` 키를 `source` 키에서 `rule`로 계산
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedField {
    pub target: &'static str,
    pub source: &'static str,
    pub rule: Rule,
}

impl DerivedField {
    pub const fn new(target: &'static str, source: &'static str, rule: Rule) -> Self {
        Self {
            target,
            source,
            rule,
        }
    }

    /// 변환 중인 si 맵에서 파생 값을 계산
    pub fn derive(&self, si: &Map<String, Value>) -> Result<Value> {
        let source = si.get(self.source);

        match self.rule {
            Rule::Copy => Ok(require(self.source, source)?.clone()),
            Rule::Optional => Ok(source.cloned().unwrap_or(Value::Null)),
            Rule::Float => float_value(self.source, require(self.source, source)?),
            Rule::Length => {
                element_count(self.source, require(self.source, source)?).map(Value::from)
            }
            Rule::IsPresent => {
                let present = source.is_some_and(|v| !v.is_null());
                Ok(Value::from(u8::from(present)))
            }
        }
    }
}

/// Anubistest1 파생 필드 테이블 (적용 순서대로)
pub const DERIVED_FIELDS: [DerivedField; 11] = [
    DerivedField::new("result", "rl", Rule::Copy),
    DerivedField::new("spinId", "sid", Rule::Copy),
    // respin 에서는 tb가 0이 되므로 단일 베팅액은 tbb 기준
    DerivedField::new("singleBet", "tbb", Rule::Float),
    DerivedField::new("size", "cs", Rule::Float),
    DerivedField::new("level", "ml", Rule::Optional),
    DerivedField::new("symbol", "rl", Rule::Length),
    DerivedField::new("preBetMoney", "blb", Rule::Float),
    DerivedField::new("postBetMoney", "blab", Rule::Float),
    DerivedField::new("postWinMoney", "bl", Rule::Float),
    DerivedField::new("allgetmoney", "aw", Rule::Float),
    DerivedField::new("iswin", "wp", Rule::IsPresent),
];

/// anubis 원본 라인 구조
#[derive(Debug, Deserialize)]
pub struct Envelope {
    pub dt: SpinData,
}

/// `dt` 객체. `si` 이외의 키는 버려진다.
#[derive(Debug, Deserialize)]
pub struct SpinData {
    pub si: Map<String, Value>,
}

/// 한 줄을 Anubistest1 JSON 라인으로 변환
///
/// # Arguments
/// * `line` - anubis 형식의 JSON 한 줄
///
/// # Returns
/// 공백뿐인 라인이면 `None`, 아니면 한 줄짜리 JSON 문자열.
/// 비 ASCII 문자는 이스케이프하지 않고 그대로 출력합니다.
///
/// # Examples
/// ```
/// use anubis_convert::transform::convert_line;
///
/// assert_eq!(convert_line("   ").unwrap(), None);
/// ```
pub fn convert_line(line: &str) -> Result<Option<String>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let envelope: Envelope = serde_json::from_str(line).map_err(|e| ConvertError::ParseError {
        reason: e.to_string(),
    })?;

    let converted = transform_spin_info(&envelope.dt.si)?;

    to_json_line(&converted).map(Some)
}

/// 한 줄 JSON 포매터: 항목 사이 `, `, 키와 값 사이 `: `
///
/// 기존 변환 스크립트가 만든 파일과 바이트 단위로 같은 출력을 낸다.
#[derive(Debug, Default, Clone, Copy)]
pub struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

/// 레코드를 `SpacedFormatter` 로 직렬화 (비 ASCII 문자는 그대로)
pub fn to_json_line(record: &Map<String, Value>) -> Result<String> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, SpacedFormatter);
    record
        .serialize(&mut serializer)
        .map_err(|e| ConvertError::SerializeError {
            reason: e.to_string(),
        })?;

    String::from_utf8(buf).map_err(|e| ConvertError::SerializeError {
        reason: e.to_string(),
    })
}

/// si 객체로부터 새로운 Anubistest1 레코드를 생성
///
/// 입력은 빌려오기만 하며 결과는 독립된 복사본입니다 (`result`가 `rl`과 값을 공유하지 않음).
pub fn transform_spin_info(si: &Map<String, Value>) -> Result<Map<String, Value>> {
    let mut record = si.clone();
    coerce_monetary(&mut record);

    for field in &DERIVED_FIELDS {
        let value = field.derive(&record)?;
        record.insert(field.target.to_string(), value);
    }

    Ok(record)
}

/// 금액 필드 중 정수 값을 float로 변환
///
/// float, null, 문자열, 없는 키는 건드리지 않으므로 여러 번 적용해도 결과가 같다.
/// 불리언은 정수로 취급된다.
pub fn coerce_monetary(si: &mut Map<String, Value>) {
    for key in MONETARY_FIELDS {
        if let Some(value) = si.get_mut(key) {
            if let Some(coerced) = integer_as_float(value) {
                *value = coerced;
            }
        }
    }
}

fn integer_as_float(value: &Value) -> Option<Value> {
    let float = match value {
        Value::Number(n) if !n.is_f64() => n.as_f64()?,
        Value::Bool(b) => f64::from(u8::from(*b)),
        _ => return None,
    };
    Number::from_f64(float).map(Value::Number)
}

/// 값을 f64로 변환
///
/// 숫자, 불리언(1.0/0.0), 숫자 문자열을 허용합니다. 유한하지 않은 값은 거부합니다.
pub fn to_float(field: &str, value: &Value) -> Result<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::Bool(b) => Some(f64::from(u8::from(*b))),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    parsed
        .filter(|f| f.is_finite())
        .ok_or_else(|| invalid_field(field, "float", value))
}

fn float_value(field: &str, value: &Value) -> Result<Value> {
    let float = to_float(field, value)?;
    Number::from_f64(float)
        .map(Value::Number)
        .ok_or_else(|| invalid_field(field, "float", value))
}

/// 배열/객체는 원소 수, 문자열은 문자 수
pub fn element_count(field: &str, value: &Value) -> Result<usize> {
    match value {
        Value::Array(items) => Ok(items.len()),
        Value::Object(map) => Ok(map.len()),
        Value::String(s) => Ok(s.chars().count()),
        _ => Err(invalid_field(field, "sequence", value)),
    }
}

fn require<'a>(field: &str, value: Option<&'a Value>) -> Result<&'a Value> {
    value.ok_or_else(|| ConvertError::MissingField {
        field: field.to_string(),
    })
}

fn invalid_field(field: &str, expected: &'static str, value: &Value) -> ConvertError {
    ConvertError::InvalidField {
        field: field.to_string(),
        expected,
        value: value.to_string(),
    }
}
