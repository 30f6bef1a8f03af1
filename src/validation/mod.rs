//! Domain validation rules.
//!
//! Every rule returns a [`ValidationResult`]: `valid` plus, on failure, a
//! [`ValidationError`] whose `Display` is the message shown to the user.
//! Results serialize to the `{ "valid": bool, "error"?: string }` shape the
//! client renders:
//!
//! ```rust
//! use swimtime::validation::{validate_all, validate_distance, validate_swim_time};
//!
//! let result = validate_all([validate_swim_time(65.42), validate_distance(75)]);
//! assert!(!result.valid);
//! assert_eq!(
//!     serde_json::to_string(&result).unwrap(),
//!     r#"{"valid":false,"error":"距離は 25, 50, 100, 200, 400, 800, 1500 mのいずれかである必要があります"}"#
//! );
//! ```
//!
//! Limits that differ between deployments live in [`ValidationRules`]; the
//! free functions use [`ValidationRules::default`].

mod date;
mod field;
mod rules;
mod time;

pub use date::{
    parse_calendar_date, validate_date, validate_future_date, validate_future_date_on,
    validate_past_date, validate_past_date_on,
};
pub use field::{
    validate_circle, validate_distance, validate_max_length, validate_pool_type,
    validate_rep_count, validate_required, validate_set_count, validate_stroke,
};
pub use rules::ValidationRules;
pub use time::{validate_swim_time, validate_time, validate_time_string};

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Why a value failed validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationError {
    #[error("タイムが無効です")]
    TimeInvalid,

    #[error("タイムは0より大きい必要があります")]
    TimeNotPositive,

    #[error("タイムは24時間以内である必要があります")]
    TimeExceedsDay,

    #[error("タイムが大きすぎます")]
    SwimTimeTooLong,

    #[error("タイムを入力してください")]
    TimeStringEmpty,

    #[error("タイムの形式が正しくありません（例: 1:23.45 または 23.45）")]
    TimeStringMalformed,

    #[error("日付を入力してください")]
    DateEmpty,

    #[error("無効な日付です")]
    DateInvalid,

    #[error("未来の日付は指定できません")]
    DateInFuture,

    #[error("過去の日付は指定できません")]
    DateInPast,

    #[error("距離は {} mのいずれかである必要があります", join_distances(.allowed))]
    DistanceNotAllowed { allowed: Vec<u32> },

    #[error("本数は1以上の整数である必要があります")]
    RepCountNotPositiveInteger,

    #[error("本数は{max}以下である必要があります")]
    RepCountTooLarge { max: u32 },

    #[error("セット数は1以上の整数である必要があります")]
    SetCountNotPositiveInteger,

    #[error("セット数は{max}以下である必要があります")]
    SetCountTooLarge { max: u32 },

    #[error("サークルは0より大きい必要があります")]
    CircleNotPositive,

    #[error("サークルは{}以内である必要があります", circle_limit(.max_seconds))]
    CircleTooLong { max_seconds: u32 },

    #[error("{field}を入力してください")]
    Required { field: String },

    #[error("{field}は{max}文字以内で入力してください")]
    TooLong { field: String, max: usize },

    #[error("プール種別が無効です")]
    PoolTypeInvalid,

    #[error("無効な泳法です")]
    StrokeInvalid,
}

fn join_distances(allowed: &[u32]) -> String {
    allowed.iter().map(u32::to_string).collect::<Vec<_>>().join(", ")
}

fn circle_limit(max_seconds: &u32) -> String {
    if *max_seconds % 60 == 0 {
        format!("{}分", max_seconds / 60)
    } else {
        format!("{}秒", max_seconds)
    }
}

/// Outcome of a validation rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct ValidationResult {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "error_message")]
    #[cfg_attr(feature = "tauri", specta(type = Option<String>))]
    pub error: Option<ValidationError>,
}

fn error_message<S: Serializer>(error: &Option<ValidationError>, serializer: S) -> Result<S::Ok, S::Error> {
    match error {
        Some(error) => serializer.collect_str(error),
        None => serializer.serialize_none(),
    }
}

impl ValidationResult {
    pub fn success() -> Self {
        Self { valid: true, error: None }
    }

    pub fn failure(error: ValidationError) -> Self {
        Self { valid: false, error: Some(error) }
    }

    /// User-facing message of a failed result.
    pub fn message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }

    pub fn into_result(self) -> Result<(), ValidationError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

impl From<Result<(), ValidationError>> for ValidationResult {
    fn from(result: Result<(), ValidationError>) -> Self {
        match result {
            Ok(()) => Self::success(),
            Err(error) => Self::failure(error),
        }
    }
}

/// First failing result in input order, or success.
pub fn validate_all<I>(results: I) -> ValidationResult
where
    I: IntoIterator<Item = ValidationResult>,
{
    results.into_iter().find(|result| !result.valid).unwrap_or_else(ValidationResult::success)
}
