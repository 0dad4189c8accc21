//! 부분 수정 요청을 위한 3상태(tri-state) 필드
//!
//! JSON 패치에서 "필드 없음", "명시적 null", "값 있음"은 서로 다른 지시입니다.
//!
//! | JSON | `Patch<T>` | 의미 |
//! |------|------------|------|
//! | 필드 생략 | `Absent` | 변경하지 않음 |
//! | `"email": null` | `Null` | 값을 지움 |
//! | `"email": "a@b.com"` | `Value(..)` | 값을 설정 |
//!
//! `Option<Option<T>>`로도 표현할 수 있지만 의도가 드러나지 않으므로
//! 태그가 붙은 열거형을 사용합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! #[derive(Deserialize)]
//! struct UpdateUserRequest {
//!     #[serde(default)]
//!     email: Patch<String>,
//! }
//! ```
//!
//! 필드가 없을 때 `Absent`가 되려면 반드시 `#[serde(default)]`를 함께 지정해야 합니다.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
    /// 요청에 필드가 없음 - 변경하지 않음
    Absent,
    /// 명시적 null - 값을 지움
    Null,
    /// 새 값으로 설정
    Value(T),
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Absent
    }
}

impl<T> Patch<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Patch::Absent)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Patch::Null)
    }

    /// 현재 값에 패치를 적용한 결과를 반환합니다.
    ///
    /// `Absent`는 기존 값을 유지하고, `Null`은 `None`, `Value`는 새 값이 됩니다.
    pub fn apply(self, current: Option<T>) -> Option<T> {
        match self {
            Patch::Absent => current,
            Patch::Null => None,
            Patch::Value(value) => Some(value),
        }
    }
}

impl<T> From<Option<T>> for Patch<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Patch::Value(value),
            None => Patch::Null,
        }
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // 필드가 존재할 때만 호출되므로 여기서는 Null/Value만 구분
        Option::<T>::deserialize(deserializer).map(Patch::from)
    }
}

impl<T> Serialize for Patch<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Patch::Value(value) => serializer.serialize_some(value),
            Patch::Absent | Patch::Null => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    struct EmailPatch {
        #[serde(default, skip_serializing_if = "Patch::is_absent")]
        email: Patch<String>,
    }

    #[test]
    fn test_missing_field_is_absent() {
        let patch: EmailPatch = serde_json::from_str("{}").unwrap();
        assert_eq!(patch.email, Patch::Absent);
    }

    #[test]
    fn test_explicit_null_is_null() {
        let patch: EmailPatch = serde_json::from_str(r#"{"email": null}"#).unwrap();
        assert_eq!(patch.email, Patch::Null);
    }

    #[test]
    fn test_value_is_value() {
        let patch: EmailPatch = serde_json::from_str(r#"{"email": "email@fake.com"}"#).unwrap();
        assert_eq!(patch.email, Patch::Value("email@fake.com".to_string()));
    }

    #[test]
    fn test_serialization_keeps_the_distinction() {
        let absent = EmailPatch { email: Patch::Absent };
        let null = EmailPatch { email: Patch::Null };

        assert_eq!(serde_json::to_string(&absent).unwrap(), "{}");
        assert_eq!(serde_json::to_string(&null).unwrap(), r#"{"email":null}"#);
    }

    #[test]
    fn test_apply() {
        let current = Some("old@fake.com".to_string());

        assert_eq!(Patch::Absent.apply(current.clone()), current);
        assert_eq!(Patch::<String>::Null.apply(current.clone()), None);
        assert_eq!(
            Patch::Value("new@fake.com".to_string()).apply(current),
            Some("new@fake.com".to_string())
        );
    }
}
