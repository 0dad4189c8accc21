//! # 사용자 엔티티
//!
//! `tb_user` 테이블의 한 행에 대응하는 영속성 엔티티입니다.
//!
//! ## 테이블 구조
//!
//! | 필드 | JSON | 컬럼 | 제약 |
//! |------|------|------|------|
//! | `cpf` | `cpf` | `VARCHAR(11)` | PK, 생성 후 변경 불가 |
//! | `first_name` | `firstName` | `VARCHAR(100)` | NOT NULL |
//! | `last_name` | `lastName` | `VARCHAR(100)` | NOT NULL |
//! | `date_of_birth` | `dateOfBirth` | `DATE` | NOT NULL, `yyyy-MM-dd` |
//! | `email` | `email` | `VARCHAR(50)` | NULL 허용, NULL이 아니면 유일 |
//! | `registration_date` | `registrationDate` | `TIMESTAMPTZ` | NOT NULL, 생성 시 1회 기록 |
//!
//! `registration_date`는 아직 저장되지 않은 생성 후보에서만 `None`입니다.

use std::fmt;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[schema(example = "12345678901")]
    pub cpf: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub email: Option<String>,
    #[serde(default, with = "registration_timestamp")]
    #[schema(value_type = Option<String>, example = "2024-06-15T12:30:00Z")]
    pub registration_date: Option<DateTime<Utc>>,
}

impl User {
    /// 등록 시각이 없는 생성 후보를 만듭니다.
    pub fn new(
        cpf: String,
        first_name: String,
        last_name: String,
        date_of_birth: NaiveDate,
        email: Option<String>,
    ) -> Self {
        Self {
            cpf,
            first_name,
            last_name,
            date_of_birth,
            email,
            registration_date: None,
        }
    }

    /// 등록 시각을 기록합니다. 이미 기록된 경우 덮어쓰지 않습니다.
    pub fn register(&mut self, now: DateTime<Utc>) {
        if self.registration_date.is_none() {
            self.registration_date = Some(now);
        }
    }

    /// `today` 기준 만 나이
    ///
    /// 생일이 지나지 않았으면 한 살을 빼며, 미래 생년월일은 0으로 취급합니다.
    pub fn age_on(&self, today: NaiveDate) -> u32 {
        let dob = self.date_of_birth;
        let mut years = today.year() - dob.year();
        if (today.month(), today.day()) < (dob.month(), dob.day()) {
            years -= 1;
        }
        years.max(0) as u32
    }

    /// 비어 있지 않은 이메일
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref().filter(|email| !email.is_empty())
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CPF: {} Name: {}, {}", self.cpf, self.last_name, self.first_name)
    }
}

/// `registrationDate`를 `yyyy-MM-dd'T'HH:mm:ss'Z'` 형식으로 (역)직렬화
pub mod registration_timestamp {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    use crate::config::DATETIME_FORMAT;

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(instant) => serializer.serialize_str(&instant.format(DATETIME_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| {
                NaiveDateTime::parse_from_str(&raw, DATETIME_FORMAT)
                    .map(|naive| naive.and_utc())
                    .map_err(D::Error::custom)
            })
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ann() -> User {
        User::new(
            "12345678901".to_string(),
            "Ann".to_string(),
            "Lee".to_string(),
            date(1990, 1, 1),
            None,
        )
    }

    #[test]
    fn test_age_counts_whole_years() {
        let mut user = ann();
        user.date_of_birth = date(2004, 6, 15);

        assert_eq!(user.age_on(date(2023, 6, 14)), 18);
        assert_eq!(user.age_on(date(2023, 6, 15)), 19);
        assert_eq!(user.age_on(date(2023, 12, 31)), 19);
    }

    #[test]
    fn test_age_for_leap_day_birthday() {
        let mut user = ann();
        user.date_of_birth = date(2004, 2, 29);

        assert_eq!(user.age_on(date(2023, 2, 28)), 18);
        assert_eq!(user.age_on(date(2023, 3, 1)), 19);
    }

    #[test]
    fn test_future_birth_date_is_age_zero() {
        let mut user = ann();
        user.date_of_birth = date(2030, 1, 1);

        assert_eq!(user.age_on(date(2024, 1, 1)), 0);
    }

    #[test]
    fn test_register_only_once() {
        let mut user = ann();
        let first = Utc.with_ymd_and_hms(2022, 9, 15, 1, 1, 1).unwrap();
        let second = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();

        user.register(first);
        user.register(second);

        assert_eq!(user.registration_date, Some(first));
    }

    #[test]
    fn test_serialized_shape() {
        let mut user = ann();
        user.register(Utc.with_ymd_and_hms(2022, 9, 15, 1, 1, 1).unwrap());

        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "cpf": "12345678901",
                "firstName": "Ann",
                "lastName": "Lee",
                "dateOfBirth": "1990-01-01",
                "email": null,
                "registrationDate": "2022-09-15T01:01:01Z"
            })
        );
    }

    #[test]
    fn test_deserialize_timestamp() {
        let json = r#"{
            "cpf": "12345678901",
            "firstName": "Ann",
            "lastName": "Lee",
            "dateOfBirth": "1990-01-01",
            "email": "ann@fake.com",
            "registrationDate": "2022-09-15T01:01:01Z"
        }"#;

        let user: User = serde_json::from_str(json).unwrap();

        assert_eq!(
            user.registration_date,
            Some(Utc.with_ymd_and_hms(2022, 9, 15, 1, 1, 1).unwrap())
        );
        assert_eq!(user.email(), Some("ann@fake.com"));
    }

    #[test]
    fn test_empty_email_is_no_email() {
        let mut user = ann();
        user.email = Some(String::new());

        assert_eq!(user.email(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(ann().to_string(), "CPF: 12345678901 Name: Lee, Ann");
    }
}
