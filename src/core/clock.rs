//! 시간 소스 추상화
//!
//! 나이 검증과 등록 시각 기록은 모두 "현재 시각"에 의존합니다.
//! 전역 시계를 직접 호출하지 않고 [`Clock`]을 주입받아 사용하므로
//! 테스트에서는 [`FixedClock`]으로 특정 날짜를 고정할 수 있습니다.

use chrono::{DateTime, NaiveDate, SubsecRound, Utc};

/// 현재 시각을 제공하는 trait
pub trait Clock: Send + Sync {
    /// 현재 UTC 시각
    fn now(&self) -> DateTime<Utc>;

    /// 현재 날짜 (UTC 기준, 시간 성분 없음)
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// 시스템 시계
///
/// 등록 시각은 `yyyy-MM-dd'T'HH:mm:ss'Z'` 형식으로 직렬화되므로
/// 초 단위로 잘라서 반환합니다.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now().trunc_subsecs(0)
    }
}

/// 항상 같은 시각을 반환하는 시계
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }

    /// 주어진 날짜의 자정(UTC)에 고정된 시계를 만듭니다.
    pub fn at_date(date: NaiveDate) -> Self {
        Self::new(date.and_time(chrono::NaiveTime::default()).and_utc())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    #[test]
    fn test_fixed_clock_returns_same_instant() {
        let instant = Utc.with_ymd_and_hms(2022, 9, 15, 1, 1, 1).unwrap();
        let clock = FixedClock::new(instant);

        assert_eq!(clock.now(), instant);
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2022, 9, 15).unwrap());
    }

    #[test]
    fn test_at_date_is_midnight() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let clock = FixedClock::at_date(date);

        assert_eq!(clock.today(), date);
        assert_eq!(clock.now().hour(), 0);
    }

    #[test]
    fn test_system_clock_has_no_subseconds() {
        assert_eq!(SystemClock.now().nanosecond(), 0);
    }
}
