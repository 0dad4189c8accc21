//! 조회용 쿼리 파라미터 DTO
//!
//! - [`PageQuery`] - `GET /api/user?page=&size=&sort=`
//! - [`UserFilterQuery`] - `GET /api/user/filter?firstname=` 또는 `?lastname=`

use serde::Deserialize;
use utoipa::IntoParams;

use crate::config::PaginationConfig;
use crate::core::errors::AppError;
use crate::domain::models::{Direction, PageRequest, Sort, SortField};

/// 목록 조회 페이징 파라미터
///
/// `sort`는 `field` 또는 `field,asc|desc` 형식입니다. 예: `sort=firstName,desc`
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// 0부터 시작하는 페이지 번호
    #[param(example = 0)]
    pub page: Option<i64>,
    #[param(example = 10)]
    pub size: Option<i64>,
    #[param(example = "firstName,desc")]
    pub sort: Option<String>,
}

impl TryFrom<PageQuery> for PageRequest {
    type Error = AppError;

    fn try_from(query: PageQuery) -> Result<Self, Self::Error> {
        let page = query.page.unwrap_or(0).clamp(0, i64::from(u32::MAX)) as u32;

        let size = match query.size {
            Some(size) if size >= 1 => size.min(i64::from(PaginationConfig::MAX_PAGE_SIZE)) as u32,
            _ => PaginationConfig::DEFAULT_PAGE_SIZE,
        };

        let sort = match query.sort.as_deref().map(str::trim) {
            None | Some("") => Sort::default(),
            Some(raw) => parse_sort(raw)?,
        };

        Ok(PageRequest { page, size, sort })
    }
}

fn parse_sort(raw: &str) -> Result<Sort, AppError> {
    let mut parts = raw.split(',').map(str::trim);
    let property = parts.next().unwrap_or_default();

    let field = SortField::from_property(property).ok_or_else(|| {
        AppError::ValidationError(format!("No sortable property '{}' found for type User", property))
    })?;

    let direction = match parts.next() {
        None | Some("") => Direction::Asc,
        Some(keyword) => Direction::from_keyword(keyword).ok_or_else(|| {
            AppError::ValidationError(format!("Invalid sort direction '{}'", keyword))
        })?,
    };

    if parts.next().is_some() {
        return Err(AppError::ValidationError(format!("Invalid sort expression '{}'", raw)));
    }

    Ok(Sort { field, direction })
}

/// 이름 부분 일치 검색 파라미터 (대소문자 구분)
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UserFilterQuery {
    pub firstname: Option<String>,
    pub lastname: Option<String>,
}

/// 검색 대상 필드
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameFilter {
    FirstName(String),
    LastName(String),
}

impl TryFrom<UserFilterQuery> for NameFilter {
    type Error = AppError;

    /// `firstname`이 우선이며, 둘 다 없으면 잘못된 요청입니다.
    fn try_from(query: UserFilterQuery) -> Result<Self, Self::Error> {
        match (query.firstname, query.lastname) {
            (Some(first_name), _) => Ok(NameFilter::FirstName(first_name)),
            (None, Some(last_name)) => Ok(NameFilter::LastName(last_name)),
            (None, None) => Err(AppError::ValidationError(
                "Query parameter 'firstname' or 'lastname' is required".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(page: Option<i64>, size: Option<i64>, sort: Option<&str>) -> PageQuery {
        PageQuery {
            page,
            size,
            sort: sort.map(str::to_string),
        }
    }

    #[test]
    fn test_defaults() {
        let request = PageRequest::try_from(PageQuery::default()).unwrap();
        assert_eq!(request, PageRequest::default());
    }

    #[test]
    fn test_page_and_size_are_normalized() {
        let request = PageRequest::try_from(query(Some(-3), Some(0), None)).unwrap();
        assert_eq!(request.page, 0);
        assert_eq!(request.size, 10);

        let request = PageRequest::try_from(query(Some(2), Some(5000), None)).unwrap();
        assert_eq!(request.page, 2);
        assert_eq!(request.size, 2000);
    }

    #[test]
    fn test_sort_parsing() {
        let request = PageRequest::try_from(query(None, None, Some("firstName,desc"))).unwrap();
        assert_eq!(request.sort.field, SortField::FirstName);
        assert_eq!(request.sort.direction, Direction::Desc);

        let request = PageRequest::try_from(query(None, None, Some("lastName"))).unwrap();
        assert_eq!(request.sort.field, SortField::LastName);
        assert_eq!(request.sort.direction, Direction::Asc);
    }

    #[test]
    fn test_invalid_sort_is_rejected() {
        assert!(PageRequest::try_from(query(None, None, Some("password"))).is_err());
        assert!(PageRequest::try_from(query(None, None, Some("cpf,sideways"))).is_err());
        assert!(PageRequest::try_from(query(None, None, Some("cpf,asc,extra"))).is_err());
    }

    #[test]
    fn test_name_filter_selection() {
        let both = UserFilterQuery {
            firstname: Some("An".to_string()),
            lastname: Some("Le".to_string()),
        };
        assert_eq!(NameFilter::try_from(both).unwrap(), NameFilter::FirstName("An".to_string()));

        let last = UserFilterQuery {
            firstname: None,
            lastname: Some("Le".to_string()),
        };
        assert_eq!(NameFilter::try_from(last).unwrap(), NameFilter::LastName("Le".to_string()));

        assert!(NameFilter::try_from(UserFilterQuery::default()).is_err());
    }
}
