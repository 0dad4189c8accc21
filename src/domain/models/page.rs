//! 페이징 값 객체
//!
//! Spring Data의 `Pageable`/`Page`에 해당하는 최소한의 모델입니다.
//! 정렬 가능한 속성은 [`SortField`]로 제한되며, 각 속성은 고정된 컬럼명에 대응합니다.

use crate::config::PaginationConfig;

/// 정렬 가능한 사용자 속성
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Cpf,
    FirstName,
    LastName,
    DateOfBirth,
    Email,
    RegistrationDate,
}

impl SortField {
    /// JSON 속성명으로부터 정렬 필드를 찾습니다.
    pub fn from_property(property: &str) -> Option<Self> {
        match property {
            "cpf" => Some(SortField::Cpf),
            "firstName" => Some(SortField::FirstName),
            "lastName" => Some(SortField::LastName),
            "dateOfBirth" => Some(SortField::DateOfBirth),
            "email" => Some(SortField::Email),
            "registrationDate" => Some(SortField::RegistrationDate),
            _ => None,
        }
    }

    /// `tb_user` 테이블의 컬럼명
    pub fn column(&self) -> &'static str {
        match self {
            SortField::Cpf => "cpf",
            SortField::FirstName => "first_name",
            SortField::LastName => "last_name",
            SortField::DateOfBirth => "date_of_birth",
            SortField::Email => "email",
            SortField::RegistrationDate => "registration_date",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.to_lowercase().as_str() {
            "asc" => Some(Direction::Asc),
            "desc" => Some(Direction::Desc),
            _ => None,
        }
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub field: SortField,
    pub direction: Direction,
}

impl Default for Sort {
    /// 기본 정렬: `cpf` 오름차순
    fn default() -> Self {
        Self {
            field: SortField::Cpf,
            direction: Direction::Asc,
        }
    }
}

/// 0부터 시작하는 페이지 요청
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
    pub sort: Sort,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: PaginationConfig::DEFAULT_PAGE_SIZE,
            sort: Sort::default(),
        }
    }
}

impl PageRequest {
    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.size)
    }
}

/// 한 페이지 분량의 조회 결과
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub number: u32,
    pub size: u32,
    pub total_elements: u64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: &PageRequest, total_elements: u64) -> Self {
        Self {
            content,
            number: request.page,
            size: request.size,
            total_elements,
        }
    }

    pub fn total_pages(&self) -> u64 {
        if self.size == 0 {
            return 0;
        }
        self.total_elements.div_ceil(u64::from(self.size))
    }

    pub fn is_first(&self) -> bool {
        self.number == 0
    }

    pub fn is_last(&self) -> bool {
        u64::from(self.number) + 1 >= self.total_pages()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_request() {
        let request = PageRequest::default();

        assert_eq!(request.page, 0);
        assert_eq!(request.size, 10);
        assert_eq!(request.sort.field, SortField::Cpf);
        assert_eq!(request.sort.direction, Direction::Asc);
        assert_eq!(request.offset(), 0);
    }

    #[test]
    fn test_offset() {
        let request = PageRequest {
            page: 3,
            size: 25,
            ..PageRequest::default()
        };
        assert_eq!(request.offset(), 75);
    }

    #[test]
    fn test_sort_field_lookup() {
        assert_eq!(SortField::from_property("firstName"), Some(SortField::FirstName));
        assert_eq!(SortField::from_property("first_name"), None);
        assert_eq!(SortField::RegistrationDate.column(), "registration_date");
        assert_eq!(Direction::from_keyword("DESC"), Some(Direction::Desc));
        assert_eq!(Direction::from_keyword("up"), None);
    }

    #[test]
    fn test_page_metadata() {
        let request = PageRequest::default();
        let page = Page::new(vec![1, 2, 3], &request, 23);

        assert_eq!(page.total_pages(), 3);
        assert!(page.is_first());
        assert!(!page.is_last());

        let empty: Page<i32> = Page::new(vec![], &request, 0);
        assert_eq!(empty.total_pages(), 0);
        assert!(empty.is_last());
    }
}
