use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::models::Page;

/// 페이지 응답 DTO
///
/// Spring Data `Page` 직렬화 형식과 동일한 필드명을 사용합니다.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u64,

    /// 0부터 시작하는 현재 페이지 번호
    pub number: u32,
    pub size: u32,
    pub number_of_elements: usize,
    pub first: bool,
    pub last: bool,
    pub empty: bool,
}

impl<T> From<Page<T>> for PageResponse<T> {
    fn from(page: Page<T>) -> Self {
        let total_pages = page.total_pages();
        let first = page.is_first();
        let last = page.is_last();

        let Page {
            content,
            number,
            size,
            total_elements,
        } = page;

        Self {
            number_of_elements: content.len(),
            empty: content.is_empty(),
            content,
            total_elements,
            total_pages,
            number,
            size,
            first,
            last,
        }
    }
}
