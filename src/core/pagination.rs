//! Page requests and page results shared by every listing endpoint.
//!
//! Offsets are computed here and pushed down to the database as
//! `LIMIT ? OFFSET ?`; `Page::from_slice` covers callers that already
//! hold the full list in memory.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};

pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 100;

/// Sortable chef columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    #[default]
    Id,
    Username,
    Email,
    IsAdmin,
}

impl SortField {
    /// Column name as it appears in SQL
    pub fn column(&self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Username => "username",
            SortField::Email => "email",
            SortField::IsAdmin => "is_admin",
        }
    }
}

impl FromStr for SortField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "id" => Ok(SortField::Id),
            "username" => Ok(SortField::Username),
            "email" => Ok(SortField::Email),
            "is_admin" | "isadmin" => Ok(SortField::IsAdmin),
            other => Err(AppError::validation(format!(
                "Cannot sort by '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    #[serde(alias = "ASC")]
    Asc,
    #[serde(alias = "DESC")]
    Desc,
}

impl SortDirection {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

impl FromStr for SortDirection {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(AppError::validation(format!(
                "Sort direction must be 'asc' or 'desc', got '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

/// A validated page request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageOptions {
    page_number: u32,
    page_size: u32,
    sort_by: SortField,
    sort_direction: SortDirection,
}

impl PageOptions {
    /// Build page options, rejecting zero page numbers or sizes
    ///
    /// `page_size` above `MAX_PAGE_SIZE` is clamped rather than rejected.
    pub fn new(
        page_number: u32,
        page_size: u32,
        sort_by: SortField,
        sort_direction: SortDirection,
    ) -> Result<Self> {
        if page_number == 0 {
            return Err(AppError::validation("Page number must start at 1"));
        }
        if page_size == 0 {
            return Err(AppError::validation("Page size must be greater than 0"));
        }

        Ok(Self {
            page_number,
            page_size: page_size.min(MAX_PAGE_SIZE),
            sort_by,
            sort_direction,
        })
    }

    pub fn page_number(&self) -> u32 {
        self.page_number
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn sort_by(&self) -> SortField {
        self.sort_by
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    /// Number of rows to skip
    pub fn offset(&self) -> u64 {
        (u64::from(self.page_number) - 1) * u64::from(self.page_size)
    }

    /// Maximum number of rows on this page
    pub fn limit(&self) -> u64 {
        u64::from(self.page_size)
    }

    /// `ORDER BY` clause for this request
    ///
    /// Non-id sorts get `id` as a tie-breaker so consecutive pages never
    /// overlap or skip rows.
    pub fn order_by_clause(&self) -> String {
        let direction = self.sort_direction.as_sql();
        match self.sort_by {
            SortField::Id => format!("ORDER BY id {}", direction),
            field => format!("ORDER BY {} {}, id ASC", field.column(), direction),
        }
    }
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            page_number: 1,
            page_size: DEFAULT_PAGE_SIZE,
            sort_by: SortField::default(),
            sort_direction: SortDirection::default(),
        }
    }
}

/// One page of results plus the totals needed to render a pager
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub page_number: u32,
    pub page_size: u32,
    pub total_pages: u64,
    pub total_elements: u64,
    pub items: Vec<T>,
}

impl<T> Page<T> {
    /// Wrap a page of rows already limited by the database
    pub fn new(options: &PageOptions, total_elements: u64, items: Vec<T>) -> Self {
        Self {
            page_number: options.page_number(),
            page_size: options.page_size(),
            total_pages: total_pages(total_elements, options.page_size()),
            total_elements,
            items,
        }
    }

    /// Slice a full in-memory list down to the requested page
    ///
    /// The caller is responsible for having sorted `all` already.
    pub fn from_slice(all: Vec<T>, options: &PageOptions) -> Self {
        let total_elements = all.len() as u64;
        let start = usize::try_from(options.offset()).unwrap_or(usize::MAX);
        let items: Vec<T> = all
            .into_iter()
            .skip(start)
            .take(options.page_size() as usize)
            .collect();

        Self::new(options, total_elements, items)
    }

    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            page_number: self.page_number,
            page_size: self.page_size,
            total_pages: self.total_pages,
            total_elements: self.total_elements,
            items: self.items.into_iter().map(f).collect(),
        }
    }

    pub fn is_last(&self) -> bool {
        u64::from(self.page_number) >= self.total_pages
    }
}

/// `ceil(total / size)`, zero when there is nothing to show
pub fn total_pages(total_elements: u64, page_size: u32) -> u64 {
    if page_size == 0 {
        return 0;
    }
    total_elements.div_ceil(u64::from(page_size))
}
