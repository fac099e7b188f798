//! Data models for the dashboard.
//!
//! - [`book`] - Book records and the create/update payload
//! - [`filter`] - Filter criteria and the filter engine
//! - [`pagination`] - Page slicing and the pagination control's page list
//! - [`form`] - Record form state and client-side validation

pub mod book;
pub mod filter;
pub mod form;
pub mod pagination;

pub use book::{Book, BookPayload, BookStatus, GENRES, MIN_PUBLISHED_YEAR};
pub use filter::{apply_filters, available_genres, cycle_option, FilterCriteria};
pub use form::{BookForm, FieldError, FormField};
pub use pagination::{clamp_page, page_markers, paginate, total_pages, Page, PageMarker, PAGE_SIZE};
