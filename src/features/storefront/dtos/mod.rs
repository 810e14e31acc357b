mod page_dto;

pub use page_dto::{ProductSummaryDto, SeoMetadataDto, StorefrontPageDto};
