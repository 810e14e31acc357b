mod override_dto;

pub use override_dto::{
    CreateOverrideDto, OverrideDetailDto, OverrideFieldsDto, OverrideListDto, OverrideListItemDto,
    UpdateOverrideDto,
};
