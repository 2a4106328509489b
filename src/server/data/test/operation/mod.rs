use crate::server::{
    data::operation::{OperationRepository, OperationStore},
    error::store::StoreError,
    model::operation::CreateOperationParam,
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod save;
