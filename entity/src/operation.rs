use sea_orm::entity::prelude::*;

/// One persisted calculation: the inputs and the computed `result`.
///
/// Rows are append-only; nothing in the application updates or deletes them.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "operations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub x: i64,
    pub y: i64,
    pub n: i64,
    pub result: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
