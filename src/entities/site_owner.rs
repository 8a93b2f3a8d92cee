use sea_orm::entity::prelude::*;

/// One-row table holding the site owner. The id is pinned to
/// `constants::SITE_OWNER_ID`, so a second owner cannot be inserted.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "site_owner")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,

    #[sea_orm(column_type = "String(StringLen::N(20))")]
    pub name: String,

    #[sea_orm(column_type = "String(StringLen::N(20))")]
    pub username: String,

    /// Argon2id PHC string
    #[sea_orm(column_type = "String(StringLen::N(128))", nullable)]
    pub password_hash: Option<String>,

    pub created_at: String,

    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
