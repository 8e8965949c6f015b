use sea_orm::entity::prelude::*;

use crate::auth::application::domain::entities::BlacklistToken;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "blacklist_tokens")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Text")]
    pub access_token: String,
}

impl Model {
    pub fn to_domain(&self) -> BlacklistToken {
        BlacklistToken::new(self.access_token.clone())
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
