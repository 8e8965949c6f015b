use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};

use crate::notification::application::domain::UserPreference;
use crate::store::application::domain::{EntityId, UserId};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_preferences")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    #[sea_orm(unique)]
    pub user_id: i64,
}

impl Model {
    pub fn to_domain(&self) -> UserPreference {
        UserPreference {
            id: Some(EntityId::from(self.id)),
            user_id: UserId::from(self.user_id),
        }
    }
}

impl From<&UserPreference> for ActiveModel {
    fn from(preference: &UserPreference) -> Self {
        Self {
            id: preference.id.map_or(NotSet, |id| Set(id.value())),
            user_id: Set(preference.user_id.value()),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
