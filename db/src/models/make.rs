use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Represents a vehicle manufacturer in the `makes` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "makes")]
pub struct Model {
    /// Primary key ID (auto-incremented).
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name, e.g. "Toyota".
    pub name: String,
    /// URL-safe unique identifier, e.g. "toyota".
    pub slug: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::vehicle_model::Entity")]
    VehicleModel,
}

impl Related<super::vehicle_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VehicleModel.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(db: &DbConn, name: &str, slug: &str) -> Result<Model, DbErr> {
        let now = Utc::now();
        let make = ActiveModel {
            name: Set(name.to_owned()),
            slug: Set(slug.to_owned()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        make.insert(db).await
    }

    pub async fn find_by_slug(db: &DbConn, slug: &str) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::Slug.eq(slug))
            .one(db)
            .await
    }
}
