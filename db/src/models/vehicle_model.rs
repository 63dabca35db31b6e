use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Represents a vehicle model in the `models` table.
///
/// Named `vehicle_model` on the Rust side to avoid colliding with the
/// sea-orm `Model` naming convention.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "models")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    /// Owning manufacturer.
    pub make_id: i64,

    /// Display name, e.g. "Corolla".
    pub name: String,
    /// URL-safe identifier, unique per make.
    pub slug: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::make::Entity",
        from = "Column::MakeId",
        to = "super::make::Column::Id",
        on_delete = "Cascade"
    )]
    Make,

    #[sea_orm(has_many = "super::classified::Entity")]
    Classified,
}

impl Related<super::make::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Make.def()
    }
}

impl Related<super::classified::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Classified.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(db: &DbConn, make_id: i64, name: &str, slug: &str) -> Result<Model, DbErr> {
        let now = Utc::now();
        let model = ActiveModel {
            make_id: Set(make_id),
            name: Set(name.to_owned()),
            slug: Set(slug.to_owned()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        model.insert(db).await
    }

    pub async fn find_all(db: &DbConn) -> Result<Vec<Model>, DbErr> {
        Entity::find().all(db).await
    }
}
