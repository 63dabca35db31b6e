use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Represents an image attached to a classified ad.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "images")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub classified_id: i64,

    pub url: String,
    /// Display order within the ad's gallery, starting at 0.
    pub position: i32,

    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::classified::Entity",
        from = "Column::ClassifiedId",
        to = "super::classified::Column::Id",
        on_delete = "Cascade"
    )]
    Classified,
}

impl Related<super::classified::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Classified.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DbConn,
        classified_id: i64,
        url: &str,
        position: i32,
    ) -> Result<Model, DbErr> {
        let image = ActiveModel {
            classified_id: Set(classified_id),
            url: Set(url.to_owned()),
            position: Set(position),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        image.insert(db).await
    }

    pub async fn count_for_classified(db: &DbConn, classified_id: i64) -> Result<u64, DbErr> {
        Entity::find()
            .filter(Column::ClassifiedId.eq(classified_id))
            .count(db)
            .await
    }
}
