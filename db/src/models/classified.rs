use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Represents a classified-ad listing in the `classifieds` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "classifieds")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    /// Vehicle model this ad is selling.
    pub model_id: i64,

    pub title: String,
    pub description: Option<String>,
    /// Asking price in cents to avoid float rounding.
    pub price_cents: i64,
    /// Model year of the advertised vehicle.
    pub year: i32,
    pub mileage_km: i32,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::vehicle_model::Entity",
        from = "Column::ModelId",
        to = "super::vehicle_model::Column::Id",
        on_delete = "Cascade"
    )]
    VehicleModel,

    #[sea_orm(has_many = "super::image::Entity")]
    Image,
}

impl Related<super::vehicle_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VehicleModel.def()
    }
}

impl Related<super::image::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Image.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub struct CreateClassified<'a> {
    pub model_id: i64,
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub price_cents: i64,
    pub year: i32,
    pub mileage_km: i32,
}

impl Model {
    pub async fn create(db: &DbConn, data: CreateClassified<'_>) -> Result<Model, DbErr> {
        let now = Utc::now();
        let classified = ActiveModel {
            model_id: Set(data.model_id),
            title: Set(data.title.to_owned()),
            description: Set(data.description.map(str::to_owned)),
            price_cents: Set(data.price_cents),
            year: Set(data.year),
            mileage_km: Set(data.mileage_km),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        classified.insert(db).await
    }

    pub async fn find_all(db: &DbConn) -> Result<Vec<Model>, DbErr> {
        Entity::find().all(db).await
    }
}

#[cfg(test)]
mod tests {
    use super::{CreateClassified, Model as Classified};
    use crate::models::make::Model as Make;
    use crate::models::vehicle_model::Model as VehicleModel;
    use crate::test_utils::setup_test_db;

    #[tokio::test]
    async fn test_classified_create_and_find_all() {
        let db = setup_test_db().await;

        let make = Make::create(&db, "Ford", "ford").await.unwrap();
        let model = VehicleModel::create(&db, make.id, "Ranger", "ranger")
            .await
            .unwrap();

        let ad = Classified::create(
            &db,
            CreateClassified {
                model_id: model.id,
                title: "2019 Ford Ranger XLT",
                description: Some("One owner, full service history."),
                price_cents: 28_500_00,
                year: 2019,
                mileage_km: 83_000,
            },
        )
        .await
        .unwrap();

        assert_eq!(ad.model_id, model.id);
        assert_eq!(ad.price_cents, 2_850_000);

        let all = Classified::find_all(&db).await.unwrap();
        assert_eq!(all.len(), 1);
    }
}
