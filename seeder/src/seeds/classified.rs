use async_trait::async_trait;
use chrono::{Datelike, Utc};
use db::models::classified::{CreateClassified, Model as Classified};
use db::models::make::Model as MakeModel;
use db::models::vehicle_model::Model as VehicleModel;
use fake::Fake;
use fake::faker::lorem::en::Paragraph;
use rand::rngs::{OsRng, StdRng};
use rand::{Rng, SeedableRng, seq::SliceRandom};
use sea_orm::{DatabaseConnection, DbErr, EntityTrait};
use std::collections::HashMap;
use util::config;

use crate::seed::Seeder;

/// Generates random classified-ad listings against the seeded taxonomy.
pub struct ClassifiedSeeder;

#[async_trait]
impl Seeder for ClassifiedSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), DbErr> {
        // Use a Send-compatible RNG
        let mut rng = StdRng::from_rng(OsRng).expect("Failed to seed RNG");

        let models = VehicleModel::find_all(db).await?;
        if models.is_empty() {
            return Err(DbErr::Custom(
                "cannot seed classifieds: no vehicle models found (run the taxonomy seeder first)"
                    .into(),
            ));
        }

        let make_names: HashMap<i64, String> = db::models::Make::find()
            .all(db)
            .await?
            .into_iter()
            .map(|m: MakeModel| (m.id, m.name))
            .collect();

        let conditions = [
            "Immaculate",
            "Well maintained",
            "Bargain",
            "One owner",
            "Low mileage",
            "Dealer serviced",
        ];

        let current_year = Utc::now().year();

        for _ in 0..config::classified_count() {
            let model = models.choose(&mut rng).unwrap();
            let make_name = make_names
                .get(&model.make_id)
                .map(String::as_str)
                .unwrap_or("");

            let year = rng.gen_range(current_year - 18..current_year);
            let age = (current_year - year).max(1);
            let mileage_km = age * rng.gen_range(8_000..22_000);
            let price_cents = i64::from(rng.gen_range(2_500..65_000)) * 100;

            let title = format!(
                "{} {} {} - {}",
                year,
                make_name,
                model.name,
                conditions.choose(&mut rng).unwrap()
            );
            let description: String = Paragraph(1..3).fake();

            Classified::create(
                db,
                CreateClassified {
                    model_id: model.id,
                    title: &title,
                    description: Some(&description),
                    price_cents,
                    year,
                    mileage_km,
                },
            )
            .await?;
        }

        Ok(())
    }
}
