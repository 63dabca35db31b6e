use async_trait::async_trait;
use db::models::make::Model as Make;
use db::models::vehicle_model::Model as VehicleModel;
use sea_orm::{DatabaseConnection, DbErr};

use crate::seed::Seeder;

/// Populates the `makes` and `models` reference tables from a fixed
/// catalogue. Later seeders use these rows as foreign-key targets.
pub struct TaxonomySeeder;

const CATALOGUE: &[(&str, &[&str])] = &[
    ("Toyota", &["Corolla", "Hilux", "RAV4", "Land Cruiser"]),
    ("Volkswagen", &["Polo", "Golf", "Tiguan"]),
    ("Ford", &["Fiesta", "Focus", "Ranger"]),
    ("Honda", &["Jazz", "Civic", "CR-V"]),
    ("BMW", &["3 Series", "5 Series", "X3"]),
    ("Mercedes-Benz", &["A-Class", "C-Class", "GLC"]),
    ("Hyundai", &["i20", "Tucson", "Santa Fe"]),
    ("Kia", &["Picanto", "Sportage", "Sorento"]),
];

pub fn slugify(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            'A'..='Z' => c.to_ascii_lowercase(),
            'a'..='z' | '0'..='9' => c,
            _ => '-',
        })
        .collect()
}

#[async_trait]
impl Seeder for TaxonomySeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), DbErr> {
        for (make_name, model_names) in CATALOGUE {
            let make = Make::create(db, make_name, &slugify(make_name)).await?;

            for model_name in *model_names {
                VehicleModel::create(db, make.id, model_name, &slugify(model_name)).await?;
            }
        }

        Ok(())
    }
}
