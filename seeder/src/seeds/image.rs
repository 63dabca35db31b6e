use async_trait::async_trait;
use db::models::classified::Model as Classified;
use db::models::image::Model as Image;
use sea_orm::{DatabaseConnection, DbErr};
use util::config;

use crate::seed::Seeder;

/// Attaches a small gallery of image rows to every classified ad. New rows
/// take positions after the ad's existing gallery, so rerunning the step
/// appends instead of colliding on the per-ad position constraint.
pub struct ImageSeeder;

#[async_trait]
impl Seeder for ImageSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), DbErr> {
        let classifieds = Classified::find_all(db).await?;
        if classifieds.is_empty() {
            return Err(DbErr::Custom(
                "cannot seed images: no classifieds found (run the classified seeder first)"
                    .into(),
            ));
        }

        let max_images = config::max_images_per_classified().max(1) as usize;

        for ad in classifieds {
            let gallery_size = fastrand::usize(1..=max_images);
            // This seeder assigns positions sequentially from 0, so the
            // row count is the next free position.
            let next_position = Image::count_for_classified(db, ad.id).await? as i32;

            for offset in 0..gallery_size {
                let url = format!(
                    "https://cdn.motormart.example/classifieds/{}/photo-{:08x}.jpg",
                    ad.id,
                    fastrand::u32(..)
                );
                Image::create(db, ad.id, &url, next_position + offset as i32).await?;
            }
        }

        Ok(())
    }
}
