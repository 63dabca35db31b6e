use async_trait::async_trait;
use colored::*;
use futures::FutureExt;
use sea_orm::{DatabaseConnection, DbErr};
use std::io::{self, Write};
use std::time::Instant;

use crate::seeds::{
    classified::ClassifiedSeeder, image::ImageSeeder, taxonomy::TaxonomySeeder,
    truncate::TruncateSeeder,
};

const STATUS_COLUMN: usize = 80;

/// One unit of seeding work. Implementations must not assume any other
/// seeder has or has not run.
#[async_trait]
pub trait Seeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), DbErr>;
}

/// A named, individually toggleable entry in a [`SeedPlan`].
pub struct SeedStep {
    pub name: &'static str,
    pub enabled: bool,
    pub seeder: Box<dyn Seeder + Send + Sync>,
}

impl SeedStep {
    pub fn new(
        name: &'static str,
        enabled: bool,
        seeder: Box<dyn Seeder + Send + Sync>,
    ) -> Self {
        Self {
            name,
            enabled,
            seeder,
        }
    }
}

/// An ordered list of seed steps. Steps run strictly in declaration order;
/// disabled steps are skipped without being invoked.
pub struct SeedPlan {
    pub steps: Vec<SeedStep>,
}

impl SeedPlan {
    /// The default plan: only image seeding is enabled. The destructive
    /// truncate step and the taxonomy/classified steps stay listed so
    /// flipping them on is a one-word change, not a code restructure.
    pub fn standard() -> Self {
        Self {
            steps: vec![
                SeedStep::new("Truncate", false, Box::new(TruncateSeeder)),
                SeedStep::new("Taxonomy", false, Box::new(TaxonomySeeder)),
                SeedStep::new("Classified", false, Box::new(ClassifiedSeeder)),
                SeedStep::new("Image", true, Box::new(ImageSeeder)),
            ],
        }
    }

    /// Every step enabled, truncate first. Intended for resetting a dev
    /// database to a fully populated state.
    pub fn full() -> Self {
        let mut plan = Self::standard();
        for step in &mut plan.steps {
            step.enabled = true;
        }
        plan
    }

    pub fn enabled_names(&self) -> Vec<&'static str> {
        self.steps
            .iter()
            .filter(|s| s.enabled)
            .map(|s| s.name)
            .collect()
    }
}

/// Runs the enabled steps of `plan` in order, stopping at the first failure.
/// The caller owns the connection; this function never closes it.
pub async fn run_plan(db: &DatabaseConnection, plan: &SeedPlan) -> Result<(), DbErr> {
    for step in &plan.steps {
        if !step.enabled {
            print_status_line(&format!("Seeding {}", step.name.bold()));
            println!("{}", "skipped".dimmed());
            continue;
        }
        run_seeder(&*step.seeder, step.name, db).await?;
    }
    Ok(())
}

pub async fn run_seeder<S: Seeder + ?Sized>(
    seeder: &S,
    name: &str,
    db: &DatabaseConnection,
) -> Result<(), DbErr> {
    print_status_line(&format!("Seeding {}", name.bold()));

    let start = Instant::now();
    let result = std::panic::AssertUnwindSafe(seeder.seed(db))
        .catch_unwind()
        .await;

    match result {
        Ok(Ok(())) => {
            let time_str = format!("({:.2?})", start.elapsed()).dimmed();
            println!("{} {}", "done".green(), time_str);
            Ok(())
        }
        Ok(Err(e)) => {
            println!("{}", "failed".red());
            Err(e)
        }
        Err(_) => {
            println!("{}", "failed".red());
            Err(DbErr::Custom(format!("{name} seeder panicked")))
        }
    }
}

fn print_status_line(base_msg: &str) {
    let dots = ".".repeat(STATUS_COLUMN.saturating_sub(base_msg.len()));
    print!("{}{} ", base_msg, dots);
    io::stdout().flush().ok();
}

#[cfg(test)]
mod tests {
    use super::SeedPlan;

    #[test]
    fn standard_plan_enables_only_image_seeding() {
        let plan = SeedPlan::standard();
        let names: Vec<_> = plan.steps.iter().map(|s| s.name).collect();
        assert_eq!(names, ["Truncate", "Taxonomy", "Classified", "Image"]);
        assert_eq!(plan.enabled_names(), ["Image"]);
    }

    #[test]
    fn full_plan_enables_every_step_in_order() {
        let plan = SeedPlan::full();
        assert_eq!(
            plan.enabled_names(),
            ["Truncate", "Taxonomy", "Classified", "Image"]
        );
    }
}
