use async_trait::async_trait;
use db::test_utils::setup_test_db;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PaginatorTrait};
use seeder::seed::{SeedPlan, SeedStep, Seeder, run_plan};
use std::sync::{Arc, Mutex, Once};

type CallLog = Arc<Mutex<Vec<&'static str>>>;

struct RecordingSeeder {
    name: &'static str,
    log: CallLog,
}

#[async_trait]
impl Seeder for RecordingSeeder {
    async fn seed(&self, _db: &DatabaseConnection) -> Result<(), DbErr> {
        self.log.lock().unwrap().push(self.name);
        Ok(())
    }
}

struct FailingSeeder {
    name: &'static str,
    log: CallLog,
}

#[async_trait]
impl Seeder for FailingSeeder {
    async fn seed(&self, _db: &DatabaseConnection) -> Result<(), DbErr> {
        self.log.lock().unwrap().push(self.name);
        Err(DbErr::Custom("boom".into()))
    }
}

fn recording_step(name: &'static str, enabled: bool, log: &CallLog) -> SeedStep {
    SeedStep::new(
        name,
        enabled,
        Box::new(RecordingSeeder {
            name,
            log: Arc::clone(log),
        }),
    )
}

/// The real seeders read generation counts from the global config, which
/// requires DATABASE_PATH at first access.
fn init_env() {
    static INIT: Once = Once::new();
    INIT.call_once(|| unsafe {
        std::env::set_var("DATABASE_PATH", "/tmp/seeder-orchestrator-tests.db");
        std::env::set_var("SEED_CLASSIFIED_COUNT", "12");
        std::env::set_var("SEED_MAX_IMAGES_PER_CLASSIFIED", "3");
    });
}

#[tokio::test]
async fn steps_run_in_declared_order() {
    let db = setup_test_db().await;
    let log: CallLog = Arc::new(Mutex::new(Vec::new()));

    let plan = SeedPlan {
        steps: vec![
            recording_step("first", true, &log),
            recording_step("second", true, &log),
            recording_step("third", true, &log),
        ],
    };

    run_plan(&db, &plan).await.unwrap();

    assert_eq!(*log.lock().unwrap(), ["first", "second", "third"]);
    db.close().await.unwrap();
}

#[tokio::test]
async fn failure_stops_later_steps_and_surfaces_the_step_error() {
    let db = setup_test_db().await;
    let log: CallLog = Arc::new(Mutex::new(Vec::new()));

    let plan = SeedPlan {
        steps: vec![
            recording_step("first", true, &log),
            SeedStep::new(
                "second",
                true,
                Box::new(FailingSeeder {
                    name: "second",
                    log: Arc::clone(&log),
                }),
            ),
            recording_step("third", true, &log),
        ],
    };

    let err = run_plan(&db, &plan).await.unwrap_err();

    match err {
        DbErr::Custom(msg) => assert_eq!(msg, "boom"),
        other => panic!("expected the step's own error, got {other:?}"),
    }
    assert_eq!(*log.lock().unwrap(), ["first", "second"]);

    // The connection is still released cleanly after a failed run.
    db.close().await.unwrap();
}

#[tokio::test]
async fn disabled_steps_are_never_invoked() {
    let db = setup_test_db().await;
    let log: CallLog = Arc::new(Mutex::new(Vec::new()));

    // Same shape as the standard plan: only image seeding enabled.
    let plan = SeedPlan {
        steps: vec![
            recording_step("Truncate", false, &log),
            recording_step("Taxonomy", false, &log),
            recording_step("Classified", false, &log),
            recording_step("Image", true, &log),
        ],
    };

    run_plan(&db, &plan).await.unwrap();

    assert_eq!(*log.lock().unwrap(), ["Image"]);
    db.close().await.unwrap();
}

#[tokio::test]
async fn plan_with_no_enabled_steps_is_a_clean_no_op() {
    let db = setup_test_db().await;

    let plan = SeedPlan { steps: vec![] };
    run_plan(&db, &plan).await.unwrap();

    db.close().await.unwrap();
}

#[tokio::test]
async fn full_plan_populates_every_table() {
    init_env();
    let db = setup_test_db().await;

    run_plan(&db, &SeedPlan::full()).await.unwrap();

    let makes = db::models::Make::find().count(&db).await.unwrap();
    let models = db::models::VehicleModel::find().count(&db).await.unwrap();
    let classifieds = db::models::Classified::find().count(&db).await.unwrap();
    let images = db::models::Image::find().count(&db).await.unwrap();

    assert!(makes > 0);
    assert!(models > makes);
    assert_eq!(classifieds, 12);
    assert!(images >= classifieds);

    db.close().await.unwrap();
}

#[tokio::test]
async fn full_plan_is_rerunnable_because_truncate_resets_state() {
    init_env();
    let db = setup_test_db().await;

    run_plan(&db, &SeedPlan::full()).await.unwrap();
    run_plan(&db, &SeedPlan::full()).await.unwrap();

    // Slugs are unique; a second run would violate them without the reset.
    let makes = db::models::Make::find().count(&db).await.unwrap();
    assert_eq!(makes, 8);

    db.close().await.unwrap();
}

#[tokio::test]
async fn image_only_rerun_appends_to_existing_galleries() {
    init_env();
    let db = setup_test_db().await;

    run_plan(&db, &SeedPlan::full()).await.unwrap();
    let before = db::models::Image::find().count(&db).await.unwrap();

    // The standard plan runs only the image step; it must extend each ad's
    // gallery rather than collide on already-taken positions.
    run_plan(&db, &SeedPlan::standard()).await.unwrap();
    let after = db::models::Image::find().count(&db).await.unwrap();

    assert!(after > before);

    db.close().await.unwrap();
}

#[tokio::test]
async fn image_seeding_fails_without_classifieds() {
    init_env();
    let db = setup_test_db().await;

    let err = run_plan(&db, &SeedPlan::standard()).await.unwrap_err();
    assert!(matches!(err, DbErr::Custom(_)));

    db.close().await.unwrap();
}

#[tokio::test]
async fn classified_seeding_fails_without_taxonomy() {
    init_env();
    let db = setup_test_db().await;

    let mut plan = SeedPlan::standard();
    for step in &mut plan.steps {
        step.enabled = step.name == "Classified";
    }

    let err = run_plan(&db, &plan).await.unwrap_err();
    assert!(matches!(err, DbErr::Custom(_)));

    db.close().await.unwrap();
}
