//! Diesel repository round-trips over a temporary SQLite database.

use tempfile::TempDir;

use kl_core::battlepass::PassProgress;
use kl_core::daily::DayKey;
use kl_core::ports::{
    OverrideStorePort, PassRepositoryPort, TeamRepositoryPort, UserRepositoryPort,
    WordCatalogPort,
};
use kl_core::user::NewUser;
use kl_core::words::NewWordEntry;
use kl_infra::db::repositories::{
    DieselOverrideStore, DieselPassRepository, DieselTeamRepository, DieselUserRepository,
    DieselWordCatalog,
};
use kl_infra::db::{init_db_pool, DbPool};
use kl_infra::seeds;

fn open_pool() -> (TempDir, DbPool) {
    let temp_dir = TempDir::new().expect("create temp dir");
    let db_path = temp_dir.path().join("kalimah-test.db");
    let pool = init_db_pool(db_path.to_str().expect("utf-8 path")).expect("init pool");
    (temp_dir, pool)
}

#[tokio::test]
async fn word_ids_come_back_ascending_with_meta_intact() {
    let (_dir, pool) = open_pool();
    let catalog = DieselWordCatalog::new(pool);

    let meta = serde_json::json!({"root": "س ل م", "source": "seed"});
    catalog
        .insert_many(vec![
            NewWordEntry::new("سلام", "تحية", Some(meta.clone())),
            NewWordEntry::new("كتاب", "صحف مجموعة", None),
        ])
        .await
        .expect("insert");

    let ids = catalog.list_ids().await.expect("list ids");
    assert_eq!(ids.len(), 2);
    assert!(ids[0] < ids[1]);

    let first = catalog
        .find_by_id(&ids[0])
        .await
        .expect("find")
        .expect("exists");
    assert_eq!(first.word, "سلام");
    assert_eq!(first.meta, Some(meta));

    assert!(catalog
        .find_by_id(&kl_core::ids::WordId::new(999))
        .await
        .expect("find")
        .is_none());
}

#[tokio::test]
async fn override_store_upserts_and_clears() {
    let (_dir, pool) = open_pool();
    let catalog = DieselWordCatalog::new(pool.clone());
    let overrides = DieselOverrideStore::new(pool);

    catalog
        .insert_many(vec![
            NewWordEntry::new("سلام", "تحية", None),
            NewWordEntry::new("كتاب", "صحف", None),
        ])
        .await
        .expect("insert");
    let ids = catalog.list_ids().await.expect("list ids");

    let day = DayKey::parse("2025-03-10").expect("day");
    assert!(overrides.find_for_day(&day).await.expect("find").is_none());

    overrides.set(&day, &ids[0]).await.expect("set");
    overrides.set(&day, &ids[1]).await.expect("replace");

    let pin = overrides
        .find_for_day(&day)
        .await
        .expect("find")
        .expect("pinned");
    assert_eq!(pin.word_id, ids[1]);
    assert_eq!(pin.day, day);

    assert!(overrides.clear(&day).await.expect("clear"));
    assert!(!overrides.clear(&day).await.expect("clear again"));
}

#[tokio::test]
async fn user_repository_round_trips_accounts() {
    let (_dir, pool) = open_pool();
    let users = DieselUserRepository::new(pool.clone());
    let teams = DieselTeamRepository::new(pool);

    seeds::seed_launch_teams(&teams).await.expect("seed teams");
    let falcon = teams
        .find_by_code("T01")
        .await
        .expect("find team")
        .expect("exists");

    let created = users
        .insert(NewUser {
            email: "laila@example.com".to_string(),
            password_hash: Some("hash".to_string()),
            display_name: Some("Laila".to_string()),
            google_sub: None,
            team_id: None,
        })
        .await
        .expect("insert user");
    assert!(created.is_active);

    users
        .set_team(&created.id, &falcon.id)
        .await
        .expect("set team");
    users
        .link_google(&created.id, "google-sub-1", Some("Ignored"))
        .await
        .expect("link google");

    let loaded = users
        .find_by_email("laila@example.com")
        .await
        .expect("find")
        .expect("exists");
    assert_eq!(loaded.team_id, Some(falcon.id));
    assert_eq!(loaded.google_sub.as_deref(), Some("google-sub-1"));
    // Display name was already set, so the Google name did not overwrite it.
    assert_eq!(loaded.display_name.as_deref(), Some("Laila"));

    let by_sub = users
        .find_by_google_sub("google-sub-1")
        .await
        .expect("find")
        .expect("exists");
    assert_eq!(by_sub.id, created.id);
}

#[tokio::test]
async fn seeding_teams_twice_is_idempotent() {
    let (_dir, pool) = open_pool();
    let teams = DieselTeamRepository::new(pool);

    let first = seeds::seed_launch_teams(&teams).await.expect("seed");
    let second = seeds::seed_launch_teams(&teams).await.expect("seed again");
    assert_eq!(first, 13);
    assert_eq!(second, 0);

    let listed = teams.list_all().await.expect("list");
    assert_eq!(listed.len(), 13);
    // list_all orders by code
    assert_eq!(listed[0].code, "T01");
    assert_eq!(listed[12].code, "T13");
}

#[tokio::test]
async fn pass_repository_round_trips_ladder_and_progress() {
    let (_dir, pool) = open_pool();
    let users = DieselUserRepository::new(pool.clone());
    let passes = DieselPassRepository::new(pool);

    let user = users
        .insert(NewUser {
            email: "omar@example.com".to_string(),
            password_hash: None,
            display_name: None,
            google_sub: Some("sub".to_string()),
            team_id: None,
        })
        .await
        .expect("insert user");

    let ladder = seeds::default_pass_levels("S1", 4, 100);
    let inserted = passes.insert_levels(ladder).await.expect("insert levels");
    assert_eq!(inserted, 3);

    let level_two = passes
        .find_level("S1", 2)
        .await
        .expect("find level")
        .expect("exists");
    assert_eq!(level_two.xp_required, 100);
    assert!(passes.find_level("S1", 9).await.expect("find").is_none());

    assert!(passes
        .find_progress(&user.id)
        .await
        .expect("find progress")
        .is_none());

    let mut progress = passes
        .insert_progress(PassProgress::fresh(user.id, "S1"))
        .await
        .expect("insert progress");
    progress.add_xp(150);
    assert!(progress.try_level_up(&level_two));
    passes.save_progress(&progress).await.expect("save");

    let reloaded = passes
        .find_progress(&user.id)
        .await
        .expect("find progress")
        .expect("exists");
    assert_eq!(reloaded.current_level, 2);
    assert_eq!(reloaded.current_xp, 150);
}

#[tokio::test]
async fn duplicate_progress_rows_are_rejected() {
    let (_dir, pool) = open_pool();
    let users = DieselUserRepository::new(pool.clone());
    let passes = DieselPassRepository::new(pool);

    let user = users
        .insert(NewUser {
            email: "laila@example.com".to_string(),
            password_hash: Some("hash".to_string()),
            display_name: None,
            google_sub: None,
            team_id: None,
        })
        .await
        .expect("insert user");

    passes
        .insert_progress(PassProgress::fresh(user.id, "S1"))
        .await
        .expect("first insert");
    assert!(passes
        .insert_progress(PassProgress::fresh(user.id, "S1"))
        .await
        .is_err());
}

#[tokio::test]
async fn deleting_a_word_shifts_rotation_positions() {
    // Documented limitation of rotation-by-position over a mutable set:
    // removing an entry remaps every day that pointed past it.
    use diesel::prelude::*;
    use kl_core::daily::RotationPlan;
    use kl_infra::db::schema::t_word::dsl::*;

    let (_dir, pool) = open_pool();
    let catalog = DieselWordCatalog::new(pool.clone());
    catalog
        .insert_many(vec![
            NewWordEntry::new("سلام", "تحية", None),
            NewWordEntry::new("كتاب", "صحف", None),
            NewWordEntry::new("قمر", "جرم سماوي", None),
        ])
        .await
        .expect("insert");

    let plan = RotationPlan::new(chrono::NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
    let day = DayKey::parse("2025-01-02").unwrap();

    let before = catalog.list_ids().await.expect("list ids");
    let picked_before = before[plan.index_for(&day, before.len()).unwrap()];
    assert_eq!(picked_before, before[1]);

    let mut conn = pool.get().expect("conn");
    diesel::delete(t_word.filter(id.eq(before[0].value())))
        .execute(&mut conn)
        .expect("delete first word");

    // Size shrank to 2 and positions shifted: the same day now maps to what
    // used to be the third word.
    let after = catalog.list_ids().await.expect("list ids");
    let picked_after = after[plan.index_for(&day, after.len()).unwrap()];
    assert_eq!(picked_after, before[2]);
}

#[tokio::test]
async fn duplicate_email_violates_unique_constraint() {
    let (_dir, pool) = open_pool();
    let users = DieselUserRepository::new(pool);

    let account = NewUser {
        email: "laila@example.com".to_string(),
        password_hash: Some("hash".to_string()),
        display_name: None,
        google_sub: None,
        team_id: None,
    };
    users.insert(account.clone()).await.expect("first insert");
    assert!(users.insert(account).await.is_err());
}
