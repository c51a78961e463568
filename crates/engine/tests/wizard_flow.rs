//! End-to-end wizard flow tests against a real SQLite file.
//!
//! Each test opens its own database under a temp directory, drives the
//! wizard and roster services through the repository port, and checks the
//! persisted state, including resuming after a fresh pool on the same file.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tempfile::TempDir;

use questkeeper_domain::{
    Alignment, CharacterClass, Gender, Race, WizardProgress,
};
use questkeeper_engine::{
    connect, CampaignRepositoryPort, CampaignRoster, CampaignWizard, DetailsInput, EditInput,
    RosterAction, RosterError, SqliteCampaignRepository, SystemClock, WizardError, WizardRoute,
};

struct TestApp {
    wizard: CampaignWizard,
    roster: CampaignRoster,
    repository: Arc<SqliteCampaignRepository>,
    // Held so the database file outlives the test body.
    _dir: TempDir,
}

async fn open_app_at(dir: TempDir) -> TestApp {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let path = dir.path().join("questkeeper.db");
    let pool = connect(&path.to_string_lossy())
        .await
        .expect("open database");
    let repository = Arc::new(
        SqliteCampaignRepository::new(pool, Arc::new(SystemClock::new()))
            .await
            .expect("create repository"),
    );
    TestApp {
        wizard: CampaignWizard::new(repository.clone()),
        roster: CampaignRoster::new(repository.clone()),
        repository,
        _dir: dir,
    }
}

async fn open_app() -> TestApp {
    open_app_at(tempfile::tempdir().expect("create temp dir")).await
}

fn details(player: &str, first: &str, last: &str) -> DetailsInput {
    DetailsInput {
        player_name: player.to_string(),
        first_name: first.to_string(),
        last_name: last.to_string(),
        gender: Some(Gender::Female),
        alignment: Some(Alignment::NeutralGood),
        level: "5".to_string(),
        height: "5'9\"".to_string(),
        weight: "150 lb".to_string(),
        age: "27".to_string(),
        experience: "6500".to_string(),
    }
}

// Timestamps carry microseconds; a short pause keeps consecutive writes
// strictly ordered even on a fast machine.
async fn settle() {
    tokio::time::sleep(Duration::from_millis(5)).await;
}

#[tokio::test]
async fn full_wizard_flow_creates_a_complete_campaign() {
    let app = open_app().await;

    let id = app
        .wizard
        .submit_details(None, &details("Alice", "Aria", "Stone"))
        .await
        .expect("details step");
    assert_eq!(app.wizard.route(id).await.expect("route"), WizardRoute::Race);

    app.wizard.submit_race(id, Race::HalfOrc).await.expect("race step");
    assert_eq!(app.wizard.route(id).await.expect("route"), WizardRoute::Class);

    app.wizard
        .submit_class(id, CharacterClass::Wizard)
        .await
        .expect("class step");
    assert_eq!(app.wizard.route(id).await.expect("route"), WizardRoute::Edit);

    let campaign = app.repository.fetch_one(id).await.expect("fetch");
    assert_eq!(campaign.progress(), WizardProgress::Complete);
    assert_eq!(campaign.character().race(), Some(Race::HalfOrc));
    assert_eq!(campaign.character().class(), Some(CharacterClass::Wizard));
    assert_eq!(campaign.character().full_name(), "Aria Stone");
    assert_eq!(campaign.character().level().value(), 5);
    assert_eq!(campaign.character().experience().value(), 6500);

    let cards = app.roster.list(Utc::now()).await.expect("list");
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].title, "Aria Stone");
    assert_eq!(cards[0].description, "Level 5 Half-Orc Wizard, played by Alice");
    assert_eq!(cards[0].portrait_asset, "portrait_half_orc");
    assert_eq!(cards[0].class_icon_asset, Some("class_wizard"));
    assert_eq!(cards[0].action, RosterAction::Edit);
}

#[tokio::test]
async fn wizard_resumes_at_persisted_step_after_reopen() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let app = open_app_at(dir).await;

    let id = app
        .wizard
        .submit_details(None, &details("Alice", "Aria", "Stone"))
        .await
        .expect("details step");
    app.wizard.submit_race(id, Race::Elf).await.expect("race step");

    // Reopen the same file with a fresh pool, as after a process restart.
    let TestApp { _dir: dir, .. } = app;
    let app = open_app_at(dir).await;

    assert_eq!(app.wizard.route(id).await.expect("route"), WizardRoute::Class);
    app.wizard
        .submit_class(id, CharacterClass::Ranger)
        .await
        .expect("class step");

    let campaign = app.repository.fetch_one(id).await.expect("fetch");
    assert_eq!(campaign.progress(), WizardProgress::Complete);
    assert_eq!(campaign.character().race(), Some(Race::Elf));
}

#[tokio::test]
async fn steps_cannot_be_skipped() {
    let app = open_app().await;
    let id = app
        .wizard
        .submit_details(None, &details("Alice", "Aria", "Stone"))
        .await
        .expect("details step");

    // Campaign is awaiting race; class submission is out of order.
    let err = app
        .wizard
        .submit_class(id, CharacterClass::Bard)
        .await
        .expect_err("class before race");
    assert!(matches!(
        err,
        WizardError::StepMismatch {
            actual: WizardProgress::AwaitingRace,
            ..
        }
    ));

    // And details cannot be re-submitted mid-wizard.
    let err = app
        .wizard
        .submit_details(Some(id), &details("Alice", "Aria", "Stone"))
        .await
        .expect_err("details while awaiting race");
    assert!(matches!(err, WizardError::StepMismatch { .. }));
}

#[tokio::test]
async fn invalid_details_block_creation_entirely() {
    let app = open_app().await;

    let mut input = details("Alice", "Aria", "Stone");
    input.first_name = "   ".to_string();
    input.level = "21".to_string();

    let err = app
        .wizard
        .submit_details(None, &input)
        .await
        .expect_err("invalid form");
    let WizardError::Invalid(errors) = err else {
        panic!("expected a validation report");
    };
    assert_eq!(errors.errors().len(), 2);

    // Nothing was written.
    assert!(app.repository.fetch_all().await.expect("fetch_all").is_empty());
}

#[tokio::test]
async fn roster_puts_most_recently_touched_campaign_first() {
    let app = open_app().await;

    let first = app
        .wizard
        .submit_details(None, &details("Alice", "Aria", "Stone"))
        .await
        .expect("first campaign");
    settle().await;
    let second = app
        .wizard
        .submit_details(None, &details("Bob", "Borin", "Oakshield"))
        .await
        .expect("second campaign");
    settle().await;

    let cards = app.roster.list(Utc::now()).await.expect("list");
    assert_eq!(cards[0].id, second);
    assert_eq!(cards[0].action, RosterAction::Resume);

    // Touching the older campaign moves it back to the front.
    app.wizard.submit_race(first, Race::Dwarf).await.expect("race step");
    let cards = app.roster.list(Utc::now()).await.expect("list");
    assert_eq!(cards[0].id, first);
}

#[tokio::test]
async fn deletion_requires_exact_full_name() {
    let app = open_app().await;
    let id = app
        .wizard
        .submit_details(None, &details("Alice", "Aria", "Stone"))
        .await
        .expect("details step");

    for wrong in ["Aria", "aria stone", "Aria  Stone", ""] {
        let err = app
            .roster
            .delete(id, wrong)
            .await
            .expect_err("mismatched confirmation");
        assert!(matches!(err, RosterError::ConfirmationMismatch), "{wrong:?}");
    }
    assert_eq!(app.repository.fetch_all().await.expect("fetch_all").len(), 1);

    app.roster.delete(id, "Aria Stone").await.expect("delete");
    assert!(app.repository.fetch_all().await.expect("fetch_all").is_empty());

    let err = app
        .roster
        .delete(id, "Aria Stone")
        .await
        .expect_err("already gone");
    assert!(matches!(err, RosterError::NotFound(_)));
}

#[tokio::test]
async fn finished_campaign_is_edited_in_place() {
    let app = open_app().await;
    let id = app
        .wizard
        .submit_details(None, &details("Alice", "Aria", "Stone"))
        .await
        .expect("details step");
    app.wizard.submit_race(id, Race::Human).await.expect("race step");
    app.wizard
        .submit_class(id, CharacterClass::Fighter)
        .await
        .expect("class step");

    let before = app.repository.fetch_one(id).await.expect("fetch");
    settle().await;

    let edit = EditInput {
        details: details("Alice", "Aria", "Brightblade"),
        race: Race::Tiefling,
        class: CharacterClass::Warlock,
        background: "  Made a pact at a crossroads.  ".to_string(),
    };
    app.wizard.edit(id, &edit).await.expect("edit");

    let after = app.repository.fetch_one(id).await.expect("refetch");
    assert_eq!(after.progress(), WizardProgress::Complete);
    assert_eq!(after.character().full_name(), "Aria Brightblade");
    assert_eq!(after.character().race(), Some(Race::Tiefling));
    assert_eq!(after.character().class(), Some(CharacterClass::Warlock));
    assert_eq!(after.character().background(), "Made a pact at a crossroads.");
    assert_eq!(after.created_at(), before.created_at());
    assert!(after.updated_at() > before.updated_at());

    // The confirmation phrase follows the rename.
    let err = app
        .roster
        .delete(id, "Aria Stone")
        .await
        .expect_err("old name no longer matches");
    assert!(matches!(err, RosterError::ConfirmationMismatch));
    app.roster.delete(id, "Aria Brightblade").await.expect("delete");
}
