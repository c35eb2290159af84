use astromatch::{
    ChartRequest, JsonProfileRepository, NatalChart, ProfileRepository, UserProfile,
};
use tempfile::tempdir;

fn sample_profile() -> UserProfile {
    let chart: NatalChart = serde_json::from_str(
        r#"{
            "sunSign": "Taurus", "moonSign": "Leo", "risingSign": "Aquarius",
            "summary": "Steady and bright.", "synthesis": "Earth holds the flame.",
            "natalChart": [
                {"planet": "Sun", "sign": "Taurus", "degree": 10, "minute": 0, "isRetrograde": false, "house": 3}
            ],
            "aspects": []
        }"#,
    )
    .expect("chart fixture");

    UserProfile::new(ChartRequest::new("Mara", "1988-05-01", "07:45", "Oslo"), chart)
        .with_bio("Gardener of slow things")
}

#[tokio::test]
async fn json_profile_repository_load_missing_is_none() {
    let dir = tempdir().expect("tempdir");
    let store = JsonProfileRepository::new(dir.path());

    assert!(store.load().await.expect("load").is_none());
}

#[tokio::test]
async fn json_profile_repository_save_then_load_roundtrip() {
    let dir = tempdir().expect("tempdir");
    let store = JsonProfileRepository::new(dir.path());
    let profile = sample_profile();

    store.save(&profile).await.expect("save");
    assert!(store.path().ends_with("cosmic_user.json"));

    let loaded = store.load().await.expect("load").expect("profile exists");
    assert_eq!(loaded, profile);
}

#[tokio::test]
async fn json_profile_repository_save_overwrites_wholesale() {
    let dir = tempdir().expect("tempdir");
    let store = JsonProfileRepository::new(dir.path());

    store.save(&sample_profile()).await.expect("first save");
    let replacement = sample_profile().with_bio("New chapter");
    store.save(&replacement).await.expect("second save");

    let loaded = store.load().await.expect("load").expect("profile exists");
    assert_eq!(loaded.id(), replacement.id());
    assert_eq!(loaded.bio(), "New chapter");
}

#[tokio::test]
async fn json_profile_repository_clear_is_idempotent() {
    let dir = tempdir().expect("tempdir");
    let store = JsonProfileRepository::new(dir.path());

    store.save(&sample_profile()).await.expect("save");
    store.clear().await.expect("clear");
    assert!(store.load().await.expect("load").is_none());
    store.clear().await.expect("clearing twice is fine");
}

#[tokio::test]
async fn json_profile_repository_corrupt_file_is_storage_error() {
    let dir = tempdir().expect("tempdir");
    let store = JsonProfileRepository::new(dir.path());
    std::fs::write(store.path(), "{ not json").expect("write corrupt file");

    let err = store.load().await.expect_err("corrupt");
    assert!(err.is_storage_error());
}

#[tokio::test]
async fn json_profile_repository_failed_save_leaves_no_temp_file() {
    let dir = tempdir().expect("tempdir");
    let repo = JsonProfileRepository::new(dir.path());
    // A non-empty directory where the profile file belongs makes the rename fail.
    std::fs::create_dir_all(repo.path().join("blocker")).expect("blocking dir");

    let err = repo.save(&sample_profile()).await;
    assert!(err.is_err());
    assert!(!repo.path().with_extension("json.tmp").exists());
}
