use groom_estimate::core::InquirySink;
use groom_estimate::{
    load_catalog, CatalogLoader, Estimator, EstimatorError, EstimatorSettings, FileSink,
    HttpCatalogSource, LocalStorage, MailtoMessage,
};
use httpmock::prelude::*;
use std::time::Duration;
use tempfile::TempDir;

const BREEDS: &str = r#"[
    {"breed": "Poodle", "prices": {"bath_brush": 45, "cut_style": 85}},
    {"breed": "Beagle", "prices": {"bath_brush": 40}}
]"#;

const ADDONS: &str = r#"[
    {"addon": "Nail Trim", "prices": [10]},
    {"addon": "Teeth Brushing", "prices": [12, 15]}
]"#;

fn catalog_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("breeds.json"), BREEDS).unwrap();
    std::fs::write(dir.path().join("addons.json"), ADDONS).unwrap();
    dir
}

#[tokio::test]
async fn test_end_to_end_over_http() {
    let server = MockServer::start_async().await;
    let breeds_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/estimator/breeds.json");
            then.status(200)
                .header("Content-Type", "application/json")
                .body(BREEDS);
        })
        .await;
    let addons_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/estimator/addons.json");
            then.status(200)
                .header("Content-Type", "application/json")
                .body(ADDONS);
        })
        .await;

    let settings = EstimatorSettings {
        catalog_location: server.url("/estimator"),
        ..EstimatorSettings::default()
    };

    let mut estimator = Estimator::new(load_catalog(&settings).await.unwrap());
    breeds_mock.assert_async().await;
    addons_mock.assert_async().await;

    estimator.select_breed("Poodle");
    estimator.select_service("bath_brush");
    estimator.toggle_addon("Nail Trim");

    assert_eq!(estimator.displayed_total(), "Estimated total: $55.00");
    assert_eq!(estimator.breed_options(), vec!["Poodle", "Beagle"]);
}

#[tokio::test]
async fn test_http_failure_leaves_no_catalog() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/breeds.json");
            then.status(200).body(BREEDS);
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/addons.json");
            then.status(500);
        })
        .await;

    let source = HttpCatalogSource::new(&server.base_url(), Duration::from_secs(5)).unwrap();
    let loader = CatalogLoader::new(source, "breeds.json", "addons.json");

    let err = loader.load_estimator().await.unwrap_err();
    assert!(matches!(
        err,
        EstimatorError::CatalogStatusError { status: 500, .. }
    ));
}

#[tokio::test]
async fn test_local_directory_catalog() {
    let dir = catalog_dir();
    let settings = EstimatorSettings {
        catalog_location: dir.path().to_str().unwrap().to_string(),
        ..EstimatorSettings::default()
    };

    let catalog = load_catalog(&settings).await.unwrap();
    assert_eq!(catalog.base_price("Beagle", "bath_brush"), Some(40.0));
    assert_eq!(catalog.base_price("Beagle", "cut_style"), None);
    assert_eq!(catalog.addon_price("Teeth Brushing"), Some(12.0));
}

#[tokio::test]
async fn test_malformed_local_catalog_is_rejected() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("breeds.json"), "not json").unwrap();
    std::fs::write(dir.path().join("addons.json"), ADDONS).unwrap();

    let storage = LocalStorage::new(dir.path().to_str().unwrap().to_string());
    let err = CatalogLoader::new(storage, "breeds.json", "addons.json")
        .load()
        .await
        .unwrap_err();
    assert!(matches!(err, EstimatorError::SerializationError(_)));
}

#[tokio::test]
async fn test_inquiry_saved_to_output_dir() {
    let dir = catalog_dir();
    let out = TempDir::new().unwrap();
    let storage = LocalStorage::new(dir.path().to_str().unwrap().to_string());

    let mut estimator = CatalogLoader::new(storage, "breeds.json", "addons.json")
        .load_estimator()
        .await
        .unwrap();
    estimator.select_breed("Poodle");
    estimator.select_service("cut_style");
    estimator.toggle_addon("Teeth Brushing");
    estimator.set_notes("First visit");

    let settings = EstimatorSettings::default();
    let message = MailtoMessage::new(
        &settings.recipient,
        &settings.subject,
        &estimator.build_inquiry(),
    );
    let sink = FileSink::new(LocalStorage::new(out.path().to_str().unwrap().to_string()));
    let path = sink.deliver(&message).await.unwrap();

    let saved = std::fs::read_to_string(path).unwrap();
    assert_eq!(
        saved,
        "To: reston@mollysdogcare.com\n\
         Subject: Grooming Estimate Request\n\
         \n\
         Breed: Poodle\n\
         Service: Cut & Style\n\
         Add\u{2011}ons: Teeth Brushing\n\
         Notes: First visit\n\
         Quote: $97.00\n"
    );
    assert!(message.to_link().contains("Quote%3A%20%2497.00"));
}
