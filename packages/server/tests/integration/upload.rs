use ::common::Uid;
use server::config::UploadConfig;

use crate::common::{TestApp, metadata, routes, with, without};

mod firmware_upload {
    use super::*;

    #[tokio::test]
    async fn upload_schedules_analysis() {
        let app = TestApp::spawn().await;

        let res = app
            .upload(&metadata(), Some("image.bin"), b"FIRMWARE".to_vec())
            .await;

        assert_eq!(res.status, 201, "{}", res.text);
        let uid = Uid::compute(b"FIRMWARE");
        assert_eq!(res.body["uid"].as_str().unwrap(), uid.as_str());
        assert_eq!(res.body["file_name"].as_str().unwrap(), "image.bin");
        assert_eq!(
            res.body["requested_analysis_systems"],
            serde_json::json!(["file_type", "crypto_material"])
        );
        assert_eq!(app.backend.len(), 1);
        assert_eq!(app.backend.binary_size(&uid), Some(8));
    }

    #[tokio::test]
    async fn uid_has_digest_and_length() {
        let app = TestApp::spawn().await;

        let uid = app.create_firmware(&[0u8; 300]).await;

        let (digest, size) = uid.rsplit_once('_').unwrap();
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
        assert_eq!(size, "300");
    }

    #[tokio::test]
    async fn identical_content_yields_identical_uid() {
        let app = TestApp::spawn().await;

        let first = app.create_firmware(b"same image").await;
        let second = app.create_firmware(b"same image").await;

        assert_eq!(first, second);
        assert_eq!(app.backend.len(), 1);
    }

    #[tokio::test]
    async fn stored_metadata_matches_form() {
        let app = TestApp::spawn().await;
        let uid = app.create_firmware(b"image").await;

        let res = app.get(&routes::firmware(&uid)).await;

        assert_eq!(res.status, 200, "{}", res.text);
        assert_eq!(res.body["uid"].as_str().unwrap(), uid);
        assert_eq!(res.body["device_name"].as_str().unwrap(), "FRITZ!Box 7490");
        assert_eq!(res.body["device_part"].as_str().unwrap(), "kernel");
        assert_eq!(res.body["device_class"].as_str().unwrap(), "Router");
        assert_eq!(res.body["vendor"].as_str().unwrap(), "AVM");
        assert_eq!(res.body["version"].as_str().unwrap(), "7.29");
        assert_eq!(res.body["release_date"].as_str().unwrap(), "2021-06-01");
        assert_eq!(res.body["tags"], serde_json::json!(["lab", "stable"]));
        assert_eq!(
            res.body["scheduled_analysis"],
            serde_json::json!(["file_type", "crypto_material"])
        );
    }

    #[tokio::test]
    async fn upload_leaves_no_temporary_files() {
        let app = TestApp::spawn().await;

        app.create_firmware(b"image").await;

        assert_eq!(app.leftover_uploads(), 0);
    }

    #[tokio::test]
    async fn part_without_file_name_is_recorded_as_no_name() {
        let app = TestApp::spawn().await;

        let res = app.upload(&metadata(), None, b"image".to_vec()).await;

        assert_eq!(res.status, 201, "{}", res.text);
        assert_eq!(res.body["file_name"].as_str().unwrap(), "no name");
    }
}

mod form_defaults {
    use super::*;

    #[tokio::test]
    async fn dropdown_value_fills_empty_field() {
        let app = TestApp::spawn().await;
        let fields = with(with(metadata(), "vendor", ""), "vendor_dropdown", "Netgear");

        let res = app.upload(&fields, Some("a.bin"), b"a".to_vec()).await;
        assert_eq!(res.status, 201, "{}", res.text);

        let uid = res.body["uid"].as_str().unwrap();
        let fw = app.get(&routes::firmware(uid)).await;
        assert_eq!(fw.body["vendor"].as_str().unwrap(), "Netgear");
    }

    #[tokio::test]
    async fn new_entry_dropdown_keeps_field_empty() {
        let app = TestApp::spawn().await;
        let fields = with(
            with(metadata(), "device_class", ""),
            "device_class_dropdown",
            "new entry",
        );

        let res = app.upload(&fields, Some("a.bin"), b"a".to_vec()).await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"].as_str().unwrap(), "INVALID_TASK");
        assert_eq!(
            res.body["fields"]["device_class"].as_str().unwrap(),
            "Please specify the device class"
        );
    }

    #[tokio::test]
    async fn empty_release_date_defaults_to_epoch() {
        let app = TestApp::spawn().await;
        let fields = with(metadata(), "release_date", "");

        let res = app.upload(&fields, Some("a.bin"), b"a".to_vec()).await;
        assert_eq!(res.status, 201, "{}", res.text);

        let uid = res.body["uid"].as_str().unwrap();
        let fw = app.get(&routes::firmware(uid)).await;
        assert_eq!(fw.body["release_date"].as_str().unwrap(), "1970-01-01");
    }

    #[tokio::test]
    async fn tags_are_split_on_commas() {
        let app = TestApp::spawn().await;
        let fields = with(metadata(), "tags", "a,b,c");

        let res = app.upload(&fields, Some("a.bin"), b"a".to_vec()).await;
        let uid = res.body["uid"].as_str().unwrap();
        let fw = app.get(&routes::firmware(uid)).await;

        assert_eq!(fw.body["tags"], serde_json::json!(["a", "b", "c"]));
    }

    #[tokio::test]
    async fn empty_tags_and_device_part_are_accepted() {
        let app = TestApp::spawn().await;
        let fields = with(with(metadata(), "tags", ""), "device_part", "");

        let res = app.upload(&fields, Some("a.bin"), b"a".to_vec()).await;
        assert_eq!(res.status, 201, "{}", res.text);

        let uid = res.body["uid"].as_str().unwrap();
        let fw = app.get(&routes::firmware(uid)).await;
        assert_eq!(fw.body["tags"], serde_json::json!([]));
        assert_eq!(fw.body["device_part"].as_str().unwrap(), "");
    }
}

mod rejected_uploads {
    use super::*;

    #[tokio::test]
    async fn missing_form_field_is_a_validation_error() {
        let app = TestApp::spawn().await;
        let fields = without(metadata(), "version");

        let res = app.upload(&fields, Some("a.bin"), b"a".to_vec()).await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"].as_str().unwrap(), "VALIDATION_ERROR");
        assert!(res.body["message"].as_str().unwrap().contains("version"));
        assert!(app.backend.is_empty());
    }

    #[tokio::test]
    async fn upload_without_file_reports_binary_and_uid() {
        let app = TestApp::spawn().await;

        let res = app.upload_without_file(&metadata()).await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"].as_str().unwrap(), "INVALID_TASK");
        assert_eq!(
            res.body["fields"]["binary"].as_str().unwrap(),
            "Please specify the binary"
        );
        assert_eq!(
            res.body["fields"]["uid"].as_str().unwrap(),
            "Please specify the uid"
        );
    }

    #[tokio::test]
    async fn unselected_file_counts_as_no_upload() {
        let app = TestApp::spawn().await;

        let res = app.upload(&metadata(), Some(""), Vec::new()).await;

        assert_eq!(res.status, 400);
        assert!(res.body["fields"]["binary"].is_string());
    }

    #[tokio::test]
    async fn empty_file_is_rejected() {
        let app = TestApp::spawn().await;

        let res = app.upload(&metadata(), Some("empty.bin"), Vec::new()).await;

        assert_eq!(res.status, 400);
        assert!(res.body["fields"]["binary"].is_string());
        assert!(res.body["fields"]["uid"].is_string());
        assert!(res.body["fields"]["file_name"].is_null());
    }

    #[tokio::test]
    async fn oversized_file_is_dropped_and_cleaned_up() {
        let app = TestApp::spawn_with(UploadConfig {
            max_file_size: 8,
            ..UploadConfig::default()
        })
        .await;

        let res = app
            .upload(&metadata(), Some("big.bin"), vec![0xAA; 64])
            .await;

        assert_eq!(res.status, 400, "{}", res.text);
        assert!(res.body["fields"]["binary"].is_string());
        assert_eq!(app.leftover_uploads(), 0);
        assert!(app.backend.is_empty());
    }

    #[tokio::test]
    async fn empty_vendor_is_reported_with_message() {
        let app = TestApp::spawn().await;
        let fields = with(metadata(), "vendor", "");

        let res = app.upload(&fields, Some("a.bin"), b"a".to_vec()).await;

        assert_eq!(res.status, 400);
        assert_eq!(
            res.body["fields"]["vendor"].as_str().unwrap(),
            "Please specify the vendor"
        );
        assert_eq!(res.body["fields"].as_object().unwrap().len(), 1);
    }
}
