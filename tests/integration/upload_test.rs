//! Integration tests for CV and image uploads.

mod helpers;

use std::io::Cursor;

use axum::http::StatusCode;
use image::{ColorType, ImageFormat, Rgba, RgbaImage};

use helpers::{Part, multipart_body};

fn transparent_png() -> Vec<u8> {
    let img = RgbaImage::from_fn(8, 8, |x, _| {
        if x < 4 {
            Rgba([200, 30, 30, 0])
        } else {
            Rgba([30, 30, 200, 128])
        }
    });
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png)
        .expect("encode png");
    out.into_inner()
}

#[tokio::test]
async fn test_upload_cv_records_metadata() {
    let app = helpers::TestApp::new().await;

    let body = multipart_body(&[
        Part::File {
            filename: "resume.pdf",
            content_type: "application/pdf",
            data: b"%PDF-1.4 test",
        },
        Part::Text {
            name: "uploaded_by",
            value: "jane",
        },
    ]);
    let response = app.upload("/api/upload/cv", body).await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body["message"], "CV uploaded successfully");
    assert_eq!(response.body["original_name"], "resume.pdf");
    assert_eq!(response.body["file_size"], 13);

    let list = app.request("GET", "/api/uploads", None).await;
    let records = list.body.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["uploaded_by"], "jane");
    assert_eq!(records[0]["file_type"], "application/pdf");

    let saved_name = records[0]["saved_name"].as_str().unwrap();
    assert!(saved_name.ends_with(".pdf"));
    let on_disk = std::fs::read(app.state.uploads.root().join(saved_name)).unwrap();
    assert_eq!(on_disk, b"%PDF-1.4 test");

    let served = app.request("GET", &format!("/uploads/{saved_name}"), None).await;
    assert_eq!(served.status, StatusCode::OK);
    assert_eq!(served.bytes, b"%PDF-1.4 test");
}

#[tokio::test]
async fn test_upload_cv_uploader_from_query() {
    let app = helpers::TestApp::new().await;

    let body = multipart_body(&[Part::File {
        filename: "notes",
        content_type: "text/plain",
        data: b"hello",
    }]);
    let response = app.upload("/api/upload/cv?uploaded_by=sam", body).await;
    assert_eq!(response.status, StatusCode::OK);

    let list = app.request("GET", "/api/uploads", None).await;
    let record = &list.body.as_array().unwrap()[0];
    assert_eq!(record["uploaded_by"], "sam");
    assert!(record["saved_name"].as_str().unwrap().ends_with(".txt"));
}

#[tokio::test]
async fn test_upload_cv_defaults_to_anonymous() {
    let app = helpers::TestApp::new().await;

    let body = multipart_body(&[Part::File {
        filename: "cv.txt",
        content_type: "text/plain",
        data: b"hello",
    }]);
    app.upload("/api/upload/cv", body).await;

    let list = app.request("GET", "/api/uploads", None).await;
    assert_eq!(list.body[0]["uploaded_by"], "anonymous");
}

#[tokio::test]
async fn test_disallowed_cv_type_adds_no_record() {
    let app = helpers::TestApp::new().await;

    let body = multipart_body(&[Part::File {
        filename: "payload.exe",
        content_type: "application/x-msdownload",
        data: b"MZ",
    }]);
    let response = app.upload("/api/upload/cv", body).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["detail"],
        "File type not allowed. Please upload PDF, DOC, DOCX, or TXT files."
    );

    let list = app.request("GET", "/api/uploads", None).await;
    assert!(list.body.as_array().unwrap().is_empty());
    assert_eq!(
        std::fs::read_dir(app.state.uploads.root()).unwrap().count(),
        0
    );
}

#[tokio::test]
async fn test_missing_file_rejected() {
    let app = helpers::TestApp::new().await;

    let body = multipart_body(&[Part::Text {
        name: "uploaded_by",
        value: "jane",
    }]);
    let response = app.upload("/api/upload/cv", body).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["detail"], "No file provided");

    let response = app
        .request_raw("POST", "/api/upload/image", "text/plain", b"nothing".to_vec())
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["detail"], "No file provided");
}

#[tokio::test]
async fn test_upload_image_flattens_transparency() {
    let app = helpers::TestApp::new().await;

    let png = transparent_png();
    let body = multipart_body(&[Part::File {
        filename: "logo.png",
        content_type: "image/png",
        data: &png,
    }]);
    let response = app.upload("/api/upload/image", body).await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(
        response.body["message"],
        "Image uploaded and converted to JPEG successfully"
    );
    let filename = response.body["filename"].as_str().unwrap();
    assert!(filename.ends_with(".jpeg"));
    assert_eq!(response.body["url"], format!("/images/{filename}"));

    let stored = std::fs::read(app.state.images.root().join(filename)).unwrap();
    assert_eq!(image::guess_format(&stored).unwrap(), ImageFormat::Jpeg);
    let decoded = image::load_from_memory(&stored).unwrap();
    assert_eq!(decoded.color(), ColorType::Rgb8);
    assert_eq!((decoded.width(), decoded.height()), (8, 8));

    let served = app.request("GET", &format!("/images/{filename}"), None).await;
    assert_eq!(served.status, StatusCode::OK);
    assert_eq!(served.bytes, stored);
}

#[tokio::test]
async fn test_upload_image_rejects_bad_input() {
    let app = helpers::TestApp::new().await;

    let body = multipart_body(&[Part::File {
        filename: "doc.pdf",
        content_type: "application/pdf",
        data: b"%PDF",
    }]);
    let response = app.upload("/api/upload/image", body).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["detail"],
        "File type not allowed. Please upload image files."
    );

    let body = multipart_body(&[Part::File {
        filename: "broken.png",
        content_type: "image/png",
        data: b"definitely not a png",
    }]);
    let response = app.upload("/api/upload/image", body).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["detail"], "Invalid image data");
}
