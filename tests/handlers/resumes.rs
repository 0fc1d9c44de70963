//! Resume CRUD, ownership, and export endpoint tests

use crate::common::TestApp;

#[tokio::test]
async fn created_resume_round_trips_unchanged() {
    let app = TestApp::new().await;
    let (token, user_id, _) = app.register_user().await;

    let content = serde_json::json!({
        "name": "Jane",
        "jobTitle": "Engineer",
        "skills": "Go, SQL"
    });

    let resume_id = app
        .create_resume(&token, "My Resume", content.clone(), Some("modern"))
        .await;

    let resumes = app.list_resumes(&token).await;
    let resumes = resumes.as_array().unwrap();
    assert_eq!(resumes.len(), 1);

    let resume = &resumes[0];
    assert_eq!(resume["id"], resume_id.to_string());
    assert_eq!(resume["ownerId"], user_id.to_string());
    assert_eq!(resume["title"], "My Resume");
    assert_eq!(resume["template"], "modern");
    assert_eq!(resume["content"], content);
}

#[tokio::test]
async fn create_rejects_missing_title_or_content() {
    let app = TestApp::new().await;
    let (token, _, _) = app.register_user().await;

    for body in [
        serde_json::json!({ "content": { "name": "Jane" } }),
        serde_json::json!({ "title": "My Resume" }),
        serde_json::json!({ "title": "   ", "content": { "name": "Jane" } }),
    ] {
        let response = app
            .client
            .post(app.url("/api/resumes"))
            .bearer_auth(&token)
            .json(&body)
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 400, "body: {}", body);
    }
}

#[tokio::test]
async fn unknown_template_falls_back_to_classic() {
    let app = TestApp::new().await;
    let (token, _, _) = app.register_user().await;

    app.create_resume(
        &token,
        "My Resume",
        serde_json::json!({ "name": "Jane" }),
        Some("spaceship"),
    )
    .await;

    let resumes = app.list_resumes(&token).await;
    assert_eq!(resumes[0]["template"], "classic");
}

#[tokio::test]
async fn missing_template_defaults_to_classic() {
    let app = TestApp::new().await;
    let (token, _, _) = app.register_user().await;

    app.create_resume(&token, "My Resume", serde_json::json!({ "name": "Jane" }), None)
        .await;

    let resumes = app.list_resumes(&token).await;
    assert_eq!(resumes[0]["template"], "classic");
}

#[tokio::test]
async fn list_orders_by_most_recently_updated() {
    let app = TestApp::new().await;
    let (token, _, _) = app.register_user().await;

    let first = app
        .create_resume(&token, "First", serde_json::json!({ "name": "Jane" }), None)
        .await;
    tokio::time::sleep(std::time::Duration::from_millis(20)).await;
    let second = app
        .create_resume(&token, "Second", serde_json::json!({ "name": "Jane" }), None)
        .await;

    let resumes = app.list_resumes(&token).await;
    assert_eq!(resumes[0]["id"], second.to_string());
    assert_eq!(resumes[1]["id"], first.to_string());

    // Updating the older resume moves it to the front
    tokio::time::sleep(std::time::Duration::from_millis(20)).await;
    let response = app
        .client
        .put(app.url(&format!("/api/resumes/{}", first)))
        .bearer_auth(&token)
        .json(&serde_json::json!({
            "title": "First, revised",
            "content": { "name": "Jane" },
            "template": "minimal"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let resumes = app.list_resumes(&token).await;
    assert_eq!(resumes[0]["id"], first.to_string());
    assert_eq!(resumes[0]["title"], "First, revised");
    assert_eq!(resumes[0]["template"], "minimal");
}

#[tokio::test]
async fn update_missing_resume_returns_404() {
    let app = TestApp::new().await;
    let (token, _, _) = app.register_user().await;

    let response = app
        .client
        .put(app.url(&format!("/api/resumes/{}", uuid::Uuid::new_v4())))
        .bearer_auth(&token)
        .json(&serde_json::json!({
            "title": "Ghost",
            "content": { "name": "Jane" }
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn update_by_non_owner_is_forbidden_and_mutates_nothing() {
    let app = TestApp::new().await;
    let (owner_token, _, _) = app.register_user().await;
    let (intruder_token, _, _) = app.register_user().await;

    let resume_id = app
        .create_resume(
            &owner_token,
            "Original Title",
            serde_json::json!({ "name": "Jane" }),
            Some("modern"),
        )
        .await;

    let response = app
        .client
        .put(app.url(&format!("/api/resumes/{}", resume_id)))
        .bearer_auth(&intruder_token)
        .json(&serde_json::json!({
            "title": "Hijacked",
            "content": { "name": "Mallory" },
            "template": "creative"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 403);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["code"], "FORBIDDEN");

    // The owner's record is unchanged
    let resumes = app.list_resumes(&owner_token).await;
    assert_eq!(resumes[0]["title"], "Original Title");
    assert_eq!(resumes[0]["content"]["name"], "Jane");
    assert_eq!(resumes[0]["template"], "modern");
}

#[tokio::test]
async fn delete_by_non_owner_is_forbidden() {
    let app = TestApp::new().await;
    let (owner_token, _, _) = app.register_user().await;
    let (intruder_token, _, _) = app.register_user().await;

    let resume_id = app
        .create_resume(
            &owner_token,
            "My Resume",
            serde_json::json!({ "name": "Jane" }),
            None,
        )
        .await;

    let response = app
        .client
        .delete(app.url(&format!("/api/resumes/{}", resume_id)))
        .bearer_auth(&intruder_token)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 403);

    // Still present for the owner
    let resumes = app.list_resumes(&owner_token).await;
    assert_eq!(resumes.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn owner_can_delete_and_second_delete_is_404() {
    let app = TestApp::new().await;
    let (token, _, _) = app.register_user().await;

    let resume_id = app
        .create_resume(&token, "My Resume", serde_json::json!({ "name": "Jane" }), None)
        .await;

    let response = app
        .client
        .delete(app.url(&format!("/api/resumes/{}", resume_id)))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let resumes = app.list_resumes(&token).await;
    assert!(resumes.as_array().unwrap().is_empty());

    let again = app
        .client
        .delete(app.url(&format!("/api/resumes/{}", resume_id)))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(again.status(), 404);
}

#[tokio::test]
async fn users_only_see_their_own_resumes() {
    let app = TestApp::new().await;
    let (token_a, _, _) = app.register_user().await;
    let (token_b, _, _) = app.register_user().await;

    app.create_resume(&token_a, "A's Resume", serde_json::json!({ "name": "A" }), None)
        .await;

    let own = app.list_resumes(&token_a).await;
    assert_eq!(own.as_array().unwrap().len(), 1);

    let other = app.list_resumes(&token_b).await;
    assert!(other.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn export_returns_pdf_bytes() {
    let app = TestApp::new().await;
    let (token, _, _) = app.register_user().await;

    let resume_id = app
        .create_resume(
            &token,
            "My Resume",
            serde_json::json!({
                "name": "Jane Doe",
                "jobTitle": "Engineer",
                "summary": "Ships reliable systems.",
                "skills": "Go, SQL, Rust"
            }),
            Some("professional"),
        )
        .await;

    let response = app
        .client
        .get(app.url(&format!("/api/resumes/{}/export", resume_id)))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "application/pdf"
    );
    let disposition = response
        .headers()
        .get("content-disposition")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.contains("Jane_Doe-resume.pdf"));

    let bytes = response.bytes().await.unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[tokio::test]
async fn export_of_foreign_resume_is_forbidden() {
    let app = TestApp::new().await;
    let (owner_token, _, _) = app.register_user().await;
    let (intruder_token, _, _) = app.register_user().await;

    let resume_id = app
        .create_resume(
            &owner_token,
            "My Resume",
            serde_json::json!({ "name": "Jane" }),
            None,
        )
        .await;

    let response = app
        .client
        .get(app.url(&format!("/api/resumes/{}/export", resume_id)))
        .bearer_auth(&intruder_token)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 403);
}
