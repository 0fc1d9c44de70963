//! Job application CRUD and ownership endpoint tests

use crate::common::TestApp;

#[tokio::test]
async fn create_applies_defaults() {
    let app = TestApp::new().await;
    let (token, user_id, _) = app.register_user().await;

    let job_id = app
        .create_job(
            &token,
            serde_json::json!({ "company": "Acme", "role": "Engineer" }),
        )
        .await;

    let jobs = app.list_jobs(&token).await;
    let jobs = jobs.as_array().unwrap();
    assert_eq!(jobs.len(), 1);

    let job = &jobs[0];
    assert_eq!(job["id"], job_id.to_string());
    assert_eq!(job["ownerId"], user_id.to_string());
    assert_eq!(job["company"], "Acme");
    assert_eq!(job["role"], "Engineer");
    assert_eq!(job["status"], "Applied");
    assert_eq!(job["notes"], "");
    assert_eq!(
        job["appliedDate"],
        chrono::Utc::now().date_naive().to_string()
    );
}

#[tokio::test]
async fn create_rejects_missing_company_or_role() {
    let app = TestApp::new().await;
    let (token, _, _) = app.register_user().await;

    for body in [
        serde_json::json!({ "role": "Engineer" }),
        serde_json::json!({ "company": "Acme" }),
        serde_json::json!({ "company": "", "role": "Engineer" }),
    ] {
        let response = app
            .client
            .post(app.url("/api/jobs"))
            .bearer_auth(&token)
            .json(&body)
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 400, "body: {}", body);
    }
}

#[tokio::test]
async fn create_rejects_unknown_status() {
    let app = TestApp::new().await;
    let (token, _, _) = app.register_user().await;

    let response = app
        .client
        .post(app.url("/api/jobs"))
        .bearer_auth(&token)
        .json(&serde_json::json!({
            "company": "Acme",
            "role": "Engineer",
            "status": "Ghosted"
        }))
        .send()
        .await
        .unwrap();

    assert!(
        response.status().is_client_error(),
        "unknown status must be rejected, got {}",
        response.status()
    );
}

#[tokio::test]
async fn listing_preserves_statuses_and_orders_by_recency() {
    let app = TestApp::new().await;
    let (token, _, _) = app.register_user().await;

    for status in ["Applied", "Interview", "Offer"] {
        app.create_job(
            &token,
            serde_json::json!({
                "company": format!("{} Corp", status),
                "role": "Engineer",
                "status": status
            }),
        )
        .await;
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
    }

    let jobs = app.list_jobs(&token).await;
    let jobs = jobs.as_array().unwrap();
    assert_eq!(jobs.len(), 3);

    // Most recently created first
    assert_eq!(jobs[0]["status"], "Offer");
    assert_eq!(jobs[1]["status"], "Interview");
    assert_eq!(jobs[2]["status"], "Applied");
}

#[tokio::test]
async fn update_changes_status_and_fields() {
    let app = TestApp::new().await;
    let (token, _, _) = app.register_user().await;

    let job_id = app
        .create_job(
            &token,
            serde_json::json!({ "company": "Acme", "role": "Engineer" }),
        )
        .await;

    let response = app
        .client
        .put(app.url(&format!("/api/jobs/{}", job_id)))
        .bearer_auth(&token)
        .json(&serde_json::json!({
            "company": "Acme",
            "role": "Senior Engineer",
            "status": "Interview",
            "notes": "Phone screen on Friday",
            "appliedDate": "2026-08-01"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);

    let jobs = app.list_jobs(&token).await;
    let job = &jobs[0];
    assert_eq!(job["role"], "Senior Engineer");
    assert_eq!(job["status"], "Interview");
    assert_eq!(job["notes"], "Phone screen on Friday");
    assert_eq!(job["appliedDate"], "2026-08-01");
}

#[tokio::test]
async fn update_missing_job_returns_404() {
    let app = TestApp::new().await;
    let (token, _, _) = app.register_user().await;

    let response = app
        .client
        .put(app.url(&format!("/api/jobs/{}", uuid::Uuid::new_v4())))
        .bearer_auth(&token)
        .json(&serde_json::json!({
            "company": "Acme",
            "role": "Engineer",
            "status": "Applied"
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

    let job_id = app
        .create_job(
            &owner_token,
            serde_json::json!({ "company": "Acme", "role": "Engineer" }),
        )
        .await;

    let response = app
        .client
        .put(app.url(&format!("/api/jobs/{}", job_id)))
        .bearer_auth(&intruder_token)
        .json(&serde_json::json!({
            "company": "Evil Corp",
            "role": "Mole",
            "status": "Offer"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 403);

    let jobs = app.list_jobs(&owner_token).await;
    assert_eq!(jobs[0]["company"], "Acme");
    assert_eq!(jobs[0]["status"], "Applied");
}

#[tokio::test]
async fn delete_by_non_owner_is_forbidden() {
    let app = TestApp::new().await;
    let (owner_token, _, _) = app.register_user().await;
    let (intruder_token, _, _) = app.register_user().await;

    let job_id = app
        .create_job(
            &owner_token,
            serde_json::json!({ "company": "Acme", "role": "Engineer" }),
        )
        .await;

    let response = app
        .client
        .delete(app.url(&format!("/api/jobs/{}", job_id)))
        .bearer_auth(&intruder_token)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 403);

    let jobs = app.list_jobs(&owner_token).await;
    assert_eq!(jobs.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn owner_can_delete_and_second_delete_is_404() {
    let app = TestApp::new().await;
    let (token, _, _) = app.register_user().await;

    let job_id = app
        .create_job(
            &token,
            serde_json::json!({ "company": "Acme", "role": "Engineer" }),
        )
        .await;

    let response = app
        .client
        .delete(app.url(&format!("/api/jobs/{}", job_id)))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let again = app
        .client
        .delete(app.url(&format!("/api/jobs/{}", job_id)))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(again.status(), 404);
}

#[tokio::test]
async fn users_only_see_their_own_jobs() {
    let app = TestApp::new().await;
    let (token_a, _, _) = app.register_user().await;
    let (token_b, _, _) = app.register_user().await;

    app.create_job(
        &token_a,
        serde_json::json!({ "company": "Acme", "role": "Engineer" }),
    )
    .await;

    assert_eq!(app.list_jobs(&token_a).await.as_array().unwrap().len(), 1);
    assert!(app.list_jobs(&token_b).await.as_array().unwrap().is_empty());
}
