//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance with the portal schema applied
//! - Environment variables: DATABASE_URL (JWT_SECRET optional)
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;

/// Register a fresh user and return (request, auth)
async fn register_user(server: &TestServer) -> (RegisterRequest, AuthResponse) {
    let request = RegisterRequest::unique();
    let response = server.post("/auth/register", &request).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    (request, auth)
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get_root("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .get_root("/health/ready")
        .await
        .expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_user() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (request, auth) = register_user(&server).await;

    assert_eq!(auth.user.email, request.email);
    assert_eq!(auth.user.role, "student");
    assert_eq!(auth.token_type, "Bearer");
    assert!(auth.expires_in > 0);
    assert!(!auth.access_token.is_empty());
    assert!(!auth.refresh_token.is_empty());
}

#[tokio::test]
async fn test_register_duplicate_email() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    // First registration
    server.post("/auth/register", &request).await.unwrap();

    // Second registration with same email
    let response = server.post("/auth/register", &request).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_login() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, _) = register_user(&server).await;

    let login_req = LoginRequest::from_register(&register_req);
    let response = server.post("/auth/login", &login_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(auth.user.email, register_req.email);
    assert!(!auth.access_token.is_empty());
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let login_req = LoginRequest {
        email: "nonexistent@example.com".to_string(),
        password: "wrongpass".to_string(),
    };

    let response = server.post("/auth/login", &login_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_refresh_token() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_user(&server).await;

    let refresh_req = RefreshTokenRequest {
        refresh_token: auth.refresh_token,
    };
    let response = server.post("/auth/refresh", &refresh_req).await.unwrap();
    let refreshed: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(refreshed.user.id, auth.user.id);
    assert!(!refreshed.access_token.is_empty());
}

#[tokio::test]
async fn test_me_requires_auth() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/auth/me").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_me_returns_profile() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (request, auth) = register_user(&server).await;

    let response = server.get_auth("/auth/me", &auth.access_token).await.unwrap();
    let me: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(me.id, auth.user.id);
    assert_eq!(me.email, request.email);
}

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
async fn test_directory_excludes_caller() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, ana) = register_user(&server).await;
    let (_, bruno) = register_user(&server).await;

    let response = server
        .get_auth("/users/directory", &ana.access_token)
        .await
        .unwrap();
    let directory: Vec<UserResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(directory.iter().all(|u| u.id != ana.user.id));
    assert!(directory.iter().any(|u| u.id == bruno.user.id));
}

#[tokio::test]
async fn test_full_user_listing_is_staff_only() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_user(&server).await;

    let response = server.get_auth("/users", &auth.access_token).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_account_management_is_gated() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, ana) = register_user(&server).await;
    let (_, bruno) = register_user(&server).await;

    let path = format!("/users/{}", bruno.user.id);

    // Students can neither edit nor delete other accounts
    let update = serde_json::json!({ "role": "admin" });
    let response = server
        .patch_auth(&path, &ana.access_token, &update)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server.delete_auth(&path, &ana.access_token).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_update_profile() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_user(&server).await;

    let update = serde_json::json!({
        "full_name": "Updated Name",
        "phone": "+5511999990000"
    });
    let response = server
        .patch_auth("/users/@me", &auth.access_token, &update)
        .await
        .unwrap();
    let updated: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(updated.full_name, "Updated Name");
    assert_eq!(updated.phone.as_deref(), Some("+5511999990000"));
}

// ============================================================================
// Messaging Tests
// ============================================================================

#[tokio::test]
async fn test_send_message_and_list_conversations() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, ana) = register_user(&server).await;
    let (_, bruno) = register_user(&server).await;

    let request = SendMessageRequest::to_user(bruno.user.id, "Oi Bruno");
    let response = server
        .post_auth("/messages", &ana.access_token, &request)
        .await
        .unwrap();
    let sent: MessageResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(sent.sender_id, ana.user.id);
    assert_eq!(sent.receiver_id, Some(bruno.user.id));
    assert!(!sent.is_sms);

    // Bruno's inbox shows one conversation with one unread message
    let response = server
        .get_auth("/conversations", &bruno.access_token)
        .await
        .unwrap();
    let conversations: Vec<ConversationResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();

    let convo = conversations
        .iter()
        .find(|c| c.counterpart_id == ana.user.id)
        .expect("conversation with sender");
    assert_eq!(convo.unread_count, 1);
    assert_eq!(
        convo.last_message.as_ref().map(|m| m.content.as_str()),
        Some("Oi Bruno")
    );
}

#[tokio::test]
async fn test_send_message_by_email() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, ana) = register_user(&server).await;
    let (bruno_req, bruno) = register_user(&server).await;

    let request = SendMessageRequest::to_email(&bruno_req.email, "Oi por email");
    let response = server
        .post_auth("/messages", &ana.access_token, &request)
        .await
        .unwrap();
    let sent: MessageResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(sent.receiver_id, Some(bruno.user.id));
}

#[tokio::test]
async fn test_send_message_unknown_recipient() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, ana) = register_user(&server).await;

    let request = SendMessageRequest::to_email("nobody@example.com", "Oi?");
    let response = server
        .post_auth("/messages", &ana.access_token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_open_thread_marks_messages_read() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, ana) = register_user(&server).await;
    let (_, bruno) = register_user(&server).await;

    for content in ["primeira", "segunda"] {
        let request = SendMessageRequest::to_user(bruno.user.id, content);
        server
            .post_auth("/messages", &ana.access_token, &request)
            .await
            .unwrap();
    }

    let path = format!("/conversations/{}", ana.user.id);
    let response = server.get_auth(&path, &bruno.access_token).await.unwrap();
    let thread: ThreadResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(thread.counterpart_id, ana.user.id);
    assert_eq!(thread.messages.len(), 2);
    assert_eq!(thread.marked_read, 2);

    // Opening again flips nothing
    let response = server.get_auth(&path, &bruno.access_token).await.unwrap();
    let thread: ThreadResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(thread.marked_read, 0);
}

#[tokio::test]
async fn test_delete_message_sender_only() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, ana) = register_user(&server).await;
    let (_, bruno) = register_user(&server).await;

    let request = SendMessageRequest::to_user(bruno.user.id, "para apagar");
    let response = server
        .post_auth("/messages", &ana.access_token, &request)
        .await
        .unwrap();
    let sent: MessageResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let path = format!("/messages/{}", sent.id);

    // Receiver cannot delete
    let response = server.delete_auth(&path, &bruno.access_token).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    // Sender can
    let response = server.delete_auth(&path, &ana.access_token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}

#[tokio::test]
async fn test_message_receipt_creates_notification() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, ana) = register_user(&server).await;
    let (_, bruno) = register_user(&server).await;

    let request = SendMessageRequest::to_user(bruno.user.id, "com notificação");
    server
        .post_auth("/messages", &ana.access_token, &request)
        .await
        .unwrap();

    let response = server
        .get_auth("/notifications/unread-count", &bruno.access_token)
        .await
        .unwrap();
    let count: UnreadCountResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(count.unread, 1);

    let response = server
        .get_auth("/notifications", &bruno.access_token)
        .await
        .unwrap();
    let notifications: Vec<NotificationResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].title, "Nova Mensagem");
    assert_eq!(notifications[0].sender_id, Some(ana.user.id));

    // Mark all read clears the badge
    let response = server
        .post_auth_empty("/notifications/read-all", &bruno.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .get_auth("/notifications/unread-count", &bruno.access_token)
        .await
        .unwrap();
    let count: UnreadCountResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(count.unread, 0);
}

// ============================================================================
// Document Tests
// ============================================================================

// "portal test" base64-encoded
const SAMPLE_CONTENT: &str = "cG9ydGFsIHRlc3Q=";

#[tokio::test]
async fn test_list_document_types() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_user(&server).await;

    let response = server
        .get_auth("/documents/types", &auth.access_token)
        .await
        .unwrap();
    let types: Vec<DocumentTypeResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!types.is_empty());
}

#[tokio::test]
async fn test_submit_document() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_user(&server).await;

    let response = server
        .get_auth("/documents/types", &auth.access_token)
        .await
        .unwrap();
    let types: Vec<DocumentTypeResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    let type_id = types.first().expect("at least one document type").id;

    let request = SubmitDocumentRequest::pdf(type_id, SAMPLE_CONTENT);
    let response = server
        .post_auth("/documents", &auth.access_token, &request)
        .await
        .unwrap();
    let document: DocumentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(document.user_id, auth.user.id);
    assert_eq!(document.status, "pending");
    assert_eq!(document.file_hash.len(), 64);

    // Shows up in the owner's listing
    let response = server
        .get_auth("/documents", &auth.access_token)
        .await
        .unwrap();
    let documents: Vec<DocumentResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(documents.iter().any(|d| d.id == document.id));
}

#[tokio::test]
async fn test_submit_document_rejects_bad_base64() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_user(&server).await;

    let request = SubmitDocumentRequest::pdf(1, "not@valid@base64!!!");
    let response = server
        .post_auth("/documents", &auth.access_token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_review_is_staff_only() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_user(&server).await;

    let request = SubmitDocumentRequest::pdf(1, SAMPLE_CONTENT);
    let response = server
        .post_auth("/documents", &auth.access_token, &request)
        .await
        .unwrap();
    let document: DocumentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Submitting student cannot review their own document
    let path = format!("/documents/{}/review", document.id);
    let response = server
        .post_auth(&path, &auth.access_token, &ReviewDocumentRequest::approve())
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_compliance_reports_missing_required_types() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_user(&server).await;

    // Pending submissions never count toward compliance
    let request = SubmitDocumentRequest::pdf(1, SAMPLE_CONTENT);
    server
        .post_auth("/documents", &auth.access_token, &request)
        .await
        .unwrap();

    let response = server
        .get_auth("/documents/compliance", &auth.access_token)
        .await
        .unwrap();
    let compliance: ComplianceResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(compliance.satisfied.is_empty());
    assert!(!compliance.compliant);
}

// ============================================================================
// Announcement Tests
// ============================================================================

#[tokio::test]
async fn test_announcement_creation_is_staff_only() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_user(&server).await;

    let request = serde_json::json!({
        "title": "Aviso",
        "content": "Conteúdo do aviso"
    });
    let response = server
        .post_auth("/announcements", &auth.access_token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_announcement_listing_for_new_user() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_user(&server).await;

    let response = server
        .get_auth("/announcements", &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Support Ticket Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_list_tickets() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_user(&server).await;

    let request = CreateTicketRequest::unique();
    let response = server
        .post_auth("/tickets", &auth.access_token, &request)
        .await
        .unwrap();
    let ticket: TicketResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(ticket.user_id, auth.user.id);
    assert_eq!(ticket.status, "open");
    assert!(ticket.assigned_to.is_none());

    let response = server.get_auth("/tickets", &auth.access_token).await.unwrap();
    let tickets: Vec<TicketResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(tickets.iter().any(|t| t.id == ticket.id));
}

#[tokio::test]
async fn test_ticket_update_is_staff_only() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_user(&server).await;

    let request = CreateTicketRequest::unique();
    let response = server
        .post_auth("/tickets", &auth.access_token, &request)
        .await
        .unwrap();
    let ticket: TicketResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let update = UpdateTicketRequest {
        status: "resolved".to_string(),
        assigned_to: None,
    };
    let path = format!("/tickets/{}", ticket.id);
    let response = server
        .patch_auth(&path, &auth.access_token, &update)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

// ============================================================================
// Audit Tests
// ============================================================================

#[tokio::test]
async fn test_audit_listing_is_admin_only() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_user(&server).await;

    let response = server
        .get_auth("/audit-logs", &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

// ============================================================================
// SMS Relay Stub Tests
// ============================================================================

#[tokio::test]
async fn test_sms_stub_records_send() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let request = SmsStubRequest {
        phone: Some("+5511999990000".to_string()),
        message: Some("Seu documento foi aprovado".to_string()),
        kind: Some("document".to_string()),
    };
    let response = server.post("/sms/send", &request).await.unwrap();
    let sent: SmsSendResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(sent.success);
}

#[tokio::test]
async fn test_sms_stub_requires_phone_and_message() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let request = SmsStubRequest {
        phone: Some("+5511999990000".to_string()),
        message: None,
        kind: None,
    };
    let response = server.post("/sms/send", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST)
        .await
        .unwrap();
}
