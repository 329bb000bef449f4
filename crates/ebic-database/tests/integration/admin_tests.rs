use serde_json::json;

use ebic_database::repositories::AdminRepository;
use ebic_entity::notification::AdminNotificationPreferences;
use ebic_entity::user::Permission;
use uuid::Uuid;

use super::common::{create_role, create_test_pool, create_user};

#[tokio::test]
#[ignore]
async fn test_find_by_email_aggregates_role_grants() {
    let pool = create_test_pool().await;
    let role = create_role(&pool, &[("dashboard", "manage"), ("collaborators", "read")]).await;
    let user = create_user(&pool, Some(role), true, None).await;
    let repo = AdminRepository::new(pool);

    let admin = repo
        .find_by_email(&user.email.to_uppercase())
        .await
        .expect("query")
        .expect("admin exists");

    assert_eq!(admin.id, user.id);
    assert!(admin.role_name.is_some());
    assert_eq!(admin.permissions.len(), 2);
    assert!(admin.permissions.contains(&Permission::new("dashboard", "manage")));
    assert!(admin.permissions.contains(&Permission::new("collaborators", "read")));
    assert!(admin.notification_preferences.is_none());
}

#[tokio::test]
#[ignore]
async fn test_user_without_role_has_no_permissions() {
    let pool = create_test_pool().await;
    let user = create_user(&pool, None, true, None).await;
    let repo = AdminRepository::new(pool);

    let admin = repo
        .find_by_email(&user.email)
        .await
        .expect("query")
        .expect("admin exists");

    assert!(admin.role_name.is_none());
    assert!(admin.permissions.is_empty());
}

#[tokio::test]
#[ignore]
async fn test_find_active_skips_disabled_accounts() {
    let pool = create_test_pool().await;
    let role = create_role(&pool, &[("dashboard", "manage")]).await;
    let active = create_user(
        &pool,
        Some(role),
        true,
        Some(json!({ "emailSystemErrors": false })),
    )
    .await;
    let disabled = create_user(&pool, Some(role), false, None).await;
    let repo = AdminRepository::new(pool);

    let admins = repo
        .find_active_with_role_and_preferences()
        .await
        .expect("query");

    let found = admins
        .iter()
        .find(|a| a.id == active.id)
        .expect("active admin listed");
    assert_eq!(found.permissions, vec![Permission::new("dashboard", "manage")]);
    assert_eq!(
        found
            .notification_preferences
            .as_ref()
            .and_then(|p| p.email_system_errors),
        Some(false)
    );
    assert!(admins.iter().all(|a| a.id != disabled.id));
}

#[tokio::test]
#[ignore]
async fn test_preferences_round_trip() {
    let pool = create_test_pool().await;
    let user = create_user(&pool, None, true, None).await;
    let repo = AdminRepository::new(pool);

    assert_eq!(repo.get_preferences(user.id).await.expect("query"), None);

    let prefs = AdminNotificationPreferences {
        email_backups: Some(false),
        ..Default::default()
    };
    repo.update_preferences(user.id, &prefs).await.expect("update");

    assert_eq!(repo.get_preferences(user.id).await.expect("query"), Some(prefs));
}

#[tokio::test]
#[ignore]
async fn test_preferences_of_unknown_user_are_not_found() {
    let pool = create_test_pool().await;
    let repo = AdminRepository::new(pool);
    let missing = Uuid::new_v4();

    let err = repo.get_preferences(missing).await.unwrap_err();
    assert!(err.is_not_found());

    let err = repo
        .update_preferences(missing, &AdminNotificationPreferences::default())
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}
