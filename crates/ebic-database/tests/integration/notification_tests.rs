use serde_json::json;
use uuid::Uuid;

use ebic_core::types::pagination::PageRequest;
use ebic_database::repositories::{AdminNotificationRepository, NotificationFilter};
use ebic_entity::notification::{NewAdminNotification, NotificationPriority, NotificationType};

use super::common::{create_test_pool, create_user};

fn row(user_id: Uuid, kind: NotificationType, priority: NotificationPriority) -> NewAdminNotification {
    NewAdminNotification {
        user_id,
        notification_type: kind,
        title: "Title".to_string(),
        message: "Message".to_string(),
        priority,
        action_url: Some("/admin/dashboard".to_string()),
        data: json!({ "source": "test" }),
    }
}

#[tokio::test]
#[ignore]
async fn test_create_and_filter_inbox() {
    let pool = create_test_pool().await;
    let user = create_user(&pool, None, true, None).await;
    let repo = AdminNotificationRepository::new(pool);

    let error = repo
        .create(&row(user.id, NotificationType::SystemError, NotificationPriority::Urgent))
        .await
        .expect("create");
    repo.create(&row(user.id, NotificationType::NewCollaborator, NotificationPriority::High))
        .await
        .expect("create");
    repo.create(&row(user.id, NotificationType::NewInnovator, NotificationPriority::High))
        .await
        .expect("create");

    assert_eq!(error.notification_type, "SYSTEM_ERROR");
    assert!(!error.is_read);
    assert_eq!(error.data["source"], "test");

    let page = PageRequest::default();
    let all = repo
        .find_by_user(user.id, &NotificationFilter::default(), &page)
        .await
        .expect("list");
    assert_eq!(all.total_items, 3);

    let by_type = NotificationFilter {
        notification_type: Some("SYSTEM_ERROR".to_string()),
        ..Default::default()
    };
    let errors = repo.find_by_user(user.id, &by_type, &page).await.expect("list");
    assert_eq!(errors.total_items, 1);
    assert_eq!(errors.items[0].id, error.id);

    let by_priority = NotificationFilter {
        priority: Some(NotificationPriority::High),
        ..Default::default()
    };
    let high = repo.find_by_user(user.id, &by_priority, &page).await.expect("list");
    assert_eq!(high.total_items, 2);

    repo.mark_read(error.id, user.id).await.expect("mark");
    let unread = NotificationFilter {
        is_read: Some(false),
        ..Default::default()
    };
    let unread_page = repo.find_by_user(user.id, &unread, &page).await.expect("list");
    assert_eq!(unread_page.total_items, 2);
    assert!(unread_page.items.iter().all(|n| n.id != error.id));
}

#[tokio::test]
#[ignore]
async fn test_pagination_is_newest_first() {
    let pool = create_test_pool().await;
    let user = create_user(&pool, None, true, None).await;
    let repo = AdminNotificationRepository::new(pool);

    for _ in 0..3 {
        repo.create(&row(user.id, NotificationType::RoleChanged, NotificationPriority::Normal))
            .await
            .expect("create");
    }

    let first = repo
        .find_by_user(user.id, &NotificationFilter::default(), &PageRequest::new(1, 2))
        .await
        .expect("list");
    assert_eq!(first.items.len(), 2);
    assert_eq!(first.total_pages, 2);
    assert!(first.items[0].created_at >= first.items[1].created_at);
}

#[tokio::test]
#[ignore]
async fn test_mutations_are_scoped_to_owner() {
    let pool = create_test_pool().await;
    let owner = create_user(&pool, None, true, None).await;
    let other = create_user(&pool, None, true, None).await;
    let repo = AdminNotificationRepository::new(pool);

    let n = repo
        .create(&row(owner.id, NotificationType::SecurityAlert, NotificationPriority::Urgent))
        .await
        .expect("create");

    assert!(repo.mark_read(n.id, other.id).await.expect("mark").is_none());
    assert!(!repo.delete(n.id, other.id).await.expect("delete"));
    assert_eq!(repo.count_unread(owner.id).await.expect("count"), 1);

    let read = repo
        .mark_read(n.id, owner.id)
        .await
        .expect("mark")
        .expect("owned row");
    assert!(read.is_read);
    assert!(read.read_at.is_some());
    assert_eq!(repo.count_unread(owner.id).await.expect("count"), 0);

    assert!(repo.delete(n.id, owner.id).await.expect("delete"));
    assert!(!repo.delete(n.id, owner.id).await.expect("delete"));
}

#[tokio::test]
#[ignore]
async fn test_mark_all_read_counts_only_unread_rows() {
    let pool = create_test_pool().await;
    let user = create_user(&pool, None, true, None).await;
    let repo = AdminNotificationRepository::new(pool);

    let first = repo
        .create(&row(user.id, NotificationType::RoleChanged, NotificationPriority::Low))
        .await
        .expect("create");
    repo.create(&row(user.id, NotificationType::RoleChanged, NotificationPriority::Low))
        .await
        .expect("create");
    repo.mark_read(first.id, user.id).await.expect("mark");

    assert_eq!(repo.mark_all_read(user.id).await.expect("mark all"), 1);
    assert_eq!(repo.count_unread(user.id).await.expect("count"), 0);
}
